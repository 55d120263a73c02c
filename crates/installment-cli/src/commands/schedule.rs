use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use installment_core::policy::InputPolicy;
use installment_core::schedule::splitter::{self, ScheduleInput};

use crate::input;

/// Arguments for an installment schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Total billed amount in BDT, trimester fee included
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Rounding unit for the first two installments (defaults to the policy's first unit)
    #[arg(long = "round-to")]
    pub round_to: Option<Decimal>,

    /// Waiver as a fraction of tuition (0.25 = 25%)
    #[arg(long, conflicts_with = "waiver_label")]
    pub waiver: Option<Decimal>,

    /// Waiver by policy label, e.g. "25% Waiver"
    #[arg(long)]
    pub waiver_label: Option<String>,

    /// Skip the input policy; domain checks still apply
    #[arg(long)]
    pub unchecked: bool,
}

pub fn run_schedule(
    args: ScheduleArgs,
    policy: &InputPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if args.amount.is_some() {
        input_from_flags(&args, policy)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--amount is required (or provide --input or JSON on stdin)".into());
    };

    if args.unchecked {
        tracing::debug!("input policy skipped");
    } else {
        policy.check(&schedule_input)?;
    }

    let result = splitter::compute_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}

fn input_from_flags(
    args: &ScheduleArgs,
    policy: &InputPolicy,
) -> Result<ScheduleInput, Box<dyn std::error::Error>> {
    let total_amount = args.amount.ok_or("--amount is required (or provide --input)")?;

    let rounding_unit = match args.round_to {
        Some(unit) => unit,
        None => policy
            .default_rounding_unit()
            .ok_or("--round-to is required: the policy lists no rounding units")?,
    };

    let waiver_fraction = match (&args.waiver, &args.waiver_label) {
        (Some(fraction), _) => *fraction,
        (None, Some(label)) => policy
            .waiver_by_label(label)
            .ok_or_else(|| format!("Unknown waiver label '{label}' (see `tic waivers`)"))?,
        (None, None) => Decimal::ZERO,
    };

    Ok(ScheduleInput {
        total_amount,
        rounding_unit,
        waiver_fraction,
    })
}
