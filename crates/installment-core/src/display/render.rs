use fixed_decimal::FixedDecimal;
use icu::decimal::{options::FixedDecimalFormatterOptions, FixedDecimalFormatter};
use icu::locid::locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use writeable::Writeable;

use crate::schedule::InstallmentSchedule;
use crate::types::Money;

/// Nominal share shown beside each installment heading.
const NOMINAL_SHARES: [&str; 3] = ["40%", "30%", "30%"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentLine {
    pub title: String,
    pub share: String,
    pub amount: String,
}

/// Display strings for one computed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDisplay {
    pub credit_line: String,
    pub fee_line: String,
    pub waiver_line: String,
    pub installments: Vec<InstallmentLine>,
    pub total_line: String,
}

/// Turn a schedule into the labels a front end shows.
pub fn render_schedule(schedule: &InstallmentSchedule) -> ScheduleDisplay {
    let installments = schedule
        .installments()
        .iter()
        .zip(NOMINAL_SHARES)
        .enumerate()
        .map(|(idx, (amount, share))| InstallmentLine {
            title: format!("Installment {}", idx + 1),
            share: share.to_string(),
            amount: format_bdt(*amount),
        })
        .collect();

    ScheduleDisplay {
        credit_line: format!(
            "Credits: {} ({} Tk)",
            schedule.credits.normalize(),
            schedule.credit_value.normalize()
        ),
        fee_line: format!("Trimester Fee: {} Tk", schedule.trimester_fee.normalize()),
        waiver_line: format!("Waiver Applied: {} Tk", schedule.waived_amount.normalize()),
        installments,
        total_line: format_bdt(schedule.total),
    }
}

/// Format an amount as `12,345 BDT`, grouped the way the `en` locale groups digits.
pub fn format_bdt(amount: Money) -> String {
    let plain = amount.normalize().to_string();
    let number = group_digits(&plain).unwrap_or(plain);
    format!("{number} BDT")
}

fn group_digits(plain: &str) -> Option<String> {
    let formatter = FixedDecimalFormatter::try_new(
        &locale!("en").into(),
        FixedDecimalFormatterOptions::default(),
    )
    .ok()?;
    let fixed = FixedDecimal::from_str(plain).ok()?;
    Some(formatter.format(&fixed).write_to_string().into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
