use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::rounding::{ceil_to_multiple, div_trunc, round_half_away, round_to_nearest_multiple};
use crate::{types::*, InstallmentError, InstallmentResult};

/// Floor on the first installment when less than half the tuition is waived.
const FIRST_INSTALLMENT_SHARE: Rate = dec!(0.4);

/// Waiver at or above which the first installment is skipped.
const DEFERRAL_THRESHOLD: Rate = dec!(0.5);

/// Ceiling on amounts and rounding units; keeps every intermediate sum well inside Decimal range.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Total billed amount for the trimester, trimester fee included.
    pub total_amount: Money,
    /// Granularity the first two installments are rounded to.
    pub rounding_unit: Money,
    /// Share of tuition forgiven, 0 to 1.
    pub waiver_fraction: Rate,
}

/// Which split rule produced the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPlan {
    /// Whole tuition waived; only the trimester fee is due, in the last installment.
    FullWaiver,
    /// Half or more waived; nothing up front, payable split across the last two.
    DeferredSplit,
    /// Under half waived; at least 40% up front, remainder split across the last two.
    FrontLoaded,
}

impl std::fmt::Display for SplitPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SplitPlan::FullWaiver => "full_waiver",
            SplitPlan::DeferredSplit => "deferred_split",
            SplitPlan::FrontLoaded => "front_loaded",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub installment_1: Money,
    pub installment_2: Money,
    pub installment_3: Money,
    pub total: Money,
    pub plan: SplitPlan,
    pub tuition: Money,
    pub trimester_fee: Money,
    pub waived_amount: Money,
    pub payable: Money,
    /// Whole credits covered by the tuition.
    pub credits: Decimal,
    /// `credits` priced at the per-credit fee.
    pub credit_value: Money,
}

impl InstallmentSchedule {
    pub fn installments(&self) -> [Money; 3] {
        [self.installment_1, self.installment_2, self.installment_3]
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split the payable amount into three installments.
///
/// Pure and unchecked: inputs outside the domain (`total_amount` below the
/// trimester fee, non-positive `rounding_unit`, waiver outside 0..=1) give
/// meaningless numbers rather than an error. In the front-loaded plan a
/// rounding unit that is large relative to the payable amount can push
/// `installment_3` below zero; that result is returned as-is.
pub fn split_installments(input: &ScheduleInput) -> InstallmentSchedule {
    let unit = input.rounding_unit.normalize();
    let waiver = input.waiver_fraction;

    let tuition = (input.total_amount - TRIMESTER_FEE).normalize();
    let waived_amount = round_half_away(tuition * waiver);
    let payable = tuition - waived_amount + TRIMESTER_FEE;

    let credits = div_trunc(tuition, TRIMESTER_FEE);
    let credit_value = credits * TRIMESTER_FEE;

    let (plan, installments, total) = if waiver >= Decimal::ONE {
        // Fee is hard-coded here rather than taken from `payable`.
        (
            SplitPlan::FullWaiver,
            [Decimal::ZERO, Decimal::ZERO, TRIMESTER_FEE],
            TRIMESTER_FEE,
        )
    } else if waiver >= DEFERRAL_THRESHOLD {
        let half_payment = div_trunc(payable, Decimal::TWO);
        let second = ceil_to_multiple(half_payment, unit);
        let third = payable - second;
        (
            SplitPlan::DeferredSplit,
            [Decimal::ZERO, second, third],
            payable,
        )
    } else {
        let min_first = (payable * FIRST_INSTALLMENT_SHARE).ceil();
        let first = ceil_to_multiple(min_first, unit);
        let remainder = payable - first;
        let half_remainder = div_trunc(remainder, Decimal::TWO);
        let second = round_to_nearest_multiple(half_remainder, unit);
        let third = payable - first - second;
        (SplitPlan::FrontLoaded, [first, second, third], payable)
    };

    InstallmentSchedule {
        installment_1: installments[0],
        installment_2: installments[1],
        installment_3: installments[2],
        total,
        plan,
        tuition,
        trimester_fee: TRIMESTER_FEE,
        waived_amount,
        payable,
        credits,
        credit_value,
    }
}

/// Validate the domain preconditions, split the payable amount, and wrap the
/// schedule in the standard output envelope.
///
/// Negative installments are reported as warnings, never clamped.
pub fn compute_schedule(
    input: &ScheduleInput,
) -> InstallmentResult<ComputationOutput<InstallmentSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let schedule = split_installments(input);
    tracing::debug!(
        plan = ?schedule.plan,
        payable = %schedule.payable,
        "installment schedule computed"
    );

    for (idx, amount) in schedule.installments().iter().enumerate() {
        if *amount < Decimal::ZERO {
            let msg = format!(
                "Installment {} is negative ({amount}): rounding unit {} is too coarse for a payable amount of {}",
                idx + 1,
                input.rounding_unit,
                schedule.payable,
            );
            tracing::warn!("{msg}");
            warnings.push(msg);
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "trimester_fee": TRIMESTER_FEE.to_string(),
        "rounding_unit": input.rounding_unit.to_string(),
        "waiver_fraction": input.waiver_fraction.to_string(),
        "first_installment_floor": FIRST_INSTALLMENT_SHARE.to_string(),
        "waiver_rounding": "nearest, halves away from zero",
    });

    Ok(with_metadata(
        "Three-installment tuition split (trimester fee never waived)",
        &assumptions,
        warnings,
        elapsed,
        schedule,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &ScheduleInput) -> InstallmentResult<()> {
    if input.total_amount < TRIMESTER_FEE {
        return Err(InstallmentError::InvalidInput {
            field: "total_amount".into(),
            reason: format!("Total amount must be at least the trimester fee ({TRIMESTER_FEE})."),
        });
    }
    if input.total_amount > MAX_AMOUNT {
        return Err(InstallmentError::InvalidInput {
            field: "total_amount".into(),
            reason: format!("Total amount must not exceed {MAX_AMOUNT}."),
        });
    }
    if !input.total_amount.fract().is_zero() {
        return Err(InstallmentError::InvalidInput {
            field: "total_amount".into(),
            reason: "Total amount must be a whole number of taka.".into(),
        });
    }
    if input.rounding_unit <= Decimal::ZERO {
        return Err(InstallmentError::InvalidInput {
            field: "rounding_unit".into(),
            reason: "Rounding unit must be positive.".into(),
        });
    }
    if input.rounding_unit > MAX_AMOUNT {
        return Err(InstallmentError::InvalidInput {
            field: "rounding_unit".into(),
            reason: format!("Rounding unit must not exceed {MAX_AMOUNT}."),
        });
    }
    if !input.rounding_unit.fract().is_zero() {
        return Err(InstallmentError::InvalidInput {
            field: "rounding_unit".into(),
            reason: "Rounding unit must be a whole number of taka.".into(),
        });
    }
    if input.waiver_fraction < Decimal::ZERO || input.waiver_fraction > Decimal::ONE {
        return Err(InstallmentError::InvalidInput {
            field: "waiver_fraction".into(),
            reason: "Waiver fraction must be between 0 and 1.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(total: Decimal, unit: Decimal, waiver: Decimal) -> ScheduleInput {
        ScheduleInput {
            total_amount: total,
            rounding_unit: unit,
            waiver_fraction: waiver,
        }
    }

    #[test]
    fn test_no_waiver_front_loaded() {
        let s = split_installments(&input(dec!(50_000), dec!(500), dec!(0)));
        // payable = 43_500 + 6_500 = 50_000; 40% = 20_000
        assert_eq!(s.plan, SplitPlan::FrontLoaded);
        assert_eq!(s.payable, dec!(50_000));
        assert_eq!(s.installments(), [dec!(20_000), dec!(15_000), dec!(15_000)]);
        assert_eq!(s.total, dec!(50_000));
    }

    #[test]
    fn test_quarter_waiver() {
        let s = split_installments(&input(dec!(50_000), dec!(500), dec!(0.25)));
        // waived = 10_875; payable = 39_125; ceil(15_650) -> 16_000
        // remainder 23_125 / 2 = 11_562 -> nearest 500 = 11_500
        assert_eq!(s.waived_amount, dec!(10_875));
        assert_eq!(s.payable, dec!(39_125));
        assert_eq!(s.installments(), [dec!(16_000), dec!(11_500), dec!(11_625)]);
    }

    #[test]
    fn test_half_waiver_deferred() {
        let s = split_installments(&input(dec!(50_000), dec!(500), dec!(0.5)));
        assert_eq!(s.plan, SplitPlan::DeferredSplit);
        assert_eq!(s.waived_amount, dec!(21_750));
        assert_eq!(s.payable, dec!(28_250));
        assert_eq!(s.installments(), [dec!(0), dec!(14_500), dec!(13_750)]);
        assert_eq!(s.total, dec!(28_250));
    }

    #[test]
    fn test_full_waiver_hard_coded() {
        let s = split_installments(&input(dec!(50_000), dec!(1_000), dec!(1)));
        assert_eq!(s.plan, SplitPlan::FullWaiver);
        assert_eq!(s.installments(), [dec!(0), dec!(0), dec!(6_500)]);
        assert_eq!(s.total, dec!(6_500));
    }

    #[test]
    fn test_credits_truncate() {
        let s = split_installments(&input(dec!(50_000), dec!(500), dec!(0)));
        // 43_500 / 6_500 = 6.69
        assert_eq!(s.credits, dec!(6));
        assert_eq!(s.credit_value, dec!(39_000));
    }

    #[test]
    fn test_waiver_rounds_half_away_from_zero() {
        // tuition = 43_501, half = 21_750.5
        let s = split_installments(&input(dec!(50_001), dec!(500), dec!(0.5)));
        assert_eq!(s.waived_amount, dec!(21_751));
        assert_eq!(s.payable, dec!(28_250));
    }

    #[test]
    fn test_coarse_unit_leaves_negative_third() {
        let s = split_installments(&input(dec!(6_500), dec!(10_000), dec!(0)));
        assert_eq!(s.installments(), [dec!(10_000), dec!(0), dec!(-3_500)]);
        assert_eq!(s.total, dec!(6_500));
    }

    #[test]
    fn test_compute_schedule_warns_on_negative_installment() {
        let out = compute_schedule(&input(dec!(6_500), dec!(10_000), dec!(0))).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("Installment 3"));
        assert_eq!(out.result.installment_3, dec!(-3_500));
    }

    #[test]
    fn test_compute_schedule_no_warnings_in_normal_case() {
        let out = compute_schedule(&input(dec!(50_000), dec!(500), dec!(0.25))).unwrap();
        assert!(out.warnings.is_empty());
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_amount_below_fee_rejected() {
        let err = compute_schedule(&input(dec!(6_499), dec!(500), dec!(0))).unwrap_err();
        match err {
            InstallmentError::InvalidInput { field, .. } => assert_eq!(field, "total_amount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_amount_rejected() {
        let err = compute_schedule(&input(dec!(50_000.5), dec!(500), dec!(0))).unwrap_err();
        match err {
            InstallmentError::InvalidInput { field, .. } => assert_eq!(field, "total_amount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_unit_rejected() {
        let err = compute_schedule(&input(dec!(50_000), dec!(0), dec!(0))).unwrap_err();
        match err {
            InstallmentError::InvalidInput { field, .. } => assert_eq!(field, "rounding_unit"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_unit_rejected_not_panicking() {
        let err = compute_schedule(&input(dec!(50_000), Decimal::MAX, dec!(0))).unwrap_err();
        match err {
            InstallmentError::InvalidInput { field, .. } => assert_eq!(field, "rounding_unit"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_amount_rejected_not_panicking() {
        let err = compute_schedule(&input(Decimal::MAX, dec!(500), dec!(0.5))).unwrap_err();
        match err {
            InstallmentError::InvalidInput { field, .. } => assert_eq!(field, "total_amount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_largest_accepted_inputs_compute() {
        let out = compute_schedule(&input(MAX_AMOUNT, MAX_AMOUNT, dec!(0))).unwrap();
        let s = &out.result;
        assert_eq!(s.installment_1 + s.installment_2 + s.installment_3, s.total);
    }

    #[test]
    fn test_plan_display_matches_serde_name() {
        for plan in [SplitPlan::FullWaiver, SplitPlan::DeferredSplit, SplitPlan::FrontLoaded] {
            let json = serde_json::to_value(plan).unwrap();
            assert_eq!(json, plan.to_string());
        }
    }

    #[test]
    fn test_waiver_out_of_range_rejected() {
        for waiver in [dec!(-0.1), dec!(1.01)] {
            let err = compute_schedule(&input(dec!(50_000), dec!(500), waiver)).unwrap_err();
            match err {
                InstallmentError::InvalidInput { field, .. } => {
                    assert_eq!(field, "waiver_fraction")
                }
                other => panic!("Expected InvalidInput, got {other:?}"),
            }
        }
    }
}
