use installment_core::schedule::rounding::ceil_to_multiple;
use installment_core::schedule::{split_installments, ScheduleInput, SplitPlan};
use installment_core::TRIMESTER_FEE;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

fn waiver_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        prop::sample::select(vec![
            Decimal::new(0, 0),
            Decimal::new(25, 2),
            Decimal::new(5, 1),
            Decimal::new(1, 0),
        ]),
        // Any fraction in 0..=1 with two decimal places
        (0i64..=100).prop_map(|p| Decimal::new(p, 2)),
    ]
}

fn unit_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        prop::sample::select(vec![Decimal::from(500), Decimal::from(1_000)]),
        (1i64..=5_000).prop_map(Decimal::from),
    ]
}

proptest! {
    #[test]
    fn prop_installments_sum_to_total(
        total in 6_500i64..=1_000_000,
        unit in unit_strategy(),
        waiver in waiver_strategy(),
    ) {
        let s = split_installments(&ScheduleInput {
            total_amount: Decimal::from(total),
            rounding_unit: unit,
            waiver_fraction: waiver,
        });
        prop_assert_eq!(s.installment_1 + s.installment_2 + s.installment_3, s.total);
    }

    #[test]
    fn prop_total_is_payable(
        total in 6_500i64..=1_000_000,
        unit in unit_strategy(),
        waiver in waiver_strategy(),
    ) {
        let s = split_installments(&ScheduleInput {
            total_amount: Decimal::from(total),
            rounding_unit: unit,
            waiver_fraction: waiver,
        });
        let tuition = Decimal::from(total) - TRIMESTER_FEE;
        let waived = (tuition * waiver)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(s.total, tuition - waived + TRIMESTER_FEE);
    }

    #[test]
    fn prop_full_waiver_is_fee_only(
        total in 6_500i64..=1_000_000,
        unit in unit_strategy(),
    ) {
        let s = split_installments(&ScheduleInput {
            total_amount: Decimal::from(total),
            rounding_unit: unit,
            waiver_fraction: Decimal::ONE,
        });
        prop_assert_eq!(s.plan, SplitPlan::FullWaiver);
        prop_assert_eq!(s.installments(), [Decimal::ZERO, Decimal::ZERO, TRIMESTER_FEE]);
        prop_assert_eq!(s.total, TRIMESTER_FEE);
    }

    #[test]
    fn prop_credits_truncate(total in 6_500i64..=1_000_000) {
        let s = split_installments(&ScheduleInput {
            total_amount: Decimal::from(total),
            rounding_unit: Decimal::from(500),
            waiver_fraction: Decimal::ZERO,
        });
        prop_assert_eq!(s.credits, Decimal::from((total - 6_500) / 6_500));
    }

    #[test]
    fn prop_stock_units_keep_installments_non_negative(
        total in 6_500i64..=1_000_000,
        unit in prop::sample::select(vec![500i64, 1_000]),
        waiver in waiver_strategy(),
    ) {
        let s = split_installments(&ScheduleInput {
            total_amount: Decimal::from(total),
            rounding_unit: Decimal::from(unit),
            waiver_fraction: waiver,
        });
        for amount in s.installments() {
            prop_assert!(amount >= Decimal::ZERO, "negative installment {}", amount);
        }
    }

    #[test]
    fn prop_ceil_to_multiple_idempotent(x in 0i64..=2_000_000, unit in 1i64..=10_000) {
        let (x, unit) = (Decimal::from(x), Decimal::from(unit));
        let once = ceil_to_multiple(x, unit);
        prop_assert_eq!(ceil_to_multiple(once, unit), once);
        prop_assert!(once >= x);
        prop_assert!(once - x < unit);
    }
}
