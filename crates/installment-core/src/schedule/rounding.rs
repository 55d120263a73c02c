use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

// ---------------------------------------------------------------------------
// Whole-number arithmetic on Decimal
// ---------------------------------------------------------------------------

/// Integer division, truncating toward zero.
pub fn div_trunc(numerator: Money, denominator: Money) -> Money {
    (numerator / denominator).trunc()
}

/// Round to the nearest whole number, halves away from zero.
pub fn round_half_away(value: Decimal) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round `value` up to the next multiple of `unit`: `((x + u - 1) / u) * u`.
///
/// Whole-number semantics throughout; `unit` must be positive.
pub fn ceil_to_multiple(value: Money, unit: Money) -> Money {
    div_trunc(value + unit - Decimal::ONE, unit) * unit
}

/// Round `value` to the nearest multiple of `unit`: `((x + u / 2) / u) * u`,
/// with `u / 2` itself truncated.
pub fn round_to_nearest_multiple(value: Money, unit: Money) -> Money {
    let half_unit = div_trunc(unit, Decimal::TWO);
    div_trunc(value + half_unit, unit) * unit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
