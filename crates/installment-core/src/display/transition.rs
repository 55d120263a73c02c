use rust_decimal::{Decimal, MathematicalOps};

use crate::types::Money;

/// Length of a count-up from the old displayed amount to the new one.
pub const TRANSITION_DURATION_MS: u64 = 500;

/// Ease-out cubic: fast start, settling into the target. `t` is clamped to 0..=1.
pub fn ease_out_cubic(t: Decimal) -> Decimal {
    let t = t.clamp(Decimal::ZERO, Decimal::ONE);
    Decimal::ONE - (Decimal::ONE - t).powi(3)
}

/// Intermediate whole amounts shown while moving from `from` to `to`.
///
/// The last frame is always exactly `to`; zero frames yields only `to`.
pub fn transition_frames(from: Money, to: Money, frames: usize) -> Vec<Money> {
    if frames == 0 {
        return vec![to];
    }

    let span = to - from;
    let steps = Decimal::from(frames as u64);
    (1..=frames)
        .map(|i| {
            if i == frames {
                return to;
            }
            let t = Decimal::from(i as u64) / steps;
            (from + span * ease_out_cubic(t)).trunc()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
