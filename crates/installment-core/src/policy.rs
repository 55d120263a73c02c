use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleInput;
use crate::{types::*, InstallmentError, InstallmentResult};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverOption {
    pub label: String,
    pub fraction: Rate,
}

/// Range and choices accepted from a front end before a schedule is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPolicy {
    pub min_amount: Money,
    pub max_amount: Money,
    pub rounding_units: Vec<Money>,
    pub waivers: Vec<WaiverOption>,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min_amount: TRIMESTER_FEE,
            max_amount: dec!(1_000_000),
            rounding_units: vec![dec!(500), dec!(1_000)],
            waivers: vec![
                WaiverOption {
                    label: "No Waiver".into(),
                    fraction: dec!(0),
                },
                WaiverOption {
                    label: "25% Waiver".into(),
                    fraction: dec!(0.25),
                },
                WaiverOption {
                    label: "50% Waiver".into(),
                    fraction: dec!(0.5),
                },
                WaiverOption {
                    label: "100% Waiver".into(),
                    fraction: dec!(1),
                },
            ],
        }
    }
}

impl InputPolicy {
    /// Reject a policy that would admit inputs outside the calculation domain.
    pub fn validate(&self) -> InstallmentResult<()> {
        if self.min_amount < TRIMESTER_FEE {
            return Err(InstallmentError::InvalidPolicy(format!(
                "min_amount {} is below the trimester fee {TRIMESTER_FEE}",
                self.min_amount
            )));
        }
        if self.min_amount > self.max_amount {
            return Err(InstallmentError::InvalidPolicy(format!(
                "min_amount {} exceeds max_amount {}",
                self.min_amount, self.max_amount
            )));
        }
        if self.rounding_units.is_empty() {
            return Err(InstallmentError::InvalidPolicy(
                "at least one rounding unit is required".into(),
            ));
        }
        if let Some(bad) = self
            .rounding_units
            .iter()
            .find(|u| **u <= Decimal::ZERO || !u.fract().is_zero())
        {
            return Err(InstallmentError::InvalidPolicy(format!(
                "rounding unit {bad} must be a positive whole number"
            )));
        }
        if self.waivers.is_empty() {
            return Err(InstallmentError::InvalidPolicy(
                "at least one waiver option is required".into(),
            ));
        }
        if let Some(bad) = self
            .waivers
            .iter()
            .find(|w| w.fraction < Decimal::ZERO || w.fraction > Decimal::ONE)
        {
            return Err(InstallmentError::InvalidPolicy(format!(
                "waiver '{}' has fraction {} outside 0..=1",
                bad.label, bad.fraction
            )));
        }
        Ok(())
    }

    /// Check an input against the configured range and choices.
    pub fn check(&self, input: &ScheduleInput) -> InstallmentResult<()> {
        if input.total_amount < self.min_amount || input.total_amount > self.max_amount {
            return Err(InstallmentError::InvalidInput {
                field: "total_amount".into(),
                reason: format!(
                    "Total amount must be between {} and {}.",
                    self.min_amount, self.max_amount
                ),
            });
        }
        if !self.rounding_units.contains(&input.rounding_unit) {
            return Err(InstallmentError::InvalidInput {
                field: "rounding_unit".into(),
                reason: format!("Rounding unit must be one of {}.", self.unit_list()),
            });
        }
        if !self
            .waivers
            .iter()
            .any(|w| w.fraction == input.waiver_fraction)
        {
            return Err(InstallmentError::InvalidInput {
                field: "waiver_fraction".into(),
                reason: format!(
                    "Waiver must be one of {}.",
                    self.waivers
                        .iter()
                        .map(|w| w.fraction.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Resolve a waiver label such as `"25% Waiver"`, ignoring case.
    pub fn waiver_by_label(&self, label: &str) -> Option<Rate> {
        let wanted = label.trim();
        self.waivers
            .iter()
            .find(|w| w.label.eq_ignore_ascii_case(wanted))
            .map(|w| w.fraction)
    }

    /// The first configured rounding unit.
    pub fn default_rounding_unit(&self) -> Option<Money> {
        self.rounding_units.first().copied()
    }

    fn unit_list(&self) -> String {
        self.rounding_units
            .iter()
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
