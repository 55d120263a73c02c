use installment_core::policy::InputPolicy;

use crate::input;

/// Load the input policy from `path`, or fall back to the built-in one.
pub fn load_policy(path: Option<&str>) -> Result<InputPolicy, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(InputPolicy::default());
    };

    let policy: InputPolicy = input::file::read_structured(path)?;
    policy.validate()?;
    tracing::info!(
        path,
        min_amount = %policy.min_amount,
        max_amount = %policy.max_amount,
        units = policy.rounding_units.len(),
        waivers = policy.waivers.len(),
        "Loaded input policy"
    );
    Ok(policy)
}
