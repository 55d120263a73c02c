use serde_json::Value;

use installment_core::policy::InputPolicy;

pub fn run_waivers(policy: &InputPolicy) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(&policy.waivers)?)
}

pub fn run_policy(policy: &InputPolicy) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(policy)?)
}
