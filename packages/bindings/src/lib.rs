use napi::Result as NapiResult;
use napi_derive::napi;

use installment_core::display::render_schedule as render;
use installment_core::policy::InputPolicy;
use installment_core::schedule::{compute_schedule as compute, InstallmentSchedule, ScheduleInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_schedule(input_json: String) -> NapiResult<String> {
    let input: ScheduleInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = compute(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[napi]
pub fn render_schedule(schedule_json: String) -> NapiResult<String> {
    let schedule: InstallmentSchedule =
        serde_json::from_str(&schedule_json).map_err(to_napi_error)?;
    serde_json::to_string(&render(&schedule)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[napi]
pub fn default_policy() -> NapiResult<String> {
    serde_json::to_string(&InputPolicy::default()).map_err(to_napi_error)
}
