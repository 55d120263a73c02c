pub mod card;
pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use installment_core::schedule::InstallmentSchedule;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, animate: bool) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Card => card::print_card(value, animate),
    }
}

/// Recover the typed schedule from a `schedule` command envelope.
fn schedule_from(value: &Value) -> Option<InstallmentSchedule> {
    let result = value.as_object()?.get("result")?;
    serde_json::from_value(result.clone()).ok()
}

fn warnings_of(value: &Value) -> Vec<&str> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|ws| ws.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
