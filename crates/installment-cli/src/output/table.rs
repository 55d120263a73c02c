use installment_core::display::{format_bdt, render_schedule};
use installment_core::schedule::InstallmentSchedule;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, schedule_from, warnings_of};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(schedule) = schedule_from(value) {
        print_schedule(&schedule);
        print_notes(value);
        return;
    }

    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
            println!("{}", Table::from(builder));
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_schedule(schedule: &InstallmentSchedule) {
    let display = render_schedule(schedule);

    let mut builder = Builder::default();
    builder.push_record(["Installment", "Share", "Amount"]);
    for line in &display.installments {
        builder.push_record([line.title.as_str(), line.share.as_str(), line.amount.as_str()]);
    }
    builder.push_record(["Total", "", display.total_line.as_str()]);
    println!("{}", Table::from(builder));

    let mut details = Builder::default();
    details.push_record(["Field", "Value"]);
    details.push_record(["Plan".to_string(), schedule.plan.to_string()]);
    details.push_record(["Tuition".to_string(), format_bdt(schedule.tuition)]);
    details.push_record(["Trimester fee".to_string(), format_bdt(schedule.trimester_fee)]);
    details.push_record(["Waived".to_string(), format_bdt(schedule.waived_amount)]);
    details.push_record(["Payable".to_string(), format_bdt(schedule.payable)]);
    details.push_record(["Credits".to_string(), display.credit_line]);
    println!("\n{}", Table::from(details));
}

fn print_notes(value: &Value) {
    let warnings = warnings_of(value);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in warnings {
            println!("  - {}", w);
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", format_value(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(h.as_str()).map(format_value).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
