use serde_json::Value;
use std::io;

use super::{format_value, schedule_from};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(schedule) = schedule_from(value) {
        let _ = wtr.write_record(["installment", "amount"]);
        for (idx, amount) in schedule.installments().iter().enumerate() {
            let _ = wtr.write_record([(idx + 1).to_string(), amount.to_string()]);
        }
        let _ = wtr.write_record(["total".to_string(), schedule.total.to_string()]);
    } else {
        match value {
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_value(val)]);
                }
            }
            Value::Array(arr) => write_array_csv(&mut wtr, arr),
            _ => {
                let _ = wtr.write_record([&format_value(value)]);
            }
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for item in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(*h).map(format_value).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}
