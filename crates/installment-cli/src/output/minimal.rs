use serde_json::Value;

use super::{format_value, schedule_from};

/// Print just the answer: the three installments, space separated.
///
/// Anything that is not a schedule prints one line per item, or the first
/// field of an object.
pub fn print_minimal(value: &Value) {
    if let Some(schedule) = schedule_from(value) {
        let [first, second, third] = schedule.installments();
        println!("{first} {second} {third}");
        return;
    }

    match value {
        Value::Array(items) => {
            for item in items {
                match item.get("label") {
                    Some(label) => println!("{}", format_value(label)),
                    None => println!("{}", format_value(item)),
                }
            }
        }
        Value::Object(map) => {
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
}
