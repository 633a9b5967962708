use serde_json::Value;

use super::{format_value, result_fields};
use crate::config::DisplayConfig;

/// Priority list of key output fields
const PRIORITY_KEYS: [&str; 2] = ["call_price", "call_delta"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value, config: &DisplayConfig) {
    println!("{}", render_minimal(value, config));
}

fn render_minimal(value: &Value, config: &DisplayConfig) -> String {
    let fields = result_fields(value);

    for key in PRIORITY_KEYS {
        if let Some((k, val)) = fields.iter().find(|(k, v)| *k == key && !v.is_null()) {
            return format_value(k, val, config);
        }
    }

    // Fall back to first field
    match fields.first() {
        Some((key, val)) => format!("{}: {}", key, format_value(key, val, config)),
        None => value.to_string(),
    }
}
