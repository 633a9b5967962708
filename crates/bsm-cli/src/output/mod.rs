pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use serde_json::{Map, Value};

use crate::config::DisplayConfig;
use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, config: &DisplayConfig) {
    let mut value = value.clone();
    if config.theta_per_day {
        scale_theta(&mut value, 1.0 / 365.0);
    }

    match format {
        OutputFormat::Json => json::print_json(&value),
        OutputFormat::Table => table::print_table(&value, config),
        OutputFormat::Csv => csv_out::print_csv(&value, config),
        OutputFormat::Minimal => minimal::print_minimal(&value, config),
        OutputFormat::Text => text::print_text(&value, config),
    }
}

/// Multiply every theta field, wherever it sits in the document.
fn scale_theta(value: &mut Value, factor: f64) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if DisplayConfig::is_theta(key) {
                    if let Some(theta) = val.as_f64() {
                        *val = Value::from(theta * factor);
                    }
                } else {
                    scale_theta(val, factor);
                }
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(|v| scale_theta(v, factor)),
        _ => {}
    }
}

/// The object holding results: `result` inside an envelope, else the value itself.
fn result_object(value: &Value) -> Option<&Map<String, Value>> {
    value
        .as_object()
        .map(|m| match m.get("result") {
            Some(Value::Object(result)) => result,
            _ => m,
        })
}

/// Field/value pairs of the result, with nested groups (prices, greeks)
/// expanded in place.
fn result_fields(value: &Value) -> Vec<(&str, &Value)> {
    let mut fields = Vec::new();
    if let Some(map) = result_object(value) {
        for (key, val) in map {
            match val {
                Value::Object(group) => {
                    fields.extend(group.iter().map(|(k, v)| (k.as_str(), v)));
                }
                _ => fields.push((key.as_str(), val)),
            }
        }
    }
    fields
}

fn format_value(key: &str, value: &Value, config: &DisplayConfig) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => config.format_field(key, f),
            None => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Envelope warnings, if any
fn warnings(value: &Value) -> Vec<&str> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
