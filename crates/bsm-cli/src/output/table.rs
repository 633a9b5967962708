use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, result_fields, warnings};
use crate::config::DisplayConfig;

/// Format output as a two-column table using the tabled crate.
pub fn print_table(value: &Value, config: &DisplayConfig) {
    println!("{}", render_table(value, config));

    let warnings = warnings(value);
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

fn render_table(value: &Value, config: &DisplayConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result_fields(value) {
        builder.push_record([key.to_string(), format_value(key, val, config)]);
    }
    Table::from(builder).to_string()
}
