use serde_json::Value;

use super::{result_fields, warnings};
use crate::config::DisplayConfig;

const GREEKS: [(&str, &str); 5] = [
    ("delta", "Delta"),
    ("gamma", "Gamma"),
    ("theta", "Theta"),
    ("vega", "Vega"),
    ("rho", "Rho"),
];

/// Console report: prices first, then one Greeks block per side.
pub fn print_text(value: &Value, config: &DisplayConfig) {
    print!("{}", render_text(value, config));
}

fn render_text(value: &Value, config: &DisplayConfig) -> String {
    let fields = result_fields(value);
    let lookup = |key: &str| {
        fields
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_f64())
    };

    let mut lines: Vec<String> = Vec::new();

    if let (Some(call), Some(put)) = (lookup("call_price"), lookup("put_price")) {
        lines.push(String::new());
        lines.push(format!(
            "Call Option Price: {}",
            config.format_field("call_price", call)
        ));
        lines.push(format!(
            "Put Option Price: {}",
            config.format_field("put_price", put)
        ));
    }

    if lookup("call_delta").is_some() {
        for (side, title) in [("call", "Call"), ("put", "Put")] {
            if side == "put" {
                lines.push(String::new());
            }
            lines.push(format!("Option Greeks: For {title} Option"));
            for (greek, label) in GREEKS {
                let key = format!("{side}_{greek}");
                if let Some(v) = lookup(&key) {
                    lines.push(format!("{title} {label}: {}", config.format_field(&key, v)));
                }
            }
        }
    }

    let warnings = warnings(value);
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        lines.extend(warnings.iter().map(|w| format!("  - {w}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
