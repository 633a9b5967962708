use serde_json::Value;
use std::io;

use super::{format_value, result_fields};
use crate::config::DisplayConfig;

/// Write output as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value, config: &DisplayConfig) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value, config) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    value: &Value,
    config: &DisplayConfig,
) -> Result<(), csv::Error> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in result_fields(value) {
        wtr.write_record([key, format_value(key, val, config).as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
