use bsm_core::MarketParameters;
use std::io::{BufRead, Write};

use crate::error::CliError;

/// (prompt, label used in the negative-value message)
const PROMPTS: [(&str, &str); 5] = [
    ("Enter the current stock price (Spot Price): ", "Spot Price"),
    ("Enter the strike price (Strike Price): ", "Strike Price"),
    (
        "Enter the time to maturity (in years, Time to Maturity): ",
        "Time to Maturity",
    ),
    (
        "Enter the volatility (Volatility, as a decimal): ",
        "Volatility",
    ),
    (
        "Enter the risk-free interest rate (Interest Rate, as a decimal): ",
        "Risk-free interest rate",
    ),
];

/// Ask for the five market parameters until a full valid set is entered.
///
/// Any unparsable or negative answer restarts collection from the first
/// prompt. Running out of input is an error.
pub fn prompt_params<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<MarketParameters, CliError> {
    'collect: loop {
        let mut values = [0.0_f64; 5];

        for (slot, (prompt, label)) in values.iter_mut().zip(PROMPTS) {
            write!(writer, "{prompt}")?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(CliError::invalid_input(label, "input ended before a value was entered"));
            }

            let value = match line.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    writeln!(writer, "Invalid input, please enter numbers.")?;
                    continue 'collect;
                }
            };
            if value < 0.0 {
                writeln!(
                    writer,
                    "Invalid input: {label} cannot be negative. Please re-enter."
                )?;
                continue 'collect;
            }
            *slot = value;
        }

        let [s, x, t, sigma, r] = values;
        tracing::debug!(s, x, t, sigma, r, "collected parameters interactively");
        return Ok(MarketParameters::new(s, x, t, sigma, r));
    }
}
