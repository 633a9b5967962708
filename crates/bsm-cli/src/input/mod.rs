pub mod file;
pub mod prompt;
pub mod stdin;

use bsm_core::MarketParameters;
use std::io;
use tracing::debug;

use crate::commands::MarketArgs;
use crate::error::CliError;

/// Gather market parameters from flags, an input file, piped stdin, or
/// interactive prompts (in that order), then apply the input policy.
pub fn collect_params(args: &MarketArgs) -> Result<MarketParameters, CliError> {
    let params = if let Some(params) = args.from_flags() {
        debug!("parameters from flags");
        params
    } else if let Some(ref path) = args.input {
        debug!(path = %path, "parameters from file");
        file::read_input(path)?
    } else if let Some(data) = stdin::read_stdin()? {
        debug!("parameters from stdin");
        serde_json::from_value(data)
            .map_err(|e| CliError::Parse(format!("Invalid parameters on stdin: {e}")))?
    } else {
        let console = io::stdin();
        let mut stdout = io::stdout();
        prompt::prompt_params(&mut console.lock(), &mut stdout)?
    };

    check_policy(&params)?;
    Ok(params)
}

/// Input policy: every value finite and non-negative.
///
/// Zero passes here; the pricer reports it as a domain error. A negative
/// rate is refused even though the formula would accept it.
pub fn check_policy(params: &MarketParameters) -> Result<(), CliError> {
    let fields = [
        ("spot_price", params.spot_price),
        ("strike_price", params.strike_price),
        ("time_to_maturity", params.time_to_maturity),
        ("volatility", params.volatility),
        ("risk_free_rate", params.risk_free_rate),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CliError::invalid_input(field, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(CliError::invalid_input(field, "cannot be negative"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_zero() {
        let params = MarketParameters::new(100.0, 100.0, 0.0, 0.0, 0.0);
        assert!(check_policy(&params).is_ok());
    }

    #[test]
    fn test_policy_rejects_negative_rate() {
        let params = MarketParameters::new(100.0, 100.0, 1.0, 0.2, -0.01);
        match check_policy(&params).unwrap_err() {
            CliError::InvalidInput { field, reason } => {
                assert_eq!(field, "risk_free_rate");
                assert_eq!(reason, "cannot be negative");
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_policy_rejects_nan() {
        let params = MarketParameters::new(f64::NAN, 100.0, 1.0, 0.2, 0.05);
        assert!(check_policy(&params).is_err());
    }

    #[test]
    fn test_flags_take_priority() {
        let args = MarketArgs {
            spot: Some(100.0),
            strike: Some(110.0),
            maturity: Some(0.5),
            volatility: Some(0.25),
            rate: Some(0.03),
            input: None,
        };
        let params = collect_params(&args).unwrap();
        assert_eq!(params, MarketParameters::new(100.0, 110.0, 0.5, 0.25, 0.03));
    }
}
