use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::greeks::{
    estimate_greeks, MATURITY_BUMP, RATE_BUMP, SPOT_BUMP_FRACTION, VOLATILITY_BUMP,
};
use crate::pricer::price;
use crate::types::*;
use crate::BsmResult;

/// Residual above which put-call parity is reported as violated
const PARITY_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    #[serde(flatten)]
    pub params: MarketParameters,
    #[serde(default = "default_include_greeks")]
    pub include_greeks: bool,
}

fn default_include_greeks() -> bool {
    true
}

impl From<MarketParameters> for ValuationInput {
    fn from(params: MarketParameters) -> Self {
        Self {
            params,
            include_greeks: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationOutput {
    pub prices: PriceResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<GreeksResult>,
    /// (C - P) - (S - X e^(-rT)); zero in exact arithmetic
    pub put_call_parity_residual: f64,
}

// ---------------------------------------------------------------------------
// Public API: value_option
// ---------------------------------------------------------------------------

/// Price the call/put pair and optionally estimate Greeks, wrapped in the
/// standard output envelope.
pub fn value_option(input: &ValuationInput) -> BsmResult<ComputationOutput<ValuationOutput>> {
    let start = Instant::now();
    let params = &input.params;

    let prices = price(params)?;
    let greeks = if input.include_greeks {
        Some(estimate_greeks(params)?)
    } else {
        None
    };

    let residual =
        (prices.call_price - prices.put_price) - (params.spot_price - params.discounted_strike());

    let mut warnings = Vec::new();
    if residual.abs() > PARITY_TOLERANCE {
        warnings.push(format!(
            "Put-call parity residual {residual:e} exceeds {PARITY_TOLERANCE:e}"
        ));
    }
    for (label, value) in [("Call", prices.call_price), ("Put", prices.put_price)] {
        if value < 0.0 {
            warnings.push(format!(
                "{label} price {value:e} is negative from rounding; display clamps it to zero"
            ));
        }
    }
    if input.include_greeks && params.time_to_maturity < 2.0 * MATURITY_BUMP {
        warnings.push("Theta step covers more than half of the remaining maturity".to_string());
    }

    let output = ValuationOutput {
        prices,
        greeks,
        put_call_parity_residual: residual,
    };

    let methodology = if input.include_greeks {
        "Black-Scholes-Merton (closed-form) with finite-difference Greeks"
    } else {
        "Black-Scholes-Merton (closed-form)"
    };

    let assumptions = serde_json::json!({
        "model": "Black-Scholes-Merton, European exercise, no dividends",
        "spot_bump_fraction": SPOT_BUMP_FRACTION,
        "maturity_bump_years": MATURITY_BUMP,
        "volatility_bump": VOLATILITY_BUMP,
        "rate_bump": RATE_BUMP,
        "theta_unit": "per year",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    debug!(elapsed_us = elapsed, warnings = warnings.len(), "valuation complete");

    Ok(with_metadata(
        methodology,
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn default_input() -> ValuationInput {
        MarketParameters::new(100.0, 100.0, 1.0, 0.20, 0.05).into()
    }

    #[test]
    fn test_envelope_contains_prices_and_greeks() {
        let out = value_option(&default_input()).unwrap();
        assert!((out.result.prices.call_price - 10.4506).abs() < 1e-4);
        assert!(out.result.greeks.is_some());
        assert!(out.result.put_call_parity_residual.abs() < PARITY_TOLERANCE);
        assert!(out.warnings.is_empty(), "warnings: {:?}", out.warnings);
    }

    #[test]
    fn test_prices_only() {
        let input = ValuationInput {
            include_greeks: false,
            ..default_input()
        };
        let out = value_option(&input).unwrap();
        assert!(out.result.greeks.is_none());
        assert_eq!(out.methodology, "Black-Scholes-Merton (closed-form)");
    }

    #[test]
    fn test_short_maturity_warns() {
        let input: ValuationInput = default_input().params.with_maturity(1.5 / 365.0).into();
        let out = value_option(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("Theta step")));
    }

    #[test]
    fn test_theta_failure_not_masked() {
        let input: ValuationInput = default_input().params.with_maturity(0.5 / 365.0).into();
        assert_eq!(
            value_option(&input).unwrap_err(),
            DomainError::ZeroOrNegativeMaturity(0.5 / 365.0 - MATURITY_BUMP)
        );
    }

    #[test]
    fn test_input_deserializes_flat_with_default_flag() {
        let json = r#"{
            "spot_price": 100.0,
            "strike_price": 95.0,
            "time_to_maturity": 0.5,
            "volatility": 0.25,
            "risk_free_rate": 0.03
        }"#;
        let input: ValuationInput = serde_json::from_str(json).unwrap();
        assert!(input.include_greeks);
        assert_eq!(input.params.strike_price, 95.0);
    }

    #[test]
    fn test_metadata_populated() {
        let out = value_option(&default_input()).unwrap();
        assert!(!out.metadata.version.is_empty());
        assert_eq!(out.metadata.precision, "f64");
        assert_eq!(out.assumptions["theta_unit"], "per year");
    }
}
