use serde::{Deserialize, Serialize};

/// Which side of the call/put pair a figure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Call,
    Put,
}

/// The five market inputs of the Black-Scholes-Merton formula.
///
/// Rates and volatilities are decimals (0.05 = 5%), never percentages.
/// Maturity is in years. Construction does not validate; `price` and
/// `estimate_greeks` check the domain before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    pub spot_price: f64,
    pub strike_price: f64,
    pub time_to_maturity: f64,
    pub volatility: f64,
    pub risk_free_rate: f64,
}

impl MarketParameters {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            spot_price,
            strike_price,
            time_to_maturity,
            volatility,
            risk_free_rate,
        }
    }

    pub fn with_spot(self, spot_price: f64) -> Self {
        Self { spot_price, ..self }
    }

    pub fn with_strike(self, strike_price: f64) -> Self {
        Self {
            strike_price,
            ..self
        }
    }

    pub fn with_maturity(self, time_to_maturity: f64) -> Self {
        Self {
            time_to_maturity,
            ..self
        }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_rate(self, risk_free_rate: f64) -> Self {
        Self {
            risk_free_rate,
            ..self
        }
    }

    /// Strike discounted to today: X * exp(-rT)
    pub fn discounted_strike(&self) -> f64 {
        self.strike_price * (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

/// Closed-form call and put prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PriceResult {
    pub fn value(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }
}

/// Finite-difference sensitivities for both sides of the pair.
///
/// Units are price change per unit change of the bumped parameter; Theta is
/// per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    pub call_delta: f64,
    pub call_gamma: f64,
    pub call_theta: f64,
    pub call_vega: f64,
    pub call_rho: f64,
    pub put_delta: f64,
    pub put_gamma: f64,
    pub put_theta: f64,
    pub put_vega: f64,
    pub put_rho: f64,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64".to_string(),
        },
    }
}
