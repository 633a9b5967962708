use clap::Args;

const PRICE_KEYS: [&str; 2] = ["call_price", "put_price"];

const GREEK_KEYS: [&str; 10] = [
    "call_delta",
    "call_gamma",
    "call_theta",
    "call_vega",
    "call_rho",
    "put_delta",
    "put_gamma",
    "put_theta",
    "put_vega",
    "put_rho",
];

/// Presentation settings. The core always returns full precision; these only
/// affect how figures are rendered.
#[derive(Debug, Clone, Args)]
pub struct DisplayConfig {
    /// Decimal places for option prices
    #[arg(long, env = "BSM_PRICE_DECIMALS", default_value_t = 2, global = true)]
    pub price_decimals: usize,

    /// Decimal places for Greeks
    #[arg(long, env = "BSM_GREEK_DECIMALS", default_value_t = 4, global = true)]
    pub greek_decimals: usize,

    /// Report Theta per calendar day instead of per year
    #[arg(long, env = "BSM_THETA_PER_DAY", global = true)]
    pub theta_per_day: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            price_decimals: 2,
            greek_decimals: 4,
            theta_per_day: false,
        }
    }
}

impl DisplayConfig {
    pub fn is_price(key: &str) -> bool {
        PRICE_KEYS.contains(&key)
    }

    pub fn is_greek(key: &str) -> bool {
        GREEK_KEYS.contains(&key)
    }

    pub fn is_theta(key: &str) -> bool {
        key == "call_theta" || key == "put_theta"
    }

    /// Render a numeric field. Prices are clamped at zero so rounding noise
    /// never shows as "-0.00".
    pub fn format_field(&self, key: &str, value: f64) -> String {
        if Self::is_price(key) {
            format!("{:.*}", self.price_decimals, value.max(0.0))
        } else if Self::is_greek(key) {
            format!("{:.*}", self.greek_decimals, value)
        } else {
            value.to_string()
        }
    }
}
