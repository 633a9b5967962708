use thiserror::Error;

/// A violated precondition of the Black-Scholes-Merton formula.
///
/// Raised before any undefined arithmetic (log of a non-positive ratio,
/// division by a zero `sigma * sqrt(T)`) is attempted. Each variant carries
/// the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("Non-finite input: {field} = {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Spot price must be positive, got {0}")]
    NonPositiveSpot(f64),

    #[error("Strike price must be positive, got {0}")]
    NonPositiveStrike(f64),

    #[error("Time to maturity must be positive, got {0}")]
    ZeroOrNegativeMaturity(f64),

    #[error("Volatility must be positive, got {0}")]
    ZeroOrNegativeVolatility(f64),

    /// The finite-difference bump of a valid input leaves the f64 range.
    #[error("Bumping {field} = {value} for finite differences overflows")]
    BumpOverflow { field: &'static str, value: f64 },
}

impl DomainError {
    /// Name of the market parameter that failed its precondition.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::NonFinite { field, .. } => field,
            DomainError::BumpOverflow { field, .. } => field,
            DomainError::NonPositiveSpot(_) => "spot_price",
            DomainError::NonPositiveStrike(_) => "strike_price",
            DomainError::ZeroOrNegativeMaturity(_) => "time_to_maturity",
            DomainError::ZeroOrNegativeVolatility(_) => "volatility",
        }
    }
}
