pub mod error;
pub mod greeks;
pub mod math;
pub mod pricer;
pub mod types;
pub mod valuation;

pub use error::DomainError;
pub use greeks::estimate_greeks;
pub use pricer::price;
pub use types::*;

/// Standard result type for all pricing operations
pub type BsmResult<T> = Result<T, DomainError>;
