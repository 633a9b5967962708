pub mod pricing;

pub use pricing::MarketArgs;
