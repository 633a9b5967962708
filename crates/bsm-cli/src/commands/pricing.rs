use clap::Args;
use serde_json::Value;
use tracing::info;

use bsm_core::valuation::{self, ValuationInput};
use bsm_core::{greeks, pricer, MarketParameters};

use crate::error::CliError;
use crate::input;

/// Market parameters, given as flags or read from a file / stdin / prompts
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Current price of the underlying
    #[arg(
        long,
        allow_negative_numbers = true,
        requires_all = ["strike", "maturity", "volatility", "rate"]
    )]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long, allow_negative_numbers = true, requires = "spot")]
    pub strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long, allow_negative_numbers = true, requires = "spot")]
    pub maturity: Option<f64>,

    /// Annualised volatility as a decimal (0.2 = 20%)
    #[arg(long, allow_negative_numbers = true, requires = "spot")]
    pub volatility: Option<f64>,

    /// Continuously-compounded risk-free rate as a decimal
    #[arg(long, allow_negative_numbers = true, requires = "spot")]
    pub rate: Option<f64>,

    /// Path to JSON or YAML input file
    #[arg(long, conflicts_with = "spot")]
    pub input: Option<String>,
}

impl MarketArgs {
    pub fn from_flags(&self) -> Option<MarketParameters> {
        Some(MarketParameters::new(
            self.spot?,
            self.strike?,
            self.maturity?,
            self.volatility?,
            self.rate?,
        ))
    }
}

/// Arguments for call/put pricing
#[derive(Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

pub fn run_price(args: PriceArgs) -> Result<Value, CliError> {
    let params = input::collect_params(&args.market)?;
    let result = pricer::price(&params)?;
    info!(call = result.call_price, put = result.put_price, "priced");
    Ok(serde_json::to_value(result)?)
}

/// Arguments for Greek estimation
#[derive(Args)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

pub fn run_greeks(args: GreeksArgs) -> Result<Value, CliError> {
    let params = input::collect_params(&args.market)?;
    let result = greeks::estimate_greeks(&params)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a full valuation (prices, Greeks, parity check)
#[derive(Args)]
pub struct ValueArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Skip Greek estimation
    #[arg(long)]
    pub prices_only: bool,
}

pub fn run_value(args: ValueArgs) -> Result<Value, CliError> {
    let params = input::collect_params(&args.market)?;
    let valuation_input = ValuationInput {
        params,
        include_greeks: !args.prices_only,
    };
    let result = valuation::value_option(&valuation_input)?;
    Ok(serde_json::to_value(result)?)
}
