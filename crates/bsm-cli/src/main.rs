mod commands;
mod config;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::pricing::{GreeksArgs, PriceArgs, ValueArgs};
use config::DisplayConfig;
use error::CliError;

/// European option prices and Greeks under Black-Scholes-Merton
#[derive(Parser)]
#[command(
    name = "bsm",
    version,
    about = "European option prices and Greeks under Black-Scholes-Merton",
    long_about = "Prices European calls and puts with the closed-form Black-Scholes-Merton \
                  formula and estimates Delta, Gamma, Theta, Vega and Rho by finite \
                  differences. Parameters come from flags, a JSON/YAML file, piped JSON \
                  on stdin, or interactive prompts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    display: DisplayConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the European call and put
    Price(PriceArgs),
    /// Estimate Greeks for call and put by finite differences
    Greeks(GreeksArgs),
    /// Prices, Greeks and a put-call parity check in one report
    Value(ValueArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Text,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, CliError> = match cli.command {
        Commands::Price(args) => commands::pricing::run_price(args),
        Commands::Greeks(args) => commands::pricing::run_greeks(args),
        Commands::Value(args) => commands::pricing::run_value(args),
        Commands::Version => {
            println!("bsm {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, &cli.display);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
