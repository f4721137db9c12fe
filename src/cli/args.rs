//! Clap argument types and input-mode validation.

use clap::Parser;

use accrue::input;
use accrue::models::{Arithmetic, Format, Number};

/// Simple and compound interest calculator.
#[derive(Parser, Debug)]
#[command(
    name = "accrue",
    version = accrue::constants::VERSION,
    about = "Simple and compound interest calculator",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compute simple interest: p * r * t / 100 (interest only).
    Simple(SimpleArgs),

    /// Compute the compound amount: p * (1 + r/100)^t (principal + interest).
    Compound(CompoundArgs),

    /// Inspect the resolved configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print version and build information.
    Version,
}

/// Config inspection subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML.
    Show,
    /// Print the global config file path.
    Path,
}

/// Arguments for the `simple` subcommand.
#[derive(Parser, Debug)]
pub struct SimpleArgs {
    #[command(flatten)]
    pub values: ValueArgs,

    /// Integer (reference-faithful, truncating) or float arithmetic.
    #[arg(long, value_enum)]
    pub arithmetic: Option<Arithmetic>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `compound` subcommand.
#[derive(Parser, Debug)]
pub struct CompoundArgs {
    #[command(flatten)]
    pub values: ValueArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// The three calculation inputs as flags. All three or none: mixing
/// flags with interactive prompts would make piped input ambiguous.
#[derive(clap::Args, Debug)]
pub struct ValueArgs {
    /// Principal amount (non-negative).
    #[arg(long, short = 'p', value_parser = principal_value)]
    pub principal: Option<Number>,

    /// Annual interest rate in percent.
    #[arg(long, short = 'r', value_parser = rate_value, allow_hyphen_values = true)]
    pub rate: Option<Number>,

    /// Time period in years.
    #[arg(long, short = 't', value_parser = time_value, allow_hyphen_values = true)]
    pub time: Option<Number>,
}

/// Output control flags, overriding config when present.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Decimal places for real-valued results.
    #[arg(long)]
    pub decimal_places: Option<usize>,
}

/// Where the three input values come from.
#[derive(Debug, PartialEq)]
pub enum ValueSource {
    /// All three supplied as flags; no stdin read.
    Flags {
        principal: Number,
        rate: Number,
        time: Number,
    },
    /// None supplied; read line by line from stdin.
    Interactive,
}

impl ValueArgs {
    /// Validate that the flags form a complete set or are absent entirely.
    pub fn value_source(&self) -> Result<ValueSource, String> {
        match (self.principal, self.rate, self.time) {
            (Some(principal), Some(rate), Some(time)) => Ok(ValueSource::Flags {
                principal,
                rate,
                time,
            }),
            (None, None, None) => Ok(ValueSource::Interactive),
            _ => Err(
                "supply --principal, --rate, and --time together, or none of them \
                 for interactive input"
                    .to_string(),
            ),
        }
    }
}

fn principal_value(raw: &str) -> Result<Number, String> {
    input::parse_number("principal", raw).map_err(|e| e.to_string())
}

fn rate_value(raw: &str) -> Result<Number, String> {
    input::parse_number("rate", raw).map_err(|e| e.to_string())
}

fn time_value(raw: &str) -> Result<Number, String> {
    input::parse_number("time", raw).map_err(|e| e.to_string())
}
