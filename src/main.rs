//! accrue — simple and compound interest calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use accrue::config;
use accrue::constants;
use accrue::env;
use accrue::input;
use accrue::interest;
use accrue::models;
use accrue::output;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, CompoundArgs, ConfigAction, OutputArgs, SimpleArgs, ValueSource};
use config::Config;
use env::Env;
use models::{Calculation, Number, Operation};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Simple(args) => run_simple(args),
        Command::Compound(args) => run_compound(args),
        Command::Config { action } => run_config(action),
        Command::Version => run_version(),
    }
}

/// Load config from the working directory, global config, and environment.
fn load_config() -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")
}

/// Resolve the three inputs from flags or interactive prompts.
///
/// The reader closure normalizes its result to (principal, rate, time)
/// regardless of the calculator's interactive reading order.
fn resolve_values(
    args: &cli::args::ValueArgs,
    read: impl FnOnce(&mut std::io::StdinLock<'_>) -> Result<(Number, Number, Number), input::InputError>,
) -> Result<(Number, Number, Number)> {
    let source = args.value_source().map_err(|e| anyhow::anyhow!("{e}"))?;
    match source {
        ValueSource::Flags {
            principal,
            rate,
            time,
        } => {
            input::check_principal(principal)?;
            Ok((principal, rate, time))
        }
        ValueSource::Interactive => {
            let stdin = std::io::stdin();
            let mut lock = stdin.lock();
            Ok(read(&mut lock)?)
        }
    }
}

/// Render the result with CLI flags overriding config.
fn print_result(output_args: &OutputArgs, config: &Config, calc: &Calculation) {
    let format = output_args.format.unwrap_or(config.output.format);
    let decimal_places = output_args
        .decimal_places
        .unwrap_or(config.output.decimal_places);
    print!("{}", output::render(format, calc, decimal_places));
}

/// Compute simple interest (interest component only).
fn run_simple(args: SimpleArgs) -> Result<()> {
    let config = load_config()?;

    // Flags supply (p, r, t); interactive mode reads them in that order
    let (principal, rate, time) = resolve_values(&args.values, |reader| {
        input::read_simple_inputs(reader)
    })?;

    let mode = args.arithmetic.unwrap_or(config.simple.arithmetic);
    let value = interest::simple_interest(principal, rate, time, mode)
        .context("simple interest calculation failed")?;

    let calc = Calculation {
        operation: Operation::SimpleInterest,
        principal: principal.as_f64(),
        rate: rate.as_f64(),
        time: time.as_f64(),
        value,
    };
    print_result(&args.output, &config, &calc);
    Ok(())
}

/// Compute the total compound amount (principal plus interest).
fn run_compound(args: CompoundArgs) -> Result<()> {
    let config = load_config()?;

    // Interactive order here is (p, t, r), matching the reference script
    let (principal, rate, time) = resolve_values(&args.values, |reader| {
        input::read_compound_inputs(reader).map(|(p, t, r)| (p, r, t))
    })?;

    let amount = interest::compound_amount(principal.as_f64(), time.as_f64(), rate.as_f64())
        .context("compound interest calculation failed")?;

    let calc = Calculation {
        operation: Operation::CompoundAmount,
        principal: principal.as_f64(),
        rate: rate.as_f64(),
        time: time.as_f64(),
        value: Number::Real(amount),
    };
    print_result(&args.output, &config, &calc);
    Ok(())
}

/// Inspect the resolved configuration.
fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config()?;
            let rendered =
                toml::to_string_pretty(&config).context("failed to serialize configuration")?;
            print!("{rendered}");
        }
        ConfigAction::Path => match Config::global_config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("global config directory could not be determined"),
        },
    }
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{} {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
