//! Command-line interface for querying a simulated delivery day.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use courier_core::{PackageId, Simulation, TimeOfDay};

mod config;
mod error;
mod menu;
mod query;

use config::{SimulationArgs, load_simulation};
pub use error::CliError;
pub use query::OutputFormat;

/// Run the courier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    init_logging(cli.verbose);
    let mut stdout = io::stdout().lock();
    execute(cli, &mut stdout)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber is already installed");
    }
}

fn execute(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    let format = cli.format;
    match cli.command {
        Command::Trips(args) => {
            let simulation = load_simulation(args)?;
            query::write_trips(
                writer,
                &simulation.fleet_summary(),
                simulation.routes(),
                format,
            )
        }
        Command::Package(args) => {
            let simulation = load_simulation(args.simulation)?;
            run_package(&simulation, args.id, args.at, writer, format)
        }
        Command::Packages(args) => {
            let simulation = load_simulation(args.simulation)?;
            query::write_packages(writer, args.at, &simulation.packages_at(args.at), format)
        }
        Command::Menu(args) => {
            let simulation = load_simulation(args)?;
            let mut stdin = io::stdin().lock();
            menu::run_menu(&simulation, &mut stdin, writer)
        }
    }
}

fn run_package(
    simulation: &Simulation,
    id: u32,
    at: TimeOfDay,
    writer: &mut dyn Write,
    format: OutputFormat,
) -> Result<(), CliError> {
    let snapshot = simulation.package_at(PackageId::from(id), at)?;
    query::write_package(writer, &snapshot, format)
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Simulate a day of package deliveries and query it at any time",
    version
)]
struct Cli {
    /// Report format for non-interactive commands.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Log routing decisions at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Total distance and run time for each truck and the whole fleet.
    Trips(SimulationArgs),
    /// One package as seen at a given time.
    Package(PackageArgs),
    /// Every package as seen at a given time.
    Packages(PackagesArgs),
    /// Interactive menu over the simulated day.
    Menu(SimulationArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct PackageArgs {
    /// Package identifier.
    #[arg(value_name = "id")]
    id: u32,
    /// Query time as HH:MM:SS.
    #[arg(long, value_name = "time")]
    at: TimeOfDay,
    #[command(flatten)]
    simulation: SimulationArgs,
}

#[derive(Debug, Clone, clap::Args)]
struct PackagesArgs {
    /// Query time as HH:MM:SS.
    #[arg(long, value_name = "time")]
    at: TimeOfDay,
    #[command(flatten)]
    simulation: SimulationArgs,
}

#[cfg(test)]
mod tests;
