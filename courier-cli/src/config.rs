//! Dataset and routing configuration shared by every subcommand.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use courier_core::{AddressMatching, Simulation};
use courier_data::{Dataset, DatasetPaths};
use courier_router::{NearestNeighbourConfig, NearestNeighbourRouter, TieBreak};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_PACKAGES: &str = "packages";
pub(crate) const ARG_STOPS: &str = "stops";
pub(crate) const ARG_DISTANCES: &str = "distances";
pub(crate) const ARG_FLEET: &str = "fleet";
pub(crate) const ARG_TIE_BREAK: &str = "tie-break";
pub(crate) const ARG_ADDRESS_MATCHING: &str = "address-matching";

const DEFAULT_DATA_DIR: &str = "data";

/// How the router settles equally distant packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TieBreakArg {
    /// Keep the package listed first on the manifest.
    FirstSeen,
    /// Keep the package listed last on the manifest.
    LastSeen,
    /// Prefer the lowest package identifier.
    LowestId,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstSeen => Self::FirstSeen,
            TieBreakArg::LastSeen => Self::LastSeen,
            TieBreakArg::LowestId => Self::LowestPackageId,
        }
    }
}

/// How package addresses are matched against the stops table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum AddressMatchingArg {
    /// Use the first stop containing the address and warn when several do.
    FirstMatch,
    /// Reject addresses contained in more than one stop.
    Strict,
}

impl From<AddressMatchingArg> for AddressMatching {
    fn from(arg: AddressMatchingArg) -> Self {
        match arg {
            AddressMatchingArg::FirstMatch => Self::FirstMatch,
            AddressMatchingArg::Strict => Self::Strict,
        }
    }
}

/// Input locations and routing options.
///
/// Values can come from CLI flags, configuration files, or `COURIER_`
/// environment variables.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct SimulationArgs {
    /// Directory holding the default input file names.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the package roster CSV.
    #[arg(long = ARG_PACKAGES, value_name = "path")]
    #[serde(default)]
    pub(crate) packages: Option<Utf8PathBuf>,
    /// Override the stops table CSV.
    #[arg(long = ARG_STOPS, value_name = "path")]
    #[serde(default)]
    pub(crate) stops: Option<Utf8PathBuf>,
    /// Override the distance table CSV.
    #[arg(long = ARG_DISTANCES, value_name = "path")]
    #[serde(default)]
    pub(crate) distances: Option<Utf8PathBuf>,
    /// Override the fleet manifest JSON.
    #[arg(long = ARG_FLEET, value_name = "path")]
    #[serde(default)]
    pub(crate) fleet: Option<Utf8PathBuf>,
    /// Rule for equally distant packages.
    #[arg(long = ARG_TIE_BREAK, value_enum)]
    #[serde(default)]
    pub(crate) tie_break: Option<TieBreakArg>,
    /// Rule for addresses matching several stops.
    #[arg(long = ARG_ADDRESS_MATCHING, value_enum)]
    #[serde(default)]
    pub(crate) address_matching: Option<AddressMatchingArg>,
}

impl SimulationArgs {
    pub(crate) fn into_config(self) -> Result<SimulationConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SimulationConfig::from(merged))
    }
}

/// Resolved dataset and routing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimulationConfig {
    pub(crate) paths: DatasetPaths,
    pub(crate) tie_break: TieBreak,
    pub(crate) matching: AddressMatching,
}

impl SimulationConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let missing = self.paths.missing_files();
        let sources = [
            (ARG_PACKAGES, &self.paths.packages),
            (ARG_STOPS, &self.paths.stops),
            (ARG_DISTANCES, &self.paths.distances),
            (ARG_FLEET, &self.paths.fleet),
        ];
        match sources
            .into_iter()
            .find(|(_, path)| missing.contains(&path.as_path()))
        {
            Some((field, path)) => Err(CliError::MissingSourceFile {
                field,
                path: path.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Load the dataset and route every truck.
    pub(crate) fn simulate(&self) -> Result<Simulation, CliError> {
        let dataset = Dataset::load(&self.paths)?.with_matching(self.matching);
        let (builder, distances) = dataset.into_parts();
        let router = NearestNeighbourRouter::with_config(NearestNeighbourConfig {
            tie_break: self.tie_break,
        });
        tracing::debug!(config = ?router.config(), "routing with nearest neighbour");
        let simulation = builder.build(&router, &distances)?;
        tracing::info!(
            trucks = simulation.trucks().len(),
            packages = simulation.packages().len(),
            "delivery day simulated"
        );
        Ok(simulation)
    }
}

impl From<SimulationArgs> for SimulationConfig {
    fn from(args: SimulationArgs) -> Self {
        let data_dir = args
            .data_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR));
        let defaults = DatasetPaths::in_dir(&data_dir);
        Self {
            paths: DatasetPaths {
                packages: args.packages.unwrap_or(defaults.packages),
                stops: args.stops.unwrap_or(defaults.stops),
                distances: args.distances.unwrap_or(defaults.distances),
                fleet: args.fleet.unwrap_or(defaults.fleet),
            },
            tie_break: args.tie_break.map(TieBreak::from).unwrap_or_default(),
            matching: args
                .address_matching
                .map(AddressMatching::from)
                .unwrap_or_default(),
        }
    }
}

/// Merge, validate and simulate in one step.
pub(crate) fn load_simulation(args: SimulationArgs) -> Result<Simulation, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    config.simulate()
}
