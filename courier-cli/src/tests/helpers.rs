//! Test helpers for loading the reference dataset and capturing output.

use super::*;
use crate::config::SimulationConfig;
use camino::Utf8PathBuf;

/// Directory holding the reference delivery day.
pub(super) fn reference_data_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

/// Arguments pointing at the reference dataset.
pub(super) fn reference_args() -> SimulationArgs {
    SimulationArgs {
        data_dir: Some(reference_data_dir()),
        ..SimulationArgs::default()
    }
}

/// Route the reference dataset without consulting config files or env.
pub(super) fn reference_simulation() -> Simulation {
    SimulationConfig::from(reference_args())
        .simulate()
        .expect("reference dataset simulates")
}

/// Run `render` against an in-memory buffer and return what it wrote.
pub(super) fn capture(
    render: impl FnOnce(&mut dyn Write) -> Result<(), CliError>,
) -> String {
    let mut buffer = Vec::new();
    render(&mut buffer).expect("render succeeds");
    String::from_utf8(buffer).expect("utf-8 output")
}
