//! File loaders for the courier delivery engine.
//!
//! Responsibilities:
//! - Read the package roster, stops table and distance table from CSV.
//! - Read the fleet manifest from JSON.
//! - Assemble a [`Dataset`] ready to hand to the simulation.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `courier-core`).
//! - Report malformed input with file, row and column context.
//!
//! Invariants:
//! - Loaders never mutate the files they read.
//! - No global mutable state.

mod dataset;
mod distances;
mod error;
mod fleet;
mod fs;
mod packages;
mod stops;

pub use dataset::{
    DISTANCES_FILE, Dataset, DatasetPaths, FLEET_FILE, PACKAGES_FILE, STOPS_FILE,
};
pub use distances::{load_distance_table, read_distance_table};
pub use error::DataError;
pub use fleet::{load_fleet, read_fleet};
pub use packages::{load_packages, read_packages};
pub use stops::{load_stops, read_stops};
