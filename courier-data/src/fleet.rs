//! Fleet manifest loader.
//!
//! The manifest is a JSON document listing trucks in routing order:
//!
//! ```json
//! {
//!   "trucks": [
//!     {
//!       "id": 1,
//!       "capacity": 16,
//!       "speed": 18.0,
//!       "departure": "08:00:00",
//!       "hub": "4001 South 700 East",
//!       "packages": [12, 13, 14]
//!     }
//!   ]
//! }
//! ```
//!
//! `capacity` and `speed` may be omitted and default to 16 packages and 18
//! miles per hour.

use std::io::Read;

use camino::Utf8Path;
use courier_core::{PackageId, TimeOfDay, Truck, TruckId, TruckPlan};
use serde::Deserialize;

use crate::{DataError, fs};

const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_SPEED: f64 = 18.0;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FleetManifest {
    trucks: Vec<TruckEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TruckEntry {
    id: u32,
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default = "default_speed")]
    speed: f64,
    departure: TimeOfDay,
    hub: String,
    packages: Vec<u32>,
}

const fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

const fn default_speed() -> f64 {
    DEFAULT_SPEED
}

impl From<TruckEntry> for TruckPlan {
    fn from(entry: TruckEntry) -> Self {
        Self {
            id: TruckId::from(entry.id),
            capacity: entry.capacity,
            speed: entry.speed,
            departure: entry.departure,
            hub: entry.hub,
            packages: entry.packages.into_iter().map(PackageId::from).collect(),
        }
    }
}

/// Load the fleet manifest, returning trucks in routing order.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read, is not a valid
/// manifest or describes a truck with an unusable speed.
pub fn load_fleet(path: &Utf8Path) -> Result<Vec<Truck>, DataError> {
    let file = fs::open_utf8_file(path)?;
    read_fleet(file, path)
}

/// Parse a fleet manifest from any reader; `source` labels errors.
///
/// # Errors
///
/// See [`load_fleet`].
pub fn read_fleet<R: Read>(reader: R, source: &Utf8Path) -> Result<Vec<Truck>, DataError> {
    let manifest: FleetManifest =
        serde_json::from_reader(reader).map_err(|err| DataError::Fleet {
            path: source.to_path_buf(),
            source: err,
        })?;
    let trucks = manifest
        .trucks
        .into_iter()
        .map(|entry| {
            Truck::new(entry.into()).map_err(|err| DataError::Truck {
                path: source.to_path_buf(),
                source: err,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded {} trucks from {source}", trucks.len());
    Ok(trucks)
}
