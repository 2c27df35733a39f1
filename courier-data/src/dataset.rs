//! Loading a complete delivery day from one directory.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{
    AddressCorrection, AddressMatching, DistanceTable, PackageStore, SimulationBuilder,
    StopDistances, StopIndex, Truck,
};

use crate::{DataError, fs, load_distance_table, load_fleet, load_packages, load_stops};

/// File name of the package roster inside a dataset directory.
pub const PACKAGES_FILE: &str = "package_data.csv";
/// File name of the stops table inside a dataset directory.
pub const STOPS_FILE: &str = "stops.csv";
/// File name of the distance table inside a dataset directory.
pub const DISTANCES_FILE: &str = "distance_table.csv";
/// File name of the fleet manifest inside a dataset directory.
pub const FLEET_FILE: &str = "fleet.json";

/// Locations of the four input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Package roster CSV.
    pub packages: Utf8PathBuf,
    /// Stops table CSV.
    pub stops: Utf8PathBuf,
    /// Lower-triangular distance table CSV.
    pub distances: Utf8PathBuf,
    /// Fleet manifest JSON.
    pub fleet: Utf8PathBuf,
}

impl DatasetPaths {
    /// Paths using the conventional file names under `dir`.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8Path;
    /// use courier_data::DatasetPaths;
    ///
    /// let paths = DatasetPaths::in_dir(Utf8Path::new("data"));
    /// assert_eq!(paths.stops.as_str(), "data/stops.csv");
    /// ```
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            packages: dir.join(PACKAGES_FILE),
            stops: dir.join(STOPS_FILE),
            distances: dir.join(DISTANCES_FILE),
            fleet: dir.join(FLEET_FILE),
        }
    }

    /// Paths that do not name an existing regular file.
    pub fn missing_files(&self) -> Vec<&Utf8Path> {
        [&self.packages, &self.stops, &self.distances, &self.fleet]
            .into_iter()
            .map(Utf8PathBuf::as_path)
            .filter(|path| !fs::file_is_file(path))
            .collect()
    }
}

/// Every input needed to simulate a delivery day.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Package roster.
    pub packages: PackageStore,
    /// Stops table.
    pub stops: StopIndex,
    /// Distance table.
    pub table: DistanceTable,
    /// Trucks in routing order.
    pub fleet: Vec<Truck>,
}

impl Dataset {
    /// Load all four files.
    ///
    /// # Errors
    ///
    /// Returns the first [`DataError`] raised by an individual loader.
    pub fn load(paths: &DatasetPaths) -> Result<Self, DataError> {
        let packages = load_packages(&paths.packages)?;
        let stops = load_stops(&paths.stops)?;
        let table = load_distance_table(&paths.distances)?;
        let fleet = load_fleet(&paths.fleet)?;
        if stops.stops().len() != table.len() {
            log::warn!(
                "{} lists {} stops but {} has {} rows",
                paths.stops,
                stops.stops().len(),
                paths.distances,
                table.len()
            );
        }
        log::info!(
            "loaded {} packages, {} stops and {} trucks",
            packages.len(),
            stops.stops().len(),
            fleet.len()
        );
        Ok(Self {
            packages,
            stops,
            table,
            fleet,
        })
    }

    /// Replace the address matching policy of the stops table.
    #[must_use]
    pub fn with_matching(mut self, matching: AddressMatching) -> Self {
        self.stops = self.stops.with_matching(matching);
        self
    }

    /// Split the dataset into a simulation builder and a distance provider.
    ///
    /// The builder carries the standard mid-morning address correction.
    pub fn into_parts(self) -> (SimulationBuilder, StopDistances) {
        let builder = SimulationBuilder::new(self.packages, self.fleet)
            .with_address_correction(AddressCorrection::default());
        (builder, StopDistances::new(self.stops, self.table))
    }
}
