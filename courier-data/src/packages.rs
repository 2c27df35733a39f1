//! Package roster loader.

use std::io::Read;

use camino::Utf8Path;
use courier_core::{DeliveryAddress, Package, PackageId, PackageStore};
use serde::Deserialize;

use crate::{DataError, fs};

const PACKAGE_COLUMNS: usize = 8;

/// One roster line: `id, address, city, zipcode, state, deadline, weight, notes`.
#[derive(Debug, Deserialize)]
struct PackageRow {
    id: String,
    address: String,
    city: String,
    zipcode: String,
    state: String,
    deadline: String,
    weight: String,
    notes: String,
}

/// Load the package roster from a headerless CSV file.
///
/// Every package starts at the hub with no recorded times.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read, a row does not have
/// eight columns, an identifier is not an integer or appears twice.
pub fn load_packages(path: &Utf8Path) -> Result<PackageStore, DataError> {
    let file = fs::open_utf8_file(path)?;
    read_packages(file, path)
}

/// Parse a package roster from any reader; `source` labels errors.
///
/// # Errors
///
/// See [`load_packages`].
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use courier_core::PackageId;
///
/// let csv = "1,195 W Oakland Ave,Salt Lake City,84115,UT,10:30 AM,21,\n";
/// let store = courier_data::read_packages(csv.as_bytes(), Utf8Path::new("roster.csv"))?;
/// let package = store.get(PackageId::from(1)).expect("loaded");
/// assert_eq!(package.address().zipcode, "84115");
/// # Ok::<(), courier_data::DataError>(())
/// ```
pub fn read_packages<R: Read>(reader: R, source: &Utf8Path) -> Result<PackageStore, DataError> {
    let mut csv = fs::csv_reader(reader);
    let mut store = PackageStore::new();
    for (index, record) in csv.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|err| DataError::Csv {
            path: source.to_path_buf(),
            source: err,
        })?;
        if record.len() != PACKAGE_COLUMNS {
            return Err(DataError::MalformedRecord {
                path: source.to_path_buf(),
                row,
                reason: format!(
                    "expected {PACKAGE_COLUMNS} columns, found {}",
                    record.len()
                ),
            });
        }
        let fields: PackageRow = record.deserialize(None).map_err(|err| DataError::MalformedRecord {
            path: source.to_path_buf(),
            row,
            reason: err.to_string(),
        })?;
        let package = package_from_row(fields, source, row)?;
        let id = package.id();
        if store.insert(package).is_some() {
            return Err(DataError::DuplicatePackage {
                path: source.to_path_buf(),
                row,
                id,
            });
        }
    }
    log::debug!("loaded {} packages from {source}", store.len());
    Ok(store)
}

fn package_from_row(fields: PackageRow, source: &Utf8Path, row: usize) -> Result<Package, DataError> {
    let raw_id = fields
        .id
        .parse::<u32>()
        .map_err(|_| DataError::InvalidPackageId {
            path: source.to_path_buf(),
            row,
            value: fields.id.clone(),
        })?;
    let address = DeliveryAddress::new(fields.address, fields.city, fields.state, fields.zipcode);
    Ok(Package::new(PackageId::from(raw_id), address)
        .with_deadline(fields.deadline)
        .with_weight(fields.weight)
        .with_notes(fields.notes))
}
