//! Stops table loader.

use std::io::Read;

use camino::Utf8Path;
use courier_core::{Stop, StopIndex};

use crate::{DataError, fs};

const STOP_COLUMNS: usize = 3;

/// Load the stops table from a headerless CSV file of
/// `index, name, address` rows.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read, a row does not have
/// three columns or an index is not an integer.
pub fn load_stops(path: &Utf8Path) -> Result<StopIndex, DataError> {
    let file = fs::open_utf8_file(path)?;
    read_stops(file, path)
}

/// Parse a stops table from any reader; `source` labels errors.
///
/// # Errors
///
/// See [`load_stops`].
pub fn read_stops<R: Read>(reader: R, source: &Utf8Path) -> Result<StopIndex, DataError> {
    let mut csv = fs::csv_reader(reader);
    let mut stops = Vec::new();
    for (offset, record) in csv.records().enumerate() {
        let row = offset + 1;
        let record = record.map_err(|err| DataError::Csv {
            path: source.to_path_buf(),
            source: err,
        })?;
        let (Some(index), Some(name), Some(address), STOP_COLUMNS) =
            (record.get(0), record.get(1), record.get(2), record.len())
        else {
            return Err(DataError::MalformedRecord {
                path: source.to_path_buf(),
                row,
                reason: format!("expected {STOP_COLUMNS} columns, found {}", record.len()),
            });
        };
        let index = index.parse().map_err(|_| DataError::InvalidStopIndex {
            path: source.to_path_buf(),
            row,
            value: index.to_owned(),
        })?;
        stops.push(Stop {
            index,
            name: name.to_owned(),
            address: address.to_owned(),
        });
    }
    log::debug!("loaded {} stops from {source}", stops.len());
    Ok(StopIndex::new(stops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn read(csv: &str) -> Result<StopIndex, DataError> {
        read_stops(csv.as_bytes(), Utf8Path::new("stops.csv"))
    }

    #[rstest]
    fn loads_index_name_and_address() {
        let index = read(
            "0,Western Governors University,4001 South 700 East\n\
             1,\"Housing Auth. of Salt Lake County\",3595 Main St\n",
        )
        .expect("stops");
        assert_eq!(index.stops().len(), 2);
        assert_eq!(index.resolve("3595 Main St"), Ok(1));
        let names: Vec<&str> = index.stops().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Western Governors University", "Housing Auth. of Salt Lake County"]
        );
    }

    #[rstest]
    fn trims_padding_around_fields() {
        let index = read("  3 ,  Redwood Park , 3060 Lester St \n").expect("stops");
        assert_eq!(index.resolve("3060 Lester St"), Ok(3));
    }

    #[rstest]
    #[case("0,Hub\n")]
    #[case("0,Hub,4001 South 700 East,extra\n")]
    fn rejects_wrong_column_counts(#[case] csv: &str) {
        assert!(matches!(
            read(csv),
            Err(DataError::MalformedRecord { row: 1, .. })
        ));
    }

    #[rstest]
    fn rejects_non_numeric_indices() {
        assert!(matches!(
            read("0,Hub,4001 South 700 East\nfirst,Park,1330 2100 S\n"),
            Err(DataError::InvalidStopIndex { row: 2, .. })
        ));
    }
}
