//! Distance table loader.

use std::io::Read;

use camino::Utf8Path;
use courier_core::DistanceTable;

use crate::{DataError, fs};

/// Load a headerless, possibly ragged distance table.
///
/// Row `i` lists distances from stop `i` to stops `0, 1, …`. Blank cells and
/// missing trailing cells are stored as gaps, so a lower-triangular table is
/// valid input.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read or a non-blank cell is
/// not a finite, non-negative number.
pub fn load_distance_table(path: &Utf8Path) -> Result<DistanceTable, DataError> {
    let file = fs::open_utf8_file(path)?;
    read_distance_table(file, path)
}

/// Parse a distance table from any reader; `source` labels errors.
///
/// # Errors
///
/// See [`load_distance_table`].
///
/// # Examples
/// ```
/// use camino::Utf8Path;
///
/// let csv = "0.0\n7.2,0.0\n3.8,,0.0\n";
/// let table = courier_data::read_distance_table(csv.as_bytes(), Utf8Path::new("d.csv"))?;
/// assert_eq!(table.distance(0, 2), Ok(3.8));
/// assert!(table.distance(1, 2).is_err());
/// # Ok::<(), courier_data::DataError>(())
/// ```
pub fn read_distance_table<R: Read>(reader: R, source: &Utf8Path) -> Result<DistanceTable, DataError> {
    let mut csv = fs::csv_reader(reader);
    let mut rows = Vec::new();
    for (offset, record) in csv.records().enumerate() {
        let row = offset + 1;
        let record = record.map_err(|err| DataError::Csv {
            path: source.to_path_buf(),
            source: err,
        })?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(column, cell)| parse_cell(cell, source, row, column + 1))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(cells);
    }
    log::debug!("loaded a {}-row distance table from {source}", rows.len());
    Ok(DistanceTable::new(rows))
}

fn parse_cell(
    cell: &str,
    source: &Utf8Path,
    row: usize,
    column: usize,
) -> Result<Option<f64>, DataError> {
    if cell.is_empty() {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(distance) if distance.is_finite() && distance >= 0.0 => Ok(Some(distance)),
        _ => Err(DataError::InvalidDistance {
            path: source.to_path_buf(),
            row,
            column,
            value: cell.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn read(csv: &str) -> Result<DistanceTable, DataError> {
        read_distance_table(csv.as_bytes(), Utf8Path::new("distance_table.csv"))
    }

    #[rstest]
    fn triangular_tables_answer_both_directions() {
        let table = read("0.0\n7.2,0.0\n3.8,7.1,0.0\n").expect("table");
        assert_eq!(table.len(), 3);
        assert_eq!(table.distance(2, 1), Ok(7.1));
        assert_eq!(table.distance(1, 2), Ok(7.1));
    }

    #[rstest]
    fn blank_cells_are_gaps() {
        let table = read("0.0,,\n, 0.0,\n4.4,,0.0\n").expect("table");
        assert_eq!(table.distance(0, 2), Ok(4.4));
        assert!(table.distance(0, 1).is_err());
    }

    #[rstest]
    #[case("0.0\nfar,0.0\n", 2, 1)]
    #[case("0.0\n7.2,-1\n", 2, 2)]
    #[case("0.0,NaN\n", 1, 2)]
    #[case("0.0,inf\n", 1, 2)]
    fn rejects_unusable_cells(#[case] csv: &str, #[case] row: usize, #[case] column: usize) {
        match read(csv) {
            Err(DataError::InvalidDistance {
                row: bad_row,
                column: bad_column,
                ..
            }) => assert_eq!((bad_row, bad_column), (row, column)),
            other => panic!("expected an invalid distance, got {other:?}"),
        }
    }
}
