use super::DistanceError;

/// Mileage between stops, indexed by stop position.
///
/// Rows may be ragged: a lower-triangular table, where row `i` holds the
/// distances to stops `0..=i`, is the usual shape. Lookups read
/// `rows[to][from]` and fall back to the mirrored cell, so either half of the
/// matrix is enough.
///
/// # Examples
/// ```
/// use courier_core::DistanceTable;
///
/// let table = DistanceTable::new(vec![
///     vec![Some(0.0)],
///     vec![Some(7.2), Some(0.0)],
///     vec![Some(3.8), Some(7.1), Some(0.0)],
/// ]);
///
/// assert_eq!(table.distance(0, 2)?, 3.8);
/// assert_eq!(table.distance(2, 0)?, 3.8);
/// # Ok::<(), courier_core::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    rows: Vec<Vec<Option<f64>>>,
}

impl DistanceTable {
    /// Wrap pre-parsed rows; `None` marks an empty cell.
    pub const fn new(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { rows }
    }

    /// Number of rows, which is also the number of addressable stops.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between two stop indices.
    ///
    /// # Errors
    ///
    /// [`DistanceError::IndexOutOfRange`] when either index is past the last
    /// row, [`DistanceError::MissingCell`] when both mirrored cells are empty.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64, DistanceError> {
        self.check(from)?;
        self.check(to)?;
        self.cell(to, from)
            .or_else(|| self.cell(from, to))
            .ok_or(DistanceError::MissingCell { from, to })
    }

    fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied().flatten()
    }

    fn check(&self, index: usize) -> Result<(), DistanceError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(DistanceError::IndexOutOfRange {
                index,
                size: self.rows.len(),
            })
        }
    }
}
