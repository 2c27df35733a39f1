use super::{DistanceError, DistanceTable, StopIndex};

/// Distance between two addresses.
///
/// Routers depend on this trait rather than on a concrete table so tests can
/// supply hand-written distances.
///
/// # Examples
/// ```
/// use courier_core::{DistanceError, DistanceProvider};
///
/// struct Flat;
///
/// impl DistanceProvider for Flat {
///     fn distance_between(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
///         Ok(if from == to { 0.0 } else { 1.0 })
///     }
/// }
///
/// assert_eq!(Flat.distance_between("a", "b")?, 1.0);
/// # Ok::<(), DistanceError>(())
/// ```
pub trait DistanceProvider: Send + Sync {
    /// Distance from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`DistanceError`] when either address or the pair is unknown.
    fn distance_between(&self, from: &str, to: &str) -> Result<f64, DistanceError>;
}

/// [`DistanceProvider`] backed by a stops table and a distance table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopDistances {
    stops: StopIndex,
    table: DistanceTable,
}

impl StopDistances {
    /// Combine an address index with its distance table.
    pub const fn new(stops: StopIndex, table: DistanceTable) -> Self {
        Self { stops, table }
    }
}

impl DistanceProvider for StopDistances {
    fn distance_between(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        let origin = self.stops.resolve(from)?;
        let destination = self.stops.resolve(to)?;
        self.table.distance(origin, destination)
    }
}
