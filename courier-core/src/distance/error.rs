use thiserror::Error;

/// Errors raised while resolving a distance.
///
/// Every variant signals inconsistent input data rather than a transient
/// failure; routing aborts when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// A stop index lies outside the table.
    #[error("stop index {index} is outside a table of {size} rows")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of rows in the table.
        size: usize,
    },
    /// Neither mirrored cell holds a distance.
    #[error("no distance recorded between stops {from} and {to}")]
    MissingCell {
        /// Origin index.
        from: usize,
        /// Destination index.
        to: usize,
    },
    /// No stop matches the address.
    #[error("address {address:?} does not match any stop")]
    UnknownAddress {
        /// Address that failed to resolve.
        address: String,
    },
    /// Several stops contain the address and strict matching is enabled.
    #[error("address {address:?} matches {candidates} stops")]
    AmbiguousAddress {
        /// Address that failed to resolve.
        address: String,
        /// Number of matching stops.
        candidates: usize,
    },
}
