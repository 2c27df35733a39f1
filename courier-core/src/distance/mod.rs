//! Resolve distances between named delivery locations.
//!
//! A [`DistanceTable`] stores one mileage per pair of stop indices, usually in
//! only one of the two mirrored cells. A [`StopIndex`] maps street addresses to
//! those indices, and [`StopDistances`] combines both behind the
//! [`DistanceProvider`] trait consumed by routers.

mod error;
mod provider;
mod stops;
mod table;

pub use error::DistanceError;
pub use provider::{DistanceProvider, StopDistances};
pub use stops::{AddressMatching, Stop, StopIndex};
pub use table::DistanceTable;
