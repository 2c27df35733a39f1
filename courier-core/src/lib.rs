//! Core domain model for the courier delivery engine.
//!
//! The crate owns the package and truck state, the time-of-day model, the
//! distance lookup and the query-time rules (status resolution and address
//! correction). Dispatch heuristics plug in through the [`Router`] trait and
//! are driven once per truck by [`SimulationBuilder`].
//!
//! # Examples
//!
//! ```
//! use courier_core::{DeliveryStatus, TimeOfDay, status};
//!
//! let loaded = TimeOfDay::from_hms(9, 10, 0);
//! let delivered: TimeOfDay = "09:52:20".parse()?;
//! let query = TimeOfDay::from_hms(9, 30, 0);
//!
//! assert_eq!(status::resolve(loaded, query, delivered), DeliveryStatus::EnRoute);
//! # Ok::<(), courier_core::TimeOfDayError>(())
//! ```

mod correction;
mod distance;
mod package;
mod router;
mod simulation;
pub mod status;
mod store;
mod time;
mod truck;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use correction::AddressCorrection;
pub use distance::{
    AddressMatching, DistanceError, DistanceProvider, DistanceTable, Stop, StopDistances,
    StopIndex,
};
pub use package::{DeliveryAddress, DeliveryStatus, Package, PackageError, PackageId};
pub use router::{DeliveredStop, RouteReport, Router, RoutingError};
pub use simulation::{
    FleetSummary, PackageSnapshot, QueryError, Simulation, SimulationBuilder, SimulationError,
    TruckSummary,
};
pub use store::PackageStore;
pub use time::{TimeOfDay, TimeOfDayError};
pub use truck::{Truck, TruckError, TruckId, TruckPlan};
