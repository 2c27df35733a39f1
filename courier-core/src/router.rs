//! Routing seam between the simulation and concrete dispatch heuristics.

use thiserror::Error;

use crate::{
    DistanceError, DistanceProvider, PackageError, PackageId, PackageStore, TimeOfDay, Truck,
    TruckError, TruckId,
};

/// One delivery made by a truck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveredStop {
    /// Package handed over.
    pub package: PackageId,
    /// Street address the truck drove to.
    pub address: String,
    /// Length of the leg that ended at this stop.
    pub distance: f64,
    /// Arrival time at the stop.
    pub delivered_at: TimeOfDay,
}

/// Outcome of routing a single truck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteReport {
    /// Truck that drove the route.
    pub truck: TruckId,
    /// Deliveries in the order they were made.
    pub stops: Vec<DeliveredStop>,
}

impl RouteReport {
    /// Start an empty report for `truck`.
    pub const fn new(truck: TruckId) -> Self {
        Self {
            truck,
            stops: Vec::new(),
        }
    }

    /// Packages in delivery order.
    pub fn delivery_order(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.stops.iter().map(|stop| stop.package)
    }
}

/// Errors raised while routing a truck.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The truck manifest names a package missing from the store.
    #[error("truck {truck} carries unknown package {package}")]
    UnknownPackage {
        /// Truck being routed.
        truck: TruckId,
        /// Missing package.
        package: PackageId,
    },
    /// The distance to a package's address could not be resolved.
    #[error("truck {truck} cannot reach package {package}: {source}")]
    Distance {
        /// Truck being routed.
        truck: TruckId,
        /// Package whose address failed to resolve.
        package: PackageId,
        /// Underlying lookup failure.
        #[source]
        source: DistanceError,
    },
    /// The truck rejected a leg.
    #[error(transparent)]
    Truck(#[from] TruckError),
    /// A package rejected its delivery record.
    #[error(transparent)]
    Package(#[from] PackageError),
}

/// Sequence a truck's deliveries.
///
/// Implementations move the truck through every package on its manifest,
/// recording each delivery on the package store. Routers must be
/// `Send + Sync` so a configured router can be shared between callers.
pub trait Router: Send + Sync {
    /// Drive `truck` until every package on its manifest is delivered.
    ///
    /// # Errors
    ///
    /// Returns a [`RoutingError`] when a package or distance cannot be
    /// resolved. The truck's run stops at the first failure.
    fn route(
        &self,
        truck: &mut Truck,
        packages: &mut PackageStore,
        distances: &dyn DistanceProvider,
    ) -> Result<RouteReport, RoutingError>;
}
