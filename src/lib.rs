//! Facade crate for the courier delivery engine.
//!
//! This crate re-exports the core domain types and exposes the
//! nearest-neighbour router and the file loaders behind feature flags.

#![forbid(unsafe_code)]

pub use courier_core::{
    AddressCorrection, AddressMatching, DeliveredStop, DeliveryAddress, DeliveryStatus,
    DistanceError, DistanceProvider, DistanceTable, FleetSummary, Package, PackageError,
    PackageId, PackageSnapshot, PackageStore, QueryError, RouteReport, Router, RoutingError,
    Simulation, SimulationBuilder, SimulationError, Stop, StopDistances, StopIndex, TimeOfDay,
    TimeOfDayError, Truck, TruckError, TruckId, TruckPlan, TruckSummary, status,
};

#[cfg(feature = "test-support")]
pub use courier_core::test_support;

#[cfg(feature = "router-nearest")]
pub use courier_router::{NearestNeighbourConfig, NearestNeighbourRouter, TieBreak};

#[cfg(feature = "loader-csv")]
pub use courier_data::{DataError, Dataset, DatasetPaths};
