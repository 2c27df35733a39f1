//! Single-pass delivery simulation and its query API.
//!
//! [`SimulationBuilder`] validates the fleet manifest against the package
//! roster and routes every truck once, in fleet order. The resulting
//! [`Simulation`] is read-only: every query re-derives addresses and statuses
//! from the recorded facts.

use std::{collections::BTreeMap, time::Duration};

use thiserror::Error;

use crate::{
    AddressCorrection, DeliveryAddress, DeliveryStatus, DistanceProvider, Package, PackageId,
    PackageStore, RouteReport, Router, RoutingError, TimeOfDay, Truck, TruckId,
};

/// Errors raised while building a [`Simulation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Two trucks share an identifier.
    #[error("truck {truck} appears more than once in the fleet")]
    DuplicateTruck {
        /// Repeated identifier.
        truck: TruckId,
    },
    /// A manifest names a package missing from the roster.
    #[error("truck {truck} is assigned unknown package {package}")]
    UnknownPackage {
        /// Truck whose manifest is wrong.
        truck: TruckId,
        /// Missing package.
        package: PackageId,
    },
    /// A package is assigned to more than one truck, or twice to one truck.
    #[error("package {package} is assigned to truck {first} and truck {second}")]
    DuplicateAssignment {
        /// Package assigned twice.
        package: PackageId,
        /// First truck carrying it.
        first: TruckId,
        /// Second truck carrying it.
        second: TruckId,
    },
    /// Routing a truck failed.
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
}

/// Errors raised by [`Simulation`] queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No package has the requested identifier.
    #[error("package {0} not found")]
    PackageNotFound(PackageId),
}

/// Collects the inputs of a simulation and runs it.
///
/// Trucks are routed in the order given. Packages that no truck carries stay
/// in the roster and report [`DeliveryStatus::Unknown`].
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    packages: PackageStore,
    trucks: Vec<Truck>,
    correction: Option<AddressCorrection>,
}

impl SimulationBuilder {
    /// Start from a package roster and the fleet in routing order.
    pub const fn new(packages: PackageStore, trucks: Vec<Truck>) -> Self {
        Self {
            packages,
            trucks,
            correction: None,
        }
    }

    /// Apply a time-gated address correction to queries.
    #[must_use]
    pub fn with_address_correction(mut self, correction: AddressCorrection) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Validate the assignment and route every truck.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] for inconsistent manifests and for the
    /// first truck whose routing fails.
    pub fn build(
        self,
        router: &dyn Router,
        distances: &dyn DistanceProvider,
    ) -> Result<Simulation, SimulationError> {
        let Self {
            mut packages,
            mut trucks,
            correction,
        } = self;
        validate_assignment(&packages, &trucks)?;

        let mut routes = Vec::with_capacity(trucks.len());
        for truck in &mut trucks {
            if truck.is_over_capacity() {
                log::warn!(
                    "truck {} carries {} packages over a capacity of {}",
                    truck.id(),
                    truck.packages().len(),
                    truck.capacity()
                );
            }
            routes.push(router.route(truck, &mut packages, distances)?);
        }

        Ok(Simulation {
            packages,
            trucks,
            routes,
            correction,
        })
    }
}

fn validate_assignment(packages: &PackageStore, trucks: &[Truck]) -> Result<(), SimulationError> {
    let mut owners: BTreeMap<PackageId, TruckId> = BTreeMap::new();
    let mut seen_trucks = Vec::with_capacity(trucks.len());
    for truck in trucks {
        if seen_trucks.contains(&truck.id()) {
            return Err(SimulationError::DuplicateTruck { truck: truck.id() });
        }
        seen_trucks.push(truck.id());
        for &package in truck.packages() {
            if !packages.contains(package) {
                return Err(SimulationError::UnknownPackage {
                    truck: truck.id(),
                    package,
                });
            }
            if let Some(&first) = owners.get(&package) {
                return Err(SimulationError::DuplicateAssignment {
                    package,
                    first,
                    second: truck.id(),
                });
            }
            owners.insert(package, truck.id());
        }
    }
    for package in packages.iter().filter(|p| !owners.contains_key(&p.id())) {
        log::warn!("package {} is not assigned to any truck", package.id());
    }
    Ok(())
}

/// Time-relative view of a package.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageSnapshot {
    /// Package identifier.
    pub id: PackageId,
    /// Query time the view was derived for.
    pub at: TimeOfDay,
    /// Truck carrying the package.
    pub truck: Option<TruckId>,
    /// Address as known at the query time.
    pub address: DeliveryAddress,
    /// Deadline, verbatim.
    pub deadline: String,
    /// Weight, verbatim.
    pub weight: String,
    /// Special-handling notes.
    pub notes: String,
    /// Status at the query time.
    pub status: DeliveryStatus,
    /// Time the carrying truck left the hub.
    pub loaded_at: Option<TimeOfDay>,
    /// Simulated delivery time.
    pub expected_delivery: Option<TimeOfDay>,
}

/// Distance and time totals for one truck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckSummary {
    /// Truck identifier.
    pub id: TruckId,
    /// Total distance driven.
    pub distance: f64,
    /// Departure from the hub.
    pub departure: TimeOfDay,
    /// Time of the last delivery.
    pub finished_at: TimeOfDay,
    /// Elapsed time between departure and the last delivery.
    #[cfg_attr(feature = "serde", serde(with = "run_time_serde"))]
    pub run_time: Duration,
}

/// Totals for the whole fleet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSummary {
    /// Per-truck totals in fleet order.
    pub trucks: Vec<TruckSummary>,
    /// Combined distance of every truck.
    pub total_distance: f64,
    /// Combined run time of every truck.
    #[cfg_attr(feature = "serde", serde(with = "run_time_serde"))]
    pub total_run_time: Duration,
}

/// Run times render like clock readings: `HH:MM:SS`.
#[cfg(feature = "serde")]
mod run_time_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    use crate::TimeOfDay;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&TimeOfDay::from_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        TimeOfDay::deserialize(deserializer).map(TimeOfDay::as_duration)
    }
}

/// A routed delivery day, queried at arbitrary times.
#[derive(Debug, Clone)]
pub struct Simulation {
    packages: PackageStore,
    trucks: Vec<Truck>,
    routes: Vec<RouteReport>,
    correction: Option<AddressCorrection>,
}

impl Simulation {
    /// Look up a package by identifier.
    ///
    /// # Errors
    ///
    /// [`QueryError::PackageNotFound`] for unknown identifiers.
    pub fn package(&self, id: PackageId) -> Result<&Package, QueryError> {
        self.packages.get(id).ok_or(QueryError::PackageNotFound(id))
    }

    /// Status of a package at `at`.
    ///
    /// # Errors
    ///
    /// [`QueryError::PackageNotFound`] for unknown identifiers.
    pub fn resolve_status(&self, id: PackageId, at: TimeOfDay) -> Result<DeliveryStatus, QueryError> {
        self.package(id).map(|package| package.status_at(at))
    }

    /// Full view of a package at `at`, including any address correction.
    ///
    /// # Errors
    ///
    /// [`QueryError::PackageNotFound`] for unknown identifiers.
    pub fn package_at(&self, id: PackageId, at: TimeOfDay) -> Result<PackageSnapshot, QueryError> {
        self.package(id).map(|package| self.snapshot(package, at))
    }

    /// Views of every package at `at`, in identifier order.
    pub fn packages_at(&self, at: TimeOfDay) -> Vec<PackageSnapshot> {
        self.packages
            .iter()
            .map(|package| self.snapshot(package, at))
            .collect()
    }

    /// Package roster with recorded delivery facts.
    pub const fn packages(&self) -> &PackageStore {
        &self.packages
    }

    /// Trucks in fleet order, as left after routing.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Route reports in fleet order.
    pub fn routes(&self) -> &[RouteReport] {
        &self.routes
    }

    /// Per-truck and combined distance and run time.
    pub fn fleet_summary(&self) -> FleetSummary {
        let trucks: Vec<TruckSummary> = self
            .trucks
            .iter()
            .map(|truck| TruckSummary {
                id: truck.id(),
                distance: truck.distance_traveled(),
                departure: truck.departure(),
                finished_at: truck.clock(),
                run_time: truck.run_time(),
            })
            .collect();
        let total_distance = trucks.iter().map(|summary| summary.distance).sum();
        let total_run_time = trucks.iter().map(|summary| summary.run_time).sum();
        FleetSummary {
            trucks,
            total_distance,
            total_run_time,
        }
    }

    fn snapshot(&self, package: &Package, at: TimeOfDay) -> PackageSnapshot {
        let address = self
            .correction
            .as_ref()
            .map_or_else(|| package.address(), |rule| rule.address_at(package, at));
        PackageSnapshot {
            id: package.id(),
            at,
            truck: package.truck(),
            address: address.clone(),
            deadline: package.deadline().to_owned(),
            weight: package.weight().to_owned(),
            notes: package.notes().to_owned(),
            status: package.status_at(at),
            loaded_at: package.loaded_at(),
            expected_delivery: package.delivered_at(),
        }
    }
}
