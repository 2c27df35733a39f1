//! In-memory distance provider, a trivial router and scenario builders used
//! by unit tests, behaviour tests, property tests and benchmarks.
//!
//! The helpers are gated behind the `test-support` feature (and `cfg(test)`).

use std::collections::HashMap;

use crate::{
    DeliveredStop, DeliveryAddress, DistanceError, DistanceProvider, Package, PackageId,
    PackageStore, RouteReport, Router, RoutingError, TimeOfDay, Truck, TruckError, TruckId,
    TruckPlan,
};

/// `DistanceProvider` over hand-written address pairs.
///
/// Pairs are symmetric and an address is always zero distance from itself.
#[derive(Debug, Clone, Default)]
pub struct FixedDistances {
    pairs: HashMap<(String, String), f64>,
}

impl FixedDistances {
    /// Record the distance between `a` and `b`.
    #[must_use]
    pub fn with(mut self, a: &str, b: &str, distance: f64) -> Self {
        self.pairs.insert((a.to_owned(), b.to_owned()), distance);
        self
    }
}

impl DistanceProvider for FixedDistances {
    fn distance_between(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        if from == to {
            return Ok(0.0);
        }
        let forward = (from.to_owned(), to.to_owned());
        let backward = (to.to_owned(), from.to_owned());
        self.pairs
            .get(&forward)
            .or_else(|| self.pairs.get(&backward))
            .copied()
            .ok_or_else(|| DistanceError::UnknownAddress {
                address: to.to_owned(),
            })
    }
}

/// `Router` that delivers packages in manifest order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestOrderRouter;

impl Router for ManifestOrderRouter {
    fn route(
        &self,
        truck: &mut Truck,
        packages: &mut PackageStore,
        distances: &dyn DistanceProvider,
    ) -> Result<RouteReport, RoutingError> {
        let mut report = RouteReport::new(truck.id());
        for id in truck.packages().to_vec() {
            let package = packages.get_mut(id).ok_or(RoutingError::UnknownPackage {
                truck: truck.id(),
                package: id,
            })?;
            package.load_onto(truck.id());
            let address = package.address().street.clone();
            let distance = distances
                .distance_between(truck.location(), &address)
                .map_err(|source| RoutingError::Distance {
                    truck: truck.id(),
                    package: id,
                    source,
                })?;
            let delivered_at = truck.travel_to(&address, distance)?;
            package.record_delivery(delivered_at, truck.departure())?;
            report.stops.push(DeliveredStop {
                package: id,
                address,
                distance,
                delivered_at,
            });
        }
        Ok(report)
    }
}

/// Street address of the hub used by generated scenarios.
pub const HUB: &str = "4001 South 700 East";

/// Packages, a single truck and the distances between their stops.
#[derive(Debug, Clone)]
pub struct LineScenario {
    /// Package roster, one package per position.
    pub packages: PackageStore,
    /// Truck carrying every package, departing at 08:00 at speed 18.
    pub truck: Truck,
    /// Distances between every pair of stops.
    pub distances: FixedDistances,
}

/// Street address of the package at `index` in a generated scenario.
pub fn address_of(index: usize) -> String {
    format!("{} Line St", index + 1)
}

/// Place packages along a straight road.
///
/// `positions[i]` is the mileage of package `i + 1` from the hub, so the
/// distance between two stops is the difference of their positions.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::line_scenario;
///
/// let scenario = line_scenario(&[3, 5])?;
/// assert_eq!(scenario.packages.len(), 2);
/// assert_eq!(scenario.truck.packages().len(), 2);
/// # Ok::<(), courier_core::TruckError>(())
/// ```
pub fn line_scenario(positions: &[u32]) -> Result<LineScenario, TruckError> {
    let stops: Vec<(String, u32)> = std::iter::once((HUB.to_owned(), 0))
        .chain(
            positions
                .iter()
                .enumerate()
                .map(|(index, &position)| (address_of(index), position)),
        )
        .collect();

    let mut distances = FixedDistances::default();
    for (offset, (from, from_position)) in stops.iter().enumerate() {
        for (to, to_position) in stops.iter().skip(offset + 1) {
            distances = distances.with(from, to, f64::from(from_position.abs_diff(*to_position)));
        }
    }

    let ids: Vec<PackageId> = (1..=positions.len())
        .filter_map(|raw| u32::try_from(raw).ok())
        .map(PackageId::from)
        .collect();
    let packages = ids
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            Package::new(
                id,
                DeliveryAddress::new(address_of(index), "Salt Lake City", "UT", "84115"),
            )
        })
        .collect();
    let truck = Truck::new(TruckPlan {
        id: TruckId::from(1),
        capacity: 16,
        speed: 18.0,
        departure: TimeOfDay::from_hms(8, 0, 0),
        hub: HUB.to_owned(),
        packages: ids,
    })?;

    Ok(LineScenario {
        packages,
        truck,
        distances,
    })
}
