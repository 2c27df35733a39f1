//! Nearest-neighbour routing.
//!
//! Every package on the manifest is loaded before the truck moves. From the
//! truck's current location the router computes the distance to each
//! undelivered package, drives to the closest, stamps the delivery and
//! repeats from the new location.

use std::cmp::Ordering;

use courier_core::{
    DeliveredStop, DistanceProvider, PackageId, PackageStore, RouteReport, Router, RoutingError,
    Truck, TruckId,
};

/// Rule for choosing between equally distant packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the candidate that appears first on the manifest.
    #[default]
    FirstSeen,
    /// Keep the candidate that appears last on the manifest.
    LastSeen,
    /// Prefer the candidate with the lowest package identifier.
    LowestPackageId,
}

/// Configuration for [`NearestNeighbourRouter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NearestNeighbourConfig {
    /// How equal distances are resolved.
    pub tie_break: TieBreak,
}

/// Greedy router that always visits the closest undelivered package next.
///
/// # Examples
/// ```
/// use courier_core::test_support::FixedDistances;
/// use courier_core::{
///     DeliveryAddress, Package, PackageId, PackageStore, Router, TimeOfDay, Truck, TruckId,
///     TruckPlan,
/// };
/// use courier_router::NearestNeighbourRouter;
///
/// let hub = "4001 South 700 East";
/// let mut packages: PackageStore = [
///     Package::new(PackageId::from(1), DeliveryAddress::new("far", "SLC", "UT", "84115")),
///     Package::new(PackageId::from(2), DeliveryAddress::new("near", "SLC", "UT", "84115")),
/// ]
/// .into_iter()
/// .collect();
/// let mut truck = Truck::new(TruckPlan {
///     id: TruckId::from(1),
///     capacity: 16,
///     speed: 18.0,
///     departure: TimeOfDay::from_hms(8, 0, 0),
///     hub: hub.into(),
///     packages: vec![PackageId::from(1), PackageId::from(2)],
/// })?;
/// let distances = FixedDistances::default()
///     .with(hub, "far", 5.0)
///     .with(hub, "near", 3.0)
///     .with("near", "far", 2.0);
///
/// let report = NearestNeighbourRouter::default().route(&mut truck, &mut packages, &distances)?;
/// let order: Vec<u32> = report.delivery_order().map(PackageId::get).collect();
/// assert_eq!(order, vec![2, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbourRouter {
    config: NearestNeighbourConfig,
}

impl NearestNeighbourRouter {
    /// Construct a router with explicit configuration.
    #[must_use]
    pub const fn with_config(config: NearestNeighbourConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> NearestNeighbourConfig {
        self.config
    }

    /// Index and distance of the next package to deliver, if any remain.
    fn nearest(
        &self,
        truck: &Truck,
        pending: &[Pending],
        distances: &dyn DistanceProvider,
    ) -> Result<Option<(usize, f64)>, RoutingError> {
        let mut best: Option<(usize, f64, PackageId)> = None;
        for (index, candidate) in pending.iter().enumerate() {
            let distance = distances
                .distance_between(truck.location(), &candidate.address)
                .map_err(|source| RoutingError::Distance {
                    truck: truck.id(),
                    package: candidate.id,
                    source,
                })?;
            let replace = match best {
                None => true,
                Some((_, best_distance, best_id)) => {
                    self.prefers(distance, candidate.id, best_distance, best_id)
                }
            };
            if replace {
                best = Some((index, distance, candidate.id));
            }
        }
        Ok(best.map(|(index, distance, _)| (index, distance)))
    }

    fn prefers(&self, distance: f64, id: PackageId, best_distance: f64, best_id: PackageId) -> bool {
        match distance.partial_cmp(&best_distance) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => match self.config.tie_break {
                TieBreak::FirstSeen => false,
                TieBreak::LastSeen => true,
                TieBreak::LowestPackageId => id < best_id,
            },
            Some(Ordering::Greater) | None => false,
        }
    }
}

/// A loaded package that still has to be delivered.
#[derive(Debug)]
struct Pending {
    id: PackageId,
    address: String,
}

/// Mark every manifest package as en route on `truck`.
fn load(truck: &Truck, packages: &mut PackageStore) -> Result<Vec<Pending>, RoutingError> {
    let truck_id = truck.id();
    truck
        .packages()
        .iter()
        .map(|&id| {
            let package = packages
                .get_mut(id)
                .ok_or_else(|| unknown(truck_id, id))?;
            package.load_onto(truck_id);
            Ok(Pending {
                id,
                address: package.address().street.clone(),
            })
        })
        .collect()
}

fn unknown(truck: TruckId, package: PackageId) -> RoutingError {
    RoutingError::UnknownPackage { truck, package }
}

impl Router for NearestNeighbourRouter {
    fn route(
        &self,
        truck: &mut Truck,
        packages: &mut PackageStore,
        distances: &dyn DistanceProvider,
    ) -> Result<RouteReport, RoutingError> {
        let mut pending = load(truck, packages)?;
        let mut report = RouteReport::new(truck.id());

        while let Some((index, distance)) = self.nearest(truck, &pending, distances)? {
            let next = pending.remove(index);
            let delivered_at = truck.travel_to(&next.address, distance)?;
            packages
                .get_mut(next.id)
                .ok_or_else(|| unknown(truck.id(), next.id))?
                .record_delivery(delivered_at, truck.departure())?;
            log::debug!(
                "truck {} delivered package {} to {:?} at {delivered_at} after {distance} miles",
                truck.id(),
                next.id,
                next.address
            );
            report.stops.push(DeliveredStop {
                package: next.id,
                address: next.address,
                distance,
                delivered_at,
            });
        }

        log::info!(
            "truck {} finished {} deliveries at {}, {} miles travelled",
            truck.id(),
            report.stops.len(),
            truck.clock(),
            truck.distance_traveled()
        );
        Ok(report)
    }
}
