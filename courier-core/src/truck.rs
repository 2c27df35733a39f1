//! Delivery trucks and their simulated progress through the day.

use std::{fmt, time::Duration};

use thiserror::Error;

use crate::{PackageId, TimeOfDay};

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Identifier of a truck within the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TruckId(u32);

impl TruckId {
    /// Raw numeric identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TruckId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static description of a truck before the simulation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckPlan {
    /// Fleet identifier.
    pub id: TruckId,
    /// Nominal package capacity. Informational only.
    pub capacity: usize,
    /// Average speed in distance units per hour.
    pub speed: f64,
    /// Time the truck leaves the hub.
    pub departure: TimeOfDay,
    /// Street address of the hub.
    pub hub: String,
    /// Packages loaded onto the truck, in manifest order.
    pub packages: Vec<PackageId>,
}

/// Errors raised when constructing or moving a [`Truck`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TruckError {
    /// Speed must be finite and strictly positive.
    #[error("truck {truck} has invalid speed {speed}")]
    InvalidSpeed {
        /// Offending truck.
        truck: TruckId,
        /// Rejected speed.
        speed: f64,
    },
    /// Leg distances must be finite and non-negative.
    #[error("truck {truck} cannot travel a distance of {distance}")]
    InvalidDistance {
        /// Offending truck.
        truck: TruckId,
        /// Rejected distance.
        distance: f64,
    },
}

/// A truck with its simulated position, odometer and clock.
///
/// # Examples
/// ```
/// use courier_core::{PackageId, TimeOfDay, Truck, TruckId, TruckPlan};
///
/// let mut truck = Truck::new(TruckPlan {
///     id: TruckId::from(1),
///     capacity: 16,
///     speed: 18.0,
///     departure: TimeOfDay::from_hms(8, 0, 0),
///     hub: "4001 South 700 East".into(),
///     packages: vec![PackageId::from(1)],
/// })?;
///
/// let arrival = truck.travel_to("195 W Oakland Ave", 9.0)?;
/// assert_eq!(arrival, TimeOfDay::from_hms(8, 30, 0));
/// assert_eq!(truck.location(), "195 W Oakland Ave");
/// # Ok::<(), courier_core::TruckError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    id: TruckId,
    capacity: usize,
    speed: f64,
    packages: Vec<PackageId>,
    location: String,
    distance_traveled: f64,
    clock: TimeOfDay,
    departure: TimeOfDay,
}

impl Truck {
    /// Validate a plan and place the truck at its hub.
    pub fn new(plan: TruckPlan) -> Result<Self, TruckError> {
        if !plan.speed.is_finite() || plan.speed <= 0.0 {
            return Err(TruckError::InvalidSpeed {
                truck: plan.id,
                speed: plan.speed,
            });
        }
        Ok(Self {
            id: plan.id,
            capacity: plan.capacity,
            speed: plan.speed,
            packages: plan.packages,
            location: plan.hub,
            distance_traveled: 0.0,
            clock: plan.departure,
            departure: plan.departure,
        })
    }

    /// Fleet identifier.
    pub const fn id(&self) -> TruckId {
        self.id
    }

    /// Nominal package capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Average speed in distance units per hour.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Packages assigned to the truck, in manifest order.
    pub fn packages(&self) -> &[PackageId] {
        &self.packages
    }

    /// Address of the last delivery, or the hub before the first one.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Total distance driven so far.
    pub const fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Current simulated time.
    pub const fn clock(&self) -> TimeOfDay {
        self.clock
    }

    /// Time the truck left the hub.
    pub const fn departure(&self) -> TimeOfDay {
        self.departure
    }

    /// Time spent on the road since departure.
    pub const fn run_time(&self) -> Duration {
        self.clock.saturating_since(self.departure)
    }

    /// Whether more packages are assigned than the nominal capacity.
    pub fn is_over_capacity(&self) -> bool {
        self.packages.len() > self.capacity
    }

    /// Drive `distance` units to `address`, advancing the odometer and clock.
    ///
    /// Returns the arrival time.
    pub fn travel_to(&mut self, address: &str, distance: f64) -> Result<TimeOfDay, TruckError> {
        let truck = self.id;
        let invalid = || TruckError::InvalidDistance { truck, distance };
        if !distance.is_finite() || distance < 0.0 {
            return Err(invalid());
        }
        let elapsed = Duration::try_from_secs_f64(distance * SECONDS_PER_HOUR / self.speed)
            .map_err(|_| invalid())?;
        address.clone_into(&mut self.location);
        self.distance_traveled += distance;
        self.clock = self.clock.advance(elapsed);
        Ok(self.clock)
    }
}
