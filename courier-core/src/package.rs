//! Packages awaiting delivery and their recorded delivery facts.

use std::fmt;

use thiserror::Error;

use crate::{TimeOfDay, TruckId, status};

/// Stable identifier of a package.
///
/// # Examples
/// ```
/// use courier_core::PackageId;
///
/// let id = PackageId::from(9);
/// assert_eq!(id.get(), 9);
/// assert_eq!(id.to_string(), "9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackageId(u32);

impl PackageId {
    /// Raw numeric identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PackageId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address a package is delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryAddress {
    /// Street line; this is the part matched against the stops table.
    pub street: String,
    /// City name.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub zipcode: String,
}

impl DeliveryAddress {
    /// Construct an address from its parts.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zipcode: zipcode.into(),
        }
    }
}

impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zipcode
        )
    }
}

/// Delivery progress of a package as seen at some point in the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeliveryStatus {
    /// Waiting at the hub.
    #[default]
    AtHub,
    /// Loaded on a truck that has left the hub.
    EnRoute,
    /// Handed over at the delivery address.
    Delivered,
    /// No consistent status can be derived from the recorded times.
    Unknown,
}

impl DeliveryStatus {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AtHub => "At the hub",
            Self::EnRoute => "En route",
            Self::Delivered => "Delivered",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised when recording delivery facts on a [`Package`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    /// The package already carries a delivery time.
    #[error("package {package} was already delivered at {delivered_at}")]
    AlreadyDelivered {
        /// Package that was delivered twice.
        package: PackageId,
        /// Previously recorded delivery time.
        delivered_at: TimeOfDay,
    },
}

/// A package on the day's roster.
///
/// Deadline and weight are carried verbatim from the roster and never
/// interpreted.
///
/// # Examples
/// ```
/// use courier_core::{DeliveryAddress, DeliveryStatus, Package, PackageId};
///
/// let package = Package::new(
///     PackageId::from(1),
///     DeliveryAddress::new("195 W Oakland Ave", "Salt Lake City", "UT", "84115"),
/// )
/// .with_deadline("10:30 AM")
/// .with_weight("21");
///
/// assert_eq!(package.deadline(), "10:30 AM");
/// assert_eq!(package.status(), DeliveryStatus::AtHub);
/// assert!(package.delivered_at().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    id: PackageId,
    address: DeliveryAddress,
    deadline: String,
    weight: String,
    notes: String,
    status: DeliveryStatus,
    loaded_at: Option<TimeOfDay>,
    delivered_at: Option<TimeOfDay>,
    truck: Option<TruckId>,
}

impl Package {
    /// Construct a package waiting at the hub.
    pub fn new(id: PackageId, address: DeliveryAddress) -> Self {
        Self {
            id,
            address,
            deadline: String::new(),
            weight: String::new(),
            notes: String::new(),
            status: DeliveryStatus::AtHub,
            loaded_at: None,
            delivered_at: None,
            truck: None,
        }
    }

    /// Set the delivery deadline while returning `self` for chaining.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    /// Set the weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Set the special-handling notes while returning `self` for chaining.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Package identifier.
    pub const fn id(&self) -> PackageId {
        self.id
    }

    /// Delivery address as loaded from the roster.
    pub const fn address(&self) -> &DeliveryAddress {
        &self.address
    }

    /// Delivery deadline, verbatim.
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Weight, verbatim.
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Special-handling notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Status as last written by the simulation.
    ///
    /// Use [`Package::status_at`] for a time-relative view.
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Time the carrying truck left the hub.
    pub const fn loaded_at(&self) -> Option<TimeOfDay> {
        self.loaded_at
    }

    /// Time the package was delivered.
    pub const fn delivered_at(&self) -> Option<TimeOfDay> {
        self.delivered_at
    }

    /// Truck the package is assigned to.
    pub const fn truck(&self) -> Option<TruckId> {
        self.truck
    }

    /// Put the package on `truck` and mark it en route.
    pub const fn load_onto(&mut self, truck: TruckId) {
        self.truck = Some(truck);
        self.status = DeliveryStatus::EnRoute;
    }

    /// Record the delivery of the package.
    ///
    /// Delivery facts are written once; a second call is rejected and leaves
    /// the package untouched.
    pub fn record_delivery(
        &mut self,
        delivered_at: TimeOfDay,
        loaded_at: TimeOfDay,
    ) -> Result<(), PackageError> {
        if let Some(previous) = self.delivered_at {
            return Err(PackageError::AlreadyDelivered {
                package: self.id,
                delivered_at: previous,
            });
        }
        self.delivered_at = Some(delivered_at);
        self.loaded_at = Some(loaded_at);
        self.status = DeliveryStatus::Delivered;
        Ok(())
    }

    /// Derive the package status as seen at `query`.
    ///
    /// Packages without recorded load and delivery times report
    /// [`DeliveryStatus::Unknown`].
    pub fn status_at(&self, query: TimeOfDay) -> DeliveryStatus {
        match (self.loaded_at, self.delivered_at) {
            (Some(loaded), Some(delivered)) => status::resolve(loaded, query, delivered),
            _ => DeliveryStatus::Unknown,
        }
    }
}
