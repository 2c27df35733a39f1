//! Time-gated address correction for a single package.
//!
//! One package on the roster is known to carry a wrong address until the
//! dispatcher learns the right one during the day. Queries before the
//! threshold show the placeholder address; queries at or after it show the
//! corrected one. The stored package is never modified, so the view depends
//! only on the query time.

use crate::{DeliveryAddress, Package, PackageId, TimeOfDay};

/// Rewrites one package's address once a threshold time is reached.
///
/// # Examples
/// ```
/// use courier_core::{AddressCorrection, DeliveryAddress, Package, PackageId, TimeOfDay};
///
/// let rule = AddressCorrection::default();
/// let package = Package::new(
///     PackageId::from(9),
///     DeliveryAddress::new("300 State St", "Salt Lake City", "UT", "84103"),
/// );
///
/// let before = rule.address_at(&package, TimeOfDay::from_hms(10, 19, 59));
/// let after = rule.address_at(&package, TimeOfDay::from_hms(10, 20, 0));
/// assert_eq!(before.street, "300 State St");
/// assert_eq!(after.street, "410 S State St.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressCorrection {
    /// Package the rule applies to.
    pub package: PackageId,
    /// First time at which the corrected address is shown.
    pub threshold: TimeOfDay,
    /// Address shown before the threshold.
    pub placeholder: DeliveryAddress,
    /// Address shown from the threshold onwards.
    pub corrected: DeliveryAddress,
}

impl Default for AddressCorrection {
    fn default() -> Self {
        Self {
            package: PackageId::from(9),
            threshold: TimeOfDay::from_hms(10, 20, 0),
            placeholder: DeliveryAddress::new("300 State St", "Salt Lake City", "UT", "84103"),
            corrected: DeliveryAddress::new("410 S State St.", "Salt Lake City", "UT", "84111"),
        }
    }
}

impl AddressCorrection {
    /// Whether the rule targets `package`.
    pub fn applies_to(&self, package: PackageId) -> bool {
        self.package == package
    }

    /// Address of `package` as seen at `query`.
    ///
    /// Packages other than the designated one are returned unchanged.
    pub fn address_at<'a>(&'a self, package: &'a Package, query: TimeOfDay) -> &'a DeliveryAddress {
        if !self.applies_to(package.id()) {
            package.address()
        } else if query < self.threshold {
            &self.placeholder
        } else {
            &self.corrected
        }
    }
}
