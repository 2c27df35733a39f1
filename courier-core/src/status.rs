//! Time-relative delivery status.
//!
//! Statuses are derived on demand from the recorded load and delivery times,
//! so a query never mutates the package it inspects. All comparisons are made
//! on whole minutes since midnight.

use crate::{DeliveryStatus, TimeOfDay};

/// Resolve the status of a package at `query`.
///
/// The rules are evaluated in order:
///
/// 1. before loading the package is [`DeliveryStatus::AtHub`];
/// 2. once the delivery time has passed it is [`DeliveryStatus::Delivered`];
/// 3. between loading and delivery it is [`DeliveryStatus::EnRoute`];
/// 4. anything else is [`DeliveryStatus::Unknown`]. The first three rules
///    cover every ordering of the inputs, so this arm only guards against
///    future changes to them.
///
/// # Examples
/// ```
/// use courier_core::{DeliveryStatus, TimeOfDay, status};
///
/// let loaded = TimeOfDay::from_hms(8, 0, 0);
/// let delivered = TimeOfDay::from_hms(8, 10, 0);
///
/// assert_eq!(
///     status::resolve(loaded, TimeOfDay::from_hms(7, 59, 0), delivered),
///     DeliveryStatus::AtHub,
/// );
/// assert_eq!(
///     status::resolve(loaded, TimeOfDay::from_hms(8, 5, 0), delivered),
///     DeliveryStatus::EnRoute,
/// );
/// assert_eq!(
///     status::resolve(loaded, TimeOfDay::from_hms(8, 10, 0), delivered),
///     DeliveryStatus::Delivered,
/// );
/// ```
pub fn resolve(loaded: TimeOfDay, query: TimeOfDay, delivered: TimeOfDay) -> DeliveryStatus {
    let loaded = loaded.whole_minutes();
    let query = query.whole_minutes();
    let delivered = delivered.whole_minutes();

    if query < loaded {
        DeliveryStatus::AtHub
    } else if delivered <= query {
        DeliveryStatus::Delivered
    } else if delivered >= loaded {
        DeliveryStatus::EnRoute
    } else {
        DeliveryStatus::Unknown
    }
}
