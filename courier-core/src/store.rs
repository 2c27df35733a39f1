//! In-memory package storage keyed by [`PackageId`].
//!
//! Package identifiers are small and dense, so an ordered map is enough and
//! gives listings in identifier order without extra sorting.

use std::collections::BTreeMap;

use crate::{Package, PackageId};

/// Ordered container of packages.
///
/// # Examples
/// ```
/// use courier_core::{DeliveryAddress, Package, PackageId, PackageStore};
///
/// let mut store = PackageStore::new();
/// let address = DeliveryAddress::new("233 Canyon Rd", "Salt Lake City", "UT", "84103");
/// store.insert(Package::new(PackageId::from(3), address));
///
/// assert!(store.get(PackageId::from(3)).is_some());
/// assert!(store.get(PackageId::from(4)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageStore {
    packages: BTreeMap<PackageId, Package>,
}

impl PackageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package, returning the one previously stored under its ID.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.packages.insert(package.id(), package)
    }

    /// Look up a package.
    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    /// Look up a package for mutation.
    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        self.packages.get_mut(&id)
    }

    /// Remove a package from the store.
    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        self.packages.remove(&id)
    }

    /// Whether a package with `id` is stored.
    pub fn contains(&self, id: PackageId) -> bool {
        self.packages.contains_key(&id)
    }

    /// Number of stored packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the store holds no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over packages in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> + '_ {
        self.packages.values()
    }
}

impl FromIterator<Package> for PackageStore {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self {
            packages: iter
                .into_iter()
                .map(|package| (package.id(), package))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeliveryAddress;
    use rstest::rstest;

    fn package(id: u32, street: &str) -> Package {
        Package::new(
            PackageId::from(id),
            DeliveryAddress::new(street, "Salt Lake City", "UT", "84115"),
        )
    }

    #[rstest]
    fn insert_replaces_existing_entry() {
        let mut store = PackageStore::new();
        assert!(store.insert(package(1, "195 W Oakland Ave")).is_none());
        let previous = store
            .insert(package(1, "2530 S 500 E"))
            .expect("replaced package");
        assert_eq!(previous.address().street, "195 W Oakland Ave");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store
                .get(PackageId::from(1))
                .map(|p| p.address().street.as_str()),
            Some("2530 S 500 E")
        );
    }

    #[rstest]
    fn iterates_in_identifier_order() {
        let store: PackageStore = [
            package(12, "3575 W Valley Central Station bus Loop"),
            package(3, "233 Canyon Rd"),
            package(7, "1330 2100 S"),
        ]
        .into_iter()
        .collect();
        let ids: Vec<u32> = store.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![3, 7, 12]);
    }

    #[rstest]
    fn remove_reports_missing_entries() {
        let mut store: PackageStore = std::iter::once(package(5, "410 S State St")).collect();
        assert!(store.remove(PackageId::from(6)).is_none());
        assert!(store.remove(PackageId::from(5)).is_some());
        assert!(store.is_empty());
        assert!(!store.contains(PackageId::from(5)));
    }
}
