use super::DistanceError;

/// A named location with its row in the distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Row and column of the stop in the distance table.
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Street address used for matching.
    pub address: String,
}

/// How to treat an address contained in more than one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressMatching {
    /// Take the first stop in table order and log a warning.
    #[default]
    FirstMatch,
    /// Reject the lookup with [`DistanceError::AmbiguousAddress`].
    Strict,
}

/// Address to stop-index lookup built from the stops table.
///
/// An exact address match always wins. Otherwise the first stop whose address
/// contains the query is used, which tolerates the abbreviated street lines
/// found in package rosters.
///
/// # Examples
/// ```
/// use courier_core::{Stop, StopIndex};
///
/// let index = StopIndex::new(vec![
///     Stop { index: 0, name: "Western Governors University".into(), address: "4001 South 700 East".into() },
///     Stop { index: 1, name: "International Peace Gardens".into(), address: "1060 Dalton Ave S".into() },
/// ]);
///
/// assert_eq!(index.resolve("1060 Dalton Ave S")?, 1);
/// assert_eq!(index.resolve("1060 Dalton")?, 1);
/// # Ok::<(), courier_core::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopIndex {
    stops: Vec<Stop>,
    matching: AddressMatching,
}

impl StopIndex {
    /// Build an index using [`AddressMatching::FirstMatch`].
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            matching: AddressMatching::default(),
        }
    }

    /// Change how ambiguous substring matches are handled.
    #[must_use]
    pub const fn with_matching(mut self, matching: AddressMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Stops in table order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Resolve an address to its distance-table index.
    ///
    /// # Errors
    ///
    /// [`DistanceError::UnknownAddress`] when nothing matches and
    /// [`DistanceError::AmbiguousAddress`] when several stops contain the
    /// address under [`AddressMatching::Strict`].
    pub fn resolve(&self, address: &str) -> Result<usize, DistanceError> {
        if let Some(stop) = self.stops.iter().find(|stop| stop.address == address) {
            return Ok(stop.index);
        }
        let mut candidates = self
            .stops
            .iter()
            .filter(|stop| stop.address.contains(address));
        let Some(first) = candidates.next() else {
            return Err(DistanceError::UnknownAddress {
                address: address.to_owned(),
            });
        };
        let others = candidates.count();
        if others > 0 {
            match self.matching {
                AddressMatching::Strict => {
                    return Err(DistanceError::AmbiguousAddress {
                        address: address.to_owned(),
                        candidates: others + 1,
                    });
                }
                AddressMatching::FirstMatch => log::warn!(
                    "address {address:?} matches {} stops; using {:?}",
                    others + 1,
                    first.address
                ),
            }
        }
        Ok(first.index)
    }
}
