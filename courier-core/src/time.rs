//! Times of day measured as elapsed time since midnight.
//!
//! The simulation never deals with calendar dates: departures, deliveries and
//! queries are all expressed as a [`TimeOfDay`]. Values keep sub-second
//! precision so travel legs accumulate without drift, while status
//! comparisons use [`TimeOfDay::whole_minutes`].

use std::{fmt, str::FromStr, time::Duration};

use jiff::civil::Time;
use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Errors raised when parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    /// The input did not match `HH:MM:SS` or `HH:MM`.
    #[error("invalid time {input:?}: expected HH:MM:SS ({reason})")]
    Parse {
        /// Raw input as supplied by the caller.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Elapsed time since midnight.
///
/// # Examples
/// ```
/// use courier_core::TimeOfDay;
///
/// let departure: TimeOfDay = "08:00:00".parse()?;
/// assert_eq!(departure, TimeOfDay::from_hms(8, 0, 0));
/// assert_eq!(departure.to_string(), "08:00:00");
/// assert_eq!(departure.whole_minutes(), 480);
/// # Ok::<(), courier_core::TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(Duration);

impl TimeOfDay {
    /// Start of the simulated day.
    pub const MIDNIGHT: Self = Self(Duration::ZERO);

    /// Build a time from whole hours, minutes and seconds.
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self(Duration::from_secs(
            hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        ))
    }

    /// Wrap an elapsed duration since midnight.
    pub const fn from_duration(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Elapsed duration since midnight.
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Minutes since midnight, truncating any remaining seconds.
    pub const fn whole_minutes(self) -> u64 {
        self.0.as_secs() / SECONDS_PER_MINUTE
    }

    /// Move the time forward by `elapsed`.
    #[must_use]
    pub fn advance(self, elapsed: Duration) -> Self {
        Self(self.0.saturating_add(elapsed))
    }

    /// Time elapsed since `earlier`, or zero when `earlier` is later.
    pub const fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    fn from_civil(time: Time) -> Self {
        let seconds = i64::from(time.hour()) * 3_600
            + i64::from(time.minute()) * 60
            + i64::from(time.second());
        Self(Duration::from_secs(seconds.unsigned_abs()))
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Time::strptime("%H:%M:%S", trimmed)
            .or_else(|_| Time::strptime("%H:%M", trimmed))
            .map(Self::from_civil)
            .map_err(|err| TimeOfDayError::Parse {
                input: trimmed.to_owned(),
                reason: err.to_string(),
            })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        let hours = total / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let seconds = total % SECONDS_PER_MINUTE;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
