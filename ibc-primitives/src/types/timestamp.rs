//! Defines the representation of timestamps recorded in consensus states.

use core::fmt::{Display, Error as FmtError, Formatter};
use core::num::{ParseIntError, TryFromIntError};
use core::str::FromStr;
use core::time::Duration;

use displaydoc::Display;
use time::OffsetDateTime;

use crate::proto::{Protobuf, Timestamp as RawTimestamp};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// A point in time, stored as nanoseconds since the unix epoch.
///
/// The `u64` representation covers dates up to about year 2554, which is the
/// range protobuf timestamps round-trip through without loss.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(PartialEq, Eq, Copy, Clone, Debug, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    nanoseconds: u64,
}

impl Timestamp {
    pub const fn from_nanoseconds(nanoseconds: u64) -> Self {
        Self { nanoseconds }
    }

    pub fn from_unix_timestamp(secs: u64, nanos: u32) -> Result<Self, TimestampError> {
        if u64::from(nanos) >= NANOS_PER_SECOND {
            return Err(TimestampError::DateOutOfRange);
        }

        secs.checked_mul(NANOS_PER_SECOND)
            .and_then(|n| n.checked_add(u64::from(nanos)))
            .map(Self::from_nanoseconds)
            .ok_or(TimestampError::TimestampOverflow)
    }

    /// Returns a `Timestamp` representation of the current time.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        let nanoseconds = OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self::from_nanoseconds(u64::try_from(nanoseconds).unwrap_or_default())
    }

    pub fn nanoseconds(self) -> u64 {
        self.nanoseconds
    }

    /// Computes how much later `self` is than `other`. Returns `None` if
    /// `other` is the later of the two.
    pub fn duration_since(&self, other: &Self) -> Option<Duration> {
        self.nanoseconds
            .checked_sub(other.nanoseconds)
            .map(Duration::from_nanos)
    }

    pub fn checked_add(self, duration: Duration) -> Result<Self, TimestampError> {
        let delta = u64::try_from(duration.as_nanos())?;
        self.nanoseconds
            .checked_add(delta)
            .map(Self::from_nanoseconds)
            .ok_or(TimestampError::TimestampOverflow)
    }

    pub fn checked_sub(self, duration: Duration) -> Result<Self, TimestampError> {
        let delta = u64::try_from(duration.as_nanos())?;
        self.nanoseconds
            .checked_sub(delta)
            .map(Self::from_nanoseconds)
            .ok_or(TimestampError::DateOutOfRange)
    }
}

impl Protobuf<RawTimestamp> for Timestamp {}

impl TryFrom<RawTimestamp> for Timestamp {
    type Error = TimestampError;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        let seconds = u64::try_from(raw.seconds)?;
        let nanos = u32::try_from(raw.nanos)?;
        Self::from_unix_timestamp(seconds, nanos)
    }
}

impl From<Timestamp> for RawTimestamp {
    fn from(value: Timestamp) -> Self {
        // Both casts are lossless: seconds stay below i64::MAX for any u64
        // nanosecond count and the remainder is below one billion.
        let seconds = (value.nanoseconds / NANOS_PER_SECOND) as i64;
        let nanos = (value.nanoseconds % NANOS_PER_SECOND) as i32;
        RawTimestamp { seconds, nanos }
    }
}

impl From<u64> for Timestamp {
    fn from(nanoseconds: u64) -> Self {
        Self::from_nanoseconds(nanoseconds)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_nanoseconds(u64::from_str(s)?))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.nanoseconds)) {
            Ok(odt) => write!(f, "Timestamp({odt})"),
            Err(_) => write!(f, "Timestamp({}ns)", self.nanoseconds),
        }
    }
}

#[derive(Debug, Display, derive_more::From)]
pub enum TimestampError {
    /// parsing u64 integer from string error: `{0}`
    ParseInt(ParseIntError),
    /// error converting integer to `Timestamp`: `{0}`
    TryFromInt(TryFromIntError),
    /// date out of range
    DateOutOfRange,
    /// timestamp overflow when modifying with duration
    TimestampOverflow,
}

#[cfg(feature = "std")]
impl std::error::Error for TimestampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::ParseInt(e) => Some(e),
            Self::TryFromInt(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;

    #[test]
    fn timestamp_arithmetic() {
        let time0 = Timestamp::from_nanoseconds(0);
        let time1 = Timestamp::from_nanoseconds(100);
        let time2 = Timestamp::from_nanoseconds(150);
        let time3 = Timestamp::from_nanoseconds(50);
        let duration = Duration::from_nanos(50);

        assert_eq!(time1, time1.checked_add(Duration::ZERO).unwrap());
        assert_eq!(time2, time1.checked_add(duration).unwrap());
        assert_eq!(time3, time1.checked_sub(duration).unwrap());
        assert!(time0.checked_sub(duration).is_err());
        assert!(Timestamp::from_nanoseconds(u64::MAX)
            .checked_add(duration)
            .is_err());
    }

    #[test]
    fn duration_since_is_directional() {
        let earlier = Timestamp::from_nanoseconds(1_000);
        let later = Timestamp::from_nanoseconds(3_000);

        assert_eq!(
            later.duration_since(&earlier),
            Some(Duration::from_nanos(2_000))
        );
        assert_eq!(earlier.duration_since(&later), None);
    }

    #[test]
    fn raw_timestamp_conversion() {
        let timestamp = Timestamp::from_unix_timestamp(1_700_000_000, 42).unwrap();
        let raw = RawTimestamp::from(timestamp);
        assert_eq!(raw.seconds, 1_700_000_000);
        assert_eq!(raw.nanos, 42);
        assert_eq!(Timestamp::try_from(raw).unwrap(), timestamp);

        let encoded = timestamp.encode_vec();
        assert_eq!(Timestamp::decode_vec(&encoded).unwrap(), timestamp);
    }

    #[test]
    fn negative_raw_timestamp_is_rejected() {
        let raw = RawTimestamp {
            seconds: -5,
            nanos: 0,
        };
        assert!(Timestamp::try_from(raw).is_err());
    }
}
