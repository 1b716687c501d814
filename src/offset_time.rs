// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day with a fixed UTC offset.
//!
//! [`OffsetTime`] pairs a [`NaiveTime`] with the [`FixedOffset`] it is
//! expressed in.  Ordering works on the instant-equivalent (the moment the
//! time names on 1970-01-01 at that offset), while `==` compares both
//! fields — `10:00+02:00` and `09:00+01:00` name the same instant but are
//! different values.
//!
//! Because of that split this type exposes `is_equal_or_after` /
//! `is_equal_or_before` but not a derived `is_equal`; use `==`.

use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta, Timelike};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::{TemporalOrder, TemporalOrderExt};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A time-of-day such as `10:15:30+01:00`.
///
/// # Examples
///
/// ```
/// use chronext::{OffsetTime, TemporalOrderExt};
/// use chrono::{FixedOffset, NaiveTime};
///
/// let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
/// let london = FixedOffset::east_opt(3600).unwrap();
///
/// let a = OffsetTime::new(NaiveTime::from_hms_opt(10, 0, 0).unwrap(), berlin);
/// let b = OffsetTime::new(NaiveTime::from_hms_opt(10, 0, 0).unwrap(), london);
///
/// // 10:00+02:00 is an hour before 10:00+01:00 on the instant axis.
/// assert!(a.is_equal_or_before(&b));
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    /// Create from a local time and the offset it is expressed in.
    #[inline]
    pub const fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Extract the time-of-day of an offset date-time.
    #[inline]
    pub fn from_datetime(datetime: &DateTime<FixedOffset>) -> Self {
        Self {
            time: datetime.time(),
            offset: *datetime.offset(),
        }
    }

    /// The local time-of-day.
    #[inline]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// The UTC offset.
    #[inline]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Same local time, re-labelled with another offset.
    ///
    /// The named instant changes; the clock reading does not.
    #[inline]
    pub const fn with_offset_same_local(self, offset: FixedOffset) -> Self {
        Self {
            time: self.time,
            offset,
        }
    }

    /// Same instant, expressed in another offset.
    ///
    /// The clock reading is shifted by the offset difference, wrapping
    /// around midnight.
    pub fn with_offset_same_instant(self, offset: FixedOffset) -> Self {
        let shift = offset.local_minus_utc() - self.offset.local_minus_utc();
        Self {
            time: self.time + TimeDelta::seconds(i64::from(shift)),
            offset,
        }
    }

    /// Nanoseconds of the instant this time names on the epoch day.
    ///
    /// Canonical intermediate for ordering; may be negative for eastern
    /// offsets near midnight.
    fn instant_nanos(&self) -> i64 {
        let local = i64::from(self.time.num_seconds_from_midnight()) * NANOS_PER_SEC
            + i64::from(self.time.nanosecond());
        local - i64::from(self.offset.local_minus_utc()) * NANOS_PER_SEC
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

/// Instant-equivalent order, tie-broken by the local clock reading.
impl TemporalOrder for OffsetTime {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.instant_nanos()
            .cmp(&other.instant_nanos())
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl TemporalOrderExt for OffsetTime {}

#[cfg(feature = "serde")]
impl Serialize for OffsetTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("OffsetTime", 2)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field("offset_seconds", &self.offset.local_minus_utc())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for OffsetTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            time: NaiveTime,
            offset_seconds: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let offset = FixedOffset::east_opt(raw.offset_seconds)
            .ok_or_else(|| serde::de::Error::custom("offset out of range"))?;
        Ok(Self::new(raw.time, offset))
    }
}
