// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch-second construction conveniences.
//!
//! [`FromEpochSecond`] builds a zone-dependent value from a count of
//! seconds since the Unix epoch: the count becomes a UTC instant, the
//! instant is projected into the given zone, and the value is read off the
//! projection.  Covered targets:
//!
//! - [`NaiveDate`] — the calendar date it is in that zone,
//! - [`NaiveTime`] — the local clock reading in that zone,
//! - [`DateTime<Tz>`] — the full zoned date-time.
//!
//! [`NaiveDateTime`](chrono::NaiveDateTime) is deliberately not covered:
//! chrono already owns that type's epoch relationship
//! ([`DateTime::from_timestamp`] and `and_utc().timestamp()`), and this
//! crate must not shadow it.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::Error;

/// Construction from an instant or an epoch-second count, projected into a
/// zone.
///
/// `from_epoch_second` is provided in terms of `from_instant`, so the two
/// construction paths cannot diverge: going through an explicit
/// [`DateTime<Utc>`] and going through the second count always produce the
/// same value.
///
/// # Examples
///
/// ```
/// use chronext::FromEpochSecond;
/// use chrono::{FixedOffset, NaiveDate};
///
/// // 2021-10-05T23:30:00Z is already Oct 6 in Tokyo.
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// let date = NaiveDate::from_epoch_second(1_633_476_600, &tokyo).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 10, 6).unwrap());
/// ```
pub trait FromEpochSecond<Tz: TimeZone>: Sized {
    /// Project a UTC instant into `zone` and read this value off it.
    fn from_instant(instant: DateTime<Utc>, zone: &Tz) -> Self;

    /// Build from seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// [`Error::EpochOutOfRange`] when the second count does not fit
    /// chrono's representable timestamp range.
    fn from_epoch_second(epoch_second: i64, zone: &Tz) -> Result<Self, Error> {
        let instant = DateTime::from_timestamp(epoch_second, 0)
            .ok_or(Error::EpochOutOfRange(epoch_second))?;
        Ok(Self::from_instant(instant, zone))
    }
}

/// The calendar date the instant falls on in `zone`.
impl<Tz: TimeZone> FromEpochSecond<Tz> for NaiveDate {
    #[inline]
    fn from_instant(instant: DateTime<Utc>, zone: &Tz) -> Self {
        instant.with_timezone(zone).date_naive()
    }
}

/// The local clock reading of the instant in `zone`.
impl<Tz: TimeZone> FromEpochSecond<Tz> for NaiveTime {
    #[inline]
    fn from_instant(instant: DateTime<Utc>, zone: &Tz) -> Self {
        instant.with_timezone(zone).time()
    }
}

/// The instant itself, carried in `zone`.
impl<Tz: TimeZone> FromEpochSecond<Tz> for DateTime<Tz> {
    #[inline]
    fn from_instant(instant: DateTime<Utc>, zone: &Tz) -> Self {
        instant.with_timezone(zone)
    }
}
