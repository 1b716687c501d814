// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Capability assignment for chrono's types.
//!
//! This module is the single place where chrono's value types are wired to
//! the comparison capability traits.  Which type carries which capability
//! is deliberate, not generalized:
//!
//! | Type | `is_equal` | `is_equal_or_after` / `_or_before` |
//! |------|-----------|-------------------------------------|
//! | [`DateTime<Utc>`] | yes | yes |
//! | [`NaiveDate`] | yes | yes |
//! | [`NaiveDateTime`] | yes | yes |
//! | [`NaiveTime`] | yes | yes |
//! | [`TimeDelta`] | yes | — |
//! | [`FixedOffset`] | yes | — |
//! | [`Weekday`] | yes | — |
//! | [`Month`] | yes | — |
//! | `DateTime<FixedOffset>` | — | yes |
//! | `DateTime<Tz>` (any zone) | — | yes |
//!
//! Durations, offsets, weekdays and months are ranks without a meaningful
//! "after/before" convenience, so they expose equality only.  Offset- and
//! zone-qualified date-times keep chrono's own `==` instead of a derived
//! `is_equal`; see [`crate::compare`].

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use chrono::{TimeZone, Utc, Weekday};
use std::cmp::Ordering;

use crate::compare::{TemporalEq, TemporalOrder, TemporalOrderExt};

// ---------------------------------------------------------------------------
// Primitive order
// ---------------------------------------------------------------------------

/// Generate `TemporalOrder` impls that delegate to the type's own `Ord`.
macro_rules! impl_order_via_ord {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TemporalOrder for $ty {
                #[inline(always)]
                fn compare_to(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

impl_order_via_ord!(NaiveDate, NaiveDateTime, NaiveTime, TimeDelta);

// Date-times of every zone flavour order by instant, exactly as chrono's
// own `Ord` does.
impl<Tz: TimeZone> TemporalOrder for DateTime<Tz> {
    #[inline(always)]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// chrono leaves these three unordered; their order is defined here once and
// every derived predicate follows it.

/// Ascending by seconds east of Greenwich.
impl TemporalOrder for FixedOffset {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.local_minus_utc().cmp(&other.local_minus_utc())
    }
}

/// ISO order: Monday first, Sunday last.
impl TemporalOrder for Weekday {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.num_days_from_monday().cmp(&other.num_days_from_monday())
    }
}

/// Calendar order: January first, December last.
impl TemporalOrder for Month {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.number_from_month().cmp(&other.number_from_month())
    }
}

// ---------------------------------------------------------------------------
// Equality capability
// ---------------------------------------------------------------------------

impl TemporalEq for NaiveDate {}
impl TemporalEq for NaiveDateTime {}
impl TemporalEq for NaiveTime {}
impl TemporalEq for TimeDelta {}
impl TemporalEq for FixedOffset {}
impl TemporalEq for Weekday {}
impl TemporalEq for Month {}

// Only the UTC date-time: an instant carries no representation beyond its
// rank, so derived equality is safe.  `DateTime<FixedOffset>` and zoned
// date-times are intentionally absent from this list.
impl TemporalEq for DateTime<Utc> {}

// ---------------------------------------------------------------------------
// Inclusive before/after capability
// ---------------------------------------------------------------------------

impl TemporalOrderExt for NaiveDate {}
impl TemporalOrderExt for NaiveDateTime {}
impl TemporalOrderExt for NaiveTime {}

// Covers `DateTime<Utc>`, `DateTime<FixedOffset>` and every other zone.
impl<Tz: TimeZone> TemporalOrderExt for DateTime<Tz> {}
