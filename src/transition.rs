// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Offset discontinuities of a time zone.
//!
//! An [`OffsetTransition`] records the moment a zone's UTC offset changes:
//! the local date-time at which the change takes effect together with the
//! offsets in force before and after.  A spring-forward change is a *gap*
//! (local clocks skip ahead), a fall-back change is an *overlap* (local
//! clocks repeat).
//!
//! Transitions rank by their instant and expose equality only — an
//! inclusive before/after convenience is not part of their surface.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::{TemporalEq, TemporalOrder};

/// A single offset change of a time zone.
///
/// # Examples
///
/// ```
/// use chronext::OffsetTransition;
/// use chrono::{FixedOffset, NaiveDate, TimeDelta};
///
/// // Central Europe, spring 2021: 02:00 CET jumps to 03:00 CEST.
/// let transition = OffsetTransition::new(
///     NaiveDate::from_ymd_opt(2021, 3, 28).unwrap().and_hms_opt(2, 0, 0).unwrap(),
///     FixedOffset::east_opt(3600).unwrap(),
///     FixedOffset::east_opt(2 * 3600).unwrap(),
/// );
///
/// assert!(transition.is_gap());
/// assert_eq!(transition.duration(), TimeDelta::hours(1));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OffsetTransition {
    local: NaiveDateTime,
    offset_before: FixedOffset,
    offset_after: FixedOffset,
}

impl OffsetTransition {
    /// Create from the local date-time at which the change takes effect
    /// (read on the pre-transition clock) and the two offsets.
    #[inline]
    pub const fn new(
        local: NaiveDateTime,
        offset_before: FixedOffset,
        offset_after: FixedOffset,
    ) -> Self {
        Self {
            local,
            offset_before,
            offset_after,
        }
    }

    /// The local date-time at which the change takes effect.
    #[inline]
    pub const fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// The offset in force before the transition.
    #[inline]
    pub const fn offset_before(&self) -> FixedOffset {
        self.offset_before
    }

    /// The offset in force after the transition.
    #[inline]
    pub const fn offset_after(&self) -> FixedOffset {
        self.offset_after
    }

    /// The transition instant on the UTC axis.
    #[inline]
    pub fn instant(&self) -> DateTime<Utc> {
        (self.local - self.offset_before).and_utc()
    }

    /// The transition instant rendered in the pre-transition offset.
    #[inline]
    pub fn datetime_before(&self) -> DateTime<FixedOffset> {
        self.instant().with_timezone(&self.offset_before)
    }

    /// The transition instant rendered in the post-transition offset.
    #[inline]
    pub fn datetime_after(&self) -> DateTime<FixedOffset> {
        self.instant().with_timezone(&self.offset_after)
    }

    /// Size of the discontinuity: positive for gaps, negative for overlaps.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(
            self.offset_after.local_minus_utc() - self.offset_before.local_minus_utc(),
        ))
    }

    /// `true` when local clocks skip ahead (spring forward).
    #[inline]
    pub fn is_gap(&self) -> bool {
        self.offset_after.local_minus_utc() > self.offset_before.local_minus_utc()
    }

    /// `true` when local clocks repeat an interval (fall back).
    #[inline]
    pub fn is_overlap(&self) -> bool {
        self.offset_after.local_minus_utc() < self.offset_before.local_minus_utc()
    }
}

impl fmt::Display for OffsetTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} to {}",
            self.local,
            self.offset_before,
            self.offset_after
        )
    }
}

/// Transitions rank by the instant at which they occur.
impl TemporalOrder for OffsetTransition {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl TemporalEq for OffsetTransition {}

#[cfg(feature = "serde")]
impl Serialize for OffsetTransition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("OffsetTransition", 3)?;
        s.serialize_field("local", &self.local)?;
        s.serialize_field("offset_before_seconds", &self.offset_before.local_minus_utc())?;
        s.serialize_field("offset_after_seconds", &self.offset_after.local_minus_utc())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for OffsetTransition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            local: NaiveDateTime,
            offset_before_seconds: i32,
            offset_after_seconds: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let offset_before = FixedOffset::east_opt(raw.offset_before_seconds)
            .ok_or_else(|| serde::de::Error::custom("offset out of range"))?;
        let offset_after = FixedOffset::east_opt(raw.offset_after_seconds)
            .ok_or_else(|| serde::de::Error::custom("offset out of range"))?;
        Ok(Self::new(raw.local, offset_before, offset_after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn east(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn local(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    // Central Europe 2021: CET (+01) ↔ CEST (+02).
    fn spring_forward() -> OffsetTransition {
        OffsetTransition::new(local(2021, 3, 28, 2), east(1), east(2))
    }

    fn fall_back() -> OffsetTransition {
        OffsetTransition::new(local(2021, 10, 31, 3), east(2), east(1))
    }

    #[test]
    fn gap_and_overlap_classification() {
        assert!(spring_forward().is_gap());
        assert!(!spring_forward().is_overlap());
        assert!(fall_back().is_overlap());
        assert!(!fall_back().is_gap());
    }

    #[test]
    fn duration_is_signed() {
        assert_eq!(spring_forward().duration(), TimeDelta::hours(1));
        assert_eq!(fall_back().duration(), TimeDelta::hours(-1));
    }

    #[test]
    fn instant_uses_the_pre_transition_offset() {
        // 02:00 CET == 01:00 UTC.
        let instant = spring_forward().instant();
        assert_eq!(instant, DateTime::parse_from_rfc3339("2021-03-28T01:00:00Z").unwrap());
    }

    #[test]
    fn rendered_datetimes_agree_on_the_instant() {
        let t = spring_forward();
        assert_eq!(t.datetime_before(), t.datetime_after());
        assert_eq!(t.datetime_before().time(), local(2021, 3, 28, 2).time());
        assert_eq!(t.datetime_after().time(), local(2021, 3, 28, 3).time());
    }

    #[test]
    fn transitions_rank_by_instant() {
        let spring = spring_forward();
        let fall = fall_back();

        assert_eq!(spring.compare_to(&fall), Ordering::Less);
        assert!(spring.is_equal(&spring_forward()));
        assert!(!spring.is_equal(&fall));
    }

    #[test]
    fn equal_rank_with_different_offsets_is_not_value_equality() {
        // Same instant expressed with different pre-transition offsets.
        let a = OffsetTransition::new(local(2021, 3, 28, 2), east(1), east(2));
        let b = OffsetTransition::new(local(2021, 3, 28, 3), east(2), east(3));

        assert!(a.is_equal(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn display_names_both_offsets() {
        let s = spring_forward().to_string();
        assert!(s.contains("+01:00"));
        assert!(s.contains("to +02:00"));
    }
}
