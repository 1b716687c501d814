// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Partial calendar values: [`Year`], [`YearMonth`], [`MonthDay`].
//!
//! chrono models complete dates only; these three carriers name the
//! partial values in between.  They hold no calendar logic of their own —
//! anything that needs real calendar arithmetic goes through
//! [`NaiveDate`]'s checked constructors.
//!
//! | Type | Holds | Order |
//! |------|-------|-------|
//! | [`Year`] | proleptic year | numeric |
//! | [`YearMonth`] | year + month | year, then month |
//! | [`MonthDay`] | month + day | month, then day |
//!
//! All three carry the full comparison capability set (`is_equal`,
//! `is_equal_or_after`, `is_equal_or_before`).

use chrono::{Datelike, Month, NaiveDate};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compare::{TemporalEq, TemporalOrder, TemporalOrderExt};

/// Any leap year works as the validation reference for year-less month/day
/// pairs; it admits February 29.
const LEAP_REFERENCE_YEAR: i32 = 2000;

#[inline]
fn month_of(date: &NaiveDate) -> Month {
    Month::try_from(date.month() as u8).expect("chrono months are always 1-12")
}

// ═══════════════════════════════════════════════════════════════════════════
// Year
// ═══════════════════════════════════════════════════════════════════════════

/// A proleptic Gregorian year.
///
/// # Examples
///
/// ```
/// use chronext::Year;
///
/// let year = Year::new(2020);
/// assert!(year.is_leap());
/// assert_eq!(year.length(), 366);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Create from a proleptic year number.
    #[inline]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// The year number.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// `true` for leap years of the proleptic Gregorian calendar.
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    /// Number of days in the year: 365, or 366 in a leap year.
    #[inline]
    pub const fn length(&self) -> u32 {
        if self.is_leap() {
            366
        } else {
            365
        }
    }

    /// Combine with a month.
    #[inline]
    pub const fn at_month(&self, month: Month) -> YearMonth {
        YearMonth {
            year: self.0,
            month,
        }
    }

    /// Resolve a day-of-year (1-based) to a date.
    ///
    /// Returns `None` when the ordinal does not exist in this year or the
    /// year is outside chrono's date range.
    #[inline]
    pub fn at_ordinal(&self, ordinal: u32) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.0, ordinal)
    }
}

impl From<NaiveDate> for Year {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self(date.year())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TemporalOrder for Year {
    #[inline(always)]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TemporalEq for Year {}
impl TemporalOrderExt for Year {}

// Compact scalar serde: a `Year` is its number.

#[cfg(feature = "serde")]
impl Serialize for Year {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i32::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// YearMonth
// ═══════════════════════════════════════════════════════════════════════════

/// A year paired with a month, e.g. `2021-10`.
///
/// # Examples
///
/// ```
/// use chronext::YearMonth;
/// use chrono::{Month, NaiveDate};
///
/// let ym = YearMonth::new(2021, Month::October);
/// assert_eq!(ym.days_in_month(), 31);
/// assert_eq!(
///     ym.at_day(5),
///     NaiveDate::from_ymd_opt(2021, 10, 5),
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create from a year number and a month.
    #[inline]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The year number.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            Month::February => {
                if Year::new(self.year).is_leap() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Resolve a day-of-month to a date.
    ///
    /// Returns `None` when the day does not exist in this month or the year
    /// is outside chrono's date range.
    #[inline]
    pub fn at_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), day)
    }
}

impl From<NaiveDate> for YearMonth {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: month_of(&date),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number_from_month())
    }
}

// `Month` carries no `Ord` of its own, so the lexicographic order is
// written out here.

impl PartialOrd for YearMonth {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearMonth {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.year.cmp(&other.year).then_with(|| {
            self.month
                .number_from_month()
                .cmp(&other.month.number_from_month())
        })
    }
}

impl TemporalOrder for YearMonth {
    #[inline(always)]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TemporalEq for YearMonth {}
impl TemporalOrderExt for YearMonth {}

#[cfg(feature = "serde")]
impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("YearMonth", 2)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month.number_from_month())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        let month = Month::try_from(raw.month).map_err(serde::de::Error::custom)?;
        Ok(Self::new(raw.year, month))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MonthDay
// ═══════════════════════════════════════════════════════════════════════════

/// A month paired with a day, a yearly recurrence such as `12-25`.
///
/// February 29 is a valid `MonthDay`; attaching it to a common year resolves
/// to February 28.
///
/// # Examples
///
/// ```
/// use chronext::MonthDay;
/// use chrono::{Month, NaiveDate};
///
/// let leap_day = MonthDay::new(Month::February, 29).unwrap();
/// assert!(leap_day.is_valid_year(2020));
/// assert!(!leap_day.is_valid_year(2021));
/// assert_eq!(
///     leap_day.at_year(2021),
///     NaiveDate::from_ymd_opt(2021, 2, 28),
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: Month,
    day: u32,
}

impl MonthDay {
    /// Create from a month and a day-of-month.
    ///
    /// The day is validated against the month's leap-year length, so
    /// February admits 29 while April 31 is rejected with `None`.
    pub fn new(month: Month, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month.number_from_month(), day)?;
        Some(Self { month, day })
    }

    /// The month.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The day-of-month.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// `true` when this month-day exists in the given year.
    #[inline]
    pub fn is_valid_year(&self, year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, self.month.number_from_month(), self.day).is_some()
    }

    /// Resolve against a year.
    ///
    /// February 29 resolves to February 28 in common years.  Returns `None`
    /// only when the year is outside chrono's date range.
    pub fn at_year(&self, year: i32) -> Option<NaiveDate> {
        let month = self.month.number_from_month();
        NaiveDate::from_ymd_opt(year, month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, 28))
    }
}

impl From<NaiveDate> for MonthDay {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self {
            month: month_of(&date),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number_from_month(), self.day)
    }
}

impl PartialOrd for MonthDay {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthDay {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.month
            .number_from_month()
            .cmp(&other.month.number_from_month())
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl TemporalOrder for MonthDay {
    #[inline(always)]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TemporalEq for MonthDay {}
impl TemporalOrderExt for MonthDay {}

#[cfg(feature = "serde")]
impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("MonthDay", 2)?;
        s.serialize_field("month", &self.month.number_from_month())?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            month: u8,
            day: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let month = Month::try_from(raw.month).map_err(serde::de::Error::custom)?;
        Self::new(month, raw.day)
            .ok_or_else(|| serde::de::Error::custom("day out of range for month"))
    }
}
