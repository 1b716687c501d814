// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chrono Augmentation Layer
//!
//! This crate adds a small set of conveniences on top of
//! [chrono](https://docs.rs/chrono): comparison predicates derived from a
//! single primitive order, extrema selection over any chronologically
//! ordered sequence, the partial calendar values chrono does not model, and
//! epoch-second constructors for zone-dependent values.  All calendar and
//! timezone mathematics stays in chrono.
//!
//! # Core traits
//!
//! - [`TemporalOrder`] — primitive three-way comparison (`compare_to`).
//! - [`TemporalEq`] — derived `is_equal`.
//! - [`TemporalOrderExt`] — derived `is_equal_or_after` / `is_equal_or_before`.
//! - [`FromEpochSecond`] — `from_instant` / `from_epoch_second` constructors.
//!
//! # Capability matrix
//!
//! | Type | `is_equal` | `is_equal_or_after` / `_or_before` |
//! |------|-----------|-------------------------------------|
//! | `DateTime<Utc>` | yes | yes |
//! | `NaiveDate` | yes | yes |
//! | `NaiveDateTime` | yes | yes |
//! | `NaiveTime` | yes | yes |
//! | [`MonthDay`] | yes | yes |
//! | [`Year`] | yes | yes |
//! | [`YearMonth`] | yes | yes |
//! | `TimeDelta` | yes | — |
//! | `FixedOffset` | yes | — |
//! | `Weekday` | yes | — |
//! | `Month` | yes | — |
//! | [`OffsetTransition`] | yes | — |
//! | `DateTime<FixedOffset>` | use `==` | yes |
//! | [`OffsetTime`] | use `==` | yes |
//! | `DateTime<Tz>` (any zone) | use `==` | yes |
//!
//! Offset- and zone-qualified types keep their own equality instead of the
//! derived one; see [`TemporalEq`] for the reasoning.
//!
//! # Extrema selection
//!
//! ```
//! use chronext::{max_of, min_of};
//! use chrono::NaiveDate;
//!
//! let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let dates = [d(2021, 10, 5), d(2020, 1, 10), d(2022, 1, 1), d(2017, 11, 17)];
//!
//! assert_eq!(max_of(dates).unwrap(), d(2022, 1, 1));
//! assert_eq!(min_of(dates).unwrap(), d(2017, 11, 17));
//! ```

mod chrono_ext;
mod compare;
mod epoch;
mod error;
mod extrema;
mod offset_time;
mod partials;
mod transition;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use compare::{TemporalEq, TemporalOrder, TemporalOrderExt};
pub use epoch::FromEpochSecond;
pub use error::Error;
pub use extrema::{max_of, min_of};
pub use offset_time::OffsetTime;
pub use partials::{MonthDay, Year, YearMonth};
pub use transition::OffsetTransition;
