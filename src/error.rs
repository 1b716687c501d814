// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate error type.

/// Errors reported by the fallible operations of this crate.
///
/// Both variants are contract violations for the caller to avoid or handle;
/// nothing here is recoverable inside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `min_of` / `max_of` was called with an empty sequence.
    #[error("cannot select an extremum from an empty sequence")]
    EmptySelection,
    /// The epoch-second value does not fit chrono's representable timestamp
    /// range.
    #[error("epoch second {0} is outside the representable timestamp range")]
    EpochOutOfRange(i64),
}
