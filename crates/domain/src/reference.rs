// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case reference numbers.
//!
//! References have the shape `IEC-{LOCATION}-{YEAR}-{NNNN}`. The sequence is
//! scoped to one location and year and is always four digits wide, so
//! lexicographic order on the full string matches numeric order on the
//! sequence.
//!
//! Generation is read-last-then-increment. Two concurrent creations for the
//! same location and year can compute the same value; the storage layer's
//! unique constraint rejects the second insert.

use crate::error::DomainError;
use crate::user::Location;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Leading literal of every reference.
pub const REFERENCE_PREFIX: &str = "IEC";

/// Location segment used when the creator has no location.
pub const NO_LOCATION: &str = "NOLOC";

/// Width of the zero-padded sequence suffix.
pub const SEQUENCE_WIDTH: usize = 4;

/// The `IEC-{LOCATION}-{YEAR}-` prefix shared by one location and year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferencePrefix {
    location: String,
    year: i32,
}

impl ReferencePrefix {
    /// Creates the prefix for a creator's location and a calendar year.
    ///
    /// # Arguments
    ///
    /// * `location` - The creating user's location, if any
    /// * `year` - The creation year
    #[must_use]
    pub fn new(location: Option<Location>, year: i32) -> Self {
        let location: String = location.map_or_else(
            || String::from(NO_LOCATION),
            |location| location.code().to_uppercase(),
        );
        Self { location, year }
    }

    /// Returns the upper-cased location segment.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the year segment.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the full prefix string including the trailing dash.
    #[must_use]
    pub fn as_prefix(&self) -> String {
        format!("{REFERENCE_PREFIX}-{}-{}-", self.location, self.year)
    }
}

impl std::fmt::Display for ReferencePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_prefix())
    }
}

/// A complete case reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseReference {
    location: String,
    year: i32,
    sequence: u32,
}

impl CaseReference {
    /// Builds the reference for `sequence` under `prefix`.
    #[must_use]
    pub fn new(prefix: &ReferencePrefix, sequence: u32) -> Self {
        Self {
            location: prefix.location.clone(),
            year: prefix.year,
            sequence,
        }
    }

    /// Returns the location segment.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the year segment.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl std::fmt::Display for CaseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{REFERENCE_PREFIX}-{}-{}-{:0width$}",
            self.location,
            self.year,
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for CaseReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidReference(s.to_string());

        let mut parts = s.splitn(4, '-');
        let (Some(literal), Some(location), Some(year), Some(sequence)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if literal != REFERENCE_PREFIX || location.is_empty() {
            return Err(invalid());
        }
        if sequence.len() < SEQUENCE_WIDTH || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let sequence: u32 = sequence.parse().map_err(|_| invalid())?;

        Ok(Self {
            location: location.to_string(),
            year,
            sequence,
        })
    }
}

impl TryFrom<String> for CaseReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseReference> for String {
    fn from(value: CaseReference) -> Self {
        value.to_string()
    }
}

/// Computes the next reference under `prefix`.
///
/// `last_existing` is the lexicographically greatest stored reference that
/// starts with the prefix, if any. The segment after its last dash is
/// incremented; when there is no prior reference, or the suffix cannot be
/// parsed, the sequence restarts at 1.
///
/// # Arguments
///
/// * `prefix` - The location/year prefix
/// * `last_existing` - The greatest existing reference with that prefix
#[must_use]
pub fn next_reference(prefix: &ReferencePrefix, last_existing: Option<&str>) -> CaseReference {
    let sequence: u32 = match last_existing {
        None => 1,
        Some(last) => match parse_trailing_sequence(last) {
            Some(value) => value.saturating_add(1),
            None => {
                warn!(
                    reference = last,
                    prefix = %prefix,
                    "Could not parse sequence of last reference, restarting at 1"
                );
                1
            }
        },
    };

    CaseReference::new(prefix, sequence)
}

fn parse_trailing_sequence(reference: &str) -> Option<u32> {
    let suffix: &str = reference.rsplit('-').next()?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
