// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A status value does not name any workflow stage.
    UnknownStage(String),
    /// The workflow step table is malformed.
    InvalidWorkflow {
        /// Description of the problem.
        reason: String,
    },
    /// Role code is not recognized.
    InvalidRole(String),
    /// Location code is not recognized.
    InvalidLocation(String),
    /// A descriptive case field is empty or too long.
    InvalidCaseField {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Pre-charge investigation number is empty or too long.
    InvalidPrechargeNumber(String),
    /// A case reference does not follow `IEC-LOCATION-YEAR-NNNN`.
    InvalidReference(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStage(key) => write!(f, "Unknown workflow stage: '{key}'"),
            Self::InvalidWorkflow { reason } => write!(f, "Invalid workflow definition: {reason}"),
            Self::InvalidRole(role) => write!(f, "Invalid role: '{role}'"),
            Self::InvalidLocation(location) => write!(f, "Invalid location: '{location}'"),
            Self::InvalidCaseField { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::InvalidPrechargeNumber(msg) => {
                write!(f, "Invalid pre-charge investigation number: {msg}")
            }
            Self::InvalidReference(reference) => {
                write!(f, "Invalid case reference: '{reference}'")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: '{tz}'"),
        }
    }
}

impl std::error::Error for DomainError {}
