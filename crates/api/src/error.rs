// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain, core and persistence errors are translated explicitly so callers
//! only ever see the API contract.

use iec_tracker::CoreError;
use iec_tracker_domain::DomainError;
use iec_tracker_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The acting user is unknown or inactive.
    AuthenticationFailed {
        /// The reason the actor was rejected.
        reason: String,
    },
    /// The actor may not perform the action on this case.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Why the actor was refused.
        reason: String,
    },
    /// The case is not in the stage the action requires.
    StateConflict {
        /// Description of the case's current stage.
        actual: String,
        /// Description of the stage the action requires.
        expected: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The case's current stage has no outgoing transition.
    WorkflowNotConfigured {
        /// Description of the current stage.
        stage: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized to {action}: {reason}")
            }
            Self::StateConflict { actual, expected } => write!(
                f,
                "Case is currently at '{actual}', but this action requires '{expected}'"
            ),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::WorkflowNotConfigured { stage } => {
                write!(f, "Workflow next step not configured for stage '{stage}'")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownStage(key) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown workflow stage '{key}'"),
        },
        DomainError::InvalidWorkflow { reason } => ApiError::Internal {
            message: format!("Workflow definition is invalid: {reason}"),
        },
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{role}'"),
        },
        DomainError::InvalidLocation(location) => ApiError::InvalidInput {
            field: String::from("location"),
            message: format!("Unknown location '{location}'"),
        },
        DomainError::InvalidCaseField { field, reason } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} {reason}"),
        },
        DomainError::InvalidPrechargeNumber(msg) => ApiError::InvalidInput {
            field: String::from("precharge_no"),
            message: msg,
        },
        DomainError::InvalidReference(reference) => ApiError::InvalidInput {
            field: String::from("reference"),
            message: format!("Malformed case reference '{reference}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidTimezone(name) => ApiError::Internal {
            message: format!("Unknown timezone '{name}'"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CaseNotFound(case_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Case"),
            message: format!("Case {case_id} does not exist"),
        },
        CoreError::DetailRecordNotFound { case_id, record } => ApiError::ResourceNotFound {
            resource_type: record.to_string(),
            message: format!("{record} details not found for case {case_id}"),
        },
        CoreError::Unauthorized { action, reason } => ApiError::Unauthorized {
            action: action.to_string(),
            reason,
        },
        CoreError::StateGuard { actual, expected } => ApiError::StateConflict {
            actual: actual.to_string(),
            expected: expected.to_string(),
        },
        CoreError::InvalidInput { field, message } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        CoreError::NextStepNotConfigured { stage } => ApiError::WorkflowNotConfigured {
            stage: stage.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Unique-constraint failures become rule violations; anything that points at
/// the storage layer itself is logged and reported as internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(what) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: what,
        },
        PersistenceError::UniqueViolation(msg) => ApiError::DomainRuleViolation {
            rule: String::from("unique_value"),
            message: msg,
        },
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}
