// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use iec_tracker_domain::{CaseId, DomainError};

/// Errors that can occur during case transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The case does not exist.
    CaseNotFound(CaseId),
    /// A stage detail record the transition depends on does not exist.
    DetailRecordNotFound {
        /// The owning case.
        case_id: CaseId,
        /// The kind of record that is missing.
        record: &'static str,
    },
    /// The actor may not perform this transition.
    Unauthorized {
        /// The transition that was attempted.
        action: &'static str,
        /// Why the actor was refused.
        reason: String,
    },
    /// The case is not in the stage this transition starts from.
    StateGuard {
        /// Description of the case's current stage.
        actual: &'static str,
        /// Description of the stage the transition requires.
        expected: &'static str,
    },
    /// Caller-supplied input was rejected.
    InvalidInput {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
    /// No transition is defined out of the case's current stage.
    NextStepNotConfigured {
        /// Description of the current stage.
        stage: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CaseNotFound(case_id) => write!(f, "Case {case_id} not found"),
            Self::DetailRecordNotFound { case_id, record } => {
                write!(f, "{record} details not found for case {case_id}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Not permitted to {action}: {reason}")
            }
            Self::StateGuard { actual, expected } => write!(
                f,
                "Case is in stage '{actual}', but this action requires stage '{expected}'"
            ),
            Self::InvalidInput { field, message } => write!(f, "Invalid {field}: {message}"),
            Self::NextStepNotConfigured { stage } => {
                write!(f, "No next step is configured for stage '{stage}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
