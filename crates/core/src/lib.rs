// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use iec_tracker_domain::{Case, Stage};

// Re-export public types and functions
pub use apply::{apply, is_authorized, prepare_new_case};
pub use command::{Command, TransitionAuthority, TransitionKind};
pub use error::CoreError;
pub use state::{NewCase, TransitionContext, TransitionResult};

/// Returns the transition available on a case in its current stage.
///
/// This is a read-only lookup and does not check who is asking.
///
/// # Errors
///
/// Returns `CoreError::NextStepNotConfigured` when no transition leaves the
/// case's stage.
pub fn next_transition(case: &Case) -> Result<TransitionKind, CoreError> {
    TransitionKind::for_stage(case.status)
}

/// Returns whether `status` is a stage the workflow can leave.
#[must_use]
pub fn has_outgoing_transition(status: Stage) -> bool {
    TransitionKind::for_stage(status).is_ok()
}
