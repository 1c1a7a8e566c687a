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

mod assignees;
mod case;
mod clock;
mod detail;
mod error;
mod reference;
mod user;
mod validation;
mod workflow;

#[cfg(test)]
mod tests;

pub use assignees::{
    NO_ELIGIBLE_ASSIGNEES_WARNING, ROUTING_ELIGIBLE_ROLES, resolve_eligible_assignees,
};
pub use case::{Case, CaseFields, CaseId};
pub use clock::{
    DEFAULT_TIMEZONE, format_date, local_date, parse_date, parse_timezone, today_in_timezone,
};
pub use detail::{CaseDetails, Ensured, InitialEvaluationReport, PreChargeInvestigation};
pub use error::DomainError;
pub use reference::{
    CaseReference, NO_LOCATION, REFERENCE_PREFIX, ReferencePrefix, SEQUENCE_WIDTH, next_reference,
};
pub use user::{Location, Role, User, UserId};
pub use validation::{MAX_FIELD_LENGTH, validate_case_fields, validate_precharge_no};
pub use workflow::{
    CASE_WORKFLOW_STEPS, Stage, WorkflowStage, compute_due_date, index_of, initial_stage,
    initial_stage_key, next_stage, previous_stage, stage_at, stage_by_key, stage_definition,
    status_choices, terminal_stage, validate_workflow_steps, workflow_steps,
};
