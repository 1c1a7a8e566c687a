// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the IEC case tracker.
//!
//! Operations here take plain request structs, resolve the acting user,
//! run the workflow engine and store the result. Errors from every lower
//! layer are translated into [`ApiError`] before they leave this crate.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::resolve_actor;
pub use capabilities::{compute_case_capabilities, sees_all_cases};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    acknowledge_and_route, create_case, delete_case, get_case, get_dashboard,
    get_eligible_assignees, get_next_transition, list_workflow, submit_notice_pci, update_case,
};
pub use request_response::{
    AcknowledgeAndRouteRequest, AssigneeInfo, Capability, CaseCapabilities, CaseInfo,
    CaseResponse, CreateCaseRequest, DashboardResponse, DashboardRow, DashboardSummary,
    DeleteCaseResponse, EligibleAssigneesResponse, InitialEvaluationReportInfo,
    NextTransitionResponse, PreChargeInvestigationInfo, SubmitNoticePciRequest,
    TransitionResponse, UpdateCaseRequest, WorkflowResponse, WorkflowStageInfo, WriteCaseResponse,
};
