// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and identifiers as plain
//! integers.

/// A workflow stage as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowStageInfo {
    /// Position in the workflow, starting at 0.
    pub index: usize,
    /// The stage key.
    pub key: String,
    /// Human-readable description.
    pub description: String,
    /// Days allowed for the stage.
    pub days_to_complete: u32,
    /// Whether the case tracker implements a transition out of this stage.
    pub has_outgoing_transition: bool,
}

/// API response listing the workflow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowResponse {
    /// Stages in workflow order.
    pub stages: Vec<WorkflowStageInfo>,
}

/// API request to create a case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateCaseRequest {
    /// The acting user.
    pub actor_id: i64,
    /// Date the complaint was received (`YYYY-MM-DD`).
    pub date_received: String,
    /// The complainant.
    pub complainant: String,
    /// The respondent.
    pub respondent: String,
    /// The charge.
    pub charge: String,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
}

/// API request to edit the descriptive fields of a case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateCaseRequest {
    /// The acting user.
    pub actor_id: i64,
    /// Date the complaint was received (`YYYY-MM-DD`).
    pub date_received: String,
    /// The complainant.
    pub complainant: String,
    /// The respondent.
    pub respondent: String,
    /// The charge.
    pub charge: String,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
}

/// A case as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaseInfo {
    /// The case ID.
    pub case_id: i64,
    /// The case reference, e.g. `IEC-NCR-2025-0001`.
    pub reference: String,
    /// Date the case was created.
    pub date_created: String,
    /// Date the complaint was received.
    pub date_received: String,
    /// The complainant.
    pub complainant: String,
    /// The respondent.
    pub respondent: String,
    /// The charge.
    pub charge: String,
    /// Free-text remarks.
    pub remarks: String,
    /// Due date of the current stage.
    pub due_date: Option<String>,
    /// The current stage key.
    pub status: String,
    /// Description of the current stage.
    pub status_description: String,
    /// The user who created the case.
    pub created_by: Option<i64>,
    /// The user the case is assigned to.
    pub assigned_to: Option<i64>,
}

/// An initial evaluation report as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InitialEvaluationReportInfo {
    /// The submitting user.
    pub submitted_by: Option<i64>,
    /// Date of submission.
    pub submitted_on: String,
    /// Date the director approved the report.
    pub director_approval_date: Option<String>,
    /// Submission remarks.
    pub remarks: String,
}

/// A pre-charge investigation record as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreChargeInvestigationInfo {
    /// The pre-charge investigation number.
    pub precharge_no: Option<String>,
    /// The user who submitted the notice.
    pub notice_pci_submitted_by: Option<i64>,
    /// Date the notice was submitted.
    pub notice_pci_submitted_on: Option<String>,
    /// Date the respondent received the notice.
    pub notice_pci_respondent_received_on: Option<String>,
    /// Notice remarks.
    pub notice_pci_remarks: String,
    /// Date the comment or counter-affidavit was received.
    pub comment_counter_affidavit_received_on: Option<String>,
    /// Comment or counter-affidavit remarks.
    pub comment_counter_affidavit_remarks: String,
    /// The user who submitted the PCI report.
    pub pci_report_submitted_by: Option<i64>,
    /// Date the PCI report was submitted.
    pub pci_report_submitted_on: Option<String>,
    /// PCI report remarks.
    pub pci_report_remarks: String,
}

/// API response for a single case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaseResponse {
    /// The case.
    pub case: CaseInfo,
    /// The initial evaluation report, once submitted.
    pub initial_evaluation_report: Option<InitialEvaluationReportInfo>,
    /// The pre-charge investigation record, once created.
    pub pre_charge_investigation: Option<PreChargeInvestigationInfo>,
    /// What the acting user may do with the case.
    pub capabilities: CaseCapabilities,
}

/// API response for a successful write.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WriteCaseResponse {
    /// The case after the write.
    pub case: CaseInfo,
    /// A success message.
    pub message: String,
}

/// API response for a deleted case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteCaseResponse {
    /// The deleted case.
    pub case_id: i64,
    /// A success message.
    pub message: String,
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let allowed: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(allowed))
    }
}

/// Per-case capabilities for the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaseCapabilities {
    /// Whether the actor may acknowledge and route the case.
    pub can_acknowledge_and_route: Capability,
    /// Whether the actor may submit the notice of pre-charge investigation.
    pub can_submit_notice_pci: Capability,
    /// Whether the actor may edit the descriptive fields.
    pub can_edit: Capability,
    /// Whether the actor may delete the case.
    pub can_delete: Capability,
}

/// One row of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardRow {
    /// The case.
    pub case: CaseInfo,
    /// Days until the due date, negative when past due.
    pub days_remaining: Option<i64>,
    /// Days past due, when overdue.
    pub overdue_days: Option<i64>,
    /// What the acting user may do with the case.
    pub capabilities: CaseCapabilities,
}

/// Summary counts over the cases visible to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardSummary {
    /// Visible cases.
    pub total_cases: usize,
    /// Visible cases that are resolved.
    pub completed_cases: usize,
    /// Unresolved cases assigned to the actor.
    pub active_tasks: usize,
    /// Cases the actor created that still await routing.
    pub pending_routing: usize,
}

/// API response for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardResponse {
    /// The acting user.
    pub actor_id: i64,
    /// The date the deadlines were computed against.
    pub today: String,
    /// Summary counts.
    pub summary: DashboardSummary,
    /// Visible cases, newest first.
    pub cases: Vec<DashboardRow>,
}

/// A user a case may be routed to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssigneeInfo {
    /// The user ID.
    pub user_id: i64,
    /// The display name.
    pub display_name: String,
    /// The designation.
    pub designation: String,
    /// The role code.
    pub role: Option<String>,
}

/// API response listing routing candidates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EligibleAssigneesResponse {
    /// The case being routed.
    pub case_id: i64,
    /// Candidates ordered by display name.
    pub assignees: Vec<AssigneeInfo>,
    /// Set when there is nobody to route to.
    pub warning: Option<String>,
}

/// API response describing the next transition of a case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NextTransitionResponse {
    /// The case.
    pub case_id: i64,
    /// The current stage key.
    pub status: String,
    /// The transition name.
    pub transition: String,
    /// Stage key the transition leads to.
    pub next_status: String,
    /// Who may perform it: `creator` or `assignee`.
    pub authority: String,
    /// Whether the acting user may perform it.
    pub permitted: Capability,
}

/// API request to acknowledge a case and route it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AcknowledgeAndRouteRequest {
    /// The acting user.
    pub actor_id: i64,
    /// The user to route the case to.
    pub assign_to: i64,
    /// Date the director approved the report (`YYYY-MM-DD`).
    #[serde(default)]
    pub director_approval_date: Option<String>,
    /// Submission remarks.
    #[serde(default)]
    pub submission_remarks: String,
}

/// API request to submit the notice of pre-charge investigation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitNoticePciRequest {
    /// The acting user.
    pub actor_id: i64,
    /// The pre-charge investigation number.
    pub precharge_no: String,
    /// Date the respondent received the notice (`YYYY-MM-DD`).
    #[serde(default)]
    pub respondent_received_on: Option<String>,
    /// Notice remarks.
    #[serde(default)]
    pub remarks: String,
}

/// API response for a completed transition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionResponse {
    /// The case after the transition.
    pub case: CaseInfo,
    /// The transition that ran.
    pub transition: String,
    /// Stage key before the transition.
    pub from: String,
    /// Stage key after the transition.
    pub to: String,
    /// A success message.
    pub message: String,
}
