// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The case workflow registry.
//!
//! A case moves through a fixed, ordered list of stages. Index 0 is the
//! initial stage and the last entry (`resolved`) is terminal. The order of
//! the table defines the only legal forward transitions.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use time::{Date, Duration};

/// A workflow stage key.
///
/// The case `status` column always holds one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    InitialEvaluation,
    NoticePci,
    CommentCounterAffidavit,
    PciReportDraftCharge,
    FormalCharge,
    AssignHearingOfficer,
    Summons,
    Answer,
    PreHearingConference,
    PositionPaper,
    ClarificatoryHearing,
    ReportInvestigationDraftDecision,
    Deliberations,
    Resolved,
}

impl Stage {
    /// Returns the stored key for this stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitialEvaluation => "initial_evaluation",
            Self::NoticePci => "notice_pci",
            Self::CommentCounterAffidavit => "comment_counter_affidavit",
            Self::PciReportDraftCharge => "pci_report_draft_charge",
            Self::FormalCharge => "formal_charge",
            Self::AssignHearingOfficer => "assign_hearing_officer",
            Self::Summons => "summons",
            Self::Answer => "answer",
            Self::PreHearingConference => "pre_hearing_conference",
            Self::PositionPaper => "position_paper",
            Self::ClarificatoryHearing => "clarificatory_hearing",
            Self::ReportInvestigationDraftDecision => "report_investigation_draft_decision",
            Self::Deliberations => "deliberations",
            Self::Resolved => "resolved",
        }
    }

    /// Returns the registry entry describing this stage.
    #[must_use]
    pub fn definition(&self) -> &'static WorkflowStage {
        // Every variant has exactly one row in the table.
        let index: usize = *self as usize;
        &CASE_WORKFLOW_STEPS[index]
    }

    /// Returns the human-readable description of this stage.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    /// Returns whether this is the terminal stage.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CASE_WORKFLOW_STEPS
            .iter()
            .find(|step| step.key == s)
            .map(|step| step.stage)
            .ok_or_else(|| DomainError::UnknownStage(s.to_string()))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of the case workflow with its expected duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowStage {
    /// The stage this row describes.
    pub stage: Stage,
    /// The unique stage key (matches `stage.as_str()`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Days allotted to complete the stage.
    pub days_to_complete: u32,
}

impl WorkflowStage {
    const fn new(
        stage: Stage,
        description: &'static str,
        days_to_complete: u32,
    ) -> Self {
        Self {
            stage,
            key: stage.as_str(),
            description,
            days_to_complete,
        }
    }
}

/// The standard case workflow, in order.
pub static CASE_WORKFLOW_STEPS: [WorkflowStage; 14] = [
    WorkflowStage::new(Stage::InitialEvaluation, "Initial Evaluation Report", 1),
    WorkflowStage::new(Stage::NoticePci, "Notice of Pre-Charge Investigation", 2),
    WorkflowStage::new(Stage::CommentCounterAffidavit, "Comment/Counter Affidavit", 3),
    WorkflowStage::new(
        Stage::PciReportDraftCharge,
        "PCI Report and/or Draft Formal Charge",
        1,
    ),
    WorkflowStage::new(Stage::FormalCharge, "Formal Charge", 1),
    WorkflowStage::new(Stage::AssignHearingOfficer, "Assignment of Hearing Officer", 1),
    WorkflowStage::new(Stage::Summons, "Summons", 2),
    WorkflowStage::new(Stage::Answer, "Answer", 7),
    WorkflowStage::new(Stage::PreHearingConference, "Pre-Hearing Conference", 3),
    WorkflowStage::new(Stage::PositionPaper, "Position Paper", 7),
    WorkflowStage::new(Stage::ClarificatoryHearing, "Clarificatory Hearing", 2),
    WorkflowStage::new(
        Stage::ReportInvestigationDraftDecision,
        "Report of Investigation and Draft Decision/Resolution",
        7,
    ),
    WorkflowStage::new(Stage::Deliberations, "Deliberations", 14),
    WorkflowStage::new(Stage::Resolved, "Resolved", 15),
];

/// Returns the full ordered stage sequence.
#[must_use]
pub fn workflow_steps() -> &'static [WorkflowStage] {
    &CASE_WORKFLOW_STEPS
}

/// Looks up a stage definition by key.
///
/// Returns `None` when no stage carries the key.
#[must_use]
pub fn stage_by_key(key: &str) -> Option<&'static WorkflowStage> {
    CASE_WORKFLOW_STEPS.iter().find(|step| step.key == key)
}

/// Returns the registry entry for `stage`.
#[must_use]
pub fn stage_definition(stage: Stage) -> &'static WorkflowStage {
    stage.definition()
}

/// Returns the initial stage definition.
#[must_use]
pub fn initial_stage() -> &'static WorkflowStage {
    &CASE_WORKFLOW_STEPS[0]
}

/// Returns the initial stage key.
#[must_use]
pub fn initial_stage_key() -> &'static str {
    initial_stage().key
}

/// Returns the terminal stage definition.
#[must_use]
pub fn terminal_stage() -> &'static WorkflowStage {
    &CASE_WORKFLOW_STEPS[CASE_WORKFLOW_STEPS.len() - 1]
}

/// Returns the stage at position `index`, if any.
#[must_use]
pub fn stage_at(index: usize) -> Option<&'static WorkflowStage> {
    CASE_WORKFLOW_STEPS.get(index)
}

/// Returns the position of `key` in the workflow, if any.
#[must_use]
pub fn index_of(key: &str) -> Option<usize> {
    CASE_WORKFLOW_STEPS.iter().position(|step| step.key == key)
}

/// Returns the stage following `stage`, or `None` at the terminal stage.
#[must_use]
pub fn next_stage(stage: Stage) -> Option<&'static WorkflowStage> {
    index_of(stage.as_str()).and_then(|index| stage_at(index + 1))
}

/// Returns the stage preceding `stage`, or `None` at the initial stage.
#[must_use]
pub fn previous_stage(stage: Stage) -> Option<&'static WorkflowStage> {
    index_of(stage.as_str())
        .and_then(|index| index.checked_sub(1))
        .and_then(stage_at)
}

/// Returns `(key, description)` pairs for every stage, in order.
#[must_use]
pub fn status_choices() -> Vec<(&'static str, &'static str)> {
    CASE_WORKFLOW_STEPS
        .iter()
        .map(|step| (step.key, step.description))
        .collect()
}

/// Validates a workflow step table.
///
/// # Errors
///
/// Returns an error if:
/// - The table is empty
/// - Any key or description is blank
/// - Any key appears more than once
pub fn validate_workflow_steps(steps: &[WorkflowStage]) -> Result<(), DomainError> {
    if steps.is_empty() {
        return Err(DomainError::InvalidWorkflow {
            reason: String::from("workflow has no stages"),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for step in steps {
        if step.key.trim().is_empty() {
            return Err(DomainError::InvalidWorkflow {
                reason: String::from("stage key must be a non-empty string"),
            });
        }
        if step.description.trim().is_empty() {
            return Err(DomainError::InvalidWorkflow {
                reason: format!("stage '{}' has an empty description", step.key),
            });
        }
        if !seen.insert(step.key) {
            return Err(DomainError::InvalidWorkflow {
                reason: format!("duplicate stage key '{}'", step.key),
            });
        }
    }

    Ok(())
}

/// Computes a due date: `reference_date` plus the stage's allotted days.
///
/// # Errors
///
/// Returns an error if the resulting date is out of range.
pub fn compute_due_date(reference_date: Date, stage: &WorkflowStage) -> Result<Date, DomainError> {
    reference_date
        .checked_add(Duration::days(i64::from(stage.days_to_complete)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!(
                "adding {} days for stage '{}' to {reference_date}",
                stage.days_to_complete, stage.key
            ),
        })
}
