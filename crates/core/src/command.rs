// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use iec_tracker_domain::{Stage, UserId};
use time::Date;

/// A command represents a requested case transition as data only.
///
/// Commands are the only way to move a case between stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Acknowledge a new case and route it to an investigator.
    AcknowledgeAndRoute {
        /// The user the case is routed to.
        assign_to: UserId,
        /// Date the director approved the initial evaluation.
        director_approval_date: Option<Date>,
        /// Remarks recorded on the initial evaluation report.
        submission_remarks: String,
    },
    /// Record the notice of pre-charge investigation.
    SubmitNoticePci {
        /// The pre-charge investigation number.
        precharge_no: String,
        /// Date the respondent received the notice, if known.
        respondent_received_on: Option<Date>,
        /// Remarks recorded with the notice.
        remarks: String,
    },
}

impl Command {
    /// Returns the transition this command requests.
    #[must_use]
    pub const fn kind(&self) -> TransitionKind {
        match self {
            Self::AcknowledgeAndRoute { .. } => TransitionKind::AcknowledgeAndRoute,
            Self::SubmitNoticePci { .. } => TransitionKind::SubmitNoticePci,
        }
    }
}

/// Who may drive a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAuthority {
    /// Only the user who created the case.
    Creator,
    /// Only the user the case is currently assigned to.
    Assignee,
}

/// The transitions defined by the workflow engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// `initial_evaluation` to `notice_pci`.
    AcknowledgeAndRoute,
    /// `notice_pci` to `comment_counter_affidavit`.
    SubmitNoticePci,
}

impl TransitionKind {
    /// Returns the transition that leaves `stage`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NextStepNotConfigured` for every stage without an
    /// outgoing operation, including the terminal stage.
    pub fn for_stage(stage: Stage) -> Result<Self, CoreError> {
        match stage {
            Stage::InitialEvaluation => Ok(Self::AcknowledgeAndRoute),
            Stage::NoticePci => Ok(Self::SubmitNoticePci),
            Stage::CommentCounterAffidavit
            | Stage::PciReportDraftCharge
            | Stage::FormalCharge
            | Stage::AssignHearingOfficer
            | Stage::Summons
            | Stage::Answer
            | Stage::PreHearingConference
            | Stage::PositionPaper
            | Stage::ClarificatoryHearing
            | Stage::ReportInvestigationDraftDecision
            | Stage::Deliberations
            | Stage::Resolved => Err(CoreError::NextStepNotConfigured {
                stage: stage.description(),
            }),
        }
    }

    /// Returns the stage a case must be in for this transition.
    #[must_use]
    pub const fn source_stage(&self) -> Stage {
        match self {
            Self::AcknowledgeAndRoute => Stage::InitialEvaluation,
            Self::SubmitNoticePci => Stage::NoticePci,
        }
    }

    /// Returns who may drive this transition.
    #[must_use]
    pub const fn authority(&self) -> TransitionAuthority {
        match self {
            Self::AcknowledgeAndRoute => TransitionAuthority::Creator,
            Self::SubmitNoticePci => TransitionAuthority::Assignee,
        }
    }

    /// Returns the operation name used in messages and routes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AcknowledgeAndRoute => "acknowledge_and_route",
            Self::SubmitNoticePci => "submit_notice_pci",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
