// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::TransitionKind;
use iec_tracker_domain::{
    Case, CaseFields, Ensured, InitialEvaluationReport, PreChargeInvestigation, ReferencePrefix,
    Stage, UserId,
};
use time::Date;

/// Facts resolved outside the engine that a transition is validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionContext {
    /// The current calendar date in the office timezone.
    pub today: Date,
    /// Users the case may be routed to, as resolved for the actor.
    pub eligible_assignees: Vec<UserId>,
    /// Whether the submitted pre-charge number is already used by another case.
    pub precharge_no_taken: bool,
}

impl TransitionContext {
    /// Creates a context with no eligible assignees and no number conflict.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self {
            today,
            eligible_assignees: Vec::new(),
            precharge_no_taken: false,
        }
    }
}

/// A validated case ready to be stored.
///
/// The reference is generated by the store from `reference_prefix` when the
/// row is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    /// Prefix the reference is generated under.
    pub reference_prefix: ReferencePrefix,
    /// Creation date.
    pub date_created: Date,
    /// Trimmed descriptive fields.
    pub fields: CaseFields,
    /// Always the initial stage.
    pub status: Stage,
    /// Due date of the initial stage.
    pub due_date: Date,
    /// The creating user.
    pub created_by: UserId,
    /// The creating user, who owns the initial stage.
    pub assigned_to: UserId,
}

/// The result of a successful transition.
///
/// Nothing has been stored yet; the caller persists every part of the
/// result together or none of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The transition that was applied.
    pub kind: TransitionKind,
    /// Stage the case left.
    pub from: Stage,
    /// Stage the case entered.
    pub to: Stage,
    /// The case after the transition.
    pub case: Case,
    /// Initial evaluation report to store, if the transition touched it.
    pub initial_evaluation_report: Option<Ensured<InitialEvaluationReport>>,
    /// Pre-charge investigation record to store, if the transition touched it.
    pub pre_charge_investigation: Option<Ensured<PreChargeInvestigation>>,
}
