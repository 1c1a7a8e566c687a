// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, TransitionAuthority, TransitionKind};
use crate::error::CoreError;
use crate::state::{NewCase, TransitionContext, TransitionResult};
use iec_tracker_domain::{
    Case, CaseDetails, CaseFields, DomainError, Ensured, InitialEvaluationReport,
    PreChargeInvestigation, ReferencePrefix, Stage, User, UserId, WorkflowStage,
    compute_due_date, initial_stage, next_stage, validate_case_fields, validate_precharge_no,
};
use time::Date;

/// Validates the fields of a new case and prepares it for storage.
///
/// The case starts in the initial stage, owned by its creator, and is due
/// `date_received` plus the initial stage's allotted days.
///
/// # Arguments
///
/// * `fields` - The submitted descriptive fields
/// * `creator` - The user creating the case
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns an error if:
/// - A descriptive field is invalid
/// - The due date cannot be computed
pub fn prepare_new_case(
    fields: &CaseFields,
    creator: &User,
    today: Date,
) -> Result<NewCase, CoreError> {
    let fields: CaseFields = fields.trimmed();
    validate_case_fields(&fields)?;

    let initial: &WorkflowStage = initial_stage();
    let due_date: Date = compute_due_date(fields.date_received, initial)?;

    Ok(NewCase {
        reference_prefix: ReferencePrefix::new(creator.location, today.year()),
        date_created: today,
        fields,
        status: initial.stage,
        due_date,
        created_by: creator.user_id,
        assigned_to: creator.user_id,
    })
}

/// Applies a transition command to a case.
///
/// Checks run in a fixed order and the first failure is returned:
/// authorization, state guard, required detail records, successor lookup,
/// then command input. The inputs are never modified.
///
/// # Arguments
///
/// * `case` - The case as currently stored
/// * `details` - The case's stored detail records
/// * `command` - The requested transition
/// * `actor` - The user performing the transition
/// * `ctx` - Externally resolved facts (today, eligible assignees, number conflicts)
///
/// # Returns
///
/// * `Ok(TransitionResult)` describing everything that must be stored
/// * `Err(CoreError)` if any check fails
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not the creator (routing) or assignee (submission)
/// - The case is not in the transition's source stage
/// - The pre-charge investigation record is missing for a notice submission
/// - The source stage has no successor
/// - The assignee is not eligible, or the pre-charge number is empty or taken
pub fn apply(
    case: &Case,
    details: &CaseDetails,
    command: Command,
    actor: &User,
    ctx: &TransitionContext,
) -> Result<TransitionResult, CoreError> {
    let kind: TransitionKind = command.kind();

    authorize(case, kind, actor)?;
    guard_state(case, kind)?;

    let existing_pci: Option<&PreChargeInvestigation> = details.pre_charge_investigation.as_ref();
    if kind == TransitionKind::SubmitNoticePci && existing_pci.is_none() {
        return Err(CoreError::DetailRecordNotFound {
            case_id: case.case_id,
            record: "Pre-Charge Investigation",
        });
    }

    let next: &WorkflowStage =
        next_stage(case.status).ok_or_else(|| CoreError::NextStepNotConfigured {
            stage: case.status.description(),
        })?;

    match command {
        Command::AcknowledgeAndRoute {
            assign_to,
            director_approval_date,
            submission_remarks,
        } => apply_acknowledge_and_route(
            case,
            details,
            next,
            actor,
            ctx,
            &RoutingInput {
                assign_to,
                director_approval_date,
                submission_remarks,
            },
        ),
        Command::SubmitNoticePci {
            precharge_no,
            respondent_received_on,
            remarks,
        } => apply_submit_notice_pci(
            case,
            existing_pci,
            next,
            actor,
            ctx,
            &NoticeInput {
                precharge_no,
                respondent_received_on,
                remarks,
            },
        ),
    }
}

struct RoutingInput {
    assign_to: UserId,
    director_approval_date: Option<Date>,
    submission_remarks: String,
}

struct NoticeInput {
    precharge_no: String,
    respondent_received_on: Option<Date>,
    remarks: String,
}

// Blank remarks are kept as empty text, matching the case's own remarks.
fn apply_acknowledge_and_route(
    case: &Case,
    details: &CaseDetails,
    next: &WorkflowStage,
    actor: &User,
    ctx: &TransitionContext,
    input: &RoutingInput,
) -> Result<TransitionResult, CoreError> {
    let assign_to: UserId = input.assign_to;

    if !ctx.eligible_assignees.contains(&assign_to) {
        return Err(CoreError::InvalidInput {
            field: "assign_to",
            message: format!("User {assign_to} is not an eligible assignee for this case"),
        });
    }

    // An existing report is kept as-is and routing proceeds.
    let report: Ensured<InitialEvaluationReport> =
        Ensured::from_existing_or(details.initial_evaluation_report.clone(), || {
            InitialEvaluationReport {
                case_id: case.case_id,
                submitted_by: Some(actor.user_id),
                submitted_on: ctx.today,
                director_approval_date: input.director_approval_date,
                remarks: input.submission_remarks.trim().to_string(),
            }
        });
    let investigation: Ensured<PreChargeInvestigation> =
        Ensured::from_existing_or(details.pre_charge_investigation.clone(), || {
            PreChargeInvestigation::empty(case.case_id)
        });

    let due_date: Date = compute_due_date(ctx.today, next)?;
    let new_case: Case = Case {
        status: next.stage,
        assigned_to: Some(assign_to),
        due_date: Some(due_date),
        ..case.clone()
    };

    Ok(TransitionResult {
        kind: TransitionKind::AcknowledgeAndRoute,
        from: case.status,
        to: next.stage,
        case: new_case,
        initial_evaluation_report: Some(report),
        pre_charge_investigation: Some(investigation),
    })
}

fn apply_submit_notice_pci(
    case: &Case,
    existing_pci: Option<&PreChargeInvestigation>,
    next: &WorkflowStage,
    actor: &User,
    ctx: &TransitionContext,
    input: &NoticeInput,
) -> Result<TransitionResult, CoreError> {
    let precharge_no: String = input.precharge_no.trim().to_string();
    validate_precharge_no(&precharge_no).map_err(|err| match err {
        DomainError::InvalidPrechargeNumber(message) => CoreError::InvalidInput {
            field: "precharge_no",
            message,
        },
        other => CoreError::DomainViolation(other),
    })?;
    if ctx.precharge_no_taken {
        return Err(CoreError::InvalidInput {
            field: "precharge_no",
            message: format!("Pre-charge investigation number '{precharge_no}' is already in use"),
        });
    }

    let existing: PreChargeInvestigation =
        existing_pci.cloned().ok_or(CoreError::DetailRecordNotFound {
            case_id: case.case_id,
            record: "Pre-Charge Investigation",
        })?;
    let investigation: PreChargeInvestigation = PreChargeInvestigation {
        precharge_no: Some(precharge_no),
        notice_pci_submitted_by: Some(actor.user_id),
        notice_pci_submitted_on: Some(ctx.today),
        notice_pci_respondent_received_on: input.respondent_received_on,
        notice_pci_remarks: input.remarks.trim().to_string(),
        ..existing
    };

    let reference_date: Date = input.respondent_received_on.unwrap_or(ctx.today);
    let due_date: Date = compute_due_date(reference_date, next)?;
    let new_case: Case = Case {
        status: next.stage,
        due_date: Some(due_date),
        ..case.clone()
    };

    Ok(TransitionResult {
        kind: TransitionKind::SubmitNoticePci,
        from: case.status,
        to: next.stage,
        case: new_case,
        initial_evaluation_report: None,
        pre_charge_investigation: Some(Ensured::existing(investigation)),
    })
}

/// Returns whether `actor` holds the authority `kind` requires on `case`.
#[must_use]
pub fn is_authorized(case: &Case, kind: TransitionKind, actor: &User) -> bool {
    match kind.authority() {
        TransitionAuthority::Creator => case.is_created_by(actor.user_id),
        TransitionAuthority::Assignee => case.is_assigned_to(actor.user_id),
    }
}

fn authorize(case: &Case, kind: TransitionKind, actor: &User) -> Result<(), CoreError> {
    if is_authorized(case, kind, actor) {
        return Ok(());
    }

    let reason: String = match kind.authority() {
        TransitionAuthority::Creator => {
            String::from("only the creator of the case can perform the initial routing")
        }
        TransitionAuthority::Assignee => format!(
            "the '{}' task for {} is not assigned to you",
            kind.source_stage().description(),
            case.reference
        ),
    };

    Err(CoreError::Unauthorized {
        action: kind.name(),
        reason,
    })
}

fn guard_state(case: &Case, kind: TransitionKind) -> Result<(), CoreError> {
    let expected: Stage = kind.source_stage();
    if case.status == expected {
        return Ok(());
    }

    Err(CoreError::StateGuard {
        actual: case.status.description(),
        expected: expected.description(),
    })
}
