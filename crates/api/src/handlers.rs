// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations.
//!
//! Each operation resolves the acting user, loads what the workflow engine
//! needs, hands the decision to the engine and stores the outcome. Callers
//! supply "today" so every date decision in a request uses the same day.

use iec_tracker::{
    Command, CoreError, NewCase, TransitionAuthority, TransitionContext, TransitionKind,
    TransitionResult, apply, has_outgoing_transition, is_authorized, next_transition,
    prepare_new_case,
};
use iec_tracker_domain::{
    Case, CaseDetails, CaseFields, CaseId, InitialEvaluationReport, NO_ELIGIBLE_ASSIGNEES_WARNING,
    PreChargeInvestigation, ROUTING_ELIGIBLE_ROLES, Stage, User, UserId, format_date, next_stage,
    parse_date, resolve_eligible_assignees, validate_case_fields, workflow_steps,
};
use iec_tracker_persistence::{PersistenceError, SqlitePersistence};
use time::Date;
use tracing::{debug, info, warn};

use crate::auth::resolve_actor;
use crate::capabilities::{compute_case_capabilities, sees_all_cases};
use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AcknowledgeAndRouteRequest, AssigneeInfo, Capability, CaseInfo, CaseResponse,
    CreateCaseRequest, DashboardResponse, DashboardRow, DashboardSummary, DeleteCaseResponse,
    EligibleAssigneesResponse, InitialEvaluationReportInfo, NextTransitionResponse,
    PreChargeInvestigationInfo, SubmitNoticePciRequest, TransitionResponse, UpdateCaseRequest,
    WorkflowResponse, WorkflowStageInfo, WriteCaseResponse,
};

/// Lists the workflow stages in order.
#[must_use]
pub fn list_workflow() -> WorkflowResponse {
    WorkflowResponse {
        stages: workflow_steps()
            .iter()
            .enumerate()
            .map(|(index, step)| WorkflowStageInfo {
                index,
                key: step.key.to_string(),
                description: step.description.to_string(),
                days_to_complete: step.days_to_complete,
                has_outgoing_transition: has_outgoing_transition(step.stage),
            })
            .collect(),
    }
}

/// Creates a case.
///
/// The case starts in the initial stage, assigned to its creator, with a
/// reference generated from the creator's location and the current year.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The submitted case fields
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns an error if:
/// - The actor is unknown or inactive
/// - A field is missing, too long, or not a valid date
/// - The case cannot be stored
pub fn create_case(
    persistence: &mut SqlitePersistence,
    request: CreateCaseRequest,
    today: Date,
) -> Result<WriteCaseResponse, ApiError> {
    let actor: User = resolve_actor(persistence, request.actor_id)?;

    let fields: CaseFields = CaseFields {
        date_received: parse_request_date("date_received", &request.date_received)?,
        complainant: request.complainant,
        respondent: request.respondent,
        charge: request.charge,
        remarks: request.remarks,
    };

    let new_case: NewCase =
        prepare_new_case(&fields, &actor, today).map_err(translate_core_error)?;
    let case: Case = persistence
        .create_case(&new_case)
        .map_err(translate_persistence_error)?;

    info!(
        case_id = case.case_id.value(),
        reference = %case.reference,
        actor_id = actor.user_id.value(),
        "Created case"
    );

    Ok(WriteCaseResponse {
        message: format!("Case {} created", case.reference),
        case: case_info(&case)?,
    })
}

/// Returns a case with its detail records and the actor's capabilities.
///
/// # Errors
///
/// Returns an error if the actor is unknown or inactive, or the case does
/// not exist.
pub fn get_case(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    actor_id: i64,
) -> Result<CaseResponse, ApiError> {
    let actor: User = resolve_actor(persistence, actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;
    let details: CaseDetails = persistence
        .get_case_details(case.case_id)
        .map_err(translate_persistence_error)?;

    Ok(CaseResponse {
        case: case_info(&case)?,
        initial_evaluation_report: details
            .initial_evaluation_report
            .as_ref()
            .map(initial_evaluation_report_info)
            .transpose()?,
        pre_charge_investigation: details
            .pre_charge_investigation
            .as_ref()
            .map(pre_charge_investigation_info)
            .transpose()?,
        capabilities: compute_case_capabilities(&case, &actor),
    })
}

/// Replaces the descriptive fields of a case.
///
/// Workflow state (reference, stage, assignment, due date) is never touched.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is unknown or inactive
/// - The case does not exist
/// - A field is missing, too long, or not a valid date
pub fn update_case(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    request: UpdateCaseRequest,
) -> Result<WriteCaseResponse, ApiError> {
    let actor: User = resolve_actor(persistence, request.actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;

    let fields: CaseFields = CaseFields {
        date_received: parse_request_date("date_received", &request.date_received)?,
        complainant: request.complainant,
        respondent: request.respondent,
        charge: request.charge,
        remarks: request.remarks,
    }
    .trimmed();
    validate_case_fields(&fields).map_err(translate_domain_error)?;

    persistence
        .update_case_fields(case.case_id, &fields)
        .map_err(translate_persistence_error)?;
    let updated: Case = case.with_fields(&fields);

    info!(
        case_id,
        reference = %updated.reference,
        actor_id = actor.user_id.value(),
        "Updated case fields"
    );

    Ok(WriteCaseResponse {
        message: format!("Case {} updated", updated.reference),
        case: case_info(&updated)?,
    })
}

/// Deletes a case and its detail records.
///
/// # Errors
///
/// Returns an error if the actor is unknown or inactive, or the case does
/// not exist.
pub fn delete_case(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    actor_id: i64,
) -> Result<DeleteCaseResponse, ApiError> {
    let actor: User = resolve_actor(persistence, actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;

    persistence
        .delete_case(case.case_id)
        .map_err(translate_persistence_error)?;

    info!(
        case_id,
        reference = %case.reference,
        actor_id = actor.user_id.value(),
        "Deleted case"
    );

    Ok(DeleteCaseResponse {
        case_id,
        message: format!("Case {} deleted", case.reference),
    })
}

/// Builds the dashboard for the acting user.
///
/// Investigators see the cases they created or are assigned to; every other
/// role sees all cases. Summary counts are taken over the visible cases.
///
/// # Errors
///
/// Returns an error if the actor is unknown or inactive, or a query fails.
pub fn get_dashboard(
    persistence: &mut SqlitePersistence,
    actor_id: i64,
    today: Date,
) -> Result<DashboardResponse, ApiError> {
    let actor: User = resolve_actor(persistence, actor_id)?;

    let cases: Vec<Case> = if sees_all_cases(&actor) {
        persistence.list_cases()
    } else {
        persistence.list_cases_for_user(actor.user_id)
    }
    .map_err(translate_persistence_error)?;

    let summary: DashboardSummary = summarize(&cases, actor.user_id);
    let rows: Vec<DashboardRow> = cases
        .iter()
        .map(|case| {
            Ok(DashboardRow {
                case: case_info(case)?,
                days_remaining: case.days_remaining(today),
                overdue_days: case.overdue_days(today),
                capabilities: compute_case_capabilities(case, &actor),
            })
        })
        .collect::<Result<_, ApiError>>()?;

    debug!(actor_id, visible = rows.len(), "Built dashboard");

    Ok(DashboardResponse {
        actor_id,
        today: date_string(today)?,
        summary,
        cases: rows,
    })
}

/// Lists the users the acting user may route a case to.
///
/// An empty list is not an error; the response then carries a warning.
///
/// # Errors
///
/// Returns an error if the actor is unknown or inactive, or the case does
/// not exist.
pub fn get_eligible_assignees(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    actor_id: i64,
) -> Result<EligibleAssigneesResponse, ApiError> {
    let actor: User = resolve_actor(persistence, actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;

    let assignees: Vec<User> = eligible_assignees_for(persistence, &actor)?;
    let warning: Option<String> = if assignees.is_empty() {
        warn!(
            case_id,
            actor_id,
            location = ?actor.location,
            "No eligible assignees for routing"
        );
        Some(String::from(NO_ELIGIBLE_ASSIGNEES_WARNING))
    } else {
        None
    };

    Ok(EligibleAssigneesResponse {
        case_id: case.case_id.value(),
        assignees: assignees
            .iter()
            .map(|user| AssigneeInfo {
                user_id: user.user_id.value(),
                display_name: user.display_name.clone(),
                designation: user.designation.clone(),
                role: user.role.map(|role| role.as_str().to_string()),
            })
            .collect(),
        warning,
    })
}

/// Reports the transition available on a case and whether the actor may
/// perform it.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is unknown or inactive
/// - The case does not exist
/// - No transition leaves the case's current stage
pub fn get_next_transition(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    actor_id: i64,
) -> Result<NextTransitionResponse, ApiError> {
    let actor: User = resolve_actor(persistence, actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;

    let kind: TransitionKind = next_transition(&case).map_err(translate_core_error)?;
    let next_status: Stage = next_stage(case.status)
        .map(|step| step.stage)
        .ok_or_else(|| {
            translate_core_error(CoreError::NextStepNotConfigured {
                stage: case.status.description(),
            })
        })?;

    let authority: &str = match kind.authority() {
        TransitionAuthority::Creator => "creator",
        TransitionAuthority::Assignee => "assignee",
    };

    Ok(NextTransitionResponse {
        case_id,
        status: case.status.as_str().to_string(),
        transition: kind.name().to_string(),
        next_status: next_status.as_str().to_string(),
        authority: authority.to_string(),
        permitted: Capability::from_bool(is_authorized(&case, kind, &actor)),
    })
}

/// Acknowledges a new case and routes it to an investigator.
///
/// Moves the case from `initial_evaluation` to `notice_pci`, records the
/// initial evaluation report and creates the pre-charge investigation record.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `case_id` - The case to route
/// * `request` - The routing request
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns an error if:
/// - The actor is unknown or inactive
/// - The case does not exist
/// - The actor did not create the case
/// - The case is not awaiting routing
/// - The chosen assignee is not eligible
/// - The transition cannot be stored
pub fn acknowledge_and_route(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    request: AcknowledgeAndRouteRequest,
    today: Date,
) -> Result<TransitionResponse, ApiError> {
    let actor: User = resolve_actor(persistence, request.actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;
    let details: CaseDetails = persistence
        .get_case_details(case.case_id)
        .map_err(translate_persistence_error)?;

    let director_approval_date: Option<Date> =
        parse_optional_request_date("director_approval_date", request.director_approval_date)?;

    let ctx: TransitionContext = TransitionContext {
        eligible_assignees: eligible_assignees_for(persistence, &actor)?
            .iter()
            .map(|user| user.user_id)
            .collect(),
        ..TransitionContext::new(today)
    };

    let command: Command = Command::AcknowledgeAndRoute {
        assign_to: UserId(request.assign_to),
        director_approval_date,
        submission_remarks: request.submission_remarks,
    };

    run_transition(persistence, &case, &details, command, &actor, &ctx)
}

/// Records the notice of pre-charge investigation on a routed case.
///
/// Moves the case from `notice_pci` to `comment_counter_affidavit`. The due
/// date counts from the date the respondent received the notice when one is
/// given, otherwise from today.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is unknown or inactive
/// - The case does not exist
/// - The case is not assigned to the actor
/// - The case is not awaiting the notice
/// - The pre-charge investigation number is empty or used by another case
/// - The transition cannot be stored
pub fn submit_notice_pci(
    persistence: &mut SqlitePersistence,
    case_id: i64,
    request: SubmitNoticePciRequest,
    today: Date,
) -> Result<TransitionResponse, ApiError> {
    let actor: User = resolve_actor(persistence, request.actor_id)?;
    let case: Case = load_case(persistence, CaseId(case_id))?;
    let details: CaseDetails = persistence
        .get_case_details(case.case_id)
        .map_err(translate_persistence_error)?;

    let respondent_received_on: Option<Date> =
        parse_optional_request_date("respondent_received_on", request.respondent_received_on)?;

    let ctx: TransitionContext = TransitionContext {
        precharge_no_taken: persistence
            .is_precharge_no_taken(request.precharge_no.trim(), case.case_id)
            .map_err(translate_persistence_error)?,
        ..TransitionContext::new(today)
    };

    let command: Command = Command::SubmitNoticePci {
        precharge_no: request.precharge_no,
        respondent_received_on,
        remarks: request.remarks,
    };

    run_transition(persistence, &case, &details, command, &actor, &ctx)
}

fn run_transition(
    persistence: &mut SqlitePersistence,
    case: &Case,
    details: &CaseDetails,
    command: Command,
    actor: &User,
    ctx: &TransitionContext,
) -> Result<TransitionResponse, ApiError> {
    let result: TransitionResult = apply(case, details, command, actor, ctx).map_err(|err| {
        debug!(case_id = case.case_id.value(), error = %err, "Transition rejected");
        translate_core_error(err)
    })?;

    let stored: Case = persistence
        .persist_transition(&result)
        .map_err(|err| match err {
            PersistenceError::NotFound(_) => ApiError::DomainRuleViolation {
                rule: String::from("concurrent_transition"),
                message: format!(
                    "Case {} changed while the '{}' step was being recorded",
                    case.reference, result.kind
                ),
            },
            other => translate_persistence_error(other),
        })?;

    info!(
        case_id = stored.case_id.value(),
        reference = %stored.reference,
        actor_id = actor.user_id.value(),
        transition = result.kind.name(),
        "Case advanced to '{}'",
        stored.status.description()
    );

    Ok(TransitionResponse {
        message: format!(
            "Case {} moved to '{}'",
            stored.reference,
            stored.status.description()
        ),
        transition: result.kind.name().to_string(),
        from: result.from.as_str().to_string(),
        to: result.to.as_str().to_string(),
        case: case_info(&stored)?,
    })
}

fn load_case(persistence: &mut SqlitePersistence, case_id: CaseId) -> Result<Case, ApiError> {
    persistence
        .get_case(case_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_core_error(CoreError::CaseNotFound(case_id)))
}

fn eligible_assignees_for(
    persistence: &mut SqlitePersistence,
    actor: &User,
) -> Result<Vec<User>, ApiError> {
    let Some(location) = actor.location else {
        return Ok(Vec::new());
    };
    let candidates: Vec<User> = persistence
        .list_users_by_location(location)
        .map_err(translate_persistence_error)?;
    Ok(resolve_eligible_assignees(
        actor,
        &candidates,
        &ROUTING_ELIGIBLE_ROLES,
    ))
}

fn summarize(cases: &[Case], actor_id: UserId) -> DashboardSummary {
    DashboardSummary {
        total_cases: cases.len(),
        completed_cases: cases.iter().filter(|case| case.is_resolved()).count(),
        active_tasks: cases
            .iter()
            .filter(|case| case.is_assigned_to(actor_id) && !case.is_resolved())
            .count(),
        pending_routing: cases
            .iter()
            .filter(|case| {
                case.is_created_by(actor_id)
                    && case.status == TransitionKind::AcknowledgeAndRoute.source_stage()
            })
            .count(),
    }
}

fn parse_request_date(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

/// Blank strings count as absent.
fn parse_optional_request_date(
    field: &str,
    value: Option<String>,
) -> Result<Option<Date>, ApiError> {
    value
        .filter(|text| !text.trim().is_empty())
        .map(|text| parse_request_date(field, &text))
        .transpose()
}

fn date_string(date: Date) -> Result<String, ApiError> {
    format_date(date).map_err(translate_domain_error)
}

fn optional_date_string(date: Option<Date>) -> Result<Option<String>, ApiError> {
    date.map(date_string).transpose()
}

fn case_info(case: &Case) -> Result<CaseInfo, ApiError> {
    Ok(CaseInfo {
        case_id: case.case_id.value(),
        reference: case.reference.to_string(),
        date_created: date_string(case.date_created)?,
        date_received: date_string(case.date_received)?,
        complainant: case.complainant.clone(),
        respondent: case.respondent.clone(),
        charge: case.charge.clone(),
        remarks: case.remarks.clone(),
        due_date: optional_date_string(case.due_date)?,
        status: case.status.as_str().to_string(),
        status_description: case.status.description().to_string(),
        created_by: case.created_by.map(|id| id.value()),
        assigned_to: case.assigned_to.map(|id| id.value()),
    })
}

fn initial_evaluation_report_info(
    report: &InitialEvaluationReport,
) -> Result<InitialEvaluationReportInfo, ApiError> {
    Ok(InitialEvaluationReportInfo {
        submitted_by: report.submitted_by.map(|id| id.value()),
        submitted_on: date_string(report.submitted_on)?,
        director_approval_date: optional_date_string(report.director_approval_date)?,
        remarks: report.remarks.clone(),
    })
}

fn pre_charge_investigation_info(
    record: &PreChargeInvestigation,
) -> Result<PreChargeInvestigationInfo, ApiError> {
    Ok(PreChargeInvestigationInfo {
        precharge_no: record.precharge_no.clone(),
        notice_pci_submitted_by: record.notice_pci_submitted_by.map(|id| id.value()),
        notice_pci_submitted_on: optional_date_string(record.notice_pci_submitted_on)?,
        notice_pci_respondent_received_on: optional_date_string(
            record.notice_pci_respondent_received_on,
        )?,
        notice_pci_remarks: record.notice_pci_remarks.clone(),
        comment_counter_affidavit_received_on: optional_date_string(
            record.comment_counter_affidavit_received_on,
        )?,
        comment_counter_affidavit_remarks: record.comment_counter_affidavit_remarks.clone(),
        pci_report_submitted_by: record.pci_report_submitted_by.map(|id| id.value()),
        pci_report_submitted_on: optional_date_string(record.pci_report_submitted_on)?,
        pci_report_remarks: record.pci_report_remarks.clone(),
    })
}
