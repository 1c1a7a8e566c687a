// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CASE_WORKFLOW_STEPS, DomainError, Stage, WorkflowStage, compute_due_date, index_of,
    initial_stage, initial_stage_key, next_stage, previous_stage, stage_at, stage_by_key,
    stage_definition, status_choices, terminal_stage, validate_workflow_steps, workflow_steps,
};
use std::str::FromStr;
use time::macros::date;

#[test]
fn test_standard_workflow_is_valid() {
    assert!(validate_workflow_steps(workflow_steps()).is_ok());
    assert_eq!(workflow_steps().len(), 14);
}

#[test]
fn test_initial_and_terminal_stages() {
    assert_eq!(initial_stage_key(), "initial_evaluation");
    assert_eq!(initial_stage().stage, Stage::InitialEvaluation);
    assert_eq!(terminal_stage().key, "resolved");
    assert!(terminal_stage().stage.is_terminal());
    assert!(!Stage::NoticePci.is_terminal());
}

#[test]
fn test_days_to_complete_table() {
    let days: Vec<u32> = CASE_WORKFLOW_STEPS
        .iter()
        .map(|step| step.days_to_complete)
        .collect();
    assert_eq!(days, vec![1, 2, 3, 1, 1, 1, 2, 7, 3, 7, 2, 7, 14, 15]);
}

#[test]
fn test_every_variant_maps_to_its_own_row() {
    for (index, step) in CASE_WORKFLOW_STEPS.iter().enumerate() {
        assert_eq!(step.key, step.stage.as_str());
        assert_eq!(stage_definition(step.stage), step);
        assert_eq!(index_of(step.key), Some(index));
        assert_eq!(Stage::from_str(step.key).unwrap(), step.stage);
    }
}

#[test]
fn test_stage_by_key_signals_not_found() {
    assert_eq!(
        stage_by_key("notice_pci").map(|step| step.days_to_complete),
        Some(2)
    );
    assert!(stage_by_key("no_such_stage").is_none());
    assert!(index_of("").is_none());
}

#[test]
fn test_unknown_stage_parse_fails() {
    let result = Stage::from_str("archived");
    assert_eq!(
        result.unwrap_err(),
        DomainError::UnknownStage(String::from("archived"))
    );
}

#[test]
fn test_successor_and_predecessor() {
    assert_eq!(
        next_stage(Stage::InitialEvaluation).map(|step| step.stage),
        Some(Stage::NoticePci)
    );
    assert_eq!(
        next_stage(Stage::NoticePci).map(|step| step.stage),
        Some(Stage::CommentCounterAffidavit)
    );
    assert!(next_stage(Stage::Resolved).is_none());
    assert!(previous_stage(Stage::InitialEvaluation).is_none());
    assert_eq!(
        previous_stage(Stage::Resolved).map(|step| step.stage),
        Some(Stage::Deliberations)
    );
    assert!(stage_at(14).is_none());
}

#[test]
fn test_status_choices_follow_table_order() {
    let choices = status_choices();
    assert_eq!(choices.len(), 14);
    assert_eq!(choices[0], ("initial_evaluation", "Initial Evaluation Report"));
    assert_eq!(choices[13], ("resolved", "Resolved"));
}

#[test]
fn test_compute_due_date_adds_stage_days() {
    let notice: &WorkflowStage = stage_definition(Stage::NoticePci);
    assert_eq!(
        compute_due_date(date!(2025 - 01 - 10), notice).unwrap(),
        date!(2025 - 01 - 12)
    );

    let resolved: &WorkflowStage = stage_definition(Stage::Resolved);
    assert_eq!(
        compute_due_date(date!(2025 - 12 - 20), resolved).unwrap(),
        date!(2026 - 01 - 04)
    );
}

#[test]
fn test_compute_due_date_overflow_is_reported() {
    let result = compute_due_date(time::Date::MAX, stage_definition(Stage::Resolved));
    assert!(matches!(
        result,
        Err(DomainError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_validate_rejects_duplicate_keys() {
    let steps: [WorkflowStage; 2] = [CASE_WORKFLOW_STEPS[0], CASE_WORKFLOW_STEPS[0]];
    let result = validate_workflow_steps(&steps);
    assert!(matches!(result, Err(DomainError::InvalidWorkflow { .. })));
}

#[test]
fn test_validate_rejects_empty_table_and_blank_description() {
    assert!(validate_workflow_steps(&[]).is_err());

    let mut step: WorkflowStage = CASE_WORKFLOW_STEPS[1];
    step.description = "  ";
    let result = validate_workflow_steps(&[step]);
    match result.unwrap_err() {
        DomainError::InvalidWorkflow { reason } => assert!(reason.contains("notice_pci")),
        other => panic!("Expected InvalidWorkflow, got {other:?}"),
    }
}
