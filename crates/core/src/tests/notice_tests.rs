// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    INVESTIGATOR, create_routed_case, create_test_case, creator, investigator, outsider,
    submit_notice, today,
};
use crate::{Command, CoreError, TransitionContext, TransitionResult, apply};
use iec_tracker_domain::{CaseDetails, Stage};
use time::macros::date;

#[test]
fn test_notice_without_received_date_is_due_three_days_from_today() {
    let (case, details) = create_routed_case();
    let result: TransitionResult = apply(
        &case,
        &details,
        submit_notice(None),
        &investigator(),
        &TransitionContext::new(today()),
    )
    .unwrap();

    assert_eq!(result.to, Stage::CommentCounterAffidavit);
    assert_eq!(result.case.status, Stage::CommentCounterAffidavit);
    assert_eq!(result.case.assigned_to, Some(INVESTIGATOR));
    assert_eq!(result.case.due_date, Some(date!(2025 - 01 - 13)));
    assert!(result.initial_evaluation_report.is_none());
}

#[test]
fn test_notice_due_date_uses_respondent_received_date() {
    let (case, details) = create_routed_case();
    let result = apply(
        &case,
        &details,
        submit_notice(Some(date!(2025 - 01 - 20))),
        &investigator(),
        &TransitionContext::new(today()),
    )
    .unwrap();

    assert_eq!(result.case.due_date, Some(date!(2025 - 01 - 23)));
}

#[test]
fn test_notice_updates_pre_charge_record() {
    let (case, details) = create_routed_case();
    let result = apply(
        &case,
        &details,
        submit_notice(Some(date!(2025 - 01 - 11))),
        &investigator(),
        &TransitionContext::new(today()),
    )
    .unwrap();

    let pci = result.pre_charge_investigation.unwrap();
    assert!(!pci.created);
    assert_eq!(pci.record.precharge_no.as_deref(), Some("PCI-NCR-2025-001"));
    assert_eq!(pci.record.notice_pci_submitted_by, Some(INVESTIGATOR));
    assert_eq!(pci.record.notice_pci_submitted_on, Some(today()));
    assert_eq!(
        pci.record.notice_pci_respondent_received_on,
        Some(date!(2025 - 01 - 11))
    );
    assert_eq!(pci.record.notice_pci_remarks, "Served personally");
}

#[test]
fn test_only_assignee_may_submit_notice() {
    let (case, details) = create_routed_case();

    for actor in [creator(), outsider()] {
        let result = apply(
            &case,
            &details,
            submit_notice(None),
            &actor,
            &TransitionContext::new(today()),
        );
        match result.unwrap_err() {
            CoreError::Unauthorized { action, reason } => {
                assert_eq!(action, "submit_notice_pci");
                assert!(reason.contains("not assigned to you"));
            }
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
    }
}

#[test]
fn test_notice_in_wrong_stage_is_side_effect_free() {
    let (mut case, details) = create_routed_case();
    case.status = Stage::CommentCounterAffidavit;
    let before = case.clone();

    let result = apply(
        &case,
        &details,
        submit_notice(None),
        &investigator(),
        &TransitionContext::new(today()),
    );

    assert!(matches!(result, Err(CoreError::StateGuard { .. })));
    assert_eq!(case, before);
}

#[test]
fn test_notice_requires_pre_charge_record() {
    let (case, _) = create_routed_case();
    let result = apply(
        &case,
        &CaseDetails::default(),
        submit_notice(None),
        &investigator(),
        &TransitionContext::new(today()),
    );

    assert!(matches!(
        result,
        Err(CoreError::DetailRecordNotFound { .. })
    ));
}

#[test]
fn test_notice_requires_precharge_number() {
    let (case, details) = create_routed_case();
    let command = Command::SubmitNoticePci {
        precharge_no: String::from("   "),
        respondent_received_on: None,
        remarks: String::new(),
    };

    let result = apply(
        &case,
        &details,
        command,
        &investigator(),
        &TransitionContext::new(today()),
    );

    match result.unwrap_err() {
        CoreError::InvalidInput { field, .. } => assert_eq!(field, "precharge_no"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_taken_precharge_number_is_rejected() {
    let (case, details) = create_routed_case();
    let ctx = TransitionContext {
        precharge_no_taken: true,
        ..TransitionContext::new(today())
    };

    let result = apply(&case, &details, submit_notice(None), &investigator(), &ctx);

    match result.unwrap_err() {
        CoreError::InvalidInput { field, message } => {
            assert_eq!(field, "precharge_no");
            assert!(message.contains("already in use"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_status_is_always_a_workflow_stage_after_transitions() {
    let case = create_test_case();
    let routed = apply(
        &case,
        &CaseDetails::default(),
        crate::tests::helpers::route_to(INVESTIGATOR),
        &creator(),
        &crate::tests::helpers::routing_context(),
    )
    .unwrap();
    let details = CaseDetails {
        initial_evaluation_report: routed.initial_evaluation_report.map(|e| e.record),
        pre_charge_investigation: routed.pre_charge_investigation.map(|e| e.record),
    };
    let noticed = apply(
        &routed.case,
        &details,
        submit_notice(None),
        &investigator(),
        &TransitionContext::new(today()),
    )
    .unwrap();

    for status in [case.status, routed.case.status, noticed.case.status] {
        assert!(iec_tracker_domain::stage_by_key(status.as_str()).is_some());
    }
}

#[test]
fn test_blank_notice_remarks_are_stored_as_empty_text() {
    let (case, details) = create_routed_case();
    let command = Command::SubmitNoticePci {
        precharge_no: String::from("PCI-NCR-2025-002"),
        respondent_received_on: None,
        remarks: String::from("\t "),
    };

    let result = apply(
        &case,
        &details,
        command,
        &investigator(),
        &TransitionContext::new(today()),
    )
    .unwrap();

    assert_eq!(
        result.pre_charge_investigation.unwrap().record.notice_pci_remarks,
        ""
    );
}
