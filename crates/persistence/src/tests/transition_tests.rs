// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_case, create_user, today};
use crate::{PersistenceError, SqlitePersistence};
use iec_tracker::{Command, TransitionContext, TransitionResult, apply};
use iec_tracker_domain::{Case, Location, Role, Stage, User};
use time::macros::date;

fn route(
    persistence: &mut SqlitePersistence,
    case: &Case,
    creator: &User,
    assignee: &User,
) -> TransitionResult {
    let details = persistence.get_case_details(case.case_id).unwrap();
    let ctx = TransitionContext {
        today: today(),
        eligible_assignees: vec![assignee.user_id],
        precharge_no_taken: false,
    };
    apply(
        case,
        &details,
        Command::AcknowledgeAndRoute {
            assign_to: assignee.user_id,
            director_approval_date: None,
            submission_remarks: String::from("Endorsed"),
        },
        creator,
        &ctx,
    )
    .unwrap()
}

fn notice(
    persistence: &mut SqlitePersistence,
    case: &Case,
    actor: &User,
    precharge_no: &str,
) -> TransitionResult {
    let details = persistence.get_case_details(case.case_id).unwrap();
    apply(
        case,
        &details,
        Command::SubmitNoticePci {
            precharge_no: String::from(precharge_no),
            respondent_received_on: Some(date!(2025 - 01 - 11)),
            remarks: String::new(),
        },
        actor,
        &TransitionContext::new(today()),
    )
    .unwrap()
}

#[test]
fn test_routing_persists_case_and_detail_records() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let assignee = create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    let result = route(&mut persistence, &case, &creator, &assignee);
    let stored = persistence.persist_transition(&result).unwrap();

    assert_eq!(stored.status, Stage::NoticePci);
    let reloaded = persistence.get_case(case.case_id).unwrap().unwrap();
    assert_eq!(reloaded, stored);
    assert_eq!(reloaded.assigned_to, Some(assignee.user_id));
    assert_eq!(reloaded.due_date, Some(date!(2025 - 01 - 12)));

    let details = persistence.get_case_details(case.case_id).unwrap();
    let report = details.initial_evaluation_report.unwrap();
    assert_eq!(report.submitted_by, Some(creator.user_id));
    assert_eq!(report.remarks, "Endorsed");
    assert!(details.pre_charge_investigation.is_some());
}

#[test]
fn test_notice_persists_pre_charge_fields() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let assignee = create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);
    let routed = route(&mut persistence, &case, &creator, &assignee);
    let routed_case = persistence.persist_transition(&routed).unwrap();

    let result = notice(&mut persistence, &routed_case, &assignee, "PCI-001");
    let stored = persistence.persist_transition(&result).unwrap();

    assert_eq!(stored.status, Stage::CommentCounterAffidavit);
    assert_eq!(stored.due_date, Some(date!(2025 - 01 - 14)));
    let pci = persistence
        .get_pre_charge_investigation(case.case_id)
        .unwrap()
        .unwrap();
    assert_eq!(pci.precharge_no.as_deref(), Some("PCI-001"));
    assert_eq!(pci.notice_pci_submitted_by, Some(assignee.user_id));
    assert_eq!(pci.notice_pci_respondent_received_on, Some(date!(2025 - 01 - 11)));
    assert!(!persistence.is_precharge_no_taken("PCI-001", case.case_id).unwrap());
}

#[test]
fn test_duplicate_precharge_number_rolls_back_transition() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let assignee = create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);

    let mut routed_cases: Vec<Case> = Vec::new();
    for _ in 0..2 {
        let case = create_case(&mut persistence, &creator);
        let routed = route(&mut persistence, &case, &creator, &assignee);
        routed_cases.push(persistence.persist_transition(&routed).unwrap());
    }

    let first = notice(&mut persistence, &routed_cases[0], &assignee, "PCI-001");
    persistence.persist_transition(&first).unwrap();
    assert!(
        persistence
            .is_precharge_no_taken("PCI-001", routed_cases[1].case_id)
            .unwrap()
    );

    // The engine would normally be told the number is taken; bypass that to
    // exercise the unique index.
    let second = notice(&mut persistence, &routed_cases[1], &assignee, "PCI-001");
    let result = persistence.persist_transition(&second);

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
    let unchanged = persistence
        .get_case(routed_cases[1].case_id)
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, Stage::NoticePci);
}

#[test]
fn test_stale_transition_is_rejected() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let assignee = create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    let result = route(&mut persistence, &case, &creator, &assignee);
    persistence.persist_transition(&result).unwrap();

    let replay = persistence.persist_transition(&result);
    match replay.unwrap_err() {
        PersistenceError::NotFound(_) => {}
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_concurrent_routing_keeps_first_result() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let first_assignee =
        create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);
    let second_assignee =
        create_user(&mut persistence, "cora", Role::PciInvestigator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    // Both results are computed from the same loaded case.
    let first = route(&mut persistence, &case, &creator, &first_assignee);
    let second = route(&mut persistence, &case, &creator, &second_assignee);
    assert!(second.pre_charge_investigation.as_ref().unwrap().created);

    persistence.persist_transition(&first).unwrap();
    let result = persistence.persist_transition(&second);

    match result.unwrap_err() {
        PersistenceError::NotFound(_) => {}
        other => panic!("Expected NotFound, got {other:?}"),
    }
    let stored = persistence.get_case(case.case_id).unwrap().unwrap();
    assert_eq!(stored.status, Stage::NoticePci);
    assert_eq!(stored.assigned_to, Some(first_assignee.user_id));
    assert!(
        persistence
            .get_pre_charge_investigation(case.case_id)
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_replayed_notice_is_rejected_without_changes() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let assignee = create_user(&mut persistence, "bob", Role::PciInvestigator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    let routed = route(&mut persistence, &case, &creator, &assignee);
    let routed_case = persistence.persist_transition(&routed).unwrap();
    let submitted = notice(&mut persistence, &routed_case, &assignee, "PCI-001");
    persistence.persist_transition(&submitted).unwrap();

    let replay = persistence.persist_transition(&submitted);

    match replay.unwrap_err() {
        PersistenceError::NotFound(_) => {}
        other => panic!("Expected NotFound, got {other:?}"),
    }
    let stored = persistence.get_case(case.case_id).unwrap().unwrap();
    assert_eq!(stored.status, Stage::CommentCounterAffidavit);
}
