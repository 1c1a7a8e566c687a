// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_case, create_test_fields, create_user, today};
use crate::{PersistenceError, SqlitePersistence};
use iec_tracker::prepare_new_case;
use iec_tracker_domain::{CaseFields, CaseId, Location, ReferencePrefix, Role, Stage};
use time::macros::date;

#[test]
fn test_create_case_stores_initial_state() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);

    let case = create_case(&mut persistence, &creator);

    assert_eq!(case.reference.to_string(), "IEC-NCR-2025-0001");
    assert_eq!(case.status, Stage::InitialEvaluation);
    assert_eq!(case.created_by, Some(creator.user_id));
    assert_eq!(case.assigned_to, Some(creator.user_id));
    assert_eq!(case.date_created, today());
    assert_eq!(case.due_date, Some(date!(2025 - 01 - 10)));
    assert_eq!(persistence.get_case(case.case_id).unwrap(), Some(case));
}

#[test]
fn test_references_increment_per_location_and_year() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let ncr = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let car = create_user(&mut persistence, "bob", Role::InitialEvaluator, Location::Car);

    let first = create_case(&mut persistence, &ncr);
    let second = create_case(&mut persistence, &ncr);
    let other = create_case(&mut persistence, &car);

    assert_eq!(first.reference.to_string(), "IEC-NCR-2025-0001");
    assert_eq!(second.reference.to_string(), "IEC-NCR-2025-0002");
    assert_eq!(other.reference.to_string(), "IEC-CAR-2025-0001");

    let last = persistence
        .last_reference_with_prefix(&ReferencePrefix::new(Some(Location::Ncr), 2025))
        .unwrap();
    assert_eq!(last.as_deref(), Some("IEC-NCR-2025-0002"));
    assert!(
        persistence
            .last_reference_with_prefix(&ReferencePrefix::new(Some(Location::Ncr), 2024))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_creator_without_location_uses_fallback_prefix() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let mut creator = create_user(&mut persistence, "alice", Role::Admin, Location::Co);
    creator.location = None;

    let case = create_case(&mut persistence, &creator);

    assert_eq!(case.reference.to_string(), "IEC-NOLOC-2025-0001");
}

#[test]
fn test_new_year_restarts_sequence() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    create_case(&mut persistence, &creator);

    let new_case =
        prepare_new_case(&create_test_fields(), &creator, date!(2026 - 01 - 02)).unwrap();
    let case = persistence.create_case(&new_case).unwrap();

    assert_eq!(case.reference.to_string(), "IEC-NCR-2026-0001");
}

#[test]
fn test_update_case_fields_keeps_workflow_state() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    let fields = CaseFields {
        charge: String::from("Simple Neglect of Duty"),
        remarks: String::from("Amended"),
        ..create_test_fields()
    };
    persistence.update_case_fields(case.case_id, &fields).unwrap();

    let stored = persistence.get_case(case.case_id).unwrap().unwrap();
    assert_eq!(stored.charge, "Simple Neglect of Duty");
    assert_eq!(stored.remarks, "Amended");
    assert_eq!(stored.status, case.status);
    assert_eq!(stored.due_date, case.due_date);
    assert_eq!(stored.reference, case.reference);

    let missing = persistence.update_case_fields(CaseId(404), &fields);
    assert!(matches!(missing, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_case_cascades_to_detail_records() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);
    persistence.ensure_pre_charge_investigation(case.case_id).unwrap();

    persistence.delete_case(case.case_id).unwrap();

    assert!(persistence.get_case(case.case_id).unwrap().is_none());
    assert!(
        persistence
            .get_pre_charge_investigation(case.case_id)
            .unwrap()
            .is_none()
    );
    assert!(matches!(
        persistence.delete_case(case.case_id),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_dashboard_filters() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let alice = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let bob = create_user(&mut persistence, "bob", Role::InitialEvaluator, Location::Ncr);

    let first = create_case(&mut persistence, &alice);
    let second = create_case(&mut persistence, &bob);
    let third = create_case(&mut persistence, &alice);

    let all: Vec<CaseId> = persistence
        .list_cases()
        .unwrap()
        .iter()
        .map(|case| case.case_id)
        .collect();
    assert_eq!(all, vec![third.case_id, second.case_id, first.case_id]);

    let mine: Vec<CaseId> = persistence
        .list_cases_for_user(alice.user_id)
        .unwrap()
        .iter()
        .map(|case| case.case_id)
        .collect();
    assert_eq!(mine, vec![third.case_id, first.case_id]);

    assert_eq!(
        persistence
            .list_cases_by_status(Stage::InitialEvaluation)
            .unwrap()
            .len(),
        3
    );
    assert!(
        persistence
            .list_cases_by_status(Stage::Resolved)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_ensure_pre_charge_investigation_is_idempotent() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let creator = create_user(&mut persistence, "alice", Role::InitialEvaluator, Location::Ncr);
    let case = create_case(&mut persistence, &creator);

    let first = persistence.ensure_pre_charge_investigation(case.case_id).unwrap();
    let second = persistence.ensure_pre_charge_investigation(case.case_id).unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.record, second.record);
}

#[test]
fn test_ensure_pre_charge_investigation_requires_case() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let result = persistence.ensure_pre_charge_investigation(CaseId(77));
    assert!(result.is_err());
}
