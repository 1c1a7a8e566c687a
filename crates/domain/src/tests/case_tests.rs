// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_case, create_test_fields};
use crate::{Case, CaseFields, Ensured, Stage, UserId};
use time::macros::date;

#[test]
fn test_days_remaining_and_overdue() {
    let case: Case = create_test_case(Stage::NoticePci, Some(date!(2025 - 01 - 12)));

    assert_eq!(case.days_remaining(date!(2025 - 01 - 10)), Some(2));
    assert_eq!(case.overdue_days(date!(2025 - 01 - 10)), None);

    assert_eq!(case.days_remaining(date!(2025 - 01 - 12)), Some(0));
    assert_eq!(case.overdue_days(date!(2025 - 01 - 12)), None);

    assert_eq!(case.days_remaining(date!(2025 - 01 - 15)), Some(-3));
    assert_eq!(case.overdue_days(date!(2025 - 01 - 15)), Some(3));
}

#[test]
fn test_no_due_date_has_no_deadline() {
    let case: Case = create_test_case(Stage::NoticePci, None);
    assert_eq!(case.days_remaining(date!(2025 - 01 - 10)), None);
    assert_eq!(case.overdue_days(date!(2025 - 01 - 10)), None);
}

#[test]
fn test_with_fields_leaves_workflow_state_untouched() {
    let case: Case = create_test_case(Stage::NoticePci, Some(date!(2025 - 01 - 12)));
    let mut fields: CaseFields = create_test_fields(date!(2025 - 01 - 05));
    fields.charge = String::from("Simple Neglect of Duty");

    let edited: Case = case.with_fields(&fields);

    assert_eq!(edited.charge, "Simple Neglect of Duty");
    assert_eq!(edited.date_received, date!(2025 - 01 - 05));
    assert_eq!(edited.reference, case.reference);
    assert_eq!(edited.status, case.status);
    assert_eq!(edited.due_date, case.due_date);
    assert_eq!(edited.created_by, case.created_by);
    assert_eq!(edited.assigned_to, case.assigned_to);
}

#[test]
fn test_ownership_predicates() {
    let mut case: Case = create_test_case(Stage::InitialEvaluation, None);
    case.assigned_to = Some(UserId(2));

    assert!(case.is_created_by(UserId(1)));
    assert!(!case.is_created_by(UserId(2)));
    assert!(case.is_assigned_to(UserId(2)));

    case.created_by = None;
    assert!(!case.is_created_by(UserId(1)));
}

#[test]
fn test_ensured_reports_creation() {
    let created: Ensured<u32> = Ensured::from_existing_or(None, || 5);
    assert!(created.created);
    assert_eq!(created.record, 5);

    let existing: Ensured<u32> = Ensured::from_existing_or(Some(3), || 5);
    assert!(!existing.created);
    assert_eq!(existing.record, 3);
}
