// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_fields;
use crate::{CaseFields, DomainError, validate_case_fields, validate_precharge_no};
use time::macros::date;

#[test]
fn test_validate_case_fields_accepts_valid_fields() {
    let fields: CaseFields = create_test_fields(date!(2025 - 01 - 10));
    assert!(validate_case_fields(&fields).is_ok());
}

#[test]
fn test_validate_case_fields_rejects_blank_respondent() {
    let mut fields: CaseFields = create_test_fields(date!(2025 - 01 - 10));
    fields.respondent = String::from("   ");

    match validate_case_fields(&fields).unwrap_err() {
        DomainError::InvalidCaseField { field, .. } => assert_eq!(field, "respondent"),
        other => panic!("Expected InvalidCaseField, got {other:?}"),
    }
}

#[test]
fn test_validate_case_fields_rejects_long_charge() {
    let mut fields: CaseFields = create_test_fields(date!(2025 - 01 - 10));
    fields.charge = "x".repeat(101);

    match validate_case_fields(&fields).unwrap_err() {
        DomainError::InvalidCaseField { field, reason } => {
            assert_eq!(field, "charge");
            assert!(reason.contains("100"));
        }
        other => panic!("Expected InvalidCaseField, got {other:?}"),
    }
}

#[test]
fn test_remarks_are_optional() {
    let mut fields: CaseFields = create_test_fields(date!(2025 - 01 - 10));
    fields.remarks = "r".repeat(500);
    assert!(validate_case_fields(&fields).is_ok());
}

#[test]
fn test_validate_precharge_no() {
    assert!(validate_precharge_no("PCI-2025-001").is_ok());
    assert!(matches!(
        validate_precharge_no("  "),
        Err(DomainError::InvalidPrechargeNumber(_))
    ));
    assert!(validate_precharge_no(&"9".repeat(101)).is_err());
}

#[test]
fn test_trimmed_fields() {
    let mut fields: CaseFields = create_test_fields(date!(2025 - 01 - 10));
    fields.complainant = String::from("  Maria Clara  ");
    assert_eq!(fields.trimmed().complainant, "Maria Clara");
}
