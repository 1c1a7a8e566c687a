// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionContext};
use iec_tracker_domain::{
    Case, CaseDetails, CaseFields, CaseId, CaseReference, Location, PreChargeInvestigation,
    ReferencePrefix, Role, Stage, User, UserId,
};
use time::Date;
use time::macros::date;

pub const CREATOR: UserId = UserId(1);
pub const INVESTIGATOR: UserId = UserId(2);
pub const OUTSIDER: UserId = UserId(3);

pub fn today() -> Date {
    date!(2025 - 01 - 10)
}

pub fn create_test_user(id: UserId, role: Role) -> User {
    User {
        user_id: id,
        username: format!("user{}", id.value()),
        display_name: format!("User {}", id.value()),
        designation: String::from("Investigator"),
        role: Some(role),
        location: Some(Location::Ncr),
        is_active: true,
    }
}

pub fn creator() -> User {
    create_test_user(CREATOR, Role::InitialEvaluator)
}

pub fn investigator() -> User {
    create_test_user(INVESTIGATOR, Role::PciInvestigator)
}

pub fn outsider() -> User {
    create_test_user(OUTSIDER, Role::PciInvestigator)
}

pub fn create_test_fields() -> CaseFields {
    CaseFields {
        date_received: date!(2025 - 01 - 09),
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::from("Walk-in complaint"),
    }
}

/// A freshly created case, owned by `CREATOR`.
pub fn create_test_case() -> Case {
    let prefix: ReferencePrefix = ReferencePrefix::new(Some(Location::Ncr), 2025);
    Case {
        case_id: CaseId(10),
        reference: CaseReference::new(&prefix, 1),
        date_created: date!(2025 - 01 - 09),
        date_received: date!(2025 - 01 - 09),
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::new(),
        due_date: Some(date!(2025 - 01 - 10)),
        status: Stage::InitialEvaluation,
        created_by: Some(CREATOR),
        assigned_to: Some(CREATOR),
    }
}

/// A case routed to `INVESTIGATOR`, with an empty pre-charge record.
pub fn create_routed_case() -> (Case, CaseDetails) {
    let case: Case = Case {
        status: Stage::NoticePci,
        assigned_to: Some(INVESTIGATOR),
        due_date: Some(date!(2025 - 01 - 12)),
        ..create_test_case()
    };
    let details: CaseDetails = CaseDetails {
        initial_evaluation_report: None,
        pre_charge_investigation: Some(PreChargeInvestigation::empty(case.case_id)),
    };
    (case, details)
}

pub fn routing_context() -> TransitionContext {
    TransitionContext {
        today: today(),
        eligible_assignees: vec![INVESTIGATOR, OUTSIDER],
        precharge_no_taken: false,
    }
}

pub fn route_to(assign_to: UserId) -> Command {
    Command::AcknowledgeAndRoute {
        assign_to,
        director_approval_date: Some(date!(2025 - 01 - 09)),
        submission_remarks: String::from("  Evaluated and endorsed  "),
    }
}

pub fn submit_notice(respondent_received_on: Option<Date>) -> Command {
    Command::SubmitNoticePci {
        precharge_no: String::from(" PCI-NCR-2025-001 "),
        respondent_received_on,
        remarks: String::from("Served personally"),
    }
}
