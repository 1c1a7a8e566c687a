// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use iec_tracker_domain::{Location, Role};
use iec_tracker_persistence::{NewUserData, SqlitePersistence};
use time::Date;
use time::macros::date;

use crate::{
    AcknowledgeAndRouteRequest, CreateCaseRequest, SubmitNoticePciRequest, WriteCaseResponse,
    create_case,
};

/// The users every test starts with.
pub struct TestUsers {
    /// Initial evaluator at NCR; creates cases.
    pub creator: i64,
    /// PCI investigator at NCR.
    pub investigator: i64,
    /// A second IER investigator at NCR.
    pub colleague: i64,
    /// Director at NCR; sees every case.
    pub director: i64,
    /// PCI investigator at Region I.
    pub remote: i64,
    /// Deactivated PCI investigator at NCR.
    pub inactive: i64,
}

pub fn today() -> Date {
    date!(2025 - 01 - 10)
}

pub fn create_user(
    persistence: &mut SqlitePersistence,
    username: &str,
    display_name: &str,
    role: Role,
    location: Location,
    is_active: bool,
) -> i64 {
    persistence
        .create_user(&NewUserData {
            username: username.to_string(),
            display_name: display_name.to_string(),
            designation: String::from("Investigator"),
            role: Some(role),
            location: Some(location),
            is_active,
        })
        .unwrap()
        .value()
}

pub fn setup() -> (SqlitePersistence, TestUsers) {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let users: TestUsers = TestUsers {
        creator: create_user(
            &mut persistence,
            "creator",
            "Carla Reyes",
            Role::InitialEvaluator,
            Location::Ncr,
            true,
        ),
        investigator: create_user(
            &mut persistence,
            "investigator",
            "Ben Aquino",
            Role::PciInvestigator,
            Location::Ncr,
            true,
        ),
        colleague: create_user(
            &mut persistence,
            "colleague",
            "Ana Lim",
            Role::InitialEvaluator,
            Location::Ncr,
            true,
        ),
        director: create_user(
            &mut persistence,
            "director",
            "Dina Cruz",
            Role::Director,
            Location::Ncr,
            true,
        ),
        remote: create_user(
            &mut persistence,
            "remote",
            "Rey Ilagan",
            Role::PciInvestigator,
            Location::R1,
            true,
        ),
        inactive: create_user(
            &mut persistence,
            "inactive",
            "Ivan Tan",
            Role::PciInvestigator,
            Location::Ncr,
            false,
        ),
    };
    (persistence, users)
}

pub fn create_case_request(actor_id: i64) -> CreateCaseRequest {
    CreateCaseRequest {
        actor_id,
        date_received: String::from("2025-01-09"),
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::new(),
    }
}

pub fn create_test_case(persistence: &mut SqlitePersistence, actor_id: i64) -> i64 {
    let response: WriteCaseResponse =
        create_case(persistence, create_case_request(actor_id), today()).unwrap();
    response.case.case_id
}

pub fn route_request(actor_id: i64, assign_to: i64) -> AcknowledgeAndRouteRequest {
    AcknowledgeAndRouteRequest {
        actor_id,
        assign_to,
        director_approval_date: Some(String::from("2025-01-10")),
        submission_remarks: String::from("Endorsed for PCI"),
    }
}

pub fn notice_request(actor_id: i64, precharge_no: &str) -> SubmitNoticePciRequest {
    SubmitNoticePciRequest {
        actor_id,
        precharge_no: precharge_no.to_string(),
        respondent_received_on: None,
        remarks: String::new(),
    }
}
