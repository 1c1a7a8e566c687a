// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod case_tests;
mod transition_tests;

use crate::{NewUserData, SqlitePersistence};
use iec_tracker::{NewCase, prepare_new_case};
use iec_tracker_domain::{Case, CaseFields, Location, Role, User, UserId};
use time::Date;
use time::macros::date;

pub fn today() -> Date {
    date!(2025 - 01 - 10)
}

pub fn create_test_user_data(username: &str, role: Role, location: Location) -> NewUserData {
    NewUserData {
        username: String::from(username),
        display_name: format!("{username} display"),
        designation: String::from("Investigator"),
        role: Some(role),
        location: Some(location),
        is_active: true,
    }
}

pub fn create_user(
    persistence: &mut SqlitePersistence,
    username: &str,
    role: Role,
    location: Location,
) -> User {
    let user_id: UserId = persistence
        .create_user(&create_test_user_data(username, role, location))
        .unwrap();
    persistence.get_user(user_id).unwrap().unwrap()
}

pub fn create_test_fields() -> CaseFields {
    CaseFields {
        date_received: date!(2025 - 01 - 09),
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::new(),
    }
}

pub fn create_case(persistence: &mut SqlitePersistence, creator: &User) -> Case {
    let new_case: NewCase = prepare_new_case(&create_test_fields(), creator, today()).unwrap();
    persistence.create_case(&new_case).unwrap()
}
