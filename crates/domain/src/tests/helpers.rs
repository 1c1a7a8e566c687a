// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Case, CaseFields, CaseId, CaseReference, Location, ReferencePrefix, Role, Stage, User, UserId,
};
use time::Date;
use time::macros::date;

pub fn create_test_user(id: i64, display_name: &str, role: Role, location: Location) -> User {
    User {
        user_id: UserId(id),
        username: format!("user{id}"),
        display_name: String::from(display_name),
        designation: String::from("Investigator"),
        role: Some(role),
        location: Some(location),
        is_active: true,
    }
}

pub fn create_test_fields(date_received: Date) -> CaseFields {
    CaseFields {
        date_received,
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::new(),
    }
}

pub fn create_test_case(status: Stage, due_date: Option<Date>) -> Case {
    let prefix: ReferencePrefix = ReferencePrefix::new(Some(Location::Ncr), 2025);
    Case {
        case_id: CaseId(1),
        reference: CaseReference::new(&prefix, 1),
        date_created: date!(2025 - 01 - 10),
        date_received: date!(2025 - 01 - 09),
        complainant: String::from("Juan Dela Cruz"),
        respondent: String::from("Pedro Santos"),
        charge: String::from("Grave Misconduct"),
        remarks: String::new(),
        due_date,
        status,
        created_by: Some(UserId(1)),
        assigned_to: Some(UserId(1)),
    }
}
