// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and the conversions between rows and domain values.
//!
//! Dates are stored as `YYYY-MM-DD` text, stages by key and roles and
//! locations by code. A stored value that no longer parses is reported as
//! `PersistenceError::InvalidStoredValue` rather than silently dropped.

use diesel::prelude::*;
use iec_tracker_domain::{
    Case, CaseId, CaseReference, InitialEvaluationReport, Location, PreChargeInvestigation, Role,
    Stage, User, UserId, format_date, parse_date,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::diesel_schema::{iec_records, initial_evaluation_reports, pre_charge_investigations, users};
use crate::error::PersistenceError;

/// A user record supplied by the identity system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserData {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub designation: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub is_active: i32,
}

impl TryFrom<UserRow> for User {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId(row.user_id),
            username: row.username,
            display_name: row.display_name,
            designation: row.designation,
            role: row.role.as_deref().map(str::parse::<Role>).transpose()?,
            location: row
                .location
                .as_deref()
                .map(str::parse::<Location>)
                .transpose()?,
            is_active: row.is_active != 0,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = iec_records)]
pub struct CaseRow {
    pub case_id: i64,
    pub reference: String,
    pub date_created: String,
    pub date_received: String,
    pub complainant: String,
    pub respondent: String,
    pub charge: String,
    pub remarks: String,
    pub due_date: Option<String>,
    pub status: String,
    pub created_by: Option<i64>,
    pub assigned_to: Option<i64>,
}

impl TryFrom<CaseRow> for Case {
    type Error = PersistenceError;

    fn try_from(row: CaseRow) -> Result<Self, Self::Error> {
        Ok(Self {
            case_id: CaseId(row.case_id),
            reference: row.reference.parse::<CaseReference>()?,
            date_created: parse_date(&row.date_created)?,
            date_received: parse_date(&row.date_received)?,
            complainant: row.complainant,
            respondent: row.respondent,
            charge: row.charge,
            remarks: row.remarks,
            due_date: optional_date(row.due_date.as_deref())?,
            status: row.status.parse::<Stage>()?,
            created_by: row.created_by.map(UserId),
            assigned_to: row.assigned_to.map(UserId),
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = initial_evaluation_reports)]
pub struct InitialEvaluationReportRow {
    pub case_id: i64,
    pub submitted_by: Option<i64>,
    pub submitted_on: String,
    pub director_approval_date: Option<String>,
    pub remarks: String,
}

impl TryFrom<InitialEvaluationReportRow> for InitialEvaluationReport {
    type Error = PersistenceError;

    fn try_from(row: InitialEvaluationReportRow) -> Result<Self, Self::Error> {
        Ok(Self {
            case_id: CaseId(row.case_id),
            submitted_by: row.submitted_by.map(UserId),
            submitted_on: parse_date(&row.submitted_on)?,
            director_approval_date: optional_date(row.director_approval_date.as_deref())?,
            remarks: row.remarks,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = pre_charge_investigations)]
pub struct PreChargeInvestigationRow {
    pub case_id: i64,
    pub precharge_no: Option<String>,
    pub notice_pci_submitted_by: Option<i64>,
    pub notice_pci_submitted_on: Option<String>,
    pub notice_pci_respondent_received_on: Option<String>,
    pub notice_pci_remarks: String,
    pub comment_counter_affidavit_received_on: Option<String>,
    pub comment_counter_affidavit_remarks: String,
    pub pci_report_submitted_by: Option<i64>,
    pub pci_report_submitted_on: Option<String>,
    pub pci_report_remarks: String,
}

impl TryFrom<PreChargeInvestigationRow> for PreChargeInvestigation {
    type Error = PersistenceError;

    fn try_from(row: PreChargeInvestigationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            case_id: CaseId(row.case_id),
            precharge_no: row.precharge_no,
            notice_pci_submitted_by: row.notice_pci_submitted_by.map(UserId),
            notice_pci_submitted_on: optional_date(row.notice_pci_submitted_on.as_deref())?,
            notice_pci_respondent_received_on: optional_date(
                row.notice_pci_respondent_received_on.as_deref(),
            )?,
            notice_pci_remarks: row.notice_pci_remarks,
            comment_counter_affidavit_received_on: optional_date(
                row.comment_counter_affidavit_received_on.as_deref(),
            )?,
            comment_counter_affidavit_remarks: row.comment_counter_affidavit_remarks,
            pci_report_submitted_by: row.pci_report_submitted_by.map(UserId),
            pci_report_submitted_on: optional_date(row.pci_report_submitted_on.as_deref())?,
            pci_report_remarks: row.pci_report_remarks,
        })
    }
}

/// Formats a date for storage.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn date_text(date: Date) -> Result<String, PersistenceError> {
    Ok(format_date(date)?)
}

/// Formats an optional date for storage.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn optional_date_text(date: Option<Date>) -> Result<Option<String>, PersistenceError> {
    date.map(date_text).transpose()
}

fn optional_date(value: Option<&str>) -> Result<Option<Date>, PersistenceError> {
    Ok(value.map(parse_date).transpose()?)
}
