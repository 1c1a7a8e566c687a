// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker_domain::{CaseDetails, CaseId, InitialEvaluationReport, PreChargeInvestigation};

use crate::data_models::{InitialEvaluationReportRow, PreChargeInvestigationRow};
use crate::diesel_schema::{initial_evaluation_reports, pre_charge_investigations};
use crate::error::PersistenceError;

/// Retrieves the initial evaluation report of a case.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
pub fn get_initial_evaluation_report(
    conn: &mut SqliteConnection,
    case_id: CaseId,
) -> Result<Option<InitialEvaluationReport>, PersistenceError> {
    initial_evaluation_reports::table
        .filter(initial_evaluation_reports::case_id.eq(case_id.value()))
        .select(InitialEvaluationReportRow::as_select())
        .first::<InitialEvaluationReportRow>(conn)
        .optional()?
        .map(InitialEvaluationReport::try_from)
        .transpose()
}

/// Retrieves the pre-charge investigation record of a case.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
pub fn get_pre_charge_investigation(
    conn: &mut SqliteConnection,
    case_id: CaseId,
) -> Result<Option<PreChargeInvestigation>, PersistenceError> {
    pre_charge_investigations::table
        .filter(pre_charge_investigations::case_id.eq(case_id.value()))
        .select(PreChargeInvestigationRow::as_select())
        .first::<PreChargeInvestigationRow>(conn)
        .optional()?
        .map(PreChargeInvestigation::try_from)
        .transpose()
}

/// Loads every detail record of a case.
///
/// # Errors
///
/// Returns an error if a query fails or a stored row is invalid.
pub fn get_case_details(
    conn: &mut SqliteConnection,
    case_id: CaseId,
) -> Result<CaseDetails, PersistenceError> {
    Ok(CaseDetails {
        initial_evaluation_report: get_initial_evaluation_report(conn, case_id)?,
        pre_charge_investigation: get_pre_charge_investigation(conn, case_id)?,
    })
}

/// Returns whether another case already holds `precharge_no`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_precharge_no_taken(
    conn: &mut SqliteConnection,
    precharge_no: &str,
    excluding: CaseId,
) -> Result<bool, PersistenceError> {
    let count: i64 = pre_charge_investigations::table
        .filter(pre_charge_investigations::precharge_no.eq(precharge_no.trim()))
        .filter(pre_charge_investigations::case_id.ne(excluding.value()))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
