// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker_domain::{Case, CaseId, ReferencePrefix, Stage, UserId};
use tracing::debug;

use crate::data_models::CaseRow;
use crate::diesel_schema::iec_records;
use crate::error::PersistenceError;

/// Retrieves a case by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
/// Returns `Ok(None)` if the case is not found.
pub fn get_case(conn: &mut SqliteConnection, case_id: CaseId) -> Result<Option<Case>, PersistenceError> {
    debug!(case_id = case_id.value(), "Looking up case");

    iec_records::table
        .filter(iec_records::case_id.eq(case_id.value()))
        .select(CaseRow::as_select())
        .first::<CaseRow>(conn)
        .optional()?
        .map(Case::try_from)
        .transpose()
}

/// Lists every case, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_cases(conn: &mut SqliteConnection) -> Result<Vec<Case>, PersistenceError> {
    let rows: Vec<CaseRow> = iec_records::table
        .order(iec_records::case_id.desc())
        .select(CaseRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Case::try_from).collect()
}

/// Lists cases a user created or is assigned to, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_cases_for_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Vec<Case>, PersistenceError> {
    debug!(user_id = user_id.value(), "Listing cases created by or assigned to user");

    let rows: Vec<CaseRow> = iec_records::table
        .filter(
            iec_records::created_by
                .eq(user_id.value())
                .or(iec_records::assigned_to.eq(user_id.value())),
        )
        .order(iec_records::case_id.desc())
        .select(CaseRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Case::try_from).collect()
}

/// Lists cases in a stage, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_cases_by_status(
    conn: &mut SqliteConnection,
    status: Stage,
) -> Result<Vec<Case>, PersistenceError> {
    let rows: Vec<CaseRow> = iec_records::table
        .filter(iec_records::status.eq(status.as_str()))
        .order(iec_records::case_id.desc())
        .select(CaseRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Case::try_from).collect()
}

/// Returns the lexicographically greatest reference starting with `prefix`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn last_reference_with_prefix(
    conn: &mut SqliteConnection,
    prefix: &ReferencePrefix,
) -> Result<Option<String>, PersistenceError> {
    let prefix_text: String = prefix.as_prefix();

    let last: Option<String> = iec_records::table
        .filter(iec_records::reference.like(format!("{prefix_text}%")))
        .order(iec_records::reference.desc())
        .select(iec_records::reference)
        .first(conn)
        .optional()?;

    debug!(prefix = %prefix_text, last = ?last, "Looked up last reference");
    Ok(last)
}
