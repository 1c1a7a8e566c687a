// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker::NewCase;
use iec_tracker_domain::{Case, CaseFields, CaseId, CaseReference, next_reference};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::date_text;
use crate::diesel_schema::iec_records;
use crate::error::PersistenceError;
use crate::queries::cases::{get_case, last_reference_with_prefix};

/// Stores a new case, generating its reference.
///
/// The reference is computed from the greatest existing reference with the
/// same prefix inside the insert transaction. The unique index on
/// `reference` rejects a concurrent duplicate; there is no retry.
///
/// # Errors
///
/// Returns an error if the insert fails, including
/// `PersistenceError::UniqueViolation` on a reference collision.
pub fn create_case(conn: &mut SqliteConnection, new_case: &NewCase) -> Result<Case, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let last: Option<String> = last_reference_with_prefix(conn, &new_case.reference_prefix)?;
        let reference: CaseReference = next_reference(&new_case.reference_prefix, last.as_deref());

        diesel::insert_into(iec_records::table)
            .values((
                iec_records::reference.eq(reference.to_string()),
                iec_records::date_created.eq(date_text(new_case.date_created)?),
                iec_records::date_received.eq(date_text(new_case.fields.date_received)?),
                iec_records::complainant.eq(&new_case.fields.complainant),
                iec_records::respondent.eq(&new_case.fields.respondent),
                iec_records::charge.eq(&new_case.fields.charge),
                iec_records::remarks.eq(&new_case.fields.remarks),
                iec_records::due_date.eq(Some(date_text(new_case.due_date)?)),
                iec_records::status.eq(new_case.status.as_str()),
                iec_records::created_by.eq(Some(new_case.created_by.value())),
                iec_records::assigned_to.eq(Some(new_case.assigned_to.value())),
            ))
            .execute(conn)?;

        let case_id: CaseId = CaseId(conn.get_last_insert_rowid()?);
        info!(case_id = case_id.value(), %reference, "Created case");

        get_case(conn, case_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Case {case_id} after insert")))
    })
}

/// Replaces the descriptive fields of a case.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the case does not exist.
pub fn update_case_fields(
    conn: &mut SqliteConnection,
    case_id: CaseId,
    fields: &CaseFields,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(iec_records::table.filter(iec_records::case_id.eq(case_id.value())))
            .set((
                iec_records::date_received.eq(date_text(fields.date_received)?),
                iec_records::complainant.eq(&fields.complainant),
                iec_records::respondent.eq(&fields.respondent),
                iec_records::charge.eq(&fields.charge),
                iec_records::remarks.eq(&fields.remarks),
            ))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Case {case_id}")));
    }

    info!(case_id = case_id.value(), "Updated case fields");
    Ok(())
}

/// Deletes a case and, by cascade, its detail records.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the case does not exist.
pub fn delete_case(conn: &mut SqliteConnection, case_id: CaseId) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(iec_records::table.filter(iec_records::case_id.eq(case_id.value())))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Case {case_id}")));
    }

    info!(case_id = case_id.value(), "Deleted case");
    Ok(())
}
