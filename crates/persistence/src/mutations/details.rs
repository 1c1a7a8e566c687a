// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker_domain::{CaseId, Ensured, InitialEvaluationReport, PreChargeInvestigation};
use tracing::{debug, warn};

use crate::data_models::{date_text, optional_date_text};
use crate::diesel_schema::{initial_evaluation_reports, pre_charge_investigations};
use crate::error::PersistenceError;
use crate::queries::details::get_pre_charge_investigation;

/// Returns the pre-charge investigation record of a case, creating an empty
/// one if none exists.
///
/// # Errors
///
/// Returns an error if a query or the insert fails, for example when the
/// case does not exist.
pub fn ensure_pre_charge_investigation(
    conn: &mut SqliteConnection,
    case_id: CaseId,
) -> Result<Ensured<PreChargeInvestigation>, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        if let Some(existing) = get_pre_charge_investigation(conn, case_id)? {
            return Ok(Ensured::existing(existing));
        }

        let record: PreChargeInvestigation = PreChargeInvestigation::empty(case_id);
        insert_pre_charge_investigation(conn, &record)?;
        debug!(case_id = case_id.value(), "Created pre-charge investigation record");
        Ok(Ensured::created(record))
    })
}

/// Inserts an initial evaluation report unless the case already has one.
///
/// Returns `true` if a row was written.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_initial_evaluation_report_if_absent(
    conn: &mut SqliteConnection,
    report: &InitialEvaluationReport,
) -> Result<bool, PersistenceError> {
    let inserted: usize = diesel::insert_or_ignore_into(initial_evaluation_reports::table)
        .values((
            initial_evaluation_reports::case_id.eq(report.case_id.value()),
            initial_evaluation_reports::submitted_by.eq(report.submitted_by.map(|id| id.value())),
            initial_evaluation_reports::submitted_on.eq(date_text(report.submitted_on)?),
            initial_evaluation_reports::director_approval_date
                .eq(optional_date_text(report.director_approval_date)?),
            initial_evaluation_reports::remarks.eq(&report.remarks),
        ))
        .execute(conn)?;

    if inserted == 0 {
        warn!(
            case_id = report.case_id.value(),
            "Initial evaluation report already exists, keeping the stored one"
        );
    }

    Ok(inserted > 0)
}

/// Inserts a pre-charge investigation record.
///
/// # Errors
///
/// Returns an error if the insert fails, including
/// `PersistenceError::UniqueViolation` on a duplicate case or number.
pub fn insert_pre_charge_investigation(
    conn: &mut SqliteConnection,
    record: &PreChargeInvestigation,
) -> Result<(), PersistenceError> {
    diesel::insert_into(pre_charge_investigations::table)
        .values((
            pre_charge_investigations::case_id.eq(record.case_id.value()),
            pre_charge_investigations::precharge_no.eq(record.precharge_no.as_deref()),
            pre_charge_investigations::notice_pci_submitted_by
                .eq(record.notice_pci_submitted_by.map(|id| id.value())),
            pre_charge_investigations::notice_pci_submitted_on
                .eq(optional_date_text(record.notice_pci_submitted_on)?),
            pre_charge_investigations::notice_pci_respondent_received_on
                .eq(optional_date_text(record.notice_pci_respondent_received_on)?),
            pre_charge_investigations::notice_pci_remarks.eq(&record.notice_pci_remarks),
            pre_charge_investigations::comment_counter_affidavit_received_on
                .eq(optional_date_text(record.comment_counter_affidavit_received_on)?),
            pre_charge_investigations::comment_counter_affidavit_remarks
                .eq(&record.comment_counter_affidavit_remarks),
            pre_charge_investigations::pci_report_submitted_by
                .eq(record.pci_report_submitted_by.map(|id| id.value())),
            pre_charge_investigations::pci_report_submitted_on
                .eq(optional_date_text(record.pci_report_submitted_on)?),
            pre_charge_investigations::pci_report_remarks.eq(&record.pci_report_remarks),
        ))
        .execute(conn)?;
    Ok(())
}

/// Overwrites a stored pre-charge investigation record.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the record does not exist, or
/// `PersistenceError::UniqueViolation` if the number is already in use.
pub fn update_pre_charge_investigation(
    conn: &mut SqliteConnection,
    record: &PreChargeInvestigation,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        pre_charge_investigations::table
            .filter(pre_charge_investigations::case_id.eq(record.case_id.value())),
    )
    .set((
        pre_charge_investigations::precharge_no.eq(record.precharge_no.as_deref()),
        pre_charge_investigations::notice_pci_submitted_by
            .eq(record.notice_pci_submitted_by.map(|id| id.value())),
        pre_charge_investigations::notice_pci_submitted_on
            .eq(optional_date_text(record.notice_pci_submitted_on)?),
        pre_charge_investigations::notice_pci_respondent_received_on
            .eq(optional_date_text(record.notice_pci_respondent_received_on)?),
        pre_charge_investigations::notice_pci_remarks.eq(&record.notice_pci_remarks),
        pre_charge_investigations::comment_counter_affidavit_received_on
            .eq(optional_date_text(record.comment_counter_affidavit_received_on)?),
        pre_charge_investigations::comment_counter_affidavit_remarks
            .eq(&record.comment_counter_affidavit_remarks),
        pre_charge_investigations::pci_report_submitted_by
            .eq(record.pci_report_submitted_by.map(|id| id.value())),
        pre_charge_investigations::pci_report_submitted_on
            .eq(optional_date_text(record.pci_report_submitted_on)?),
        pre_charge_investigations::pci_report_remarks.eq(&record.pci_report_remarks),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Pre-charge investigation for case {}",
            record.case_id
        )));
    }
    Ok(())
}
