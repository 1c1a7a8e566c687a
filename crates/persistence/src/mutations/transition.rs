// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker::TransitionResult;
use iec_tracker_domain::{Case, Ensured, PreChargeInvestigation};
use tracing::info;

use crate::data_models::optional_date_text;
use crate::diesel_schema::iec_records;
use crate::error::PersistenceError;
use crate::mutations::details::{
    insert_initial_evaluation_report_if_absent, insert_pre_charge_investigation,
    update_pre_charge_investigation,
};

/// Persists every part of a transition result in one transaction.
///
/// The case row is written first, guarded on the stage the transition
/// started from, so a case that moved since it was loaded is reported as not
/// found before any detail record is touched. Detail records follow.
///
/// # Errors
///
/// Returns an error if any write fails; no partial transition is stored.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<Case, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let case: &Case = &result.case;
        let updated: usize = diesel::update(
            iec_records::table
                .filter(iec_records::case_id.eq(case.case_id.value()))
                .filter(iec_records::status.eq(result.from.as_str())),
        )
        .set((
            iec_records::status.eq(case.status.as_str()),
            iec_records::assigned_to.eq(case.assigned_to.map(|id| id.value())),
            iec_records::due_date.eq(optional_date_text(case.due_date)?),
        ))
        .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Case {} in stage '{}'",
                case.case_id, result.from
            )));
        }

        let new_report = result
            .initial_evaluation_report
            .as_ref()
            .filter(|report| report.created);
        if let Some(report) = new_report {
            insert_initial_evaluation_report_if_absent(conn, &report.record)?;
        }

        if let Some(investigation) = &result.pre_charge_investigation {
            store_pre_charge_investigation(conn, investigation)?;
        }

        info!(
            case_id = case.case_id.value(),
            transition = result.kind.name(),
            from = %result.from,
            to = %result.to,
            "Persisted case transition"
        );

        Ok(case.clone())
    })
}

fn store_pre_charge_investigation(
    conn: &mut SqliteConnection,
    investigation: &Ensured<PreChargeInvestigation>,
) -> Result<(), PersistenceError> {
    if investigation.created {
        insert_pre_charge_investigation(conn, &investigation.record)
    } else {
        update_pre_charge_investigation(conn, &investigation.record)
    }
}
