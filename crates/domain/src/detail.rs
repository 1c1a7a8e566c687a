// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage detail records.
//!
//! Each record is owned one-to-one by a case and is deleted with it.

use crate::case::CaseId;
use crate::user::UserId;
use serde::{Deserialize, Serialize};
use time::Date;

/// Data captured when a case leaves the initial evaluation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialEvaluationReport {
    /// The owning case.
    pub case_id: CaseId,
    /// User who acknowledged and routed the case.
    pub submitted_by: Option<UserId>,
    /// Date of submission.
    pub submitted_on: Date,
    /// Date the director approved the evaluation, if recorded.
    pub director_approval_date: Option<Date>,
    /// Submission remarks.
    pub remarks: String,
}

/// Data captured through the pre-charge investigation stages.
///
/// Only the notice fields are written by transitions; the later fields are
/// carried as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreChargeInvestigation {
    /// The owning case.
    pub case_id: CaseId,
    /// Pre-charge investigation number, globally unique once assigned.
    pub precharge_no: Option<String>,
    pub notice_pci_submitted_by: Option<UserId>,
    pub notice_pci_submitted_on: Option<Date>,
    pub notice_pci_respondent_received_on: Option<Date>,
    pub notice_pci_remarks: String,
    pub comment_counter_affidavit_received_on: Option<Date>,
    pub comment_counter_affidavit_remarks: String,
    pub pci_report_submitted_by: Option<UserId>,
    pub pci_report_submitted_on: Option<Date>,
    pub pci_report_remarks: String,
}

impl PreChargeInvestigation {
    /// Creates an empty record for `case_id`.
    #[must_use]
    pub const fn empty(case_id: CaseId) -> Self {
        Self {
            case_id,
            precharge_no: None,
            notice_pci_submitted_by: None,
            notice_pci_submitted_on: None,
            notice_pci_respondent_received_on: None,
            notice_pci_remarks: String::new(),
            comment_counter_affidavit_received_on: None,
            comment_counter_affidavit_remarks: String::new(),
            pci_report_submitted_by: None,
            pci_report_submitted_on: None,
            pci_report_remarks: String::new(),
        }
    }
}

/// The result of a create-if-absent operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ensured<T> {
    /// The existing or newly created record.
    pub record: T,
    /// `true` when the record did not exist before.
    pub created: bool,
}

impl<T> Ensured<T> {
    /// Wraps a record that was just created.
    pub const fn created(record: T) -> Self {
        Self {
            record,
            created: true,
        }
    }

    /// Wraps a record that already existed.
    pub const fn existing(record: T) -> Self {
        Self {
            record,
            created: false,
        }
    }

    /// Resolves create-if-absent semantics over an optional existing record.
    pub fn from_existing_or(existing: Option<T>, create: impl FnOnce() -> T) -> Self {
        existing.map_or_else(|| Self::created(create()), Self::existing)
    }
}

/// Detail records loaded for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetails {
    pub initial_evaluation_report: Option<InitialEvaluationReport>,
    pub pre_charge_investigation: Option<PreChargeInvestigation>,
}
