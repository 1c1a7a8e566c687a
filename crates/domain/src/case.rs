// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::reference::CaseReference;
use crate::user::UserId;
use crate::workflow::Stage;
use serde::{Deserialize, Serialize};
use time::Date;

/// Canonical identifier of a case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub i64);

impl CaseId {
    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The editable descriptive fields of a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFields {
    /// Date the complaint was received.
    pub date_received: Date,
    /// The complaining party.
    pub complainant: String,
    /// The party complained against.
    pub respondent: String,
    /// The administrative charge.
    pub charge: String,
    /// Free-text remarks.
    pub remarks: String,
}

impl CaseFields {
    /// Returns a copy with surrounding whitespace removed from the text fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            date_received: self.date_received,
            complainant: self.complainant.trim().to_string(),
            respondent: self.respondent.trim().to_string(),
            charge: self.charge.trim().to_string(),
            remarks: self.remarks.trim().to_string(),
        }
    }
}

/// A tracked administrative case ("IEC record").
///
/// `status` is a typed [`Stage`], so a case can never hold a key outside
/// the workflow. `created_by` and `assigned_to` become `None` when the
/// referenced user is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub case_id: CaseId,
    pub reference: CaseReference,
    pub date_created: Date,
    pub date_received: Date,
    pub complainant: String,
    pub respondent: String,
    pub charge: String,
    pub remarks: String,
    pub due_date: Option<Date>,
    pub status: Stage,
    pub created_by: Option<UserId>,
    pub assigned_to: Option<UserId>,
}

impl Case {
    /// Returns the descriptive fields of this case.
    #[must_use]
    pub fn fields(&self) -> CaseFields {
        CaseFields {
            date_received: self.date_received,
            complainant: self.complainant.clone(),
            respondent: self.respondent.clone(),
            charge: self.charge.clone(),
            remarks: self.remarks.clone(),
        }
    }

    /// Returns a copy of this case with the descriptive fields replaced.
    ///
    /// Reference, status, ownership and due date are left untouched.
    #[must_use]
    pub fn with_fields(&self, fields: &CaseFields) -> Self {
        Self {
            date_received: fields.date_received,
            complainant: fields.complainant.clone(),
            respondent: fields.respondent.clone(),
            charge: fields.charge.clone(),
            remarks: fields.remarks.clone(),
            ..self.clone()
        }
    }

    /// Returns whether `user_id` created this case.
    #[must_use]
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.created_by == Some(user_id)
    }

    /// Returns whether this case is currently assigned to `user_id`.
    #[must_use]
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assigned_to == Some(user_id)
    }

    /// Signed number of days until the due date.
    ///
    /// Negative when the case is past due, `None` without a due date.
    #[must_use]
    pub fn days_remaining(&self, today: Date) -> Option<i64> {
        self.due_date.map(|due| (due - today).whole_days())
    }

    /// Number of days the case is past due, if it is.
    #[must_use]
    pub fn overdue_days(&self, today: Date) -> Option<i64> {
        self.days_remaining(today)
            .filter(|remaining| *remaining < 0)
            .map(i64::abs)
    }

    /// Returns whether the case has reached the terminal stage.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }
}
