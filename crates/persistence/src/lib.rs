// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the IEC case tracker.
//!
//! This crate stores users, cases and stage detail records in `SQLite`
//! through Diesel. It is the only crate that performs I/O on behalf of the
//! workflow engine.
//!
//! ## Schema
//!
//! - `users`: mirror of the identity system
//! - `iec_records`: one row per case, unique `reference`
//! - `initial_evaluation_reports`, `pre_charge_investigations`: one row per
//!   case each, deleted with the case
//!
//! Migrations are embedded and applied when a connection is opened.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own shared-cache
//! in-memory database, so tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use iec_tracker::{NewCase, TransitionResult};
use iec_tracker_domain::{
    Case, CaseDetails, CaseFields, CaseId, Ensured, InitialEvaluationReport, Location,
    PreChargeInvestigation, ReferencePrefix, Stage, User, UserId,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::NewUserData;
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The `SQLite` persistence adapter.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for users, cases and stage detail records.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_iec_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists or the insert fails.
    pub fn create_user(&mut self, user: &NewUserData) -> Result<UserId, PersistenceError> {
        mutations::users::create_user(&mut self.conn, user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_user(&mut self, user_id: UserId) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// Lists every user at a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users_by_location(
        &mut self,
        location: Location,
    ) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users_by_location(&mut self.conn, location)
    }

    /// Activates or deactivates a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn set_user_active(
        &mut self,
        user_id: UserId,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::users::set_user_active(&mut self.conn, user_id, is_active)
    }

    /// Deletes a user, clearing references to it on cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn delete_user(&mut self, user_id: UserId) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }

    // ========================================================================
    // Cases
    // ========================================================================

    /// Stores a new case and returns it with its generated reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_case(&mut self, new_case: &NewCase) -> Result<Case, PersistenceError> {
        mutations::cases::create_case(&mut self.conn, new_case)
    }

    /// Retrieves a case by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if not found.
    pub fn get_case(&mut self, case_id: CaseId) -> Result<Option<Case>, PersistenceError> {
        queries::cases::get_case(&mut self.conn, case_id)
    }

    /// Lists every case, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_cases(&mut self) -> Result<Vec<Case>, PersistenceError> {
        queries::cases::list_cases(&mut self.conn)
    }

    /// Lists cases a user created or is assigned to, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_cases_for_user(&mut self, user_id: UserId) -> Result<Vec<Case>, PersistenceError> {
        queries::cases::list_cases_for_user(&mut self.conn, user_id)
    }

    /// Lists cases in a stage, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_cases_by_status(&mut self, status: Stage) -> Result<Vec<Case>, PersistenceError> {
        queries::cases::list_cases_by_status(&mut self.conn, status)
    }

    /// Returns the greatest stored reference under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn last_reference_with_prefix(
        &mut self,
        prefix: &ReferencePrefix,
    ) -> Result<Option<String>, PersistenceError> {
        queries::cases::last_reference_with_prefix(&mut self.conn, prefix)
    }

    /// Replaces the descriptive fields of a case.
    ///
    /// # Errors
    ///
    /// Returns an error if the case does not exist.
    pub fn update_case_fields(
        &mut self,
        case_id: CaseId,
        fields: &CaseFields,
    ) -> Result<(), PersistenceError> {
        mutations::cases::update_case_fields(&mut self.conn, case_id, fields)
    }

    /// Deletes a case and its detail records.
    ///
    /// # Errors
    ///
    /// Returns an error if the case does not exist.
    pub fn delete_case(&mut self, case_id: CaseId) -> Result<(), PersistenceError> {
        mutations::cases::delete_case(&mut self.conn, case_id)
    }

    // ========================================================================
    // Stage detail records
    // ========================================================================

    /// Loads every detail record of a case.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn get_case_details(&mut self, case_id: CaseId) -> Result<CaseDetails, PersistenceError> {
        queries::details::get_case_details(&mut self.conn, case_id)
    }

    /// Retrieves the initial evaluation report of a case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_initial_evaluation_report(
        &mut self,
        case_id: CaseId,
    ) -> Result<Option<InitialEvaluationReport>, PersistenceError> {
        queries::details::get_initial_evaluation_report(&mut self.conn, case_id)
    }

    /// Retrieves the pre-charge investigation record of a case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_pre_charge_investigation(
        &mut self,
        case_id: CaseId,
    ) -> Result<Option<PreChargeInvestigation>, PersistenceError> {
        queries::details::get_pre_charge_investigation(&mut self.conn, case_id)
    }

    /// Returns the pre-charge investigation record, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the case does not exist or a write fails.
    pub fn ensure_pre_charge_investigation(
        &mut self,
        case_id: CaseId,
    ) -> Result<Ensured<PreChargeInvestigation>, PersistenceError> {
        mutations::details::ensure_pre_charge_investigation(&mut self.conn, case_id)
    }

    /// Returns whether a case other than `excluding` holds `precharge_no`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_precharge_no_taken(
        &mut self,
        precharge_no: &str,
        excluding: CaseId,
    ) -> Result<bool, PersistenceError> {
        queries::details::is_precharge_no_taken(&mut self.conn, precharge_no, excluding)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Persists a transition result atomically and returns the stored case.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is stored in that case.
    pub fn persist_transition(&mut self, result: &TransitionResult) -> Result<Case, PersistenceError> {
        mutations::transition::persist_transition(&mut self.conn, result)
    }
}
