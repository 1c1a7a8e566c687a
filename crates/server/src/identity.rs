// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity sync.
//!
//! Accounts live in the external identity system. At start-up the server
//! can import a JSON array of user records so the mirror table knows who
//! may act; usernames already present are left untouched.

use std::path::Path;

use iec_tracker_persistence::{NewUserData, SqlitePersistence};
use tracing::{debug, info};

use crate::ServerError;

/// Counts from one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Users added to the mirror.
    pub created: usize,
    /// Users that already existed.
    pub skipped: usize,
}

/// Reads user records from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// user records.
pub fn read_users_file(path: &Path) -> Result<Vec<NewUserData>, ServerError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| ServerError::UsersFile {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ServerError::UsersFormat {
        path: path.display().to_string(),
        source,
    })
}

/// Adds every user whose username is not yet known.
///
/// # Errors
///
/// Returns an error if a lookup or insert fails.
pub fn import_users(
    persistence: &mut SqlitePersistence,
    users: &[NewUserData],
) -> Result<ImportSummary, ServerError> {
    let mut summary: ImportSummary = ImportSummary::default();

    for user in users {
        if persistence.get_user_by_username(&user.username)?.is_some() {
            debug!(username = %user.username, "User already present, skipping");
            summary.skipped += 1;
            continue;
        }
        let user_id = persistence.create_user(user)?;
        debug!(username = %user.username, user_id = user_id.value(), "Imported user");
        summary.created += 1;
    }

    info!(
        created = summary.created,
        skipped = summary.skipped,
        "Identity sync complete"
    );
    Ok(summary)
}
