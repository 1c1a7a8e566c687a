// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker_domain::{Location, User, UserId};
use tracing::debug;

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user(conn: &mut SqliteConnection, user_id: UserId) -> Result<Option<User>, PersistenceError> {
    debug!(user_id = user_id.value(), "Looking up user");

    users::table
        .filter(users::user_id.eq(user_id.value()))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(User::try_from)
        .transpose()
}

/// Retrieves a user by username.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, PersistenceError> {
    debug!(username, "Looking up user by username");

    users::table
        .filter(users::username.eq(username))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(User::try_from)
        .transpose()
}

/// Lists every user at a location, active or not, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_users_by_location(
    conn: &mut SqliteConnection,
    location: Location,
) -> Result<Vec<User>, PersistenceError> {
    debug!(location = location.code(), "Listing users by location");

    let rows: Vec<UserRow> = users::table
        .filter(users::location.eq(location.code()))
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load(conn)?;

    rows.into_iter().map(User::try_from).collect()
}
