// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use iec_tracker_domain::{Location, Role, UserId};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewUserData;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Creates a user record.
///
/// # Errors
///
/// Returns an error if the insert fails or the username already exists.
pub fn create_user(
    conn: &mut SqliteConnection,
    user: &NewUserData,
) -> Result<UserId, PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::username.eq(&user.username),
            users::display_name.eq(&user.display_name),
            users::designation.eq(&user.designation),
            users::role.eq(user.role.map(|role: Role| role.as_str())),
            users::location.eq(user.location.map(|location: Location| location.code())),
            users::is_active.eq(i32::from(user.is_active)),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;
    info!(user_id, username = %user.username, "Created user");

    Ok(UserId(user_id))
}

/// Activates or deactivates a user.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn set_user_active(
    conn: &mut SqliteConnection,
    user_id: UserId,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(users::table.filter(users::user_id.eq(user_id.value())))
        .set(users::is_active.eq(i32::from(is_active)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("User {user_id}")));
    }

    info!(user_id = user_id.value(), is_active, "Updated user activation");
    Ok(())
}

/// Deletes a user.
///
/// Cases and detail records that referenced the user keep their rows with
/// the reference cleared.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn delete_user(conn: &mut SqliteConnection, user_id: UserId) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(users::table.filter(users::user_id.eq(user_id.value()))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("User {user_id}")));
    }

    info!(user_id = user_id.value(), "Deleted user");
    Ok(())
}
