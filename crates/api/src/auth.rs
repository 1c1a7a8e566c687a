// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Acting-user resolution.
//!
//! Authentication happens outside this system; requests carry the ID of the
//! acting user, which is resolved against the user mirror here. Every
//! operation starts by resolving its actor.

use iec_tracker_domain::{User, UserId};
use iec_tracker_persistence::SqlitePersistence;
use tracing::{debug, warn};

use crate::error::{ApiError, translate_persistence_error};

/// Resolves the acting user for a request.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor_id` - The ID supplied with the request
///
/// # Returns
///
/// The stored user, if it exists and is active.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the user does not exist or is
/// inactive, or an internal error if the lookup fails.
pub fn resolve_actor(
    persistence: &mut SqlitePersistence,
    actor_id: i64,
) -> Result<User, ApiError> {
    let user_id: UserId = UserId(actor_id);
    let Some(user) = persistence
        .get_user(user_id)
        .map_err(translate_persistence_error)?
    else {
        warn!(actor_id, "Request from unknown user");
        return Err(ApiError::AuthenticationFailed {
            reason: format!("User {user_id} does not exist"),
        });
    };

    if !user.is_active {
        warn!(actor_id, username = %user.username, "Request from inactive user");
        return Err(ApiError::AuthenticationFailed {
            reason: format!("User '{}' is not active", user.username),
        });
    }

    debug!(actor_id, username = %user.username, "Resolved acting user");
    Ok(user)
}
