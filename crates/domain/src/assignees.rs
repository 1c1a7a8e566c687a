// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::user::{Role, User};

/// Roles a case may be routed to out of initial evaluation.
pub const ROUTING_ELIGIBLE_ROLES: [Role; 2] = [Role::InitialEvaluator, Role::PciInvestigator];

/// Message shown when nobody can receive a routed case.
pub const NO_ELIGIBLE_ASSIGNEES_WARNING: &str =
    "There are no other active IER or PCI Investigators in your location to route this task to.";

/// Computes the users a case may be routed to.
///
/// A candidate is eligible when it is active, shares the actor's location,
/// holds one of `roles`, and is not the actor. An actor without a location
/// has no eligible assignees. The result is ordered by display name, then
/// by user id.
///
/// An empty result is not an error; callers warn about it.
///
/// # Arguments
///
/// * `actor` - The user routing the case
/// * `candidates` - Users to filter (typically every user at the location)
/// * `roles` - Roles that may receive the case
#[must_use]
pub fn resolve_eligible_assignees(actor: &User, candidates: &[User], roles: &[Role]) -> Vec<User> {
    let Some(location) = actor.location else {
        return Vec::new();
    };

    let mut eligible: Vec<User> = candidates
        .iter()
        .filter(|candidate| candidate.is_active)
        .filter(|candidate| candidate.location == Some(location))
        .filter(|candidate| candidate.has_any_role(roles))
        .filter(|candidate| candidate.user_id != actor.user_id)
        .cloned()
        .collect();

    eligible.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    eligible
}
