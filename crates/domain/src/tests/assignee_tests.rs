// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_user;
use crate::{Location, ROUTING_ELIGIBLE_ROLES, Role, User, UserId, resolve_eligible_assignees};

#[test]
fn test_excludes_actor_even_when_eligible() {
    let actor: User = create_test_user(1, "Alice", Role::InitialEvaluator, Location::Ncr);
    let other: User = create_test_user(2, "Bob", Role::PciInvestigator, Location::Ncr);
    let candidates: Vec<User> = vec![actor.clone(), other];

    let eligible: Vec<User> =
        resolve_eligible_assignees(&actor, &candidates, &ROUTING_ELIGIBLE_ROLES);

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].user_id, UserId(2));
}

#[test]
fn test_filters_role_location_and_active_flag() {
    let actor: User = create_test_user(1, "Alice", Role::InitialEvaluator, Location::Ncr);
    let mut inactive: User = create_test_user(2, "Bob", Role::PciInvestigator, Location::Ncr);
    inactive.is_active = false;
    let director: User = create_test_user(3, "Carol", Role::Director, Location::Ncr);
    let elsewhere: User = create_test_user(4, "Dan", Role::PciInvestigator, Location::R1);
    let mut no_role: User = create_test_user(5, "Eve", Role::PciInvestigator, Location::Ncr);
    no_role.role = None;
    let eligible_user: User = create_test_user(6, "Fay", Role::InitialEvaluator, Location::Ncr);

    let candidates: Vec<User> = vec![inactive, director, elsewhere, no_role, eligible_user];
    let eligible: Vec<User> =
        resolve_eligible_assignees(&actor, &candidates, &ROUTING_ELIGIBLE_ROLES);

    let ids: Vec<UserId> = eligible.iter().map(|user| user.user_id).collect();
    assert_eq!(ids, vec![UserId(6)]);
}

#[test]
fn test_orders_by_display_name_then_id() {
    let actor: User = create_test_user(1, "Alice", Role::InitialEvaluator, Location::Ncr);
    let candidates: Vec<User> = vec![
        create_test_user(9, "Zed", Role::PciInvestigator, Location::Ncr),
        create_test_user(7, "Mia", Role::PciInvestigator, Location::Ncr),
        create_test_user(3, "Mia", Role::InitialEvaluator, Location::Ncr),
        create_test_user(4, "Ben", Role::PciInvestigator, Location::Ncr),
    ];

    let eligible: Vec<User> =
        resolve_eligible_assignees(&actor, &candidates, &ROUTING_ELIGIBLE_ROLES);

    let ids: Vec<i64> = eligible.iter().map(|user| user.user_id.value()).collect();
    assert_eq!(ids, vec![4, 3, 7, 9]);
}

#[test]
fn test_actor_without_location_has_no_assignees() {
    let mut actor: User = create_test_user(1, "Alice", Role::InitialEvaluator, Location::Ncr);
    actor.location = None;
    let mut unplaced: User = create_test_user(2, "Bob", Role::PciInvestigator, Location::Ncr);
    unplaced.location = None;
    let candidates: Vec<User> = vec![
        unplaced,
        create_test_user(3, "Carol", Role::PciInvestigator, Location::Ncr),
    ];

    assert!(resolve_eligible_assignees(&actor, &candidates, &ROUTING_ELIGIBLE_ROLES).is_empty());
}
