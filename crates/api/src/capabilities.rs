// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell a client which actions to offer on a case. They are
//! advisory only; the transition engine re-checks every action.

use iec_tracker::{TransitionKind, is_authorized};
use iec_tracker_domain::{Case, User};

use crate::request_response::{Capability, CaseCapabilities};

/// Computes what `actor` may do with `case`.
///
/// # Arguments
///
/// * `case` - The case being displayed
/// * `actor` - The resolved acting user
#[must_use]
pub fn compute_case_capabilities(case: &Case, actor: &User) -> CaseCapabilities {
    if !actor.is_active {
        return CaseCapabilities {
            can_acknowledge_and_route: Capability::Denied,
            can_submit_notice_pci: Capability::Denied,
            can_edit: Capability::Denied,
            can_delete: Capability::Denied,
        };
    }

    CaseCapabilities {
        can_acknowledge_and_route: transition_capability(
            case,
            TransitionKind::AcknowledgeAndRoute,
            actor,
        ),
        can_submit_notice_pci: transition_capability(case, TransitionKind::SubmitNoticePci, actor),
        can_edit: Capability::Allowed,
        can_delete: Capability::Allowed,
    }
}

/// Returns whether `actor` sees every case or only their own.
#[must_use]
pub fn sees_all_cases(actor: &User) -> bool {
    !actor.role.is_some_and(|role| role.sees_only_own_cases())
}

fn transition_capability(case: &Case, kind: TransitionKind, actor: &User) -> Capability {
    Capability::from_bool(case.status == kind.source_stage() && is_authorized(case, kind, actor))
}
