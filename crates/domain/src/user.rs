// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organizational role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// System administrator.
    #[serde(rename = "admin")]
    Admin,
    /// Initial Evaluator.
    #[serde(rename = "ier_inv")]
    InitialEvaluator,
    /// Pre-Charge Investigation investigator.
    #[serde(rename = "pci_inv")]
    PciInvestigator,
    /// Director.
    #[serde(rename = "dir")]
    Director,
    /// Summary Hearing Officer.
    #[serde(rename = "sho")]
    SummaryHearingOfficer,
    /// Commissioner.
    #[serde(rename = "comr")]
    Commissioner,
}

impl Role {
    /// Returns the stored role code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::InitialEvaluator => "ier_inv",
            Self::PciInvestigator => "pci_inv",
            Self::Director => "dir",
            Self::SummaryHearingOfficer => "sho",
            Self::Commissioner => "comr",
        }
    }

    /// Returns the display label for this role.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::InitialEvaluator => "Initial Evaluator",
            Self::PciInvestigator => "PCI Investigator",
            Self::Director => "Director",
            Self::SummaryHearingOfficer => "Summary Hearing Officer",
            Self::Commissioner => "Commissioner",
        }
    }

    /// Returns whether holders of this role only see their own cases.
    ///
    /// Investigators see the cases they created or are assigned to; every
    /// other role sees all cases.
    #[must_use]
    pub const fn sees_only_own_cases(&self) -> bool {
        matches!(self, Self::InitialEvaluator | Self::PciInvestigator)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "ier_inv" => Ok(Self::InitialEvaluator),
            "pci_inv" => Ok(Self::PciInvestigator),
            "dir" => Ok(Self::Director),
            "sho" => Ok(Self::SummaryHearingOfficer),
            "comr" => Ok(Self::Commissioner),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regional office a user belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Co,
    Ncr,
    Car,
    R1,
    R2,
    R3,
    R4a,
    R4b,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    Barmm,
}

impl Location {
    /// Every location, in display order.
    pub const ALL: [Self; 18] = [
        Self::Co,
        Self::Ncr,
        Self::Car,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4a,
        Self::R4b,
        Self::R5,
        Self::R6,
        Self::R7,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
        Self::R13,
        Self::Barmm,
    ];

    /// Returns the stored (lowercase) location code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Co => "co",
            Self::Ncr => "ncr",
            Self::Car => "car",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4a => "r4a",
            Self::R4b => "r4b",
            Self::R5 => "r5",
            Self::R6 => "r6",
            Self::R7 => "r7",
            Self::R8 => "r8",
            Self::R9 => "r9",
            Self::R10 => "r10",
            Self::R11 => "r11",
            Self::R12 => "r12",
            Self::R13 => "r13",
            Self::Barmm => "barmm",
        }
    }

    /// Returns the office name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Co => "CENTRAL OFFICE",
            Self::Ncr => "NATIONAL CAPITAL REGION",
            Self::Car => "CORDILLERA ADMINISTRATIVE REGION",
            Self::R1 => "Region 1",
            Self::R2 => "Region 2",
            Self::R3 => "Region 3",
            Self::R4a => "CALABARZON",
            Self::R4b => "MIMAROPA",
            Self::R5 => "Region 5",
            Self::R6 => "Region 6",
            Self::R7 => "Region 7",
            Self::R8 => "Region 8",
            Self::R9 => "Region 9",
            Self::R10 => "Region 10",
            Self::R11 => "Region 11",
            Self::R12 => "Region 12",
            Self::R13 => "Region 13",
            Self::Barmm => "BANGSAMORO AUTONOMOUS REGION IN MUSLIM MINDANAO",
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|location| location.code() == normalized)
            .copied()
            .ok_or_else(|| DomainError::InvalidLocation(s.to_string()))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A user known to the case tracker.
///
/// Users are owned by the identity system; the tracker only looks them up
/// and filters them. Accounts start inactive until approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical identifier.
    pub user_id: UserId,
    /// Unique login name.
    pub username: String,
    /// Name shown to other users.
    pub display_name: String,
    /// Job title (informational).
    pub designation: String,
    /// Organizational role, if assigned.
    pub role: Option<Role>,
    /// Regional office, if assigned.
    pub location: Option<Location>,
    /// Whether the account has been approved and is usable.
    pub is_active: bool,
}

impl User {
    /// Returns whether the user holds one of `roles`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.role.is_some_and(|role| roles.contains(&role))
    }
}
