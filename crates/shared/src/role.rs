//! Role types for the FYP workflow

use crate::error::UnknownRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five workflow personas of the FYP system.
///
/// Exactly one role per actor per session; there is no inheritance or
/// merging between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Supervisor,
    Coordinator,
    /// Head of Department
    Hod,
    Evaluator,
}

impl Role {
    /// All known roles, in display order
    pub const ALL: [Role; 5] = [
        Role::Student,
        Role::Supervisor,
        Role::Coordinator,
        Role::Hod,
        Role::Evaluator,
    ];

    /// Stable string form used in ids, paths, and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Supervisor => "supervisor",
            Role::Coordinator => "coordinator",
            Role::Hod => "hod",
            Role::Evaluator => "evaluator",
        }
    }

    /// Parse a role string; `None` for anything outside the closed set
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "student" => Some(Role::Student),
            "supervisor" => Some(Role::Supervisor),
            "coordinator" => Some(Role::Coordinator),
            "hod" => Some(Role::Hod),
            "evaluator" => Some(Role::Evaluator),
            _ => None,
        }
    }

    /// Human-readable role label.
    ///
    /// For evaluators the label depends on the evaluator kind; every other
    /// role ignores it.
    pub fn display_name(&self, kind: Option<EvaluatorKind>) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Supervisor => "Supervisor",
            Role::Coordinator => "Coordinator",
            Role::Hod => "Head of Department",
            Role::Evaluator => match kind {
                Some(EvaluatorKind::External) => "External Evaluator",
                _ => "Internal Evaluator",
            },
        }
    }

    /// The role-specific dashboard path users land on after login
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Supervisor => "/supervisor/dashboard",
            Role::Coordinator => "/coordinator/dashboard",
            Role::Hod => "/hod/dashboard",
            Role::Evaluator => "/evaluator/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRoleError {
            role: s.to_string(),
        })
    }
}

/// Evaluator refinement: internal (proposal/interim defenses) or external
/// (final defenses). Affects menu labels only, never access rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    Internal,
    External,
}

impl EvaluatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluatorKind::Internal => "internal",
            EvaluatorKind::External => "external",
        }
    }

    /// Parse an evaluator kind string
    pub fn parse(s: &str) -> Option<EvaluatorKind> {
        match s {
            "internal" => Some(EvaluatorKind::Internal),
            "external" => Some(EvaluatorKind::External),
            _ => None,
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format an arbitrary role string for display.
///
/// Total over its input: unrecognized strings are echoed back unchanged so a
/// bad value upstream renders as-is instead of failing the page.
pub fn display_role_name(role: &str, kind: Option<EvaluatorKind>) -> String {
    match Role::parse(role) {
        Some(r) => r.display_name(kind).to_string(),
        None => role.to_string(),
    }
}
