//! Actor - the authenticated identity for a session

use crate::role::{EvaluatorKind, Role};
use serde::{Deserialize, Serialize};

/// The authenticated user for the current session.
///
/// Carries exactly one role; `evaluator_kind` is `Some` only when the role
/// is `Evaluator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Unique actor identifier
    pub id: String,

    /// Human-readable name, non-empty
    pub display_name: String,

    /// Login email, echoed back from the credential form
    pub email: String,

    /// Workflow persona
    pub role: Role,

    /// Evaluator refinement; absent for all other roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluator_kind: Option<EvaluatorKind>,

    /// Generated avatar image URL
    pub avatar_url: String,
}

impl Actor {
    /// Synthesize the mock actor for a role, as the demo login does.
    ///
    /// The credential store is mocked out: the id and display name are
    /// derived from the role, and the avatar URL from the email.
    pub fn mock(role: Role, evaluator_kind: Option<EvaluatorKind>, email: &str) -> Self {
        // Evaluator kind is meaningless for other roles; drop it here so a
        // sloppy caller cannot smuggle it into the session.
        let evaluator_kind = match role {
            Role::Evaluator => evaluator_kind,
            _ => None,
        };

        Self {
            id: format!("{}-001", role.as_str()),
            display_name: mock_display_name(role).to_string(),
            email: email.to_string(),
            role,
            evaluator_kind,
            avatar_url: format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                urlencode(email)
            ),
        }
    }

    /// Human-readable role label for this actor
    pub fn role_label(&self) -> &'static str {
        self.role.display_name(self.evaluator_kind)
    }
}

/// Fixed per-role person names used by the mock credential store
fn mock_display_name(role: Role) -> &'static str {
    match role {
        Role::Student => "John Doe",
        Role::Supervisor => "Dr. Sarah Smith",
        Role::Coordinator => "Dr. Michael Johnson",
        Role::Hod => "Prof. Robert Anderson",
        Role::Evaluator => "Dr. Emily Brown",
    }
}

/// Minimal percent-encoding for the avatar URL query value
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
