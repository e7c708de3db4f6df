//! Route guard - Allow/Redirect decisions for navigation attempts

use crate::route::{RouteDefinition, DEFAULT_PATH, LOGIN_PATH};
use serde::{Deserialize, Serialize};
use shared::Actor;

/// Outcome of a navigation attempt.
///
/// Always a value, never an error: the routing collaborator performs the
/// redirect, the guard only decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Render the destination view
    Allow,
    /// No authenticated actor; send to the login page
    RedirectToLogin,
    /// Authenticated, but the role is not admitted; send to the
    /// role-neutral landing page
    RedirectToDefault,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Path the routing collaborator should redirect to, if any
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(LOGIN_PATH),
            Decision::RedirectToDefault => Some(DEFAULT_PATH),
        }
    }
}

/// Decide whether `actor` may view `route`.
///
/// Stateless; must be evaluated on every navigation attempt. Public routes
/// are open to everyone, any other route requires authentication, and a
/// non-empty role set additionally requires membership.
pub fn can_access(actor: Option<&Actor>, route: &RouteDefinition) -> Decision {
    if route.public {
        return Decision::Allow;
    }

    let actor = match actor {
        Some(a) => a,
        None => return Decision::RedirectToLogin,
    };

    if route.admits(actor.role) {
        Decision::Allow
    } else {
        Decision::RedirectToDefault
    }
}
