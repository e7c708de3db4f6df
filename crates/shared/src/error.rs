//! Error types for FYP Portal

use thiserror::Error;

/// Error returned by `login` when a required credential field is empty
#[derive(Debug, Clone, Error)]
#[error("Missing required field '{field}'")]
pub struct ValidationError {
    pub field: &'static str,
}

/// Error reserved for a real credential backend.
///
/// The shipped mock verifier never produces it, but the seam keeps the
/// two-outcome login contract (Actor or error) intact for a real one.
#[derive(Debug, Clone, Error)]
#[error("Authentication failed for '{email}': {reason}")]
pub struct AuthError {
    pub email: String,
    pub reason: String,
}

/// Error produced when a role string falls outside the closed enumeration
#[derive(Debug, Clone, Error)]
#[error("Unknown role '{role}'. Known roles: student, supervisor, coordinator, hod, evaluator")]
pub struct UnknownRoleError {
    pub role: String,
}

/// Violation of the menu/route consistency invariant: every menu entry must
/// target a registered route that admits the menu's role.
#[derive(Debug, Clone, Error)]
pub enum MenuConsistencyError {
    #[error("Menu entry '{label}' for role '{role}' targets unregistered path '{path}'")]
    MissingRoute {
        role: String,
        label: String,
        path: String,
    },

    #[error("Menu entry '{label}' for role '{role}' targets '{path}', which does not admit that role")]
    RoleNotAdmitted {
        role: String,
        label: String,
        path: String,
    },
}

/// General FYP Portal error type
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error(transparent)]
    MenuConsistency(#[from] MenuConsistencyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
