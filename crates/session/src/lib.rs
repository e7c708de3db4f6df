//! # FYP Portal Session
//!
//! Identity provider: holds the current authenticated actor for the
//! lifetime of the application session and exposes login/logout.

mod session_manager;
mod verifier;

pub use session_manager::{AuthenticatedSession, SessionManager, SessionState};
pub use verifier::{AcceptAllVerifier, CredentialVerifier};
