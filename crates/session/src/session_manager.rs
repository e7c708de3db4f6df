//! SessionManager - login/logout and the current-actor slot

use crate::verifier::{AcceptAllVerifier, CredentialVerifier};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{Actor, EvaluatorKind, Logger, Result, Role, ValidationError};
use std::sync::Arc;
use uuid::Uuid;

/// An authenticated session: the actor plus bookkeeping fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedSession {
    pub actor: Actor,
    pub session_id: Uuid,
    pub logged_in_at: DateTime<Utc>,
}

/// Session-level state machine.
///
/// `Anonymous --login--> Authenticated --logout--> Anonymous`; a login while
/// authenticated simply replaces the actor. Initial state is `Anonymous`,
/// and there is no terminal state; the session lives until the process ends.
/// Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedSession),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn actor(&self) -> Option<&Actor> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(&session.actor),
        }
    }
}

/// Holds the single current-actor slot and performs login/logout.
///
/// One writer, sequential reads; constructed per session and passed
/// explicitly rather than living in a global.
pub struct SessionManager {
    verifier: Arc<dyn CredentialVerifier>,
    logger: Arc<dyn Logger>,
    state: SessionState,
}

impl SessionManager {
    /// Create a SessionManager backed by the demo accept-all verifier
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_verifier(logger, Arc::new(AcceptAllVerifier::new()))
    }

    /// Create a SessionManager with a specific credential verifier
    pub fn with_verifier(logger: Arc<dyn Logger>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            logger,
            state: SessionState::Anonymous,
        }
    }

    /// Authenticate and install the actor for this session.
    ///
    /// Fails with `ValidationError` when email or password is empty
    /// (whitespace-only counts as empty). Any previous actor is replaced.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
        evaluator_kind: Option<EvaluatorKind>,
    ) -> Result<Actor> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError { field: "email" }.into());
        }
        if password.trim().is_empty() {
            return Err(ValidationError { field: "password" }.into());
        }

        self.verifier.verify(email, password).await?;

        let actor = Actor::mock(role, evaluator_kind, email);

        if let SessionState::Authenticated(previous) = &self.state {
            self.logger.info(&format!(
                "Replacing session for '{}' with '{}'",
                previous.actor.id, actor.id
            ));
        }

        self.state = SessionState::Authenticated(AuthenticatedSession {
            actor: actor.clone(),
            session_id: Uuid::new_v4(),
            logged_in_at: Utc::now(),
        });

        self.logger
            .info(&format!("Logged in as '{}' ({})", actor.id, actor.role));

        Ok(actor)
    }

    /// Clear the current actor. Idempotent: a no-op when anonymous.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(session) = &self.state {
            self.logger
                .info(&format!("Logged out '{}'", session.actor.id));
            self.state = SessionState::Anonymous;
        }
    }

    /// The current actor, if any
    pub fn current_actor(&self) -> Option<&Actor> {
        self.state.actor()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Full session record including id and login time
    pub fn session(&self) -> Option<&AuthenticatedSession> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(session),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
