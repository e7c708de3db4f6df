//! PortalCore - central coordinator for session, access control, and audit

use access::{can_access, menu_for, Decision, MenuEntry, RouteTable, DEFAULT_PATH, LOGIN_PATH};
use audit::{AuditEventType, AuditLogger, AuditStats};
use session::{CredentialVerifier, SessionManager};
use shared::{Actor, EvaluatorKind, Logger, Result, Role};
use std::sync::Arc;

/// PortalCore configuration
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Ring-buffer capacity of the audit trail
    pub audit_capacity: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            audit_capacity: 10000,
        }
    }
}

/// Outcome of a navigation attempt, as reported to the routing collaborator.
///
/// The portal never navigates; it decides, the router moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Render the view at `path`
    Allowed { path: String },
    /// Send the user to `target` instead
    Redirect {
        decision: Decision,
        target: &'static str,
    },
    /// Path is not registered; the router's catch-all handles it
    NotFound,
}

/// The one object the presentation layer holds.
pub struct PortalCore {
    logger: Arc<dyn Logger>,
    session: SessionManager,
    routes: RouteTable,
    audit: AuditLogger,
}

impl PortalCore {
    /// Create a PortalCore over the standard route table and the demo
    /// accept-all verifier
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.clone(),
            session: SessionManager::new(logger),
            routes: RouteTable::standard(),
            audit: AuditLogger::default(),
        }
    }

    /// Create a PortalCore with a specific verifier and configuration
    pub fn with_verifier(
        logger: Arc<dyn Logger>,
        verifier: Arc<dyn CredentialVerifier>,
        config: PortalConfig,
    ) -> Self {
        Self {
            logger: logger.clone(),
            session: SessionManager::with_verifier(logger, verifier),
            routes: RouteTable::standard(),
            audit: AuditLogger::new(config.audit_capacity),
        }
    }

    // ========== Session ==========

    /// Authenticate and install the session actor
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
        evaluator_kind: Option<EvaluatorKind>,
    ) -> Result<Actor> {
        match self.session.login(email, password, role, evaluator_kind).await {
            Ok(actor) => {
                self.audit.log_login(actor.role.as_str());
                Ok(actor)
            }
            Err(err) => {
                self.audit
                    .log_login_rejected(role.as_str(), &err.to_string());
                Err(err)
            }
        }
    }

    /// Clear the session. Idempotent.
    pub fn logout(&mut self) {
        if let Some(actor) = self.session.current_actor() {
            self.audit.log_logout(actor.role.as_str());
        }
        self.session.logout();
    }

    pub fn current_actor(&self) -> Option<&Actor> {
        self.session.current_actor()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ========== Navigation ==========

    /// Evaluate a navigation attempt against the current session.
    ///
    /// Consulted on every route change; decisions are never cached.
    pub fn navigate(&mut self, path: &str) -> NavigationOutcome {
        let actor = self.session.current_actor();
        let role_str = actor.map(|a| a.role.as_str());

        let route = match self.routes.find(path) {
            Some(route) => route,
            None => {
                self.audit
                    .log_navigation(role_str, path, AuditEventType::NavigationNotFound, None);
                return NavigationOutcome::NotFound;
            }
        };

        let decision = can_access(actor, route);
        match decision {
            Decision::Allow => {
                self.audit
                    .log_navigation(role_str, path, AuditEventType::NavigationAllowed, None);
                NavigationOutcome::Allowed {
                    path: route.path.clone(),
                }
            }
            Decision::RedirectToLogin | Decision::RedirectToDefault => {
                let target = match decision {
                    Decision::RedirectToLogin => LOGIN_PATH,
                    _ => DEFAULT_PATH,
                };
                self.logger.debug(&format!(
                    "Navigation to '{}' redirected to '{}'",
                    path, target
                ));
                self.audit.log_navigation(
                    role_str,
                    path,
                    AuditEventType::NavigationRedirected,
                    Some(target),
                );
                NavigationOutcome::Redirect { decision, target }
            }
        }
    }

    /// Navigation menu for the current session; empty when anonymous
    pub fn menu(&self) -> Vec<MenuEntry> {
        match self.session.current_actor() {
            Some(actor) => menu_for(actor.role, actor.evaluator_kind),
            None => Vec::new(),
        }
    }

    /// Human-readable role label of the current actor
    pub fn role_label(&self) -> Option<&'static str> {
        self.session.current_actor().map(|a| a.role_label())
    }

    /// The route table, for inspection surfaces
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Check the menu/route consistency invariant
    pub fn verify_menus(&self) -> Result<()> {
        self.routes.verify_menus().map_err(Into::into)
    }

    // ========== Audit ==========

    pub fn audit_stats(&self) -> AuditStats {
        self.audit.get_stats()
    }

    pub fn recent_denials(&self, limit: usize) -> Vec<&audit::AuditEntry> {
        self.audit.get_recent_denials(limit)
    }

    pub fn export_audit_json(&self) -> serde_json::Value {
        self.audit.export_json()
    }
}
