//! RouteTable - Route definitions and the single source of truth for paths

use crate::menu::menu_for;
use serde::{Deserialize, Serialize};
use shared::{MenuConsistencyError, Role};
use std::collections::HashMap;

/// Path of the login page, the only route reachable anonymously
pub const LOGIN_PATH: &str = "/login";

/// Role-neutral landing page; redirect target for authenticated actors that
/// hit a route their role does not admit. Has no content of its own.
pub const DEFAULT_PATH: &str = "/dashboard";

/// A guarded route of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    /// Unique URL path
    pub path: String,

    /// Roles permitted to view this route; empty means any authenticated
    /// actor
    #[serde(default)]
    pub allowed_roles: Vec<Role>,

    /// Reachable without authentication (login page only)
    #[serde(default)]
    pub public: bool,
}

impl RouteDefinition {
    /// Create a route open to any authenticated actor
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            allowed_roles: Vec::new(),
            public: false,
        }
    }

    /// Builder: restrict the route to the given roles
    pub fn for_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = roles.into_iter().collect();
        self
    }

    /// Builder: mark the route reachable without authentication
    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    /// Check whether this route admits the given role
    pub fn admits(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }
}

/// Registry of all routes, consulted by both the guard and the menus.
///
/// Keeping one table prevents menus from drifting out of sync with the
/// router and linking to paths that were never registered.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    /// path -> index into `routes`
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Create an empty RouteTable
    pub fn new() -> Self {
        Self::default()
    }

    /// The full dashboard route table
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.register(RouteDefinition::new(LOGIN_PATH).public());
        table.register(RouteDefinition::new(DEFAULT_PATH));

        for page in [
            "dashboard",
            "submissions",
            "defense-schedule",
            "assignments",
            "monthly-logs",
            "announcements",
            "guidelines",
        ] {
            table.register(
                RouteDefinition::new(format!("/student/{}", page)).for_roles([Role::Student]),
            );
        }

        for page in [
            "dashboard",
            "my-students",
            "pending-reviews",
            "monthly-logs",
            "escalations",
            "payment-info",
            "guidelines",
        ] {
            table.register(
                RouteDefinition::new(format!("/supervisor/{}", page)).for_roles([Role::Supervisor]),
            );
        }

        for page in [
            "dashboard",
            "defense-schedule",
            "announcements",
            "participant-payments",
            "penalties",
            "compile-results",
            "monthly-logs",
            "guidelines",
        ] {
            table.register(
                RouteDefinition::new(format!("/coordinator/{}", page))
                    .for_roles([Role::Coordinator]),
            );
        }

        for page in [
            "dashboard",
            "appeals",
            "escalations",
            "result-approval",
            "publish-results",
            "analytics",
            "guidelines",
        ] {
            table.register(RouteDefinition::new(format!("/hod/{}", page)).for_roles([Role::Hod]));
        }

        for page in [
            "dashboard",
            "defense-schedule",
            "evaluations",
            "payment-info",
            "guidelines",
        ] {
            table.register(
                RouteDefinition::new(format!("/evaluator/{}", page)).for_roles([Role::Evaluator]),
            );
        }

        table
    }

    /// Register a route; re-registering a path replaces the definition
    pub fn register(&mut self, route: RouteDefinition) {
        match self.index.get(&route.path) {
            Some(&i) => self.routes[i] = route,
            None => {
                self.index.insert(route.path.clone(), self.routes.len());
                self.routes.push(route);
            }
        }
    }

    /// Look up a route by exact path.
    ///
    /// `None` means the path is not registered; not-found handling belongs
    /// to the routing collaborator, never the guard.
    pub fn find(&self, path: &str) -> Option<&RouteDefinition> {
        self.index.get(path).map(|&i| &self.routes[i])
    }

    /// All routes, in registration order
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Verify the menu/route consistency invariant for every role: each
    /// menu entry must target a registered route that admits the role.
    pub fn verify_menus(&self) -> Result<(), MenuConsistencyError> {
        for role in Role::ALL {
            for entry in menu_for(role, None) {
                let route = self.find(entry.target_path).ok_or_else(|| {
                    MenuConsistencyError::MissingRoute {
                        role: role.to_string(),
                        label: entry.label.to_string(),
                        path: entry.target_path.to_string(),
                    }
                })?;

                if !route.public && !route.admits(role) {
                    return Err(MenuConsistencyError::RoleNotAdmitted {
                        role: role.to_string(),
                        label: entry.label.to_string(),
                        path: entry.target_path.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Table Construction Tests ==============

    #[test]
    fn test_standard_table_has_unique_paths() {
        let table = RouteTable::standard();
        let mut seen = std::collections::HashSet::new();
        for route in table.routes() {
            assert!(seen.insert(route.path.clone()), "duplicate {}", route.path);
        }
    }

    #[test]
    fn test_login_is_the_only_public_route() {
        let table = RouteTable::standard();
        let public: Vec<_> = table.routes().iter().filter(|r| r.public).collect();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].path, LOGIN_PATH);
    }

    #[test]
    fn test_default_landing_is_role_neutral() {
        let table = RouteTable::standard();
        let landing = table.find(DEFAULT_PATH).unwrap();
        assert!(!landing.public);
        assert!(landing.allowed_roles.is_empty());
        for role in Role::ALL {
            assert!(landing.admits(role));
        }
    }

    #[test]
    fn test_every_role_has_a_dashboard_route() {
        let table = RouteTable::standard();
        for role in Role::ALL {
            let route = table.find(role.dashboard_path()).unwrap();
            assert!(route.admits(role));
        }
    }

    #[test]
    fn test_role_scoped_routes_exclude_other_roles() {
        let table = RouteTable::standard();
        let route = table.find("/supervisor/my-students").unwrap();
        assert!(route.admits(Role::Supervisor));
        assert!(!route.admits(Role::Student));
        assert!(!route.admits(Role::Hod));
    }

    #[test]
    fn test_find_unknown_path_is_none() {
        let table = RouteTable::standard();
        assert!(table.find("/supervisor/reviews").is_none());
        assert!(table.find("/nope").is_none());
        assert!(table.find("").is_none());
    }

    #[test]
    fn test_register_replaces_existing_path() {
        let mut table = RouteTable::new();
        table.register(RouteDefinition::new("/x").for_roles([Role::Student]));
        table.register(RouteDefinition::new("/x").for_roles([Role::Hod]));

        assert_eq!(table.len(), 1);
        let route = table.find("/x").unwrap();
        assert!(route.admits(Role::Hod));
        assert!(!route.admits(Role::Student));
    }

    // ============== Broken-Link Regression Tests ==============

    // The supervisor menu once linked to /supervisor/reviews and the
    // payment-info routes were missing entirely. The single table fixes both.

    #[test]
    fn test_supervisor_payment_info_is_registered() {
        let table = RouteTable::standard();
        let route = table.find("/supervisor/payment-info").unwrap();
        assert!(route.admits(Role::Supervisor));
    }

    #[test]
    fn test_evaluator_payment_info_is_registered() {
        let table = RouteTable::standard();
        let route = table.find("/evaluator/payment-info").unwrap();
        assert!(route.admits(Role::Evaluator));
    }

    // ============== Consistency Invariant Tests ==============

    #[test]
    fn test_standard_table_passes_menu_verification() {
        let table = RouteTable::standard();
        assert!(table.verify_menus().is_ok());
    }

    #[test]
    fn test_verify_menus_reports_missing_route() {
        let mut table = RouteTable::new();
        // Deliberately empty: every menu target is missing
        let err = table.verify_menus().unwrap_err();
        assert!(matches!(err, MenuConsistencyError::MissingRoute { .. }));

        // Registering a wrong-role route flips the violation kind
        table.register(RouteDefinition::new("/student/dashboard").for_roles([Role::Hod]));
        let err = table.verify_menus().unwrap_err();
        match err {
            MenuConsistencyError::RoleNotAdmitted { role, path, .. } => {
                assert_eq!(role, "student");
                assert_eq!(path, "/student/dashboard");
            }
            other => panic!("expected RoleNotAdmitted, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let route = RouteDefinition::new("/hod/appeals").for_roles([Role::Hod]);
        let json = serde_json::to_string(&route).unwrap();
        assert!(json.contains("\"allowedRoles\":[\"hod\"]"));

        let back: RouteDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back.path, "/hod/appeals");
        assert!(back.admits(Role::Hod));
        assert!(!back.public);
    }
}
