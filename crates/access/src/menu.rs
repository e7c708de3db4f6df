//! Menu derivation - Ordered per-role navigation menus

use serde::Serialize;
use shared::{EvaluatorKind, Role};

/// Symbolic icon reference, opaque to the guard; the rendering layer maps
/// these to its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuIcon {
    LayoutDashboard,
    Upload,
    Calendar,
    Megaphone,
    HelpCircle,
    Users,
    CheckCircle,
    Shield,
    CreditCard,
    FileText,
    Award,
    BarChart3,
}

impl MenuIcon {
    /// Kebab-case icon name as the rendering layer expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuIcon::LayoutDashboard => "layout-dashboard",
            MenuIcon::Upload => "upload",
            MenuIcon::Calendar => "calendar",
            MenuIcon::Megaphone => "megaphone",
            MenuIcon::HelpCircle => "help-circle",
            MenuIcon::Users => "users",
            MenuIcon::CheckCircle => "check-circle",
            MenuIcon::Shield => "shield",
            MenuIcon::CreditCard => "credit-card",
            MenuIcon::FileText => "file-text",
            MenuIcon::Award => "award",
            MenuIcon::BarChart3 => "bar-chart-3",
        }
    }
}

/// One navigable item in a role's ordered navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub target_path: &'static str,
}

const fn entry(label: &'static str, icon: MenuIcon, target_path: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        icon,
        target_path,
    }
}

/// Derive the ordered navigation menu for a role.
///
/// Deterministic and side-effect-free; each role's list is independently
/// authored, with no inheritance between roles. Order is part of the
/// contract. For evaluators, the schedule entry is labeled "Final Defenses"
/// when the kind is external; paths never vary by kind.
pub fn menu_for(role: Role, kind: Option<EvaluatorKind>) -> Vec<MenuEntry> {
    match role {
        Role::Student => vec![
            entry("Dashboard", MenuIcon::LayoutDashboard, "/student/dashboard"),
            entry("Work & Progress", MenuIcon::Upload, "/student/submissions"),
            entry(
                "Defense Schedule",
                MenuIcon::Calendar,
                "/student/defense-schedule",
            ),
            entry(
                "Announcements",
                MenuIcon::Megaphone,
                "/student/announcements",
            ),
            entry("Guidelines", MenuIcon::HelpCircle, "/student/guidelines"),
        ],

        Role::Supervisor => vec![
            entry(
                "Dashboard",
                MenuIcon::LayoutDashboard,
                "/supervisor/dashboard",
            ),
            entry("My Students", MenuIcon::Users, "/supervisor/my-students"),
            entry(
                "Reviews & Approvals",
                MenuIcon::CheckCircle,
                "/supervisor/pending-reviews",
            ),
            entry("Escalations", MenuIcon::Shield, "/supervisor/escalations"),
            entry(
                "Payment Information",
                MenuIcon::CreditCard,
                "/supervisor/payment-info",
            ),
            entry("Guidelines", MenuIcon::HelpCircle, "/supervisor/guidelines"),
        ],

        Role::Coordinator => vec![
            entry(
                "Dashboard",
                MenuIcon::LayoutDashboard,
                "/coordinator/dashboard",
            ),
            entry(
                "Defense Schedule",
                MenuIcon::Calendar,
                "/coordinator/defense-schedule",
            ),
            entry(
                "Monthly Logs",
                MenuIcon::FileText,
                "/coordinator/monthly-logs",
            ),
            entry(
                "Participant Payments",
                MenuIcon::Users,
                "/coordinator/participant-payments",
            ),
            entry("Penalties", MenuIcon::Award, "/coordinator/penalties"),
            entry(
                "Compile Results",
                MenuIcon::BarChart3,
                "/coordinator/compile-results",
            ),
            entry(
                "Announcements",
                MenuIcon::Megaphone,
                "/coordinator/announcements",
            ),
            entry(
                "Guidelines",
                MenuIcon::HelpCircle,
                "/coordinator/guidelines",
            ),
        ],

        Role::Hod => vec![
            entry("Dashboard", MenuIcon::LayoutDashboard, "/hod/dashboard"),
            entry("Appeals", MenuIcon::FileText, "/hod/appeals"),
            entry("Escalations", MenuIcon::Shield, "/hod/escalations"),
            entry(
                "Results Management",
                MenuIcon::CheckCircle,
                "/hod/result-approval",
            ),
            entry("Analytics", MenuIcon::BarChart3, "/hod/analytics"),
            entry("Guidelines", MenuIcon::HelpCircle, "/hod/guidelines"),
        ],

        Role::Evaluator => {
            let schedule_label = match kind {
                Some(EvaluatorKind::External) => "Final Defenses",
                _ => "Defense Schedule",
            };
            vec![
                entry(
                    "Dashboard",
                    MenuIcon::LayoutDashboard,
                    "/evaluator/dashboard",
                ),
                entry(
                    schedule_label,
                    MenuIcon::Calendar,
                    "/evaluator/defense-schedule",
                ),
                entry(
                    "Evaluations",
                    MenuIcon::CheckCircle,
                    "/evaluator/evaluations",
                ),
                entry(
                    "Payment Information",
                    MenuIcon::CreditCard,
                    "/evaluator/payment-info",
                ),
                entry("Guidelines", MenuIcon::HelpCircle, "/evaluator/guidelines"),
            ]
        }
    }
}

/// Menu derivation over an arbitrary role string.
///
/// Fail-safe: a value outside the closed role set yields an empty menu
/// rather than a guess. No navigation beats the wrong navigation.
pub fn menu_for_name(role: &str, kind: Option<EvaluatorKind>) -> Vec<MenuEntry> {
    match Role::parse(role) {
        Some(r) => menu_for(r, kind),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Coverage Tests ==============

    #[test]
    fn test_every_role_has_a_menu() {
        for role in Role::ALL {
            assert!(!menu_for(role, None).is_empty(), "{} menu empty", role);
        }
    }

    #[test]
    fn test_unknown_role_name_yields_empty_menu() {
        assert!(menu_for_name("admin", None).is_empty());
        assert!(menu_for_name("", None).is_empty());
        assert!(menu_for_name("STUDENT", None).is_empty());
    }

    #[test]
    fn test_known_role_name_matches_typed_menu() {
        assert_eq!(menu_for_name("hod", None), menu_for(Role::Hod, None));
    }

    // ============== Determinism & Order Tests ==============

    #[test]
    fn test_menu_is_deterministic() {
        for role in Role::ALL {
            assert_eq!(menu_for(role, None), menu_for(role, None));
        }
        assert_eq!(
            menu_for(Role::Evaluator, Some(EvaluatorKind::External)),
            menu_for(Role::Evaluator, Some(EvaluatorKind::External))
        );
    }

    #[test]
    fn test_coordinator_menu_fixed_order() {
        let labels: Vec<_> = menu_for(Role::Coordinator, None)
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Defense Schedule",
                "Monthly Logs",
                "Participant Payments",
                "Penalties",
                "Compile Results",
                "Announcements",
                "Guidelines",
            ]
        );
    }

    #[test]
    fn test_menu_sizes() {
        assert_eq!(menu_for(Role::Student, None).len(), 5);
        assert_eq!(menu_for(Role::Supervisor, None).len(), 6);
        assert_eq!(menu_for(Role::Coordinator, None).len(), 8);
        assert_eq!(menu_for(Role::Hod, None).len(), 6);
        assert_eq!(menu_for(Role::Evaluator, None).len(), 5);
    }

    #[test]
    fn test_every_entry_first_is_dashboard() {
        for role in Role::ALL {
            let menu = menu_for(role, None);
            assert_eq!(menu[0].label, "Dashboard");
            assert_eq!(menu[0].icon, MenuIcon::LayoutDashboard);
            assert_eq!(menu[0].target_path, role.dashboard_path());
        }
    }

    // ============== Evaluator Label Branch Tests ==============

    #[test]
    fn test_external_evaluator_sees_final_defenses() {
        let menu = menu_for(Role::Evaluator, Some(EvaluatorKind::External));
        assert_eq!(menu[1].label, "Final Defenses");
        assert_eq!(menu[1].target_path, "/evaluator/defense-schedule");
    }

    #[test]
    fn test_internal_and_missing_kind_see_defense_schedule() {
        for kind in [Some(EvaluatorKind::Internal), None] {
            let menu = menu_for(Role::Evaluator, kind);
            assert_eq!(menu[1].label, "Defense Schedule");
        }
    }

    #[test]
    fn test_evaluator_menus_differ_only_in_schedule_label() {
        let internal = menu_for(Role::Evaluator, Some(EvaluatorKind::Internal));
        let external = menu_for(Role::Evaluator, Some(EvaluatorKind::External));

        assert_eq!(internal.len(), external.len());
        for (i, (a, b)) in internal.iter().zip(&external).enumerate() {
            assert_eq!(a.target_path, b.target_path);
            assert_eq!(a.icon, b.icon);
            if i == 1 {
                assert_ne!(a.label, b.label);
            } else {
                assert_eq!(a.label, b.label);
            }
        }
    }

    #[test]
    fn test_kind_irrelevant_for_other_roles() {
        for role in [Role::Student, Role::Supervisor, Role::Coordinator, Role::Hod] {
            assert_eq!(
                menu_for(role, Some(EvaluatorKind::External)),
                menu_for(role, None)
            );
        }
    }

    // ============== Serialization Tests ==============

    #[test]
    fn test_menu_entry_serializes_camel_case() {
        let json = serde_json::to_value(menu_for(Role::Student, None)).unwrap();
        assert_eq!(json[0]["label"], "Dashboard");
        assert_eq!(json[0]["icon"], "layout_dashboard");
        assert_eq!(json[0]["targetPath"], "/student/dashboard");
    }

    #[test]
    fn test_icon_names_are_kebab_case() {
        assert_eq!(MenuIcon::LayoutDashboard.as_str(), "layout-dashboard");
        assert_eq!(MenuIcon::BarChart3.as_str(), "bar-chart-3");
    }
}
