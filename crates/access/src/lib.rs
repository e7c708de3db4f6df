//! # FYP Portal Access
//!
//! Role-based access control and navigation for the FYP dashboard.
//!
//! ## Components
//!
//! - `RouteTable` - Single source of truth for route definitions
//! - `can_access` - Route guard producing a `Decision`
//! - `menu_for` - Ordered per-role navigation menus

pub mod guard;
pub mod menu;
pub mod route;

pub use guard::{can_access, Decision};
pub use menu::{menu_for, menu_for_name, MenuEntry, MenuIcon};
pub use route::{RouteDefinition, RouteTable, DEFAULT_PATH, LOGIN_PATH};
