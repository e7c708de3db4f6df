//! # FYP Portal Core
//!
//! The integration layer the presentation layer talks to: one object wiring
//! the session manager, route table, guard, menus, and audit trail.

mod portal_core;

pub use portal_core::{NavigationOutcome, PortalConfig, PortalCore};
