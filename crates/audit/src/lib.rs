//! # FYP Portal Audit
//!
//! In-memory audit trail of logins, logouts, and navigation decisions.

mod audit_logger;

pub use audit_logger::{AuditEntry, AuditEventType, AuditLogger, AuditStats};
