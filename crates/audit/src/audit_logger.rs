//! AuditLogger - bounded in-memory audit trail

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    /// Role string of the acting session, if authenticated
    pub role: Option<String>,
    /// Path involved, for navigation events
    pub path: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audit events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    Login,
    LoginRejected,
    Logout,
    NavigationAllowed,
    NavigationRedirected,
    NavigationNotFound,
}

/// Audit logger: a bounded ring buffer, oldest entries dropped first
#[derive(Debug)]
pub struct AuditLogger {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLogger {
    /// Create a new AuditLogger
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a successful login
    pub fn log_login(&mut self, role: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::Login,
            role: Some(role.to_string()),
            path: None,
            success: true,
            reason: None,
        });
    }

    /// Log a rejected login attempt
    pub fn log_login_rejected(&mut self, role: &str, reason: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::LoginRejected,
            role: Some(role.to_string()),
            path: None,
            success: false,
            reason: Some(reason.to_string()),
        });
    }

    /// Log a logout
    pub fn log_logout(&mut self, role: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::Logout,
            role: Some(role.to_string()),
            path: None,
            success: true,
            reason: None,
        });
    }

    /// Log a navigation attempt and its outcome
    pub fn log_navigation(
        &mut self,
        role: Option<&str>,
        path: &str,
        event_type: AuditEventType,
        reason: Option<&str>,
    ) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type,
            role: role.map(|r| r.to_string()),
            path: Some(path.to_string()),
            success: event_type == AuditEventType::NavigationAllowed,
            reason: reason.map(|s| s.to_string()),
        });
    }

    /// Get recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent denied events, newest first
    pub fn get_recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn get_stats(&self) -> AuditStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();

        AuditStats {
            total_entries: total,
            denial_count: denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }

    /// Write the trail to a JSON file
    pub fn export_to_file(&self, path: &std::path::Path) -> shared::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries.iter().collect::<Vec<_>>())?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_entries: usize,
    pub denial_count: usize,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(10000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_login() {
        let mut logger = AuditLogger::new(100);

        logger.log_login("student");

        let stats = logger.get_stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.denial_count, 0);

        let recent = logger.get_recent(1);
        assert_eq!(recent[0].event_type, AuditEventType::Login);
        assert_eq!(recent[0].role.as_deref(), Some("student"));
    }

    #[test]
    fn test_log_login_rejected_counts_as_denial() {
        let mut logger = AuditLogger::new(100);

        logger.log_login_rejected("student", "Missing required field 'email'");

        let stats = logger.get_stats();
        assert_eq!(stats.denial_count, 1);

        let denials = logger.get_recent_denials(10);
        assert_eq!(denials.len(), 1);
        assert!(denials[0].reason.as_ref().unwrap().contains("email"));
    }

    #[test]
    fn test_log_navigation_outcomes() {
        let mut logger = AuditLogger::new(100);

        logger.log_navigation(
            Some("student"),
            "/student/dashboard",
            AuditEventType::NavigationAllowed,
            None,
        );
        logger.log_navigation(
            Some("student"),
            "/hod/appeals",
            AuditEventType::NavigationRedirected,
            Some("redirect_to_default"),
        );
        logger.log_navigation(None, "/nowhere", AuditEventType::NavigationNotFound, None);

        let stats = logger.get_stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.denial_count, 2);

        let denials = logger.get_recent_denials(10);
        assert_eq!(denials[0].path.as_deref(), Some("/nowhere"));
        assert!(denials[0].role.is_none());
        assert_eq!(denials[1].path.as_deref(), Some("/hod/appeals"));
    }

    #[test]
    fn test_max_entries_limit() {
        let mut logger = AuditLogger::new(3);

        logger.log_navigation(Some("hod"), "/p1", AuditEventType::NavigationAllowed, None);
        logger.log_navigation(Some("hod"), "/p2", AuditEventType::NavigationAllowed, None);
        logger.log_navigation(Some("hod"), "/p3", AuditEventType::NavigationAllowed, None);
        logger.log_navigation(Some("hod"), "/p4", AuditEventType::NavigationAllowed, None);

        let stats = logger.get_stats();
        assert_eq!(stats.total_entries, 3);

        // Oldest entry should be removed
        let recent = logger.get_recent(10);
        let paths: Vec<_> = recent.iter().filter_map(|e| e.path.as_deref()).collect();
        assert!(!paths.contains(&"/p1"));
        assert!(paths.contains(&"/p4"));
    }

    #[test]
    fn test_get_recent_newest_first() {
        let mut logger = AuditLogger::new(100);

        logger.log_login("student");
        logger.log_logout("student");
        logger.log_login("hod");

        let recent = logger.get_recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].event_type, AuditEventType::Login);
        assert_eq!(recent[0].role.as_deref(), Some("hod"));
        assert_eq!(recent[1].event_type, AuditEventType::Logout);
    }

    #[test]
    fn test_export_json() {
        let mut logger = AuditLogger::new(100);

        logger.log_login("coordinator");
        logger.log_navigation(
            Some("coordinator"),
            "/coordinator/penalties",
            AuditEventType::NavigationAllowed,
            None,
        );

        let json = logger.export_json();
        assert!(json.is_array());
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["eventType"], "login");
        assert_eq!(entries[1]["path"], "/coordinator/penalties");
    }

    #[test]
    fn test_default_capacity() {
        let logger = AuditLogger::default();
        assert_eq!(logger.max_entries, 10000);
    }

    #[test]
    fn test_export_to_file() {
        let mut logger = AuditLogger::new(100);
        logger.log_login("hod");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.json");
        logger.export_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json[0]["role"], "hod");
    }
}
