//! Logger interface for dependency injection

use std::sync::Mutex;

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Simple console logger implementation
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("[DEBUG] {}", message);
    }

    fn info(&self, message: &str) {
        eprintln!("[INFO] {}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Logger that records messages, for asserting on log output in tests
#[derive(Debug, Default)]
pub struct CapturingLogger {
    messages: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("logger mutex poisoned").clone()
    }

    fn push(&self, level: &str, message: &str) {
        self.messages
            .lock()
            .expect("logger mutex poisoned")
            .push(format!("[{}] {}", level, message));
    }
}

impl Logger for CapturingLogger {
    fn debug(&self, message: &str) {
        self.push("DEBUG", message);
    }

    fn info(&self, message: &str) {
        self.push("INFO", message);
    }

    fn warn(&self, message: &str) {
        self.push("WARN", message);
    }

    fn error(&self, message: &str) {
        self.push("ERROR", message);
    }
}
