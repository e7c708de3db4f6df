//! CredentialVerifier - the seam where a real credential backend plugs in

use async_trait::async_trait;
use shared::AuthError;
use std::time::Duration;

/// Verifies submitted credentials.
///
/// Two outcomes only: success, or an `AuthError` the login form can render.
/// A real implementation would call an identity service here; the session
/// manager does not care which one is behind the trait.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Demo verifier: accepts any non-empty credentials after a simulated
/// network round trip. Password content is never inspected.
#[derive(Debug, Clone)]
pub struct AcceptAllVerifier {
    latency: Duration,
}

impl AcceptAllVerifier {
    /// Default simulated round-trip latency
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (tests use zero)
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for AcceptAllVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialVerifier for AcceptAllVerifier {
    async fn verify(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }
}
