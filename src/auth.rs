//! Admin session gate
//!
//! A placeholder-grade gate, not a security boundary: one boolean
//! "authenticated" flag, set by a credential check and persisted alongside
//! the tournament data. The credential check sits behind [`AuthProvider`]
//! so a real credential store can replace the static literals without
//! touching callers.

use crate::store::keystore::{Keystore, KEY_SESSION};
use tokio::sync::RwLock;

/// Verifies admin credentials
pub trait AuthProvider: Send + Sync {
    /// Check a username/password pair
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Compares against a fixed username/password pair
#[derive(Debug, Clone)]
pub struct StaticAuthProvider {
    username: String,
    password: String,
}

impl StaticAuthProvider {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticAuthProvider {
    fn default() -> Self {
        // The site's historical hardcoded admin credentials
        Self::new("ftaco698", "Sasuke01")
    }
}

impl AuthProvider for StaticAuthProvider {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// The admin's authenticated-or-not status for this deployment
///
/// No expiry and no token: the flag is hydrated from the keystore on open
/// and persisted on login/logout.
pub struct SessionGate {
    provider: Box<dyn AuthProvider>,
    keystore: Keystore,
    authenticated: RwLock<bool>,
}

impl SessionGate {
    /// Open the gate, hydrating the persisted session flag if present
    pub fn open(keystore: Keystore, provider: Box<dyn AuthProvider>) -> Self {
        let authenticated = keystore.load::<bool>(KEY_SESSION).unwrap_or(false);
        if authenticated {
            tracing::info!("Restored persisted admin session");
        }

        Self {
            provider,
            keystore,
            authenticated: RwLock::new(authenticated),
        }
    }

    /// Attempt a login; on success the flag is set and persisted
    pub async fn login(&self, username: &str, password: &str) -> bool {
        if !self.provider.verify(username, password) {
            tracing::warn!(username, "Rejected admin login");
            return false;
        }

        *self.authenticated.write().await = true;
        self.keystore.save(KEY_SESSION, &true);
        tracing::info!(username, "Admin logged in");
        true
    }

    /// Clear the flag and the persisted record
    pub async fn logout(&self) {
        *self.authenticated.write().await = false;
        self.keystore.clear(KEY_SESSION);
        tracing::info!("Admin logged out");
    }

    /// Whether the admin session is active
    pub async fn is_authenticated(&self) -> bool {
        *self.authenticated.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_gate(dir: &std::path::Path) -> SessionGate {
        SessionGate::open(
            Keystore::open(dir).unwrap(),
            Box::new(StaticAuthProvider::default()),
        )
    }

    #[tokio::test]
    async fn test_correct_credentials_login() {
        let dir = tempdir().unwrap();
        let gate = open_gate(dir.path());

        assert!(!gate.is_authenticated().await);
        assert!(gate.login("ftaco698", "Sasuke01").await);
        assert!(gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected() {
        let dir = tempdir().unwrap();
        let gate = open_gate(dir.path());

        assert!(!gate.login("ftaco698", "wrong").await);
        assert!(!gate.login("admin", "Sasuke01").await);
        assert!(!gate.login("", "").await);
        assert!(!gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_session_persists_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let gate = open_gate(dir.path());
            assert!(gate.login("ftaco698", "Sasuke01").await);
        }

        let gate = open_gate(dir.path());
        assert!(gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_flag_and_record() {
        let dir = tempdir().unwrap();

        {
            let gate = open_gate(dir.path());
            gate.login("ftaco698", "Sasuke01").await;
            gate.logout().await;
            assert!(!gate.is_authenticated().await);
        }

        let gate = open_gate(dir.path());
        assert!(!gate.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_custom_provider() {
        let dir = tempdir().unwrap();
        let gate = SessionGate::open(
            Keystore::open(dir.path()).unwrap(),
            Box::new(StaticAuthProvider::new("race-admin", "s3cret")),
        );

        assert!(!gate.login("ftaco698", "Sasuke01").await);
        assert!(gate.login("race-admin", "s3cret").await);
    }
}
