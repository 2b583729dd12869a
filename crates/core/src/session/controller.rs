//! The session controller.

use std::sync::Arc;

use super::store::{Identity, SessionStore};
use super::{SessionError, GUEST_NAME};

/// Owns the logged-in identity and is the single read path for it.
///
/// Every consumer goes through [`current_identity`] instead of reading
/// the store directly; the store is consulted on every call, never cached.
///
/// [`current_identity`]: SessionController::current_identity
pub struct SessionController {
    store: Arc<dyn SessionStore>,
}

impl SessionController {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Log in with the given credentials.
    ///
    /// Fails with a validation error when either field is empty after
    /// trimming. There is no credential verification beyond that and the
    /// password is never persisted.
    pub fn login(&self, username: &str, password: &str) -> Result<Identity, SessionError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(SessionError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let identity = Identity::new(username);
        self.store.save(&identity)?;
        Ok(identity)
    }

    /// Remove the persisted identity. Subsequent reads return none.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    /// Read the current identity from the store.
    pub fn current_identity(&self) -> Result<Option<Identity>, SessionError> {
        self.store.load()
    }

    /// Display name of the current identity, or the guest placeholder.
    pub fn display_name(&self) -> String {
        self.current_identity()
            .ok()
            .flatten()
            .map(|identity| identity.display_name)
            .unwrap_or_else(|| GUEST_NAME.to_string())
    }
}
