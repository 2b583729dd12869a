//! Session storage trait and types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionError;

/// The logged-in identity. Created at login, destroyed at logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    /// Name shown in the UI.
    pub display_name: String,
    /// When the login happened.
    pub logged_in_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            logged_in_at: Utc::now(),
        }
    }
}

/// Trait for durable session storage backends.
///
/// Holds at most one identity; absence means "no identity".
pub trait SessionStore: Send + Sync {
    /// Persist the identity, replacing any previous one.
    fn save(&self, identity: &Identity) -> Result<(), SessionError>;

    /// Read back the persisted identity, if any.
    fn load(&self) -> Result<Option<Identity>, SessionError>;

    /// Remove the persisted identity.
    fn clear(&self) -> Result<(), SessionError>;
}
