//! Local login session.
//!
//! Login here is a local gate, not real authentication: the credentials
//! are checked for presence only, no server round-trip happens and the
//! password is never stored. The logged-in identity is persisted in a
//! durable local store so it survives restarts.

mod controller;
mod sqlite;
mod store;

pub use controller::SessionController;
pub use sqlite::SqliteSessionStore;
pub use store::{Identity, SessionStore};

use thiserror::Error;

/// Display name used when nobody is logged in.
pub const GUEST_NAME: &str = "Guest";

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login input rejected (empty username or password).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying store failed.
    #[error("Session store error: {0}")]
    Store(String),
}
