//! In-memory session store for testing.

use std::sync::Mutex;

use crate::session::{Identity, SessionError, SessionStore};

/// In-memory implementation of the SessionStore trait.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    identity: Mutex<Option<Identity>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, identity: &Identity) -> Result<(), SessionError> {
        let mut slot = self
            .identity
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        *slot = Some(identity.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Identity>, SessionError> {
        let slot = self
            .identity
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self
            .identity
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
