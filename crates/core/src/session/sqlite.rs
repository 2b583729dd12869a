//! SQLite-backed session store implementation.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use super::store::{Identity, SessionStore};
use super::SessionError;

/// Key under which the identity record is stored.
const IDENTITY_KEY: &str = "identity";

/// SQLite-backed session store.
///
/// A single-row key-value table holding one JSON-serialized identity.
pub struct SqliteSessionStore {
    conn: Mutex<Connection>,
}

impl SqliteSessionStore {
    /// Open (or create) the session store at the given path.
    pub fn new(path: &Path) -> Result<Self, SessionError> {
        let conn = Connection::open(path).map_err(|e| SessionError::Store(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory session store (useful for testing).
    pub fn in_memory() -> Result<Self, SessionError> {
        let conn = Connection::open_in_memory().map_err(|e| SessionError::Store(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), SessionError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS session (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(())
    }
}

impl SessionStore for SqliteSessionStore {
    fn save(&self, identity: &Identity) -> Result<(), SessionError> {
        let value =
            serde_json::to_string(identity).map_err(|e| SessionError::Store(e.to_string()))?;
        let conn = self.conn.lock().map_err(|e| SessionError::Store(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO session (key, value) VALUES (?1, ?2)",
            params![IDENTITY_KEY, value],
        )
        .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Identity>, SessionError> {
        let conn = self.conn.lock().map_err(|e| SessionError::Store(e.to_string()))?;
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM session WHERE key = ?1",
                params![IDENTITY_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| SessionError::Store(e.to_string()))?;

        match value {
            Some(json) => {
                let identity = serde_json::from_str(&json)
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                Ok(Some(identity))
            }
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        let conn = self.conn.lock().map_err(|e| SessionError::Store(e.to_string()))?;
        conn.execute(
            "DELETE FROM session WHERE key = ?1",
            params![IDENTITY_KEY],
        )
        .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(())
    }
}
