//! In-memory timetable result store.
//!
//! Maps opaque string identifiers to generated timetable documents.
//! Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`,
//! held in the application state, and shared across request handlers.
//!
//! The store only grows: there is no update, delete, eviction, or TTL.
//! Entries live exactly as long as the process. Unbounded growth is an
//! accepted limitation of the current deployment scale.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Identifier-keyed retention mapping for generated timetables.
pub struct TimetableStore {
    timetables: RwLock<HashMap<String, Value>>,
}

impl TimetableStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            timetables: RwLock::new(HashMap::new()),
        }
    }

    /// Insert `timetable` under a freshly minted identifier and return it.
    ///
    /// Minting and insertion happen under a single write-lock acquisition,
    /// so concurrent puts always produce distinct, fully inserted entries.
    /// Identifiers are never reused for the life of the process.
    pub async fn put(&self, timetable: Value) -> String {
        let id = Uuid::new_v4().to_string();
        self.timetables.write().await.insert(id.clone(), timetable);
        id
    }

    /// Look up a stored timetable by identifier.
    ///
    /// Returns `None` for unknown identifiers; the HTTP boundary maps
    /// that to a 404 response.
    pub async fn get(&self, id: &str) -> Option<Value> {
        self.timetables.read().await.get(id).cloned()
    }

    /// Number of stored timetables.
    pub async fn len(&self) -> usize {
        self.timetables.read().await.len()
    }

    /// Whether the store holds no timetables.
    pub async fn is_empty(&self) -> bool {
        self.timetables.read().await.is_empty()
    }
}

impl Default for TimetableStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
