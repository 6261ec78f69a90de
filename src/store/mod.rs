//! Local persistent key-value store.
//!
//! User-generated data (plan, feedback, deal reviews, chat, notes, check
//! counter and search history) lives under a handful of string keys. Values
//! are JSON strings; [`load_json`] and [`save_json`] add typing on top.
//!
//! - [`JsonFileStore`] keeps one JSON object in `store.json`
//! - [`MemoryStore`] backs tests and `--ephemeral` runs

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

// ============================================================================
// Keys
// ============================================================================

/// Store keys used by the application.
pub mod keys {
    /// Active subscription plan id.
    pub const PLAN: &str = "loupe-plan";
    /// App feedback left by the user.
    pub const USER_REVIEW: &str = "userReview";
    /// Deal reviews keyed by deal id.
    pub const DEAL_REVIEWS: &str = "loupe-deal-reviews";
    pub const TEAM_CHAT: &str = "loupe-team-chat";
    pub const TEAM_NOTES: &str = "loupe-team-notes";
    /// Number of counterparty lookups performed.
    pub const CHECKS: &str = "loupe-checks";
    pub const SEARCH_HISTORY: &str = "loupe-search-history";
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    #[error("Store file {path} is corrupt: {message}")]
    Corrupt {
        path: PathBuf,
        message: String,
    },

    /// A stored value could not be (de)serialized.
    #[error("Value for '{key}' is invalid: {source}")]
    Value {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    #[must_use]
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Trait
// ============================================================================

/// String key-value storage.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// Typed Helpers
// ============================================================================

/// Reads and deserializes the JSON value stored under `key`.
///
/// # Errors
///
/// Returns `StoreError::Value` when the stored string is not valid JSON
/// for `T`, or any error of the underlying store.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StoreError::Value {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
}

/// Serializes `value` to JSON and stores it under `key`.
///
/// # Errors
///
/// Returns `StoreError::Value` when serialization fails, or any error of
/// the underlying store.
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Value {
        key: key.to_string(),
        source,
    })?;
    tracing::debug!(key, bytes = raw.len(), "store write");
    store.set(key, &raw)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use std::collections::HashMap;

    #[test]
    fn test_typed_round_trip() {
        let mut store = MemoryStore::default();
        save_json(&mut store, keys::PLAN, &Plan::Basic).unwrap();
        assert_eq!(store.get(keys::PLAN).unwrap().as_deref(), Some("\"basic\""));
        let plan: Option<Plan> = load_json(&store, keys::PLAN).unwrap();
        assert_eq!(plan, Some(Plan::Basic));
    }

    #[test]
    fn test_missing_key_loads_none() {
        let store = MemoryStore::default();
        let reviews: Option<HashMap<String, String>> =
            load_json(&store, keys::DEAL_REVIEWS).unwrap();
        assert!(reviews.is_none());
    }

    #[test]
    fn test_invalid_value_is_reported_with_key() {
        let mut store = MemoryStore::default();
        store.set(keys::CHECKS, "not a number").unwrap();
        let err = load_json::<u32>(&store, keys::CHECKS).unwrap_err();
        assert!(matches!(err, StoreError::Value { ref key, .. } if key == keys::CHECKS));
    }
}
