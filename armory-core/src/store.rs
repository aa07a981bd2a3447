use crate::item::Item;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One inventory container: a character's inventory or the shared vault.
/// Owned by the application shell; the popup core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_vault: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Store {
    /// Total item count, for capacity displays.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Root of the serialized inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InventoryData {
    pub stores: Vec<Store>,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to parse inventory data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("inventory data contains no stores")]
    Empty,
}

impl InventoryData {
    /// Create empty inventory data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self { stores: Vec::new() }
    }

    /// Parse an inventory snapshot from JSON.
    ///
    /// # Errors
    /// Returns an error when the JSON is malformed or holds no stores.
    pub fn from_json(raw: &str) -> Result<Self, InventoryError> {
        let data: Self = serde_json::from_str(raw)?;
        if data.stores.is_empty() {
            return Err(InventoryError::Empty);
        }
        Ok(data)
    }
}
