//! Item store — the in-memory collection behind `/items/`.
//!
//! DESIGN
//! ======
//! A plain `Vec` in insertion order plus a monotonically increasing id
//! counter starting at 1. Ids are never reused within a process; everything
//! resets on restart.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound(i64),
}

/// A stored item. Serialized as the public item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body accepted by create and update; the id is never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// # Errors
    ///
    /// Returns [`ItemError::NotFound`] for an unknown id.
    pub fn get(&self, id: i64) -> Result<Item, ItemError> {
        self.items.iter().find(|item| item.id == id).cloned().ok_or(ItemError::NotFound(id))
    }

    pub fn create(&mut self, body: ItemCreate) -> Item {
        let item = Item { id: self.next_id, name: body.name, description: body.description, completed: body.completed };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Replace all mutable fields of item `id`, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NotFound`] for an unknown id.
    pub fn update(&mut self, id: i64, body: ItemCreate) -> Result<Item, ItemError> {
        let item = self.items.iter_mut().find(|item| item.id == id).ok_or(ItemError::NotFound(id))?;
        item.name = body.name;
        item.description = body.description;
        item.completed = body.completed;
        Ok(item.clone())
    }

    /// # Errors
    ///
    /// Returns [`ItemError::NotFound`] if nothing was removed.
    pub fn delete(&mut self, id: i64) -> Result<(), ItemError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }
}
