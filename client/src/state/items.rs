//! Local projection of the item collection plus the two form buffers.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and infallible with respect to the
//! network. The controller calls these helpers only after the server has
//! confirmed a change, so `items` never holds an entry the server did not
//! return.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::types::{Item, ItemId, ItemPayload};

/// Pending values for the "add item" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
}

impl Draft {
    /// Whether the draft may be submitted. Only the name is required.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
    }
}

/// Field values of the item currently in edit mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditingItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl EditingItem {
    /// Copy an item's fields into an edit buffer.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description_text().to_owned(),
            completed: item.completed,
        }
    }

    /// Full-replacement body for `PUT /items/{id}`.
    #[must_use]
    pub fn payload(&self) -> ItemPayload {
        ItemPayload { name: self.name.clone(), description: self.description.clone(), completed: self.completed }
    }
}

/// State owned by one item-list controller.
#[derive(Clone, Debug, Default)]
pub struct ClientState {
    /// Items in server return order.
    pub items: Vec<Item>,
    pub draft_new: Draft,
    /// At most one item is in edit mode.
    pub editing: Option<EditingItem>,
}

impl ClientState {
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the whole list with a fresh server listing.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Append a newly created item at the end.
    pub fn append_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replace the entry with `id` by `item`. Returns whether one was found.
    pub fn replace_item(&mut self, id: ItemId, item: Item) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    /// Remove every entry with `id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Put `item` into edit mode, replacing any edit already in progress.
    pub fn begin_edit(&mut self, item: &Item) {
        self.editing = Some(EditingItem::from_item(item));
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
