//! Item list controller: command methods over `ClientState`.
//!
//! DESIGN
//! ======
//! Each command issues at most one remote call and mutates local state only
//! after the server confirms. A failed call leaves `items` exactly as it was,
//! so the list stays a stale-but-consistent mirror of the server.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures are logged here, at the call site, and returned to the
//! caller. Nothing is retried. Local precondition failures (empty name, no
//! edit in progress, unknown id) are rejected before any request is sent.
//!
//! Every mutating command takes `&mut self`, so the owner serializes all
//! changes. Overlapping submissions are the host's concern; if it manages to
//! interleave them, the last response to land wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{ApiError, ItemsApi};
use crate::net::types::{Item, ItemId, ItemPayload};
use crate::state::items::{ClientState, Draft, EditingItem};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Remote(#[from] ApiError),
    #[error("item name is required")]
    EmptyName,
    #[error("no item is being edited")]
    NotEditing,
    #[error("item {0} is not in the list")]
    UnknownItem(ItemId),
}

/// Owns the local item state and the API it mirrors.
pub struct ItemListClient<A> {
    api: A,
    state: ClientState,
    mounted: bool,
}

fn logged<T>(result: Result<T, ApiError>, action: &'static str) -> Result<T, ApiError> {
    if let Err(e) = &result {
        tracing::error!(error = %e, action, "remote call failed");
    }
    result
}

impl<A: ItemsApi> ItemListClient<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api, state: ClientState::default(), mounted: false }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.state.draft_new
    }

    #[must_use]
    pub fn editing(&self) -> Option<&EditingItem> {
        self.state.editing.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // =========================================================================
    // LIST
    // =========================================================================

    /// Initial load. Only the first call reaches the server, even if it fails.
    ///
    /// # Errors
    ///
    /// Returns the remote failure of the initial list call.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.refresh().await
    }

    /// Replace `items` with the server's full listing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`]; `items` keeps its previous value.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let items = logged(self.api.list().await, "fetching items")?;
        tracing::debug!(count = items.len(), "items fetched");
        self.state.replace_items(items);
        Ok(())
    }

    /// Read a single item without touching local state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] if the server has no such item.
    pub async fn fetch(&self, id: ItemId) -> Result<Item, ClientError> {
        Ok(logged(self.api.get(id).await, "fetching item")?)
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    pub fn set_draft_name(&mut self, name: &str) {
        name.clone_into(&mut self.state.draft_new.name);
    }

    pub fn set_draft_description(&mut self, description: &str) {
        description.clone_into(&mut self.state.draft_new.description);
    }

    /// Create an item and append the server's copy to the end of the list.
    ///
    /// On success the draft is cleared; on failure it is left untouched so the
    /// user's input is not lost.
    ///
    /// # Errors
    ///
    /// [`ClientError::EmptyName`] before any request, or the remote failure.
    pub async fn create(&mut self, name: &str, description: &str) -> Result<Item, ClientError> {
        if name.is_empty() {
            tracing::warn!("item name is required; create skipped");
            return Err(ClientError::EmptyName);
        }

        let payload = ItemPayload::new_item(name, description);
        let created = logged(self.api.create(&payload).await, "adding item")?;
        tracing::info!(id = %created.id, "item created");

        self.state.append_item(created.clone());
        self.state.draft_new.clear();
        Ok(created)
    }

    /// Create from the current draft values.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    pub async fn submit_draft(&mut self) -> Result<Item, ClientError> {
        let Draft { name, description } = self.state.draft_new.clone();
        self.create(&name, &description).await
    }

    // =========================================================================
    // EDIT
    // =========================================================================

    /// Put the listed item with `id` into edit mode, replacing any other edit.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnknownItem`] when `id` is not in the local list.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<(), ClientError> {
        let item = self.state.find(id).cloned().ok_or(ClientError::UnknownItem(id))?;
        self.state.begin_edit(&item);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// # Errors
    ///
    /// [`ClientError::NotEditing`] when no edit is in progress.
    pub fn set_edit_name(&mut self, name: &str) -> Result<(), ClientError> {
        let editing = self.state.editing.as_mut().ok_or(ClientError::NotEditing)?;
        name.clone_into(&mut editing.name);
        Ok(())
    }

    /// # Errors
    ///
    /// [`ClientError::NotEditing`] when no edit is in progress.
    pub fn set_edit_description(&mut self, description: &str) -> Result<(), ClientError> {
        let editing = self.state.editing.as_mut().ok_or(ClientError::NotEditing)?;
        description.clone_into(&mut editing.description);
        Ok(())
    }

    /// # Errors
    ///
    /// [`ClientError::NotEditing`] when no edit is in progress.
    pub fn set_edit_completed(&mut self, completed: bool) -> Result<(), ClientError> {
        let editing = self.state.editing.as_mut().ok_or(ClientError::NotEditing)?;
        editing.completed = completed;
        Ok(())
    }

    /// Replace the three mutable fields of item `id` on the server.
    ///
    /// The attempted values become the edit buffer first, so a failed call
    /// leaves them in place for a retry or cancel.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_edit`].
    pub async fn update(
        &mut self,
        id: ItemId,
        name: &str,
        description: &str,
        completed: bool,
    ) -> Result<Item, ClientError> {
        self.state.editing =
            Some(EditingItem { id, name: name.to_owned(), description: description.to_owned(), completed });
        self.submit_edit().await
    }

    /// Send the edit buffer. On success the matching entry is replaced with
    /// the server's copy and edit mode ends.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotEditing`], [`ClientError::EmptyName`], or the remote
    /// failure (edit buffer kept, `items` unchanged).
    pub async fn submit_edit(&mut self) -> Result<Item, ClientError> {
        let editing = self.state.editing.clone().ok_or(ClientError::NotEditing)?;
        if editing.name.is_empty() {
            tracing::warn!(id = %editing.id, "item name is required; update skipped");
            return Err(ClientError::EmptyName);
        }

        let updated = logged(self.api.update(editing.id, &editing.payload()).await, "updating item")?;
        if !self.state.replace_item(editing.id, updated.clone()) {
            tracing::warn!(id = %editing.id, "updated item was not in the local list");
        }
        self.state.cancel_edit();
        tracing::info!(id = %editing.id, "item updated");
        Ok(updated)
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Remove item `id` on the server, then locally.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; the item stays in `items`.
    pub async fn delete(&mut self, id: ItemId) -> Result<(), ClientError> {
        logged(self.api.delete(id).await, "deleting item")?;
        self.state.remove_item(id);
        tracing::info!(%id, "item deleted");
        Ok(())
    }
}
