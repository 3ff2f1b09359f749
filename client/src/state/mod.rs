//! Client-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `items` holds the cached collection and the add/edit form buffers. It is
//! owned by `ItemListClient` and only mutated after the server confirms.

pub mod items;
