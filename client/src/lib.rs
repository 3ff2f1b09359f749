//! Item list client: a local mirror of a remote item collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net` talks to the collection resource, `state` holds the cached list and
//! form buffers, and `controller` ties them together behind command methods
//! that a rendering surface (the `cli` crate) binds user input to.

pub mod config;
pub mod controller;
pub mod net;
pub mod state;

pub use config::ClientConfig;
pub use controller::{ClientError, ItemListClient};
pub use net::api::{ApiError, HttpItemsApi, ItemsApi};
pub use net::types::{Item, ItemId, ItemPayload};
