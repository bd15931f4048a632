//! OpenSearch implementation of the document store.
//!
//! This module provides a concrete implementation of `DocumentStore`
//! using OpenSearch as the backend.

mod client;
mod index_settings;
mod queries;

pub use client::OpenSearchStore;
pub use index_settings::default_index_settings;
