//! # Doc Store Repository
//!
//! This crate provides the client surface for a remote document store. It
//! includes definitions for connection configuration, errors, the abstract
//! `DocumentStore` interface, a validating client facade, and a concrete
//! implementation for OpenSearch.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use client::DocStoreClient;
pub use config::{ConnectionConfig, StoreConfig};
pub use errors::StoreError;
pub use interfaces::DocumentStore;

pub use crate::opensearch::OpenSearchStore;
