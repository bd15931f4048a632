//! Error types for the document store client.

mod store_error;

pub use store_error::StoreError;
