//! # Doc Store Shared
//!
//! Shared types and data structures for the document store client. These are
//! plain data carriers with no transport dependencies, shared between the
//! client facade and application code.

pub mod bulk;
pub mod query;
pub mod write;

pub use bulk::{BulkItemResult, BulkOperation, BulkSummary};
pub use query::{QueryPredicate, SearchHit, SearchRequest};
pub use write::{RefreshPolicy, WriteOutcome, WriteReceipt};
