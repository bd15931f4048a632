//! Write operation result types.

use serde::{Deserialize, Serialize};

/// Controls when a write becomes visible to subsequent reads.
///
/// The default is `Eventual`: the engine makes the write searchable at its
/// own refresh cadence, so a read issued immediately after the write may not
/// observe it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Force the write to be visible before the call returns.
    Immediate,
    /// Visibility at the engine's own refresh cadence.
    #[default]
    Eventual,
}

/// How the engine classified a completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// A new document was stored under the given id.
    Created,
    /// An existing document was replaced or modified.
    Updated,
    /// The document was removed.
    Deleted,
    /// The write changed nothing (e.g. a partial update with identical values).
    NoOp,
}

/// Receipt returned by single-document write operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReceipt {
    /// The document id the write applied to.
    pub id: String,
    /// How the engine classified the write.
    pub outcome: WriteOutcome,
}

impl WriteReceipt {
    /// Build a receipt for the given id and outcome.
    pub fn new(id: impl Into<String>, outcome: WriteOutcome) -> Self {
        Self {
            id: id.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_policy_default_is_eventual() {
        assert_eq!(RefreshPolicy::default(), RefreshPolicy::Eventual);
    }

    #[test]
    fn test_write_outcome_wire_names() {
        // The engine reports outcomes in its "result" response field.
        assert_eq!(
            serde_json::from_str::<WriteOutcome>("\"created\"").unwrap(),
            WriteOutcome::Created
        );
        assert_eq!(
            serde_json::from_str::<WriteOutcome>("\"updated\"").unwrap(),
            WriteOutcome::Updated
        );
        assert_eq!(
            serde_json::from_str::<WriteOutcome>("\"deleted\"").unwrap(),
            WriteOutcome::Deleted
        );
        assert_eq!(
            serde_json::from_str::<WriteOutcome>("\"noop\"").unwrap(),
            WriteOutcome::NoOp
        );
    }
}
