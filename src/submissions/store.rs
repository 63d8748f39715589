//! In-memory submission storage.
//!
//! # Responsibilities
//! - Own the ordered sequence of accepted submissions
//! - Append-only writes; insertion order is arrival order
//! - Snapshot reads for the listing endpoint
//!
//! # Design Decisions
//! - Explicitly owned store injected into handlers, no module-level global
//! - RwLock: many concurrent readers, exclusive appends
//! - Unbounded; records live until the process exits

use tokio::sync::RwLock;

use crate::submissions::types::Submission;

/// Process-lifetime store of accepted submissions.
#[derive(Debug, Default)]
pub struct SubmissionStore {
    entries: RwLock<Vec<Submission>>,
}

impl SubmissionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission. Records are never mutated or removed after this.
    pub async fn append(&self, submission: Submission) {
        self.entries.write().await.push(submission);
    }

    /// Clone out the full sequence in arrival order.
    pub async fn snapshot(&self) -> Vec<Submission> {
        self.entries.read().await.clone()
    }

    /// Number of stored submissions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no submissions.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
