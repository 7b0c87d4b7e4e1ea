use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Status;
use crate::store::TaskStore;

/// Aggregate counts over the whole store. Derived on every read, never
/// persisted: `completed + pending == total` holds by construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
}

impl Stats {
    /// Recompute from current store state. Side-effect free; safe to call
    /// after any mutation or on its own for a dashboard refresh.
    pub fn compute(store: &TaskStore) -> Result<Self> {
        let total = store.count_by_status(None)?;
        let completed = store.count_by_status(Some(Status::Completed))?;
        Ok(Self {
            total,
            completed,
            pending: total - completed,
        })
    }
}
