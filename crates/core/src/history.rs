//! Saved-render history.
//!
//! The visualizer keeps the user's saved renders in client-local storage,
//! newest first, capped at 20 entries. The capping and eviction rules are
//! product contracts, so the list is modeled here where they can be tested.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};
use crate::visualization::VisualizationKind;

/// Maximum number of saved renders kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 20;

/// One saved render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationRecord {
    pub id: EntityId,
    pub kind: VisualizationKind,
    /// Human-readable option summary, e.g. `"cedar privacy"`.
    pub option_label: String,
    pub original_url: String,
    pub generated_url: String,
    pub created_at: Timestamp,
}

/// Newest-first list of saved renders with bounded capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    records: Vec<VisualizationRecord>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records, newest first.
    pub fn records(&self) -> &[VisualizationRecord] {
        &self.records
    }

    /// Save a render at the front of the list.
    ///
    /// Saving an id that is already present replaces the old record (it
    /// moves to the front). Returns the evicted record when the save pushed
    /// the list over capacity.
    pub fn save(&mut self, record: VisualizationRecord) -> Option<VisualizationRecord> {
        self.records.retain(|r| r.id != record.id);
        self.records.insert(0, record);
        if self.records.len() > self.capacity {
            self.records.pop()
        } else {
            None
        }
    }

    /// Delete one record by id.
    pub fn remove(&mut self, id: EntityId) -> Result<VisualizationRecord, CoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "VisualizationRecord",
                id,
            })?;
        Ok(self.records.remove(index))
    }

    /// Delete everything.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
