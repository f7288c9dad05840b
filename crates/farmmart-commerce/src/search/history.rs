//! Bounded search history.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered queries.
pub const MAX_HISTORY: usize = 10;

/// Recent search queries, most recent first, de-duplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query.
    ///
    /// Blank queries are ignored. Recording a query already present moves
    /// it to the front instead of duplicating it; the list is truncated to
    /// [`MAX_HISTORY`] entries.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries
            .retain(|existing| !existing.eq_ignore_ascii_case(query));
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of remembered queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
