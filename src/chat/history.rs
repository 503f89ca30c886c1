/// Number of entries `/history` shows.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// Every non-empty line entered during a session, in arrival order.
///
/// Storage is unbounded; only the display is capped.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }
}
