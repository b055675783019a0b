/// One successful generation. Immutable once appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub image: Vec<u8>,
    pub mime_type: String,
    pub prompt: String,
    /// Unix epoch seconds at generation time.
    pub timestamp: u64,
}

/// Session-scoped gallery of past generations. Append-only, unbounded, no
/// deduplication; everything is dropped when the session ends. Only the
/// interaction loop touches it, so no locking.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Records in reverse-chronological order, for gallery display. Does not
    /// mutate the underlying order.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
