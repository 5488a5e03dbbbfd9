/// Counters for one full indexing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub versions: usize,
    pub documents: usize,
    pub records: usize,
    /// Documents excluded by the deny list.
    pub skipped: usize,
    pub time_ms: u64,
}

impl IndexStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, records: usize) {
        self.documents += 1;
        self.records += records;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }
}
