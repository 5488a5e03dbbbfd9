use serde::{Deserialize, Serialize};

/// One search-index document.
///
/// Records are created once per content unit per run and never mutated
/// after emission; the next run's publish supersedes them wholesale.
/// Absent headings serialize as nulls so the backend can highlight and
/// retrieve the fields uniformly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
    pub h4: Option<String>,
    pub link: String,
    /// The visible body text; `None` for heading-only records.
    pub content: Option<String>,
    /// Ascending relevance weight, lower ranks higher.
    pub importance: u32,
    /// Version identifiers scoping queries to a corpus version.
    pub tags: Vec<String>,
}

impl Record {
    /// Stable identifier: `{version}-{link}-{fingerprint}`.
    #[must_use]
    pub fn stable_id(version: &str, link: &str, text: &str) -> String {
        format!("{version}-{link}-{}", content_fingerprint(text))
    }
}

/// Fixed-size fingerprint of a record's raw text. Collision-resistant
/// identity, not security-sensitive.
#[must_use]
pub fn content_fingerprint(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}
