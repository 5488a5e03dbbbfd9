//! # Docsearch Backend
//!
//! Write-side interface of the search service, and a local JSON-file
//! implementation of it.
//!
//! Indexing runs build a complete staging slot and then swap it over the
//! production slot in one atomic move, so readers of the production slot
//! never observe a partially rebuilt corpus.

mod backend;
mod error;
mod local;
mod record;
mod settings;

pub use backend::SearchBackend;
pub use error::{BackendError, Result};
pub use local::{JsonFileBackend, StoredIndex};
pub use record::{content_fingerprint, Record};
pub use settings::IndexSettings;
