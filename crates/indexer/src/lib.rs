//! # Docsearch Indexer
//!
//! Turns a versioned documentation corpus into search records and
//! publishes them atomically.
//!
//! ## Pipeline
//!
//! ```text
//! Corpus root
//!     │
//!     ├──> Version Source (one directory per version)
//!     │      └─> Markdown documents
//!     │
//!     ├──> Document Indexer (classify blocks, thread heading context)
//!     │      └─> Search records
//!     │
//!     └──> Search Backend (staging slot)
//!            └─> settings, then atomic swap to production
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use docsearch_backend::JsonFileBackend;
//! use docsearch_indexer::CorpusIndexer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = JsonFileBackend::new(".docsearch/indexes");
//!     let indexer = CorpusIndexer::new("docs", backend, "docs");
//!     let stats = indexer.run(&["9.x".to_string()]).await?;
//!
//!     println!("Indexed {} documents, {} records", stats.documents, stats.records);
//!     Ok(())
//! }
//! ```

mod builder;
mod classify;
mod context;
mod corpus;
mod document;
mod error;
mod source;
mod stats;

pub use builder::RecordBuilder;
pub use classify::{classify_block, BlockAction, ContentUnit, UnitTag};
pub use context::HeadingContext;
pub use corpus::CorpusIndexer;
pub use document::DocumentIndexer;
pub use error::{IndexerError, Result};
pub use source::VersionSource;
pub use stats::IndexStats;
