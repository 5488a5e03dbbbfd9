//! # Docsearch Markdown
//!
//! Block model and markdown parsing for the documentation indexing pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! Raw markdown
//!     │
//!     ├──> Link rewriting ({{version}} placeholders)
//!     │      └─> Version-concrete markdown
//!     │
//!     └──> Block Parser (pulldown-cmark)
//!            └─> Ordered sequence of typed blocks
//! ```
//!
//! The block sequence is consumed by `docsearch-indexer`, which turns it
//! into search records.

mod block;
mod error;
mod links;
mod parser;

pub use block::{anchor_name, Block, BlockKind, HeadingLevel};
pub use error::{MarkdownError, Result};
pub use links::rewrite_links;
pub use parser::BlockParser;
