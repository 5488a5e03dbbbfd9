use crate::builder::RecordBuilder;
use crate::classify::{classify_block, BlockAction};
use crate::context::HeadingContext;
use crate::error::Result;
use docsearch_backend::Record;
use docsearch_markdown::BlockParser;

/// Drives one document end-to-end: parse, classify, build.
pub struct DocumentIndexer {
    parser: BlockParser,
    builder: RecordBuilder,
}

impl DocumentIndexer {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            parser: BlockParser::new(),
            builder: RecordBuilder::new(version),
        }
    }

    /// Produce the ordered record sequence for one document.
    ///
    /// The heading context is scoped to this call; records depend on
    /// sibling order only through it.
    pub fn index_document(&self, slug: &str, markdown: &str) -> Result<Vec<Record>> {
        let blocks = self.parser.parse(markdown)?;
        let mut context = HeadingContext::new(slug);
        let mut records = Vec::new();

        for block in &blocks {
            match classify_block(block)? {
                BlockAction::Skip => {}
                BlockAction::AnchorUpdate(name) => context.set_anchor(&name),
                BlockAction::Single(unit) => {
                    records.push(self.builder.build(&unit, &mut context));
                }
                BlockAction::Expand(units) => {
                    for unit in units {
                        records.push(self.builder.build(&unit, &mut context));
                    }
                }
            }
        }

        Ok(records)
    }
}
