use crate::error::{IndexerError, Result};
use docsearch_markdown::{anchor_name, Block, BlockKind, HeadingLevel};

/// Element kinds that can produce a record, with an exhaustive weight
/// table. Adding a content kind is a compile-time-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitTag {
    Heading(HeadingLevel),
    Paragraph,
    TableCell,
    ListItem,
}

impl UnitTag {
    /// Base relevance weight; headings always outrank body content.
    #[must_use]
    pub const fn base_weight(self) -> u32 {
        match self {
            Self::Heading(HeadingLevel::H1) => 0,
            Self::Heading(HeadingLevel::H2) => 1,
            Self::Heading(HeadingLevel::H3) => 2,
            Self::Heading(HeadingLevel::H4) => 3,
            Self::Paragraph | Self::TableCell | Self::ListItem => 4,
        }
    }
}

/// One logical content unit ready for record emission.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentUnit {
    pub tag: UnitTag,
    pub text: String,
}

/// Resolution of one block against the emission rules.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockAction {
    Skip,
    AnchorUpdate(String),
    Expand(Vec<ContentUnit>),
    Single(ContentUnit),
}

/// Decide what a block contributes to the index.
///
/// Unordered lists are dropped entirely; only ordered lists expand into
/// per-item records. Table rows contribute their second cell (the
/// description column of label/description tables).
pub fn classify_block(block: &Block) -> Result<BlockAction> {
    if block.hidden {
        return Ok(BlockAction::Skip);
    }

    match &block.kind {
        BlockKind::Excluded => Ok(BlockAction::Skip),
        BlockKind::Anchor => Ok(match anchor_name(&block.text) {
            Some(name) => BlockAction::AnchorUpdate(name),
            None => BlockAction::Skip,
        }),
        BlockKind::Heading(level) => Ok(BlockAction::Single(ContentUnit {
            tag: UnitTag::Heading(*level),
            text: block.text.clone(),
        })),
        BlockKind::Table { rows } => Ok(BlockAction::Expand(
            rows.iter()
                .map(|row| ContentUnit {
                    tag: UnitTag::TableCell,
                    text: row.get(1).cloned().unwrap_or_default(),
                })
                .collect(),
        )),
        BlockKind::List { ordered: false, .. } => Ok(BlockAction::Skip),
        BlockKind::List { items, .. } => Ok(BlockAction::Expand(
            items
                .iter()
                .map(|item| ContentUnit {
                    tag: UnitTag::ListItem,
                    text: item.clone(),
                })
                .collect(),
        )),
        BlockKind::Paragraph => {
            if let Some(name) = anchor_name(&block.text) {
                return Ok(BlockAction::AnchorUpdate(name));
            }
            match block.tag.as_str() {
                "p" => Ok(BlockAction::Single(ContentUnit {
                    tag: UnitTag::Paragraph,
                    text: block.text.clone(),
                })),
                other => Err(IndexerError::UnknownTag(other.to_string())),
            }
        }
    }
}
