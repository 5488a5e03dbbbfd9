use once_cell::sync::Lazy;
use regex::Regex;

/// Heading depth tracked by the indexing pipeline.
///
/// Documents may nest deeper, but levels below four never contribute
/// search context and are excluded at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

/// One structural unit of a parsed document.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockKind {
    Heading(HeadingLevel),
    Paragraph,
    /// Body rows only; the header row is dropped at parse time.
    Table { rows: Vec<Vec<String>> },
    /// Each item reduced to its first text segment.
    List { items: Vec<String>, ordered: bool },
    /// An in-page address marker (`<a name="...">`).
    Anchor,
    /// Code, quotes, raw markup and other content that never reaches
    /// the record emission path.
    Excluded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// The originating element name (`p`, `td`, `ol`, `h2`, ...).
    pub tag: String,
    pub text: String,
    /// Parser-level exclusion flag, equivalent to `kind == Excluded`.
    pub hidden: bool,
}

impl Block {
    #[must_use]
    pub fn heading(level: HeadingLevel, text: String) -> Self {
        Self {
            kind: BlockKind::Heading(level),
            tag: level.as_tag().to_string(),
            text,
            hidden: false,
        }
    }

    #[must_use]
    pub fn paragraph(text: String) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            tag: "p".to_string(),
            text,
            hidden: false,
        }
    }

    #[must_use]
    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Self {
            kind: BlockKind::Table { rows },
            tag: "table".to_string(),
            text: String::new(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn list(items: Vec<String>, ordered: bool) -> Self {
        Self {
            kind: BlockKind::List { items, ordered },
            tag: if ordered { "ol" } else { "ul" }.to_string(),
            text: String::new(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn anchor(text: String) -> Self {
        Self {
            kind: BlockKind::Anchor,
            tag: "a".to_string(),
            text,
            hidden: false,
        }
    }

    #[must_use]
    pub fn excluded(tag: &str, text: String) -> Self {
        Self {
            kind: BlockKind::Excluded,
            tag: tag.to_string(),
            text,
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden_markup(text: String) -> Self {
        Self {
            kind: BlockKind::Excluded,
            tag: "html".to_string(),
            text,
            hidden: true,
        }
    }
}

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<a name="([^"]*)">.*?</a>"#).expect("anchor pattern compiles"));

/// Extract the name from an anchor-definition marker such as
/// `<a name="installation"></a>`, if the text contains one.
#[must_use]
pub fn anchor_name(text: &str) -> Option<String> {
    ANCHOR_RE
        .captures(text)
        .map(|captures| captures[1].to_string())
}
