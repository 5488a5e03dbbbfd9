use crate::block::{anchor_name, Block, HeadingLevel};
use crate::error::{MarkdownError, Result};
use pulldown_cmark::{Event, HeadingLevel as MdHeadingLevel, Options, Parser, Tag, TagEnd};

/// Parses markdown into the ordered block sequence consumed by the indexer.
///
/// Only block-level structure survives: inline markup is flattened to text,
/// table header rows are dropped, and list items are reduced to their first
/// text segment. Code blocks, quotes and raw HTML come out as `Excluded`
/// blocks so downstream classification stays total.
pub struct BlockParser {
    options: Options,
}

impl BlockParser {
    #[must_use]
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        Self { options }
    }

    pub fn parse(&self, markdown: &str) -> Result<Vec<Block>> {
        let mut state = ParseState::default();
        for event in Parser::new_ext(markdown, self.options) {
            state.handle(event);
        }
        state.finish()
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    in_header: bool,
    in_cell: bool,
}

#[derive(Default)]
struct ListState {
    items: Vec<String>,
    item: String,
    ordered: bool,
    in_item: bool,
    /// Set once the item's first text segment is complete; later
    /// paragraphs and nested structures within the item are dropped.
    item_done: bool,
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    quote_depth: usize,
    /// Open tags inside the current quote; lets the quote's own end event
    /// be recognized without inspecting it.
    quote_nested: usize,
    heading: Option<(MdHeadingLevel, String)>,
    paragraph: Option<String>,
    code: Option<String>,
    html: Option<String>,
    table: Option<TableState>,
    lists: Vec<ListState>,
}

impl ParseState {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(end) => self.end(end),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_text(&code),
            Event::InlineHtml(html) => self.push_text(&html),
            Event::Html(html) => {
                if let Some(buffer) = &mut self.html {
                    buffer.push_str(&html);
                }
            }
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            Event::Rule => {
                if self.at_top_level() {
                    self.blocks.push(Block::excluded("hr", String::new()));
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        if self.quote_depth > 0 {
            self.quote_nested += 1;
            return;
        }
        if let Tag::BlockQuote(_) = tag {
            if self.at_top_level() {
                self.blocks
                    .push(Block::excluded("blockquote", String::new()));
            }
            self.quote_depth = 1;
            self.quote_nested = 0;
            return;
        }

        match tag {
            Tag::Heading { level, .. } => {
                self.heading = Some((level, String::new()));
            }
            Tag::Paragraph => {
                if self.table.is_none() && self.lists.is_empty() {
                    self.paragraph = Some(String::new());
                }
            }
            Tag::CodeBlock(_) => {
                if self.at_top_level() {
                    self.code = Some(String::new());
                } else if let Some(list) = self.lists.last_mut() {
                    if list.in_item {
                        list.item_done = true;
                    }
                }
            }
            Tag::HtmlBlock => {
                if self.at_top_level() {
                    self.html = Some(String::new());
                }
            }
            Tag::Table(_) => {
                self.table = Some(TableState::default());
            }
            Tag::TableHead => {
                if let Some(table) = &mut self.table {
                    table.in_header = true;
                }
            }
            Tag::TableRow => {
                if let Some(table) = &mut self.table {
                    table.row.clear();
                }
            }
            Tag::TableCell => {
                if let Some(table) = &mut self.table {
                    table.in_cell = true;
                    table.cell.clear();
                }
            }
            Tag::List(start) => {
                if let Some(list) = self.lists.last_mut() {
                    if list.in_item {
                        list.item_done = true;
                    }
                }
                self.lists.push(ListState {
                    ordered: start.is_some(),
                    ..ListState::default()
                });
            }
            Tag::Item => {
                if let Some(list) = self.lists.last_mut() {
                    list.in_item = true;
                    list.item.clear();
                    list.item_done = false;
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, end: TagEnd) {
        if self.quote_depth > 0 {
            if self.quote_nested > 0 {
                self.quote_nested -= 1;
            } else {
                self.quote_depth = 0;
            }
            return;
        }

        match end {
            TagEnd::Heading(_) => {
                if let Some((level, text)) = self.heading.take() {
                    let text = trimmed(text);
                    self.blocks.push(match narrow_level(level) {
                        Some(level) => Block::heading(level, text),
                        // h5/h6 carry no search context
                        None => Block::excluded(md_level_tag(level), text),
                    });
                }
            }
            TagEnd::Paragraph => {
                if let Some(list) = self.lists.last_mut() {
                    if list.in_item {
                        list.item_done = true;
                    }
                } else if let Some(text) = self.paragraph.take() {
                    let text = trimmed(text);
                    // Anchor markers sit inside paragraphs as inline HTML.
                    self.blocks.push(if anchor_name(&text).is_some() {
                        Block::anchor(text)
                    } else {
                        Block::paragraph(text)
                    });
                }
            }
            TagEnd::CodeBlock => {
                if let Some(text) = self.code.take() {
                    self.blocks.push(Block::excluded("code", text));
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(raw) = self.html.take() {
                    let raw = trimmed(raw);
                    self.blocks.push(if anchor_name(&raw).is_some() {
                        Block::anchor(raw)
                    } else if raw.starts_with("<!--") {
                        Block::hidden_markup(raw)
                    } else {
                        Block::excluded("html", raw)
                    });
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(Block::table(table.rows));
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = &mut self.table {
                    table.in_header = false;
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = &mut self.table {
                    table.rows.push(std::mem::take(&mut table.row));
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = &mut self.table {
                    table.in_cell = false;
                    if !table.in_header {
                        let cell = std::mem::take(&mut table.cell);
                        table.row.push(trimmed(cell));
                    }
                }
            }
            TagEnd::List(_) => {
                if let Some(list) = self.lists.pop() {
                    // Nested lists are part of their parent item and
                    // never surface as blocks of their own.
                    if self.lists.is_empty() {
                        self.blocks.push(Block::list(list.items, list.ordered));
                    }
                }
            }
            TagEnd::Item => {
                if let Some(list) = self.lists.last_mut() {
                    list.in_item = false;
                    let item = std::mem::take(&mut list.item);
                    list.items.push(trimmed(item));
                }
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.quote_depth > 0 {
            return;
        }
        if let Some((_, buffer)) = &mut self.heading {
            buffer.push_str(text);
            return;
        }
        if let Some(table) = &mut self.table {
            if table.in_cell && !table.in_header {
                table.cell.push_str(text);
            }
            return;
        }
        if let Some(list) = self.lists.last_mut() {
            if list.in_item && !list.item_done {
                list.item.push_str(text);
            }
            return;
        }
        if let Some(buffer) = &mut self.code {
            buffer.push_str(text);
            return;
        }
        if let Some(buffer) = &mut self.paragraph {
            buffer.push_str(text);
        }
    }

    fn at_top_level(&self) -> bool {
        self.quote_depth == 0 && self.table.is_none() && self.lists.is_empty()
    }

    fn finish(self) -> Result<Vec<Block>> {
        let balanced = self.quote_depth == 0
            && self.heading.is_none()
            && self.paragraph.is_none()
            && self.code.is_none()
            && self.html.is_none()
            && self.table.is_none()
            && self.lists.is_empty();
        if !balanced {
            return Err(MarkdownError::Parse(
                "unbalanced block structure at end of document".to_string(),
            ));
        }
        Ok(self.blocks)
    }
}

fn narrow_level(level: MdHeadingLevel) -> Option<HeadingLevel> {
    match level {
        MdHeadingLevel::H1 => Some(HeadingLevel::H1),
        MdHeadingLevel::H2 => Some(HeadingLevel::H2),
        MdHeadingLevel::H3 => Some(HeadingLevel::H3),
        MdHeadingLevel::H4 => Some(HeadingLevel::H4),
        MdHeadingLevel::H5 | MdHeadingLevel::H6 => None,
    }
}

fn md_level_tag(level: MdHeadingLevel) -> &'static str {
    match level {
        MdHeadingLevel::H1 => "h1",
        MdHeadingLevel::H2 => "h2",
        MdHeadingLevel::H3 => "h3",
        MdHeadingLevel::H4 => "h4",
        MdHeadingLevel::H5 => "h5",
        MdHeadingLevel::H6 => "h6",
    }
}

fn trimmed(text: String) -> String {
    let clean = text.trim();
    if clean.len() == text.len() {
        text
    } else {
        clean.to_string()
    }
}
