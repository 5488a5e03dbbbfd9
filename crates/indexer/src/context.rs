use docsearch_markdown::HeadingLevel;

/// Mutable heading state threaded through one document's blocks.
///
/// A new heading clears every deeper level, so at any point the active
/// h1..h4 chain reflects exactly the most recent headings seen. All four
/// levels start absent at document start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingContext {
    slug: String,
    current_link: String,
    h1: Option<String>,
    h2: Option<String>,
    h3: Option<String>,
    h4: Option<String>,
}

impl HeadingContext {
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            current_link: slug.clone(),
            slug,
            h1: None,
            h2: None,
            h3: None,
            h4: None,
        }
    }

    /// Record a heading, clearing every deeper level.
    pub fn apply_heading(&mut self, level: HeadingLevel, text: &str) {
        match level {
            HeadingLevel::H1 => {
                self.h1 = Some(text.to_string());
                self.h2 = None;
                self.h3 = None;
                self.h4 = None;
            }
            HeadingLevel::H2 => {
                self.h2 = Some(text.to_string());
                self.h3 = None;
                self.h4 = None;
            }
            HeadingLevel::H3 => {
                self.h3 = Some(text.to_string());
                self.h4 = None;
            }
            HeadingLevel::H4 => {
                self.h4 = Some(text.to_string());
            }
        }
    }

    /// Redirect subsequent records to an in-page anchor.
    pub fn set_anchor(&mut self, name: &str) {
        self.current_link = format!("{}#{name}", self.slug);
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.current_link
    }

    #[must_use]
    pub fn h1(&self) -> Option<&str> {
        self.h1.as_deref()
    }

    #[must_use]
    pub fn h2(&self) -> Option<&str> {
        self.h2.as_deref()
    }

    #[must_use]
    pub fn h3(&self) -> Option<&str> {
        self.h3.as_deref()
    }

    #[must_use]
    pub fn h4(&self) -> Option<&str> {
        self.h4.as_deref()
    }

    /// How many subheading levels (h2..h4) are currently active.
    #[must_use]
    pub fn active_subheadings(&self) -> u32 {
        [&self.h2, &self.h3, &self.h4]
            .into_iter()
            .filter(|level| level.is_some())
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_all_levels_absent() {
        let context = HeadingContext::new("installation");
        assert_eq!(context.h1(), None);
        assert_eq!(context.h2(), None);
        assert_eq!(context.h3(), None);
        assert_eq!(context.h4(), None);
        assert_eq!(context.link(), "installation");
    }

    #[test]
    fn test_h1_clears_everything_deeper() {
        let mut context = HeadingContext::new("installation");
        context.apply_heading(HeadingLevel::H2, "Requirements");
        context.apply_heading(HeadingLevel::H3, "PHP");
        context.apply_heading(HeadingLevel::H4, "Extensions");
        context.apply_heading(HeadingLevel::H1, "Install");

        assert_eq!(context.h1(), Some("Install"));
        assert_eq!(context.h2(), None);
        assert_eq!(context.h3(), None);
        assert_eq!(context.h4(), None);
    }

    #[test]
    fn test_h2_clears_h3_and_h4() {
        let mut context = HeadingContext::new("installation");
        context.apply_heading(HeadingLevel::H3, "PHP");
        context.apply_heading(HeadingLevel::H4, "Extensions");
        context.apply_heading(HeadingLevel::H2, "Requirements");

        assert_eq!(context.h2(), Some("Requirements"));
        assert_eq!(context.h3(), None);
        assert_eq!(context.h4(), None);
    }

    #[test]
    fn test_h3_clears_only_h4() {
        let mut context = HeadingContext::new("installation");
        context.apply_heading(HeadingLevel::H2, "Requirements");
        context.apply_heading(HeadingLevel::H4, "Extensions");
        context.apply_heading(HeadingLevel::H3, "PHP");

        assert_eq!(context.h2(), Some("Requirements"));
        assert_eq!(context.h3(), Some("PHP"));
        assert_eq!(context.h4(), None);
    }

    #[test]
    fn test_h4_clears_nothing() {
        let mut context = HeadingContext::new("installation");
        context.apply_heading(HeadingLevel::H2, "Requirements");
        context.apply_heading(HeadingLevel::H3, "PHP");
        context.apply_heading(HeadingLevel::H4, "Extensions");

        assert_eq!(context.h2(), Some("Requirements"));
        assert_eq!(context.h3(), Some("PHP"));
        assert_eq!(context.h4(), Some("Extensions"));
    }

    #[test]
    fn test_anchor_updates_link() {
        let mut context = HeadingContext::new("installation");
        context.set_anchor("requirements");
        assert_eq!(context.link(), "installation#requirements");

        context.set_anchor("setup");
        assert_eq!(context.link(), "installation#setup");
    }

    #[test]
    fn test_active_subheadings_counts_h2_to_h4() {
        let mut context = HeadingContext::new("installation");
        assert_eq!(context.active_subheadings(), 0);

        context.apply_heading(HeadingLevel::H1, "Install");
        assert_eq!(context.active_subheadings(), 0);

        context.apply_heading(HeadingLevel::H2, "Requirements");
        assert_eq!(context.active_subheadings(), 1);

        context.apply_heading(HeadingLevel::H3, "PHP");
        assert_eq!(context.active_subheadings(), 2);

        context.apply_heading(HeadingLevel::H4, "Extensions");
        assert_eq!(context.active_subheadings(), 3);
    }
}
