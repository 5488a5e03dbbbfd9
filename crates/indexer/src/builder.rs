use crate::classify::{ContentUnit, UnitTag};
use crate::context::HeadingContext;
use docsearch_backend::Record;

/// Turns content units into records, folding each unit into the heading
/// context as it goes.
pub struct RecordBuilder {
    version: String,
}

impl RecordBuilder {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Emit exactly one record for `unit`.
    ///
    /// Heading units update the context before the snapshot is taken, so
    /// a heading record carries itself in its own level field. Body
    /// content gains one weight point per active subheading, ranking
    /// deeper-nested content below shallower content.
    pub fn build(&self, unit: &ContentUnit, context: &mut HeadingContext) -> Record {
        let mut importance = unit.tag.base_weight();

        let content = match unit.tag {
            UnitTag::Heading(level) => {
                context.apply_heading(level, &unit.text);
                None
            }
            UnitTag::Paragraph | UnitTag::TableCell | UnitTag::ListItem => {
                importance += context.active_subheadings();
                Some(unit.text.clone())
            }
        };

        Record {
            id: Record::stable_id(&self.version, context.link(), &unit.text),
            h1: context.h1().map(String::from),
            h2: context.h2().map(String::from),
            h3: context.h3().map(String::from),
            h4: context.h4().map(String::from),
            link: context.link().to_string(),
            content,
            importance,
            tags: vec![self.version.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_markdown::HeadingLevel;
    use pretty_assertions::assert_eq;

    fn heading(level: HeadingLevel, text: &str) -> ContentUnit {
        ContentUnit {
            tag: UnitTag::Heading(level),
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> ContentUnit {
        ContentUnit {
            tag: UnitTag::Paragraph,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_heading_record_has_no_content() {
        let builder = RecordBuilder::new("9.x");
        let mut context = HeadingContext::new("installation");

        let record = builder.build(&heading(HeadingLevel::H1, "Install"), &mut context);

        assert_eq!(record.content, None);
        assert_eq!(record.h1, Some("Install".to_string()));
        assert_eq!(record.importance, 0);
        assert_eq!(record.tags, vec!["9.x".to_string()]);
    }

    #[test]
    fn test_heading_importance_is_position_independent() {
        let builder = RecordBuilder::new("9.x");
        let mut context = HeadingContext::new("installation");

        builder.build(&heading(HeadingLevel::H1, "Install"), &mut context);
        builder.build(&heading(HeadingLevel::H2, "Requirements"), &mut context);
        let record = builder.build(&heading(HeadingLevel::H3, "PHP"), &mut context);

        assert_eq!(record.importance, 2);
    }

    #[test]
    fn test_content_weight_grows_with_nesting() {
        let builder = RecordBuilder::new("9.x");
        let mut context = HeadingContext::new("installation");

        let top = builder.build(&paragraph("top-level"), &mut context);
        assert_eq!(top.importance, 4);

        builder.build(&heading(HeadingLevel::H2, "Requirements"), &mut context);
        let under_h2 = builder.build(&paragraph("under h2"), &mut context);
        assert_eq!(under_h2.importance, 5);

        builder.build(&heading(HeadingLevel::H3, "PHP"), &mut context);
        let under_h3 = builder.build(&paragraph("under h3"), &mut context);
        assert_eq!(under_h3.importance, 6);

        builder.build(&heading(HeadingLevel::H4, "Extensions"), &mut context);
        let under_h4 = builder.build(&paragraph("under h4"), &mut context);
        assert_eq!(under_h4.importance, 7);
    }

    #[test]
    fn test_content_record_snapshots_context() {
        let builder = RecordBuilder::new("9.x");
        let mut context = HeadingContext::new("installation");
        context.set_anchor("requirements");

        builder.build(&heading(HeadingLevel::H1, "Install"), &mut context);
        builder.build(&heading(HeadingLevel::H2, "Requirements"), &mut context);
        let record = builder.build(&paragraph("PHP >= 7"), &mut context);

        assert_eq!(record.h1, Some("Install".to_string()));
        assert_eq!(record.h2, Some("Requirements".to_string()));
        assert_eq!(record.h3, None);
        assert_eq!(record.link, "installation#requirements");
        assert_eq!(record.content, Some("PHP >= 7".to_string()));
        assert_eq!(
            record.id,
            Record::stable_id("9.x", "installation#requirements", "PHP >= 7")
        );
    }
}
