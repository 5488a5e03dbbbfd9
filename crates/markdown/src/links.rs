/// Placeholder used by cross-document links in the raw corpus.
const VERSION_PLACEHOLDER: &str = "{{version}}";

/// Substitute the version placeholder in document links before parsing,
/// so emitted records carry version-concrete link targets.
#[must_use]
pub fn rewrite_links(version: &str, markdown: &str) -> String {
    markdown.replace(VERSION_PLACEHOLDER, version)
}
