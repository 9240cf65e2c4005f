/// A scraped entry before it has been given an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMisconception {
    pub text: String,
    pub category: String,
    pub source_url: String,
}

/// Fragment for a section: the heading text with spaces as underscores.
///
/// This mirrors how MediaWiki builds heading ids closely enough for
/// ASCII headings; it is not guaranteed to resolve for every heading.
pub fn section_anchor(category: &str) -> String {
    category.replace(' ', "_")
}

pub fn source_url(page_url: &str, category: &str) -> String {
    format!("{}#{}", page_url, section_anchor(category))
}
