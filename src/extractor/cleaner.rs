use regex::Regex;
use std::sync::LazyLock;

static CITATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip `[12]`-style citation markers and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let without_citations = CITATION_REGEX.replace_all(text, "");
    WHITESPACE_REGEX
        .replace_all(&without_citations, " ")
        .trim()
        .to_string()
}
