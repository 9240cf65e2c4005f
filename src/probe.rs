//! Structural dump of a page, for when a scrape comes back empty.
//!
//! An empty result from the extractor can mean the page has no lists or
//! that the markup changed; the probe shows which.

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use crate::extractor::LanguageProfile;
use crate::extractor::sections::{CONTENT_SELECTORS, content_container};

const HEADING_LIMIT: usize = 10;
const WRAPPER_LIMIT: usize = 5;
const ITEM_LIMIT: usize = 3;
const TOC_ITEM_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingProbe {
    pub tag: String,
    pub text: String,
    /// `id` and text of the first `span` inside the heading, if any.
    pub span: Option<(Option<String>, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocProbe {
    pub total_items: usize,
    pub direct_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeReport {
    /// Each content selector and whether it matched.
    pub selectors: Vec<(&'static str, bool)>,
    pub headings: Vec<HeadingProbe>,
    pub wrapper_count: usize,
    pub wrappers: Vec<String>,
    pub list_items: Vec<String>,
    pub toc: Option<TocProbe>,
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn truncated_text(element: ElementRef<'_>, max: usize) -> String {
    element.text().collect::<String>().chars().take(max).collect()
}

fn probe_toc(container: ElementRef<'_>) -> Option<TocProbe> {
    let meta = container
        .select(&selector(r#"meta[property="mw:PageProp/toc"]"#)?)
        .next()?;
    let li = selector("li")?;
    let ul = selector("ul")?;

    let direct_items = meta
        .select(&ul)
        .filter(|list| {
            list.parent()
                .and_then(ElementRef::wrap)
                .is_none_or(|parent| parent.value().name() != "li")
        })
        .flat_map(|list| {
            list.children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name() == "li")
        })
        .map(|item| truncated_text(item, 80))
        .collect();

    Some(TocProbe {
        total_items: meta.select(&li).count(),
        direct_items,
    })
}

/// Inspect a page the way the extractor would see it.
pub fn probe_page(html: &str, profile: &LanguageProfile) -> ProbeReport {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let selectors = CONTENT_SELECTORS
        .iter()
        .map(|css| {
            let found = selector(css).is_some_and(|s| root.select(&s).next().is_some());
            (*css, found)
        })
        .collect();

    let Some(content) = content_container(&document) else {
        return ProbeReport {
            selectors,
            ..ProbeReport::default()
        };
    };

    let headings: Vec<HeadingProbe> = selector("h2, h3")
        .map(|s| {
            content
                .select(&s)
                .take(HEADING_LIMIT)
                .map(|h| HeadingProbe {
                    tag: h.value().name().to_string(),
                    text: truncated_text(h, 50),
                    span: selector("span")
                        .and_then(|span| h.select(&span).next())
                        .map(|span| {
                            (
                                span.value().id().map(str::to_string),
                                span.text().collect::<String>(),
                            )
                        }),
                })
                .collect()
        })
        .unwrap_or_default();

    let wrappers: Vec<String> = selector(".mw-heading")
        .map(|s| content.select(&s).map(|w| truncated_text(w, 50)).collect())
        .unwrap_or_default();

    let list_items: Vec<String> = selector("li")
        .map(|s| {
            content
                .select(&s)
                .take(ITEM_LIMIT)
                .map(|li| truncated_text(li, 100))
                .collect()
        })
        .unwrap_or_default();

    let toc = if profile.toc_meta_area {
        probe_toc(content)
    } else {
        None
    };

    ProbeReport {
        selectors,
        headings,
        wrapper_count: wrappers.len(),
        wrappers: wrappers.into_iter().take(WRAPPER_LIMIT).collect(),
        list_items,
        toc,
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (css, found) in &self.selectors {
            writeln!(f, "{:<24} {}", css, if *found { "found" } else { "missing" })?;
        }
        if !self.selectors.iter().any(|(_, found)| *found) {
            return write!(f, "Could not find content");
        }

        writeln!(f, "\nFound {} headings", self.headings.len())?;
        for heading in &self.headings {
            writeln!(f, "  Tag: {}, Text: {}", heading.tag, heading.text)?;
            if let Some((id, text)) = &heading.span {
                writeln!(f, "    Span: {}, {}", id.as_deref().unwrap_or("-"), text)?;
            }
        }

        writeln!(f, "\nFound {} mw-heading sections", self.wrapper_count)?;
        for wrapper in &self.wrappers {
            writeln!(f, "  - {}", wrapper)?;
        }

        writeln!(f, "\nFirst {} list items:", self.list_items.len())?;
        for item in &self.list_items {
            writeln!(f, "  - {}...", item)?;
        }

        match &self.toc {
            Some(toc) => {
                writeln!(f, "\nTotal LIs in meta: {}", toc.total_items)?;
                writeln!(f, "Direct top-level LIs: {}", toc.direct_items.len())?;
                for (i, item) in toc.direct_items.iter().take(TOC_ITEM_LIMIT).enumerate() {
                    writeln!(f, "{}. {}...", i + 1, item)?;
                }
            }
            None => writeln!(f, "\nNo table-of-contents meta element")?,
        }
        Ok(())
    }
}
