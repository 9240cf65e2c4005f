use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extractor::{cleaner::clean_text, profile::LanguageProfile, reject};

/// Content container candidates, most specific first.
pub const CONTENT_SELECTORS: [&str; 3] =
    ["div#mw-content-text", "div.mw-parser-output", "div#bodyContent"];

const TOC_META_SELECTOR: &str = r#"meta[property="mw:PageProp/toc"]"#;

const HEADING_TAGS: [&str; 3] = ["h2", "h3", "h4"];

/// A top-level list together with the section it belongs to.
#[derive(Debug, Clone)]
pub struct SectionList<'a> {
    pub list: ElementRef<'a>,
    pub category: String,
}

fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    scope.select(&selector).next()
}

/// The main article container, or `None` if the page layout is unknown.
pub fn content_container(document: &Html) -> Option<ElementRef<'_>> {
    CONTENT_SELECTORS
        .iter()
        .find_map(|css| select_first(document.root_element(), css))
}

/// Where to look for lists inside the container.
///
/// Spanish Wikipedia pages carry a `mw:PageProp/toc` meta element; when a
/// parser keeps list markup inside it, that element is the narrower search
/// area. HTML5 parsers treat `<meta>` as void, in which case the container
/// is used.
pub fn search_area<'a>(container: ElementRef<'a>, profile: &LanguageProfile) -> ElementRef<'a> {
    if !profile.toc_meta_area {
        return container;
    }

    match select_first(container, TOC_META_SELECTOR) {
        Some(meta) if select_first(meta, "ul").is_some() => meta,
        _ => container,
    }
}

fn is_heading(element: &ElementRef<'_>) -> bool {
    HEADING_TAGS.contains(&element.value().name())
}

fn is_nested_list(list: &ElementRef<'_>) -> bool {
    list.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "li")
}

/// Heading text with the edit-link suffix removed.
pub fn heading_text(heading: ElementRef<'_>, profile: &LanguageProfile) -> String {
    let text: String = heading.text().collect();
    text.trim().replace(profile.edit_suffix, "").trim().to_string()
}

/// Top-level lists in `area`, each paired with the nearest preceding
/// `h2`-`h4` in document order.
///
/// Lists nested in a list item are dropped, as are lists with no preceding
/// heading or whose heading is a structural section.
pub fn section_lists<'a>(
    document: &'a Html,
    area: ElementRef<'a>,
    profile: &LanguageProfile,
) -> Vec<SectionList<'a>> {
    let mut lists = Vec::new();
    let mut last_heading: Option<ElementRef<'a>> = None;

    // Headings outside the search area still count as preceding a list.
    for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
        if is_heading(&element) {
            last_heading = Some(element);
            continue;
        }

        if element.value().name() != "ul" || is_nested_list(&element) {
            continue;
        }

        if !element.ancestors().any(|ancestor| ancestor.id() == area.id()) {
            continue;
        }

        let Some(heading) = last_heading else {
            debug!("Skipping list with no preceding heading");
            continue;
        };

        let category = heading_text(heading, profile);
        if reject::is_structural_section(&category, profile) {
            debug!(section = %category, "Skipping structural section");
            continue;
        }

        lists.push(SectionList {
            list: element,
            category,
        });
    }

    lists
}

fn in_reflist(item: &ElementRef<'_>) -> bool {
    item.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().classes().any(|class| class == "reflist"))
}

/// Cleaned text of each direct `li` child of `list`.
pub fn list_items<'a>(
    list: ElementRef<'a>,
    profile: &'a LanguageProfile,
) -> impl Iterator<Item = String> + 'a {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .filter(move |item| !(profile.skip_reflist && in_reflist(item)))
        .map(|item| clean_text(&item.text().collect::<String>()))
}
