pub mod cleaner;
pub mod model;
pub mod profile;
pub mod reject;
pub mod sections;

#[cfg(test)]
mod tests;

pub use model::RawMisconception;
pub use profile::{Language, LanguageProfile};

use scraper::Html;
use tracing::{info, instrument, warn};

use crate::extractor::sections::{SectionList, content_container, list_items, search_area};

/// Yield the records of a parsed page in document order.
///
/// The qualifying lists are located up front; items are cleaned and
/// filtered lazily as the iterator is driven. Yields nothing (after a
/// warning) when no known content container exists, which is
/// indistinguishable from a page with no qualifying lists.
pub fn extract_records<'a>(
    document: &'a Html,
    page_url: &'a str,
    profile: &'a LanguageProfile,
) -> impl Iterator<Item = RawMisconception> + 'a {
    let lists = match content_container(document) {
        Some(container) => {
            sections::section_lists(document, search_area(container, profile), profile)
        }
        None => {
            warn!("Could not find content div for {}", page_url);
            Vec::new()
        }
    };

    lists
        .into_iter()
        .flat_map(move |SectionList { list, category }| {
            let source_url = model::source_url(page_url, &category);
            list_items(list, profile)
                .filter(move |text| !reject::should_reject(text, profile))
                .map(move |text| RawMisconception {
                    text,
                    category: category.clone(),
                    source_url: source_url.clone(),
                })
        })
}

/// Parse `html` and collect its records.
#[instrument(skip(html, profile), fields(lang = %profile.language))]
pub fn extract_page(
    html: &str,
    page_url: &str,
    base_category: &str,
    profile: &LanguageProfile,
) -> Vec<RawMisconception> {
    let document = Html::parse_document(html);
    let records: Vec<_> = extract_records(&document, page_url, profile).collect();
    info!("Extracted {} records", records.len());
    records
}
