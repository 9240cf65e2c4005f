//! The scrape and match steps shared by the binaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::extractor::{self, Language, RawMisconception};
use crate::fetcher;
use crate::matcher::{self, MatchSummary};
use crate::store::MisconceptionStore;

/// A page to scrape and the label it is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSource {
    pub url: &'static str,
    pub base_category: &'static str,
}

pub const ENGLISH_PAGES: &[PageSource] = &[
    PageSource {
        url: "https://en.wikipedia.org/wiki/List_of_common_misconceptions_about_arts_and_culture",
        base_category: "Arts and Culture",
    },
    PageSource {
        url: "https://en.wikipedia.org/wiki/List_of_common_misconceptions_about_history",
        base_category: "History",
    },
    PageSource {
        url: "https://en.wikipedia.org/wiki/List_of_common_misconceptions_about_science,_technology,_and_mathematics",
        base_category: "Science, Technology, and Mathematics",
    },
];

pub const SPANISH_PAGES: &[PageSource] = &[PageSource {
    url: "https://es.wikipedia.org/wiki/Anexo:Falsos_mitos",
    base_category: "Falsos mitos",
}];

pub fn pages(language: Language) -> &'static [PageSource] {
    match language {
        Language::English => ENGLISH_PAGES,
        Language::Spanish => SPANISH_PAGES,
    }
}

pub fn output_path(config: &Config, language: Language) -> PathBuf {
    match language {
        Language::English => config.english_path(),
        Language::Spanish => config.spanish_path(),
    }
}

/// Fetch and extract every page, one after another, in order.
pub async fn scrape_pages(
    sources: &[PageSource],
    language: Language,
) -> Result<Vec<RawMisconception>> {
    let profile = language.profile();
    let mut all = Vec::new();

    for source in sources {
        println!("Scraping {}...", source.base_category);
        let page = fetcher::fetch(source.url)
            .await
            .with_context(|| format!("failed to fetch {}", source.url))?;
        let records =
            extractor::extract_page(&page.body_utf8, source.url, source.base_category, profile);
        println!("  Found {} misconceptions", records.len());
        all.extend(records);
    }

    Ok(all)
}

/// Scrape one language and write its numbered records to `path`.
pub async fn scrape_to_file(
    sources: &[PageSource],
    language: Language,
    path: &Path,
) -> Result<MisconceptionStore> {
    let raw = scrape_pages(sources, language).await?;
    let store = MisconceptionStore::from_raw(raw);
    store
        .save(path)
        .with_context(|| format!("failed to save {} records", language))?;

    println!(
        "\nTotal: {} {} misconceptions saved to {}",
        store.len(),
        language,
        path.display()
    );
    Ok(store)
}

/// Scrape the configured pages for `language` into its configured file.
pub async fn scrape_language(config: &Config, language: Language) -> Result<MisconceptionStore> {
    scrape_to_file(pages(language), language, &output_path(config, language)).await
}

/// Load both files, unify their IDs and write them back sorted by ID.
pub fn match_files(english_path: &Path, spanish_path: &Path) -> Result<MatchSummary> {
    let mut english = MisconceptionStore::load(english_path).context("failed to load English records")?;
    let mut spanish = MisconceptionStore::load(spanish_path).context("failed to load Spanish records")?;

    println!("English misconceptions: {}", english.len());
    println!("Spanish misconceptions: {}", spanish.len());
    println!("\nMatching misconceptions...");

    let summary = matcher::unify(&mut english, &mut spanish);
    println!("Found {} matches", summary.matched);

    english.save(english_path)?;
    spanish.save(spanish_path)?;
    info!(
        matched = summary.matched,
        total_ids = summary.total_ids,
        "Updated files saved"
    );

    Ok(summary)
}

pub fn match_configured(config: &Config) -> Result<MatchSummary> {
    match_files(&config.english_path(), &config.spanish_path())
}
