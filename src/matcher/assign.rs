use std::fmt;

use crate::matcher::{MatchMap, find_matches};
use crate::store::MisconceptionStore;

const EXAMPLE_LIMIT: usize = 5;
const EXAMPLE_TEXT_CHARS: usize = 80;

/// Give English records IDs 1..=|E| and Spanish records either their
/// counterpart's ID or a fresh one above every English ID.
///
/// IDs are assigned in the stores' current order; returns the number of
/// distinct IDs handed out.
pub fn assign_ids(
    english: &mut MisconceptionStore,
    spanish: &mut MisconceptionStore,
    matches: &MatchMap,
) -> u32 {
    let mut next_id = 1u32;
    for record in english.records_mut() {
        record.id = next_id;
        next_id += 1;
    }

    let es_to_en = matches.inverse();
    let english_ids: Vec<u32> = english.records().iter().map(|r| r.id).collect();

    for (es_idx, record) in spanish.records_mut().iter_mut().enumerate() {
        match es_to_en.get(&es_idx) {
            Some(&en_idx) => record.id = english_ids[en_idx],
            None => {
                record.id = next_id;
                next_id += 1;
            }
        }
    }

    next_id - 1
}

/// A matched pair, for the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchExample {
    pub id: u32,
    pub english_category: String,
    pub english_text: String,
    pub spanish_category: String,
    pub spanish_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub english: usize,
    pub spanish: usize,
    pub matched: usize,
    pub total_ids: u32,
    pub examples: Vec<MatchExample>,
}

impl MatchSummary {
    pub fn english_only(&self) -> usize {
        self.english - self.matched
    }

    pub fn spanish_only(&self) -> usize {
        self.spanish - self.matched
    }
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(EXAMPLE_TEXT_CHARS).collect();
    format!("{}...", head)
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total unique IDs: {}", self.total_ids)?;
        writeln!(f, "Shared IDs (matched): {}", self.matched)?;
        writeln!(f, "English-only IDs: {}", self.english_only())?;
        write!(f, "Spanish-only IDs: {}", self.spanish_only())?;

        if !self.examples.is_empty() {
            write!(f, "\n\nExample matches:")?;
            for example in &self.examples {
                write!(
                    f,
                    "\n\nID {}:\n  EN ({}): {}\n  ES ({}): {}",
                    example.id,
                    example.english_category,
                    preview(&example.english_text),
                    example.spanish_category,
                    preview(&example.spanish_text),
                )?;
            }
        }
        Ok(())
    }
}

/// Match two stores, rewrite their IDs so equivalent entries share one, and
/// sort both by ID.
pub fn unify(english: &mut MisconceptionStore, spanish: &mut MisconceptionStore) -> MatchSummary {
    let en_texts: Vec<&str> = english.records().iter().map(|r| r.text.as_str()).collect();
    let es_texts: Vec<&str> = spanish.records().iter().map(|r| r.text.as_str()).collect();
    let matches = find_matches(&en_texts, &es_texts);

    let total_ids = assign_ids(english, spanish, &matches);

    // Indices are only meaningful until the stores are re-sorted.
    let examples = matches
        .pairs()
        .iter()
        .take(EXAMPLE_LIMIT)
        .map(|pair| {
            let en = &english.records()[pair.english];
            let es = &spanish.records()[pair.spanish];
            MatchExample {
                id: en.id,
                english_category: en.category.clone(),
                english_text: en.text.clone(),
                spanish_category: es.category.clone(),
                spanish_text: es.text.clone(),
            }
        })
        .collect();

    english.sort_by_id();
    spanish.sort_by_id();

    MatchSummary {
        english: english.len(),
        spanish: spanish.len(),
        matched: matches.len(),
        total_ids,
        examples,
    }
}
