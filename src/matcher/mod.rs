//! Cross-language matching of English and Spanish misconceptions.
//!
//! Matching is a two-pass greedy assignment over record indices:
//!
//! 1. **Keyword pass.** Each English record with at least one dictionary
//!    keyword takes the unused Spanish record (also with keywords, sharing at
//!    least one) with the best blend of keyword overlap and text similarity,
//!    if that blend exceeds [`KEYWORD_THRESHOLD`].
//! 2. **Similarity pass.** Every English record still unmatched takes the
//!    unused Spanish record with the best text similarity, if it exceeds
//!    [`SIMILARITY_THRESHOLD`].
//!
//! English records are visited in index order and a Spanish record, once
//! taken, is never reconsidered. Ties go to the earliest Spanish record.
//! The result is not a globally optimal assignment.

pub mod assign;
pub mod keywords;
pub mod similarity;

pub use assign::{MatchExample, MatchSummary, assign_ids, unify};
pub use keywords::{KEYWORD_DICTIONARY, KeywordSet, extract_keywords};
pub use similarity::{SequenceMatcher, text_similarity};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::matcher::similarity::{normalize_for_matching, normalized_similarity};

/// Minimum combined score for a keyword-anchored match (exclusive).
pub const KEYWORD_THRESHOLD: f64 = 0.4;

/// Minimum text similarity for a fallback match (exclusive).
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Weight of keyword overlap in the keyword pass; text similarity gets the rest.
pub const KEYWORD_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPass {
    Keyword,
    Similarity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPair {
    pub english: usize,
    pub spanish: usize,
    pub score: f64,
    pub pass: MatchPass,
}

/// Partial injective mapping from English to Spanish indices, in the order
/// matches were committed.
#[derive(Debug, Clone, Default)]
pub struct MatchMap {
    pairs: Vec<MatchPair>,
    by_english: HashMap<usize, usize>,
}

impl MatchMap {
    fn commit(&mut self, pair: MatchPair, used: &mut HashSet<usize>) {
        debug!(
            english = pair.english,
            spanish = pair.spanish,
            score = pair.score,
            pass = ?pair.pass,
            "Committed match"
        );
        used.insert(pair.spanish);
        self.by_english.insert(pair.english, pair.spanish);
        self.pairs.push(pair);
    }

    /// Spanish index matched to an English index.
    pub fn get(&self, english: usize) -> Option<usize> {
        self.by_english.get(&english).copied()
    }

    pub fn contains_english(&self, english: usize) -> bool {
        self.by_english.contains_key(&english)
    }

    /// Spanish index to English index.
    pub fn inverse(&self) -> HashMap<usize, usize> {
        self.pairs.iter().map(|p| (p.spanish, p.english)).collect()
    }

    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A record's text prepared once for all comparisons.
struct Candidate {
    text: Vec<char>,
    keywords: KeywordSet,
}

impl Candidate {
    fn new(text: &str) -> Self {
        Self {
            text: normalize_for_matching(text),
            keywords: extract_keywords(text),
        }
    }
}

fn keyword_score(english: &KeywordSet, spanish: &KeywordSet) -> Option<f64> {
    let common = english.intersection(spanish).count();
    if common == 0 {
        return None;
    }
    Some(common as f64 / english.len().max(spanish.len()) as f64)
}

fn keyword_pass(
    english: &[Candidate],
    spanish: &[Candidate],
    used: &mut HashSet<usize>,
    matches: &mut MatchMap,
) {
    for (en_idx, en) in english.iter().enumerate() {
        if en.keywords.is_empty() {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (es_idx, es) in spanish.iter().enumerate() {
            if used.contains(&es_idx) || es.keywords.is_empty() {
                continue;
            }
            let Some(overlap) = keyword_score(&en.keywords, &es.keywords) else {
                continue;
            };

            let score = KEYWORD_WEIGHT * overlap
                + (1.0 - KEYWORD_WEIGHT) * normalized_similarity(&en.text, &es.text);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((es_idx, score));
            }
        }

        if let Some((es_idx, score)) = best
            && score > KEYWORD_THRESHOLD
        {
            matches.commit(
                MatchPair {
                    english: en_idx,
                    spanish: es_idx,
                    score,
                    pass: MatchPass::Keyword,
                },
                used,
            );
        }
    }
}

fn similarity_pass(
    english: &[Candidate],
    spanish: &[Candidate],
    used: &mut HashSet<usize>,
    matches: &mut MatchMap,
) {
    for (en_idx, en) in english.iter().enumerate() {
        if matches.contains_english(en_idx) {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (es_idx, es) in spanish.iter().enumerate() {
            if used.contains(&es_idx) {
                continue;
            }
            let score = normalized_similarity(&en.text, &es.text);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((es_idx, score));
            }
        }

        if let Some((es_idx, score)) = best
            && score > SIMILARITY_THRESHOLD
        {
            matches.commit(
                MatchPair {
                    english: en_idx,
                    spanish: es_idx,
                    score,
                    pass: MatchPass::Similarity,
                },
                used,
            );
        }
    }
}

/// Match English texts to Spanish texts by index.
pub fn find_matches<E, S>(english: &[E], spanish: &[S]) -> MatchMap
where
    E: AsRef<str>,
    S: AsRef<str>,
{
    let english: Vec<Candidate> = english.iter().map(|t| Candidate::new(t.as_ref())).collect();
    let spanish: Vec<Candidate> = spanish.iter().map(|t| Candidate::new(t.as_ref())).collect();

    let mut used = HashSet::new();
    let mut matches = MatchMap::default();

    keyword_pass(&english, &spanish, &mut used, &mut matches);
    let keyword_matches = matches.len();
    similarity_pass(&english, &spanish, &mut used, &mut matches);

    debug!(
        keyword_matches,
        similarity_matches = matches.len() - keyword_matches,
        "Matching finished"
    );
    matches
}
