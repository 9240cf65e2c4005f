//! Ratcliff/Obershelp "gestalt" similarity over characters.
//!
//! The score is the classic diff ratio `2·M / T`, where `M` is the number
//! of characters in the matching blocks found by recursively taking the
//! longest common substring, and `T` the combined length. Characters that
//! are very frequent in the second sequence (1% of it, once it reaches 200
//! characters) do not seed matches, although they can still extend one.

use std::collections::HashMap;

/// Only this many leading characters take part in a comparison, so long
/// explanatory tails do not dominate the score.
pub const COMPARE_PREFIX_CHARS: usize = 200;

const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of equal characters: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

pub struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let popular = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= popular);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` x `b[blo..bhi]`, earliest in
    /// `a` (then in `b`) on ties.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Grow across popular characters, which never seed a match.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Block {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// Non-overlapping matching blocks in ascending order.
    pub fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_by_key(|b| (b.a_start, b.b_start));
        blocks
    }

    /// Similarity in `[0, 1]`; two empty sequences are identical.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|b| b.size).sum();
        2.0 * matched as f64 / total as f64
    }
}

/// Lower-cased leading characters of a text, ready for comparison.
pub fn normalize_for_matching(text: &str) -> Vec<char> {
    text.to_lowercase().chars().take(COMPARE_PREFIX_CHARS).collect()
}

/// Symmetric ratio of two normalized texts.
///
/// The raw ratio depends on argument order in two ways: the
/// popular-character rule looks only at the second sequence, and equally
/// long matches are resolved by earliest position in the first. The pair is
/// put in a fixed order first so both directions score the same.
pub fn normalized_similarity(a: &[char], b: &[char]) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    SequenceMatcher::new(first, second).ratio()
}

/// Similarity of two raw texts over their lower-cased 200-character prefixes.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize_for_matching(a), &normalize_for_matching(b))
}
