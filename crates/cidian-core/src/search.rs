use std::sync::Arc;

use cidian_pinyin::{contains_hanzi, fold, looks_like_pinyin, strip_tone_digits};

use crate::entry::Entry;
use crate::store::Loaded;

pub(crate) const DEFAULT_LIMIT: usize = 20;

/// Exact ideographic identity.
const SCORE_EXACT_HANZI: u32 = 100;
/// Hanzi substring containment, raw or folded.
const SCORE_HANZI_SUBSTRING: u32 = 60;
/// Base for gloss substring matches; the tie-break rank is added on top.
const SCORE_DEFINITION_BASE: u32 = 40;
/// Bonus for tone-aware reading comparison when the query itself carries
/// tone notation.
const SCORE_TONED_PINYIN_BONUS: u32 = 5;

/// A scored candidate. Transient, lives for one search call.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub entry: Arc<Entry>,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum results returned; 0 falls back to the default of 20.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

impl SearchOptions {
    pub(crate) fn effective_limit(&self) -> usize {
        if self.limit == 0 { DEFAULT_LIMIT } else { self.limit }
    }
}

/// Tie-break rank over case/trim-folded forms: exact (100) > prefix (75) >
/// substring (50) > no match (0), independent of string length.
pub fn rank(target: &str, query: &str) -> u32 {
    if target.is_empty() {
        return 0;
    }
    let t = fold(target);
    let q = fold(query);
    if t == q {
        100
    } else if t.starts_with(&q) {
        75
    } else if t.contains(&q) {
        50
    } else {
        0
    }
}

/// Propose scored candidates for a trimmed, non-empty query.
///
/// The query class is decided once: any hanzi code point selects the
/// ideographic branch, everything else scans readings, glosses and the
/// simplified form. Strategies are alternatives: an entry's score is the
/// max over them, never the sum.
pub(crate) fn collect_hits(loaded: &Loaded, query: &str) -> Vec<SearchHit> {
    if contains_hanzi(query) {
        hanzi_hits(loaded, query)
    } else {
        scan_hits(loaded, query)
    }
}

fn hanzi_hits(loaded: &Loaded, query: &str) -> Vec<SearchHit> {
    let exact = loaded.lookup_exact(query);
    if !exact.is_empty() {
        // exact ideographic identity is authoritative, skip everything else
        return exact
            .into_iter()
            .map(|entry| SearchHit { entry, score: SCORE_EXACT_HANZI })
            .collect();
    }

    loaded
        .entries
        .iter()
        .filter(|e| e.simplified.contains(query) || e.traditional.contains(query))
        .map(|e| SearchHit { entry: Arc::clone(e), score: SCORE_HANZI_SUBSTRING })
        .collect()
}

fn scan_hits(loaded: &Loaded, query: &str) -> Vec<SearchHit> {
    let q_folded = fold(query);
    let q_stripped = strip_tone_digits(query);
    let q_is_pinyin = looks_like_pinyin(query);

    let mut hits = Vec::new();
    for entry in &loaded.entries {
        let mut score = 0;

        for reading in &entry.pinyin {
            if reading.is_empty() {
                continue;
            }
            score = score.max(rank(&strip_tone_digits(reading), &q_stripped));
            if q_is_pinyin {
                // tone-aware comparison outranks the tone-insensitive one
                score = score.max(rank(reading, query) + SCORE_TONED_PINYIN_BONUS);
            }
        }

        let joined = entry.definitions.join("; ");
        if !joined.is_empty() && fold(&joined).contains(&q_folded) {
            score = score.max(SCORE_DEFINITION_BASE + rank(&joined, query));
        }

        if !entry.simplified.is_empty() && fold(&entry.simplified).contains(&q_folded) {
            score = score.max(SCORE_HANZI_SUBSTRING);
        }

        if score > 0 {
            hits.push(SearchHit { entry: Arc::clone(entry), score });
        }
    }
    hits
}
