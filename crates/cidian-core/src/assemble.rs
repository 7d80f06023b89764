use std::collections::HashMap;
use std::sync::Arc;

use crate::entry::Entry;
use crate::search::SearchHit;

/// A search hit projected for presentation. Constructed fresh per search,
/// never mutated.
#[derive(Debug, Clone)]
pub struct DisplayResult {
    pub simplified: String,
    pub traditional: String,
    pub pinyin: Vec<String>,
    pub definitions: Vec<String>,
    pub score: u32,
    pub entry: Arc<Entry>,
}

/// Rendering-ready strings for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntry {
    pub hanzi: String,
    pub pinyin: String,
    pub definitions: String,
}

impl DisplayResult {
    pub fn format(&self) -> FormattedEntry {
        FormattedEntry {
            hanzi: if !self.simplified.is_empty() {
                self.simplified.clone()
            } else {
                self.traditional.clone()
            },
            pinyin: self.pinyin.join(" / "),
            definitions: self.definitions.join("; "),
        }
    }
}

/// Dedup key: headword form plus the raw first reading. Deliberately
/// distinct from the favorites identity key, which strips tone digits.
fn dedup_key(entry: &Entry) -> String {
    format!("{}|{}", entry.form(), entry.first_pinyin())
}

/// Keep the best hit per identity, sort by score descending (ties keep
/// first-encounter order), truncate to `limit`, project for display.
pub fn assemble(hits: Vec<SearchHit>, limit: usize) -> Vec<DisplayResult> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, SearchHit> = HashMap::new();

    for hit in hits {
        let key = dedup_key(&hit.entry);
        match best.get(&key) {
            Some(existing) if existing.score >= hit.score => {}
            Some(_) => {
                best.insert(key, hit);
            }
            None => {
                order.push(key.clone());
                best.insert(key, hit);
            }
        }
    }

    let mut unique: Vec<SearchHit> = order.into_iter().filter_map(|k| best.remove(&k)).collect();
    // stable sort keeps equal scores in first-encounter order
    unique.sort_by(|a, b| b.score.cmp(&a.score));
    unique.truncate(limit);

    unique.into_iter().map(project).collect()
}

fn project(hit: SearchHit) -> DisplayResult {
    let pinyin = if hit.entry.pinyin.is_empty() {
        vec![String::new()]
    } else {
        hit.entry.pinyin.clone()
    };

    DisplayResult {
        simplified: hit.entry.simplified.clone(),
        traditional: hit.entry.traditional.clone(),
        pinyin,
        definitions: hit.entry.definitions.clone(),
        score: hit.score,
        entry: hit.entry,
    }
}
