use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One lexicon record. Immutable after load; headwords are not unique,
/// homographs share a form with different readings or meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub simplified: String,
    #[serde(default)]
    pub traditional: String,
    /// Romanized readings in source order
    #[serde(default, deserialize_with = "string_or_seq")]
    pub pinyin: Vec<String>,
    /// Glosses in source order
    #[serde(default, deserialize_with = "string_or_seq")]
    pub definitions: Vec<String>,
}

impl Entry {
    /// The headword form used for identity: simplified, else traditional.
    pub fn form(&self) -> &str {
        if !self.simplified.is_empty() {
            &self.simplified
        } else {
            &self.traditional
        }
    }

    pub fn first_pinyin(&self) -> &str {
        self.pinyin.first().map(String::as_str).unwrap_or("")
    }
}

/// Lexicon sources store `pinyin`/`definitions` as either a bare string or
/// an array of strings; both normalize to a vector.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrSeq>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(StringOrSeq::One(s)) => vec![s],
        Some(StringOrSeq::Many(v)) => v,
    })
}

/// A lexicon document: either an array of entries or a keyed object whose
/// values are entries. Keyed objects iterate in key order, which keeps tie
/// ordering stable across loads.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum LexiconDoc {
    Entries(Vec<Entry>),
    Keyed(BTreeMap<String, Entry>),
}

impl LexiconDoc {
    pub(crate) fn into_entries(self) -> Vec<Entry> {
        match self {
            LexiconDoc::Entries(entries) => entries,
            LexiconDoc::Keyed(map) => map.into_values().collect(),
        }
    }
}
