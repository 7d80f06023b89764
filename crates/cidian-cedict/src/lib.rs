//! CC-CEDICT corpus conversion: parse the `.u8` line format and write the
//! JSON lexicon the entry store consumes.

use std::path::{Path, PathBuf};

use cidian_core::Entry;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode lexicon JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Parse one corpus line: `TRAD SIMP [PINYIN] /DEF/DEF/`.
///
/// Comment lines (`#`, `%`), blank lines and lines that do not fit the
/// grammar yield None.
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.starts_with('#') || line.starts_with('%') || line.trim().is_empty() {
        return None;
    }

    let bracket = line.find('[')?;
    if !line[..bracket].ends_with(char::is_whitespace) {
        return None;
    }

    let mut head = line[..bracket].split_whitespace();
    let traditional = head.next()?;
    let simplified = head.next()?;
    if head.next().is_some() {
        return None;
    }

    let rest = &line[bracket + 1..];
    let close = rest.find(']')?;
    let pinyin = &rest[..close];
    if pinyin.is_empty() {
        return None;
    }

    let tail = rest[close + 1..].trim();
    let defs = tail.strip_prefix('/')?.strip_suffix('/')?;
    if defs.is_empty() {
        return None;
    }

    Some(Entry {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: vec![pinyin.to_string()],
        definitions: defs.split('/').map(str::to_string).collect(),
    })
}

/// Parse a whole corpus document, skipping comment and malformed lines.
pub fn parse_corpus(raw: &str) -> Vec<Entry> {
    raw.lines().filter_map(parse_line).collect()
}

pub fn load_from_file(path: &Path) -> Result<Vec<Entry>, ConvertError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_corpus(&raw);
    tracing::info!("Parsed {} CC-CEDICT entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Convert a `.u8` corpus file into the JSON lexicon format. Returns the
/// entry count.
pub fn convert(input: &Path, output: &Path) -> Result<usize, ConvertError> {
    let entries = load_from_file(input)?;

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(output, json).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote {} entries to {}", entries.len(), output.display());
    Ok(entries.len())
}
