use unicode_normalization::UnicodeNormalization;

/// Tone-marked vowels recognized in queries (digit notation covers the rest).
const TONE_MARKED_VOWELS: &[char] = &[
    'ā', 'ē', 'ī', 'ō', 'ū', 'ǖ', 'ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǘ', 'ǚ', 'ǜ',
];

/// Canonical comparison form: NFC-compose, lowercase, trim.
///
/// Every literal comparison in the search path goes through this, so hanzi,
/// diacritic-bearing pinyin and plain English all compare the same way.
pub fn fold(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let composed: String = s.nfc().collect();
    composed.to_lowercase().trim().to_string()
}

/// Remove digit tone notation from a reading: "Ni3 hao3" -> "ni hao".
///
/// Strips ASCII digits, collapses whitespace runs to single spaces, trims
/// and lowercases. Tone diacritics are left alone; readings written with
/// vowel marks keep them and are compared via [`fold`] instead.
pub fn strip_tone_digits(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let without_digits: String = s.chars().filter(|c| !c.is_ascii_digit()).collect();
    let collapsed = without_digits.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// True if the string contains any CJK unified ideograph (U+4E00..=U+9FFF).
pub fn contains_hanzi(s: &str) -> bool {
    s.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// True if the string carries tone notation: an ASCII digit or one of the
/// recognized tone-marked vowels, case-insensitively.
pub fn looks_like_pinyin(s: &str) -> bool {
    s.chars().any(|c| {
        c.is_ascii_digit() || c.to_lowercase().any(|l| TONE_MARKED_VOWELS.contains(&l))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases_and_trims() {
        assert_eq!(fold("  Hello World  "), "hello world");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn test_fold_composes_decomposed_diacritics() {
        // "nǐ" written as 'n' + 'i' + combining caron composes to U+01D0
        let decomposed = "ni\u{030c}";
        assert_eq!(fold(decomposed), "nǐ");
        assert_eq!(fold(decomposed), fold("nǐ"));
    }

    #[test]
    fn test_fold_leaves_hanzi_unchanged() {
        assert_eq!(fold("你好"), "你好");
    }

    #[test]
    fn test_strip_tone_digits_basic() {
        assert_eq!(strip_tone_digits("ni3 hao3"), "ni hao");
        assert_eq!(strip_tone_digits("Ni3 Hao3"), "ni hao");
    }

    #[test]
    fn test_strip_tone_digits_collapses_whitespace() {
        assert_eq!(strip_tone_digits("  ni3   hao3 "), "ni hao");
        assert_eq!(strip_tone_digits("zhong1\tguo2"), "zhong guo");
    }

    #[test]
    fn test_strip_tone_digits_keeps_diacritics() {
        assert_eq!(strip_tone_digits("nǐ hǎo"), "nǐ hǎo");
    }

    #[test]
    fn test_strip_tone_digits_all_digits_becomes_empty() {
        assert_eq!(strip_tone_digits("3"), "");
        assert_eq!(strip_tone_digits(""), "");
    }

    #[test]
    fn test_contains_hanzi() {
        assert!(contains_hanzi("你好"));
        assert!(contains_hanzi("say 你 now"));
        assert!(contains_hanzi("\u{4e00}"));
        assert!(contains_hanzi("\u{9fff}"));
        assert!(!contains_hanzi("ni hao"));
        assert!(!contains_hanzi("hello"));
        // Kana is outside the unified-ideograph block
        assert!(!contains_hanzi("おはよう"));
    }

    #[test]
    fn test_looks_like_pinyin_digits() {
        assert!(looks_like_pinyin("ni3"));
        assert!(looks_like_pinyin("hao 3"));
        assert!(!looks_like_pinyin("ni hao"));
    }

    #[test]
    fn test_looks_like_pinyin_marked_vowels() {
        assert!(looks_like_pinyin("nǐ"));
        assert!(looks_like_pinyin("mā"));
        assert!(looks_like_pinyin("NǏ HǍO"));
        assert!(looks_like_pinyin("lǜ"));
        // Acute/grave marks on plain vowels are not in the recognized set
        assert!(!looks_like_pinyin("hào"));
        assert!(!looks_like_pinyin("má"));
    }
}
