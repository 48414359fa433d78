// Dialkey Script Classifier
// Guesses a name's naming convention from its codepoints

use crate::types::{Language, NameStyle};

/// Guess the naming convention a display name follows
///
/// Scans codepoints left to right. Latin letters only make the answer
/// tentatively `Western`; the first decisive non-Latin letter wins immediately.
/// A CJK ideograph cannot be resolved on its own, so the rest of the string is
/// searched for kana or hangul before defaulting to `Chinese`.
///
/// # Examples
/// ```
/// use dialkey::{classify, NameStyle};
///
/// assert_eq!(classify("John Smith"), NameStyle::Western);
/// assert_eq!(classify("李雷"), NameStyle::Chinese);
/// assert_eq!(classify("山田タロウ"), NameStyle::Japanese);
/// assert_eq!(classify("김철수"), NameStyle::Korean);
/// assert_eq!(classify("123"), NameStyle::Undefined);
/// ```
pub fn classify(name: &str) -> NameStyle {
    let mut style = NameStyle::Undefined;
    let mut iter = name.chars();
    while let Some(ch) = iter.next() {
        if ch.is_alphabetic() {
            if !is_latin(ch) {
                if is_cjk_ideograph(ch) {
                    // Chinese, Japanese or Korean - look at the rest of the
                    // name for a phonetic script that settles it
                    return classify_cjk_tail(iter.as_str());
                }
                if is_japanese_phonetic(ch) {
                    return NameStyle::Japanese;
                }
                if is_korean(ch) {
                    return NameStyle::Korean;
                }
            }
            style = NameStyle::Western;
        }
    }
    style
}

/// Secondary scan after an ambiguous CJK ideograph
///
/// Kana or hangul anywhere in the remainder decides the style; otherwise
/// ideographs default to Chinese.
fn classify_cjk_tail(rest: &str) -> NameStyle {
    for ch in rest.chars() {
        if ch.is_alphabetic() {
            if is_japanese_phonetic(ch) {
                return NameStyle::Japanese;
            }
            if is_korean(ch) {
                return NameStyle::Korean;
            }
        }
    }
    NameStyle::Chinese
}

/// Adjust a guessed style to the generator actually used under `language`
///
/// Two overrides, in this order:
/// 1. Ambiguous `Cjk` resolves to `Chinese` unless the active language is
///    Japanese or Korean.
/// 2. `Western` resolves to `Chinese` when the active language is Chinese, so
///    transliterated Western-looking names still get phonetic lookup.
pub fn resolve(style: NameStyle, language: Language) -> NameStyle {
    let style = match style {
        NameStyle::Cjk if language != Language::Japanese && language != Language::Korean => {
            NameStyle::Chinese
        }
        other => other,
    };
    if style == NameStyle::Western && language == Language::Chinese {
        NameStyle::Chinese
    } else {
        style
    }
}

/// Latin-family blocks: Basic Latin, Latin-1 Supplement, Extended-A/B,
/// Extended Additional
#[inline]
fn is_latin(ch: char) -> bool {
    let code = ch as u32;
    (0x0000..=0x024F).contains(&code) || (0x1E00..=0x1EFF).contains(&code)
}

/// CJK ideograph blocks, including extensions and compatibility forms
#[inline]
fn is_cjk_ideograph(ch: char) -> bool {
    let code = ch as u32;
    (0x4E00..=0x9FFF).contains(&code)      // CJK Unified Ideographs
        || (0x3400..=0x4DBF).contains(&code)   // Extension A
        || (0x20000..=0x2A6DF).contains(&code) // Extension B
        || (0x3000..=0x303F).contains(&code)   // CJK Symbols and Punctuation
        || (0x2E80..=0x2EFF).contains(&code)   // CJK Radicals Supplement
        || (0x3300..=0x33FF).contains(&code)   // CJK Compatibility
        || (0xFE30..=0xFE4F).contains(&code)   // CJK Compatibility Forms
        || (0xF900..=0xFAFF).contains(&code)   // CJK Compatibility Ideographs
        || (0x2F800..=0x2FA1F).contains(&code) // Compatibility Ideographs Supplement
}

/// Japanese phonetic blocks: hiragana, katakana and their half/full-width forms
#[inline]
fn is_japanese_phonetic(ch: char) -> bool {
    let code = ch as u32;
    (0x3040..=0x309F).contains(&code)      // Hiragana
        || (0x30A0..=0x30FF).contains(&code)   // Katakana
        || (0x31F0..=0x31FF).contains(&code)   // Katakana Phonetic Extensions
        || (0xFF00..=0xFFEF).contains(&code)   // Halfwidth and Fullwidth Forms
}

/// Korean blocks: hangul syllables and jamo
#[inline]
fn is_korean(ch: char) -> bool {
    let code = ch as u32;
    (0xAC00..=0xD7AF).contains(&code)      // Hangul Syllables
        || (0x1100..=0x11FF).contains(&code)   // Hangul Jamo
        || (0x3130..=0x318F).contains(&code)   // Hangul Compatibility Jamo
}
