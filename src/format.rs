// Dialkey Text Search Primitives
// Word-prefix and literal substring offsets over plain text

use regex::Regex;

/// Offset of a word whose start matches `prefix`, case-insensitively
///
/// A word starts at the beginning of the text or after a non-word character.
/// Returns the character offset (not bytes) of the word's first character, or
/// `None` when no word starts with the prefix.
///
/// # Example
/// ```
/// use dialkey::format::index_of_word_prefix;
///
/// assert_eq!(index_of_word_prefix("John Smith", "sm"), Some(5));
/// assert_eq!(index_of_word_prefix("John Smith", "mit"), None);
/// ```
pub fn index_of_word_prefix(text: &str, prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)\b{}", regex::escape(prefix));
    let re = Regex::new(&pattern).ok()?;
    let hit = re.find(text)?;
    Some(text[..hit.start()].chars().count())
}

/// Offset of a literal substring, or `None`
///
/// Exact match, case-sensitive; returns a character offset.
pub fn index_of_literal(text: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let at = text.find(needle)?;
    Some(text[..at].chars().count())
}
