// Integration tests for digit and prefix highlighting

mod common;

use std::sync::Arc;

use common::StubTransliterator;
use dialkey::{Language, NameSearch};

fn chinese_engine() -> NameSearch {
    NameSearch::with_language(Arc::new(StubTransliterator::new()), Language::Chinese)
}

// ============ Digit highlight: contiguous pass ============

#[test]
fn test_digits_within_first_syllable() {
    let search = chinese_engine();
    // 54 = Li: the whole first syllable is highlighted, not a partial one
    assert_eq!(search.highlight_digits("李雷", "54"), Some(0..1));
}

#[test]
fn test_digits_spanning_both_syllables() {
    let search = chinese_engine();
    // 5453 = Li + Le..., 54534 = Li + Lei
    assert_eq!(search.highlight_digits("李雷", "5453"), Some(0..2));
    assert_eq!(search.highlight_digits("李雷", "54534"), Some(0..2));
}

#[test]
fn test_digits_matching_second_syllable_only() {
    let search = chinese_engine();
    // 534 = Lei
    assert_eq!(search.highlight_digits("李雷", "534"), Some(1..2));
}

#[test]
fn test_digit_match_spans_separator() {
    let search = chinese_engine();
    // 545 = Li + L..., crossing the space
    assert_eq!(search.highlight_digits("李 雷", "545"), Some(0..3));
}

#[test]
fn test_trailing_separator_not_highlighted() {
    let search = chinese_engine();
    // The syllable match ends inside 雷; the snap lands on the trailing
    // space's start, leaving it out of the highlight
    assert_eq!(search.highlight_digits("雷 ", "534"), Some(0..1));
}

#[test]
fn test_literal_match_ends_exactly() {
    let search = chinese_engine();
    assert_eq!(search.highlight_digits("John Smith", "76"), Some(5..7));
    assert_eq!(search.highlight_digits("John Smith", "764"), Some(5..8));
}

// ============ Digit highlight: initials pass ============

#[test]
fn test_initials_across_syllables() {
    let search = chinese_engine();
    // 55 = L..L..
    assert_eq!(search.highlight_digits("李雷", "55"), Some(0..2));
}

#[test]
fn test_initials_across_words() {
    let search = chinese_engine();
    // 57 = J..S.., skipping the space without consuming a digit
    assert_eq!(search.highlight_digits("John Smith", "57"), Some(0..10));
}

#[test]
fn test_initials_stop_before_unconsumed_key() {
    let search = chinese_engine();
    // 59 = L..W..: 明 (ming) is not part of the match
    assert_eq!(search.highlight_digits("李王明", "59"), Some(0..2));
}

// ============ No highlight ============

#[test]
fn test_unmatched_digits() {
    let search = chinese_engine();
    assert_eq!(search.highlight_digits("李雷", "99"), None);
    assert_eq!(search.highlight_digits("李雷", "5345"), None);
    assert_eq!(search.highlight_digits("John Smith", "5555"), None);
}

#[test]
fn test_empty_inputs_mean_no_highlight() {
    let search = chinese_engine();
    assert_eq!(search.highlight_digits("李雷", ""), None);
    assert_eq!(search.highlight_digits("", "54"), None);
    assert_eq!(search.highlight_digits("", ""), None);
}

#[test]
fn test_unindexable_name_means_no_highlight() {
    let search = chinese_engine();
    // '-' cannot be digit-encoded, so the name has no keys at all
    assert_eq!(search.highlight_digits("李-雷", "54"), None);
}

#[test]
fn test_western_name_outside_chinese_language() {
    let search =
        NameSearch::with_language(Arc::new(StubTransliterator::new()), Language::Other);
    assert_eq!(search.highlight_digits("John Smith", "76"), None);
}

// ============ Prefix highlight ============

#[test]
fn test_prefix_highlights_word_start() {
    let search = chinese_engine();
    assert_eq!(search.highlight_prefix("John Smith", "sm"), Some(5..7));
    assert_eq!(search.highlight_prefix("John Smith", "jo"), Some(0..2));
}

#[test]
fn test_prefix_strips_leading_punctuation() {
    let search = chinese_engine();
    assert_eq!(search.highlight_prefix("John Smith", "+sm"), Some(5..7));
    assert_eq!(search.highlight_prefix("John Smith", "((jo"), Some(0..2));
}

#[test]
fn test_prefix_no_match_cases() {
    let search = chinese_engine();
    assert_eq!(search.highlight_prefix("John Smith", "mith"), None);
    assert_eq!(search.highlight_prefix("John Smith", "zz"), None);
    assert_eq!(search.highlight_prefix("John Smith", "+++"), None);
    assert_eq!(search.highlight_prefix("John Smith", ""), None);
}

#[test]
fn test_prefix_offsets_are_characters() {
    let search = chinese_engine();
    // Two ideographs and a space before "Lei"
    assert_eq!(search.highlight_prefix("李雷 Lei", "le"), Some(3..5));
}

// ============ Literal highlight ============

#[test]
fn test_literal_substring() {
    let search = chinese_engine();
    assert_eq!(search.highlight_literal("555-0199", "0199"), Some(4..8));
    assert_eq!(search.highlight_literal("555-0199", "5-0"), Some(2..5));
    assert_eq!(search.highlight_literal("555-0199", "42"), None);
}

// ============ End-to-end workflow ============

#[test]
fn test_digit_then_prefix_workflow() {
    let search = chinese_engine();

    // A dialer narrows by digits first
    let range = search.highlight_digits("李雷", "5453").unwrap();
    assert_eq!(range, 0..2);
    let highlighted: String = "李雷"
        .chars()
        .skip(range.start)
        .take(range.end - range.start)
        .collect();
    assert_eq!(highlighted, "李雷");

    // Then the user switches to text search
    assert_eq!(search.highlight_prefix("李雷 Lei", "lei"), Some(3..6));

    // Keys were cached along the way
    assert!(search.cached_names() >= 1);
}
