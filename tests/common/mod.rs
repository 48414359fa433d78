// Shared test transliterator with a small fixed phonetic table

// Not every test binary uses every helper here
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use dialkey::{Token, Transliterator};

/// Transliterator stub covering a handful of characters, counting calls
///
/// Ideographs in the table become phonetic tokens, whitespace becomes
/// separators, anything else becomes a one-character literal token. The call
/// counter lets tests assert that the cache short-circuits tokenization.
#[derive(Default)]
pub struct StubTransliterator {
    calls: AtomicUsize,
}

impl StubTransliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transliterator for StubTransliterator {
    fn tokenize(&self, name: &str) -> Vec<Token> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        name.chars()
            .map(|ch| match pinyin(ch) {
                Some(target) => Token::phonetic(ch.to_string(), target),
                None if ch.is_whitespace() => Token::separator(ch.to_string()),
                None => Token::literal(ch.to_string()),
            })
            .collect()
    }
}

fn pinyin(ch: char) -> Option<&'static str> {
    match ch {
        '李' => Some("li"),
        '雷' => Some("lei"),
        '王' => Some("wang"),
        '张' => Some("zhang"),
        '伟' => Some("wei"),
        '小' => Some("xiao"),
        '明' => Some("ming"),
        // Deliberately broken entry: the apostrophe has no dial-pad digit
        '〇' => Some("ling'"),
        _ => None,
    }
}
