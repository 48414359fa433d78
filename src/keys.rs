// Dialkey Lookup-Key Generator
// Turns a name into digit-encoded, position-tagged lookup keys

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::keypad::Keypad;
use crate::translit::Transliterator;
use crate::types::{LookupKey, NameStyle, TokenKind};

/// Process-wide cache of generated key sequences, keyed by the exact name
///
/// Only successful, non-empty sequences are stored. Entries are never evicted
/// individually; [`KeyCache::clear`] drops everything. A locale change does not
/// invalidate the cache: until cleared it keeps returning keys computed under
/// the previous interpretation.
#[derive(Debug, Default)]
pub struct KeyCache {
    entries: Mutex<FxHashMap<String, Arc<[LookupKey]>>>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<[LookupKey]>> {
        self.entries.lock().get(name).cloned()
    }

    /// Insert a generated sequence; concurrent generators for the same name
    /// may race here and the last writer wins (results are deterministic, so
    /// redundant recomputation is harmless).
    pub fn insert(&self, name: &str, keys: Arc<[LookupKey]>) {
        self.entries.lock().insert(name.to_string(), keys);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        debug!(entries = entries.len(), "clearing lookup-key cache");
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// Key generator for a resolved name style
///
/// Small dispatch table instead of a subclass hierarchy: Chinese is the only
/// style with a concrete strategy, everything else is a no-op that produces
/// "no keys".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Chinese,
    Noop,
}

impl Generator {
    /// Select the generator for a resolved style
    pub fn for_style(style: NameStyle) -> Self {
        match style {
            NameStyle::Chinese => Generator::Chinese,
            _ => Generator::Noop,
        }
    }

    /// Generate the lookup-key sequence for `name`
    ///
    /// Returns `None` for the no-op generator, for empty names, when the
    /// transliterator yields no tokens, and when any token cannot be
    /// digit-encoded. Absence is not an error: callers fall back to showing
    /// the name without a highlight.
    pub fn generate(
        &self,
        name: &str,
        transliterator: &dyn Transliterator,
        cache: &KeyCache,
    ) -> Option<Arc<[LookupKey]>> {
        match self {
            Generator::Chinese => chinese_keys(name, transliterator, cache),
            Generator::Noop => None,
        }
    }
}

/// The Chinese strategy: transliterate, digit-encode per token, cache
///
/// Walks the token sequence with a running character offset and a scratch
/// buffer. Phonetic tokens encode their transliterated form, literal tokens
/// their original form, separators contribute a single space. One unencodable
/// character aborts the whole name (no partial keys, nothing cached).
fn chinese_keys(
    name: &str,
    transliterator: &dyn Transliterator,
    cache: &KeyCache,
) -> Option<Arc<[LookupKey]>> {
    if name.is_empty() {
        return None;
    }
    if let Some(hit) = cache.get(name) {
        trace!(name, "lookup-key cache hit");
        return Some(hit);
    }

    let tokens = transliterator.tokenize(name);
    if tokens.is_empty() {
        return None;
    }

    let keypad = Keypad::global();
    let mut keys = Vec::with_capacity(tokens.len());
    let mut position = 0usize;
    let mut scratch = String::new();

    for token in tokens {
        match token.kind {
            TokenKind::Phonetic => {
                let target = token.target.as_deref()?;
                match keypad.encode(target) {
                    Ok(digits) => scratch.push_str(&digits),
                    Err(err) => {
                        debug!(name, %err, "dropping name from digit index");
                        return None;
                    }
                }
            }
            TokenKind::Literal => match keypad.encode(&token.source) {
                Ok(digits) => scratch.push_str(&digits),
                Err(err) => {
                    debug!(name, %err, "dropping name from digit index");
                    return None;
                }
            },
            TokenKind::Separator => scratch.push(' '),
        }

        if !scratch.is_empty() {
            let source_len = token.source.chars().count();
            keys.push(LookupKey::new(
                token.kind,
                token.source,
                std::mem::take(&mut scratch),
                position,
            ));
            position += source_len;
        }
    }

    if keys.is_empty() {
        return None;
    }
    let keys: Arc<[LookupKey]> = keys.into();
    cache.insert(name, keys.clone());
    Some(keys)
}
