// Dialkey Name Search
// Context object tying together classifier, key generator and matcher

use std::ops::Range;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::format;
use crate::keys::{Generator, KeyCache};
use crate::matcher;
use crate::script;
use crate::translit::{LiteralTokenizer, Transliterator};
use crate::types::{Language, LookupKey, NameStyle};

/// Locale-aware name search and highlight engine
///
/// Owns the pieces of process-wide state the engine needs:
/// - the active interpretation language (ambiguous scripts resolve under it),
/// - the lookup-key cache,
/// - the transliterator the key generator calls out to.
///
/// All methods are synchronous and in-memory; the object is `Send + Sync` and
/// can be shared behind an `Arc` across threads.
///
/// Highlight methods return `Some(start..end)` as a character range to
/// emphasise, or `None` meaning "display the text unmodified". `None` is the
/// expected no-match outcome, never a failure.
pub struct NameSearch {
    language: RwLock<Language>,
    cache: KeyCache,
    transliterator: Arc<dyn Transliterator>,
}

impl NameSearch {
    /// Create an engine with the system default language
    ///
    /// The startup language comes from the process environment (`LC_ALL`,
    /// `LC_MESSAGES`, `LANG`); use [`NameSearch::set_active_language`] to
    /// change it later.
    pub fn new(transliterator: Arc<dyn Transliterator>) -> Self {
        Self::with_language(transliterator, Language::system_default())
    }

    /// Create an engine with an explicit interpretation language
    pub fn with_language(transliterator: Arc<dyn Transliterator>, language: Language) -> Self {
        Self {
            language: RwLock::new(language),
            cache: KeyCache::new(),
            transliterator,
        }
    }

    /// Guess the naming convention of a display name
    pub fn classify(&self, name: &str) -> NameStyle {
        script::classify(name)
    }

    /// The language ambiguous scripts are currently resolved under
    pub fn active_language(&self) -> Language {
        *self.language.read()
    }

    /// Switch the interpretation language
    ///
    /// Does NOT invalidate the lookup-key cache: cached names keep their keys
    /// from the previous interpretation until [`NameSearch::clear_cache`] is
    /// called.
    pub fn set_active_language(&self, language: Language) {
        debug!(language = language.code(), "switching interpretation language");
        *self.language.write() = language;
    }

    /// Drop every cached lookup-key sequence
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of names with cached keys
    pub fn cached_names(&self) -> usize {
        self.cache.len()
    }

    /// Generate (or fetch cached) lookup keys for a name
    ///
    /// The name is classified, the style resolved under the active language,
    /// and the matching generator invoked. `None` when the resolved style has
    /// no generator, the name is empty, transliteration yields nothing, or a
    /// fragment cannot be digit-encoded.
    pub fn generate_keys(&self, name: &str) -> Option<Arc<[LookupKey]>> {
        self.generate_keys_for_style(name, script::classify(name))
    }

    /// Generate lookup keys for a name whose style the caller already knows
    pub fn generate_keys_for_style(
        &self,
        name: &str,
        style: NameStyle,
    ) -> Option<Arc<[LookupKey]>> {
        let resolved = script::resolve(style, self.active_language());
        Generator::for_style(resolved).generate(name, self.transliterator.as_ref(), &self.cache)
    }

    /// Highlight the word matching a typed prefix
    ///
    /// Leading non-alphanumeric characters of `prefix` are ignored. The range
    /// covers exactly the trimmed prefix length at the matched word start.
    pub fn highlight_prefix(&self, text: &str, prefix: &str) -> Option<Range<usize>> {
        let trimmed = prefix.trim_start_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            return None;
        }
        let start = format::index_of_word_prefix(text, trimmed)?;
        Some(start..start + trimmed.chars().count())
    }

    /// Highlight the part of a name matching a dial-pad digit query
    ///
    /// Runs the contiguous pass, then the initials pass, over the name's
    /// lookup keys.
    pub fn highlight_digits(&self, name: &str, filter: &str) -> Option<Range<usize>> {
        if name.is_empty() || filter.is_empty() {
            return None;
        }
        let keys = self.generate_keys(name)?;
        matcher::match_digits(&keys, filter, name.chars().count())
    }

    /// Highlight a literal substring (e.g. digits inside a phone number)
    pub fn highlight_literal(&self, text: &str, needle: &str) -> Option<Range<usize>> {
        let start = format::index_of_literal(text, needle)?;
        Some(start..start + needle.chars().count())
    }
}

impl Default for NameSearch {
    /// Engine with the built-in literal tokenizer and the system language
    fn default() -> Self {
        Self::new(Arc::new(LiteralTokenizer))
    }
}
