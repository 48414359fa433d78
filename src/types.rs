// Dialkey Type Definitions
// Core types for name styles, lookup keys and digit encoding

use thiserror::Error;

/// Naming convention guessed from a display name's script
///
/// Computed on demand from the name's codepoints; never stored per contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// No letters found in the name
    Undefined,

    /// Latin-script (or otherwise non-CJK lettered) name
    Western,

    /// CJK ideographs whose language could not be narrowed down
    Cjk,

    /// CJK ideographs with no Japanese or Korean phonetic script present
    Chinese,

    /// Contains kana (or a CJK ideograph followed by kana)
    Japanese,

    /// Contains hangul (or a CJK ideograph followed by hangul)
    Korean,
}

impl std::fmt::Display for NameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStyle::Undefined => write!(f, "UNDEFINED"),
            NameStyle::Western => write!(f, "WESTERN"),
            NameStyle::Cjk => write!(f, "CJK"),
            NameStyle::Chinese => write!(f, "CHINESE"),
            NameStyle::Japanese => write!(f, "JAPANESE"),
            NameStyle::Korean => write!(f, "KOREAN"),
        }
    }
}

/// Active interpretation language
///
/// Ambiguous scripts are resolved to a concrete naming convention under this
/// language. Only the three CJK languages change resolution; everything else
/// behaves as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Chinese,
    Japanese,
    Korean,
    #[default]
    Other,
}

impl Language {
    /// ISO 639-1 code ("und" for `Other`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Other => "und",
        }
    }

    /// Parse a locale tag such as "zh", "zh-CN", "ja_JP.UTF-8"
    ///
    /// Only the primary subtag matters; anything that is not Chinese, Japanese
    /// or Korean collapses to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "zh" => Language::Chinese,
            "ja" => Language::Japanese,
            "ko" => Language::Korean,
            _ => Language::Other,
        }
    }

    /// Startup default read from the process environment
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES`, `LANG` in that order, like a libc locale
    /// lookup. Missing or unparseable values give `Other`.
    pub fn system_default() -> Self {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(tag) = std::env::var(var) {
                if !tag.is_empty() {
                    return Language::from_tag(&tag);
                }
            }
        }
        Language::Other
    }
}

/// Kind of fragment the transliterator produced for a slice of the name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Ideographs carrying a transliterated (phonetic) form
    Phonetic,
    /// Text matched literally (Latin words, digits)
    Literal,
    /// Whitespace between words
    Separator,
}

/// A digit-encoded, position-tagged fragment of a name
///
/// `digits` holds only `'0'..='9'`, or a single `' '` for separator keys, and is
/// never empty. `position` is the character offset (scalar values, not bytes) of
/// `source` in the original name; concatenating `source` over a generated
/// sequence in `position` order reproduces the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    /// Kind of the token this key was derived from
    pub kind: TokenKind,

    /// Original substring of the name
    pub source: String,

    /// Dial-pad digit encoding of the phonetic/literal fragment
    pub digits: String,

    /// Character offset of `source` in the original name
    pub position: usize,
}

impl LookupKey {
    pub fn new(
        kind: TokenKind,
        source: impl Into<String>,
        digits: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            digits: digits.into(),
            position,
        }
    }
}

/// Digit-encoding failure
///
/// A single unencodable character aborts key generation for the whole name; the
/// caller degrades to "no keys" rather than propagating this further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("character '{ch}' has no dial-pad digit")]
    Unmapped { ch: char },
}
