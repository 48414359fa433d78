// Dialkey Digit Matcher
// Two-pass matching of a dial-pad digit query against a lookup-key sequence

use std::ops::Range;

use crate::types::{LookupKey, TokenKind};

/// Match a digit query against a key sequence
///
/// Runs the contiguous pass first and the initials-only pass second, returning
/// the first hit as a `[start, end)` character range into the original name.
/// `name_len` is the name's length in characters, used when a match runs to the
/// end of the key sequence.
///
/// Both passes are pure functions of their inputs; no state is kept between
/// calls.
pub fn match_digits(keys: &[LookupKey], filter: &str, name_len: usize) -> Option<Range<usize>> {
    if keys.is_empty() || filter.is_empty() {
        return None;
    }
    match_contiguous(keys, filter, name_len).or_else(|| match_initials(keys, filter, name_len))
}

/// First digit of a key, `' '` for separator keys
///
/// Generated keys always carry at least one digit; an empty `digits` is
/// treated like a separator so a hand-built key cannot panic the scan.
#[inline]
fn head(key: &LookupKey) -> u8 {
    key.digits.as_bytes().first().copied().unwrap_or(b' ')
}

/// Pass 1: consume the filter digit-by-digit across consecutive keys
///
/// A candidate starts at any key whose digits begin with the first filter
/// digit. Separator keys inside the candidate are skipped, never matched
/// against. If the filter is exhausted inside a literal key the highlight ends
/// exactly after the consumed characters; inside a phonetic key it snaps to the
/// start of the next key (or the end of the name), so a partial syllable is
/// never highlighted. A mismatch part-way through a key restarts the search
/// right after the candidate's starting key.
fn match_contiguous(keys: &[LookupKey], filter: &str, name_len: usize) -> Option<Range<usize>> {
    let filter = filter.as_bytes();
    let mut candidate = 0;

    while candidate < keys.len() {
        if head(&keys[candidate]) != filter[0] {
            candidate += 1;
            continue;
        }

        let mut i = candidate;
        let mut j = 0;
        while i < keys.len() {
            let key = &keys[i];
            let digits = key.digits.as_bytes();
            if head(key) != b' ' {
                let mut k = 0;
                while k < digits.len() && j < filter.len() && digits[k] == filter[j] {
                    j += 1;
                    k += 1;
                }
                if j == filter.len() {
                    let start = keys[candidate].position;
                    let end = if key.kind == TokenKind::Literal {
                        key.position + k
                    } else if i + 1 == keys.len() {
                        name_len
                    } else {
                        keys[i + 1].position
                    };
                    return Some(start..end);
                }
                if k != digits.len() {
                    // Mismatch inside this key: abandon the candidate and
                    // rescan from the key after its start
                    break;
                }
            }
            i += 1;
        }

        candidate += 1;
    }

    None
}

/// Pass 2: consume one filter digit per key, first digits only
///
/// Separator keys are skipped without consuming a filter digit and without
/// breaking the run. The highlight spans from the candidate's start to the key
/// after the last consumed one (or the end of the name).
fn match_initials(keys: &[LookupKey], filter: &str, name_len: usize) -> Option<Range<usize>> {
    let filter = filter.as_bytes();
    let mut candidate = 0;

    while candidate < keys.len() {
        if head(&keys[candidate]) != filter[0] {
            candidate += 1;
            continue;
        }

        let mut i = candidate;
        let mut j = 0;
        while i < keys.len() && j < filter.len() {
            let c = head(&keys[i]);
            if c == filter[j] {
                j += 1;
            } else if c != b' ' {
                break;
            }
            i += 1;
        }

        if j == filter.len() {
            let start = keys[candidate].position;
            let end = if i == keys.len() {
                name_len
            } else {
                keys[i].position
            };
            return Some(start..end);
        }

        candidate += 1;
    }

    None
}
