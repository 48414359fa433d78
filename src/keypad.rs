// Dialkey Keypad Table
// Maps letters to the dial-pad digit printed alongside them

use crate::types::EncodeError;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Interleaved table: each digit is followed by the letters it carries.
/// Digits map to themselves, letters (both cases) to the preceding digit.
const LETTER_DIGIT_TABLE: &str = "012abcABC3defDEF4ghiGHI5jklJKL6mnoMNO7pqrsPQRS8tuvTUV9wxyzWXYZ";

static KEYPAD: Lazy<Keypad> = Lazy::new(Keypad::build);

/// The 12-key telephone keypad mapping
///
/// Built once from [`LETTER_DIGIT_TABLE`] and shared process-wide; never
/// mutated after initialization.
#[derive(Debug)]
pub struct Keypad {
    map: FxHashMap<char, char>,
}

impl Keypad {
    fn build() -> Self {
        let mut map = FxHashMap::default();
        let mut digit = '0';
        for ch in LETTER_DIGIT_TABLE.chars() {
            if ch.is_ascii_digit() {
                digit = ch;
            }
            map.insert(ch, digit);
        }
        Self { map }
    }

    /// The shared process-wide table
    pub fn global() -> &'static Keypad {
        &KEYPAD
    }

    /// Dial-pad digit for a single character, if it has one
    pub fn digit_for(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    /// Digit-encode a whole fragment
    ///
    /// All-or-nothing: the first character without a dial-pad digit fails the
    /// whole fragment.
    ///
    /// # Example
    /// ```
    /// use dialkey::Keypad;
    ///
    /// let keypad = Keypad::global();
    /// assert_eq!(keypad.encode("lei").unwrap(), "534");
    /// assert!(keypad.encode("l-e").is_err());
    /// ```
    pub fn encode(&self, input: &str) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match self.digit_for(ch) {
                Some(digit) => out.push(digit),
                None => return Err(EncodeError::Unmapped { ch }),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_themselves() {
        let keypad = Keypad::global();
        for d in '0'..='9' {
            assert_eq!(keypad.digit_for(d), Some(d));
        }
    }

    #[test]
    fn test_letters_map_to_keypad_digits() {
        let keypad = Keypad::global();
        assert_eq!(keypad.digit_for('a'), Some('2'));
        assert_eq!(keypad.digit_for('c'), Some('2'));
        assert_eq!(keypad.digit_for('d'), Some('3'));
        assert_eq!(keypad.digit_for('s'), Some('7'));
        assert_eq!(keypad.digit_for('z'), Some('9'));
    }

    #[test]
    fn test_case_insensitive() {
        let keypad = Keypad::global();
        for ch in 'a'..='z' {
            assert_eq!(
                keypad.digit_for(ch),
                keypad.digit_for(ch.to_ascii_uppercase()),
                "case mismatch for '{}'",
                ch
            );
        }
    }

    #[test]
    fn test_all_letters_covered() {
        let keypad = Keypad::global();
        for ch in 'a'..='z' {
            assert!(keypad.digit_for(ch).is_some(), "'{}' unmapped", ch);
        }
    }

    #[test]
    fn test_encode_word() {
        let keypad = Keypad::global();
        assert_eq!(keypad.encode("li").unwrap(), "54");
        assert_eq!(keypad.encode("lei").unwrap(), "534");
        assert_eq!(keypad.encode("Smith").unwrap(), "76484");
        assert_eq!(keypad.encode("wang2").unwrap(), "92642");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Keypad::global().encode("").unwrap(), "");
    }

    #[test]
    fn test_encode_unmapped_fails() {
        let keypad = Keypad::global();
        assert_eq!(
            keypad.encode("a-b"),
            Err(EncodeError::Unmapped { ch: '-' })
        );
        assert!(keypad.encode("李").is_err());
        assert!(keypad.encode(" ").is_err());
    }
}
