//! Normalized word text
//!
//! Raw caller text is trimmed, lowercased and stripped of every character
//! outside `a`–`z` before it is counted or returned.

use super::Letter;
use std::fmt;

/// Text containing only lowercase `a`–`z`
///
/// Built from arbitrary raw text with [`NormalizedText::new`]. The length is
/// never greater than the raw text's length.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalize raw text: trim, lowercase, drop non-letters
    ///
    /// Normalizing already normalized text returns it unchanged.
    ///
    /// # Examples
    /// ```
    /// use letterbank::core::NormalizedText;
    ///
    /// assert_eq!(NormalizedText::new("  Can't ").as_str(), "cant");
    /// assert_eq!(NormalizedText::new("Ünïcode-42").as_str(), "ncode");
    /// assert!(NormalizedText::new("''").is_empty());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        Self(text)
    }

    /// Get the text as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().filter_map(Letter::from_char)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(NormalizedText::new("  Listen\t\n").as_str(), "listen");
        assert_eq!(NormalizedText::new("inLets").as_str(), "inlets");
    }

    #[test]
    fn strips_non_letters() {
        assert_eq!(NormalizedText::new("can't").as_str(), "cant");
        assert_eq!(NormalizedText::new("ice cream").as_str(), "icecream");
        assert_eq!(NormalizedText::new("r2-d2").as_str(), "rd");
        assert_eq!(NormalizedText::new("café").as_str(), "caf");
    }

    #[test]
    fn lowercases_before_stripping() {
        // Kelvin sign lowercases to ASCII 'k'.
        let text = NormalizedText::new("\u{212A}ite");
        assert_eq!(text.as_str(), "kite");
        assert_eq!(text.letters().count(), 4);
        // Dotted capital I lowercases to 'i' plus a combining dot.
        assert_eq!(NormalizedText::new("\u{130}t").as_str(), "it");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert!(NormalizedText::new("''").is_empty());
        assert!(NormalizedText::new("   ").is_empty());
        assert!(NormalizedText::new("").is_empty());
        assert!(NormalizedText::new("?!-").is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["Listen", "can't", " A-B-C ", "", "ÉCOLE", "oogd"] {
            let once = NormalizedText::new(raw);
            let twice = NormalizedText::new(once.as_str());
            assert_eq!(once, twice, "normalizing {raw:?} twice changed it");
        }
    }

    #[test]
    fn never_longer_than_raw() {
        for raw in ["Hello, World!", "  x  ", "ÀÉÎ", "abc"] {
            assert!(NormalizedText::new(raw).len() <= raw.len());
        }
    }

    #[test]
    fn only_lowercase_letters_remain() {
        let text = NormalizedText::new("Mixed CASE, digits 123 & symbols #!");
        assert!(text.as_str().chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(text.letters().count(), text.len());
    }

    #[test]
    fn converts_into_string() {
        let text = NormalizedText::from("Tea");
        assert_eq!(format!("{text}"), "tea");
        assert_eq!(String::from(text), "tea");
    }
}
