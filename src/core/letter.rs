//! The 26-letter alphabet used for counting
//!
//! A `Letter` is one of the unaccented Latin letters `a`–`z`. Anything else
//! cannot be represented, so frequency maps keyed by `Letter` can only ever
//! hold lowercase letters.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase letter `a`–`z`, stored as its alphabet index (0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Convert a character into a letter
    ///
    /// Upper- and lowercase ASCII letters are accepted. Digits, punctuation,
    /// whitespace and non-ASCII characters (including accented letters) are not.
    ///
    /// # Examples
    /// ```
    /// use letterbank::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::from_char('é').is_none());
    /// assert!(Letter::from_char('\'').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c.to_ascii_lowercase() as u8) - b'a'))
        } else {
            None
        }
    }

    /// Alphabet index (0 for `a`, 25 for `z`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The lowercase character for this letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate the alphabet in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}
