//! Letter frequency counting
//!
//! A `FrequencyMap` records how many times each letter occurs in a normalized
//! word. One word can be spelled from another exactly when its map is a
//! subset of the other's: every letter it uses is available at least as many
//! times.

use super::letter::ALPHABET_SIZE;
use super::{Letter, NormalizedText};
use std::fmt;

/// Occurrence count for each letter `a`–`z`
///
/// A letter that never occurs has count 0 and is treated as absent.
/// The sum of all counts equals the length of the counted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrequencyMap {
    counts: [u32; ALPHABET_SIZE],
    total: usize,
}

/// The first letter a candidate needs more of than the pool provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub letter: Letter,
    pub needed: u32,
    pub available: u32,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "needs {} '{}' but only {} available",
            self.needed, self.letter, self.available
        )
    }
}

impl FrequencyMap {
    /// Count the letters of a normalized word
    ///
    /// Letters are visited in order; each one increments its slot.
    /// The empty word produces the empty map.
    ///
    /// # Examples
    /// ```
    /// use letterbank::core::{FrequencyMap, Letter, NormalizedText};
    ///
    /// let map = FrequencyMap::count(&NormalizedText::new("banana"));
    /// assert_eq!(map.get(Letter::from_char('a').unwrap()), 3);
    /// assert_eq!(map.get(Letter::from_char('n').unwrap()), 2);
    /// assert_eq!(map.total(), 6);
    /// ```
    #[must_use]
    pub fn count(text: &NormalizedText) -> Self {
        text.letters().collect()
    }

    /// Count for a letter (0 when absent)
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.get(letter) > 0
    }

    /// Sum of all counts
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters present
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate present letters with their counts, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        Letter::all()
            .map(move |letter| (letter, self.get(letter)))
            .filter(|&(_, count)| count > 0)
    }

    /// Check whether every letter of `self` is available in `pool`
    ///
    /// Stops at the first letter `pool` does not have enough of. The empty
    /// map is a subset of every map.
    ///
    /// # Examples
    /// ```
    /// use letterbank::core::{FrequencyMap, NormalizedText};
    ///
    /// let pool = FrequencyMap::count(&NormalizedText::new("listen"));
    /// assert!(FrequencyMap::count(&NormalizedText::new("inlets")).is_subset_of(&pool));
    /// assert!(!FrequencyMap::count(&NormalizedText::new("enlists")).is_subset_of(&pool));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, pool: &Self) -> bool {
        self.first_shortfall(pool).is_none()
    }

    /// Find the first letter (alphabetically) that `pool` cannot cover
    #[must_use]
    pub fn first_shortfall(&self, pool: &Self) -> Option<Shortfall> {
        self.iter().find_map(|(letter, needed)| {
            let available = pool.get(letter);
            (available < needed).then_some(Shortfall {
                letter,
                needed,
                available,
            })
        })
    }

    /// Letters left in `pool` after spelling `self` from it
    ///
    /// Returns `None` if `self` is not a subset of `pool`.
    #[must_use]
    pub fn remaining_after(&self, pool: &Self) -> Option<Self> {
        if !self.is_subset_of(pool) {
            return None;
        }

        let mut remaining = *pool;
        for (letter, count) in self.iter() {
            remaining.counts[letter.index()] -= count;
        }
        remaining.total -= self.total;
        Some(remaining)
    }

    fn increment(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
        self.total += 1;
    }
}

impl FromIterator<Letter> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut map = Self::default();
        for letter in iter {
            map.increment(letter);
        }
        map
    }
}

impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (letter, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{letter}{count}")?;
            first = false;
        }
        Ok(())
    }
}
