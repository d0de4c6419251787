//! Main word matching interface

use super::LengthFilter;
use crate::core::{FrequencyMap, NormalizedText, Shortfall};
use rayon::prelude::*;

/// Why a candidate was or wasn't matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Spelled from the input; carries the normalized candidate
    Matched(NormalizedText),
    /// Dropped by the length pre-filter before counting
    TooLong,
    /// Needs a letter the input cannot supply
    Missing(Shortfall),
}

impl Verdict {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Letter pool built from one input word
///
/// Normalizes and counts the input once, then checks any number of
/// candidates against it. Holds no mutable state, so a single matcher can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    input: NormalizedText,
    counts: FrequencyMap,
    filter: LengthFilter,
}

impl Matcher {
    /// Create a matcher for the given raw input using the default filter
    ///
    /// # Examples
    /// ```
    /// use letterbank::matcher::Matcher;
    ///
    /// let matcher = Matcher::new("Listen");
    /// assert_eq!(matcher.input().as_str(), "listen");
    /// assert!(matcher.check("inLets").is_some());
    /// assert!(matcher.check("banana").is_none());
    /// ```
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::with_filter(input, LengthFilter::default())
    }

    #[must_use]
    pub fn with_filter(input: &str, filter: LengthFilter) -> Self {
        let input = NormalizedText::new(input);
        let counts = FrequencyMap::count(&input);
        Self {
            input,
            counts,
            filter,
        }
    }

    /// The normalized input
    #[inline]
    #[must_use]
    pub const fn input(&self) -> &NormalizedText {
        &self.input
    }

    /// Letter counts of the normalized input
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &FrequencyMap {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub const fn filter(&self) -> LengthFilter {
        self.filter
    }

    /// Whether a raw candidate survives the length pre-filter
    #[must_use]
    pub fn admits(&self, raw: &str) -> bool {
        self.filter.admits(raw, self.input.len())
    }

    /// Check one candidate, ignoring the pre-filter
    ///
    /// Returns the normalized candidate if its letters can be drawn from
    /// the input.
    #[must_use]
    pub fn check(&self, raw: &str) -> Option<NormalizedText> {
        let word = NormalizedText::new(raw);
        FrequencyMap::count(&word)
            .is_subset_of(&self.counts)
            .then_some(word)
    }

    /// Explain how a candidate fares, pre-filter included
    #[must_use]
    pub fn explain(&self, raw: &str) -> Verdict {
        if !self.admits(raw) {
            return Verdict::TooLong;
        }

        let word = NormalizedText::new(raw);
        match FrequencyMap::count(&word).first_shortfall(&self.counts) {
            Some(shortfall) => Verdict::Missing(shortfall),
            None => Verdict::Matched(word),
        }
    }

    /// Find every candidate that can be spelled from the input
    ///
    /// Results are normalized and keep the candidates' relative order,
    /// duplicates included.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, dict: &[S]) -> Vec<String> {
        dict.iter()
            .map(|word| word.as_ref())
            .filter(|raw| self.admits(raw))
            .filter_map(|raw| self.check(raw))
            .map(NormalizedText::into_string)
            .collect()
    }

    /// Same as [`Matcher::find`], spread across the rayon thread pool
    ///
    /// Output order is identical to the sequential version.
    #[must_use]
    pub fn find_parallel<S: AsRef<str> + Sync>(&self, dict: &[S]) -> Vec<String> {
        dict.par_iter()
            .map(|word| word.as_ref())
            .filter(|raw| self.admits(raw))
            .filter_map(|raw| self.check(raw))
            .map(NormalizedText::into_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    #[test]
    fn matcher_normalizes_input() {
        let matcher = Matcher::new("  Can't ");
        assert_eq!(matcher.input().as_str(), "cant");
        assert_eq!(matcher.counts().total(), 4);
    }

    #[test]
    fn check_ignores_prefilter() {
        let matcher = Matcher::new("dog");
        // Rejected by the raw filter, but its letters fit.
        assert!(!matcher.admits("d-o-g"));
        assert_eq!(matcher.check("d-o-g").unwrap().as_str(), "dog");
    }

    #[test]
    fn find_preserves_order_and_duplicates() {
        let matcher = Matcher::new("ate");
        let dict = ["tea", "dog", "eat", "tea", "ate"];
        assert_eq!(matcher.find(&dict), vec!["tea", "eat", "tea", "ate"]);
    }

    #[test]
    fn find_returns_normalized_words() {
        let matcher = Matcher::new("Listen");
        let dict = ["Enlists", "Google", "inLets", "banana"];
        assert_eq!(matcher.find(&dict), vec!["inlets"]);
    }

    #[test]
    fn find_accepts_owned_strings() {
        let matcher = Matcher::new("dog");
        let dict: Vec<String> = vec!["God".to_string(), "cat".to_string()];
        assert_eq!(matcher.find(&dict), vec!["god"]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let dict: Vec<String> = ["og", "god", "do", "not", "a", "doge", "''", "Dog!", "god"]
            .iter()
            .cycle()
            .take(900)
            .map(ToString::to_string)
            .collect();

        for filter in [LengthFilter::Raw, LengthFilter::Normalized, LengthFilter::Off] {
            let matcher = Matcher::with_filter("dog", filter);
            assert_eq!(matcher.find(&dict), matcher.find_parallel(&dict));
        }
    }

    #[test]
    fn filter_policies_differ_only_on_punctuated_candidates() {
        let dict = ["do-g", "god", "dogs"];

        let raw = Matcher::with_filter("dog", LengthFilter::Raw);
        assert_eq!(raw.find(&dict), vec!["god"]);

        let normalized = Matcher::with_filter("dog", LengthFilter::Normalized);
        assert_eq!(normalized.find(&dict), vec!["dog", "god"]);

        let off = Matcher::with_filter("dog", LengthFilter::Off);
        assert_eq!(off.find(&dict), normalized.find(&dict));
    }

    #[test]
    fn explain_reports_each_outcome() {
        let matcher = Matcher::new("dog");

        assert_eq!(
            matcher.explain("god"),
            Verdict::Matched(NormalizedText::new("god"))
        );
        assert_eq!(matcher.explain("doge"), Verdict::TooLong);

        match matcher.explain("not") {
            Verdict::Missing(shortfall) => {
                assert_eq!(shortfall.letter, Letter::from_char('n').unwrap());
                assert_eq!(shortfall.available, 0);
            }
            other => panic!("expected a shortfall, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_matches_only_letterless_candidates() {
        let matcher = Matcher::new("!!!");
        assert!(matcher.input().is_empty());
        // Raw length 0 survives the filter; raw length 1 does not.
        assert_eq!(matcher.find(&["", "a", "-"]), vec![""]);
        let off = Matcher::with_filter("!!!", LengthFilter::Off);
        assert_eq!(off.find(&["", "a", "-", "''"]), vec!["", "", ""]);
    }
}
