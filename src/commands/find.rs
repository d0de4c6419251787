//! Word finding command
//!
//! Runs one search and collects what the CLI needs to show it.

use crate::core::FrequencyMap;
use crate::matcher::{FindError, MatchConfig, Matcher, Verdict, find_words_with};
use std::time::{Duration, Instant};

/// Configuration for a single search
pub struct FindConfig {
    pub input: String,
    pub matching: MatchConfig,
    /// Record why each non-matching candidate was rejected
    pub explain: bool,
}

impl FindConfig {
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            input,
            matching: MatchConfig::default(),
            explain: false,
        }
    }
}

/// A candidate that did not match, with the reason
pub struct Rejection {
    pub candidate: String,
    pub verdict: Verdict,
}

/// Result of a search
pub struct FindReport {
    pub input: String,
    pub normalized: String,
    pub letters: FrequencyMap,
    pub matches: Vec<String>,
    pub total_candidates: usize,
    /// Candidates that survived the length pre-filter
    pub examined: usize,
    pub rejections: Vec<Rejection>,
    pub duration: Duration,
}

/// Search `dict` for words spelled from the configured input
///
/// # Errors
///
/// Returns [`FindError::InvalidInput`] if the input is empty or the word
/// list has no entries.
pub fn run_find(config: &FindConfig, dict: &[String]) -> Result<FindReport, FindError> {
    let start = Instant::now();
    let matches = find_words_with(&config.input, dict, &config.matching)?;
    let duration = start.elapsed();

    let matcher = Matcher::with_filter(&config.input, config.matching.filter);
    let examined = dict.iter().filter(|word| matcher.admits(word)).count();

    let rejections = if config.explain {
        dict.iter()
            .map(|word| (word, matcher.explain(word)))
            .filter(|(_, verdict)| !verdict.is_match())
            .map(|(word, verdict)| Rejection {
                candidate: word.clone(),
                verdict,
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(FindReport {
        input: config.input.clone(),
        normalized: matcher.input().to_string(),
        letters: *matcher.counts(),
        matches,
        total_candidates: dict.len(),
        examined,
        rejections,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{InputProblem, LengthFilter};

    fn dict(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn find_reports_matches_and_counts() {
        let words = dict(&["og", "god", "do", "not", "a", "doge"]);
        let report = run_find(&FindConfig::new("Dog".to_string()), &words).unwrap();

        assert_eq!(report.matches, vec!["og", "god", "do"]);
        assert_eq!(report.normalized, "dog");
        assert_eq!(report.letters.total(), 3);
        assert_eq!(report.total_candidates, 6);
        assert_eq!(report.examined, 5);
        assert!(report.rejections.is_empty());
    }

    #[test]
    fn explain_lists_every_rejection() {
        let words = dict(&["og", "god", "do", "not", "a", "doge"]);
        let mut config = FindConfig::new("dog".to_string());
        config.explain = true;

        let report = run_find(&config, &words).unwrap();
        let rejected: Vec<&str> = report
            .rejections
            .iter()
            .map(|r| r.candidate.as_str())
            .collect();
        assert_eq!(rejected, vec!["not", "a", "doge"]);
        assert!(matches!(report.rejections[2].verdict, Verdict::TooLong));
        assert!(matches!(report.rejections[0].verdict, Verdict::Missing(_)));
    }

    #[test]
    fn find_respects_filter_setting() {
        let words = dict(&["d-o-g"]);
        let mut config = FindConfig::new("dog".to_string());
        assert!(run_find(&config, &words).unwrap().matches.is_empty());

        config.matching.filter = LengthFilter::Off;
        let report = run_find(&config, &words).unwrap();
        assert_eq!(report.matches, vec!["dog"]);
        assert_eq!(report.examined, 1);
    }

    #[test]
    fn find_invalid_input_returns_error() {
        let result = run_find(&FindConfig::new(String::new()), &dict(&["a"]));
        assert!(matches!(
            result,
            Err(FindError::InvalidInput(InputProblem::EmptyInput))
        ));

        let result = run_find(&FindConfig::new("a".to_string()), &[]);
        assert!(matches!(
            result,
            Err(FindError::InvalidInput(InputProblem::EmptyDict))
        ));
    }
}
