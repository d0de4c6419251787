//! Word finding
//!
//! Validates a search, then uses a [`Matcher`] to pick out every candidate
//! that can be spelled from the input's letters.

mod config;
mod engine;
mod error;
pub mod filter;

pub use config::{DEFAULT_PARALLEL_THRESHOLD, MatchConfig};
pub use engine::{Matcher, Verdict};
pub use error::{FindError, InputProblem};
pub use filter::LengthFilter;

/// Find the candidates that can be spelled from the letters of `input`
///
/// Each letter of the input may be used at most as many times as it occurs.
/// Input and candidates are compared after normalization (trimmed,
/// lowercased, letters `a`–`z` only), and matches are returned in their
/// normalized form, in word list order.
///
/// # Errors
///
/// Returns [`FindError::InvalidInput`] if `input` is empty or `dict` has no
/// entries. An empty entry inside a non-empty list is an ordinary candidate.
///
/// # Examples
/// ```
/// use letterbank::matcher::{FindError, find_words};
///
/// let words = find_words("dog", &["og", "god", "do", "not", "a", "doge"]).unwrap();
/// assert_eq!(words, vec!["og", "god", "do"]);
///
/// assert!(matches!(find_words("a", &[] as &[&str]), Err(FindError::InvalidInput(_))));
/// ```
pub fn find_words<S: AsRef<str> + Sync>(input: &str, dict: &[S]) -> Result<Vec<String>, FindError> {
    find_words_with(input, dict, &MatchConfig::default())
}

/// [`find_words`] for callers whose input or word list may be missing
///
/// # Errors
///
/// Returns [`FindError::InvalidInput`] if either argument is `None`, or for
/// the same reasons as [`find_words`]. The word list is checked first.
pub fn try_find_words<S: AsRef<str> + Sync>(
    input: Option<&str>,
    dict: Option<&[S]>,
) -> Result<Vec<String>, FindError> {
    let dict = dict.ok_or(FindError::InvalidInput(InputProblem::MissingDict))?;
    let input = input.ok_or(FindError::InvalidInput(InputProblem::MissingInput))?;
    find_words(input, dict)
}

/// [`find_words`] with an explicit length filter and parallelism setting
///
/// # Errors
///
/// Same as [`find_words`].
pub fn find_words_with<S: AsRef<str> + Sync>(
    input: &str,
    dict: &[S],
    config: &MatchConfig,
) -> Result<Vec<String>, FindError> {
    validate(input, dict)?;

    let matcher = Matcher::with_filter(input, config.filter);
    if config.use_parallel(dict.len()) {
        Ok(matcher.find_parallel(dict))
    } else {
        Ok(matcher.find(dict))
    }
}

fn validate<S>(input: &str, dict: &[S]) -> Result<(), FindError> {
    if input.is_empty() {
        return Err(FindError::InvalidInput(InputProblem::EmptyInput));
    }
    if dict.is_empty() {
        return Err(FindError::InvalidInput(InputProblem::EmptyDict));
    }
    Ok(())
}
