//! Acceptance suite
//!
//! Literal input/word-list/expected-output cases that pin down matching
//! behavior, including validation and the length pre-filter quirks.

use crate::matcher::{FindError, MatchConfig, find_words_with};

/// What a case should produce
#[derive(Debug, Clone, Copy)]
pub enum Expected {
    Words(&'static [&'static str]),
    Invalid,
}

impl Expected {
    #[must_use]
    pub fn is_satisfied_by(&self, actual: &Result<Vec<String>, FindError>) -> bool {
        match (self, actual) {
            (Self::Words(expected), Ok(words)) => words.iter().eq(expected.iter()),
            (Self::Invalid, Err(FindError::InvalidInput(_))) => true,
            _ => false,
        }
    }
}

/// One literal acceptance case
#[derive(Debug)]
pub struct CheckCase {
    pub input: &'static str,
    pub dict: &'static [&'static str],
    pub expected: Expected,
}

const LETTER_DICT: &[&str] = &["ate", "eat", "tea", "dog", "do", "god", "goo", "go", "good"];

/// The built-in acceptance cases
pub const CASES: &[CheckCase] = &[
    CheckCase {
        input: "",
        dict: &[],
        expected: Expected::Invalid,
    },
    CheckCase {
        input: "",
        dict: &["asd"],
        expected: Expected::Invalid,
    },
    CheckCase {
        input: "a",
        dict: &[],
        expected: Expected::Invalid,
    },
    CheckCase {
        input: "ate",
        dict: LETTER_DICT,
        expected: Expected::Words(&["ate", "eat", "tea"]),
    },
    CheckCase {
        input: "dog",
        dict: &["og", "god", "do", "not", "a", "doge"],
        expected: Expected::Words(&["og", "god", "do"]),
    },
    CheckCase {
        input: "oogd",
        dict: LETTER_DICT,
        expected: Expected::Words(&["dog", "do", "god", "goo", "go", "good"]),
    },
    CheckCase {
        input: "a",
        dict: &["be", "am", "a", "i"],
        expected: Expected::Words(&["a"]),
    },
    CheckCase {
        input: "Listen",
        dict: &["Enlists", "Google", "inLets", "banana"],
        expected: Expected::Words(&["inlets"]),
    },
    CheckCase {
        input: "can't",
        dict: &["cant", "tan", "act"],
        expected: Expected::Words(&["cant", "tan", "act"]),
    },
    // Letterless candidates match any input.
    CheckCase {
        input: "dog",
        dict: &["''", "god", "?"],
        expected: Expected::Words(&["", "god", ""]),
    },
    // Dict order and duplicates are kept.
    CheckCase {
        input: "stone",
        dict: &["tones", "onset", "zone", "notes", "tones", "seton"],
        expected: Expected::Words(&["tones", "onset", "notes", "tones", "seton"]),
    },
    // Raw length is compared, so punctuation can push a fitting word out.
    CheckCase {
        input: "dog",
        dict: &["d-o-g", "g.o", "DOG"],
        expected: Expected::Words(&["go", "dog"]),
    },
    // Input is trimmed and lowercased before counting.
    CheckCase {
        input: "  GOOD\t",
        dict: &["Dog", "goOd", "gods"],
        expected: Expected::Words(&["dog", "good"]),
    },
];

/// Outcome of running one case
#[derive(Debug)]
pub struct CaseOutcome {
    pub index: usize,
    pub case: &'static CheckCase,
    pub actual: Result<Vec<String>, FindError>,
    pub passed: bool,
}

/// Outcome of running a suite
#[derive(Debug)]
pub struct CheckReport {
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl CheckReport {
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run every case against the matcher
#[must_use]
pub fn run_checks(cases: &'static [CheckCase], config: &MatchConfig) -> CheckReport {
    let outcomes: Vec<CaseOutcome> = cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let actual = find_words_with(case.input, case.dict, config);
            let passed = case.expected.is_satisfied_by(&actual);
            CaseOutcome {
                index,
                case,
                actual,
                passed,
            }
        })
        .collect();

    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = outcomes.len() - passed;

    CheckReport {
        outcomes,
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::LengthFilter;

    #[test]
    fn builtin_cases_all_pass() {
        let report = run_checks(CASES, &MatchConfig::default());
        for outcome in &report.outcomes {
            assert!(
                outcome.passed,
                "case {} ({:?}) produced {:?}",
                outcome.index, outcome.case.input, outcome.actual
            );
        }
        assert!(report.all_passed());
        assert_eq!(report.passed, CASES.len());
    }

    #[test]
    fn builtin_cases_pass_in_parallel() {
        let config = MatchConfig {
            parallel_threshold: 0,
            ..MatchConfig::default()
        };
        assert!(run_checks(CASES, &config).all_passed());
    }

    #[test]
    fn normalized_filter_breaks_raw_length_case() {
        let config = MatchConfig::new(LengthFilter::Normalized);
        let report = run_checks(CASES, &config);
        assert_eq!(report.failed, 1);

        let failing = report.outcomes.iter().find(|o| !o.passed).unwrap();
        assert_eq!(failing.actual, Ok(vec!["dog".into(), "go".into(), "dog".into()]));
    }

    #[test]
    fn expected_words_must_match_exactly() {
        let expected = Expected::Words(&["a", "b"]);
        assert!(expected.is_satisfied_by(&Ok(vec!["a".into(), "b".into()])));
        assert!(!expected.is_satisfied_by(&Ok(vec!["b".into(), "a".into()])));
        assert!(!expected.is_satisfied_by(&Ok(vec!["a".into()])));
    }

    #[test]
    fn invalid_is_not_an_empty_list() {
        let empty = Expected::Words(&[]);
        assert!(empty.is_satisfied_by(&Ok(Vec::new())));
        assert!(!Expected::Invalid.is_satisfied_by(&Ok(Vec::new())));

        let err = Err(FindError::InvalidInput(crate::matcher::InputProblem::EmptyDict));
        assert!(!empty.is_satisfied_by(&err));
        assert!(Expected::Invalid.is_satisfied_by(&err));
    }
}
