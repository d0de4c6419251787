//! Error type for word finding

use std::fmt;

/// The only way a search can fail: its arguments were rejected up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindError {
    InvalidInput(InputProblem),
}

/// Which argument check rejected the call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    MissingInput,
    EmptyInput,
    MissingDict,
    EmptyDict,
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "no input word given"),
            Self::EmptyInput => write!(f, "input word is empty"),
            Self::MissingDict => write!(f, "no word list given"),
            Self::EmptyDict => write!(f, "word list is empty"),
        }
    }
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(problem) => write!(f, "Invalid Input: {problem}"),
        }
    }
}

impl std::error::Error for FindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_marker_and_reason() {
        let err = FindError::InvalidInput(InputProblem::EmptyDict);
        assert_eq!(err.to_string(), "Invalid Input: word list is empty");

        let err = FindError::InvalidInput(InputProblem::MissingInput);
        assert!(err.to_string().starts_with("Invalid Input"));
    }
}
