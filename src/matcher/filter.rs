//! Length pre-filter policies
//!
//! A candidate longer than the input can never be spelled from it, so the
//! matcher may skip it before counting letters. Which length is compared is
//! a policy choice, since raw and normalized lengths differ for text with
//! punctuation or spaces.

use crate::core::NormalizedText;
use std::fmt;

/// How candidates are pre-filtered by length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthFilter {
    /// Raw candidate length (in UTF-16 code units) against the normalized
    /// input length.
    ///
    /// Candidates carrying punctuation can be dropped even though their
    /// letters would fit, e.g. `"do-g"` against input `"dog"`.
    #[default]
    Raw,
    /// Normalized candidate length against the normalized input length.
    ///
    /// Never changes the result compared to [`LengthFilter::Off`].
    Normalized,
    /// No pre-filter; every candidate is counted.
    Off,
}

impl LengthFilter {
    /// Create a filter from its name
    ///
    /// Supported names: "raw", "normalized" (or "normalised"), "off" (or "none").
    /// Defaults to raw if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "normalized" | "normalised" => Self::Normalized,
            "off" | "none" => Self::Off,
            _ => Self::Raw,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Normalized => "normalized",
            Self::Off => "off",
        }
    }

    /// Whether a raw candidate survives the pre-filter
    #[must_use]
    pub fn admits(self, raw_candidate: &str, input_len: usize) -> bool {
        match self {
            Self::Raw => raw_candidate.encode_utf16().count() <= input_len,
            Self::Normalized => NormalizedText::new(raw_candidate).len() <= input_len,
            Self::Off => true,
        }
    }
}

impl fmt::Display for LengthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
