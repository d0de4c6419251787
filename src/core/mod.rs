//! Core domain types for letter matching
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Letters, normalized text and frequency maps are pure values with no I/O.

mod frequency;
mod letter;
mod text;

pub use frequency::{FrequencyMap, Shortfall};
pub use letter::{ALPHABET_SIZE, Letter};
pub use text::NormalizedText;
