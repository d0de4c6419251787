//! Candidate word lists
//!
//! Provides an embedded default list compiled into the binary for zero-cost access,
//! and loading of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
