//! Letterbank
//!
//! Finds every word in a list that can be spelled using only the letters of an input word,
//! each letter at most as many times as it appears.
//!
//! # Quick Start
//!
//! ```rust
//! use letterbank::matcher::find_words;
//!
//! let words = find_words("Listen", &["Enlists", "Google", "inLets", "banana"]).unwrap();
//! assert_eq!(words, vec!["inlets"]);
//! ```

// Core domain types
pub mod core;

// Matching engine and entry points
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
