//! Word list loading utilities
//!
//! Provides functions to load candidate lists from files or use embedded constants.

use crate::wordlists::WORDS;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file, one per line
///
/// Lines are kept as raw text: no normalization happens here, so casing and
/// punctuation reach the matcher unchanged. Only line endings and blank lines
/// are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterbank::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into candidate words, one per non-blank line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Load the list selected on the command line
///
/// `"all"` selects the embedded list; anything else is a path.
///
/// # Errors
///
/// Returns an I/O error if a file path was given and it cannot be read.
pub fn load_wordlist(selector: &str) -> io::Result<Vec<String>> {
    match selector {
        "all" | "default" | "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path),
    }
}

/// Convert embedded string slice to owned candidates
///
/// # Examples
/// ```
/// use letterbank::wordlists::loader::words_from_slice;
/// use letterbank::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["tea", "eat", "ate"]);
        assert_eq!(words, vec!["tea", "eat", "ate"]);
    }

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("tea\n\n  \neat\r\nate\n");
        assert_eq!(words, vec!["tea", "eat", "ate"]);
    }

    #[test]
    fn words_from_text_keeps_raw_entries() {
        let words = words_from_text("Can't\n  Dog \n''\n");
        assert_eq!(words, vec!["Can't", "  Dog ", "''"]);
    }

    #[test]
    fn load_embedded_list() {
        let words = load_wordlist("all").unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_wordlist("/definitely/not/a/real/path.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("letterbank-{}.txt", std::process::id()));
        fs::write(&path, "og\ngod\n\ndo\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["og", "god", "do"]);
    }
}
