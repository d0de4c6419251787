//! Simple interactive CLI mode
//!
//! Text-based word finder without TUI

use crate::core::FrequencyMap;
use crate::matcher::{FindError, LengthFilter, MatchConfig, Matcher, Verdict, find_words_with};
use crate::output::formatters::{format_columns, format_frequency};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of REPL input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Filter(LengthFilter),
    Explain { letters: &'a str, word: &'a str },
    Find(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    Some(match head.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        "filter" if !rest.is_empty() => Command::Filter(LengthFilter::from_name(rest)),
        "explain" => match rest.split_once(char::is_whitespace) {
            Some((letters, word)) => Command::Explain {
                letters,
                word: word.trim(),
            },
            None => Command::Help,
        },
        _ => Command::Find(line),
    })
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dict: &[String], matching: MatchConfig) -> Result<(), String> {
    let mut matching = matching;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Letterbank - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type some letters and I'll list every word you can spell with them.");
    println!("Each letter can be used as many times as you typed it.\n");
    print_help();
    println!("\n{} words loaded, length filter: {}\n", dict.len(), matching.filter);

    loop {
        let line = get_user_input("Letters")?;

        match parse_command(&line) {
            None => {}
            Some(Command::Quit) => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Some(Command::Help) => print_help(),
            Some(Command::Filter(filter)) => {
                matching.filter = filter;
                println!("✓ Length filter set to {filter}\n");
            }
            Some(Command::Explain { letters, word }) => {
                let matcher = Matcher::with_filter(letters, matching.filter);
                match matcher.explain(word) {
                    Verdict::Matched(normalized) => {
                        let used = FrequencyMap::count(&normalized);
                        let left = used
                            .remaining_after(matcher.counts())
                            .map(|left| format_frequency(&left))
                            .unwrap_or_default();
                        println!(
                            "{} '{}' can be spelled from '{}' (left over: {})\n",
                            "✓".green(),
                            normalized,
                            matcher.input(),
                            if left.is_empty() { "nothing" } else { left.as_str() }
                        );
                    }
                    Verdict::TooLong => println!(
                        "{} '{word}' is longer than {} letters\n",
                        "✗".red(),
                        matcher.input().len()
                    ),
                    Verdict::Missing(shortfall) => {
                        println!("{} '{word}' {shortfall}\n", "✗".red());
                    }
                }
            }
            Some(Command::Find(letters)) => match find_words_with(letters, dict, &matching) {
                Ok(words) => {
                    let matcher = Matcher::with_filter(letters, matching.filter);
                    println!(
                        "\n📊 Letters: {}  ({})",
                        matcher.input().as_str().to_uppercase().bright_yellow().bold(),
                        format_frequency(matcher.counts())
                    );
                    if words.is_empty() {
                        println!("   No words found.\n");
                    } else {
                        println!("   {} words:\n", words.len());
                        println!("{}\n", format_columns(&words, 6));
                    }
                }
                Err(FindError::InvalidInput(problem)) => {
                    println!("❌ Invalid input: {problem}\n");
                }
            },
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <letters>                 find words spelled from <letters>");
    println!("  explain <letters> <word>  say why <word> does or doesn't fit");
    println!("  filter raw|normalized|off set the length pre-filter");
    println!("  help                      show this help");
    println!("  quit                      exit");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quit.
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quit_and_help() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("  Q "), Some(Command::Quit));
        assert_eq!(parse_command("help"), Some(Command::Help));
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn parses_filter() {
        assert_eq!(
            parse_command("filter off"),
            Some(Command::Filter(LengthFilter::Off))
        );
        // Bare "filter" is treated as letters.
        assert_eq!(parse_command("filter"), Some(Command::Find("filter")));
    }

    #[test]
    fn parses_explain() {
        assert_eq!(
            parse_command("explain listen enlists"),
            Some(Command::Explain {
                letters: "listen",
                word: "enlists"
            })
        );
        assert_eq!(parse_command("explain listen"), Some(Command::Help));
    }

    #[test]
    fn anything_else_is_letters() {
        assert_eq!(parse_command("can't"), Some(Command::Find("can't")));
        assert_eq!(parse_command("ice cream"), Some(Command::Find("ice cream")));
    }
}
