//! Letterbank - CLI
//!
//! Find the words that can be spelled from a set of letters, with TUI and CLI modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use letterbank::{
    commands::{
        BenchmarkConfig, CASES, FindConfig, pick_inputs, run_benchmark, run_checks, run_find,
        run_simple,
    },
    matcher::{LengthFilter, MatchConfig},
    output::{print_benchmark_result, print_check_report, print_find_result},
    wordlists::loader::{load_wordlist, words_from_text},
};

#[derive(Parser)]
#[command(
    name = "letterbank",
    about = "Find every word that can be spelled from the letters of an input word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Length pre-filter: raw (default), normalized, off
    #[arg(short = 'F', long, global = true, default_value = "raw")]
    filter: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// Find the words spelled by some letters
    Find {
        /// The letters to spell with
        input: String,

        /// Candidate words to use instead of the word list
        #[arg(trailing_var_arg = true)]
        words: Vec<String>,

        /// Show counts and timing
        #[arg(short, long)]
        verbose: bool,

        /// Explain why each rejected candidate didn't fit
        #[arg(short, long)]
        explain: bool,
    },

    /// Run the built-in acceptance cases
    Check,

    /// Benchmark matcher throughput
    Benchmark {
        /// Number of random inputs to run
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Words joined into each random input
        #[arg(short = 'k', long, default_value = "2")]
        words_per_query: usize,

        /// Seed for reproducible inputs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Minimum word list length for parallel matching
        #[arg(short = 'p', long)]
        parallel_threshold: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let matching = MatchConfig::new(LengthFilter::from_name(&cli.filter));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, matching),
        Commands::Simple => {
            let dict = load_wordlist(&cli.wordlist)?;
            run_simple(&dict, matching).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Find {
            input,
            words,
            verbose,
            explain,
        } => run_find_command(&cli.wordlist, input, words, verbose, explain, matching),
        Commands::Check => run_check_command(&matching),
        Commands::Benchmark {
            count,
            words_per_query,
            seed,
            parallel_threshold,
        } => {
            let mut matching = matching;
            if let Some(threshold) = parallel_threshold {
                matching.parallel_threshold = threshold;
            }
            let config = BenchmarkConfig {
                words_per_query,
                seed,
                ..BenchmarkConfig::new(count)
            };
            run_benchmark_command(&cli.wordlist, &config, &matching)
        }
    }
}

fn run_find_command(
    wordlist: &str,
    input: String,
    words: Vec<String>,
    verbose: bool,
    explain: bool,
    matching: MatchConfig,
) -> Result<()> {
    // Words given on the command line replace the list; a lone "-" reads stdin.
    let dict = if words.is_empty() {
        load_wordlist(wordlist)?
    } else if words.len() == 1 && words[0] == "-" {
        words_from_text(&std::io::read_to_string(std::io::stdin())?)
    } else {
        words
    };

    let config = FindConfig {
        input,
        matching,
        explain,
    };
    let report = run_find(&config, &dict).map_err(|e| anyhow::anyhow!(e))?;

    print_find_result(&report, verbose);
    Ok(())
}

fn run_check_command(matching: &MatchConfig) -> Result<()> {
    let report = run_checks(CASES, matching);
    print_check_report(&report);

    if !report.all_passed() {
        bail!("{} of {} cases failed", report.failed, report.outcomes.len());
    }
    Ok(())
}

fn run_benchmark_command(
    wordlist: &str,
    config: &BenchmarkConfig,
    matching: &MatchConfig,
) -> Result<()> {
    let dict = load_wordlist(wordlist)?;

    println!(
        "Running benchmark: {} inputs of {} words against {} candidates (filter: {})...",
        config.queries,
        config.words_per_query,
        dict.len(),
        matching.filter
    );

    let inputs = pick_inputs(&dict, config);
    let result = run_benchmark(&inputs, &dict, matching, config.show_progress);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(wordlist: &str, matching: MatchConfig) -> Result<()> {
    use letterbank::interactive::{App, run_tui};

    let dict = load_wordlist(wordlist)?;
    let app = App::new(&dict, matching);
    run_tui(app)
}
