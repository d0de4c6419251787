//! Benchmark command
//!
//! Tests matcher throughput across many random inputs.

use crate::matcher::{MatchConfig, find_words_with};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub queries: usize,
    /// Random words joined into each input, giving larger letter pools
    pub words_per_query: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(queries: usize) -> Self {
        Self {
            queries,
            words_per_query: 2,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_candidates: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    /// Number of queries per match count
    pub distribution: FxHashMap<usize, usize>,
    pub richest_input: Option<(String, usize)>,
    pub duration: Duration,
    pub queries_per_second: f64,
    pub candidates_per_second: f64,
}

/// Build random inputs by joining words drawn from `dict`
///
/// The same seed always gives the same inputs.
#[must_use]
pub fn pick_inputs(dict: &[String], config: &BenchmarkConfig) -> Vec<String> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    (0..config.queries)
        .filter_map(|_| {
            let parts: Vec<&str> = (0..config.words_per_query.max(1))
                .filter_map(|_| dict.choose(&mut rng).map(String::as_str))
                .collect();
            (!parts.is_empty()).then(|| parts.concat())
        })
        .collect()
}

/// Run every input against the whole word list
///
/// Inputs rejected by validation (empty strings) are skipped.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(
    inputs: &[String],
    dict: &[String],
    matching: &MatchConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_queries = 0;
    let mut total_matches = 0;
    let mut min_matches = usize::MAX;
    let mut max_matches = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut richest_input: Option<(String, usize)> = None;

    for input in inputs {
        if let Ok(words) = find_words_with(input, dict, matching) {
            let found = words.len();
            total_queries += 1;
            total_matches += found;
            min_matches = min_matches.min(found);
            max_matches = max_matches.max(found);
            *distribution.entry(found).or_insert(0) += 1;

            if richest_input.as_ref().is_none_or(|(_, best)| found > *best) {
                richest_input = Some((input.clone(), found));
            }
        }

        if total_queries % 10 == 0 && total_queries > 0 {
            let avg = total_matches as f64 / total_queries as f64;
            pb.set_message(format!("Avg matches: {avg:.1}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let seconds = duration.as_secs_f64().max(f64::EPSILON);
    let total_candidates = total_queries * dict.len();

    BenchmarkResult {
        total_queries,
        total_candidates,
        total_matches,
        average_matches: if total_queries > 0 {
            total_matches as f64 / total_queries as f64
        } else {
            0.0
        },
        min_matches: if total_queries > 0 { min_matches } else { 0 },
        max_matches,
        distribution,
        richest_input,
        duration,
        queries_per_second: total_queries as f64 / seconds,
        candidates_per_second: total_candidates as f64 / seconds,
    }
}
