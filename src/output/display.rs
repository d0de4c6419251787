//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, format_frequency, format_outcome};
use crate::commands::{BenchmarkResult, CheckReport, FindReport};
use crate::matcher::Verdict;
use colored::Colorize;

/// Print the result of a search
pub fn print_find_result(report: &FindReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        report.normalized.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\n  Raw input:   {:?}", report.input);
        println!("  Counts:      {}", format_frequency(&report.letters));
        println!(
            "  Candidates:  {} → {} examined → {} matched",
            report.total_candidates,
            report.examined,
            report.matches.len()
        );
        println!("  Time:        {:.3}ms", report.duration.as_secs_f64() * 1000.0);
    }

    println!();
    if report.matches.is_empty() {
        println!("{}", "No words can be spelled from these letters.".yellow());
    } else {
        println!("{}", format_columns(&report.matches, 6));
        println!(
            "\n{}",
            format!("✅ {} words found", report.matches.len())
                .green()
                .bold()
        );
    }

    if !report.rejections.is_empty() {
        println!("\n🔍 {}", "Rejected:".bright_cyan().bold());
        for rejection in &report.rejections {
            let reason = match &rejection.verdict {
                Verdict::TooLong => "longer than the input".to_string(),
                Verdict::Missing(shortfall) => shortfall.to_string(),
                Verdict::Matched(_) => continue,
            };
            println!("   {:<16} {}", rejection.candidate, reason.bright_black());
        }
    }
}

/// Print acceptance suite results, one line pair per case
pub fn print_check_report(report: &CheckReport) {
    for outcome in &report.outcomes {
        let status = if outcome.passed {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        println!("TEST CASE: {}: {status}", outcome.index);
        println!("RESULT: {}", format_outcome(&outcome.actual));
    }

    println!();
    let summary = format!(
        "{} passed, {} failed ({} cases)",
        report.passed,
        report.failed,
        report.outcomes.len()
    );
    if report.all_passed() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!("   Candidates seen:  {}", result.total_candidates);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).yellow()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).green()
    );
    if let Some((input, found)) = &result.richest_input {
        println!("   Richest input:    {} ({found} words)", input.to_uppercase());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);
    println!("   Candidates/sec:   {:.0}", result.candidates_per_second);

    if result.total_queries == 0 {
        return;
    }

    println!("\n📈 {}", "Matches per query:".bright_cyan().bold());
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&matches, &count)| (matches, count))
        .collect();
    buckets.sort_unstable();
    for (matches, count) in buckets {
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {matches:>4}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
