//! Word bank survey
//!
//! Counts, for every root word in the bank, how many dictionary words can be
//! spelled from it. Useful for spotting roots that make for a thin game.

use super::solutions::count_solutions;
use crate::dictionary::Dictionary;
use crate::wordlists::WordBank;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// How many richest/poorest roots to report
const REPORTED_ROOTS: usize = 5;

/// Statistics over the surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_solutions: f64,
    pub min_solutions: usize,
    pub max_solutions: usize,
    /// Roots with the most solutions, richest first
    pub richest: Vec<(String, usize)>,
    /// Roots with the fewest solutions, poorest first
    pub poorest: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Survey the bank (or its first `limit` roots)
///
/// # Panics
///
/// Panics if the progress bar template is invalid, which it is not.
#[must_use]
pub fn run_survey(bank: &WordBank, dictionary: &Dictionary, limit: Option<usize>) -> SurveyStatistics {
    let roots: Vec<&String> = bank
        .words()
        .iter()
        .take(limit.unwrap_or(bank.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut counts: Vec<(String, usize)> = roots
        .par_iter()
        .map(|root| {
            let count = count_solutions(root, dictionary);
            pb.inc(1);
            ((*root).clone(), count)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = start.elapsed();
    summarize(&mut counts, total_time)
}

fn summarize(counts: &mut [(String, usize)], total_time: Duration) -> SurveyStatistics {
    counts.sort_by(|a, b| Reverse(a.1).cmp(&Reverse(b.1)).then_with(|| a.0.cmp(&b.0)));

    let total_roots = counts.len();
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let average_solutions = if total_roots == 0 {
        0.0
    } else {
        total as f64 / total_roots as f64
    };

    SurveyStatistics {
        total_roots,
        average_solutions,
        min_solutions: counts.last().map_or(0, |(_, n)| *n),
        max_solutions: counts.first().map_or(0, |(_, n)| *n),
        richest: counts.iter().take(REPORTED_ROOTS).cloned().collect(),
        poorest: counts.iter().rev().take(REPORTED_ROOTS).cloned().collect(),
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD BANK SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Solutions per root:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.total_roots);
    println!(
        "   Average:          {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Most:             {}",
        format!("{}", stats.max_solutions).green()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", stats.min_solutions).yellow()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.richest.is_empty() {
        println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
        for (root, count) in &stats.richest {
            println!("   {:<12} {count:4}", root.to_uppercase().bright_white());
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n⚠️  {}", "Thinnest roots:".bright_cyan().bold());
        for (root, count) in &stats.poorest {
            println!("   {:<12} {count:4}", root.to_uppercase().bright_white());
        }
    }
    println!();
}
