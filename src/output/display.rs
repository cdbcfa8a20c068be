//! Display functions for command results

use super::formatters::{group_by_length, letter_tiles};
use crate::commands::{CheckResult, SolutionsResult};
use colored::Colorize;

/// Print the result of checking one candidate
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Candidate: {}",
        letter_tiles(&result.root).bright_yellow().bold(),
        result.candidate.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let title = result.result.title();
    let message = result.result.message(&result.root);
    if result.result.is_accepted() {
        println!("\n{} {}", "✅".green(), title.green().bold());
    } else {
        println!("\n{} {}", "❌".red(), title.red().bold());
        println!("   {message}");
    }
}

/// Print every word spellable from a root, grouped by length
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        letter_tiles(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo dictionary words can be spelled from this root.");
        return;
    }

    println!("\n📖 {} words:", result.words.len());
    for (len, words) in group_by_length(&result.words) {
        println!(
            "\n   {} {}",
            format!("{len} letters").bright_cyan().bold(),
            format!("({})", words.len()).bright_black()
        );
        for row in words.chunks(8) {
            println!("     {}", row.join("  "));
        }
    }
}
