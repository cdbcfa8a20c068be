//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use super::solutions::count_solutions;
use crate::core::{GameSession, SubmissionResult, Validator};
use crate::dictionary::Dictionary;
use crate::output::formatters::{create_progress_bar, letter_tiles};
use crate::wordlists::WordBank;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, Write};

/// Commands start with this prefix so they can never collide with an answer
const COMMAND_PREFIX: char = ':';

/// What a line of player input means
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Quit,
    NewGame,
    ListWords,
    Unknown(&'a str),
    Answer(&'a str),
}

impl<'a> Line<'a> {
    fn parse(input: &'a str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Blank;
        }

        let Some(command) = input.strip_prefix(COMMAND_PREFIX) else {
            return Self::Answer(input);
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "words" | "w" => Self::ListWords,
            _ => Self::Unknown(input),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word bank is empty or if reading user input fails.
pub fn run_simple(bank: &WordBank, validator: &Validator<Dictionary>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Scramble - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Each letter can be used once per word, and every word must be real.\n");
    println!("Commands: ':quit' to exit, ':new' for a new word, ':words' to list your words\n");

    let mut session = GameSession::new();
    let mut available = start_game(&mut session, bank, validator)?;

    loop {
        let Some(root) = session.root().map(str::to_string) else {
            bail!("No root word available");
        };

        let input = get_user_input("Enter answer")?;

        match Line::parse(&input) {
            Line::Blank => {}
            Line::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Line::NewGame => {
                available = start_game(&mut session, bank, validator)?;
            }
            Line::ListWords => print_used_words(&session, available),
            Line::Unknown(command) => {
                println!("Unknown command '{command}'. Try ':new', ':words' or ':quit'.\n");
            }
            Line::Answer(answer) => {
                let result = session.submit(answer, validator);
                if result == SubmissionResult::Accepted {
                    println!("  {} {}", "✓".green().bold(), answer.bright_white().bold());
                    print_progress(session.used_words().len(), available);
                } else {
                    println!(
                        "  {} {}: {}",
                        "✗".red().bold(),
                        result.title().red().bold(),
                        result.message(&root)
                    );
                }
                println!();
            }
        }
    }
}

/// Reset the session and show the new root word
///
/// Returns how many dictionary words the new root allows.
fn start_game(
    session: &mut GameSession,
    bank: &WordBank,
    validator: &Validator<Dictionary>,
) -> Result<usize> {
    let root = session
        .reset(bank)
        .context("Word bank is empty, no root word to play")?
        .to_string();
    let available = count_solutions(&root, validator.checker());

    println!("────────────────────────────────────────────────────────────");
    println!(
        "🔤 Root word: {}",
        letter_tiles(&root).bright_yellow().bold()
    );
    println!("   {available} words to find");
    println!("────────────────────────────────────────────────────────────\n");

    Ok(available)
}

fn print_used_words(session: &GameSession, available: usize) {
    if session.used_words().is_empty() {
        println!("No words yet!\n");
        return;
    }

    println!("Your words (newest first):");
    for word in session.used_words() {
        println!("  • {word}");
    }
    print_progress(session.used_words().len(), available);
    println!();
}

fn print_progress(found: usize, available: usize) {
    println!(
        "  [{}] {found}/{available}",
        create_progress_bar(found as f64, available as f64, 20).cyan()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF behaves like quit
        return Ok(format!("{COMMAND_PREFIX}quit"));
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_commands() {
        assert_eq!(Line::parse(":quit"), Line::Quit);
        assert_eq!(Line::parse(":Q"), Line::Quit);
        assert_eq!(Line::parse(" :new "), Line::NewGame);
        assert_eq!(Line::parse(":words"), Line::ListWords);
        assert_eq!(Line::parse(":hint"), Line::Unknown(":hint"));
        assert_eq!(Line::parse("   "), Line::Blank);
    }

    #[test]
    fn command_words_are_answers() {
        for word in ["new", "n", "quit", "q", "exit", "words", "w"] {
            assert_eq!(Line::parse(word), Line::Answer(word));
        }
        assert_eq!(Line::parse(" Late "), Line::Answer("Late"));
    }

    #[test]
    fn new_is_played_against_whenever() {
        let validator = Validator::new(Dictionary::embedded());
        let mut session = GameSession::new();
        session.start_with("whenever");

        let Line::Answer(answer) = Line::parse("new") else {
            panic!("'new' should be an answer");
        };
        assert_eq!(session.submit(answer, &validator), SubmissionResult::Accepted);

        assert_eq!(session.root(), Some("whenever"));
        assert_eq!(session.used_words(), &["new"]);
    }

    #[test]
    fn quit_is_played_against_question() {
        let validator = Validator::new(Dictionary::embedded());
        let mut session = GameSession::new();
        session.start_with("question");

        let Line::Answer(answer) = Line::parse("quit") else {
            panic!("'quit' should be an answer");
        };
        assert_eq!(session.submit(answer, &validator), SubmissionResult::Accepted);
        assert_eq!(session.used_words(), &["quit"]);
    }
}
