//! TUI application state and logic

use crate::commands::find_solutions;
use crate::core::{GameSession, SubmissionResult, Validator, is_original};
use crate::dictionary::Dictionary;
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest answer the input box accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub validator: &'a Validator<Dictionary>,
    pub session: GameSession,
    /// Every dictionary word spellable from the current root
    pub solutions: Vec<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Answer,
    Reveal,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub words_found: usize,
    pub best_game: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, validator: &'a Validator<Dictionary>) -> Self {
        Self {
            bank,
            validator,
            session: GameSession::new(),
            solutions: Vec::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Spell words using the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Answer,
        }
    }

    pub fn new_game(&mut self) {
        self.finish_game();

        self.input_buffer.clear();
        self.input_mode = InputMode::Answer;

        if let Some(root) = self.session.reset(self.bank).map(str::to_string) {
            self.solutions = find_solutions(&root, self.validator.checker()).words;
            self.stats.games_played += 1;
            self.add_message(
                &format!(
                    "New word: {}. {} words to find.",
                    root.to_uppercase(),
                    self.solutions.len()
                ),
                MessageStyle::Info,
            );
        } else {
            self.solutions.clear();
            self.add_message("Word list is empty, nothing to play!", MessageStyle::Error);
        }
    }

    /// Fold the current game into the statistics
    fn finish_game(&mut self) {
        let found = self.session.used_words().len();
        self.stats.best_game = self.stats.best_game.max(found);
    }

    pub fn submit_answer(&mut self) {
        let answer = self.input_buffer.trim().to_string();
        if answer.is_empty() {
            return;
        }

        let root = self.session.root().unwrap_or_default().to_string();
        let result = self.session.submit(&answer, self.validator);

        if result == SubmissionResult::Accepted {
            self.stats.words_found += 1;
            let found = self.session.used_words().len();
            self.add_message(
                &format!("{} ({found}/{})", answer, self.solutions.len()),
                MessageStyle::Success,
            );
            if found == self.solutions.len() {
                self.add_message(
                    "🎉 Every word found! Ctrl-N for a new word.",
                    MessageStyle::Success,
                );
            }
        } else {
            self.add_message(
                &format!("{}: {}", result.title(), result.message(&root)),
                MessageStyle::Error,
            );
        }

        self.input_buffer.clear();
    }

    pub fn toggle_reveal(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Answer => InputMode::Reveal,
            InputMode::Reveal => InputMode::Answer,
        };
    }

    /// Whether `word` has already been found this game
    ///
    /// Uses the same comparison as the originality check.
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        !is_original(word, self.session.used_words())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match (key.code, ctrl) {
                (KeyCode::Char('c'), true) | (KeyCode::Esc, _) => app.should_quit = true,
                (KeyCode::Char('n'), true) => app.new_game(),
                (KeyCode::Tab, _) => app.toggle_reveal(),
                _ if app.input_mode == InputMode::Reveal => {}
                (KeyCode::Char(c), false) => {
                    if app.input_buffer.chars().count() < MAX_INPUT_LEN && !c.is_whitespace() {
                        app.input_buffer.push(c);
                    }
                }
                (KeyCode::Backspace, _) => {
                    app.input_buffer.pop();
                }
                (KeyCode::Enter, _) => app.submit_answer(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.finish_game();
    log::info!(
        "Session over: {} games, {} words found, best game {}",
        app.stats.games_played,
        app.stats.words_found,
        app.stats.best_game
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (WordBank, Validator<Dictionary>) {
        (
            WordBank::from_text("validate"),
            Validator::new(Dictionary::from_words(["late", "dial", "validate"])),
        )
    }

    fn type_answer(app: &mut App, answer: &str) {
        app.input_buffer = answer.to_string();
        app.submit_answer();
    }

    #[test]
    fn new_game_loads_solutions() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.new_game();

        assert_eq!(app.session.root(), Some("validate"));
        assert_eq!(app.solutions, vec!["validate", "dial", "late"]);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn accepted_answer_is_recorded() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.new_game();

        type_answer(&mut app, "Late");

        assert_eq!(app.session.used_words(), &["Late"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.is_found("late"));
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_shows_reason() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.new_game();

        type_answer(&mut app, "zebra");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Word not possible"));
        assert!(last.text.contains("validate"));
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn blank_answer_is_ignored() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.new_game();
        let before = app.messages.len();

        type_answer(&mut app, "   ");

        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn new_game_tracks_best() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.new_game();
        type_answer(&mut app, "late");
        type_answer(&mut app, "dial");

        app.new_game();

        assert_eq!(app.stats.best_game, 2);
        assert_eq!(app.stats.games_played, 2);
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn empty_bank_reports_error() {
        let bank = WordBank::default();
        let validator = Validator::new(Dictionary::embedded());
        let mut app = App::new(&bank, &validator);
        app.new_game();

        assert_eq!(app.session.root(), None);
        assert!(app.solutions.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn found_words_match_originality_for_accents() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.session.start_with("étage");
        app.session.record("ÉTÉ");

        assert!(app.is_found("été"));
        assert!(app.is_found("Été"));
        assert!(!app.is_found("age"));
    }

    #[test]
    fn toggle_reveal_flips_mode() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        app.toggle_reveal();
        assert_eq!(app.input_mode, InputMode::Reveal);
        app.toggle_reveal();
        assert_eq!(app.input_mode, InputMode::Answer);
    }

    #[test]
    fn messages_are_capped() {
        let (bank, validator) = fixtures();
        let mut app = App::new(&bank, &validator);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
