//! TUI rendering with ratatui
//!
//! Layout for the Word Scramble game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::letter_tiles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_root(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Words
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    match app.input_mode {
        InputMode::Answer => render_used_words(f, app, main_chunks[0]),
        InputMode::Reveal => render_solutions(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_root(f: &mut Frame, app: &App, area: Rect) {
    let root = app
        .session
        .root()
        .map_or_else(|| "-".to_string(), letter_tiles);

    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            root,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" 🔤 WORD SCRAMBLE ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.used_words();

    let items: Vec<ListItem> = if used.is_empty() {
        vec![ListItem::new("No words yet. Start typing!").style(Style::default().fg(Color::DarkGray))]
    } else {
        used.iter()
            .enumerate()
            .map(|(i, word)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3}. ", used.len() - i),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        word.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .solutions
        .iter()
        .flat_map(|word| {
            let style = if app.is_found(word) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(word.clone(), style), Span::raw("  ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" All Words (found in green) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.used_words().len();
    let total = app.solutions.len();
    let progress_pct = if total == 0 {
        0
    } else {
        ((found as f64 / total as f64 * 100.0).min(100.0)) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Answer => (
            " Enter Answer | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Reveal => (" Showing all words | TAB to keep playing ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let games = Paragraph::new(format!(
        "Games: {} | Best: {}",
        app.stats.games_played,
        app.stats.best_game.max(app.session.used_words().len())
    ))
    .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let words = Paragraph::new(format!("Words found: {}", app.stats.words_found))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Word | TAB: Reveal")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
