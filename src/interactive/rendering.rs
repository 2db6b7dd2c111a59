//! TUI rendering with ratatui
//!
//! Panels for the current try, candidates, derived constraints and history.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as Cell, ColorCode};
use crate::output::formatters::{format_char_set, format_fixed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name before falling back to a count
const SHOWN_CANDIDATES: usize = 40;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn cell_style(color: Cell) -> Style {
    let bg = match color {
        Cell::Green => Color::Green,
        Cell::Yellow => Color::Yellow,
        Cell::Gray => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

/// One colored cell per character of a scored try
fn scored_spans(text: &str, code: &ColorCode) -> Vec<Span<'static>> {
    text.chars()
        .zip(code.colors())
        .map(|(ch, &color)| {
            Span::styled(format!(" {} ", ch.to_ascii_uppercase()), cell_style(color))
        })
        .collect()
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 {} CHECKER - Interactive Mode",
        app.config().kind().name().to_uppercase()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Candidates
            Constraint::Percentage(50), // History
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates remain! Ctrl-U to undo the last try.",
            Style::default().fg(Color::Red),
        ))]
    } else if candidates.len() <= SHOWN_CANDIDATES {
        let per_row = (usize::from(area.width.saturating_sub(2))
            / (app.config().length() + 2))
            .max(1);
        candidates
            .chunks(per_row)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|g| g.text().to_uppercase())
                        .collect::<Vec<_>>()
                        .join("  "),
                )
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} possible solutions", candidates.len())),
            Line::from(Span::styled(
                format!("Listed once {SHOWN_CANDIDATES} or fewer remain"),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Possible Solutions ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(scored_spans(entry.guess.text(), &entry.code));
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" Tries ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Constraints
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.total_words();
    let remaining = app.candidates().len();
    let eliminated = if total == 0 {
        0.0
    } else {
        (total - remaining) as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(eliminated.clamp(0.0, 1.0))
        .label(format!("{remaining}/{total} remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.constraints() {
        Ok(constraints) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw("Fixed:    "),
                    Span::styled(
                        format_fixed(constraints.fixed()),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Required: "),
                    Span::styled(
                        format_char_set(constraints.required()),
                        Style::default().fg(Color::Yellow),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Excluded: "),
                    Span::styled(
                        format_char_set(constraints.excluded()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ];
            lines.extend(
                (0..constraints.length())
                    .filter(|&i| !constraints.position_excluded(i).is_empty())
                    .map(|i| {
                        Line::from(format!(
                            "Not at {}:  {}",
                            i + 1,
                            format_char_set(constraints.position_excluded(i))
                        ))
                    }),
            );
            lines
        }
        Err(e) => vec![Line::from(e.to_string())],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
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
    let length = app.config().length();
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            Line::from(""),
            Color::Green,
        ),
        InputMode::Guess => (
            format!(" Enter Try ({length} characters) | Enter to confirm "),
            Line::from(app.guess_buffer.to_uppercase()),
            Color::Cyan,
        ),
        InputMode::Code => {
            let typed = app.code_buffer.chars().count();
            let mut spans = ColorCode::parse(&app.code_buffer, typed)
                .map(|code| scored_spans(&app.guess_buffer, &code))
                .unwrap_or_default();
            spans.extend(
                app.guess_buffer
                    .chars()
                    .skip(spans.len())
                    .map(|ch| Span::raw(format!(" {} ", ch.to_ascii_uppercase()))),
            );
            (
                " Enter Colors (G=Green Y=Yellow _=Gray) | Backspace to edit the try ".to_string(),
                Line::from(spans),
                Color::Yellow,
            )
        }
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guess => "Mode: Try",
        InputMode::Code => "Mode: Colors",
        InputMode::Solved => "Mode: Solved",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {}",
        app.stats.total_games, app.stats.games_solved
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates().len());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.input_mode == InputMode::Solved {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "Esc: Quit | ^N: New Game | ^U: Undo"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CandidateFilter;
    use crate::core::GameConfig;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_every_mode() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        assert!(screen(&app).contains("WORDLE CHECKER"));

        for c in "snafu".chars() {
            app.push_char(c);
        }
        app.submit();
        app.push_char('G');
        assert!(screen(&app).contains("Mode: Colors"));

        for c in "GGGG".chars() {
            app.push_char(c);
        }
        app.submit();
        let text = screen(&app);
        assert!(text.contains("Mode: Solved"));
        assert!(text.contains("SNAFU"));
    }
}
