//! TUI application state and logic

use crate::checker::{CandidateFilter, Session};
use crate::core::{Color, ColorCode, GameConfig, GameKind, Guess};
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

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub history: Vec<HistoryEntry>,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub code_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the colors the game showed for it
    Code,
    Solved,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub code: ColorCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_solved: usize,
    /// Games solved in N tries, index 0 unused
    pub try_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(filter: CandidateFilter<'a>) -> Self {
        let mut session = Session::new(filter);
        session.start();

        let mut app = Self {
            session,
            history: Vec::new(),
            input_mode: InputMode::Guess,
            guess_buffer: String::new(),
            code_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Welcome! Type each {} you played, then its colors.",
                app.noun()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Colors: G = green, Y = yellow, _ or - = gray",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.session.config()
    }

    const fn noun(&self) -> &'static str {
        match self.config().kind() {
            GameKind::Wordle => "word",
            GameKind::Nerdle => "equation",
        }
    }

    /// Candidates still consistent with every try
    #[must_use]
    pub fn candidates(&self) -> &[&'a Guess] {
        self.session.possible_solutions().unwrap_or_default()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.session.filter().words().len()
    }

    /// Type a character into whichever buffer is active
    pub fn push_char(&mut self, c: char) {
        let length = self.config().length();
        match self.input_mode {
            InputMode::Guess => {
                let c = c.to_ascii_lowercase();
                if self.guess_buffer.len() < length
                    && c.is_ascii()
                    && self.config().allows(c as u8)
                {
                    self.guess_buffer.push(c);
                }
            }
            InputMode::Code => {
                if self.code_buffer.chars().count() < length && Color::from_symbol(c).is_some() {
                    self.code_buffer.push(c.to_ascii_uppercase());
                }
            }
            InputMode::Solved => {}
        }
    }

    /// Delete a character; an empty color buffer returns to guess entry
    pub fn backspace(&mut self) {
        match self.input_mode {
            InputMode::Guess => {
                self.guess_buffer.pop();
            }
            InputMode::Code => {
                if self.code_buffer.pop().is_none() {
                    self.input_mode = InputMode::Guess;
                }
            }
            InputMode::Solved => {}
        }
    }

    pub fn submit(&mut self) {
        match self.input_mode {
            InputMode::Guess => self.submit_guess(),
            InputMode::Code => self.submit_code(),
            InputMode::Solved => {}
        }
    }

    fn submit_guess(&mut self) {
        match Guess::new(self.guess_buffer.as_str(), self.config()) {
            Ok(_) => self.input_mode = InputMode::Code,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit_code(&mut self) {
        let candidates_before = self.candidates().len();
        let guess = self.guess_buffer.clone();
        let code = self.code_buffer.clone();

        if let Err(e) = self.session.add_try(&guess, &code) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        let Some((guess, code)) = self.session.tries().ok().and_then(<[_]>::last).cloned() else {
            return;
        };
        let candidates_after = self.candidates().len();
        self.history.push(HistoryEntry {
            guess,
            code,
            candidates_before,
            candidates_after,
        });
        self.guess_buffer.clear();
        self.code_buffer.clear();

        if let Ok(Some(solution)) = self.session.solution() {
            let solution = solution.text().to_uppercase();
            let tries = self.history.len();
            self.stats.total_games += 1;
            self.stats.games_solved += 1;
            if tries < self.stats.try_distribution.len() {
                self.stats.try_distribution[tries] += 1;
            }
            self.input_mode = InputMode::Solved;
            self.add_message(
                &format!(
                    "🎉 Solved: {solution} in {tries} {}!",
                    if tries == 1 { "try" } else { "tries" }
                ),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else if candidates_after == 0 {
            self.input_mode = InputMode::Guess;
            self.add_message(
                "No candidates remain - a color code may be wrong. Ctrl-U to undo.",
                MessageStyle::Error,
            );
        } else {
            self.input_mode = InputMode::Guess;
            self.add_message(
                &format!("{candidates_after} possible solutions"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::Solved && !self.history.is_empty() {
            self.stats.total_games += 1;
        }
        self.session.start();
        self.history.clear();
        self.guess_buffer.clear();
        self.code_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::Solved {
            self.stats.games_solved -= 1;
            self.stats.total_games -= 1;
            let tries = self.history.len();
            if tries < self.stats.try_distribution.len() {
                self.stats.try_distribution[tries] -= 1;
            }
        }

        match self.session.undo() {
            Ok(Some((guess, _))) => {
                self.history.pop();
                self.input_mode = InputMode::Guess;
                self.code_buffer.clear();
                self.add_message(
                    &format!("Removed {}", guess.text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Ok(None) => self.add_message("Nothing to undo!", MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Char('u') if ctrl => app.undo_last(),
                KeyCode::Char('q') if app.input_mode == InputMode::Solved => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if app.input_mode == InputMode::Solved => app.new_game(),
                KeyCode::Char('u') if app.input_mode == InputMode::Solved => app.undo_last(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{EQUATIONS, WORDS};

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.push_char(c);
        }
        app.submit();
    }

    #[test]
    fn guess_then_code_narrows() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        assert_eq!(app.candidates().len(), words.len());

        type_str(&mut app, "OCTAL");
        assert_eq!(app.input_mode, InputMode::Code);
        type_str(&mut app, "___y_");

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_before, words.len());
        assert!(app.candidates().len() < words.len());
        assert!(app.guess_buffer.is_empty());
        assert!(app.code_buffer.is_empty());
    }

    #[test]
    fn invalid_characters_are_ignored() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));

        type_str(&mut app, "cr4n3eslate");
        assert_eq!(app.guess_buffer, "crnes");
        assert_eq!(app.input_mode, InputMode::Code);

        type_str(&mut app, "GxYz_");
        assert_eq!(app.code_buffer, "GY_");
        assert_eq!(app.input_mode, InputMode::Code);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn short_guess_stays_in_guess_mode() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));

        type_str(&mut app, "cra");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn backspace_returns_to_guess() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));

        type_str(&mut app, "crane");
        app.push_char('G');
        app.backspace();
        assert_eq!(app.input_mode, InputMode::Code);
        app.backspace();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.guess_buffer, "crane");
    }

    #[test]
    fn solve_undo_and_new_game() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));

        type_str(&mut app, "snafu");
        type_str(&mut app, "GGGGG");
        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_solved, 1);
        assert_eq!(app.stats.try_distribution[1], 1);
        assert_eq!(app.candidates().len(), 1);

        app.undo_last();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.stats.games_solved, 0);
        assert!(app.history.is_empty());
        assert_eq!(app.candidates().len(), words.len());

        app.undo_last();
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_str(&mut app, "octal");
        type_str(&mut app, "___Y_");
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert!(app.history.is_empty());
        assert_eq!(app.candidates().len(), words.len());
    }

    #[test]
    fn equation_entry() {
        let words = words_from_slice(EQUATIONS, &GameConfig::NERDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::NERDLE, &words));

        type_str(&mut app, "15+24=39");
        type_str(&mut app, "GYG__Y_G");
        type_str(&mut app, "17+1-9=9");
        type_str(&mut app, "GYGYG_GG");

        let remaining: Vec<&str> = app.candidates().iter().map(|g| g.text()).collect();
        assert_eq!(remaining, ["11+5-7=9"]);
    }

    #[test]
    fn messages_are_capped() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut app = App::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        for _ in 0..10 {
            app.undo_last();
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
