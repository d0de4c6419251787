//! TUI application state and logic

use crate::core::{FrequencyMap, NormalizedText};
use crate::matcher::{FindError, InputProblem, LengthFilter, MatchConfig, find_words_with};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Most inputs kept in the result cache before it is emptied
const CACHE_LIMIT: usize = 128;

/// Application state
pub struct App<'a> {
    pub dict: &'a [String],
    pub matching: MatchConfig,
    pub input_buffer: String,
    pub letters: FrequencyMap,
    pub matches: Vec<String>,
    pub problem: Option<InputProblem>,
    pub scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    cache: FxHashMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub input: String,
    pub normalized: String,
    pub match_count: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dict: &'a [String], matching: MatchConfig) -> Self {
        let mut app = Self {
            dict,
            matching,
            input_buffer: String::new(),
            letters: FrequencyMap::default(),
            matches: Vec::new(),
            problem: None,
            scroll: 0,
            history: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
            cache: FxHashMap::default(),
        };
        app.add_message(
            "Type letters to see every word they can spell.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter saves a query, TAB changes the length filter.",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// Recompute matches for the current input
    pub fn refresh(&mut self) {
        let normalized = NormalizedText::new(&self.input_buffer);
        self.letters = FrequencyMap::count(&normalized);
        self.scroll = 0;

        // Results depend only on the normalized letters, so the raw
        // buffer's emptiness is checked before the cache.
        if self.input_buffer.is_empty() {
            self.matches.clear();
            self.problem = Some(InputProblem::EmptyInput);
            return;
        }

        if let Some(cached) = self.cache.get(normalized.as_str()) {
            self.matches.clone_from(cached);
            self.problem = None;
            return;
        }

        match find_words_with(&self.input_buffer, self.dict, &self.matching) {
            Ok(words) => {
                if self.cache.len() >= CACHE_LIMIT {
                    self.cache.clear();
                }
                self.cache.insert(normalized.into_string(), words.clone());
                self.matches = words;
                self.problem = None;
            }
            Err(FindError::InvalidInput(problem)) => {
                self.matches.clear();
                self.problem = Some(problem);
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
        self.refresh();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refresh();
    }

    /// Save the current query to history
    pub fn submit(&mut self) {
        if let Some(problem) = self.problem {
            self.add_message(&format!("Invalid input: {problem}"), MessageStyle::Error);
            return;
        }

        let normalized = NormalizedText::new(&self.input_buffer).into_string();
        let match_count = self.matches.len();
        self.history.push(HistoryEntry {
            input: self.input_buffer.clone(),
            normalized: normalized.clone(),
            match_count,
        });
        self.add_message(
            &format!("{} → {match_count} words", normalized.to_uppercase()),
            MessageStyle::Success,
        );
        self.cache.clear();
        self.clear_input();
    }

    /// Restore the most recent saved query
    pub fn undo_last(&mut self) {
        if let Some(entry) = self.history.pop() {
            self.input_buffer = entry.input;
            self.refresh();
            self.add_message("Restored previous query", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Switch to the next length filter policy
    pub fn cycle_filter(&mut self) {
        self.matching.filter = match self.matching.filter {
            LengthFilter::Raw => LengthFilter::Normalized,
            LengthFilter::Normalized => LengthFilter::Off,
            LengthFilter::Off => LengthFilter::Raw,
        };
        self.cache.clear();
        self.refresh();
        self.add_message(
            &format!("Length filter: {}", self.matching.filter),
            MessageStyle::Info,
        );
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.matches.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
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

    /// Share of the word list spelled by the current input
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.dict.is_empty() {
            0.0
        } else {
            self.matches.len() as f64 / self.dict.len() as f64
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

    // Run app
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
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('u') if ctrl => app.undo_last(),
                KeyCode::Char('l') if ctrl => app.clear_input(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.cycle_filter(),
                KeyCode::Up => app.scroll_up(),
                KeyCode::Down => app.scroll_down(),
                KeyCode::Char(c) if !ctrl => app.push_char(c),
                KeyCode::Backspace => app.pop_char(),
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

    fn dict() -> Vec<String> {
        ["og", "god", "do", "not", "a", "doge", "d-o-g"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn starts_with_empty_input() {
        let words = dict();
        let app = App::new(&words, MatchConfig::default());
        assert!(app.matches.is_empty());
        assert_eq!(app.problem, Some(InputProblem::EmptyInput));
    }

    #[test]
    fn typing_updates_matches() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "dog");
        assert_eq!(app.matches, vec!["og", "god", "do"]);
        assert_eq!(app.letters.total(), 3);
        assert!(app.problem.is_none());

        app.pop_char();
        assert_eq!(app.matches, vec!["do"]);
    }

    #[test]
    fn cycle_filter_recomputes() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "dog");

        app.cycle_filter();
        assert_eq!(app.matching.filter, LengthFilter::Normalized);
        assert_eq!(app.matches, vec!["og", "god", "do", "dog"]);

        app.cycle_filter();
        app.cycle_filter();
        assert_eq!(app.matching.filter, LengthFilter::Raw);
        assert_eq!(app.matches, vec!["og", "god", "do"]);
    }

    #[test]
    fn submit_and_undo() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "Dog");
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].normalized, "dog");
        assert_eq!(app.history[0].match_count, 3);

        app.undo_last();
        assert_eq!(app.input_buffer, "Dog");
        assert!(app.history.is_empty());
        assert_eq!(app.matches.len(), 3);
    }

    #[test]
    fn submit_rejects_empty_input() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        app.submit();
        assert!(app.history.is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn messages_are_capped() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        for _ in 0..10 {
            app.undo_last();
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn scroll_stays_in_bounds() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "dog");
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.scroll, 2);
        for _ in 0..10 {
            app.scroll_up();
        }
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn coverage_is_share_of_dict() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "dog");
        assert!((app.coverage() - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn cache_stays_bounded() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        for i in 0..(CACHE_LIMIT * 3) {
            app.clear_input();
            let query: String = format!("{i:b}")
                .chars()
                .map(|bit| if bit == '1' { 'd' } else { 'o' })
                .collect();
            type_str(&mut app, &query);
            assert!(app.cache.len() <= CACHE_LIMIT);
        }
    }

    #[test]
    fn submit_empties_cache() {
        let words = dict();
        let mut app = App::new(&words, MatchConfig::default());
        type_str(&mut app, "dog");
        assert!(!app.cache.is_empty());

        app.submit();
        assert!(app.cache.is_empty());
        assert_eq!(app.history[0].match_count, 3);
    }
}
