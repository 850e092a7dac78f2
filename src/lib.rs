//! # flag-quiz
//!
//! A terminal flag quiz: you are given a country name and pick its flag out
//! of four. Each round the asked country leaves the pool, and the game ends
//! once only four questions remain.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flag_quiz::{FlagQuiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Play with the built-in catalogue and a fixed seed
//!     let quiz = FlagQuiz::builtin(Some(7))?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The state machine can also be driven without a terminal:
//!
//! ```rust
//! use flag_quiz::{CountryPool, Phase, QuizState, SequenceRandomizer};
//!
//! let pool = CountryPool::new(["Austria", "Andorra", "Albania", "Bulgaria", "Belgium"]).unwrap();
//! let mut quiz = QuizState::new(pool, SequenceRandomizer::new());
//!
//! let target = quiz.correct_index();
//! quiz.answer(target).unwrap();
//! assert_eq!(quiz.score(), 1);
//! assert_eq!(quiz.phase(), Phase::GameOver);
//! ```

mod app;
mod data;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use thiserror::Error;

pub use app::App;
pub use data::{
    CountryCatalog, CountryEntry, Flag, FlagStore, LoadError, load_builtin_catalog,
    load_catalog_from_json,
};
pub use models::{CountryPool, MIN_COUNTRIES, Phase, PoolError};
pub use quiz::{
    AnswerOutcome, CHOICES_PER_ROUND, QuizState, QuizStateError, Randomizer, RngRandomizer,
    SequenceRandomizer,
};

/// Error type for quiz operations.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Error loading the country catalogue.
    #[error("Failed to load countries: {0}")]
    Load(#[from] LoadError),
    /// The countries do not make a playable game.
    #[error("Invalid country pool: {0}")]
    Pool(#[from] PoolError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A flag quiz that can be run in the terminal.
pub struct FlagQuiz {
    app: App,
}

impl FlagQuiz {
    /// Create a quiz over `catalog`, seeding the shuffles with `seed` when given.
    pub fn new(catalog: CountryCatalog, seed: Option<u64>) -> Self {
        info!(
            "starting flag quiz with {} countries (seed: {:?})",
            catalog.pool().len(),
            seed
        );
        Self {
            app: App::new(catalog, seed),
        }
    }

    /// Use the countries that ship with the game.
    pub fn builtin(seed: Option<u64>) -> Result<Self, QuizError> {
        let catalog = load_builtin_catalog()?;
        Ok(Self::new(catalog, seed))
    }

    /// Load the countries from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON array of `{"name": ..., "code": ...}` objects.
    /// * `seed` - Optional seed for a reproducible game.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use flag_quiz::FlagQuiz;
    ///
    /// let quiz = FlagQuiz::from_json("countries.json", None).expect("Failed to load countries");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, QuizError> {
        let catalog = load_catalog_from_json(path)?;
        Ok(Self::new(catalog, seed))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::start()?;
        let result = run_event_loop(&mut session, &mut self.app);
        drop(session);
        info!(
            "quit with score {} and {} remaining",
            self.app.quiz().score(),
            self.app.quiz().remaining()
        );
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input<R: Randomizer>(app: &mut App<R>, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.phase() {
        Phase::Playing => handle_playing_input(app, key),
        Phase::ShowingWrongAnswer => handle_wrong_answer_input(app, key),
        Phase::GameOver => handle_game_over_input(app, key),
    }
    false
}

fn handle_playing_input<R: Randomizer>(app: &mut App<R>, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.select_left(),
        KeyCode::Right | KeyCode::Char('l') => app.select_right(),
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char(c @ '1'..='4') => app.answer(c as usize - '1' as usize),
        _ => {}
    }
}

fn handle_wrong_answer_input<R: Randomizer>(app: &mut App<R>, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
        app.dismiss_notice();
    }
}

fn handle_game_over_input<R: Randomizer>(app: &mut App<R>, key: KeyCode) {
    if matches!(
        key,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('R')
    ) {
        app.dismiss_notice();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(picks: Vec<usize>) -> App<SequenceRandomizer> {
        let catalog = load_builtin_catalog().unwrap();
        App::with_randomizer(catalog, SequenceRandomizer::new().with_picks(picks))
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut app = scripted(vec![0]);
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        app.answer(1);
        assert_eq!(app.phase(), Phase::ShowingWrongAnswer);
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
    }

    #[test]
    fn test_number_keys_answer_directly() {
        let mut app = scripted(vec![2]);
        assert!(!handle_input(&mut app, KeyCode::Char('3')));
        assert_eq!(app.quiz().score(), 1);
        assert_eq!(app.quiz().remaining(), 22);
    }

    #[test]
    fn test_arrows_then_enter_answers_selection() {
        let mut app = scripted(vec![1]);
        handle_input(&mut app, KeyCode::Right);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.quiz().score(), 1);
    }

    #[test]
    fn test_wrong_answer_notice_needs_dismissal() {
        let mut app = scripted(vec![0]);
        handle_input(&mut app, KeyCode::Char('2'));
        assert_eq!(app.phase(), Phase::ShowingWrongAnswer);

        // Movement keys do nothing while the notice is up.
        handle_input(&mut app, KeyCode::Char('j'));
        assert_eq!(app.phase(), Phase::ShowingWrongAnswer);

        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.quiz().remaining(), 22);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut app = scripted(Vec::new());
        while app.phase() != Phase::GameOver {
            handle_input(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.quiz().score(), 19);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.quiz().score(), 0);
        assert_eq!(app.quiz().remaining(), 23);
    }

    #[test]
    fn test_error_messages() {
        let err = QuizError::from(PoolError::BlankName);
        assert_eq!(
            err.to_string(),
            "Invalid country pool: country names must not be blank"
        );
    }
}
