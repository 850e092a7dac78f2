use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::{CountryCatalog, Flag, FlagStore};
use crate::models::Phase;
use crate::quiz::{AnswerOutcome, CHOICES_PER_ROUND, QuizState, Randomizer, RngRandomizer};

/// Flags are laid out two per row.
const GRID_COLUMNS: usize = 2;

pub struct App<R = RngRandomizer<StdRng>> {
    quiz: QuizState<R>,
    flags: FlagStore,
    selected_choice: usize,
}

impl App {
    /// A game driven by `StdRng`, seeded with `seed` when given.
    pub fn new(catalog: CountryCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_randomizer(catalog, RngRandomizer::new(rng))
    }
}

impl<R: Randomizer> App<R> {
    pub fn with_randomizer(catalog: CountryCatalog, randomizer: R) -> Self {
        let (pool, flags) = catalog.into_parts();
        Self {
            quiz: QuizState::new(pool, randomizer),
            flags,
            selected_choice: 0,
        }
    }

    pub fn quiz(&self) -> &QuizState<R> {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.quiz.phase()
    }

    pub fn selected_choice(&self) -> usize {
        self.selected_choice
    }

    pub fn flag(&self, country: &str) -> Option<&Flag> {
        self.flags.flag(country)
    }

    pub fn select_left(&mut self) {
        if self.selected_choice % GRID_COLUMNS > 0 {
            self.selected_choice -= 1;
        }
    }

    pub fn select_right(&mut self) {
        if self.selected_choice % GRID_COLUMNS < GRID_COLUMNS - 1 {
            self.selected_choice += 1;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected_choice >= GRID_COLUMNS {
            self.selected_choice -= GRID_COLUMNS;
        }
    }

    pub fn select_down(&mut self) {
        if self.selected_choice + GRID_COLUMNS < CHOICES_PER_ROUND {
            self.selected_choice += GRID_COLUMNS;
        }
    }

    pub fn submit_answer(&mut self) {
        self.answer(self.selected_choice);
    }

    /// Answer the flag in slot `index`. A wrong pick leaves the cursor on it.
    pub fn answer(&mut self, index: usize) {
        match self.quiz.answer(index) {
            Ok(AnswerOutcome::Correct) => self.selected_choice = 0,
            Ok(AnswerOutcome::Wrong { .. }) => self.selected_choice = index,
            Err(e) => warn!("ignored answer: {}", e),
        }
    }

    /// Close whichever notice is showing and carry on playing.
    pub fn dismiss_notice(&mut self) {
        let result = match self.quiz.phase() {
            Phase::ShowingWrongAnswer => self.quiz.acknowledge_wrong_answer(),
            Phase::GameOver => self.quiz.acknowledge_game_over(),
            Phase::Playing => return,
        };

        if let Err(e) = result {
            warn!("could not dismiss notice: {}", e);
        }
        self.selected_choice = 0;
    }
}
