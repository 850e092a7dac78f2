//! The question-progression state machine.
//!
//! A game deals from a [`CountryPool`]. Each round shows the first
//! [`CHOICES_PER_ROUND`] countries of the round pool, one of which is the
//! target. After every round the previous target is dropped from the pool
//! and the rest is reshuffled, until only [`CHOICES_PER_ROUND`] questions
//! remain and the game ends.

use log::{debug, info, warn};
use thiserror::Error;

use super::random::Randomizer;
use crate::models::{CountryPool, Phase};

/// Number of flags shown each round.
pub const CHOICES_PER_ROUND: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizStateError {
    #[error("choice {index} is outside the {len} displayed flags")]
    InvalidChoiceIndex { index: usize, len: usize },
    #[error("`{operation}` is not allowed while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },
}

/// What happened to a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { correct_country: String },
}

pub struct QuizState<R> {
    countries: CountryPool,
    round_pool: Vec<String>,
    correct_index: usize,
    remaining: usize,
    score: usize,
    phase: Phase,
    /// Whether the target at `correct_index` has been put in front of the
    /// player and must leave the pool on the next draw.
    target_shown: bool,
    last_correct: Option<String>,
    randomizer: R,
}

impl<R: Randomizer> QuizState<R> {
    /// Create a game and deal its first question.
    pub fn new(countries: CountryPool, randomizer: R) -> Self {
        let mut state = Self {
            remaining: countries.len(),
            round_pool: Vec::with_capacity(countries.len()),
            countries,
            correct_index: 0,
            score: 0,
            phase: Phase::Playing,
            target_shown: false,
            last_correct: None,
            randomizer,
        };
        state.reset();
        state
    }

    /// Start over with a freshly shuffled copy of the country pool.
    pub fn reset(&mut self) {
        self.round_pool.clear();
        self.round_pool.extend_from_slice(self.countries.names());
        self.randomizer.shuffle(&mut self.round_pool);

        self.remaining = self.countries.len();
        self.score = 0;
        self.target_shown = false;
        self.last_correct = None;
        info!("dealt a new game of {} countries", self.remaining);

        self.select_next_question();
    }

    /// Submit the flag at `choice_index` of [`Self::current_choices`].
    pub fn answer(&mut self, choice_index: usize) -> Result<AnswerOutcome, QuizStateError> {
        self.expect_phase(Phase::Playing, "answer")?;
        if choice_index >= CHOICES_PER_ROUND {
            return Err(QuizStateError::InvalidChoiceIndex {
                index: choice_index,
                len: CHOICES_PER_ROUND,
            });
        }

        self.remaining -= 1;

        if choice_index == self.correct_index {
            self.score += 1;
            debug!(
                "correct: {} (score {}, {} remaining)",
                self.current_question_country(),
                self.score,
                self.remaining
            );
            self.select_next_question();
            Ok(AnswerOutcome::Correct)
        } else {
            let correct_country = self.current_question_country().to_string();
            debug!(
                "wrong: picked {} for {} ({} remaining)",
                self.round_pool[choice_index], correct_country, self.remaining
            );
            self.last_correct = Some(correct_country.clone());
            self.phase = Phase::ShowingWrongAnswer;
            Ok(AnswerOutcome::Wrong { correct_country })
        }
    }

    /// The wrong-answer notice was dismissed; move on to the next round.
    pub fn acknowledge_wrong_answer(&mut self) -> Result<(), QuizStateError> {
        self.expect_phase(Phase::ShowingWrongAnswer, "acknowledge_wrong_answer")?;
        self.last_correct = None;
        self.select_next_question();
        Ok(())
    }

    /// The game-over notice was dismissed; start a fresh game.
    pub fn acknowledge_game_over(&mut self) -> Result<(), QuizStateError> {
        self.expect_phase(Phase::GameOver, "acknowledge_game_over")?;
        self.reset();
        Ok(())
    }

    pub fn current_question_country(&self) -> &str {
        &self.round_pool[self.correct_index]
    }

    /// The flags on screen, in slot order.
    pub fn current_choices(&self) -> &[String] {
        &self.round_pool[..CHOICES_PER_ROUND]
    }

    /// The country the player should have picked. Only available while the
    /// wrong-answer notice is up.
    pub fn last_correct_country(&self) -> Result<&str, QuizStateError> {
        self.expect_phase(Phase::ShowingWrongAnswer, "last_correct_country")?;
        self.last_correct
            .as_deref()
            .ok_or(QuizStateError::InvalidState {
                operation: "last_correct_country",
                phase: self.phase,
            })
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn round_pool(&self) -> &[String] {
        &self.round_pool
    }

    pub fn country_pool(&self) -> &CountryPool {
        &self.countries
    }

    fn select_next_question(&mut self) {
        if self.remaining <= CHOICES_PER_ROUND {
            self.phase = Phase::GameOver;
            info!(
                "game over: scored {} of {}",
                self.score,
                self.countries.len() - CHOICES_PER_ROUND
            );
            return;
        }

        if self.target_shown {
            let target = self.round_pool[self.correct_index].clone();
            if !remove_first(&mut self.round_pool, &target) {
                warn!("target {} was already gone from the round pool", target);
            }
        }

        self.randomizer.shuffle(&mut self.round_pool);
        self.correct_index = self.randomizer.pick_index(CHOICES_PER_ROUND) % CHOICES_PER_ROUND;
        self.target_shown = true;
        self.phase = Phase::Playing;

        debug!(
            "next round: {} in slot {} of {:?}",
            self.current_question_country(),
            self.correct_index,
            self.current_choices()
        );
    }

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<(), QuizStateError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizStateError::InvalidState {
                operation,
                phase: self.phase,
            })
        }
    }
}

/// Remove the first entry equal to `name`. Returns whether one was found.
fn remove_first(pool: &mut Vec<String>, name: &str) -> bool {
    match pool.iter().position(|n| n == name) {
        Some(index) => {
            pool.remove(index);
            true
        }
        None => false,
    }
}
