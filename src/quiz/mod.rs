mod random;
mod state;

pub use random::{Randomizer, RngRandomizer, SequenceRandomizer};
pub use state::{AnswerOutcome, CHOICES_PER_ROUND, QuizState, QuizStateError};
