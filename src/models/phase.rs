use std::fmt;

/// Which screen the front-end should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A question is on screen, waiting for a pick.
    Playing,
    /// The last pick was wrong; the correct flag is being shown.
    ShowingWrongAnswer,
    /// The round pool ran out; the final score is being shown.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::ShowingWrongAnswer => write!(f, "showing a wrong answer"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}
