//! Pure classification of what a move did, so the caller can react (sound,
//! status line) without the engine performing any side effects.

use super::player::Player;
use super::state::{GameOutcome, GameState, MoveError};

/// Audible feedback the front end may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Win,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The move was refused and nothing changed
    Rejected(MoveError),
    /// A mark was placed and the game goes on
    Placed(Player),
    /// The mark completed a line
    Won(Player),
    /// The mark filled the last cell without completing a line
    Drawn(Player),
}

impl Transition {
    /// Compare the state before a move with the result of applying it.
    pub fn classify(before: &GameState, result: &Result<GameState, MoveError>) -> Transition {
        let after = match result {
            Err(err) => return Transition::Rejected(err.clone()),
            Ok(after) => after,
        };
        let mover = before.current_player();
        match after.outcome() {
            GameOutcome::Won(winner) => Transition::Won(winner),
            GameOutcome::Draw => Transition::Drawn(mover),
            GameOutcome::InProgress => Transition::Placed(mover),
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, Transition::Rejected(_))
    }

    /// Cues to play, in order. Every accepted move clicks; a win also plays
    /// the win cue.
    pub fn cues(&self) -> &'static [Cue] {
        match self {
            Transition::Rejected(_) => &[],
            Transition::Placed(_) | Transition::Drawn(_) => &[Cue::Click],
            Transition::Won(_) => &[Cue::Click, Cue::Win],
        }
    }
}
