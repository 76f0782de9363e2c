//! Core game logic: board representation, player marks, the winning-line
//! catalog, and the game state machine with immutable transitions.

mod board;
pub mod lines;
mod mode;
mod player;
mod state;
mod transition;

pub use board::{Board, Cell};
pub use lines::{Direction, GridSpec, Line, LineCatalog, MAX_SIZE};
pub use mode::GameMode;
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
pub use transition::{Cue, Transition};
