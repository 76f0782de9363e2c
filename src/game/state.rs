use std::sync::Arc;

use super::board::Board;
use super::lines::{GridSpec, Line, LineCatalog};
use super::player::Player;
use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// A move the engine refused. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {position} is outside the board ({cells} cells)")]
    OutOfRange { position: usize, cells: usize },

    #[error("position {0} is already occupied")]
    Occupied(usize),

    #[error("game is over")]
    GameOver,
}

/// Board, turn and outcome of one game.
///
/// Every transition goes through [`apply_move`](GameState::apply_move) (or its
/// in-place twin) and [`reset`](GameState::reset); a rejected move never
/// changes anything.
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: Arc<LineCatalog>,
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    winning_line: Option<Line>,
    last_move: Option<usize>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state on the standard 7x7 grid
    pub fn new_game() -> Self {
        Self::with_catalog(LineCatalog::standard())
    }

    /// Create initial game state on an arbitrary grid
    pub fn with_grid(spec: GridSpec) -> Self {
        Self::with_catalog(LineCatalog::for_spec(spec))
    }

    fn with_catalog(catalog: Arc<LineCatalog>) -> Self {
        GameState {
            board: Board::new(catalog.spec().size()),
            catalog,
            current_player: Player::X, // X starts
            outcome: GameOutcome::InProgress,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    /// Build a state around an existing board, evaluating its outcome with a
    /// full catalog scan. `current_player` is who moves next if the game is
    /// still in progress.
    ///
    /// Meant for fixtures and analysis: mark counts are not checked, but a
    /// board on which both players own a line is rejected.
    pub fn from_board(
        spec: GridSpec,
        board: Board,
        current_player: Player,
    ) -> Result<Self, GridError> {
        if board.size() != spec.size() {
            return Err(GridError::BoardSizeMismatch {
                expected: spec.size(),
                actual: board.size(),
            });
        }

        let mut state = Self::with_grid(spec);
        let winner = state
            .catalog
            .find_winner(&board)
            .map(|(player, line)| (player, line.clone()));

        if let Some((player, _)) = &winner {
            let loser = player.other();
            if state.catalog.lines().iter().any(|l| l.owner(&board) == Some(loser)) {
                return Err(GridError::BothPlayersWin);
            }
        }

        state.outcome = match &winner {
            Some((player, _)) => GameOutcome::Won(*player),
            None if board.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        };
        state.winning_line = winner.map(|(_, line)| line);
        state.move_count = board.len() - board.empty_positions().len();
        state.board = board;
        state.current_player = current_player;
        Ok(state)
    }

    pub fn grid(&self) -> GridSpec {
        self.catalog.spec()
    }

    /// Get current player. Once the game is over this is the player who made
    /// the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The line that decided the game, if it was won
    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Number of marks on the board
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of playable positions
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_positions()
    }

    /// Check whether `position` could be played right now
    pub fn check_move(&self, position: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(position) {
            None => Err(MoveError::OutOfRange {
                position,
                cells: self.board.len(),
            }),
            Some(cell) if !cell.is_empty() => Err(MoveError::Occupied(position)),
            Some(_) => Ok(()),
        }
    }

    fn accept(&self, position: usize) -> Result<(), MoveError> {
        self.check_move(position).inspect_err(|err| {
            log::trace!("rejected move at {position}: {err}");
        })
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, position: usize) -> Result<GameState, MoveError> {
        self.accept(position)?;
        let mut next = self.clone();
        next.apply_move_mut(position)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, position: usize) -> Result<(), MoveError> {
        self.accept(position)?;

        let player = self.current_player;
        self.board.set(position, player.to_cell());
        self.last_move = Some(position);
        self.move_count += 1;
        log::debug!("{player} played {position} (move {})", self.move_count);

        // Only lines through the new mark can have been completed by it
        let won = self
            .catalog
            .find_winner_through(&self.board, position)
            .map(|(winner, line)| (winner, line.clone()));

        if let Some((winner, line)) = won {
            log::info!("{winner} wins with {:?}", line.positions());
            self.outcome = GameOutcome::Won(winner);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            log::info!("draw after {} moves", self.move_count);
            self.outcome = GameOutcome::Draw;
        } else {
            self.current_player = player.other();
        }

        Ok(())
    }

    /// Clear the board and start over on the same grid
    pub fn reset(&mut self) {
        log::info!("game reset");
        *self = Self::with_catalog(Arc::clone(&self.catalog));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.grid() == other.grid()
            && self.board == other.board
            && self.current_player == other.current_player
            && self.outcome == other.outcome
            && self.winning_line == other.winning_line
            && self.last_move == other.last_move
            && self.move_count == other.move_count
    }
}

impl Eq for GameState {}
