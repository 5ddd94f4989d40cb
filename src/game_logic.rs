use thiserror::Error;

use crate::board::Board;
use crate::feedback::FeedbackSource;
use crate::game_state::{GameState, RecordedMove};
use crate::piece::{Color, Piece};
use crate::position::{Coord, Position};
use crate::validation::{CheckedMove, Rejection, Verdict, check_move, validate_move};

/// Why [`GameEngine::play`] did not apply a move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("game is over, {winner} won")]
    GameOver { winner: Color },
    #[error(transparent)]
    Illegal(#[from] Rejection),
}

/// Result of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub played: RecordedMove,
    /// Opposing piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Set when the move took the opponent's king.
    pub winner: Option<Color>,
}

/// One game session: the board plus the turn state driving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    state: GameState,
}

impl GameEngine {
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Starts a game from an arbitrary placement, White to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            state: GameState::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the piece at a given position, if any
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.get(position)
    }

    /// Legality of `start → end` for the side to move.
    #[inline]
    pub fn validate(&self, start: Coord, end: Coord) -> Verdict {
        validate_move(&self.board, start, end, self.state.current_player())
    }

    /// Validates and plays a move for the side to move.
    ///
    /// On success the move is applied and recorded, then either the mover
    /// is declared winner (the opponent's king is gone) or the turn passes.
    /// On failure board and state are untouched.
    pub fn play(&mut self, start: Coord, end: Coord) -> Result<MoveOutcome, PlayError> {
        if let Some(winner) = self.state.winner() {
            return Err(PlayError::GameOver { winner });
        }

        let mover = self.state.current_player();
        let CheckedMove { start, end, piece } = check_move(&self.board, start, end, mover)
            .inspect_err(|reason| log::debug!("{mover} {start} -> {end} rejected: {reason}"))?;

        let captured = self.board.apply_move(start, end);
        let played = *self.state.record_move(start, end, piece);
        log::info!("{mover} played {piece} {start}{end}");
        if let Some(taken) = captured {
            log::info!("{mover} captured {taken} on {end}");
        }

        let opponent = mover.opponent();
        let winner = if self.board.king_present(opponent) {
            self.state.switch_player();
            None
        } else {
            log::info!("{opponent} king captured, {mover} wins");
            self.state.declare_winner(mover);
            Some(mover)
        };

        Ok(MoveOutcome {
            played,
            captured,
            winner,
        })
    }

    /// Every position the piece on `from` may move to this turn.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        Position::all()
            .filter(|&to| self.validate(from.into(), to.into()).is_accept())
            .collect()
    }

    /// Restores the starting layout and a fresh game state.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state.reset();
    }
}

impl FeedbackSource for GameEngine {
    fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.get(position)
    }

    fn side_to_move(&self) -> Option<Color> {
        (!self.state.is_game_over()).then(|| self.state.current_player())
    }

    fn legal_destinations(&self, from: Position) -> Vec<Position> {
        GameEngine::legal_destinations(self, from)
    }
}
