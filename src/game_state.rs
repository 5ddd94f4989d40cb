use crate::piece::{Color, Piece};
use crate::position::Position;

/// One applied move, as kept in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    pub start: Position,
    pub end: Position,
    pub piece: Piece,
    pub player: Color,
}

impl RecordedMove {
    /// Symbol of the piece that moved.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.piece.symbol()
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { current_player: Color },
    Finished { winner: Color },
}

/// Turn, result and move history of one game.
///
/// The game is over exactly when a winner has been declared; there is no
/// separate flag that could disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_player: Color,
    winner: Option<Color>,
    history: Vec<RecordedMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// White to move, no winner, empty history.
    #[inline]
    pub const fn new() -> Self {
        Self {
            current_player: Color::White,
            winner: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub const fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub const fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub const fn phase(&self) -> Phase {
        match self.winner {
            Some(winner) => Phase::Finished { winner },
            None => Phase::InProgress {
                current_player: self.current_player,
            },
        }
    }

    #[inline]
    pub fn history(&self) -> &[RecordedMove] {
        &self.history
    }

    /// Appends a move made by the current player.
    pub fn record_move(&mut self, start: Position, end: Position, piece: Piece) -> &RecordedMove {
        self.history.push(RecordedMove {
            start,
            end,
            piece,
            player: self.current_player,
        });
        &self.history[self.history.len() - 1]
    }

    /// Passes the turn to the other side.
    #[inline]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Ends the game in favour of `winner`.
    ///
    /// # Panics
    ///
    /// Panics if a winner was already declared; the driver must stop playing
    /// once the game is finished.
    pub fn declare_winner(&mut self, winner: Color) {
        assert!(
            self.winner.is_none(),
            "winner already declared as {:?}",
            self.winner
        );
        self.winner = Some(winner);
    }

    /// Back to a fresh game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
