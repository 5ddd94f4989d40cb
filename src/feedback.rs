use crate::piece::{Color, Piece};
use crate::position::Position;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece
    Origin,
    /// Legal destination onto an empty square
    Destination,
    /// Legal destination that takes an opponent piece
    Capture,
}

/// Highlights for the current board, produced by [`compute_feedback`] and
/// consumed by a [`BoardDisplay`](crate::BoardDisplay).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Position, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Position, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, position: Position) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, feedback)| *feedback)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Position, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Position, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Game information needed to compute feedback
pub trait FeedbackSource {
    fn piece_at(&self, position: Position) -> Option<Piece>;

    /// Side to move, or `None` once the game is finished.
    fn side_to_move(&self) -> Option<Color>;

    /// Positions the piece on `from` may legally move to.
    fn legal_destinations(&self, from: Position) -> Vec<Position>;
}

/// Compute highlights for a selected square.
///
/// Shows the selected piece and where it can go, marking captures apart
/// from quiet moves. Nothing is shown when the selection is empty, belongs
/// to the side not on move, or the game has ended.
pub fn compute_feedback(source: &impl FeedbackSource, selected: Option<Position>) -> BoardFeedback {
    let Some(from) = selected else {
        return BoardFeedback::new();
    };
    let Some(mover) = source.side_to_move() else {
        return BoardFeedback::new();
    };
    if source.piece_at(from).is_none_or(|piece| piece.color != mover) {
        return BoardFeedback::new();
    }

    log::trace!("computing feedback for {from}");
    std::iter::once((from, SquareFeedback::Origin))
        .chain(
            source
                .legal_destinations(from)
                .into_iter()
                .map(|to| classify_destination(source, to)),
        )
        .collect::<Vec<_>>()
        .into()
}

/// Classify a destination as either a capture or regular destination
fn classify_destination(source: &impl FeedbackSource, to: Position) -> (Position, SquareFeedback) {
    if source.piece_at(to).is_some() {
        (to, SquareFeedback::Capture)
    } else {
        (to, SquareFeedback::Destination)
    }
}
