use thiserror::Error;

use crate::board::Board;
use crate::piece::{Color, Piece};
use crate::position::{Coord, Position};
use crate::rules;

/// Why a proposed move was refused.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("start out of bounds")]
    StartOutOfBounds,
    #[error("end out of bounds")]
    EndOutOfBounds,
    #[error("no piece at start")]
    NoPieceAtStart,
    #[error("piece belongs to the other player")]
    NotYourPiece,
    #[error("cannot capture own piece")]
    OwnPieceCapture,
    #[error("illegal shape for this piece kind")]
    IllegalShape,
}

/// Outcome of legality evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    #[inline]
    pub const fn is_accept(self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// A move that passed every check, with its coordinates resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedMove {
    pub start: Position,
    pub end: Position,
    pub piece: Piece,
}

/// Decides whether `mover` may move the piece on `start` to `end`.
///
/// Checks run in a fixed order and stop at the first failure. The board is
/// only borrowed immutably, so asking twice gives the same answer.
pub fn validate_move(board: &Board, start: Coord, end: Coord, mover: Color) -> Verdict {
    match check_move(board, start, end, mover) {
        Ok(_) => Verdict::Accept,
        Err(reason) => Verdict::Reject(reason),
    }
}

/// Same checks as [`validate_move`], returning the resolved move on success.
pub fn check_move(
    board: &Board,
    start: Coord,
    end: Coord,
    mover: Color,
) -> Result<CheckedMove, Rejection> {
    let start = Position::try_from(start).map_err(|_| Rejection::StartOutOfBounds)?;
    let end = Position::try_from(end).map_err(|_| Rejection::EndOutOfBounds)?;

    let piece = board.get(start).ok_or(Rejection::NoPieceAtStart)?;
    if board.color_of(piece) != mover {
        return Err(Rejection::NotYourPiece);
    }

    if let Some(target) = board.get(end)
        && board.color_of(target) == mover
    {
        return Err(Rejection::OwnPieceCapture);
    }

    if !rules::shape_permits(piece, start, end, board) {
        return Err(Rejection::IllegalShape);
    }

    Ok(CheckedMove { start, end, piece })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;
    use test_case::test_case;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test position on board")
    }

    fn validate(board: &Board, start: (i8, i8), end: (i8, i8), mover: Color) -> Verdict {
        validate_move(
            board,
            Coord::new(start.0, start.1),
            Coord::new(end.0, end.1),
            mover,
        )
    }

    #[test_case((-1, 0), (0, 0), Rejection::StartOutOfBounds; "start off board")]
    #[test_case((1, 4), (1, 8), Rejection::EndOutOfBounds; "end off board")]
    #[test_case((8, 8), (-1, -1), Rejection::StartOutOfBounds; "start checked before end")]
    #[test_case((3, 3), (4, 3), Rejection::NoPieceAtStart; "empty start")]
    #[test_case((6, 4), (5, 4), Rejection::NotYourPiece; "black pawn on white turn")]
    #[test_case((0, 0), (1, 0), Rejection::OwnPieceCapture; "rook onto own pawn")]
    #[test_case((0, 0), (1, 1), Rejection::OwnPieceCapture; "ownership checked before shape")]
    #[test_case((1, 4), (4, 4), Rejection::IllegalShape; "pawn triple step")]
    fn test_rejections_on_start_board(start: (i8, i8), end: (i8, i8), reason: Rejection) {
        let board = Board::new();
        assert_eq!(
            validate(&board, start, end, Color::White),
            Verdict::Reject(reason)
        );
    }

    #[test_case((1, 4), (2, 4); "pawn single step")]
    #[test_case((1, 4), (3, 4); "pawn double step")]
    #[test_case((0, 1), (2, 0); "knight to a3")]
    #[test_case((0, 1), (2, 2); "knight to c3")]
    fn test_accepts_on_start_board(start: (i8, i8), end: (i8, i8)) {
        let board = Board::new();
        assert_eq!(validate(&board, start, end, Color::White), Verdict::Accept);
    }

    #[test]
    fn test_every_opposing_piece_is_refused() {
        let board = Board::new();
        for mover in Color::ALL {
            for (position, piece) in board.pieces() {
                if piece.color == mover {
                    continue;
                }
                // Any in-bounds destination will do; ownership is checked first.
                let verdict = validate_move(&board, position.into(), Coord::new(4, 4), mover);
                assert_eq!(
                    verdict,
                    Verdict::Reject(Rejection::NotYourPiece),
                    "{} on {position} for {mover}",
                    piece.symbol()
                );
            }
        }
    }

    #[test]
    fn test_knight_straight_line_is_illegal_shape() {
        let mut board = Board::empty();
        board.place(pos(0, 1), Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(
            validate(&board, (0, 1), (0, 3), Color::White),
            Verdict::Reject(Rejection::IllegalShape)
        );
    }

    #[test]
    fn test_check_move_resolves_accepted_move() {
        let board = Board::new();
        assert_eq!(
            check_move(&board, Coord::new(0, 6), Coord::new(2, 5), Color::White),
            Ok(CheckedMove {
                start: pos(0, 6),
                end: pos(2, 5),
                piece: Piece::new(PieceKind::Knight, Color::White),
            })
        );
        assert_eq!(
            check_move(&board, Coord::new(0, 6), Coord::new(9, 5), Color::White),
            Err(Rejection::EndOutOfBounds)
        );
    }

    #[test]
    fn test_own_piece_capture_even_when_shape_is_legal() {
        let mut board = Board::new();
        // King on e2 could step to f2 if it were not occupied by its own pawn.
        board.apply_move(pos(0, 4), pos(1, 4));
        assert_eq!(
            validate(&board, (1, 4), (1, 5), Color::White),
            Verdict::Reject(Rejection::OwnPieceCapture)
        );
    }

    #[test]
    fn test_pawn_diagonal_capture() {
        let mut board = Board::new();
        assert_eq!(
            validate(&board, (1, 4), (2, 5), Color::White),
            Verdict::Reject(Rejection::IllegalShape)
        );

        board.place(pos(2, 5), Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(validate(&board, (1, 4), (2, 5), Color::White), Verdict::Accept);
    }

    #[test]
    fn test_rook_capture_along_open_file() {
        let mut board = Board::empty();
        board.place(pos(0, 0), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(validate(&board, (0, 0), (0, 5), Color::White), Verdict::Accept);

        board.place(pos(0, 5), Piece::new(PieceKind::Rook, Color::Black));
        assert_eq!(validate(&board, (0, 0), (0, 5), Color::White), Verdict::Accept);

        board.place(pos(0, 3), Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(
            validate(&board, (0, 0), (0, 5), Color::White),
            Verdict::Reject(Rejection::IllegalShape)
        );
    }

    #[test]
    fn test_validation_is_repeatable_and_leaves_board_untouched() {
        let board = Board::new();
        let before = board.clone();
        for end in Position::all() {
            let first = validate_move(&board, Coord::new(0, 1), end.into(), Color::White);
            let second = validate_move(&board, Coord::new(0, 1), end.into(), Color::White);
            assert_eq!(first, second);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::StartOutOfBounds.to_string(), "start out of bounds");
        assert_eq!(Rejection::NotYourPiece.to_string(), "piece belongs to the other player");
        assert_eq!(Rejection::IllegalShape.to_string(), "illegal shape for this piece kind");
    }
}
