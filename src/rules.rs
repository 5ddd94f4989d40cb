//! Per-kind movement shapes.
//!
//! Each predicate answers "can this kind of piece get from `start` to `end`
//! on this board", ignoring whose turn it is and what stands on `end`
//! (ownership of the destination is checked by the legality engine).

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

/// Whether `piece` may travel from `start` to `end` given the occupancy of
/// `board`.
pub fn shape_permits(piece: Piece, start: Position, end: Position, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_permits(piece, start, end, board),
        PieceKind::Rook => rook_permits(start, end, board),
        PieceKind::Knight => knight_permits(start, end),
        PieceKind::Bishop => bishop_permits(start, end, board),
        PieceKind::Queen => rook_permits(start, end, board) || bishop_permits(start, end, board),
        PieceKind::King => king_permits(start, end),
    }
}

/// Signed `(d_row, d_col)` from `start` to `end`.
#[inline]
fn delta(start: Position, end: Position) -> (i8, i8) {
    (
        end.row() as i8 - start.row() as i8,
        end.col() as i8 - start.col() as i8,
    )
}

/// True if no cell strictly between `start` and `end` is occupied.
///
/// Steps one cell at a time along the unit direction of each axis, so the
/// two positions must share a row, a column or a diagonal.
pub fn path_is_clear(start: Position, end: Position, board: &Board) -> bool {
    let (d_row, d_col) = delta(start, end);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = start.offset(step_row, step_col);
    while let Some(cell) = current {
        if cell == end {
            return true;
        }
        if board.is_occupied(cell) {
            return false;
        }
        current = cell.offset(step_row, step_col);
    }
    // Walked off the board without meeting `end`: not aligned.
    false
}

fn pawn_permits(pawn: Piece, start: Position, end: Position, board: &Board) -> bool {
    let (d_row, d_col) = delta(start, end);
    let forward = pawn.color.forward();

    if d_col == 0 && d_row == forward {
        return !board.is_occupied(end);
    }

    if d_col == 0 && d_row == 2 * forward && start.row() == pawn.color.pawn_rank() {
        let Some(middle) = start.offset(forward, 0) else {
            return false;
        };
        return !board.is_occupied(middle) && !board.is_occupied(end);
    }

    if d_col.abs() == 1 && d_row == forward {
        return board
            .get(end)
            .is_some_and(|target| target.color != pawn.color);
    }

    false
}

fn rook_permits(start: Position, end: Position, board: &Board) -> bool {
    let (d_row, d_col) = delta(start, end);
    (d_row == 0) != (d_col == 0) && path_is_clear(start, end, board)
}

fn knight_permits(start: Position, end: Position) -> bool {
    let (d_row, d_col) = delta(start, end);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

fn bishop_permits(start: Position, end: Position, board: &Board) -> bool {
    let (d_row, d_col) = delta(start, end);
    d_row != 0 && d_row.abs() == d_col.abs() && path_is_clear(start, end, board)
}

fn king_permits(start: Position, end: Position) -> bool {
    let (d_row, d_col) = delta(start, end);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}
