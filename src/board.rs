use std::fmt;

use shakmaty::{Bitboard, Square};
use thiserror::Error;

use crate::piece::{Color, Piece, PieceKind};
use crate::position::{BOARD_SIZE, Coord, Position};

/// Piece placement of the standard starting position, rank 8 first.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Error when parsing a textual piece placement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {width} files, expected 8")]
    RankWidth { rank: u8, width: usize },
    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),
}

/// The 8×8 occupancy grid.
///
/// The board is pure mechanism: [`Board::apply_move`] relocates whatever it
/// is told to, and legality is decided beforehand by
/// [`validate_move`](crate::validation::validate_move).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::White));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[7][col] = Some(Piece::new(kind, Color::Black));
        }
        board
    }

    /// Creates a board with no pieces.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Parses a FEN-style piece placement (`"rnbqkbnr/pppppppp/8/..."`).
    ///
    /// Ranks are listed from row 7 down to row 0; digits skip empty cells.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(LayoutError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (i, rank) in ranks.into_iter().enumerate() {
            let row = (BOARD_SIZE as usize - 1 - i) as u8;
            let mut col = 0usize;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_symbol(symbol).ok_or(LayoutError::UnknownSymbol(symbol))?;
                if let Some(position) = Position::new(row, col as u8) {
                    board.place(position, piece);
                }
                col += 1;
            }
            if col != BOARD_SIZE as usize {
                return Err(LayoutError::RankWidth {
                    rank: row + 1,
                    width: col,
                });
            }
        }
        Ok(board)
    }

    /// Writes the placement back in the format read by [`Board::from_layout`].
    pub fn layout(&self) -> String {
        let mut out = String::new();
        for row in (0..BOARD_SIZE as usize).rev() {
            let mut gap = 0;
            for cell in self.cells[row] {
                match cell {
                    Some(piece) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Get the piece at a given position, if any
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.cells[position.row() as usize][position.col() as usize]
    }

    /// Puts `piece` on `position`, returning whatever was there.
    #[inline]
    pub fn place(&mut self, position: Position, piece: Piece) -> Option<Piece> {
        self.cells[position.row() as usize][position.col() as usize].replace(piece)
    }

    /// Clears `position`, returning whatever was there.
    #[inline]
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.cells[position.row() as usize][position.col() as usize].take()
    }

    /// Relocates the occupant of `start` to `end` and clears `start`.
    ///
    /// Whatever stood on `end` is discarded and returned. No legality check
    /// is made here.
    pub fn apply_move(&mut self, start: Position, end: Position) -> Option<Piece> {
        let moving = self.remove(start);
        match moving {
            Some(piece) => self.place(end, piece),
            None => self.remove(end),
        }
    }

    #[inline]
    pub fn is_within_bounds(&self, coord: Coord) -> bool {
        coord.is_within_bounds()
    }

    /// True iff a king of `color` stands anywhere on the board.
    pub fn king_present(&self, color: Color) -> bool {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().any(|(_, piece)| piece == king)
    }

    #[inline]
    pub fn color_of(&self, piece: Piece) -> Color {
        piece.color
    }

    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// All occupied cells, row-major from `a1`.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|position| self.get(position).map(|piece| (position, piece)))
    }

    /// Occupancy mask with bit N set for every occupied square.
    pub fn occupied(&self) -> Bitboard {
        let mut bitboard = Bitboard::EMPTY;
        for (position, _) in self.pieces() {
            bitboard.toggle(Square::from(position));
        }
        bitboard
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("layout", &self.layout())
            .finish()
    }
}
