use std::fmt;

use shakmaty::{File, Rank, Square};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// An unchecked `(row, col)` pair, as produced by move input.
///
/// Nothing guarantees a `Coord` lies on the board; convert it to a
/// [`Position`] (or let the legality engine reject it) before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Row and column both in `[0, 8)`.
    #[inline]
    pub const fn is_within_bounds(self) -> bool {
        0 <= self.row && self.row < BOARD_SIZE && 0 <= self.col && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<Position> for Coord {
    #[inline]
    fn from(position: Position) -> Self {
        Self::new(position.row as i8, position.col as i8)
    }
}

/// A bounds-checked board cell.
///
/// Row 0 is White's back rank, column 0 is the a-file. A `Position` can only
/// be built through [`Position::new`] or from a [`Coord`] that is on the
/// board, so board accessors taking one never index out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position if both `row` and `col` are below 8.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// All 64 positions, row-major starting at `a1`.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }

    /// Position reached by stepping `(d_row, d_col)`, if still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let coord = Coord::new(self.row as i8 + d_row, self.col as i8 + d_col);
        Self::try_from(coord).ok()
    }
}

/// Error returned when a [`Coord`] falls outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate {0} is off the board")]
pub struct OutOfBounds(pub Coord);

impl TryFrom<Coord> for Position {
    type Error = OutOfBounds;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        if coord.is_within_bounds() {
            Ok(Self {
                row: coord.row as u8,
                col: coord.col as u8,
            })
        } else {
            Err(OutOfBounds(coord))
        }
    }
}

impl From<Square> for Position {
    #[inline]
    fn from(square: Square) -> Self {
        Self {
            row: square.rank() as u8,
            col: square.file() as u8,
        }
    }
}

impl From<Position> for Square {
    #[inline]
    fn from(position: Position) -> Self {
        Square::from_coords(
            File::ALL[usize::from(position.col)],
            Rank::ALL[usize::from(position.row)],
        )
    }
}

/// Algebraic notation, e.g. `e2` for row 1, column 4.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Square::from(*self))
    }
}
