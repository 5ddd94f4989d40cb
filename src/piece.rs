use std::fmt;

/// The two sides. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step: White advances up the rows, Black down.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece value. Moving a piece relocates it on the board; the value itself
/// never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Display symbol: uppercase for White, lowercase for Black.
    ///
    /// Derived from `(kind, color)`; nothing in the engine reads the
    /// color back out of the letter case.
    #[inline]
    pub const fn symbol(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Piece::symbol`], used when loading a textual layout.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        let (kind, color) = match symbol {
            'P' => (PieceKind::Pawn, Color::White),
            'R' => (PieceKind::Rook, Color::White),
            'N' => (PieceKind::Knight, Color::White),
            'B' => (PieceKind::Bishop, Color::White),
            'Q' => (PieceKind::Queen, Color::White),
            'K' => (PieceKind::King, Color::White),
            'p' => (PieceKind::Pawn, Color::Black),
            'r' => (PieceKind::Rook, Color::Black),
            'n' => (PieceKind::Knight, Color::Black),
            'b' => (PieceKind::Bishop, Color::Black),
            'q' => (PieceKind::Queen, Color::Black),
            'k' => (PieceKind::King, Color::Black),
            _ => return None,
        };
        Some(Self { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
