//! The fundamental and simple types of `patzer`.

use std::fmt::{self, Display, Write};
use std::mem::transmute; // unsafe
use std::ops::{Add, Mul, Neg, Not};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // A, B, C, D, E, F, G, H
pub const NUM_RANKS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

// The max possible measured number of moves for any chess position.
pub const MAX_MOVES: usize = 218;

// The greatest search depth supported by the engine.
// A requested depth always runs to completion, so anything much deeper
// than this is impractical without pruning help from the oracle's
// move ordering.
pub const MAX_DEPTH: PlyKind = 40;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for max ply/depth.
pub type PlyKind = u8;

// Type alias to make changing Cp inner type easy if needed.
pub type CpKind = i32;

/// Score of a position. A positive value represents an advantage for
/// White, and a negative value represents an advantage for Black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Cp(pub CpKind);

/// Color can represent the color of a piece, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

/// The six piece kinds of chess.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
}

/// Square
/// Every possible square on a chess board.
/// WARNING: The exact ordering of enums is important for their discriminants.
///          Changing the discriminant of any variant is breaking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8 = 63u8,
}

////////////
// Traits //
////////////

/// SquareIndexable
/// A chessboard has 64 squares on it. SquareIndexable can be implemented
/// for types whose values can map directly to a chess Square's index.
pub trait SquareIndexable {
    /// idx(&self) must return a number between 0-63 inclusive, representing
    /// a square on a chess board in little-endian, rank-file order.
    fn idx(&self) -> usize;
}

impl SquareIndexable for Square {
    fn idx(&self) -> usize {
        *self as usize
    }
}

// Blanket impl on references of types that are SquareIndexable.
impl<I: SquareIndexable> SquareIndexable for &I {
    fn idx(&self) -> usize {
        I::idx(*self)
    }
}

/////////////////////
// Implementations //
/////////////////////

impl Cp {
    pub const MIN: Cp = Self(CpKind::MIN + 1); // + 1 to avoid overflow error on negate.
    pub const MAX: Cp = Self(CpKind::MAX);
}

impl Add for Cp {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl Mul for Cp {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl Neg for Cp {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Cp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl Color {
    pub const fn to_char(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Returns the absolute sign of a Color in Cp.
    /// A positive value is good for White and a negative value is good for Black.
    pub const fn sign(&self) -> Cp {
        match self {
            Color::White => Cp(1),
            Color::Black => Cp(-1),
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.to_char()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl PieceKind {
    /// FEN compliant conversion, defaults as white pieces.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl Piece {
    pub const fn new(color: Color, piece_kind: PieceKind) -> Self {
        Piece { color, piece_kind }
    }

    /// Immutable Getters.
    pub const fn color(&self) -> &Color {
        &self.color
    }
    pub const fn piece_kind(&self) -> &PieceKind {
        &self.piece_kind
    }

    pub const fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.to_char(),
            Color::Black => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl Square {
    /// Square enum variants cover all u8 values from 0-63 inclusive.
    /// WARNING: Uses `unsafe`.
    pub fn from_u8(value: u8) -> Option<Self> {
        // If value is in valid range, transmute, otherwise return None.
        (value <= Square::H8 as u8).then(|| unsafe { transmute::<u8, Square>(value) })
    }

    pub const fn iter() -> SquareIterator {
        SquareIterator::new()
    }

    /// Returns 0-based file (0,1,2,3,4,5,6,7), not 1-based chess file.
    pub const fn file_u8(&self) -> u8 {
        *self as u8 % NUM_FILES as u8
    }

    /// Returns 0-based rank (0,1,2,3,4,5,6,7), not 1-based chess rank.
    pub const fn rank_u8(&self) -> u8 {
        *self as u8 / NUM_FILES as u8
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.file_u8()) as char)?;
        f.write_char((b'1' + self.rank_u8()) as char)
    }
}

pub struct SquareIterator {
    square_discriminant: u8,
}

impl SquareIterator {
    const fn new() -> Self {
        Self {
            square_discriminant: Square::A1 as u8,
        }
    }
}

impl Iterator for SquareIterator {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        let maybe_square = Square::from_u8(self.square_discriminant);
        if maybe_square.is_some() {
            self.square_discriminant += 1;
        }
        maybe_square
    }
}
