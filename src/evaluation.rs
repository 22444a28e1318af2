//! Static evaluation of a board snapshot.
//!
//! Evaluation is material only: the sum over every occupied square of a
//! signed piece value, positive for White and negative for Black. There
//! are no positional, mobility, or pawn-structure terms.

use crate::coretypes::{Cp, Piece, PieceKind, Square};
use crate::mailbox::Mailbox;

impl PieceKind {
    /// Color independent material value per piece.
    ///
    /// The king carries a large finite value. It never reflects an actual
    /// king capture, since the game ends at checkmate first, but it does
    /// shape scores at search leaves reached without a terminal check.
    pub(crate) const fn value(&self) -> Cp {
        use PieceKind::*;
        Cp(match self {
            Pawn => 10,
            Knight => 30,
            Bishop => 30,
            Rook => 50,
            Queen => 90,
            King => 900,
        })
    }
}

/// Material balance of the board.
/// A positive value is an advantage for White, 0 is even, negative is an
/// advantage for Black. Pure and deterministic for a given board.
pub fn evaluate(board: &Mailbox) -> Cp {
    Square::iter()
        .map(|square| piece_value(board[square], square))
        .fold(Cp::default(), |acc, value| acc + value)
}

/// Signed value of a single square.
/// The square is accepted but does not contribute; material value is
/// independent of placement in this version.
fn piece_value(piece: Option<Piece>, _square: Square) -> Cp {
    match piece {
        Some(piece) => piece.piece_kind().value() * piece.color().sign(),
        None => Cp(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Color::{self, *};
    use PieceKind::*;

    /// Same arrangement with every piece's color swapped.
    fn color_mirrored(board: &Mailbox) -> Mailbox {
        let mut mirrored = Mailbox::new();
        for square in Square::iter() {
            mirrored[square] =
                board[square].map(|piece| Piece::new(!*piece.color(), *piece.piece_kind()));
        }
        mirrored
    }

    fn board_of(pieces: &[(Square, Color, PieceKind)]) -> Mailbox {
        let mut mb = Mailbox::new();
        for &(square, color, piece_kind) in pieces {
            mb[square] = Some(Piece::new(color, piece_kind));
        }
        mb
    }

    #[test]
    fn empty_board_is_even() {
        assert_eq!(evaluate(&Mailbox::new()), Cp(0));
    }

    #[test]
    fn start_position_is_even() {
        assert_eq!(evaluate(&Mailbox::start_position()), Cp(0));
    }

    #[test]
    fn material_table_values() {
        use Square::*;
        for (piece_kind, value) in [
            (Pawn, 10),
            (Knight, 30),
            (Bishop, 30),
            (Rook, 50),
            (Queen, 90),
            (King, 900),
        ] {
            let white = board_of(&[(D4, White, piece_kind)]);
            assert_eq!(evaluate(&white), Cp(value));

            let black = board_of(&[(D4, Black, piece_kind)]);
            assert_eq!(evaluate(&black), Cp(-value));
        }
    }

    #[test]
    fn sums_signed_values_over_all_squares() {
        use Square::*;
        // White: K + R + 2P = 970. Black: K + Q = 990.
        let board = board_of(&[
            (E1, White, King),
            (A1, White, Rook),
            (A2, White, Pawn),
            (B2, White, Pawn),
            (E8, Black, King),
            (D8, Black, Queen),
        ]);
        assert_eq!(evaluate(&board), Cp(970 - 990));
    }

    #[test]
    fn antisymmetric_under_color_mirror() {
        use Square::*;
        let boards = [
            Mailbox::start_position(),
            board_of(&[(E1, White, King), (E8, Black, King), (D1, White, Queen)]),
            board_of(&[(A1, Black, Rook), (H8, White, Pawn), (C3, Black, Knight)]),
        ];

        for board in &boards {
            assert_eq!(evaluate(board), -evaluate(&color_mirrored(board)));
        }
    }

    #[test]
    fn value_does_not_depend_on_square() {
        use Square::*;
        let corner = board_of(&[(A1, White, Knight)]);
        let center = board_of(&[(E4, White, Knight)]);
        assert_eq!(evaluate(&corner), evaluate(&center));
    }
}
