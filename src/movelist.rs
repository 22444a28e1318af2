//! MoveList types used in the patzer engine.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::coretypes::MAX_MOVES;

/// MoveList is a container that can hold at most `MAX_MOVES`, the most number
/// of moves for any chess position. The move type itself is the rules
/// oracle's opaque move handle.
pub type MoveList<M> = ArrayVec<M, MAX_MOVES>;
