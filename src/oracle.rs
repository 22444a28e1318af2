//! Rules oracle interface.
//!
//! The engine does not know the rules of the game it plays. Legal move
//! generation, move application and undo, and terminal state detection all
//! belong to the caller's position type, reached through [`RulesOracle`].
//! The engine only ever applies moves it obtained from the oracle's own
//! `legal_moves`, and it matches every apply with exactly one undo.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::coretypes::Color;
use crate::error::{ErrorKind, Result};
use crate::mailbox::Mailbox;
use crate::movelist::MoveList;

/// A game position coupled with the rules that drive it.
///
/// Implementors own the full mutable game state, including whatever move
/// history is needed to undo. The engine borrows a position for the
/// duration of one search call and restores it exactly before returning.
pub trait RulesOracle {
    /// Opaque move handle. Carries any special-move metadata, such as a
    /// pawn promotion choice, inside the handle itself.
    type Move: Copy + Eq + Debug;

    /// All legal moves for the side to move, in the oracle's own order.
    /// The engine does not reorder them, so pruning effectiveness depends
    /// entirely on this order. An oracle must return an empty list only
    /// when [`is_terminal`](Self::is_terminal) reports true.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Applies a move in place. Returns false, leaving the position
    /// untouched, if the move is not legal.
    #[must_use]
    fn apply_move(&mut self, mov: Self::Move) -> bool;

    /// Reverts the most recently applied move. Calling this without a
    /// matching prior apply is outside the oracle contract.
    fn undo_move(&mut self);

    /// True iff the position is checkmate or a draw.
    fn is_terminal(&self) -> bool;

    /// The player whose turn it is.
    fn side_to_move(&self) -> Color;

    /// Snapshot of the current piece placement, consumed by evaluation.
    fn board(&self) -> Mailbox;
}

/// Scoped application of a single move.
///
/// The matching undo runs when the guard drops, so the position is
/// restored on normal return, on a pruning break out of a move loop, and
/// on error propagation alike. While the guard is alive it derefs to the
/// position, which now has the move applied.
pub struct AppliedMove<'a, O: RulesOracle> {
    position: &'a mut O,
}

impl<'a, O: RulesOracle> AppliedMove<'a, O> {
    /// Applies `mov` to `position`. Fails with `OracleIllegalMove` if the
    /// oracle rejects the move: the engine only applies moves the oracle
    /// generated, so a rejection means the oracle broke its own contract
    /// and the search cannot continue safely.
    pub fn new(position: &'a mut O, mov: O::Move) -> Result<Self> {
        if position.apply_move(mov) {
            Ok(AppliedMove { position })
        } else {
            Err((ErrorKind::OracleIllegalMove, format!("{mov:?}")).into())
        }
    }
}

impl<O: RulesOracle> Deref for AppliedMove<'_, O> {
    type Target = O;
    fn deref(&self) -> &Self::Target {
        self.position
    }
}

impl<O: RulesOracle> DerefMut for AppliedMove<'_, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.position
    }
}

impl<O: RulesOracle> Drop for AppliedMove<'_, O> {
    fn drop(&mut self) {
        self.position.undo_move();
    }
}
