//! Minimax with alpha-beta pruning implementation.
//!
//! The search walks the game tree depth-first through the rules oracle,
//! fully synchronous and single threaded. Moves are searched in the exact
//! order the oracle yields them, so pruning effectiveness depends entirely
//! on the oracle's intrinsic move ordering.

use std::cmp;
use std::time::Instant;

use crate::coretypes::{Cp, PlyKind};
use crate::error::{ErrorKind, Result};
use crate::evaluation::evaluate;
use crate::oracle::{AppliedMove, RulesOracle};
use crate::search::SearchResult;

/// Base alpha_beta call. Searches `ply` plies deep and returns the best
/// move found for the side to move, along with its score.
///
/// The root mover is always scored as the maximizing side, regardless of
/// which color the oracle reports to move. Combined with the negated leaf
/// evaluation (see `alpha_beta_impl`), positive scores favor Black, so
/// this engine is wired to pick moves for the Black player. Callers that
/// want it to play the other side must mirror the position themselves.
///
/// The position is mutated transiently during search and restored exactly
/// before this function returns, on success and on failure alike.
///
/// # Errors
///
/// * `SearchDepthZero` if `ply` is 0. The depth is never silently clamped.
/// * `OracleIllegalMove` if the oracle rejects a move it generated.
pub fn alpha_beta<O: RulesOracle>(
    position: &mut O,
    ply: PlyKind,
) -> Result<SearchResult<O::Move>> {
    if ply == 0 {
        return Err((ErrorKind::SearchDepthZero, "alpha_beta requires ply >= 1").into());
    }

    let instant = Instant::now();
    let mut nodes = 0;
    let (score, best_move) = alpha_beta_root(position, ply, &mut nodes)?;

    Ok(SearchResult {
        best_move,
        score,
        depth: ply,
        nodes,
        elapsed: instant.elapsed(),
    })
}

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.

/// alpha_beta_root is almost the same as alpha_beta_impl, except it links a
/// score to its move. Every root move is searched with fresh infinite
/// bounds, so sibling root moves never prune each other.
///
/// Returns `(score, None)` if the root has no legal moves. That outcome is
/// not an error: the caller is expected to have already determined
/// checkmate or stalemate through the oracle.
///
/// Ties are broken by enumeration order: the first root move with the
/// greatest score is kept.
fn alpha_beta_root<O: RulesOracle>(
    position: &mut O,
    ply: PlyKind,
    nodes: &mut u64,
) -> Result<(Cp, Option<O::Move>)> {
    debug_assert_ne!(ply, 0);
    *nodes += 1;

    let legal_moves = position.legal_moves();

    let mut best_cp = Cp::MIN;
    let mut best_move = None;

    for legal_move in legal_moves {
        let mut applied = AppliedMove::new(position, legal_move)?;
        let move_cp = alpha_beta_impl::<O, false>(&mut applied, ply - 1, nodes, Cp::MIN, Cp::MAX)?;
        drop(applied);

        if best_move.is_none() || move_cp > best_cp {
            best_cp = move_cp;
            best_move = Some(legal_move);
        }
    }

    Ok((best_cp, best_move))
}

/// Recursive minimax over the oracle's game tree, fail-soft: a cutoff
/// returns the actual extremum found so far, not a bound placeholder.
///
/// Leaves score as the negated static evaluation regardless of which side
/// is maximizing at the node, so positive leaf scores favor Black. See
/// `alpha_beta` for the engine orientation this implies.
fn alpha_beta_impl<O: RulesOracle, const MAXIMIZING: bool>(
    position: &mut O,
    ply: PlyKind,
    nodes: &mut u64,
    alpha: Cp,
    beta: Cp,
) -> Result<Cp> {
    *nodes += 1;

    // Stop at leaf node: last depth, or checkmate/draw.
    if ply == 0 || position.is_terminal() {
        return Ok(-evaluate(&position.board()));
    }

    let legal_moves = position.legal_moves();
    // A non-terminal position with no legal moves breaks the oracle contract.
    debug_assert!(!legal_moves.is_empty());

    if MAXIMIZING {
        let mut best_cp = Cp::MIN;
        let mut alpha = alpha;

        for legal_move in legal_moves {
            let mut applied = AppliedMove::new(position, legal_move)?;
            let move_cp =
                alpha_beta_impl::<O, false>(&mut applied, ply - 1, nodes, alpha, beta)?;
            drop(applied);

            best_cp = cmp::max(best_cp, move_cp);
            alpha = cmp::max(alpha, move_cp);
            if alpha >= beta {
                // Beta cutoff
                return Ok(best_cp);
            }
        }
        Ok(best_cp)
    } else {
        let mut best_cp = Cp::MAX;
        let mut beta = beta;

        for legal_move in legal_moves {
            let mut applied = AppliedMove::new(position, legal_move)?;
            let move_cp =
                alpha_beta_impl::<O, true>(&mut applied, ply - 1, nodes, alpha, beta)?;
            drop(applied);

            best_cp = cmp::min(best_cp, move_cp);
            beta = cmp::min(beta, move_cp);
            if alpha >= beta {
                // Alpha cutoff
                return Ok(best_cp);
            }
        }
        Ok(best_cp)
    }
}
