//! Search functions.

mod alpha_beta;

pub use alpha_beta::*;

use std::time::Duration;

use crate::coretypes::{Cp, PlyKind};

/// The results found from running a search on some root position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult<M> {
    /// The best root move discovered from search, or None if the side to
    /// move had no legal moves (checkmate or stalemate at the root).
    pub best_move: Option<M>,
    /// The score of making the best move. Only meaningful when a best
    /// move was found.
    pub score: Cp,
    /// Depth in plies that was searched. A requested depth always runs
    /// to completion.
    pub depth: PlyKind,
    /// Total number of nodes visited in the search, root included.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of the search.
    pub elapsed: Duration,
}

impl<M> SearchResult<M> {
    /// Returns true if the root had at least one legal move.
    pub fn has_move(&self) -> bool {
        self.best_move.is_some()
    }
}
