//! A minimal move-selection engine.
//!
//! Patzer picks moves with a fixed-depth minimax search with alpha-beta
//! pruning over a material-only evaluation. It knows nothing about the
//! rules of the game it is playing: legal move generation, move
//! application and undo, and terminal detection are supplied by the
//! caller's position type through the [`RulesOracle`] trait.

pub mod coretypes;
pub mod error;
pub mod evaluation;
pub mod mailbox;
pub mod movelist;
pub mod oracle;
pub mod search;

pub use mailbox::Mailbox;
pub use oracle::RulesOracle;
