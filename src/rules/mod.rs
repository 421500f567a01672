//! Game rules: first-player tie-break and the turn-resolution engine.
//!
//! - `TieBreak`: repeated roll-offs until one player holds the top roll
//! - `GameEngine`: roster lock, turn queue, ceiling arithmetic
//!
//! Neither talks to a terminal. Dice come in through the `Dice` trait and
//! results go out as return values.

pub mod engine;
pub mod tiebreak;

pub use engine::{GameEngine, GameResult, RollOutcome, Turn};
pub use tiebreak::{Candidates, TieBreak, TieBreakStep};
