//! # dice36
//!
//! A console dice game for six players racing a shared total to exactly 36.
//!
//! ## Rules
//!
//! 1. **First player**: everyone rolls; players sharing the top roll re-roll
//!    among themselves until one player holds it alone.
//!
//! 2. **Turns**: starting from the first player and following registration
//!    order, each player rolls and the roll is added to the shared total.
//!
//! 3. **Ceiling**: a roll that would take the total past 36 eliminates the
//!    roller and is not added. Hitting 36 exactly wins. If every player is
//!    eliminated, nobody wins.
//!
//! ## Architecture
//!
//! - **Pure core**: the engine never reads or writes a terminal. Dice come
//!   in through the `Dice` trait, outcomes go out as return values.
//!
//! - **Explicit state**: one `GameState` per game, owned by a `GameEngine`.
//!   A rematch starts from a fresh engine.
//!
//! ## Modules
//!
//! - `core`: players, roster, dice, state, errors, configuration
//! - `rules`: tie-break procedure and turn-resolution engine
//! - `console`: console trait, terminal implementation, narration text
//! - `session`: interactive pipeline and restart loop

pub mod console;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Dice, GameRng, ScriptedDice,
    GameState, TurnQueue, TurnRecord, RollKind,
    InvalidStateError,
    Player, PlayerId, Roster,
    SessionConfig, CEILING, PLAYER_COUNT,
};

pub use crate::rules::{GameEngine, GameResult, RollOutcome, Turn, TieBreak, TieBreakStep};

pub use crate::console::{Console, TerminalConsole};

pub use crate::session::{Session, SessionError};
