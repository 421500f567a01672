//! Core game types: players, roster, dice, state, errors, configuration.
//!
//! This module holds plain data and the die abstraction. The rules that
//! move a game forward live in `rules`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{SessionConfig, CEILING, DIE_FACES, PLAYER_COUNT};
pub use error::InvalidStateError;
pub use player::{normalize_name, Player, PlayerId, Roster};
pub use rng::{Dice, GameRng, ScriptedDice};
pub use state::{GameState, RollKind, TurnQueue, TurnRecord};
