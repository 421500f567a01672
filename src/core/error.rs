//! Sequencing errors raised by the game engine.
//!
//! These are programming errors (calling an operation at the wrong point in
//! the game's lifecycle), not runtime conditions. They propagate to the caller.

use thiserror::Error;

use super::player::PlayerId;

/// An operation was attempted in a state that does not allow it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    /// Registration attempted after the roster was locked.
    #[error("cannot register players after game start")]
    RegistrationClosed,

    /// Lock attempted with the wrong number of players.
    #[error("roster must contain exactly 6 players")]
    RosterSize {
        /// How many players the roster actually held.
        found: usize,
    },

    /// Lock attempted on a game that is already running.
    #[error("game already active")]
    AlreadyActive,

    /// Play attempted on a game that is not running.
    #[error("game is not active")]
    NotActive,

    /// Turn queue requested before the tie-break chose a first player.
    #[error("first player has not been decided")]
    FirstPlayerUndecided,

    /// An id that does not belong to any registered player.
    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),
}
