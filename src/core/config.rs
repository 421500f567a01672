//! Game constants and session configuration.
//!
//! The rules of the game are fixed: six players, a six-sided die and a
//! ceiling of 36. Only session-level knobs (the RNG seed) are configurable.

use serde::{Deserialize, Serialize};

/// Number of players a game requires.
pub const PLAYER_COUNT: usize = 6;

/// The target total. Reaching it exactly wins, passing it eliminates.
pub const CEILING: u32 = 36;

/// Number of faces on the die. Rolls are uniform in `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

/// Session-level configuration.
///
/// ## Example
///
/// ```
/// use dice36::core::SessionConfig;
///
/// let config = SessionConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the dice. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration with an unseeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the dice seed so the session is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
