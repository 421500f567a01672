//! Player identification and the game roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and follow registration
//! order: the first registered player is `PlayerId(1)`.
//!
//! ## Roster
//!
//! Ordered, inline storage of registered players. Lookup by id is O(1)
//! because player `n` always sits at index `n - 1`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::config::PLAYER_COUNT;

/// Player identifier, 1-based in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Roster slot for this id (0-based). `None` for the invalid id 0.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Iterate over the ids of a full roster: `1..=PLAYER_COUNT`.
    ///
    /// ```
    /// use dice36::core::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(ids.len(), 6);
    /// assert_eq!(ids[0], PlayerId::new(1));
    /// assert_eq!(ids[5], PlayerId::new(6));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (1..=PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A registered player. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player from raw name input at a 1-based registration position.
    ///
    /// The name goes through [`normalize_name`].
    #[must_use]
    pub fn new(id: PlayerId, raw_name: &str) -> Self {
        Self {
            id,
            name: normalize_name(raw_name, id.0 as usize),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Normalize a name as typed at the console.
///
/// The first character is upper-cased and the rest kept as typed. Blank or
/// whitespace-only input becomes `"Player {position}"`.
///
/// ```
/// use dice36::core::normalize_name;
///
/// assert_eq!(normalize_name("laurent", 1), "Laurent");
/// assert_eq!(normalize_name("   ", 3), "Player 3");
/// assert_eq!(normalize_name("mcQueen", 2), "McQueen");
/// assert_eq!(normalize_name("ann ", 4), "Ann ");
/// ```
#[must_use]
pub fn normalize_name(raw: &str, position: usize) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if !raw.trim().is_empty() => first.to_uppercase().chain(chars).collect(),
        _ => format!("Player {position}"),
    }
}

/// Ordered sequence of registered players.
///
/// Ids are assigned sequentially on [`Roster::register`], so the slot of a
/// player always equals `id - 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; PLAYER_COUNT]>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player under the next sequential id, or `None` once the
    /// roster is full.
    pub fn register(&mut self, raw_name: &str) -> Option<PlayerId> {
        if self.is_full() {
            return None;
        }
        let id = PlayerId(u8::try_from(self.players.len() + 1).ok()?);
        self.players.push(Player::new(id, raw_name));
        Some(id)
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether the roster holds exactly the number of players a game needs.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() == PLAYER_COUNT
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        id.slot().and_then(|slot| self.players.get(slot))
    }

    /// Whether `id` belongs to a registered player.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Name of a player, or an empty string for an unknown id.
    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        self.get(id).map_or("", |p| p.name.as_str())
    }

    /// Player ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Players in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        match self.get(id) {
            Some(player) => player,
            None => panic!("{id} is not in the roster"),
        }
    }
}
