//! Game state: running total, turn order and history.
//!
//! ## TurnQueue
//!
//! The live play order of players still in the game. The head is the player
//! about to roll. A safe roll rotates the head to the tail; an overshoot
//! removes the head.
//!
//! ## GameState
//!
//! Everything that changes during one game:
//! - Whether play is enabled
//! - The committed total (never above the ceiling)
//! - First player and winner
//! - Turn queue
//! - History of main-loop rolls

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::player::PlayerId;

/// Rotating play order of players still in the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnQueue {
    order: VecDeque<PlayerId>,
}

impl TurnQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the play order from `ids`, rotated so it starts at `first`.
    ///
    /// Relative order is preserved and wraps around. Returns `None` if
    /// `first` is not among `ids`.
    ///
    /// ```
    /// use dice36::core::{PlayerId, TurnQueue};
    ///
    /// let queue = TurnQueue::starting_at(PlayerId::all(), PlayerId::new(4)).unwrap();
    /// let order: Vec<u8> = queue.iter().map(|p| p.0).collect();
    /// assert_eq!(order, vec![4, 5, 6, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn starting_at(ids: impl IntoIterator<Item = PlayerId>, first: PlayerId) -> Option<Self> {
        let mut order: VecDeque<PlayerId> = ids.into_iter().collect();
        let start = order.iter().position(|&id| id == first)?;
        order.rotate_left(start);
        Some(Self { order })
    }

    /// The player about to roll.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.order.front().copied()
    }

    /// Move the head to the tail.
    pub fn rotate(&mut self) {
        if let Some(head) = self.order.pop_front() {
            self.order.push_back(head);
        }
    }

    /// Remove the head. Returns the removed player.
    pub fn eliminate_current(&mut self) -> Option<PlayerId> {
        self.order.pop_front()
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Number of players still in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether every player is out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `id` is still in play.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.order.contains(&id)
    }

    /// Iterate in play order, head first.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot of the play order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<PlayerId> {
        self.order.iter().copied().collect()
    }
}

impl FromIterator<PlayerId> for TurnQueue {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        Self {
            order: iter.into_iter().collect(),
        }
    }
}

/// How a main-loop roll compared with the ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollKind {
    /// Total stayed below the ceiling and was committed.
    Safe,
    /// Total would have passed the ceiling; roll discarded, player out.
    Overshoot,
    /// Total hit the ceiling exactly.
    Exact,
}

/// One main-loop roll, as recorded in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// The die value.
    pub roll: u8,

    /// Committed total before the roll.
    pub total_before: u32,

    /// Outcome against the ceiling.
    pub kind: RollKind,
}

/// State of one game.
///
/// Uses an `im` vector for history so cloning a state mid-game stays O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// True once the roster is locked and play may proceed.
    pub enabled: bool,

    /// Committed running total, `0..=CEILING`.
    pub total_score: u32,

    /// Player chosen by the tie-break to open the game.
    pub first_player: Option<PlayerId>,

    /// Player who hit the ceiling exactly.
    pub winner: Option<PlayerId>,

    /// Players still in play, head rolls next.
    pub queue: TurnQueue,

    /// Every main-loop roll in order.
    pub history: Vector<TurnRecord>,
}

impl GameState {
    /// Create a fresh state: disabled, zero total, nobody chosen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll in history.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    /// Number of main-loop rolls so far.
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }
}
