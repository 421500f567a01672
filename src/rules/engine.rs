//! The game engine: roster lock, first-player selection and turn resolution.
//!
//! `GameEngine` owns the roster and the game state for one game. Callers
//! drive it through the lifecycle:
//!
//! 1. `register_players` (registers and locks the roster)
//! 2. `determine_first_player` (or a step-wise `TieBreak` + `set_first_player`)
//! 3. `init_queue`
//! 4. `play_turn` / `resolve_roll` until a terminal outcome, or `play_out`
//!
//! Calling an operation out of order returns an `InvalidStateError`.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::tiebreak::TieBreak;
use crate::core::config::{CEILING, DIE_FACES, PLAYER_COUNT};
use crate::core::error::InvalidStateError;
use crate::core::player::{Player, PlayerId, Roster};
use crate::core::rng::Dice;
use crate::core::state::{GameState, RollKind, TurnQueue, TurnRecord};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player brought the total to the ceiling exactly.
    Winner(PlayerId),
    /// Every player overshot.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What a single roll did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Total committed, roller moved to the back of the queue.
    Safe,
    /// Roller overshot and left the game; others remain.
    Eliminated,
    /// Roller overshot and was the last player in: nobody wins.
    Lost,
    /// Roller hit the ceiling exactly.
    Won,
}

impl RollOutcome {
    /// Whether this roll ended the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RollOutcome::Lost | RollOutcome::Won)
    }
}

/// A resolved main-loop roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The player who rolled.
    pub player: PlayerId,
    /// The die value.
    pub roll: u8,
    /// Committed total before the roll.
    pub total_before: u32,
    /// What the roll did.
    pub outcome: RollOutcome,
}

impl Turn {
    /// Total the roll would produce, whether or not it was committed.
    #[must_use]
    pub fn candidate_total(&self) -> u32 {
        self.total_before + u32::from(self.roll)
    }
}

/// Owns the roster and state of one game.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    roster: Roster,
    state: GameState,
}

impl GameEngine {
    /// Create an engine with an empty roster and fresh state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game state, for setting up positions directly.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Look up a registered player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.queue.current().and_then(|id| self.roster.get(id))
    }

    // === Registration ===

    /// Register one player under the next id. Does not lock.
    ///
    /// Fails with `RosterSize` once six players are registered.
    pub fn add_player(&mut self, raw_name: &str) -> Result<PlayerId, InvalidStateError> {
        if self.state.enabled {
            return Err(InvalidStateError::RegistrationClosed);
        }

        let id = self
            .roster
            .register(raw_name)
            .ok_or_else(|| InvalidStateError::RosterSize {
                found: self.roster.len() + 1,
            })?;
        debug!(player = id.0, name = %self.roster.name(id), "registered player");
        Ok(id)
    }

    /// Register every name in order, then lock the roster.
    ///
    /// Blank names become `"Player N"`; other names get a capital first
    /// letter. Fails if the game is already running, or with `RosterSize`
    /// if the names would not bring the roster to exactly six players. The
    /// roster is left untouched on failure.
    pub fn register_players<I, S>(&mut self, names: I) -> Result<(), InvalidStateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.state.enabled {
            return Err(InvalidStateError::RegistrationClosed);
        }

        let names: Vec<S> = names.into_iter().collect();
        let found = self.roster.len() + names.len();
        if found != PLAYER_COUNT {
            return Err(InvalidStateError::RosterSize { found });
        }

        for name in &names {
            self.add_player(name.as_ref())?;
        }
        self.lock()
    }

    /// Lock the roster and enable play.
    pub fn lock(&mut self) -> Result<(), InvalidStateError> {
        if self.state.enabled {
            return Err(InvalidStateError::AlreadyActive);
        }
        if !self.roster.is_full() {
            return Err(InvalidStateError::RosterSize {
                found: self.roster.len(),
            });
        }

        self.state.enabled = true;
        info!(players = self.roster.len(), "roster locked");
        Ok(())
    }

    // === First player ===

    /// Start a tie-break over the full roster.
    pub fn tie_break(&self) -> Result<TieBreak, InvalidStateError> {
        if !self.state.enabled {
            return Err(InvalidStateError::NotActive);
        }
        Ok(TieBreak::new(self.roster.ids()))
    }

    /// Record the player who opens the game.
    pub fn set_first_player(&mut self, id: PlayerId) -> Result<(), InvalidStateError> {
        if !self.state.enabled {
            return Err(InvalidStateError::NotActive);
        }
        if !self.roster.contains(id) {
            return Err(InvalidStateError::UnknownPlayer(id));
        }

        self.state.first_player = Some(id);
        info!(player = id.0, "first player decided");
        Ok(())
    }

    /// Run the whole tie-break with `dice` and record the winner.
    pub fn determine_first_player(
        &mut self,
        dice: &mut impl Dice,
    ) -> Result<PlayerId, InvalidStateError> {
        let (first, roll) = self.tie_break()?.run(dice);
        debug!(player = first.0, roll, "tie-break won");
        self.set_first_player(first)?;
        Ok(first)
    }

    /// Build the turn queue: roster order, rotated to start at the first player.
    pub fn init_queue(&mut self) -> Result<(), InvalidStateError> {
        let first = self
            .state
            .first_player
            .ok_or(InvalidStateError::FirstPlayerUndecided)?;
        let queue = TurnQueue::starting_at(self.roster.ids(), first)
            .ok_or(InvalidStateError::UnknownPlayer(first))?;

        debug!(order = ?queue.to_vec(), "turn queue built");
        self.state.queue = queue;
        Ok(())
    }

    // === Main loop ===

    /// Apply a roll for the player at the head of the queue.
    ///
    /// - Below the ceiling: total committed, player rotates to the tail.
    /// - Exactly the ceiling: total committed, player wins, play stops.
    /// - Above the ceiling: roll discarded, player removed. If nobody is
    ///   left the game is lost and the total resets to zero.
    ///
    /// # Panics
    ///
    /// Panics if `roll` is not a die face.
    pub fn resolve_roll(&mut self, roll: u8) -> Result<Turn, InvalidStateError> {
        assert!(
            (1..=DIE_FACES).contains(&roll),
            "roll {roll} is not a die face"
        );
        if !self.state.enabled {
            return Err(InvalidStateError::NotActive);
        }
        let player = self
            .state
            .queue
            .current()
            .ok_or(InvalidStateError::NotActive)?;

        let total_before = self.state.total_score;
        let candidate = total_before + u32::from(roll);

        let (kind, outcome) = match candidate.cmp(&CEILING) {
            Ordering::Less => {
                self.state.total_score = candidate;
                self.state.queue.rotate();
                debug!(player = player.0, roll, total = candidate, "safe roll");
                (RollKind::Safe, RollOutcome::Safe)
            }
            Ordering::Equal => {
                self.state.total_score = CEILING;
                self.state.enabled = false;
                self.state.queue.clear();
                self.state.winner = Some(player);
                info!(player = player.0, roll, "ceiling reached, game won");
                (RollKind::Exact, RollOutcome::Won)
            }
            Ordering::Greater => {
                self.state.queue.eliminate_current();
                if self.state.queue.is_empty() {
                    self.state.enabled = false;
                    self.state.total_score = 0;
                    self.state.queue.clear();
                    info!(player = player.0, roll, "last player eliminated, game lost");
                    (RollKind::Overshoot, RollOutcome::Lost)
                } else {
                    info!(
                        player = player.0,
                        roll,
                        remaining = self.state.queue.len(),
                        "player eliminated"
                    );
                    (RollKind::Overshoot, RollOutcome::Eliminated)
                }
            }
        };

        self.state.record_turn(TurnRecord {
            player,
            roll,
            total_before,
            kind,
        });

        Ok(Turn {
            player,
            roll,
            total_before,
            outcome,
        })
    }

    /// Roll for the current player and resolve it.
    pub fn play_turn(&mut self, dice: &mut impl Dice) -> Result<Turn, InvalidStateError> {
        if !self.state.enabled || self.state.queue.is_empty() {
            return Err(InvalidStateError::NotActive);
        }
        let roll = dice.roll();
        self.resolve_roll(roll)
    }

    /// Play turns until the game ends.
    pub fn play_out(&mut self, dice: &mut impl Dice) -> Result<GameResult, InvalidStateError> {
        loop {
            let turn = self.play_turn(dice)?;
            match turn.outcome {
                RollOutcome::Won => return Ok(GameResult::Winner(turn.player)),
                RollOutcome::Lost => return Ok(GameResult::NoWinner),
                RollOutcome::Safe | RollOutcome::Eliminated => {}
            }
        }
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.state.winner {
            return Some(GameResult::Winner(winner));
        }
        let lost = self.state.first_player.is_some()
            && !self.state.enabled
            && self.state.queue.is_empty()
            && !self.state.history.is_empty();
        lost.then_some(GameResult::NoWinner)
    }
}
