//! First-player selection by repeated roll-offs.
//!
//! Every candidate rolls once per round. Candidates sharing the round's
//! highest roll go through to the next round; everyone else drops out and
//! their rolls are discarded. The procedure ends when a single candidate
//! holds the highest roll.
//!
//! There is no round limit. With a fair die the procedure ends almost
//! surely, but no fixed number of rounds is guaranteed.
//!
//! ## Example
//!
//! ```
//! use dice36::core::PlayerId;
//! use dice36::rules::{TieBreak, TieBreakStep};
//!
//! let mut tie_break = TieBreak::new([PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
//!
//! // Players 1 and 3 both roll a six
//! let step = tie_break.submit_round(&[6, 2, 6]);
//! assert!(matches!(step, TieBreakStep::Tied { roll: 6, .. }));
//! assert_eq!(tie_break.candidates(), &[PlayerId::new(1), PlayerId::new(3)]);
//!
//! // Player 3 wins the re-roll
//! let step = tie_break.submit_round(&[1, 4]);
//! assert_eq!(step, TieBreakStep::Decided { player: PlayerId::new(3), roll: 4 });
//! ```

use smallvec::SmallVec;

use crate::core::config::PLAYER_COUNT;
use crate::core::player::PlayerId;
use crate::core::rng::Dice;

/// Candidate ids, inline for a full roster.
pub type Candidates = SmallVec<[PlayerId; PLAYER_COUNT]>;

/// Result of one tie-break round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TieBreakStep {
    /// Several candidates shared the highest roll and must roll again.
    Tied {
        /// The tied candidates, in roster order.
        candidates: Candidates,
        /// The shared roll.
        roll: u8,
    },
    /// A single candidate holds the highest roll.
    Decided {
        /// The first player.
        player: PlayerId,
        /// The winning roll.
        roll: u8,
    },
}

/// Shrinking candidate set for first-player selection.
#[derive(Clone, Debug)]
pub struct TieBreak {
    candidates: Candidates,
    rounds: u32,
    decided: Option<PlayerId>,
}

impl TieBreak {
    /// Start a tie-break among `candidates`, kept in the given order.
    ///
    /// # Panics
    ///
    /// If `candidates` is empty.
    pub fn new(candidates: impl IntoIterator<Item = PlayerId>) -> Self {
        let candidates: Candidates = candidates.into_iter().collect();
        assert!(!candidates.is_empty(), "Tie-break needs at least one candidate");

        Self {
            candidates,
            rounds: 0,
            decided: None,
        }
    }

    /// Players who roll in the next round.
    #[must_use]
    pub fn candidates(&self) -> &[PlayerId] {
        &self.candidates
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The selected player once the procedure has ended.
    #[must_use]
    pub fn decided(&self) -> Option<PlayerId> {
        self.decided
    }

    /// Apply one round of rolls, one per current candidate in order.
    ///
    /// # Panics
    ///
    /// If the number of rolls differs from the number of candidates, or
    /// if the tie-break has already been decided.
    pub fn submit_round(&mut self, rolls: &[u8]) -> TieBreakStep {
        assert!(self.decided.is_none(), "Tie-break already decided");
        assert_eq!(
            rolls.len(),
            self.candidates.len(),
            "One roll per candidate required"
        );

        self.rounds += 1;
        let max_roll = rolls.iter().copied().max().unwrap_or_default();

        let leaders: Candidates = self
            .candidates
            .iter()
            .zip(rolls)
            .filter(|&(_, &roll)| roll == max_roll)
            .map(|(&id, _)| id)
            .collect();
        self.candidates = leaders;

        match self.candidates.as_slice() {
            [only] => {
                self.decided = Some(*only);
                TieBreakStep::Decided {
                    player: *only,
                    roll: max_roll,
                }
            }
            _ => TieBreakStep::Tied {
                candidates: self.candidates.clone(),
                roll: max_roll,
            },
        }
    }

    /// Roll one round with `dice`, one roll per candidate in order.
    pub fn roll_round(&mut self, dice: &mut impl Dice) -> TieBreakStep {
        let rolls: SmallVec<[u8; PLAYER_COUNT]> =
            self.candidates.iter().map(|_| dice.roll()).collect();
        self.submit_round(&rolls)
    }

    /// Roll rounds until a single candidate remains.
    pub fn run(mut self, dice: &mut impl Dice) -> (PlayerId, u8) {
        loop {
            if let TieBreakStep::Decided { player, roll } = self.roll_round(dice) {
                return (player, roll);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedDice};

    fn ids(raw: &[u8]) -> Vec<PlayerId> {
        raw.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_unique_max_decides_immediately() {
        let mut tie_break = TieBreak::new(PlayerId::all());
        let step = tie_break.submit_round(&[2, 5, 1, 3, 4, 2]);

        assert_eq!(
            step,
            TieBreakStep::Decided {
                player: PlayerId::new(2),
                roll: 5
            }
        );
        assert_eq!(tie_break.rounds(), 1);
        assert_eq!(tie_break.decided(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_only_tied_players_reroll() {
        let mut tie_break = TieBreak::new(PlayerId::all());

        let step = tie_break.submit_round(&[6, 1, 6, 3, 6, 2]);
        match step {
            TieBreakStep::Tied { candidates, roll } => {
                assert_eq!(candidates.as_slice(), ids(&[1, 3, 5]).as_slice());
                assert_eq!(roll, 6);
            }
            other => panic!("Expected a tie, got {:?}", other),
        }
        assert_eq!(tie_break.candidates(), ids(&[1, 3, 5]).as_slice());

        // Second round: 3 and 5 tie on a lower value than round one
        let step = tie_break.submit_round(&[2, 4, 4]);
        assert!(matches!(step, TieBreakStep::Tied { roll: 4, .. }));
        assert_eq!(tie_break.candidates(), ids(&[3, 5]).as_slice());

        let step = tie_break.submit_round(&[1, 3]);
        assert_eq!(
            step,
            TieBreakStep::Decided {
                player: PlayerId::new(5),
                roll: 3
            }
        );
        assert_eq!(tie_break.rounds(), 3);
    }

    #[test]
    fn test_full_tie_keeps_everyone() {
        let mut tie_break = TieBreak::new(PlayerId::all());
        let step = tie_break.submit_round(&[4; 6]);

        assert!(matches!(step, TieBreakStep::Tied { roll: 4, .. }));
        assert_eq!(tie_break.candidates().len(), 6);
        assert_eq!(tie_break.decided(), None);
    }

    #[test]
    fn test_single_candidate_decides_on_first_roll() {
        let tie_break = TieBreak::new([PlayerId::new(4)]);
        let mut dice = ScriptedDice::new(&[1]);

        assert_eq!(tie_break.run(&mut dice), (PlayerId::new(4), 1));
    }

    #[test]
    fn test_run_with_scripted_dice() {
        // Round 1: players 2 and 6 tie on 6. Round 2: both 3. Round 3: 6 wins.
        let mut dice = ScriptedDice::new(&[1, 6, 2, 5, 4, 6, 3, 3, 2, 5]);
        let tie_break = TieBreak::new(PlayerId::all());

        assert_eq!(tie_break.run(&mut dice), (PlayerId::new(6), 5));
        assert_eq!(dice.rolls_served(), 10);
    }

    #[test]
    fn test_run_terminates_with_rng() {
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let (player, roll) = TieBreak::new(PlayerId::all()).run(&mut rng);

            assert!((1..=6).contains(&player.0));
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    #[should_panic(expected = "One roll per candidate required")]
    fn test_wrong_roll_count() {
        let mut tie_break = TieBreak::new(PlayerId::all());
        tie_break.submit_round(&[1, 2]);
    }

    #[test]
    #[should_panic(expected = "Tie-break already decided")]
    fn test_submit_after_decided() {
        let mut tie_break = TieBreak::new(ids(&[1, 2]));
        tie_break.submit_round(&[6, 1]);
        tie_break.submit_round(&[6]);
    }
}
