//! Dice: the game's only source of randomness.
//!
//! ## Key Features
//!
//! - **Pluggable**: the engine rolls through the [`Dice`] trait
//! - **Deterministic**: [`GameRng`] with the same seed rolls the same sequence
//! - **Scriptable**: [`ScriptedDice`] replays fixed rolls for tests
//!
//! ```
//! use dice36::core::{Dice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let rolls: Vec<_> = (0..10).map(|_| a.roll()).collect();
//! assert!(rolls.iter().all(|r| (1..=6).contains(r)));
//! assert_eq!(rolls, (0..10).map(|_| b.roll()).collect::<Vec<_>>());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::DIE_FACES;

/// A six-sided die.
///
/// Implementations must return values uniformly distributed in
/// `1..=DIE_FACES` with independent draws.
pub trait Dice {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

/// Seeded die backed by ChaCha8.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from
/// the seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed stays readable through [`GameRng::seed`] so the game can be
    /// replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Die that replays a fixed sequence of rolls, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create a die that returns `rolls` in order.
    ///
    /// # Panics
    ///
    /// If `rolls` is empty or holds a value outside `1..=6`.
    #[must_use]
    pub fn new(rolls: &[u8]) -> Self {
        assert!(!rolls.is_empty(), "Scripted dice need at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=DIE_FACES).contains(r)),
            "Scripted rolls must be in 1..=6"
        );
        Self {
            rolls: rolls.to_vec(),
            next: 0,
        }
    }

    /// Number of rolls served so far.
    #[must_use]
    pub fn rolls_served(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_cover_every_face() {
        let mut rng = GameRng::new(7);
        let mut seen = [0u32; 6];

        for _ in 0..6_000 {
            let roll = rng.roll();
            assert!((1..=6).contains(&roll));
            seen[roll as usize - 1] += 1;
        }

        // Uniform: each face near 1000 draws
        for count in seen {
            assert!((800..1200).contains(&count), "face count {count} out of range");
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(1234).seed(), 1234);

        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.roll(), replay.roll());
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new(&[3, 6]);
        assert_eq!(dice.roll(), 3);
        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.roll(), 3);
        assert_eq!(dice.rolls_served(), 3);
    }

    #[test]
    fn test_dice_through_mut_ref() {
        fn roll_twice(mut dice: impl Dice) -> (u8, u8) {
            (dice.roll(), dice.roll())
        }

        let mut dice = ScriptedDice::new(&[1, 2, 3]);
        assert_eq!(roll_twice(&mut dice), (1, 2));
        assert_eq!(dice.roll(), 3);
    }

    #[test]
    #[should_panic(expected = "Scripted rolls must be in 1..=6")]
    fn test_scripted_dice_rejects_out_of_range() {
        let _ = ScriptedDice::new(&[0]);
    }
}
