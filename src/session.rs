//! Interactive session: the full game pipeline plus the restart loop.
//!
//! Each game runs on a fresh [`GameEngine`]:
//!
//! 1. Six names are read from the console and the roster is locked
//! 2. Tie-break rounds pick the first player, one confirmed roll at a time
//! 3. The turn queue is built and turns are played to a win or a loss
//! 4. The console is asked whether to play again
//!
//! State never carries over from one game to the next.

use std::io;

use thiserror::Error;
use tracing::{debug, info};

use crate::console::{narration, Console};
use crate::core::config::{SessionConfig, PLAYER_COUNT};
use crate::core::error::InvalidStateError;
use crate::core::player::PlayerId;
use crate::core::rng::{Dice, GameRng};
use crate::rules::{GameEngine, GameResult, RollOutcome, TieBreakStep};

/// Failure that ends a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The engine was driven out of order.
    #[error(transparent)]
    State(#[from] InvalidStateError),

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Drives games over a console with a die.
pub struct Session<C, D> {
    console: C,
    dice: D,
    games_played: u32,
}

impl<C: Console> Session<C, GameRng> {
    /// Session with dice seeded from `config`, or from entropy when unseeded.
    pub fn from_config(console: C, config: &SessionConfig) -> Self {
        let dice = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = dice.seed(), "dice seeded");
        Self::new(console, dice)
    }
}

impl<C: Console, D: Dice> Session<C, D> {
    /// Create a session.
    pub fn new(console: C, dice: D) -> Self {
        Self {
            console,
            dice,
            games_played: 0,
        }
    }

    /// Number of games finished so far.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Play games until the players decline a rematch.
    ///
    /// Returns the result of every game in order.
    pub fn run(&mut self) -> Result<Vec<GameResult>, SessionError> {
        let mut results = Vec::new();
        loop {
            results.push(self.play_game()?);
            if !self.wants_another_game()? {
                self.console.notify(narration::goodbye())?;
                return Ok(results);
            }
        }
    }

    /// Play one complete game on a fresh engine.
    pub fn play_game(&mut self) -> Result<GameResult, SessionError> {
        info!(game = self.games_played + 1, "starting game");
        let mut engine = GameEngine::new();

        self.collect_players(&mut engine)?;
        self.choose_first_player(&mut engine)?;
        engine.init_queue()?;
        let result = self.play_turns(&mut engine)?;

        self.games_played += 1;
        info!(?result, turns = engine.state().turns_played(), "game finished");
        Ok(result)
    }

    fn collect_players(&mut self, engine: &mut GameEngine) -> Result<(), SessionError> {
        self.console.notify(&narration::intro())?;

        let mut names = Vec::with_capacity(PLAYER_COUNT);
        for position in 1..=PLAYER_COUNT {
            names.push(self.console.prompt_text(&narration::name_prompt(position))?);
        }
        engine.register_players(&names)?;

        self.console.notify(narration::names_collected())?;
        Ok(())
    }

    /// Wait for the player to confirm, then roll for them.
    fn roll_for(&mut self, name: &str) -> Result<u8, SessionError> {
        self.console.prompt_text(&narration::roll_prompt(name))?;
        let roll = self.dice.roll();
        self.console.notify(&narration::rolled(name, roll))?;
        Ok(roll)
    }

    fn choose_first_player(&mut self, engine: &mut GameEngine) -> Result<PlayerId, SessionError> {
        for line in narration::tie_break_rules() {
            self.console.notify(line)?;
        }

        let mut tie_break = engine.tie_break()?;
        loop {
            let candidates = tie_break.candidates().to_vec();
            let mut rolls = Vec::with_capacity(candidates.len());
            for id in candidates {
                rolls.push(self.roll_for(engine.roster().name(id))?);
            }

            match tie_break.submit_round(&rolls) {
                TieBreakStep::Tied { candidates, roll } => {
                    debug!(
                        round = tie_break.rounds(),
                        roll,
                        tied = candidates.len(),
                        "tie-break round tied"
                    );
                    let names: Vec<&str> =
                        candidates.iter().map(|&id| engine.roster().name(id)).collect();
                    for line in narration::tie(&names, roll) {
                        self.console.notify(&line)?;
                    }
                }
                TieBreakStep::Decided { player, roll } => {
                    for line in narration::first_player(engine.roster().name(player), roll) {
                        self.console.notify(&line)?;
                    }
                    engine.set_first_player(player)?;
                    return Ok(player);
                }
            }
        }
    }

    fn play_turns(&mut self, engine: &mut GameEngine) -> Result<GameResult, SessionError> {
        self.console.notify(narration::lets_play())?;

        loop {
            let name = engine
                .current_player()
                .map(|p| p.name.clone())
                .ok_or(InvalidStateError::NotActive)?;

            let roll = self.roll_for(&name)?;
            let turn = engine.resolve_roll(roll)?;
            self.console.notify(&narration::addition(
                roll,
                turn.total_before,
                turn.candidate_total(),
            ))?;

            match turn.outcome {
                RollOutcome::Safe => {}
                RollOutcome::Eliminated => {
                    self.console.notify(&narration::eliminated(&name))?;
                }
                RollOutcome::Lost => {
                    self.console.notify(&narration::eliminated(&name))?;
                    for line in narration::lost() {
                        self.console.notify(line)?;
                    }
                    return Ok(GameResult::NoWinner);
                }
                RollOutcome::Won => {
                    for line in narration::won(&name) {
                        self.console.notify(&line)?;
                    }
                    return Ok(GameResult::Winner(turn.player));
                }
            }
        }
    }

    fn wants_another_game(&mut self) -> Result<bool, SessionError> {
        let answer = self.console.prompt_text(narration::restart_prompt())?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}
