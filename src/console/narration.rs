//! Narrative text shown to the players.
//!
//! Pure functions of engine values, so the wording is testable without a
//! terminal.

use crate::core::config::{CEILING, PLAYER_COUNT};

/// Opening line before names are collected.
pub fn intro() -> String {
    format!("Let's start by entering the names of the {PLAYER_COUNT} players")
}

/// Prompt for the name of the player at `position` (1-based).
pub fn name_prompt(position: usize) -> String {
    format!("📝 Enter name for player {position}: ")
}

/// Shown once all six names are in.
pub fn names_collected() -> &'static str {
    "✅ We have the name of each player"
}

/// How the first player is chosen.
pub fn tie_break_rules() -> [&'static str; 3] {
    [
        "💡 To determine the first player who will start the game, all players must roll the dice",
        "💡 The player who gets the highest score will start the game",
        "💡 If the highest score is obtained by multiple players, those players must roll the dice again until a tie-breaker is achieved",
    ]
}

/// Asks a player to confirm their roll.
pub fn roll_prompt(name: &str) -> String {
    format!("➡️ {name} : press Enter to roll the dice")
}

/// A tie-break roll.
pub fn rolled(name: &str, roll: u8) -> String {
    format!("🎲 {name} rolled a {roll}")
}

/// Join names as `"A, B and C"`.
///
/// ```
/// use dice36::console::narration::join_names;
///
/// assert_eq!(join_names(&["Ada"]), "Ada");
/// assert_eq!(join_names(&["Ada", "Grace"]), "Ada and Grace");
/// assert_eq!(join_names(&["Ada", "Grace", "Alan"]), "Ada, Grace and Alan");
/// ```
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Announcement of a tied tie-break round.
pub fn tie<S: AsRef<str>>(names: &[S], roll: u8) -> [String; 2] {
    let names = join_names(names);
    [
        format!("🔔 {names} all achieved a score of {roll}"),
        format!("🔔 {names} each need to roll the dice again to break the tie"),
    ]
}

/// Announcement of the tie-break winner.
pub fn first_player(name: &str, roll: u8) -> [String; 2] {
    [
        format!("{name} with a {roll}, has achieved the highest score"),
        format!("🏅 {name} will be the first to play 🏅"),
    ]
}

/// Start of the main loop.
pub fn lets_play() -> &'static str {
    "🚀 Let's play ! 🚀"
}

/// The running total a roll would produce.
pub fn addition(roll: u8, total_before: u32, candidate: u32) -> String {
    format!(
        "Adding the dice roll result of {roll} to the total score of {total_before} gives {candidate}"
    )
}

/// A player overshot and is out.
pub fn eliminated(name: &str) -> String {
    format!("❌ {name} is eliminated ❌")
}

/// Win announcement, jackpot included.
pub fn won(name: &str) -> [String; 3] {
    [
        "🎉🎉 Won !!! 🎉🎉".to_string(),
        format!("🏆 {name} has won the game 🏆"),
        format!("💰 {name} wins the jackpot of {CEILING} gold coins 💰"),
    ]
}

/// Everyone overshot.
pub fn lost() -> [&'static str; 2] {
    ["😞 Lost !!! 😞", "❌ All players have been eliminated ❌"]
}

/// Asks whether to play again.
pub fn restart_prompt() -> &'static str {
    "Do you want to start a new game ? (y/n): "
}

/// Last line of the session.
pub fn goodbye() -> &'static str {
    "👋 Goodbye 👋"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_names_empty() {
        let none: [&str; 0] = [];
        assert_eq!(join_names(&none), "");
    }

    #[test]
    fn test_join_names_owned() {
        let names = vec!["Marie".to_string(), "Lidia".to_string(), "David".to_string(), "Noemie".to_string()];
        assert_eq!(join_names(&names), "Marie, Lidia, David and Noemie");
    }

    #[test]
    fn test_tie_lines() {
        let [first, second] = tie(&["Marie", "David"], 6);
        assert_eq!(first, "🔔 Marie and David all achieved a score of 6");
        assert_eq!(second, "🔔 Marie and David each need to roll the dice again to break the tie");
    }

    #[test]
    fn test_turn_lines() {
        assert_eq!(
            addition(5, 30, 35),
            "Adding the dice roll result of 5 to the total score of 30 gives 35"
        );
        assert_eq!(eliminated("Jerome"), "❌ Jerome is eliminated ❌");
        assert_eq!(rolled("Lidia", 4), "🎲 Lidia rolled a 4");
    }

    #[test]
    fn test_won_mentions_jackpot() {
        let lines = won("Laurent");
        assert_eq!(lines[1], "🏆 Laurent has won the game 🏆");
        assert_eq!(lines[2], "💰 Laurent wins the jackpot of 36 gold coins 💰");
    }

    #[test]
    fn test_prompts() {
        assert_eq!(intro(), "Let's start by entering the names of the 6 players");
        assert_eq!(name_prompt(3), "📝 Enter name for player 3: ");
        assert_eq!(first_player("Noemie", 5)[1], "🏅 Noemie will be the first to play 🏅");
    }
}
