//! Text commands typed by the player.

use std::str::FromStr;

use crate::error::MoveError;
use crate::game::COLS;

pub const UNDO_INPUT: &str = "UNDO";
pub const QUIT_INPUT: &str = "QUIT";
pub const NEW_GAME_INPUT: &str = "NEW";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Undo,
    Quit,
    NewGame,
}

impl FromStr for Command {
    type Err = MoveError;

    /// Keywords are matched case-insensitively after trimming. A column must
    /// be written exactly as its number, so "+3" and "03" are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_uppercase();
        match input.as_str() {
            UNDO_INPUT => Ok(Command::Undo),
            QUIT_INPUT => Ok(Command::Quit),
            NEW_GAME_INPUT => Ok(Command::NewGame),
            _ => (0..COLS)
                .find(|column| column.to_string() == input)
                .map(Command::Place)
                .ok_or(MoveError::InvalidColumn),
        }
    }
}
