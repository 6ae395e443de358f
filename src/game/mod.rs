//! Core Sabotage Connect Four logic: the four-seat participant table, the
//! board with piece-color scoring, and the game session with move history
//! and undo.

mod board;
mod participant;
mod state;

pub use board::{Board, Cell, Direction, WinningRun, COLS, ROWS, WINNING_LENGTH};
pub use participant::{participant_for_turn, Participant, Team, NUM_SEATS, PARTICIPANTS};
pub use state::{GameOutcome, GameSession, Placement};
