//! # Sabotage Connect Four
//!
//! Two teams, four players, one Connect Four board. Each team has a normal
//! player and a spy whose pieces count for the enemy, so a team can hand the
//! other side a win. Plays in the terminal through a Ratatui UI or a plain
//! line prompt.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: participants, board scoring, session with undo
//! - [`command`] — Parsing of typed player commands
//! - [`ui`] — Terminal UI and line-based front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
