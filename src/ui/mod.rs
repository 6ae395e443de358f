//! Terminal front ends: a full-screen ratatui view and a line-based prompt
//! that mirrors a classic text game.

mod app;
mod game_view;
pub mod plain;

pub use app::App;
