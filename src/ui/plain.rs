//! Line-based front end: redraws the board after every command and reads one
//! line of text per turn.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::command::Command;
use crate::config::{AppConfig, DisplayConfig};
use crate::game::{Board, Cell, GameSession, Participant, Team, COLS, ROWS};

pub const PROMPT: &str = "Enter column number, UNDO, NEW, or QUIT: ";
pub const FAREWELL: &str = "Thanks for playing Sabotage Connect 4!";

fn piece_color(team: Team) -> Color {
    match team {
        Team::Red => Color::Red,
        Team::Yellow => Color::Yellow,
    }
}

/// Play until someone wins, the board fills, or the player quits.
/// End of input counts as quitting.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    config: &AppConfig,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let display = &config.display;

    loop {
        if config.interface.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write_board(out, session.board(), display)?;
        writeln!(out)?;

        if let Some(outcome) = session.outcome() {
            let color = outcome.winning_team().map_or(Color::Green, piece_color);
            writeln!(out, "{}", outcome.announcement().with(color))?;
            break;
        }

        if let Some(message) = session.take_message() {
            writeln!(out, "{}", message.magenta())?;
        }

        writeln!(
            out,
            "Current player is {}",
            describe(session.current_participant(), display)
        )?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", FAREWELL.blue())?;
            break;
        }

        // Rejected actions leave their reason in the session's message slot
        match line.parse::<Command>() {
            Ok(Command::Quit) => {
                writeln!(out, "{}", FAREWELL.blue())?;
                break;
            }
            Ok(Command::Undo) => {
                let _ = session.undo();
            }
            Ok(Command::NewGame) => session.reset(),
            Ok(Command::Place(column)) => {
                let _ = session.apply_move(column);
            }
            Err(err) => session.set_message(err.to_string()),
        }
    }

    out.flush()
}

fn write_board<W: Write>(out: &mut W, board: &Board, display: &DisplayConfig) -> io::Result<()> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = board.get(row, col);
            let color = cell.piece_color().map_or(Color::Blue, piece_color);
            write!(out, "{} ", display.glyph(cell).with(color))?;
        }
        writeln!(out)?;
    }

    // Column names at the bottom
    for col in 0..COLS {
        write!(out, "{} ", col.to_string().green())?;
    }
    writeln!(out)
}

fn describe(participant: Participant, display: &DisplayConfig) -> String {
    let pieces = format!(
        ", has {} {} Pieces",
        participant.piece_color().name(),
        display.glyph(Cell::Occupied(participant))
    );
    format!(
        "{}{}",
        participant.name().with(piece_color(participant.team())),
        pieces.with(piece_color(participant.piece_color()))
    )
}
