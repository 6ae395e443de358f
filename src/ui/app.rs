use crate::command::Command;
use crate::config::{AppConfig, DisplayConfig};
use crate::game::{GameSession, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Longest command the input line accepts
const MAX_INPUT_LEN: usize = 16;

pub struct App {
    session: GameSession,
    display: DisplayConfig,
    selected_column: usize,
    input: String,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: GameSession::new(),
            display: config.display.clone(),
            selected_column: config.interface.start_column.min(COLS - 1),
            input: String::new(),
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Messages are shown once, until the next key
        self.message = None;

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Char(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Run the typed command, or drop into the selected column if nothing was typed
    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        if input.trim().is_empty() {
            self.execute(Command::Place(self.selected_column));
        } else {
            match input.parse::<Command>() {
                Ok(command) => self.execute(command),
                Err(err) => self.session.set_message(err.to_string()),
            }
        }
        self.message = self.session.take_message();
    }

    fn execute(&mut self, command: Command) {
        // Rejected actions leave their reason in the session's message slot
        match command {
            Command::Place(column) => {
                self.selected_column = column;
                let _ = self.session.apply_move(column);
            }
            Command::Undo => {
                let _ = self.session.undo();
            }
            Command::NewGame => {
                self.session.reset();
                self.session.set_message("New game started!");
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.display,
            self.selected_column,
            &self.input,
            self.message.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
