use crate::config::DisplayConfig;
use crate::game::{
    participant_for_turn, Board, Cell, GameOutcome, GameSession, Participant, Team, COLS, ROWS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal color for a team or piece color
fn team_color(team: Team) -> Color {
    match team {
        Team::Red => Color::Red,
        Team::Yellow => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    display: &DisplayConfig,
    selected_column: usize,
    input: &str,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Input
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, session, display, chunks[0]);

    if display.show_move_log {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(34)])
            .split(chunks[1]);
        render_board(frame, session, display, selected_column, body[0]);
        render_move_log(frame, session, body[1]);
    } else {
        render_board(frame, session, display, selected_column, chunks[1]);
    }

    render_message(frame, message, chunks[2]);
    render_input(frame, input, chunks[3]);
    render_controls(frame, chunks[4]);
}

/// "Red Team Spy, has Yellow ◎ Pieces", split into team- and piece-colored spans
fn describe(participant: Participant, display: &DisplayConfig) -> Vec<Span<'static>> {
    let glyph = display.glyph(Cell::Occupied(participant));
    vec![
        Span::styled(
            participant.name(),
            Style::default()
                .fg(team_color(participant.team()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                ", has {} {} Pieces",
                participant.piece_color().name(),
                glyph
            ),
            Style::default().fg(team_color(participant.piece_color())),
        ),
    ]
}

fn render_header(frame: &mut Frame, session: &GameSession, display: &DisplayConfig, area: Rect) {
    let line = match session.outcome() {
        Some(outcome) => {
            let color = outcome.winning_team().map_or(Color::Green, team_color);
            Line::from(Span::styled(
                outcome.announcement(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => {
            let mut spans = vec![Span::raw("Current player is ")];
            spans.extend(describe(session.current_participant(), display));
            Line::from(spans)
        }
    };

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Sabotage Connect Four"),
    );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    display: &DisplayConfig,
    selected_column: usize,
    area: Rect,
) {
    let board = session.board();
    let winning_run = match session.outcome() {
        Some(GameOutcome::Winner(run)) if display.highlight_winning_run => Some(run),
        _ => None,
    };

    let mut lines = Vec::new();

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = Vec::new();
        for col in 0..COLS {
            let cell = board.get(row, col);
            let mut style = match cell.piece_color() {
                Some(color) => Style::default().fg(team_color(color)),
                None => Style::default().fg(Color::Blue),
            };
            if winning_run.is_some_and(|run| run.contains(row, col)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(format!(" {} ", display.glyph(cell)), style));
        }
        lines.push(Line::from(row_spans));
    }

    // Column numbers with selection indicator
    let col_line: Vec<Span> = (0..COLS)
        .map(|col| {
            Span::styled(
                format!(" {} ", col),
                column_label_style(board, col, selected_column),
            )
        })
        .collect();
    lines.push(Line::from(col_line));

    let mut indicator_line = Vec::new();
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

/// Full columns are dimmed so the selector shows where a piece can't go
fn column_label_style(board: &Board, col: usize, selected_column: usize) -> Style {
    let style = if col == selected_column {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Green)
    };
    if board.is_column_full(col) {
        style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_move_log(frame: &mut Frame, session: &GameSession, area: Rect) {
    let history = session.history();
    // Only the most recent moves that fit inside the borders
    let visible = (area.height as usize).saturating_sub(2);
    let skip = history.len().saturating_sub(visible);

    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, placement)| {
            let participant = participant_for_turn(index);
            Line::from(vec![
                Span::raw(format!("{:>2}. ", index + 1)),
                Span::styled(
                    participant.name(),
                    Style::default().fg(team_color(participant.team())),
                ),
                Span::raw(format!(" → {}", placement.column)),
            ])
        })
        .collect();

    let title = format!("Moves ({})", session.move_count());
    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(log, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_input(frame: &mut Frame, input: &str, area: Rect) {
    let line = Line::from(vec![
        Span::raw("> "),
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter column number, UNDO, NEW, or QUIT"),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls =
        Paragraph::new("←/→: Select  |  Enter: Drop / Submit  |  Backspace: Edit  |  Esc: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
