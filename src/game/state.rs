use super::board::{Board, WinningRun};
use super::participant::{participant_for_turn, Participant, Team};
use crate::error::MoveError;

/// Result of scoring a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(WinningRun),
    Tie,
}

impl GameOutcome {
    /// Team credited with the win. This is the piece color of the run, which
    /// differs from the starting participant's own team when a spy's piece
    /// opens the line.
    pub fn winning_team(&self) -> Option<Team> {
        match self {
            GameOutcome::Winner(run) => Some(run.color()),
            GameOutcome::Tie => None,
        }
    }

    /// Announcement text, e.g. "Red Team Wins!"
    pub fn announcement(&self) -> String {
        match self.winning_team() {
            Some(team) => format!("{} Team Wins!", team.name()),
            None => "It's a Tie!".to_string(),
        }
    }
}

/// Where a move landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// One game from the empty board to a result.
///
/// Whose turn it is follows from the history alone: the participant at seat
/// `history.len() % 4` moves next. Undo is the only way back.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    history: Vec<Placement>,
    outcome: Option<GameOutcome>,
    message: Option<String>,
}

impl GameSession {
    /// Create a session with an empty board
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            history: Vec::new(),
            outcome: None,
            message: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves in the order they were played
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Participant due to move next
    pub fn current_participant(&self) -> Participant {
        participant_for_turn(self.history.len())
    }

    /// Result as of the last move or undo
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current participant's piece into `column`.
    ///
    /// A rejected move leaves the board, history and turn untouched and
    /// stores the error text as the pending message.
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(self.reject(MoveError::GameOver));
        }

        let participant = self.current_participant();
        let row = match self.board.drop_piece(column, participant) {
            Ok(row) => row,
            Err(err) => return Err(self.reject(err)),
        };

        let placement = Placement { row, column };
        self.history.push(placement);
        log::debug!(
            "move {}: {} dropped into column {} (row {})",
            self.history.len(),
            participant.name(),
            column,
            row
        );

        self.refresh_outcome();
        Ok(placement)
    }

    /// Take back the most recent move, handing the turn back to whoever made it
    pub fn undo(&mut self) -> Result<Placement, MoveError> {
        let Some(placement) = self.history.pop() else {
            return Err(self.reject(MoveError::NothingToUndo));
        };

        let removed = self.board.clear(placement.row, placement.column);
        log::debug!(
            "undo: removed {} from column {} (row {})",
            removed.participant().map_or("nothing", Participant::name),
            placement.column,
            placement.row
        );

        self.refresh_outcome();
        Ok(placement)
    }

    /// Score the board from scratch: a winning run, a tie on a full board,
    /// or `None` while play continues.
    pub fn evaluate(&self) -> Option<GameOutcome> {
        if let Some(run) = self.board.winning_run() {
            Some(GameOutcome::Winner(run))
        } else if self.board.is_full() {
            Some(GameOutcome::Tie)
        } else {
            None
        }
    }

    /// Clear the board and history for a new game
    pub fn reset(&mut self) {
        *self = GameSession::new();
        log::info!("new game started");
    }

    /// Message waiting to be shown, if any
    pub fn pending_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Remove and return the pending message
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    fn reject(&mut self, err: MoveError) -> MoveError {
        log::info!("{} rejected: {err:?}", self.current_participant().name());
        self.set_message(err.to_string());
        err
    }

    fn refresh_outcome(&mut self) {
        self.outcome = self.evaluate();
        if let Some(outcome) = self.outcome {
            log::info!("after {} moves: {}", self.history.len(), outcome.announcement());
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::{Cell, Direction, COLS, ROWS};
    use super::super::participant::PARTICIPANTS;
    use super::*;

    fn play(session: &mut GameSession, columns: &[usize]) {
        for &column in columns {
            session.apply_move(column).unwrap();
        }
    }

    #[test]
    fn test_initial_session() {
        let session = GameSession::new();
        assert_eq!(session.current_participant(), PARTICIPANTS[0]);
        assert_eq!(session.move_count(), 0);
        assert!(!session.is_over());
        assert_eq!(session.pending_message(), None);
    }

    #[test]
    fn test_apply_move_rotates_seats() {
        let mut session = GameSession::new();
        for expected_seat in [1, 2, 3, 0, 1] {
            session.apply_move(0).unwrap();
            assert_eq!(session.current_participant().seat(), expected_seat);
        }
        assert_eq!(session.board().get(5, 0), Cell::Occupied(PARTICIPANTS[0]));
        assert_eq!(session.board().get(4, 0), Cell::Occupied(PARTICIPANTS[1]));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut session = GameSession::new();
        play(&mut session, &[2; ROWS]);
        let before = session.clone();

        assert_eq!(session.apply_move(2), Err(MoveError::ColumnFull { column: 2 }));
        assert_eq!(session.board(), before.board());
        assert_eq!(session.move_count(), ROWS);
        assert_eq!(session.current_participant(), before.current_participant());
        assert_eq!(session.take_message().as_deref(), Some("That column is full!"));
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.apply_move(COLS), Err(MoveError::InvalidColumn));
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(
            session.pending_message(),
            Some("Column must be between 0 and 6!")
        );
    }

    #[test]
    fn test_undo_on_fresh_board() {
        let mut session = GameSession::new();
        assert_eq!(session.undo(), Err(MoveError::NothingToUndo));
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.take_message().as_deref(), Some("No moves to undo!"));
        assert_eq!(session.take_message(), None);
    }

    #[test]
    fn test_apply_then_undo_restores_state() {
        let mut session = GameSession::new();
        play(&mut session, &[3, 3, 4]);
        let before = session.clone();

        let placement = session.apply_move(4).unwrap();
        assert_eq!(placement, Placement { row: 4, column: 4 });
        assert_eq!(session.undo(), Ok(placement));

        assert_eq!(session, before);
        assert_eq!(session.current_participant().seat(), 3);
    }

    #[test]
    fn test_undo_rewinds_to_empty_board() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 1, 2, 3, 4, 5]);
        while session.undo().is_ok() {}

        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_participant(), PARTICIPANTS[0]);
        assert_eq!(session.pending_message(), Some("No moves to undo!"));
    }

    #[test]
    fn test_opening_scenario_has_no_result() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(session.current_participant(), PARTICIPANTS[3]);

        // Red's spy drops a yellow piece on top of yellow in column 1
        let placement = session.apply_move(1).unwrap();
        assert_eq!(placement, Placement { row: 3, column: 1 });
        assert_eq!(session.board().get(3, 1).piece_color(), Some(Team::Yellow));
        assert_eq!(session.evaluate(), None);
        assert!(!session.is_over());
        assert_eq!(session.current_participant().seat(), 0);
    }

    #[test]
    fn test_spy_line_credits_piece_color() {
        let mut session = GameSession::new();
        // Yellow's spy opens the bottom row, red normal finishes it
        play(&mut session, &[6, 0, 5, 5, 1, 2, 4, 4]);
        assert_eq!(session.outcome(), None);

        session.apply_move(3).unwrap();
        let outcome = session.outcome().unwrap();
        let GameOutcome::Winner(run) = outcome else {
            panic!("expected a win, got {outcome:?}");
        };
        assert_eq!(run.participant, PARTICIPANTS[1]);
        assert_eq!(run.participant.team(), Team::Yellow);
        assert_eq!((run.row, run.col, run.direction), (5, 0, Direction::Right));
        assert_eq!(outcome.winning_team(), Some(Team::Red));
        assert_eq!(outcome.announcement(), "Red Team Wins!");
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut session = GameSession::new();
        play(&mut session, &[6, 0, 5, 5, 1, 2, 4, 4, 3]);
        assert!(session.is_over());

        let before = *session.board();
        assert_eq!(session.apply_move(6), Err(MoveError::GameOver));
        assert_eq!(session.board(), &before);
        assert_eq!(session.move_count(), 9);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut session = GameSession::new();
        play(&mut session, &[6, 0, 5, 5, 1, 2, 4, 4, 3]);
        assert!(session.is_over());

        session.undo().unwrap();
        assert!(!session.is_over());
        assert_eq!(session.current_participant(), PARTICIPANTS[0]);
        session.apply_move(6).unwrap();
        assert!(!session.is_over());
    }

    #[test]
    fn test_tie_on_full_board() {
        let mut session = GameSession::new();
        let columns = [
            2, 3, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 2, 3, 2, 4, 4, 6, 4, 5,
            4, 5, 4, 5, 4, 5, 5, 6, 5, 6, 3, 6, 6, 6,
        ];
        for (index, &column) in columns.iter().enumerate() {
            session.apply_move(column).unwrap();
            if index + 1 < columns.len() {
                assert_eq!(session.outcome(), None, "early result after move {}", index + 1);
            }
        }

        assert!(session.board().is_full());
        assert_eq!(session.outcome(), Some(GameOutcome::Tie));
        assert_eq!(session.evaluate(), Some(GameOutcome::Tie));
        assert_eq!(GameOutcome::Tie.announcement(), "It's a Tie!");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = GameSession::new();
        play(&mut session, &[1, 2, 3]);
        session.set_message("hello");

        session.reset();
        assert_eq!(session, GameSession::new());
    }
}
