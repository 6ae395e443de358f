/// One of the two competing teams. Also used as a piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Red,
    Yellow,
}

impl Team {
    /// Get the opposing team
    pub const fn other(self) -> Team {
        match self {
            Team::Red => Team::Yellow,
            Team::Yellow => Team::Red,
        }
    }

    /// Get team name for display
    pub fn name(self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Yellow => "Yellow",
        }
    }
}

/// One of the four fixed seats at the table.
///
/// A sabotage ("spy") participant plays for its own team but drops pieces
/// of the enemy color, and those pieces count for the enemy when the board
/// is scored. `piece_color` is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Participant {
    seat: usize,
    team: Team,
    sabotage: bool,
    piece_color: Team,
}

/// Number of seats in the turn rotation.
pub const NUM_SEATS: usize = 4;

/// Participants in turn order. Each participant's seat equals its index.
pub const PARTICIPANTS: [Participant; NUM_SEATS] = [
    Participant::new(0, Team::Red, false),
    Participant::new(1, Team::Yellow, true),
    Participant::new(2, Team::Yellow, false),
    Participant::new(3, Team::Red, true),
];

/// Participant whose turn it is after `moves_played` moves.
pub fn participant_for_turn(moves_played: usize) -> Participant {
    PARTICIPANTS[moves_played % NUM_SEATS]
}

impl Participant {
    const fn new(seat: usize, team: Team, sabotage: bool) -> Self {
        let piece_color = if sabotage { team.other() } else { team };
        Participant {
            seat,
            team,
            sabotage,
            piece_color,
        }
    }

    pub fn seat(self) -> usize {
        self.seat
    }

    pub fn team(self) -> Team {
        self.team
    }

    pub fn is_sabotage(self) -> bool {
        self.sabotage
    }

    /// Color this participant's pieces count as when scoring
    pub fn piece_color(self) -> Team {
        self.piece_color
    }

    /// Get participant name for display, e.g. "Yellow Team Spy"
    pub fn name(self) -> &'static str {
        match (self.team, self.sabotage) {
            (Team::Red, false) => "Red Team Normal",
            (Team::Red, true) => "Red Team Spy",
            (Team::Yellow, false) => "Yellow Team Normal",
            (Team::Yellow, true) => "Yellow Team Spy",
        }
    }
}
