//! Guard errors at the calculator's outer seam.

/// Errors raised by input validation before the estimators run.
/// The estimators themselves are total and never produce these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalcError {
    /// Top 8 mode needs a field of at least 8 players.
    FieldTooSmall { num_players: u32 },
    /// Day 2 mode needs at least one round.
    InvalidRounds,
    /// The Day 2 point bar must be at least 1.
    InvalidThreshold,
    /// The record accounts for more rounds than the tournament has.
    RecordExceedsRounds { rounds_played: u32, total_rounds: u32 },
    /// In-progress estimates need at least one played round.
    NoRoundsPlayed,
    /// Round number outside 1..=total_rounds.
    RoundOutOfRange { round: u32, total_rounds: u32 },
    /// Setting this round would leave an earlier round unplayed.
    RoundGap { round: u32 },
    /// A round can only be set to a played result; clear it instead.
    NotAPlayedResult,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::FieldTooSmall { num_players } => {
                write!(f, "Need at least 8 players for a Top 8 cut (got {})", num_players)
            }
            CalcError::InvalidRounds => write!(f, "Need at least 1 round"),
            CalcError::InvalidThreshold => write!(f, "Qualification threshold must be at least 1 point"),
            CalcError::RecordExceedsRounds { rounds_played, total_rounds } => {
                write!(f, "Record covers {} rounds but the tournament only has {}", rounds_played, total_rounds)
            }
            CalcError::NoRoundsPlayed => write!(f, "Enter at least one round result first"),
            CalcError::RoundOutOfRange { round, total_rounds } => {
                write!(f, "Round {} is out of range (1-{})", round, total_rounds)
            }
            CalcError::RoundGap { round } => {
                write!(f, "Round {} cannot be set before the rounds leading up to it", round)
            }
            CalcError::NotAPlayedResult => write!(f, "A round must be set to a win, loss, or draw"),
        }
    }
}
