//! Round-by-round results and the tracker that owns them.

use serde::{Deserialize, Serialize};

use crate::models::{CalcError, Record};

/// Outcome of one Swiss round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    Win,
    Loss,
    Draw,
    /// Not yet played. Only ever appears as a trailing suffix of the tracker.
    #[default]
    Unplayed,
}

impl RoundResult {
    pub fn is_played(&self) -> bool {
        !matches!(self, RoundResult::Unplayed)
    }
}

/// Ordered per-round results for one player, indexed by round number 1..=total_rounds.
///
/// The tracker is the calculator's only mutable state. It is owned by the
/// presentation layer; the engine only ever sees it as an immutable slice.
/// Played results always form a contiguous prefix: setting round r requires
/// round r-1 to be played, and clearing round r also clears every later round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundTracker {
    rounds: Vec<RoundResult>,
}

impl RoundTracker {
    /// A tracker with `total_rounds` unplayed rounds.
    pub fn new(total_rounds: u32) -> Self {
        Self {
            rounds: vec![RoundResult::Unplayed; total_rounds as usize],
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Results in round order (for the OMW estimator).
    pub fn results(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Length of the played prefix.
    pub fn rounds_played(&self) -> u32 {
        self.rounds.iter().take_while(|r| r.is_played()).count() as u32
    }

    /// Fold the played prefix into a win/loss/draw record.
    pub fn record(&self) -> Record {
        let mut record = Record::default();
        for result in self.rounds.iter().take_while(|r| r.is_played()) {
            match result {
                RoundResult::Win => record.wins += 1,
                RoundResult::Loss => record.losses += 1,
                RoundResult::Draw => record.draws += 1,
                RoundResult::Unplayed => {}
            }
        }
        record
    }

    /// Set round `round` (1-based) to a played result.
    /// Round 1 is always settable; any later round needs its predecessor played.
    pub fn set_result(&mut self, round: u32, result: RoundResult) -> Result<(), CalcError> {
        if !result.is_played() {
            return Err(CalcError::NotAPlayedResult);
        }
        let idx = self.index_of(round)?;
        if idx > 0 && !self.rounds[idx - 1].is_played() {
            return Err(CalcError::RoundGap { round });
        }
        self.rounds[idx] = result;
        Ok(())
    }

    /// Clear round `round` and every round after it back to unplayed.
    pub fn clear_from(&mut self, round: u32) -> Result<(), CalcError> {
        let idx = self.index_of(round)?;
        for slot in &mut self.rounds[idx..] {
            *slot = RoundResult::Unplayed;
        }
        Ok(())
    }

    fn index_of(&self, round: u32) -> Result<usize, CalcError> {
        if round == 0 || round > self.total_rounds() {
            return Err(CalcError::RoundOutOfRange {
                round,
                total_rounds: self.total_rounds(),
            });
        }
        Ok((round - 1) as usize)
    }
}
