//! Where the qualification bar comes from: a fixed point bar (Day 2) or a
//! field-size bucket table (Top 8). Both estimator variants measure records
//! against a threshold obtained here, so the cut logic exists exactly once.

/// Source of the points threshold a record is measured against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThresholdSource {
    /// Published Day 2 point bar.
    FixedPoints(u32),
    /// Top 8 cut line, bucketed by field size.
    FieldSize(u32),
}

impl ThresholdSource {
    /// Points needed to qualify.
    ///
    /// `FieldSize` uses conventional cut lines per bracket of player count;
    /// fields above 1024 fall back to the points of an X-2 record. Fields of
    /// 8 or fewer players never consult this table (the whole field is the
    /// Top 8).
    pub fn threshold_points(&self, total_rounds: u32) -> u32 {
        match *self {
            ThresholdSource::FixedPoints(points) => points,
            ThresholdSource::FieldSize(num_players) => {
                if num_players <= 16 {
                    9
                } else if num_players <= 32 {
                    12
                } else if num_players <= 64 {
                    15
                } else if num_players <= 128 {
                    16
                } else if num_players <= 256 {
                    18
                } else if num_players <= 512 {
                    21
                } else if num_players <= 1024 {
                    24
                } else {
                    total_rounds.saturating_sub(2) * 3
                }
            }
        }
    }
}
