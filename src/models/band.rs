//! Qualification bands: five ordered severity tiers shared by both estimators.

use serde::{Deserialize, Serialize};

/// How likely a record is to qualify. Ordered best to worst.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Lock,
    Likely,
    Borderline,
    LongShot,
    Dead,
}

impl Band {
    /// Classify a 0-100 qualification probability.
    pub fn from_probability(probability: u8) -> Self {
        if probability >= 90 {
            Band::Lock
        } else if probability >= 60 {
            Band::Likely
        } else if probability >= 25 {
            Band::Borderline
        } else if probability >= 1 {
            Band::LongShot
        } else {
            Band::Dead
        }
    }

    /// Classify a points-above-threshold diff (Day 2 banding).
    pub fn from_points_diff(diff: i64) -> Self {
        if diff >= 3 {
            Band::Lock
        } else if diff >= 0 {
            Band::Likely
        } else if diff >= -3 {
            Band::Borderline
        } else if diff >= -6 {
            Band::LongShot
        } else {
            Band::Dead
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Lock => "Locked in",
            Band::Likely => "Likely in",
            Band::Borderline => "Borderline",
            Band::LongShot => "Long shot",
            Band::Dead => "Out of reach",
        }
    }

    /// CSS class used by the web UI.
    pub fn style(&self) -> &'static str {
        match self {
            Band::Lock => "band-lock",
            Band::Likely => "band-likely",
            Band::Borderline => "band-borderline",
            Band::LongShot => "band-longshot",
            Band::Dead => "band-dead",
        }
    }
}
