//! Heuristic uniqueness score
//!
//! A fixed-weight rule set, not an empirical rarity measure. Every guard
//! treats an unavailable signal as false, so an all-unavailable record
//! scores 0.

use serde::Serialize;
use std::fmt;

use crate::record::FingerprintRecord;

/// Screen widths common enough to carry no weight.
pub const COMMON_WIDTHS: [u32; 3] = [1920, 1366, 1536];

/// Compute the uniqueness score, clamped to 0..=100.
pub fn uniqueness_score(record: &FingerprintRecord) -> u8 {
    let mut score: u32 = 0;

    if record.fonts.available().is_some_and(|f| f.len() > 6) {
        score += 30;
    }
    if record
        .screen
        .width
        .available()
        .is_some_and(|w| !COMMON_WIDTHS.contains(w))
    {
        score += 20;
    }
    if record.webgl.renderer.is_available() {
        score += 20;
    }
    if record.hardware_concurrency.available().is_some_and(|c| *c >= 8) {
        score += 15;
    }
    if record.languages.available().is_some_and(|l| l.len() > 1) {
        score += 15;
    }

    score.min(100) as u8
}

/// Displayed uniqueness band. Boundary values fall into the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UniquenessBand {
    High,
    Moderate,
    Low,
}

impl UniquenessBand {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            UniquenessBand::High
        } else if score > 30 {
            UniquenessBand::Moderate
        } else {
            UniquenessBand::Low
        }
    }
}

impl fmt::Display for UniquenessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UniquenessBand::High => "High",
            UniquenessBand::Moderate => "Moderate",
            UniquenessBand::Low => "Low",
        };
        f.write_str(label)
    }
}
