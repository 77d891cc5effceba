//! IELTS band-score arithmetic backing the score-target editor.
//!
//! Band scores run from 0.0 to 9.0 in half-band steps; the overall band is
//! the mean of the four skills rounded up at quarter bands, per the official
//! scale.

use serde::{Deserialize, Serialize};

pub const MIN_BAND: f32 = 0.0;
pub const MAX_BAND: f32 = 9.0;
pub const BAND_STEP: f32 = 0.5;

/// Clamp a raw slider value into the band range and snap it to the nearest
/// half-band step.
pub fn clamp_band(value: f32) -> f32 {
    let clamped = value.clamp(MIN_BAND, MAX_BAND);
    (clamped / BAND_STEP).round() * BAND_STEP
}

/// Midpoint of a slider range, snapped to a valid band. Used as the default
/// position when the user has not picked a target yet.
pub fn midpoint_band(low: f32, high: f32) -> f32 {
    clamp_band((low + high) / 2.0)
}

/// Per-skill target scores chosen in the score-target modal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTarget {
    pub listening: f32,
    pub reading: f32,
    pub writing: f32,
    pub speaking: f32,
}

impl Default for ScoreTarget {
    fn default() -> Self {
        let mid = midpoint_band(MIN_BAND, MAX_BAND);
        Self {
            listening: mid,
            reading: mid,
            writing: mid,
            speaking: mid,
        }
    }
}

impl ScoreTarget {
    pub fn new(listening: f32, reading: f32, writing: f32, speaking: f32) -> Self {
        Self {
            listening: clamp_band(listening),
            reading: clamp_band(reading),
            writing: clamp_band(writing),
            speaking: clamp_band(speaking),
        }
    }

    /// Overall band: arithmetic mean of the four skills, rounded to the
    /// nearest half band with quarter bands rounding up (6.25 -> 6.5,
    /// 6.75 -> 7.0).
    pub fn overall(&self) -> f32 {
        let mean = (self.listening + self.reading + self.writing + self.speaking) / 4.0;
        (mean * 2.0).round() / 2.0
    }
}
