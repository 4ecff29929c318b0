//! Shared type definitions and newtypes

use serde::{Deserialize, Serialize};

/// Siege Points amount (for clarity in function signatures)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiegePoints(pub u32);

impl SiegePoints {
    pub fn new(amount: u32) -> Self {
        SiegePoints(amount)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Percentage value (e.g., for tier progress)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percent(pub f64);

impl Percent {
    pub fn new(value: f64) -> Self {
        Percent(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Clamp to the displayable 0..=100 range
    pub fn clamped(&self) -> Self {
        Percent(self.0.clamp(0.0, 100.0))
    }
}
