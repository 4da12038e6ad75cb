//! Quality parameter for the retry loop.

use std::fmt;

/// Encoding quality in hundredths, stepped from 0.90 down to 0.10.
///
/// Stored as an integer so that repeated 0.05 decrements land exactly on
/// the floor instead of drifting past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u8);

impl Quality {
    /// First quality tried (0.9).
    pub const INITIAL: Quality = Quality(90);
    /// Lowest quality tried (0.1); its result is returned even if over target.
    pub const FLOOR: Quality = Quality(10);
    /// Decrement per retry, in hundredths (0.05).
    pub const STEP: u8 = 5;
    /// Upper bound on encode attempts for one compression.
    pub const MAX_ATTEMPTS: u32 = ((Self::INITIAL.0 - Self::FLOOR.0) / Self::STEP) as u32 + 1;

    /// Quality as a fraction in (0, 1].
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Quality on the JPEG encoder's 1-100 scale.
    pub fn jpeg_quality(self) -> u8 {
        self.0
    }

    pub fn is_floor(self) -> bool {
        self <= Self::FLOOR
    }

    /// Next quality to try, never below the floor.
    pub fn step_down(self) -> Self {
        Quality(self.0.saturating_sub(Self::STEP).max(Self::FLOOR.0))
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f32())
    }
}
