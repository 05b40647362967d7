//! Mission time model.
//!
//! Time is a whole number of days elapsed since departure.  Every travel
//! time, refuel and wait is an integer number of days, so all journey
//! arithmetic is exact and day comparisons against sightings are O(1).

use std::fmt;

// ── Day ───────────────────────────────────────────────────────────────────────

/// Days elapsed since departure (day 0).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` days after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Day {
        Day(self.0.saturating_add(n))
    }
}

impl std::ops::Add<u64> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u64) -> Day {
        self.offset(rhs)
    }
}

impl std::ops::AddAssign<u64> for Day {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        *self = self.offset(rhs);
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
