//! Per-path simulation state.

use od_core::Day;

use crate::encounter_penalty;

/// Mutable state of one path's walk.
///
/// Created fresh for every path and consumed by [`finish`](Self::finish);
/// nothing carries over between paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Day the vehicle has reached so far.
    pub elapsed: Day,

    /// Fuel left, in travel days.  Signed: a single hop longer than a full
    /// tank drives it negative, which forces a refuel before the next hop.
    pub remaining_autonomy: i64,

    /// Running success probability, starting at 1.
    pub probability: f64,

    /// Encounters so far; the next one costs `encounter_penalty(encounters)`.
    pub encounters: u32,

    /// Slack days still available for waiting, shared by the whole path.
    pub wait_budget: u64,

    pub travel_days: u64,
    pub refuel_days: u64,
    pub wait_days:   u64,
}

impl SimulationState {
    pub fn new(base_autonomy: u64, wait_budget: u64) -> Self {
        Self {
            elapsed: Day::ZERO,
            remaining_autonomy: full_tank(base_autonomy),
            probability: 1.0,
            encounters: 0,
            wait_budget,
            travel_days: 0,
            refuel_days: 0,
            wait_days: 0,
        }
    }

    #[inline]
    pub fn can_travel(&self, travel_time: u64) -> bool {
        i128::from(self.remaining_autonomy) >= i128::from(travel_time)
    }

    /// Saturates rather than wraps: a journey whose day count overflows is
    /// late against any countdown.
    #[inline]
    pub fn travel(&mut self, travel_time: u64) {
        self.remaining_autonomy = self.remaining_autonomy.saturating_sub_unsigned(travel_time);
        self.elapsed += travel_time;
        self.travel_days = self.travel_days.saturating_add(travel_time);
    }

    /// Spend one day refilling the tank.
    #[inline]
    pub fn refuel(&mut self, base_autonomy: u64) {
        self.elapsed += 1;
        self.refuel_days += 1;
        self.remaining_autonomy = full_tank(base_autonomy);
    }

    /// Spend one slack day.  Callers check `wait_budget > 0` first.
    #[inline]
    pub fn wait(&mut self) {
        debug_assert!(self.wait_budget > 0);
        self.elapsed += 1;
        self.wait_days += 1;
        self.wait_budget -= 1;
    }

    /// Apply the next encounter discount and return the amount deducted.
    pub fn encounter(&mut self) -> f64 {
        let penalty = encounter_penalty(self.encounters);
        self.probability -= penalty;
        self.encounters += 1;
        penalty
    }

    /// Close the walk against the mission countdown.
    pub fn finish(self, countdown: u64) -> JourneyOutcome {
        let on_time = self.elapsed.0 <= countdown;
        JourneyOutcome {
            probability: if on_time { self.probability.clamp(0.0, 1.0) } else { 0.0 },
            elapsed:     self.elapsed,
            encounters:  self.encounters,
            travel_days: self.travel_days,
            refuel_days: self.refuel_days,
            wait_days:   self.wait_days,
            on_time,
        }
    }
}

/// Tank contents after a refuel.  Missions validate autonomy to fit `i64`.
#[inline]
fn full_tank(base_autonomy: u64) -> i64 {
    i64::try_from(base_autonomy).unwrap_or(i64::MAX)
}

/// Final result of one path's walk.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyOutcome {
    /// Success probability in `[0, 1]`; exactly 0 when late.
    pub probability: f64,
    /// Arrival day at the destination.
    pub elapsed:     Day,
    pub encounters:  u32,
    pub travel_days: u64,
    pub refuel_days: u64,
    pub wait_days:   u64,
    /// `elapsed <= countdown`.
    pub on_time:     bool,
}

impl JourneyOutcome {
    /// Probability as a percentage in `[0, 100]`.
    #[inline]
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}
