//! The journey simulator.

use od_core::{Day, Location, MissionParameters};
use od_routes::{Path, Step};

use crate::{JourneyObserver, JourneyOutcome, NoopObserver, SimulationState};

/// Probability deducted by the `k`-th encounter (k from 0): `9^k / 10^(k+1)`.
///
/// The series 0.1, 0.09, 0.081, … sums to `1 − 0.9^k` after `k` encounters,
/// so the running probability never drops below zero.  Evaluated as
/// `0.1 · 0.9^k`, which underflows to 0 for long encounter chains instead of
/// dividing two infinities.
#[inline]
pub fn encounter_penalty(k: u32) -> f64 {
    0.1 * 0.9f64.powi(i32::try_from(k).unwrap_or(i32::MAX))
}

/// Evaluates paths against one mission.
///
/// Holds only a borrow of the mission; every call builds its own
/// [`SimulationState`], so one simulator serves any number of paths.
pub struct JourneySimulator<'m> {
    mission: &'m MissionParameters,
}

impl<'m> JourneySimulator<'m> {
    pub fn new(mission: &'m MissionParameters) -> Self {
        Self { mission }
    }

    pub fn mission(&self) -> &'m MissionParameters {
        self.mission
    }

    /// Arrival day of `path` with no waiting and no avoidance, honouring
    /// only the fuel rules.
    pub fn baseline_travel_time(&self, path: &Path) -> u64 {
        let base = self.mission.base_autonomy;
        let mut state = SimulationState::new(base, 0);
        for step in path.steps() {
            if !state.can_travel(step.travel_time) {
                state.refuel(base);
            }
            state.travel(step.travel_time);
        }
        state.elapsed.0
    }

    /// Slack days available to `path` for dodging sightings.
    pub fn wait_budget(&self, path: &Path) -> u64 {
        self.mission.countdown.saturating_sub(self.baseline_travel_time(path))
    }

    /// Success probability of `path`, in `[0, 1]`.
    pub fn simulate(&self, path: &Path) -> f64 {
        self.simulate_with(path, &mut NoopObserver).probability
    }

    /// Walk `path` day by day, reporting events to `observer`.
    pub fn simulate_with<O: JourneyObserver>(&self, path: &Path, observer: &mut O) -> JourneyOutcome {
        let mut state = SimulationState::new(self.mission.base_autonomy, self.wait_budget(path));

        let mut current = &self.mission.origin;
        for step in path.steps() {
            self.advance(&mut state, current, step, observer);
            current = &step.location;
        }

        let outcome = state.finish(self.mission.countdown);
        log::trace!(
            "path {path}: arrive {} with p={:.4} ({} encounters, {} refuels, {} waits)",
            outcome.elapsed,
            outcome.probability,
            outcome.encounters,
            outcome.refuel_days,
            outcome.wait_days,
        );
        observer.on_arrival(&outcome);
        outcome
    }

    #[inline]
    fn sighted(&self, day: Day, location: &Location) -> bool {
        self.mission.sightings.contains(day, location)
    }

    /// One step from `current` to `step.location`.
    ///
    /// The two fuel branches wait under different conditions: after a refuel
    /// the vehicle only holds back while `current` itself is clear on the
    /// prospective arrival day.
    fn advance<O: JourneyObserver>(
        &self,
        state:    &mut SimulationState,
        current:  &Location,
        step:     &Step,
        observer: &mut O,
    ) {
        let next = &step.location;

        if state.can_travel(step.travel_time) {
            state.travel(step.travel_time);

            while self.sighted(state.elapsed, next) && state.wait_budget > 0 {
                state.wait();
                observer.on_wait(state.elapsed, current);
            }
        } else {
            state.refuel(self.mission.base_autonomy);
            observer.on_refuel(state.elapsed, current);

            if self.sighted(state.elapsed, current) {
                let penalty = state.encounter();
                observer.on_encounter(state.elapsed, current, penalty);
            }

            state.travel(step.travel_time);

            while self.sighted(state.elapsed, next)
                && !self.sighted(state.elapsed, current)
                && state.wait_budget > 0
            {
                state.wait();
                observer.on_wait(state.elapsed, current);
            }
        }

        if self.sighted(state.elapsed, next) {
            let penalty = state.encounter();
            observer.on_encounter(state.elapsed, next, penalty);
        }
    }
}
