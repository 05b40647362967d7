//! Journey observer trait for tracing and itinerary reporting.

use od_core::{Day, Location};

use crate::JourneyOutcome;

/// Callbacks invoked by
/// [`JourneySimulator::simulate_with`][crate::JourneySimulator::simulate_with]
/// as the walk progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait JourneyObserver {
    /// A refuel day ended on `day` at `location`.
    fn on_refuel(&mut self, _day: Day, _location: &Location) {}

    /// The vehicle held back one day at `location`; it now arrives on `day`.
    fn on_wait(&mut self, _day: Day, _location: &Location) {}

    /// An encounter on `day` at `location` cost `penalty` probability.
    fn on_encounter(&mut self, _day: Day, _location: &Location, _penalty: f64) {}

    /// Called once after the last step.
    fn on_arrival(&mut self, _outcome: &JourneyOutcome) {}
}

/// A [`JourneyObserver`] that does nothing.
pub struct NoopObserver;

impl JourneyObserver for NoopObserver {}

/// One notable event of a simulated journey.
#[derive(Clone, Debug, PartialEq)]
pub enum JourneyEvent {
    Refuel    { day: Day, location: Location },
    Wait      { day: Day, location: Location },
    Encounter { day: Day, location: Location, penalty: f64 },
}

/// Records every event in order, for printing an itinerary.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<JourneyEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encounters(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, JourneyEvent::Encounter { .. }))
            .count()
    }
}

impl JourneyObserver for EventLog {
    fn on_refuel(&mut self, day: Day, location: &Location) {
        self.events.push(JourneyEvent::Refuel { day, location: location.clone() });
    }

    fn on_wait(&mut self, day: Day, location: &Location) {
        self.events.push(JourneyEvent::Wait { day, location: location.clone() });
    }

    fn on_encounter(&mut self, day: Day, location: &Location, penalty: f64) {
        self.events.push(JourneyEvent::Encounter { day, location: location.clone(), penalty });
    }
}
