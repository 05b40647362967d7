//! Mission parameters and the sighting index.
//!
//! A mission is loaded once per invocation and stays immutable while every
//! candidate path is evaluated against it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{CoreError, CoreResult, Day, Location};

// ── Sighting ──────────────────────────────────────────────────────────────────

/// A known adversary presence on an exact day at an exact location.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sighting {
    pub day:      Day,
    pub location: Location,
}

impl Sighting {
    pub fn new(day: u64, location: impl Into<Location>) -> Self {
        Self { day: Day(day), location: location.into() }
    }
}

// ── SightingIndex ─────────────────────────────────────────────────────────────

/// Answers "is there a sighting at (day, location)?" in O(1).
///
/// Keyed by location first so lookups borrow the caller's `&Location`
/// without cloning it into a composite key.  Duplicate sightings collapse.
#[derive(Clone, Debug, Default)]
pub struct SightingIndex {
    by_location: FxHashMap<Location, FxHashSet<Day>>,
    len:         usize,
}

impl SightingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sighting: Sighting) {
        if self.by_location.entry(sighting.location).or_default().insert(sighting.day) {
            self.len += 1;
        }
    }

    #[inline]
    pub fn contains(&self, day: Day, location: &Location) -> bool {
        self.by_location
            .get(location)
            .is_some_and(|days| days.contains(&day))
    }

    /// Number of distinct (day, location) pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All sightings, sorted by day then location.
    pub fn to_vec(&self) -> Vec<Sighting> {
        let mut out: Vec<Sighting> = self
            .by_location
            .iter()
            .flat_map(|(loc, days)| {
                days.iter().map(move |&day| Sighting { day, location: loc.clone() })
            })
            .collect();
        out.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.location.cmp(&b.location)));
        out
    }
}

impl FromIterator<Sighting> for SightingIndex {
    fn from_iter<I: IntoIterator<Item = Sighting>>(iter: I) -> Self {
        let mut index = SightingIndex::new();
        for s in iter {
            index.insert(s);
        }
        index
    }
}

// ── MissionParameters ─────────────────────────────────────────────────────────

/// Everything a journey is evaluated against.
///
/// Construct with [`MissionParameters::new`] and check with
/// [`validate`](Self::validate) before simulating; the simulator itself
/// assumes a well-formed mission.
#[derive(Clone, Debug)]
pub struct MissionParameters {
    pub origin:      Location,
    pub destination: Location,

    /// Days of travel a full tank allows.  Must be positive.
    pub base_autonomy: u64,

    /// Days available before the mission fails.  Arriving on the countdown
    /// day itself still counts as on time.
    pub countdown: u64,

    pub sightings: SightingIndex,
}

impl MissionParameters {
    pub fn new(
        origin:        impl Into<Location>,
        destination:   impl Into<Location>,
        base_autonomy: u64,
        countdown:     u64,
        sightings:     impl IntoIterator<Item = Sighting>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            base_autonomy,
            countdown,
            sightings: sightings.into_iter().collect(),
        }
    }

    /// The last day on which arrival still counts as success.
    #[inline]
    pub fn deadline(&self) -> Day {
        Day(self.countdown)
    }

    /// Reject missions the simulator cannot evaluate meaningfully.
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_autonomy == 0 {
            return Err(CoreError::MalformedMission {
                field:  "autonomy",
                reason: "must be a positive number of days".into(),
            });
        }
        if i64::try_from(self.base_autonomy).is_err() {
            return Err(CoreError::MalformedMission {
                field:  "autonomy",
                reason: format!("must not exceed {} days", i64::MAX),
            });
        }
        if self.origin.is_empty() {
            return Err(CoreError::MalformedMission {
                field:  "origin",
                reason: "must not be empty".into(),
            });
        }
        if self.destination.is_empty() {
            return Err(CoreError::MalformedMission {
                field:  "destination",
                reason: "must not be empty".into(),
            });
        }
        if self.sightings.by_location.keys().any(Location::is_empty) {
            return Err(CoreError::MalformedMission {
                field:  "sightings",
                reason: "contains a sighting with an empty location".into(),
            });
        }
        Ok(())
    }
}
