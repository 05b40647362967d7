//! Best-odds orchestration.

use std::fmt;
use std::time::{Duration, Instant};

use od_core::MissionParameters;
use od_journey::{JourneyOutcome, JourneySimulator, NoopObserver};
use od_routes::{Path, PathEnumerator, RouteGraph, RoutesError};

use crate::{OddsError, OddsResult};

// ── Limits ────────────────────────────────────────────────────────────────────

/// Caller-imposed bounds on path enumeration.
///
/// Enumeration is exponential in the worst case; these are the only guard
/// against a combinatorial blow-up.  `max_paths` is checked each time a path
/// is produced.  `deadline` is checked on every step of the search, so it
/// also fires while no path is being found.  The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// Fail once more than this many paths are found.
    pub max_paths: Option<usize>,
    /// Fail once enumeration has run for this long.
    pub deadline:  Option<Duration>,
}

impl EnumerationLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_paths(mut self, n: usize) -> Self {
        self.max_paths = Some(n);
        self
    }

    pub fn with_deadline(mut self, d: Duration) -> Self {
        self.deadline = Some(d);
        self
    }
}

/// Which limit stopped an enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    MaxPaths(usize),
    Deadline(Duration),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::MaxPaths(n) => write!(f, "more than {n} paths"),
            Limit::Deadline(d) => write!(f, "deadline of {d:?} passed"),
        }
    }
}

// ── OddsReport ────────────────────────────────────────────────────────────────

/// Full result of an odds computation.
#[derive(Clone, Debug)]
pub struct OddsReport {
    /// Best success probability as a percentage in `[0, 100]`.
    pub percent:         f64,
    pub paths_evaluated: usize,
    /// First path (in enumeration order) that reaches `percent`.
    pub best_path:       Path,
    pub best_outcome:    JourneyOutcome,
}

// ── OddsCalculator ────────────────────────────────────────────────────────────

/// Runs every simple path through the journey simulator and keeps the best.
pub struct OddsCalculator<'g, G: RouteGraph + ?Sized> {
    graph:  &'g G,
    limits: EnumerationLimits,
}

impl<'g, G: RouteGraph + ?Sized> OddsCalculator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph, limits: EnumerationLimits::default() }
    }

    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Best odds of reaching the destination in time, as a percentage.
    pub fn best_odds(&self, mission: &MissionParameters) -> OddsResult<f64> {
        self.evaluate(mission).map(|r| r.percent)
    }

    /// Like [`best_odds`](Self::best_odds) but keeps the winning path.
    pub fn evaluate(&self, mission: &MissionParameters) -> OddsResult<OddsReport> {
        mission.validate()?;

        let started = Instant::now();
        let simulator = JourneySimulator::new(mission);
        let mut best: Option<(Path, JourneyOutcome)> = None;
        let mut paths = 0usize;

        let mut enumeration = PathEnumerator::new(self.graph).enumerate(&mission.origin, &mission.destination);
        if let Some(deadline) = self.limits.deadline {
            enumeration = enumeration.with_time_limit(deadline);
        }

        for path in enumeration {
            let path = match path {
                Ok(path) => path,
                Err(RoutesError::DeadlineExceeded { limit }) => {
                    return Err(OddsError::LimitExceeded { paths, limit: Limit::Deadline(limit) });
                }
                Err(e) => return Err(e.into()),
            };
            self.check_limits(paths + 1, started)?;
            paths += 1;

            let outcome = simulator.simulate_with(&path, &mut NoopObserver);
            log::debug!("path #{paths} {path}: {:.2}%", outcome.percent());

            if best.as_ref().is_none_or(|(_, b)| outcome.probability > b.probability) {
                best = Some((path, outcome));
            }
        }

        let Some((best_path, best_outcome)) = best else {
            return Err(OddsError::NoPathFound {
                origin:      mission.origin.clone(),
                destination: mission.destination.clone(),
            });
        };

        let percent = best_outcome.percent();
        log::info!(
            "{} → {}: best odds {percent:.2}% over {paths} paths via {best_path}",
            mission.origin,
            mission.destination,
        );
        Ok(OddsReport { percent, paths_evaluated: paths, best_path, best_outcome })
    }

    /// `found` is the count including the path just produced.
    fn check_limits(&self, found: usize, started: Instant) -> OddsResult<()> {
        if let Some(max) = self.limits.max_paths {
            if found > max {
                return Err(OddsError::LimitExceeded { paths: max, limit: Limit::MaxPaths(max) });
            }
        }
        if let Some(deadline) = self.limits.deadline {
            if started.elapsed() >= deadline {
                return Err(OddsError::LimitExceeded {
                    paths: found - 1,
                    limit: Limit::Deadline(deadline),
                });
            }
        }
        Ok(())
    }
}
