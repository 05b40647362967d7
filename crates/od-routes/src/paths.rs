//! Simple-path enumeration.
//!
//! # Algorithm
//!
//! Exhaustive depth-first search from the origin.  The partial path is the
//! explicit stack of [`Frame`]s: a frame is pushed when the search descends
//! into a location and popped once all of its neighbors have been tried, so
//! every branch sees only its own prefix.
//!
//! ```text
//! enter(x, t):
//!   x == destination  → emit the steps on the stack (origin excluded) + (x, t)
//!   otherwise         → push Frame { x, t, neighbors(x) }
//!
//! next():
//!   take the top frame's next untried neighbor n
//!   n already on the stack → skip
//!   otherwise              → enter(n.location, n.travel_time)
//! ```
//!
//! No pruning and no memoization: the path count is exponential in the
//! worst case.  Callers bound the work by consuming the lazy [`Paths`]
//! iterator only as far as they are willing to go, or by giving it a time
//! limit with [`Paths::with_time_limit`], which is checked on every step of
//! the search whether or not a path is found.

use std::fmt;
use std::iter::FusedIterator;
use std::time::{Duration, Instant};

use od_core::Location;

use crate::graph::{Neighbor, RouteGraph};
use crate::{RoutesError, RoutesResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// One hop of a path: the location reached and the travel time of the route
/// used to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub location:    Location,
    pub travel_time: u64,
}

impl Step {
    pub fn new(location: impl Into<Location>, travel_time: u64) -> Self {
        Self { location: location.into(), travel_time }
    }
}

/// A simple path from an (implicit) origin to a destination.
///
/// The origin contributes no step; it anchors day 0.  The first step's
/// travel time is the time from the origin to that step, and the last step
/// is the destination.  A path with no steps is the trivial path of a
/// journey whose origin is its destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The zero-step path.
    pub fn trivial() -> Self {
        Self { steps: Vec::new() }
    }

    /// Build a path from `(location, travel_time)` pairs.
    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<Location>,
        I: IntoIterator<Item = (L, u64)>,
    {
        Self { steps: pairs.into_iter().map(|(l, t)| Step::new(l, t)).collect() }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the path has no steps.
    pub fn is_trivial(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the per-step travel times (no refuels or waits), saturating.
    pub fn total_travel_time(&self) -> u64 {
        self.steps.iter().fold(0u64, |acc, s| acc.saturating_add(s.travel_time))
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.steps.iter().map(|s| &s.location)
    }

    /// The last location reached, or `None` for the trivial path.
    pub fn destination(&self) -> Option<&Location> {
        self.steps.last().map(|s| &s.location)
    }
}

impl fmt::Display for Path {
    /// `Dagobah(+6) → Hoth(+1) → Endor(+1)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("(trivial)");
        }
        for (i, s) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{}(+{})", s.location, s.travel_time)?;
        }
        Ok(())
    }
}

// ── PathEnumerator ────────────────────────────────────────────────────────────

/// Enumerates every simple path between two locations of a [`RouteGraph`].
pub struct PathEnumerator<'g, G: RouteGraph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: RouteGraph + ?Sized> PathEnumerator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Start a fresh enumeration.  Each call restarts from the origin.
    pub fn enumerate(&self, origin: &Location, destination: &Location) -> Paths<'g, G> {
        Paths {
            graph:          self.graph,
            destination:    destination.clone(),
            pending_origin: Some(origin.clone()),
            stack:          Vec::new(),
            expires:        None,
        }
    }
}

// ── Paths iterator ────────────────────────────────────────────────────────────

/// A location on the current partial path together with its untried
/// neighbors.
struct Frame {
    location:    Location,
    travel_time: u64,
    neighbors:   Vec<Neighbor>,
    cursor:      usize,
}

/// Lazy iterator over the simple paths found by [`PathEnumerator`].
///
/// Yields `Err` at most once (when the store fails or the time limit
/// passes), after which it is exhausted.
pub struct Paths<'g, G: RouteGraph + ?Sized> {
    graph:          &'g G,
    destination:    Location,
    pending_origin: Option<Location>,
    stack:          Vec<Frame>,
    /// Instant the time limit runs out, with the limit itself for reporting.
    expires:        Option<(Instant, Duration)>,
}

impl<'g, G: RouteGraph + ?Sized> Paths<'g, G> {
    /// Stop with [`RoutesError::DeadlineExceeded`] once `limit` has elapsed
    /// from now.  A limit too large to represent is no limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.expires = Instant::now().checked_add(limit).map(|at| (at, limit));
        self
    }

    /// Current depth of the partial path (origin included).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn on_path(&self, location: &Location) -> bool {
        self.stack.iter().any(|f| f.location == *location)
    }

    /// Descend into `location`.  Returns the completed path if it is the
    /// destination; otherwise pushes a frame and returns `None`.
    fn enter(&mut self, location: Location, travel_time: u64) -> RoutesResult<Option<Path>> {
        if location == self.destination {
            let steps = self
                .stack
                .iter()
                .skip(1)
                .map(|f| Step { location: f.location.clone(), travel_time: f.travel_time })
                .chain((!self.stack.is_empty()).then_some(Step { location, travel_time }))
                .collect();
            return Ok(Some(Path { steps }));
        }

        let neighbors = self.graph.neighbors(&location)?;
        self.stack.push(Frame { location, travel_time, neighbors, cursor: 0 });
        Ok(None)
    }

    fn expired(&self) -> Option<Duration> {
        self.expires
            .and_then(|(at, limit)| (Instant::now() >= at).then_some(limit))
    }

    fn fail(&mut self, e: RoutesError) -> Option<RoutesResult<Path>> {
        self.stack.clear();
        Some(Err(e))
    }
}

impl<G: RouteGraph + ?Sized> Iterator for Paths<'_, G> {
    type Item = RoutesResult<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(origin) = self.pending_origin.take() {
            match self.enter(origin, 0) {
                Ok(Some(path)) => return Some(Ok(path)),
                Ok(None) => {}
                Err(e) => return self.fail(e),
            }
        }

        loop {
            if self.stack.is_empty() {
                return None;
            }
            if let Some(limit) = self.expired() {
                return self.fail(RoutesError::DeadlineExceeded { limit });
            }

            let frame = self.stack.last_mut()?;
            let Some(next) = frame.neighbors.get(frame.cursor).cloned() else {
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;

            if self.on_path(&next.location) {
                continue;
            }
            match self.enter(next.location, next.travel_time) {
                Ok(Some(path)) => return Some(Ok(path)),
                Ok(None) => {}
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl<G: RouteGraph + ?Sized> FusedIterator for Paths<'_, G> {}
