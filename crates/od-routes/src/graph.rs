//! Route graph access and the in-memory network.
//!
//! # Direction
//!
//! Routes are stored directionally (`origin → destination`) but every route
//! is traversable both ways with the same travel time.  A
//! [`RouteGraph::neighbors`] query therefore unions two views:
//!
//! ```text
//! neighbors(x) = [ (d, t) for each stored (x → d, t) ]   -- forward, store order
//!              ++ [ (o, t) for each stored (o → x, t) ]   -- backward, store order
//! ```
//!
//! The order is part of the contract: path enumeration visits neighbors in
//! exactly this order, so a fixed store always enumerates paths in the same
//! sequence.  Parallel routes between the same pair are all reported.

use rustc_hash::FxHashMap;

use od_core::Location;

use crate::RoutesResult;

// ── Edge / Neighbor ───────────────────────────────────────────────────────────

/// One stored route record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub origin:      Location,
    pub destination: Location,
    /// Days to travel the route.  Always positive.
    pub travel_time: u64,
}

/// A location reachable by exactly one route, with that route's travel time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub location:    Location,
    pub travel_time: u64,
}

impl Neighbor {
    pub fn new(location: impl Into<Location>, travel_time: u64) -> Self {
        Self { location: location.into(), travel_time }
    }
}

// ── RouteGraph trait ──────────────────────────────────────────────────────────

/// Read-only access to a route store.
///
/// Implement this trait to plug in another backing store.  A location that
/// has no routes (or is unknown to the store) yields an empty list; only a
/// failure of the store itself is an error.
pub trait RouteGraph {
    fn neighbors(&self, location: &Location) -> RoutesResult<Vec<Neighbor>>;
}

impl<G: RouteGraph + ?Sized> RouteGraph for &G {
    fn neighbors(&self, location: &Location) -> RoutesResult<Vec<Neighbor>> {
        (**self).neighbors(location)
    }
}

impl<G: RouteGraph + ?Sized> RouteGraph for Box<G> {
    fn neighbors(&self, location: &Location) -> RoutesResult<Vec<Neighbor>> {
        (**self).neighbors(location)
    }
}

// ── RouteNetwork ──────────────────────────────────────────────────────────────

/// In-memory route graph with the bidirectional adjacency precomputed.
///
/// Do not construct directly; use [`RouteNetworkBuilder`] or one of the
/// loaders ([`load_routes_csv`](crate::load_routes_csv),
/// `SqliteRouteGraph::load_network`).
#[derive(Clone, Debug, Default)]
pub struct RouteNetwork {
    /// Stored records in insertion order.
    edges: Vec<Edge>,

    /// Forward neighbors followed by backward neighbors, per location.
    adjacency: FxHashMap<Location, Vec<Neighbor>>,
}

impl RouteNetwork {
    /// Construct a network with no locations or routes.
    pub fn empty() -> Self {
        RouteNetworkBuilder::new().build()
    }

    /// Number of distinct locations that appear in at least one route.
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }
}

impl RouteGraph for RouteNetwork {
    fn neighbors(&self, location: &Location) -> RoutesResult<Vec<Neighbor>> {
        Ok(self.adjacency.get(location).cloned().unwrap_or_default())
    }
}

// ── RouteNetworkBuilder ───────────────────────────────────────────────────────

/// Construct a [`RouteNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use od_core::Location;
/// use od_routes::{RouteGraph, RouteNetworkBuilder};
///
/// let mut b = RouteNetworkBuilder::new();
/// b.add_route("Tatooine", "Dagobah", 6);
/// b.add_route("Dagobah", "Endor", 4);
/// let net = b.build();
/// assert_eq!(net.location_count(), 3);
/// // The Tatooine → Dagobah route is visible from Dagobah too.
/// assert_eq!(net.neighbors(&Location::from("Dagobah")).unwrap().len(), 2);
/// ```
#[derive(Default)]
pub struct RouteNetworkBuilder {
    edges: Vec<Edge>,
}

impl RouteNetworkBuilder {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add a route stored as `origin → destination`.  It is traversable in
    /// both directions once built.
    pub fn add_route(
        &mut self,
        origin:      impl Into<Location>,
        destination: impl Into<Location>,
        travel_time: u64,
    ) -> &mut Self {
        self.edges.push(Edge {
            origin: origin.into(),
            destination: destination.into(),
            travel_time,
        });
        self
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`RouteNetwork`].
    pub fn build(self) -> RouteNetwork {
        let mut adjacency: FxHashMap<Location, Vec<Neighbor>> = FxHashMap::default();

        // Two passes so every location lists all its forward routes before
        // any backward one, each group in insertion order.
        for e in &self.edges {
            adjacency
                .entry(e.origin.clone())
                .or_default()
                .push(Neighbor { location: e.destination.clone(), travel_time: e.travel_time });
            adjacency.entry(e.destination.clone()).or_default();
        }
        for e in &self.edges {
            adjacency
                .entry(e.destination.clone())
                .or_default()
                .push(Neighbor { location: e.origin.clone(), travel_time: e.travel_time });
        }

        RouteNetwork { edges: self.edges, adjacency }
    }
}

impl FromIterator<Edge> for RouteNetwork {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        RouteNetworkBuilder { edges: iter.into_iter().collect() }.build()
    }
}
