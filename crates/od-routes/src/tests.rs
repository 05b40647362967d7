//! Unit tests for od-routes.
//!
//! Most tests use a hand-crafted network; the SQLite tests build a
//! throwaway database under a temp dir.

#[cfg(test)]
mod helpers {
    use crate::{RouteNetwork, RouteNetworkBuilder};

    /// The five-location reference map.
    ///
    /// ```text
    ///   Tatooine ─6─ Dagobah ─4─ Endor
    ///      │           │          │
    ///      6           1          1
    ///      └──────── Hoth ────────┘
    /// ```
    pub fn reference_network() -> RouteNetwork {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("Tatooine", "Dagobah", 6);
        b.add_route("Dagobah", "Endor", 4);
        b.add_route("Dagobah", "Hoth", 1);
        b.add_route("Hoth", "Endor", 1);
        b.add_route("Tatooine", "Hoth", 6);
        b.add_route("Tatooine", "Endor", 7);
        b.build()
    }
}

// ── Graph & builder ────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use od_core::Location;

    use super::helpers::reference_network;
    use crate::{Neighbor, RouteGraph, RouteNetwork, RouteNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RouteNetwork::empty();
        assert_eq!(net.location_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn counts() {
        let net = reference_network();
        assert_eq!(net.location_count(), 4);
        assert_eq!(net.edge_count(), 6);
        assert!(net.contains(&Location::from("Hoth")));
    }

    #[test]
    fn forward_then_backward_order() {
        let net = reference_network();
        let got = net.neighbors(&Location::from("Dagobah")).unwrap();
        assert_eq!(
            got,
            vec![
                Neighbor::new("Endor", 4),    // forward, stored 2nd
                Neighbor::new("Hoth", 1),     // forward, stored 3rd
                Neighbor::new("Tatooine", 6), // backward, stored 1st
            ]
        );
    }

    #[test]
    fn stored_direction_visible_from_both_ends() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("A", "B", 3);
        let net = b.build();
        assert_eq!(net.neighbors(&Location::from("A")).unwrap(), vec![Neighbor::new("B", 3)]);
        assert_eq!(net.neighbors(&Location::from("B")).unwrap(), vec![Neighbor::new("A", 3)]);
    }

    #[test]
    fn unknown_location_is_empty_not_error() {
        let net = reference_network();
        assert!(net.neighbors(&Location::from("Alderaan")).unwrap().is_empty());
    }

    #[test]
    fn parallel_routes_all_reported() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("A", "B", 3);
        b.add_route("B", "A", 5);
        let net = b.build();
        let got = net.neighbors(&Location::from("A")).unwrap();
        assert_eq!(got, vec![Neighbor::new("B", 3), Neighbor::new("B", 5)]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use std::io::Cursor;

    use od_core::Location;

    use crate::{load_routes_reader, Neighbor, RouteGraph, RoutesError};

    #[test]
    fn loads_rows_in_order() {
        let data = "origin,destination,travel_time\nA,B,2\nA,C,3\n";
        let net = load_routes_reader(Cursor::new(data)).unwrap();
        assert_eq!(net.edge_count(), 2);
        assert_eq!(
            net.neighbors(&Location::from("A")).unwrap(),
            vec![Neighbor::new("B", 2), Neighbor::new("C", 3)]
        );
    }

    #[test]
    fn trims_whitespace() {
        let data = "origin,destination,travel_time\n A , B , 2 \n";
        let net = load_routes_reader(Cursor::new(data)).unwrap();
        assert!(net.contains(&Location::from("A")));
    }

    #[test]
    fn non_positive_travel_time_rejected() {
        let data = "origin,destination,travel_time\nA,B,0\n";
        match load_routes_reader(Cursor::new(data)) {
            Err(RoutesError::InvalidRoute { travel_time, .. }) => assert_eq!(travel_time, 0),
            other => panic!("expected InvalidRoute, got {other:?}"),
        }
    }

    #[test]
    fn garbage_travel_time_is_parse_error() {
        let data = "origin,destination,travel_time\nA,B,soon\n";
        assert!(matches!(load_routes_reader(Cursor::new(data)), Err(RoutesError::Parse(_))));
    }
}

// ── Path enumeration ──────────────────────────────────────────────────────────

#[cfg(test)]
mod enumeration {
    use std::collections::HashSet;

    use od_core::Location;

    use super::helpers::reference_network;
    use crate::{Path, PathEnumerator, RouteNetworkBuilder};

    fn all_paths(origin: &str, destination: &str) -> Vec<Path> {
        let net = reference_network();
        PathEnumerator::new(&net)
            .enumerate(&Location::from(origin), &Location::from(destination))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn reference_map_paths_in_dfs_order() {
        let paths = all_paths("Tatooine", "Endor");
        let expected = vec![
            Path::from_pairs([("Dagobah", 6), ("Endor", 4)]),
            Path::from_pairs([("Dagobah", 6), ("Hoth", 1), ("Endor", 1)]),
            Path::from_pairs([("Hoth", 6), ("Endor", 1)]),
            Path::from_pairs([("Hoth", 6), ("Dagobah", 1), ("Endor", 4)]),
            Path::from_pairs([("Endor", 7)]),
        ];
        assert_eq!(paths, expected);
    }

    #[test]
    fn never_repeats_a_location() {
        // Fully connected 5-node graph maximises revisit opportunities.
        let names = ["A", "B", "C", "D", "E"];
        let mut b = RouteNetworkBuilder::new();
        for (i, x) in names.iter().enumerate() {
            for y in &names[i + 1..] {
                b.add_route(*x, *y, 1);
            }
        }
        let net = b.build();
        let paths: Vec<Path> = PathEnumerator::new(&net)
            .enumerate(&Location::from("A"), &Location::from("E"))
            .collect::<Result<_, _>>()
            .unwrap();

        // 1 + 3 + 3·2 + 3·2·1 simple paths from A to E in K5.
        assert_eq!(paths.len(), 16);
        for p in &paths {
            let mut seen: HashSet<&Location> = HashSet::new();
            assert!(p.locations().all(|l| seen.insert(l)), "repeat in {p}");
            assert!(p.locations().all(|l| l.as_str() != "A"), "origin in {p}");
            assert_eq!(p.destination().map(Location::as_str), Some("E"));
        }
    }

    #[test]
    fn unreachable_yields_nothing() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("A", "B", 1);
        b.add_route("C", "D", 1);
        let net = b.build();
        let mut it = PathEnumerator::new(&net).enumerate(&Location::from("A"), &Location::from("D"));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn origin_equals_destination_is_one_trivial_path() {
        let paths = all_paths("Endor", "Endor");
        assert_eq!(paths, vec![Path::trivial()]);
        assert!(paths[0].is_trivial());
    }

    #[test]
    fn enumeration_is_restartable() {
        let net = reference_network();
        let e = PathEnumerator::new(&net);
        let (o, d) = (Location::from("Tatooine"), Location::from("Endor"));
        let first: Vec<_> = e.enumerate(&o, &d).map(Result::unwrap).collect();
        let second: Vec<_> = e.enumerate(&o, &d).map(Result::unwrap).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_routes_give_distinct_paths() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("A", "B", 3);
        b.add_route("B", "A", 5);
        let net = b.build();
        let paths: Vec<Path> = PathEnumerator::new(&net)
            .enumerate(&Location::from("A"), &Location::from("B"))
            .map(Result::unwrap)
            .collect();
        assert_eq!(paths, vec![Path::from_pairs([("B", 3)]), Path::from_pairs([("B", 5)])]);
    }

    #[test]
    fn path_helpers() {
        let p = Path::from_pairs([("Dagobah", 6), ("Hoth", 1), ("Endor", 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.total_travel_time(), 8);
        assert_eq!(p.to_string(), "Dagobah(+6) → Hoth(+1) → Endor(+1)");
        assert_eq!(Path::trivial().to_string(), "(trivial)");
    }
}

// ── Store failures ────────────────────────────────────────────────────────────

#[cfg(test)]
mod failures {
    use std::time::Duration;

    use od_core::Location;

    use super::helpers::reference_network;
    use crate::{Neighbor, PathEnumerator, RouteGraph, RouteNetworkBuilder, RoutesError, RoutesResult};

    /// A store that fails every query.
    struct Offline;

    impl RouteGraph for Offline {
        fn neighbors(&self, _location: &Location) -> RoutesResult<Vec<Neighbor>> {
            Err(RoutesError::DataSourceUnavailable("connection refused".into()))
        }
    }

    #[test]
    fn error_yielded_once_then_exhausted() {
        let g = Offline;
        let mut it = PathEnumerator::new(&g).enumerate(&Location::from("A"), &Location::from("B"));
        assert!(matches!(it.next(), Some(Err(RoutesError::DataSourceUnavailable(_)))));
        assert!(it.next().is_none());
        assert_eq!(it.depth(), 0);
    }

    #[test]
    fn time_limit_stops_search_that_finds_nothing() {
        // K8 with the destination in a separate component: every branch is
        // explored and none reaches D.
        let names = ["N0", "N1", "N2", "N3", "N4", "N5", "N6", "N7"];
        let mut b = RouteNetworkBuilder::new();
        for (i, x) in names.iter().enumerate() {
            for y in &names[i + 1..] {
                b.add_route(*x, *y, 1);
            }
        }
        b.add_route("X", "D", 1);
        let net = b.build();

        let mut it = PathEnumerator::new(&net)
            .enumerate(&Location::from("N0"), &Location::from("D"))
            .with_time_limit(Duration::ZERO);
        match it.next() {
            Some(Err(RoutesError::DeadlineExceeded { limit })) => assert_eq!(limit, Duration::ZERO),
            other => panic!("expected DeadlineExceeded, got {other:?}"),
        }
        assert!(it.next().is_none());
        assert_eq!(it.depth(), 0);
    }

    #[test]
    fn generous_time_limit_changes_nothing() {
        let net = reference_network();
        let (o, d) = (Location::from("Tatooine"), Location::from("Endor"));
        let unlimited: Vec<_> = PathEnumerator::new(&net).enumerate(&o, &d).map(Result::unwrap).collect();
        let limited: Vec<_> = PathEnumerator::new(&net)
            .enumerate(&o, &d)
            .with_time_limit(Duration::from_secs(3600))
            .map(Result::unwrap)
            .collect();
        assert_eq!(limited, unlimited);
        assert_eq!(limited.len(), 5);
    }

    #[test]
    fn unrepresentable_time_limit_is_no_limit() {
        let net = reference_network();
        let paths = PathEnumerator::new(&net)
            .enumerate(&Location::from("Tatooine"), &Location::from("Endor"))
            .with_time_limit(Duration::MAX)
            .count();
        assert_eq!(paths, 5);
    }

    #[test]
    fn trivial_path_never_touches_store() {
        let g = Offline;
        let paths: Vec<_> = PathEnumerator::new(&g)
            .enumerate(&Location::from("A"), &Location::from("A"))
            .collect();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].as_ref().unwrap().is_trivial());
    }
}

// ── SQLite store ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_store {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use od_core::Location;

    use crate::{Neighbor, Path, PathEnumerator, RouteGraph, RoutesError, SqliteRouteGraph};

    fn universe_db(rows: &[(&str, &str, i64)]) -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("universe.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE ROUTES (origin TEXT, destination TEXT, travel_time UNSIGNED INTEGER);",
        )
        .unwrap();
        for (o, d, t) in rows {
            conn.execute(
                "INSERT INTO ROUTES (origin, destination, travel_time) VALUES (?1, ?2, ?3)",
                rusqlite::params![o, d, t],
            )
            .unwrap();
        }
        (dir, path)
    }

    #[test]
    fn neighbors_union_both_columns() {
        let (_dir, path) = universe_db(&[("A", "B", 2), ("C", "A", 5)]);
        let g = SqliteRouteGraph::open(&path).unwrap();
        assert_eq!(
            g.neighbors(&Location::from("A")).unwrap(),
            vec![Neighbor::new("B", 2), Neighbor::new("C", 5)]
        );
        assert!(g.neighbors(&Location::from("Z")).unwrap().is_empty());
    }

    #[test]
    fn enumerates_same_paths_as_in_memory_snapshot() {
        let (_dir, path) = universe_db(&[
            ("Tatooine", "Dagobah", 6),
            ("Dagobah", "Endor", 4),
            ("Dagobah", "Hoth", 1),
            ("Hoth", "Endor", 1),
            ("Tatooine", "Hoth", 6),
            ("Tatooine", "Endor", 7),
        ]);
        let g = SqliteRouteGraph::open(&path).unwrap();
        let (o, d) = (Location::from("Tatooine"), Location::from("Endor"));

        let live: Vec<Path> = PathEnumerator::new(&g).enumerate(&o, &d).map(Result::unwrap).collect();
        let snapshot = g.load_network().unwrap();
        let mem: Vec<Path> =
            PathEnumerator::new(&snapshot).enumerate(&o, &d).map(Result::unwrap).collect();

        assert_eq!(live.len(), 5);
        assert_eq!(live, mem);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let res = SqliteRouteGraph::open(&dir.path().join("nope.db"));
        assert!(matches!(res, Err(RoutesError::DataSourceUnavailable(_))));
        assert!(!dir.path().join("nope.db").exists());
    }

    #[test]
    fn missing_table_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path).unwrap().execute_batch("CREATE TABLE OTHER (x INTEGER);").unwrap();
        assert!(matches!(
            SqliteRouteGraph::open(&path),
            Err(RoutesError::DataSourceUnavailable(_))
        ));
    }

    #[test]
    fn negative_travel_time_rejected() {
        let (_dir, path) = universe_db(&[("A", "B", -1)]);
        let g = SqliteRouteGraph::open(&path).unwrap();
        assert!(matches!(
            g.neighbors(&Location::from("A")),
            Err(RoutesError::InvalidRoute { .. })
        ));
    }

    #[test]
    fn invalid_row_reported_in_stored_order_from_either_end() {
        let (_dir, path) = universe_db(&[("A", "B", 0)]);
        let g = SqliteRouteGraph::open(&path).unwrap();
        for from in ["A", "B"] {
            match g.neighbors(&Location::from(from)) {
                Err(RoutesError::InvalidRoute { origin, destination, travel_time }) => {
                    assert_eq!((origin.as_str(), destination.as_str(), travel_time), ("A", "B", 0));
                }
                other => panic!("expected InvalidRoute from {from}, got {other:?}"),
            }
        }
    }
}
