//! SQLite route store (feature `sqlite`).
//!
//! Expects a `ROUTES` table:
//!
//! ```sql
//! CREATE TABLE ROUTES (
//!     origin      TEXT    NOT NULL,
//!     destination TEXT    NOT NULL,
//!     travel_time INTEGER NOT NULL
//! );
//! ```
//!
//! Each [`RouteGraph::neighbors`] call issues two indexed-by-column queries
//! (by origin, then by destination) and concatenates the results, both in
//! `rowid` order.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use od_core::Location;

use crate::error::checked_travel_time;
use crate::graph::{Neighbor, RouteGraph, RouteNetwork, RouteNetworkBuilder};
use crate::RoutesResult;

const FORWARD_SQL: &str =
    "SELECT destination, travel_time FROM ROUTES WHERE origin = ?1 ORDER BY rowid";
const BACKWARD_SQL: &str =
    "SELECT origin, travel_time FROM ROUTES WHERE destination = ?1 ORDER BY rowid";

/// Which stored column the queried location matched.
#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn sql(self) -> &'static str {
        match self {
            Direction::Forward => FORWARD_SQL,
            Direction::Backward => BACKWARD_SQL,
        }
    }
}

/// Queries a read-only SQLite route store on demand.
pub struct SqliteRouteGraph {
    conn: Connection,
}

impl SqliteRouteGraph {
    /// Open the database at `path` read-only.
    ///
    /// Fails with [`RoutesError::DataSourceUnavailable`](crate::RoutesError)
    /// if the file does not exist or has no usable `ROUTES` table; the file
    /// is never created.
    pub fn open(path: &Path) -> RoutesResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::debug!("opened route store {}", path.display());
        Self::from_connection(conn)
    }

    /// Wrap an already-open connection (e.g. an in-memory database).
    pub fn from_connection(conn: Connection) -> RoutesResult<Self> {
        // Surface a missing table or column now rather than mid-enumeration.
        conn.prepare("SELECT origin, destination, travel_time FROM ROUTES LIMIT 0")?;
        Ok(Self { conn })
    }

    /// Read the whole table into an in-memory [`RouteNetwork`].
    pub fn load_network(&self) -> RoutesResult<RouteNetwork> {
        let mut stmt = self
            .conn
            .prepare("SELECT origin, destination, travel_time FROM ROUTES ORDER BY rowid")?;
        let rows = stmt.query_map([], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?, r.get::<_, i64>(2)?))
        })?;

        let mut builder = RouteNetworkBuilder::new();
        for row in rows {
            let (origin, destination, raw) = row?;
            let travel_time = checked_travel_time(&origin, &destination, raw)?;
            builder.add_route(origin, destination, travel_time);
        }
        Ok(builder.build())
    }

    fn query(&self, direction: Direction, location: &Location, out: &mut Vec<Neighbor>) -> RoutesResult<()> {
        let mut stmt = self.conn.prepare_cached(direction.sql())?;
        let rows = stmt.query_map([location.as_str()], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?))
        })?;
        for row in rows {
            let (other, raw) = row?;
            // Report bad rows with their endpoints as stored.
            let travel_time = match direction {
                Direction::Forward => checked_travel_time(location.as_str(), &other, raw)?,
                Direction::Backward => checked_travel_time(&other, location.as_str(), raw)?,
            };
            out.push(Neighbor { location: Location::from(other), travel_time });
        }
        Ok(())
    }
}

impl RouteGraph for SqliteRouteGraph {
    fn neighbors(&self, location: &Location) -> RoutesResult<Vec<Neighbor>> {
        let mut out = Vec::new();
        self.query(Direction::Forward, location, &mut out)?;
        self.query(Direction::Backward, location, &mut out)?;
        Ok(out)
    }
}
