//! CSV route loader.
//!
//! # CSV format
//!
//! One row per stored route, same columns as the SQLite `ROUTES` table:
//!
//! ```csv
//! origin,destination,travel_time
//! Tatooine,Dagobah,6
//! Dagobah,Endor,4
//! Dagobah,Hoth,1
//! Hoth,Endor,1
//! Tatooine,Hoth,6
//! ```
//!
//! Row order is preserved, so neighbor order (and therefore enumeration
//! order) follows the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::checked_travel_time;
use crate::graph::{RouteNetwork, RouteNetworkBuilder};
use crate::RoutesError;

#[derive(Deserialize)]
struct RouteRecord {
    origin:      String,
    destination: String,
    travel_time: i64,
}

/// Load a [`RouteNetwork`] from a CSV file.
pub fn load_routes_csv(path: &Path) -> Result<RouteNetwork, RoutesError> {
    let file = std::fs::File::open(path).map_err(RoutesError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a route table.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<RouteNetwork, RoutesError> {
    let mut csv_reader = ::csv::ReaderBuilder::new().trim(::csv::Trim::All).from_reader(reader);
    let mut builder = RouteNetworkBuilder::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| RoutesError::Parse(e.to_string()))?;
        if row.origin.is_empty() || row.destination.is_empty() {
            return Err(RoutesError::Parse(format!(
                "route {:?} -> {:?} has an empty endpoint",
                row.origin, row.destination
            )));
        }
        let travel_time = checked_travel_time(&row.origin, &row.destination, row.travel_time)?;
        builder.add_route(row.origin, row.destination, travel_time);
    }

    log::debug!("loaded {} routes from CSV", builder.edge_count());
    Ok(builder.build())
}
