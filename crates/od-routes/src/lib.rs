//! `od-routes` — route graph, storage backends, and path enumeration.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `RouteGraph` trait, `Neighbor`, `RouteNetwork` + builder     |
//! | [`paths`]  | `Path`, `Step`, `PathEnumerator`, `Paths` iterator           |
//! | [`csv`]    | `load_routes_csv`, `load_routes_reader`                      |
//! | [`sqlite`] | `SqliteRouteGraph` (feature = `"sqlite"` only)               |
//! | [`error`]  | `RoutesError`, `RoutesResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                      |
//! |----------|-------------------------------------------------------------|
//! | `sqlite` | SQLite route store via `rusqlite` (on by default).          |
//! | `serde`  | Derives `Serialize`/`Deserialize` on `od-core` types.       |

pub mod csv;
pub mod error;
pub mod graph;
pub mod paths;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use crate::csv::{load_routes_csv, load_routes_reader};
pub use error::{RoutesError, RoutesResult};
pub use graph::{Edge, Neighbor, RouteGraph, RouteNetwork, RouteNetworkBuilder};
pub use paths::{Path, PathEnumerator, Paths, Step};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRouteGraph;
