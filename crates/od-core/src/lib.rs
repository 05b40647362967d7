//! `od-core` — foundational types for the route odds workspace.
//!
//! This crate is a dependency of every other `od-*` crate.  It has no `od-*`
//! dependencies and minimal external ones (`rustc-hash` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `Location`                                            |
//! | [`time`]        | `Day`                                                 |
//! | [`mission`]     | `Sighting`, `SightingIndex`, `MissionParameters`      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the value types.        |

pub mod error;
pub mod ids;
pub mod mission;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::Location;
pub use mission::{MissionParameters, Sighting, SightingIndex};
pub use time::Day;
