//! `od-odds` — best achievable odds over every route.
//!
//! ```text
//! mission.validate()                       -- MalformedMission, nothing run
//! for path in PathEnumerator(graph).enumerate(origin, destination):
//!     check EnumerationLimits               -- LimitExceeded, no partial result
//!     p = JourneySimulator(mission).simulate(path)
//! no paths  → NoPathFound
//! otherwise → 100 × max(p)
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`calculator`]  | `OddsCalculator`, `EnumerationLimits`, `OddsReport`     |
//! | [`config`]      | `VehicleConfig`, `IntelConfig`, `MissionConfig`, `open_routes` |
//! | [`error`]       | `OddsError`, `OddsResult`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use od_odds::{MissionConfig, OddsCalculator, open_routes};
//!
//! let config  = MissionConfig::load(vehicle_path, intel_path)?;
//! let mission = config.to_mission()?;
//! let graph   = open_routes(&config.vehicle.routes_db)?;
//! let odds    = OddsCalculator::new(&*graph).best_odds(&mission)?;
//! ```

pub mod calculator;
pub mod config;
pub mod error;


pub use calculator::{EnumerationLimits, Limit, OddsCalculator, OddsReport};
pub use config::{open_routes, IntelConfig, MissionConfig, SightingRecord, VehicleConfig};
pub use error::{OddsError, OddsResult};
