//! Mission document loading.
//!
//! A mission is described by two JSON documents.
//!
//! **Vehicle** — where to go, with what tank, over which route store:
//!
//! ```json
//! { "autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "universe.db" }
//! ```
//!
//! **Intel** — how long there is and where adversaries will be:
//!
//! ```json
//! { "countdown": 7,
//!   "bounty_hunters": [ { "planet": "Hoth", "day": 6 }, { "planet": "Hoth", "day": 7 } ] }
//! ```
//!
//! A relative `routes_db` is resolved against the vehicle document's
//! directory.  A `.csv` route store is loaded with the CSV loader; anything
//! else is opened as SQLite.  Unknown fields are ignored; missing or
//! mistyped ones are reported as [`OddsError::MalformedMission`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use od_core::{MissionParameters, Sighting};
use od_routes::{load_routes_csv, RouteGraph, SqliteRouteGraph};

use crate::{OddsError, OddsResult};

// ── Documents ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Deserialize)]
pub struct VehicleConfig {
    /// Days of travel a full tank allows.
    pub autonomy:  u64,
    pub departure: String,
    pub arrival:   String,
    pub routes_db: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SightingRecord {
    pub planet: String,
    pub day:    u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IntelConfig {
    pub countdown:      u64,
    pub bounty_hunters: Vec<SightingRecord>,
}

impl VehicleConfig {
    pub fn from_reader<R: Read>(reader: R) -> OddsResult<Self> {
        parse_document("vehicle", reader)
    }

    /// Load from `path`, resolving a relative `routes_db` next to it.
    pub fn load(path: &Path) -> OddsResult<Self> {
        let mut config: Self = Self::from_reader(open(path)?)?;
        if config.routes_db.is_relative() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            config.routes_db = dir.join(&config.routes_db);
        }
        Ok(config)
    }
}

impl IntelConfig {
    pub fn from_reader<R: Read>(reader: R) -> OddsResult<Self> {
        parse_document("intel", reader)
    }

    pub fn load(path: &Path) -> OddsResult<Self> {
        Self::from_reader(open(path)?)
    }
}

// ── MissionConfig ─────────────────────────────────────────────────────────────

/// Both documents of one mission.
#[derive(Clone, Debug)]
pub struct MissionConfig {
    pub vehicle: VehicleConfig,
    pub intel:   IntelConfig,
}

impl MissionConfig {
    pub fn load(vehicle_path: &Path, intel_path: &Path) -> OddsResult<Self> {
        Ok(Self {
            vehicle: VehicleConfig::load(vehicle_path)?,
            intel:   IntelConfig::load(intel_path)?,
        })
    }

    /// Build validated [`MissionParameters`].
    pub fn to_mission(&self) -> OddsResult<MissionParameters> {
        let mission = MissionParameters::new(
            self.vehicle.departure.as_str(),
            self.vehicle.arrival.as_str(),
            self.vehicle.autonomy,
            self.intel.countdown,
            self.intel
                .bounty_hunters
                .iter()
                .map(|h| Sighting::new(h.day, h.planet.as_str())),
        );
        mission.validate()?;
        Ok(mission)
    }
}

// ── Route store ───────────────────────────────────────────────────────────────

/// Open the route store at `path`: CSV by extension, SQLite otherwise.
pub fn open_routes(path: &Path) -> OddsResult<Box<dyn RouteGraph>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(Box::new(load_routes_csv(path)?))
    } else {
        Ok(Box::new(SqliteRouteGraph::open(path)?))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(path: &Path) -> OddsResult<File> {
    File::open(path).map_err(|source| OddsError::Io { path: path.to_path_buf(), source })
}

fn parse_document<T: DeserializeOwned, R: Read>(document: &str, reader: R) -> OddsResult<T> {
    serde_json::from_reader(reader).map_err(|e| OddsError::MalformedMission {
        field:  format!("{document} document"),
        reason: e.to_string(),
    })
}
