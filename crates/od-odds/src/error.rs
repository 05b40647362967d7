//! Odds-subsystem error type.

use std::path::PathBuf;

use thiserror::Error;

use od_core::{CoreError, Location};
use od_routes::RoutesError;

use crate::Limit;

#[derive(Debug, Error)]
pub enum OddsError {
    /// The route store failed; surfaced unchanged.
    #[error(transparent)]
    Routes(#[from] RoutesError),

    #[error("malformed mission: `{field}` {reason}")]
    MalformedMission {
        field:  String,
        reason: String,
    },

    /// No route connects the endpoints at all.  Distinct from a computed
    /// 0 %, which means routes exist but none arrives in time.
    #[error("no route from {origin} to {destination}")]
    NoPathFound {
        origin:      Location,
        destination: Location,
    },

    #[error("path enumeration stopped after {paths} paths: {limit}")]
    LimitExceeded {
        paths: usize,
        limit: Limit,
    },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },
}

impl From<CoreError> for OddsError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::MalformedMission { field, reason } => {
                OddsError::MalformedMission { field: field.to_owned(), reason }
            }
        }
    }
}

pub type OddsResult<T> = Result<T, OddsError>;
