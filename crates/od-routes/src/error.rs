//! Route-subsystem error type.

use thiserror::Error;

/// Errors produced by `od-routes`.
#[derive(Debug, Error)]
pub enum RoutesError {
    /// The backing store could not be opened or queried.  Never raised for
    /// a location that simply has no routes.
    #[error("route store unavailable: {0}")]
    DataSourceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("route {origin} -> {destination} has non-positive travel time {travel_time}")]
    InvalidRoute {
        origin:      String,
        destination: String,
        travel_time: i64,
    },

    #[error("route data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Enumeration ran past the limit given to
    /// [`Paths::with_time_limit`](crate::Paths::with_time_limit).
    #[error("path enumeration ran past its {limit:?} time limit")]
    DeadlineExceeded { limit: std::time::Duration },
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for RoutesError {
    fn from(e: rusqlite::Error) -> Self {
        RoutesError::DataSourceUnavailable(Box::new(e))
    }
}

pub type RoutesResult<T> = Result<T, RoutesError>;

/// Convert a raw stored travel time into the positive day count edges carry.
pub(crate) fn checked_travel_time(
    origin:      &str,
    destination: &str,
    travel_time: i64,
) -> RoutesResult<u64> {
    if travel_time <= 0 {
        return Err(RoutesError::InvalidRoute {
            origin:      origin.to_owned(),
            destination: destination.to_owned(),
            travel_time,
        });
    }
    Ok(travel_time as u64)
}
