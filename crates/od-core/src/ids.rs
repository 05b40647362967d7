//! Location identifier.
//!
//! Locations are opaque names taken verbatim from the route store.  The
//! wrapper exists so that a location cannot be confused with any other
//! string in a signature; it carries no attributes beyond identity.

use std::borrow::Borrow;
use std::fmt;

/// An opaque location name.
///
/// `Hash`/`Eq` delegate to the inner string, so maps keyed by `Location` can
/// be queried with a plain `&str` through the [`Borrow`] impl.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}
