//! Address suggestion definitions.

pub mod search;

use std::str::FromStr;

use derive_more::{AsRef, Display, Into};

use crate::domain::geo::Coordinates;

/// Free-text address query.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Query(String);

impl Query {
    /// Minimum number of characters a [`Query`] must have to be looked up.
    pub const MIN_LEN: usize = 3;

    /// Creates a new [`Query`] out of the provided text, trimming it.
    ///
    /// [`None`] is returned if the trimmed text is shorter than
    /// [`Query::MIN_LEN`] characters.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        (text.chars().count() >= Self::MIN_LEN).then(|| Self(text.to_owned()))
    }
}

impl FromStr for Query {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("`Query` must have at least 3 characters")
    }
}

/// Candidate address resolved from a [`Query`].
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    /// Full display label (`"8 Boulevard du Port 74000 Annecy"`).
    pub label: String,

    /// City name.
    pub city: String,

    /// Postal code.
    pub postcode: String,

    /// Resolved [`Coordinates`].
    pub coordinates: Coordinates,
}
