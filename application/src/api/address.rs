//! Address [`Suggestion`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLInputObject, GraphQLObject, GraphQLScalar};
use service::domain::{
    address::{self, search},
    geo::Coordinates,
};
use uuid::Uuid;

use crate::Context;

/// Address suggested for a free-text input.
#[derive(Clone, Debug, From, Into)]
pub struct Suggestion(address::Suggestion);

/// Address suggested for a free-text input.
#[graphql_object(name = "AddressSuggestion", context = Context)]
impl Suggestion {
    /// Full display label of this `AddressSuggestion`.
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// City of this `AddressSuggestion`.
    pub fn city(&self) -> &str {
        &self.0.city
    }

    /// Postal code of this `AddressSuggestion`.
    pub fn postcode(&self) -> &str {
        &self.0.postcode
    }

    /// Latitude of this `AddressSuggestion`, in degrees.
    pub fn latitude(&self) -> f64 {
        self.0.coordinates.latitude
    }

    /// Longitude of this `AddressSuggestion`, in degrees.
    pub fn longitude(&self) -> f64 {
        self.0.coordinates.longitude
    }
}

/// Address selected out of the `AddressSuggestion`s.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "AddressInput")]
pub struct Input {
    /// Full display label.
    pub label: String,

    /// City.
    pub city: String,

    /// Postal code.
    pub postcode: String,

    /// Latitude, in degrees.
    pub latitude: f64,

    /// Longitude, in degrees.
    pub longitude: f64,
}

impl From<Input> for address::Suggestion {
    fn from(input: Input) -> Self {
        let Input {
            label,
            city,
            postcode,
            latitude,
            longitude,
        } = input;
        Self {
            label,
            city,
            postcode,
            coordinates: Coordinates::new(latitude, longitude),
        }
    }
}

/// Unique identifier of an address search session.
///
/// Within a session, only the latest input yields `AddressSuggestion`s.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(search::SessionId)]
#[into(search::SessionId)]
#[graphql(name = "AddressSearchSessionId", transparent)]
pub struct SessionId(Uuid);

/// `AddressSuggestion`s for a free-text input.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context, name = "AddressSuggestions")]
pub struct Suggestions {
    /// Indicator whether a later input of the same search session superseded
    /// this one.
    ///
    /// Superseded inputs have no `AddressSuggestion`s.
    pub superseded: bool,

    /// Suggested addresses.
    pub suggestions: Vec<Suggestion>,
}

impl From<search::Outcome<Vec<address::Suggestion>>> for Suggestions {
    fn from(outcome: search::Outcome<Vec<address::Suggestion>>) -> Self {
        match outcome {
            search::Outcome::Results(found) => Self {
                superseded: false,
                suggestions: found.into_iter().map(Into::into).collect(),
            },
            search::Outcome::Superseded => Self {
                superseded: true,
                suggestions: vec![],
            },
        }
    }
}
