//! [`Eligibility`]-related definitions.

use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLEnum};
use service::domain::geo;

use crate::Context;

/// Eligibility of an address to the service area.
#[derive(Clone, Copy, Debug, From, Into)]
pub struct Eligibility(geo::Eligibility);

/// Eligibility of an address to the service area.
#[graphql_object(context = Context)]
impl Eligibility {
    /// Status of this `Eligibility`.
    pub fn status(&self) -> EligibilityStatus {
        match self.0 {
            geo::Eligibility::Idle => EligibilityStatus::Idle,
            geo::Eligibility::Eligible(_) => EligibilityStatus::Eligible,
            geo::Eligibility::NotEligible(_) => EligibilityStatus::NotEligible,
        }
    }

    /// Latitude of the checked address, in degrees.
    pub fn latitude(&self) -> Option<f64> {
        self.0.check().map(|c| c.coordinates.latitude)
    }

    /// Longitude of the checked address, in degrees.
    pub fn longitude(&self) -> Option<f64> {
        self.0.check().map(|c| c.coordinates.longitude)
    }

    /// Distance from the service base to the checked address, in kilometers.
    pub fn distance_km(&self) -> Option<f64> {
        self.0.check().map(|c| c.distance.value())
    }

    /// Human-readable distance (`"3.27 km"`).
    pub fn distance_display(&self) -> Option<String> {
        self.0.check().map(|c| c.distance.to_string())
    }
}

/// Status of an `Eligibility`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum EligibilityStatus {
    /// No address was checked.
    Idle,

    /// Address is within the service area.
    Eligible,

    /// Address is outside the service area.
    NotEligible,
}
