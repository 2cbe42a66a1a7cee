//! [`Query`] for checking an address [`Eligibility`].

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::geo::{Coordinates, Eligibility},
    Service,
};

use super::Query;

/// [`Query`] for checking the [`Eligibility`] of resolved [`Coordinates`]
/// against the [`Service`] area.
///
/// No [`Coordinates`] result in [`Eligibility::Idle`].
#[derive(Clone, Copy, Debug, From)]
pub struct CheckEligibility(pub Option<Coordinates>);

impl<A, L> Query<CheckEligibility> for Service<A, L> {
    type Ok = Eligibility;
    type Err = Infallible;

    async fn execute(
        &self,
        CheckEligibility(coordinates): CheckEligibility,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.config().area.classify(coordinates))
    }
}
