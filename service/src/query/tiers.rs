//! [`Query`] for listing pricing [`Tier`]s.

use std::convert::Infallible;

use crate::{domain::Tier, Service};

use super::Query;

/// [`Query`] for listing pricing [`Tier`]s ordered by their number of meals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tiers;

impl<A, L> Query<Tiers> for Service<A, L> {
    type Ok = Vec<Tier>;
    type Err = Infallible;

    async fn execute(&self, _: Tiers) -> Result<Self::Ok, Self::Err> {
        Ok(self.config().catalog.tiers().to_vec())
    }
}
