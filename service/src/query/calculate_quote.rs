//! [`Query`] for calculating a [`Quote`].

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::{quote, Quote},
    Service,
};

use super::Query;

/// [`Query`] for calculating a [`Quote`] with the [`Service`] pricing
/// [`Catalog`].
///
/// [`Catalog`]: crate::domain::Catalog
#[derive(Clone, Debug, From)]
pub struct CalculateQuote(pub quote::Input);

impl<A, L> Query<CalculateQuote> for Service<A, L> {
    type Ok = Quote;
    type Err = Infallible;

    async fn execute(
        &self,
        CalculateQuote(input): CalculateQuote,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Quote::calculate(&self.config().catalog, &input))
    }
}
