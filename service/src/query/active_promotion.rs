//! [`Query`] for the currently active [`Promotion`].

use std::convert::Infallible;

use common::DateTime;

use crate::{domain::Promotion, Service};

use super::Query;

/// [`Query`] for the [`Promotion`] active at the provided [`DateTime`].
///
/// Returns [`None`] if the configured [`Promotion`] is switched off or
/// expired.
#[derive(Clone, Copy, Debug)]
pub struct ActivePromotion {
    /// [`DateTime`] to check the [`Promotion`] at.
    pub at: DateTime,
}

impl<A, L> Query<ActivePromotion> for Service<A, L> {
    type Ok = Option<Promotion>;
    type Err = Infallible;

    async fn execute(
        &self,
        ActivePromotion { at }: ActivePromotion,
    ) -> Result<Self::Ok, Self::Err> {
        let promotion = &self.config().promotion;
        Ok(promotion.is_active_at(at).then(|| promotion.clone()))
    }
}
