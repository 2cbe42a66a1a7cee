//! [`Promotion`]-related definitions.

use common::{DateTime, Percent};
use derive_more::{From, Into};
use juniper::graphql_object;
use service::domain;

use crate::Context;

/// Running promotional campaign.
#[derive(Clone, Debug, From, Into)]
pub struct Promotion(domain::Promotion);

/// Running promotional campaign, offering a flat discount on the service
/// price instead of the subscription discount.
#[graphql_object(context = Context)]
impl Promotion {
    /// Discount offered by this `Promotion`.
    pub fn discount(&self) -> Percent {
        self.0.discount
    }

    /// Human-readable label of this `Promotion`.
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// `DateTime` this `Promotion` ends at, if limited.
    pub fn expiry(&self) -> Option<DateTime> {
        self.0.expiry
    }
}
