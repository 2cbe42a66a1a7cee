//! [`Query`] definition.

pub mod active_promotion;
pub mod calculate_quote;
pub mod check_eligibility;
pub mod simulate;
pub mod suggest_addresses;
pub mod tiers;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    active_promotion::ActivePromotion, calculate_quote::CalculateQuote,
    check_eligibility::CheckEligibility, simulate::Simulate,
    suggest_addresses::SuggestAddresses, tiers::Tiers,
};
