//! [`Quote`]-related definitions.

use common::{Money, Percent};
use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject};
use service::domain::{
    self,
    pricing::PartySize,
    quote::{self, DiscountPolicy},
};

use crate::{api, Context, Error};

/// Price quote of a `Tier`.
#[derive(Clone, Debug, From, Into)]
pub struct Quote(domain::Quote);

/// Price quote of a `Tier` for a party, with the full price breakdown.
///
/// Amounts are never rounded.
#[graphql_object(context = Context)]
impl Quote {
    /// Quoted `Tier`.
    pub fn tier(&self) -> api::Tier {
        self.0.tier.clone().into()
    }

    /// Number of persons to cook for.
    pub fn party_size(&self) -> Result<i32, Error> {
        api::int(self.0.party_size.into())
    }

    /// Frequency of the cooking visits.
    pub fn frequency(&self) -> Frequency {
        self.0.frequency.into()
    }

    /// Indicator whether the subscription discount applies.
    pub fn subscribed(&self) -> bool {
        self.0.discount == DiscountPolicy::Subscription
    }

    /// Promotional discount applied, if any.
    pub fn promo_percent(&self) -> Option<Percent> {
        match self.0.discount {
            DiscountPolicy::Promo(p) => Some(p),
            DiscountPolicy::None | DiscountPolicy::Subscription => None,
        }
    }

    /// Service price before any discount.
    pub fn gross_price(&self) -> Money {
        self.0.gross_price
    }

    /// Subscription discount amount.
    pub fn subscription_discount(&self) -> Money {
        self.0.subscription_discount
    }

    /// Promotional discount amount.
    pub fn promo_discount(&self) -> Money {
        self.0.promo_discount
    }

    /// Amount payable to the cook.
    pub fn amount_due(&self) -> Money {
        self.0.amount_due
    }

    /// Tax credit amount.
    pub fn tax_credit(&self) -> Money {
        self.0.tax_credit
    }

    /// Final cost after the tax credit.
    pub fn net_cost(&self) -> Money {
        self.0.net_cost
    }

    /// Lower bound of the grocery estimate.
    pub fn grocery_min(&self) -> Money {
        self.0.grocery.min
    }

    /// Upper bound of the grocery estimate.
    pub fn grocery_max(&self) -> Money {
        self.0.grocery.max
    }

    /// Service price of a single meal.
    pub fn price_per_meal(&self) -> Money {
        self.0.price_per_meal()
    }
}

/// Input of a `Quote` calculation.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "QuoteInput")]
pub struct Input {
    /// `Tier` to quote.
    pub tier: api::pricing::Id,

    /// Number of persons to cook for. Negative values count as zero.
    pub party_size: i32,

    /// Frequency of the cooking visits.
    pub frequency: Frequency,

    /// Indicator whether the subscription discount applies.
    #[graphql(default)]
    pub subscribed: bool,

    /// Promotional discount to apply.
    ///
    /// Takes precedence over the subscription discount, unless zero.
    pub promo_percent: Option<Percent>,
}

impl From<Input> for quote::Input {
    fn from(input: Input) -> Self {
        let Input {
            tier,
            party_size,
            frequency,
            subscribed,
            promo_percent,
        } = input;
        let discount = match (promo_percent, subscribed) {
            (Some(p), _) if !p.is_zero() => DiscountPolicy::Promo(p),
            (_, true) => DiscountPolicy::Subscription,
            (_, false) => DiscountPolicy::None,
        };
        Self {
            tier: tier.into(),
            party_size: PartySize::from(u32::try_from(party_size).unwrap_or(0)),
            frequency: frequency.into(),
            discount,
        }
    }
}

/// Frequency of the cooking visits.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum Frequency {
    /// Every week.
    Weekly,

    /// Every two weeks.
    Biweekly,

    /// Every month.
    Monthly,
}

impl From<quote::Frequency> for Frequency {
    fn from(frequency: quote::Frequency) -> Self {
        use quote::Frequency as F;
        match frequency {
            F::Weekly => Self::Weekly,
            F::Biweekly => Self::Biweekly,
            F::Monthly => Self::Monthly,
        }
    }
}

impl From<Frequency> for quote::Frequency {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Weekly => Self::Weekly,
            Frequency::Biweekly => Self::Biweekly,
            Frequency::Monthly => Self::Monthly,
        }
    }
}
