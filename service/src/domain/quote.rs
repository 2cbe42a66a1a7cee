//! [`Quote`] definitions.

use common::{define_kind, Money, Percent};

use crate::domain::pricing::{tier, Catalog, PartySize, Tier};

define_kind! {
    #[doc = "Frequency of the cooking visits. Doesn't affect the price."]
    enum Frequency {
        #[doc = "Every week."]
        Weekly = 1,

        #[doc = "Every two weeks."]
        Biweekly = 2,

        #[doc = "Every month."]
        Monthly = 3,
    }
}

/// Discount applied to a [`Quote`].
///
/// Subscription and promotional discounts never stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DiscountPolicy {
    /// No discount.
    #[default]
    None,

    /// [`Catalog::subscription_discount()`] for subscribed clients.
    Subscription,

    /// Flat promotional discount.
    Promo(Percent),
}

/// Input of a [`Quote`] calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Input {
    /// ID of the selected [`Tier`].
    pub tier: tier::Id,

    /// Number of persons to cook for.
    pub party_size: PartySize,

    /// [`Frequency`] of the visits.
    pub frequency: Frequency,

    /// [`DiscountPolicy`] to apply.
    pub discount: DiscountPolicy,
}

/// Full price breakdown of a weekly service.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    /// [`Tier`] the [`Quote`] is calculated for.
    pub tier: Tier,

    /// Number of persons to cook for.
    pub party_size: PartySize,

    /// [`Frequency`] of the visits.
    pub frequency: Frequency,

    /// Applied [`DiscountPolicy`].
    pub discount: DiscountPolicy,

    /// Service price before any discount.
    pub gross_price: Money,

    /// Amount of the subscription discount, if subscribed.
    pub subscription_discount: Money,

    /// Amount of the promotional discount, if any.
    pub promo_discount: Money,

    /// Amount payable to the cook.
    pub amount_due: Money,

    /// Tax credit refunded on the `amount_due`.
    pub tax_credit: Money,

    /// Final cost after the tax credit.
    pub net_cost: Money,

    /// Estimated cost of the groceries, paid apart from the service.
    pub grocery: GroceryRange,
}

impl Quote {
    /// Calculates a [`Quote`] for the provided [`Input`].
    ///
    /// The calculation is total and never rounds: an unknown [`tier::Id`]
    /// resolves to the default [`Tier`], and the number of extra persons is
    /// clamped at zero.
    #[must_use]
    pub fn calculate(catalog: &Catalog, input: &Input) -> Self {
        let Input {
            tier,
            party_size,
            frequency,
            discount,
        } = input;
        let (party_size, frequency, discount) =
            (*party_size, *frequency, *discount);
        let tier = catalog.tier(tier);

        let gross_price = tier.base_price
            + catalog.extra_person_fee() * f64::from(party_size.extra_persons());

        let subscription_discount = match discount {
            DiscountPolicy::Subscription => {
                gross_price * catalog.subscription_discount()
            }
            DiscountPolicy::None | DiscountPolicy::Promo(_) => Money::ZERO,
        };
        let promo_discount = match discount {
            DiscountPolicy::Promo(percent) => gross_price * percent,
            DiscountPolicy::None | DiscountPolicy::Subscription => Money::ZERO,
        };

        let amount_due = gross_price - subscription_discount - promo_discount;
        let tax_credit = amount_due * catalog.tax_credit();
        let net_cost = amount_due - tax_credit;

        let portions =
            f64::from(u32::from(tier.meals)) * f64::from(u32::from(party_size));
        let unit = catalog.grocery_unit_cost(party_size);
        let grocery = GroceryRange {
            min: Money::new(portions * unit.min.amount()),
            max: Money::new(portions * unit.max.amount()),
        };

        Self {
            tier: tier.clone(),
            party_size,
            frequency,
            discount,
            gross_price,
            subscription_discount,
            promo_discount,
            amount_due,
            tax_credit,
            net_cost,
            grocery,
        }
    }

    /// Returns the service price of a single meal, before any discount.
    #[must_use]
    pub fn price_per_meal(&self) -> Money {
        self.gross_price / f64::from(u32::from(self.tier.meals))
    }
}

/// Estimated band of a grocery cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroceryRange {
    /// Lower bound.
    pub min: Money,

    /// Upper bound.
    pub max: Money,
}
