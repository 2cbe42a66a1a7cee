//! Pricing catalog definitions.

pub mod tier;

use common::{Money, Percent};
use derive_more::{Display, From, Into};

pub use self::tier::Tier;

/// Immutable catalog of [`Tier`]s and pricing constants.
///
/// Always resolves a [`Tier`]: unknown [`tier::Id`]s fall back to the default
/// one.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    /// [`Tier`]s ordered by their number of meals.
    tiers: Vec<Tier>,

    /// Index of the default [`Tier`] in `tiers`.
    default: usize,

    /// Fee added per person beyond the first one.
    extra_person_fee: Money,

    /// Discount granted to subscribed clients.
    subscription_discount: Percent,

    /// Share of the paid amount refunded as a tax credit.
    tax_credit: Percent,

    /// Maximum selectable [`PartySize`].
    max_party_size: PartySize,

    /// Grocery [`UnitCost`]s indexed by `party size - 1`, the last one
    /// applying to all larger parties.
    grocery: Vec<UnitCost>,
}

impl Catalog {
    /// ID of the 3-meals [`Tier`].
    pub const THREE_MEALS: tier::Id = tier::Id::from_static("3-meals");

    /// ID of the 5-meals [`Tier`].
    pub const FIVE_MEALS: tier::Id = tier::Id::from_static("5-meals");

    /// ID of the 6-meals [`Tier`], the default one.
    pub const SIX_MEALS: tier::Id = tier::Id::from_static("6-meals");

    /// Creates a new [`Catalog`] out of the provided [`Tier`]s and constants.
    ///
    /// # Errors
    ///
    /// - if no [`Tier`] has the `default_tier` ID;
    /// - if any [`Tier`] has zero meals;
    /// - if no grocery [`UnitCost`] is provided;
    /// - if `max_party_size` is zero.
    pub fn new(
        mut tiers: Vec<Tier>,
        default_tier: &tier::Id,
        constants: Constants,
    ) -> Result<Self, &'static str> {
        let Constants {
            extra_person_fee,
            subscription_discount,
            tax_credit,
            max_party_size,
            grocery,
        } = constants;

        if tiers.iter().any(|t| u32::from(t.meals) == 0) {
            return Err("`Tier` must have at least one meal");
        }
        if grocery.is_empty() {
            return Err("grocery unit costs must not be empty");
        }
        if u32::from(max_party_size) == 0 {
            return Err("max party size must be positive");
        }

        tiers.sort_by_key(|t| t.meals);
        let default = tiers
            .iter()
            .position(|t| &t.id == default_tier)
            .ok_or("default `Tier` is missing")?;

        Ok(Self {
            tiers,
            default,
            extra_person_fee,
            subscription_discount,
            tax_credit,
            max_party_size,
            grocery,
        })
    }

    /// Returns the [`Tier`] with the provided [`tier::Id`], or the default one
    /// if there is no such [`Tier`].
    #[must_use]
    pub fn tier(&self, id: &tier::Id) -> &Tier {
        self.tiers
            .iter()
            .find(|t| &t.id == id)
            .unwrap_or_else(|| self.default_tier())
    }

    /// Returns the default [`Tier`].
    #[must_use]
    pub fn default_tier(&self) -> &Tier {
        &self.tiers[self.default]
    }

    /// Returns all the [`Tier`]s ordered by their number of meals.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Returns the fee added per person beyond the first one.
    #[must_use]
    pub fn extra_person_fee(&self) -> Money {
        self.extra_person_fee
    }

    /// Returns the discount granted to subscribed clients.
    #[must_use]
    pub fn subscription_discount(&self) -> Percent {
        self.subscription_discount
    }

    /// Returns the share of the paid amount refunded as a tax credit.
    #[must_use]
    pub fn tax_credit(&self) -> Percent {
        self.tax_credit
    }

    /// Returns the maximum selectable [`PartySize`].
    #[must_use]
    pub fn max_party_size(&self) -> PartySize {
        self.max_party_size
    }

    /// Clamps the provided raw party size into `1..=max` range.
    #[must_use]
    pub fn clamp_party_size(&self, size: i64) -> PartySize {
        let max = self.max_party_size.0;
        PartySize(u32::try_from(size.max(1)).map_or(max, |s| s.min(max)))
    }

    /// Returns the grocery [`UnitCost`] per meal and per person for the
    /// provided [`PartySize`].
    #[must_use]
    pub fn grocery_unit_cost(&self, party_size: PartySize) -> UnitCost {
        let last = self.grocery.len() - 1;
        let idx = usize::try_from(party_size.0.max(1) - 1)
            .map_or(last, |i| i.min(last));
        self.grocery[idx]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let tier = |id: tier::Id,
                    label: &str,
                    price: f64,
                    meals: u32,
                    recommended: bool,
                    time_savings: tier::TimeSavings| Tier {
            id,
            label: label.to_owned(),
            base_price: Money::new(price),
            meals: tier::Meals::from(meals),
            recommended,
            time_savings,
        };

        Self {
            tiers: vec![
                tier(
                    Self::THREE_MEALS,
                    "3 recettes / semaine",
                    120.0,
                    3,
                    false,
                    tier::TimeSavings::new(30, 15, 60, 15, 180),
                ),
                tier(
                    Self::FIVE_MEALS,
                    "5 recettes / semaine",
                    200.0,
                    5,
                    true,
                    tier::TimeSavings::new(45, 20, 75, 20, 300),
                ),
                tier(
                    Self::SIX_MEALS,
                    "6 recettes / semaine",
                    240.0,
                    6,
                    false,
                    tier::TimeSavings::new(60, 20, 90, 25, 360),
                ),
            ],
            default: 2,
            extra_person_fee: Money::new(10.0),
            subscription_discount: Percent::new(15.0).unwrap_or_default(),
            tax_credit: Percent::new(50.0).unwrap_or_default(),
            max_party_size: PartySize(6),
            grocery: vec![
                UnitCost::new(7.5, 10.0),
                UnitCost::new(6.0, 8.5),
                UnitCost::new(5.0, 7.5),
                UnitCost::new(4.0, 6.5),
            ],
        }
    }
}

/// Pricing constants of a [`Catalog`].
#[derive(Clone, Debug, PartialEq)]
pub struct Constants {
    /// Fee added per person beyond the first one.
    pub extra_person_fee: Money,

    /// Discount granted to subscribed clients.
    pub subscription_discount: Percent,

    /// Share of the paid amount refunded as a tax credit.
    pub tax_credit: Percent,

    /// Maximum selectable [`PartySize`].
    pub max_party_size: PartySize,

    /// Grocery [`UnitCost`]s indexed by `party size - 1`, the last one
    /// applying to all larger parties.
    pub grocery: Vec<UnitCost>,
}

/// Number of persons a meal is cooked for.
///
/// Zero is representable: the quote calculation clamps the number of
/// [extra persons](PartySize::extra_persons) at zero.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct PartySize(u32);

impl PartySize {
    /// Single person.
    pub const ONE: Self = Self(1);

    /// Returns the number of persons beyond the first one.
    #[must_use]
    pub fn extra_persons(self) -> u32 {
        self.0.saturating_sub(1)
    }
}

/// Estimated grocery cost band of a single meal for a single person.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitCost {
    /// Lower bound.
    pub min: Money,

    /// Upper bound.
    pub max: Money,
}

impl UnitCost {
    /// Creates a new [`UnitCost`] out of the provided bounds in euros.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Money::new(min),
            max: Money::new(max),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use super::{tier, Catalog, Constants, PartySize, Tier, UnitCost};

    #[test]
    fn unknown_tier_falls_back_to_default() {
        let catalog = Catalog::default();

        assert_eq!(catalog.default_tier().id, Catalog::SIX_MEALS);
        assert_eq!(
            catalog.tier(&tier::Id::new("unknown")),
            catalog.tier(&Catalog::SIX_MEALS),
        );
        assert_eq!(
            catalog.tier(&Catalog::THREE_MEALS).base_price,
            Money::new(120.0),
        );
    }

    #[test]
    fn tiers_are_ordered_by_meals() {
        let meals = Catalog::default()
            .tiers()
            .iter()
            .map(|t| u32::from(t.meals))
            .collect::<Vec<_>>();
        assert_eq!(meals, [3, 5, 6]);
    }

    #[test]
    fn clamps_party_size() {
        let catalog = Catalog::default();

        assert_eq!(catalog.clamp_party_size(-3), PartySize::ONE);
        assert_eq!(catalog.clamp_party_size(0), PartySize::ONE);
        assert_eq!(catalog.clamp_party_size(4), PartySize::from(4));
        assert_eq!(catalog.clamp_party_size(42), PartySize::from(6));
        assert_eq!(catalog.clamp_party_size(i64::MAX), PartySize::from(6));
    }

    #[test]
    fn grocery_unit_cost_is_a_step_function() {
        let catalog = Catalog::default();
        let cost = |p: u32| catalog.grocery_unit_cost(PartySize::from(p));

        assert_eq!(cost(0), UnitCost::new(7.5, 10.0));
        assert_eq!(cost(1), UnitCost::new(7.5, 10.0));
        assert_eq!(cost(2), UnitCost::new(6.0, 8.5));
        assert_eq!(cost(3), UnitCost::new(5.0, 7.5));
        assert_eq!(cost(4), UnitCost::new(4.0, 6.5));
        assert_eq!(cost(6), UnitCost::new(4.0, 6.5));
    }

    #[test]
    fn rejects_inconsistent_catalogs() {
        let constants = || Constants {
            extra_person_fee: Money::new(5.0),
            subscription_discount: Percent::new(10.0).unwrap(),
            tax_credit: Percent::new(50.0).unwrap(),
            max_party_size: PartySize::from(4),
            grocery: vec![UnitCost::new(5.0, 6.0)],
        };
        let tiers = || Catalog::default().tiers().to_vec();

        assert!(
            Catalog::new(tiers(), &tier::Id::new("missing"), constants())
                .is_err()
        );
        assert!(Catalog::new(
            tiers(),
            &Catalog::FIVE_MEALS,
            Constants {
                grocery: vec![],
                ..constants()
            },
        )
        .is_err());
        assert!(Catalog::new(
            vec![Tier {
                meals: tier::Meals::from(0),
                ..Catalog::default().default_tier().clone()
            }],
            &Catalog::SIX_MEALS,
            constants(),
        )
        .is_err());

        let catalog =
            Catalog::new(tiers(), &Catalog::FIVE_MEALS, constants()).unwrap();
        assert_eq!(catalog.default_tier().id, Catalog::FIVE_MEALS);
        assert_eq!(catalog.extra_person_fee(), Money::new(5.0));
    }
}
