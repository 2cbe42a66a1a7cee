//! [`Tier`] definitions.

use std::{borrow::Cow, fmt, str::FromStr};

use common::Money;
use derive_more::{AsRef, Display, From, Into};

/// Pricing tier: a weekly package of home-cooked meals.
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    /// ID of this [`Tier`].
    pub id: Id,

    /// Human-readable label of this [`Tier`] (`"6 recettes / semaine"`).
    pub label: String,

    /// Price of this [`Tier`] for a single person.
    pub base_price: Money,

    /// Number of meals cooked per visit.
    pub meals: Meals,

    /// Indicator whether this [`Tier`] is highlighted as the recommended one.
    pub recommended: bool,

    /// [`TimeSavings`] the client gets with this [`Tier`].
    pub time_savings: TimeSavings,
}

/// ID of a [`Tier`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Id(Cow<'static, str>);

impl Id {
    /// Creates a new [`Id`] from a static string.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Creates a new [`Id`] from the provided string.
    ///
    /// Any string is accepted: unknown [`Id`]s resolve to the default [`Tier`]
    /// of a [`Catalog`].
    ///
    /// [`Catalog`]: super::Catalog
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Number of meals in a [`Tier`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Meals(u32);

/// Duration in whole minutes.
#[derive(
    Clone, Copy, Debug, Default, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Minutes(u32);

/// Formats as `45min` below an hour, and as `5h00` otherwise.
impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.0 / 60, self.0 % 60);
        if hours == 0 {
            write!(f, "{minutes}min")
        } else {
            write!(f, "{hours}h{minutes:02}")
        }
    }
}

/// Weekly time a client saves by delegating the cooking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeSavings {
    /// Planning the menu.
    pub planning: Minutes,

    /// Writing the shopping list.
    pub shopping_list: Minutes,

    /// Going to the grocery store and back.
    pub grocery_run: Minutes,

    /// Putting the groceries away and packing the meals.
    pub put_away: Minutes,

    /// Cooking and cleaning up.
    pub cooking: Minutes,

    /// Precomputed display of the total.
    total: String,
}

impl TimeSavings {
    /// Creates new [`TimeSavings`] out of the provided categories.
    #[must_use]
    pub fn new(
        planning: u32,
        shopping_list: u32,
        grocery_run: u32,
        put_away: u32,
        cooking: u32,
    ) -> Self {
        let total =
            Minutes(planning + shopping_list + grocery_run + put_away + cooking);
        Self {
            planning: planning.into(),
            shopping_list: shopping_list.into(),
            grocery_run: grocery_run.into(),
            put_away: put_away.into(),
            cooking: cooking.into(),
            total: total.to_string(),
        }
    }

    /// Returns the total of all the categories.
    #[must_use]
    pub fn total(&self) -> Minutes {
        let Self {
            planning,
            shopping_list,
            grocery_run,
            put_away,
            cooking,
            total: _,
        } = self;
        Minutes(
            planning.0 + shopping_list.0 + grocery_run.0 + put_away.0 + cooking.0,
        )
    }

    /// Returns the precomputed display of the [`TimeSavings::total()`].
    #[must_use]
    pub fn total_display(&self) -> &str {
        &self.total
    }
}
