//! [`Tier`]-related definitions.

use common::Money;
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLScalar, InputValue, ScalarValue, Value};
use service::domain::{self, pricing::tier};

use crate::{api, Context, Error};

/// A pricing tier.
#[derive(Clone, Debug, From, Into)]
pub struct Tier(domain::Tier);

/// A pricing tier: a weekly number of cooked meals for a base price.
#[graphql_object(context = Context)]
impl Tier {
    /// Unique identifier of this `Tier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Tier.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Human-readable label of this `Tier`.
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// Base price of this `Tier` for a single person.
    pub fn base_price(&self) -> Money {
        self.0.base_price
    }

    /// Number of meals of this `Tier`.
    pub fn meals(&self) -> Result<i32, Error> {
        api::int(self.0.meals.into())
    }

    /// Indicator whether this `Tier` is the recommended one.
    pub fn recommended(&self) -> bool {
        self.0.recommended
    }

    /// Weekly time saved with this `Tier`.
    pub fn time_savings(&self) -> TimeSavings {
        self.0.time_savings.clone().into()
    }
}

/// Unique identifier of a `Tier`.
///
/// Unknown identifiers resolve to the default `Tier`.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "TierId", with = Self, parse_token(String))]
pub struct Id(tier::Id);

impl Id {
    fn to_output<S: ScalarValue>(&self) -> Value<S> {
        Value::scalar(self.0.to_string())
    }

    fn from_input<S: ScalarValue>(
        input: &InputValue<S>,
    ) -> Result<Self, String> {
        input
            .as_string_value()
            .map(|s| Self(tier::Id::new(s)))
            .ok_or_else(|| {
                format!(
                    "Cannot parse `TierId` input scalar from non-string \
                     value: {input}",
                )
            })
    }
}

/// Weekly time saved with a `Tier`, in minutes.
#[derive(Clone, Debug, From, Into)]
pub struct TimeSavings(tier::TimeSavings);

/// Weekly time saved with a `Tier`, in minutes.
#[graphql_object(context = Context)]
impl TimeSavings {
    /// Planning the menu.
    pub fn planning(&self) -> Result<i32, Error> {
        api::int(self.0.planning.into())
    }

    /// Writing the shopping list.
    pub fn shopping_list(&self) -> Result<i32, Error> {
        api::int(self.0.shopping_list.into())
    }

    /// Going to the grocery store and back.
    pub fn grocery_run(&self) -> Result<i32, Error> {
        api::int(self.0.grocery_run.into())
    }

    /// Putting the groceries away and packing the meals.
    pub fn put_away(&self) -> Result<i32, Error> {
        api::int(self.0.put_away.into())
    }

    /// Cooking and cleaning up.
    pub fn cooking(&self) -> Result<i32, Error> {
        api::int(self.0.cooking.into())
    }

    /// Total of all the categories.
    pub fn total(&self) -> Result<i32, Error> {
        api::int(self.0.total().into())
    }

    /// Human-readable total (`"3h45"`).
    pub fn total_display(&self) -> &str {
        self.0.total_display()
    }
}
