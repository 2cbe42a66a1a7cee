//! GraphQL [`Query`]s definitions.

use common::DateTime;
use juniper::graphql_object;
use service::{domain::geo::Coordinates, query, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns all the `Tier`s, ordered by their number of meals.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "tiers",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn tiers(ctx: &Context) -> Result<Vec<api::Tier>, Error> {
        ctx.service()
            .execute(query::Tiers)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|tiers| tiers.into_iter().map(Into::into).collect())
    }

    /// Calculates the `Quote` of a `Tier`.
    ///
    /// Unknown `TierId`s are quoted with the default `Tier`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "quote",
            otel.name = Self::SPAN_NAME,
            party_size = input.party_size,
            tier = %input.tier,
        ),
    )]
    pub async fn quote(
        input: api::quote::Input,
        ctx: &Context,
    ) -> Result<api::Quote, Error> {
        ctx.service()
            .execute(query::CalculateQuote(input.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Checks whether the provided location is within the service area.
    ///
    /// Without a complete location, the `Eligibility` is `IDLE`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "eligibility",
            latitude = ?latitude,
            longitude = ?longitude,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn eligibility(
        latitude: Option<f64>,
        longitude: Option<f64>,
        ctx: &Context,
    ) -> Result<api::Eligibility, Error> {
        let coordinates = latitude
            .zip(longitude)
            .map(|(lat, lon)| Coordinates::new(lat, lon));
        ctx.service()
            .execute(query::CheckEligibility(coordinates))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Suggests addresses matching the provided free-text input.
    ///
    /// Inputs shorter than 3 characters have no suggestions. Within the
    /// provided search `session`, only the latest input is looked up and
    /// yields suggestions, the earlier ones are superseded.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addressSuggestions",
            otel.name = Self::SPAN_NAME,
            query = %query,
            session = ?session.map(|s| s.to_string()),
        ),
    )]
    pub async fn address_suggestions(
        query: String,
        session: Option<api::address::SessionId>,
        ctx: &Context,
    ) -> Result<api::address::Suggestions, Error> {
        ctx.service()
            .execute(query::SuggestAddresses {
                text: query,
                session: session.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the currently running `Promotion`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "promotion",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn promotion(
        ctx: &Context,
    ) -> Result<Option<api::Promotion>, Error> {
        ctx.service()
            .execute(query::ActivePromotion { at: DateTime::now() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|p| p.map(Into::into))
    }

    /// Simulates the pricing wizard with the provided selections.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "simulation",
            otel.name = Self::SPAN_NAME,
            step = ?input.step,
        ),
    )]
    pub async fn simulation(
        input: api::simulation::Input,
        ctx: &Context,
    ) -> Result<api::Simulation, Error> {
        ctx.service()
            .execute(query::Simulate {
                selections: input.into(),
                at: DateTime::now(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}
