//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, domain::lead, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Submits a `Lead` out of the `Simulation` selections and the client
    /// contact details.
    ///
    /// The `Lead` is delivered once. On failure, it may be submitted again.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_CONTACT` - the provided contact details are invalid;
    /// - `LEAD_NOT_READY` - the `Simulation` hasn't reached the summary step;
    /// - `ADDRESS_REQUIRED` - no address is selected;
    /// - `OUT_OF_AREA_NOT_ACKNOWLEDGED` - the selected address is outside the
    ///                                    service area and the client hasn't
    ///                                    agreed to be contacted anyway;
    /// - `LEAD_SUBMISSION_FAILED` - the `Lead` couldn't be delivered.
    #[tracing::instrument(
        skip_all,
        fields(
            email = %contact.email,
            gql.name = "submitLead",
            otel.name = Self::SPAN_NAME,
            step = ?simulation.step,
            tier = %simulation.tier,
        ),
    )]
    pub async fn submit_lead(
        simulation: api::simulation::Input,
        contact: api::lead::ContactInput,
        ctx: &Context,
    ) -> Result<api::Lead, Error> {
        let contact = lead::Contact::try_from(contact)
            .map_err(Error::from)
            .map_err(ctx.error())?;
        ctx.service()
            .execute(command::SubmitLead {
                selections: simulation.into(),
                contact,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}
