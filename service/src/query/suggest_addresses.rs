//! [`Query`] for suggesting addresses.

use std::convert::Infallible;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::address::{
        self,
        search::{Outcome, SessionId},
        Suggestion,
    },
    infra::{self, AddressLookup},
    Service,
};

use super::Query;

/// [`Query`] for suggesting addresses matching a free-text input.
///
/// Inputs shorter than [`address::Query::MIN_LEN`] aren't looked up. Lookup
/// failures are logged and result in no [`Suggestion`]s.
///
/// Within a search session, a lookup waits for the configured debounce period
/// first, and only the latest lookup of the session yields its
/// [`Suggestion`]s, whatever order the lookups complete in. The others are
/// [`Outcome::Superseded`].
#[derive(Clone, Debug)]
pub struct SuggestAddresses {
    /// Free-text input of the client.
    pub text: String,

    /// Search session the input belongs to, if any.
    pub session: Option<SessionId>,
}

impl<A, L> Query<SuggestAddresses> for Service<A, L>
where
    A: AddressLookup<
        Select<By<Vec<Suggestion>, address::Query>>,
        Ok = Vec<Suggestion>,
        Err = Traced<infra::address::Error>,
    >,
{
    type Ok = Outcome<Vec<Suggestion>>;
    type Err = Infallible;

    async fn execute(
        &self,
        query: SuggestAddresses,
    ) -> Result<Self::Ok, Self::Err> {
        let SuggestAddresses { text, session } = query;

        let tracked = session.map(|id| {
            let tracker = self.searches().tracker(id);
            let ticket = tracker.issue();
            (tracker, ticket)
        });

        let found = if let Some(query) = address::Query::new(&text) {
            if let Some((tracker, ticket)) = &tracked {
                tokio::time::sleep(self.config().suggestions.debounce).await;
                if !tracker.is_latest(*ticket) {
                    return Ok(Outcome::Superseded);
                }
            }

            self.addresses()
                .execute(Select(By::new(query)))
                .await
                .unwrap_or_else(|e| {
                    log::warn!("address lookup failed: {e}");
                    vec![]
                })
        } else {
            vec![]
        };

        Ok(match tracked {
            Some((tracker, ticket)) => tracker.settle(ticket, found),
            None => Outcome::Results(found),
        })
    }
}
