//! Webhook [`LeadSink`] implementation.

use std::{sync::Arc, time::Duration};

use common::operations::Perform;
use derive_more::{Display, Error as StdError};
use secrecy::{ExposeSecret as _, SecretString};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::lead::Payload,
    infra::{lead, LeadSink},
};

/// [`Webhook`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL to post leads to.
    ///
    /// Kept secret, as automation webhooks authorize by their URL alone.
    pub url: SecretString,

    /// Timeout of a single delivery request.
    pub timeout: Duration,
}

/// [`LeadSink`] posting lead [`Payload`]s as JSON to an automation webhook.
///
/// Each [`Payload`] is posted exactly once: failed deliveries are reported,
/// never retried.
#[derive(Clone, Debug)]
pub struct Webhook {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// URL to post leads to.
    url: Arc<SecretString>,
}

impl Webhook {
    /// Creates a new [`Webhook`] with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create an HTTP client.
    pub fn new(conf: Config) -> Result<Self, Traced<lead::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(Error::Client)
            .map_err(tracerr::from_and_wrap!(=> lead::Error))?;
        Ok(Self {
            client,
            url: Arc::new(conf.url),
        })
    }
}

impl LeadSink<Perform<Payload>> for Webhook {
    /// Indicator whether the [`Payload`] was accepted.
    type Ok = bool;
    type Err = Traced<lead::Error>;

    #[tracing::instrument(
        skip_all,
        fields(tier = %op.0.tier, party_size = op.0.party_size),
    )]
    async fn execute(
        &self,
        op: Perform<Payload>,
    ) -> Result<Self::Ok, Self::Err> {
        let Perform(payload) = op;

        let status = self
            .client
            .post(self.url.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(Error::Request)
            .map_err(tracerr::from_and_wrap!(=> lead::Error))?
            .status();

        if !status.is_success() {
            log::warn!("lead rejected with `{status}` status");
        }
        Ok(status.is_success())
    }
}

/// [`Webhook`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to build an HTTP client.
    #[display("Failed to build HTTP client: {_0}")]
    Client(reqwest::Error),

    /// Failed to deliver a request.
    #[display("Request failed: {_0}")]
    Request(reqwest::Error),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{operations::Perform, DateTime, Percent};
    use httpmock::{Method::POST, MockServer};

    use crate::{
        domain::{
            address::Suggestion,
            geo::{Area, Coordinates},
            lead::{Contact, Email, Name, Payload, Phone},
            pricing::{Catalog, PartySize},
            quote::{DiscountPolicy, Frequency, Input, Quote},
        },
        infra::{lead, LeadSink as _},
    };

    use super::{Config, Error, Webhook};

    fn webhook(url: String) -> Webhook {
        Webhook::new(Config {
            url: url.into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    fn payload() -> Payload {
        let quote = Quote::calculate(
            &Catalog::default(),
            &Input {
                tier: Catalog::FIVE_MEALS,
                party_size: PartySize::from(2),
                frequency: Frequency::Weekly,
                discount: DiscountPolicy::Promo(Percent::new(10.0).unwrap()),
            },
        );
        let address = Suggestion {
            label: "Place Saint-Maurice 74000 Annecy".into(),
            city: "Annecy".into(),
            postcode: "74000".into(),
            coordinates: Coordinates::new(45.898_8, 6.127_1),
        };
        Payload::new(
            Contact {
                name: Name::new("Camille").unwrap(),
                email: Email::new("camille@example.fr").unwrap(),
                phone: Phone::new("0612345678").unwrap(),
                message: None,
            },
            &address,
            &Area::default().classify(Some(address.coordinates)),
            &quote,
            DateTime::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn posts_json_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/hooks/lead")
                .header("content-type", "application/json")
                .body_contains("\"tier\":\"5-meals\"")
                .body_contains("\"partySize\":2")
                .body_contains("\"promoPercent\":10.0");
            then.status(200);
        });

        let accepted = webhook(server.url("/hooks/lead"))
            .execute(Perform(payload()))
            .await
            .unwrap();

        mock.assert();
        assert!(accepted);
    }

    #[tokio::test]
    async fn reports_rejection() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/hooks/lead");
            then.status(500);
        });

        let accepted = webhook(server.url("/hooks/lead"))
            .execute(Perform(payload()))
            .await
            .unwrap();

        mock.assert_hits(1);
        assert!(!accepted);
    }

    #[tokio::test]
    async fn fails_on_unreachable_endpoint() {
        let err = webhook("http://127.0.0.1:9/hooks/lead".into())
            .execute(Perform(payload()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            lead::Error::Webhook(Error::Request(_)),
        ));
    }
}
