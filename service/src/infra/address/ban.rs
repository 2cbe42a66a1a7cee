//! [Base Adresse Nationale][1] [`AddressLookup`] implementation.
//!
//! [1]: https://adresse.data.gouv.fr/outils/api-doc/adresse

use std::time::Duration;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError};
use reqwest::StatusCode;
use serde::Deserialize;
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        address::{Query, Suggestion},
        geo::Coordinates,
    },
    infra::{address, AddressLookup},
};

/// [`BanApi`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the API.
    #[default("https://api-adresse.data.gouv.fr".to_owned())]
    pub base_url: String,

    /// Maximum number of [`Suggestion`]s returned per lookup.
    #[default(5)]
    pub limit: u8,

    /// Timeout of a single lookup request.
    #[default(Duration::from_secs(5))]
    pub timeout: Duration,
}

/// [`AddressLookup`] backed by the French national address API.
#[derive(Clone, Debug)]
pub struct BanApi {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// Full URL of the search endpoint.
    search_url: String,

    /// Maximum number of [`Suggestion`]s returned per lookup.
    limit: u8,
}

impl BanApi {
    /// Creates a new [`BanApi`] with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create an HTTP client.
    pub fn new(conf: &Config) -> Result<Self, Traced<address::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(Error::Client)
            .map_err(tracerr::from_and_wrap!(=> address::Error))?;
        Ok(Self {
            client,
            search_url: format!(
                "{}/search/",
                conf.base_url.trim_end_matches('/'),
            ),
            limit: conf.limit,
        })
    }
}

impl AddressLookup<Select<By<Vec<Suggestion>, Query>>> for BanApi {
    type Ok = Vec<Suggestion>;
    type Err = Traced<address::Error>;

    #[tracing::instrument(skip_all, fields(query = %op.0.as_inner()))]
    async fn execute(
        &self,
        op: Select<By<Vec<Suggestion>, Query>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Select(by) = op;
        let query = by.into_inner();
        let q: &str = query.as_ref();

        let resp = self
            .client
            .get(&self.search_url)
            .query(&[("q", q)])
            .query(&[("limit", self.limit)])
            .send()
            .await
            .map_err(Error::Request)
            .map_err(tracerr::from_and_wrap!(=> address::Error))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(tracerr::new!(address::Error::from(Error::Status(
                status
            ))));
        }

        let collection = resp
            .json::<FeatureCollection>()
            .await
            .map_err(Error::Request)
            .map_err(tracerr::from_and_wrap!(=> address::Error))?;
        log::debug!("found {} addresses", collection.features.len());

        Ok(collection
            .features
            .into_iter()
            .map(|f| Suggestion {
                label: f.properties.label,
                city: f.properties.city,
                postcode: f.properties.postcode,
                coordinates: Coordinates::from_lon_lat(f.geometry.coordinates),
            })
            .collect())
    }
}

/// GeoJSON collection of found addresses.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    /// Found addresses, ranked by relevance.
    features: Vec<Feature>,
}

/// Single found address.
#[derive(Debug, Deserialize)]
struct Feature {
    /// Description of the address.
    properties: Properties,

    /// Location of the address.
    geometry: Geometry,
}

/// Description of a [`Feature`].
#[derive(Debug, Deserialize)]
struct Properties {
    /// Full label.
    label: String,

    /// City name.
    #[serde(default)]
    city: String,

    /// Postal code.
    #[serde(default)]
    postcode: String,
}

/// GeoJSON point of a [`Feature`].
#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude]` position.
    coordinates: [f64; 2],
}

/// [`BanApi`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to build an HTTP client.
    #[display("Failed to build HTTP client: {_0}")]
    Client(reqwest::Error),

    /// Failed to perform a request or to decode its response.
    #[display("Request failed: {_0}")]
    Request(reqwest::Error),

    /// API responded with an unexpected status.
    #[display("Unexpected response status: {_0}")]
    Status(#[error(not(source))] StatusCode),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::operations::{By, Select};
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    use crate::{
        domain::{
            address::{Query, Suggestion},
            geo::Coordinates,
        },
        infra::{address, AddressLookup as _},
    };

    use super::{BanApi, Config, Error};

    fn api(server: &MockServer) -> BanApi {
        BanApi::new(&Config {
            base_url: server.base_url(),
            limit: 3,
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    fn lookup(text: &str) -> Select<By<Vec<Suggestion>, Query>> {
        Select(By::new(Query::new(text).unwrap()))
    }

    #[tokio::test]
    async fn parses_geojson_features() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/")
                .query_param("q", "rue royale annecy")
                .query_param("limit", "3");
            then.status(200).json_body(json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [6.126_47, 45.900_75],
                    },
                    "properties": {
                        "label": "Rue Royale 74000 Annecy",
                        "city": "Annecy",
                        "postcode": "74000",
                        "score": 0.93,
                    },
                }, {
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [2.33, 48.86],
                    },
                    "properties": { "label": "Paris" },
                }],
            }));
        });

        let found = api(&server)
            .execute(lookup("  rue royale annecy "))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(found.len(), 2);
        assert_eq!(
            found[0],
            Suggestion {
                label: "Rue Royale 74000 Annecy".into(),
                city: "Annecy".into(),
                postcode: "74000".into(),
                coordinates: Coordinates::new(45.900_75, 6.126_47),
            },
        );
        assert_eq!(found[1].city, "");
    }

    #[tokio::test]
    async fn fails_on_unexpected_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/search/");
            then.status(503);
        });

        let err = api(&server).execute(lookup("annecy")).await.unwrap_err();

        mock.assert();
        assert!(matches!(
            err.as_ref(),
            address::Error::Ban(Error::Status(s)) if s.as_u16() == 503,
        ));
    }

    #[tokio::test]
    async fn fails_on_malformed_body() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/search/");
            then.status(200).body("<html></html>");
        });

        let err = api(&server).execute(lookup("annecy")).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            address::Error::Ban(Error::Request(_)),
        ));
    }
}
