//! [`Config`]-related definitions.

use std::time;

use common::{DateTime, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{
    domain::{
        geo::{self, Coordinates, Kilometers},
        Catalog,
    },
    infra::{address::ban, lead::webhook},
    SuggestionsConfig,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Address lookup configuration.
    pub address: Address,

    /// Lead webhook configuration.
    pub webhook: Webhook,

    /// Service area configuration.
    pub area: Area,

    /// Promotion configuration.
    pub promotion: Promotion,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Builds the [`service::Config`] out of this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        let Self {
            address,
            area,
            promotion,
            ..
        } = self;
        service::Config {
            catalog: Catalog::default().into(),
            area: (*area).into(),
            promotion: promotion.clone().into(),
            suggestions: SuggestionsConfig {
                debounce: address.debounce,
                sessions: address.sessions,
            },
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Address lookup configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Address {
    /// Base URL of the [BAN] API.
    ///
    /// [BAN]: https://adresse.data.gouv.fr
    #[default("https://api-adresse.data.gouv.fr".to_owned())]
    pub base_url: String,

    /// Maximum number of suggestions per lookup.
    #[default(5)]
    pub limit: u8,

    /// Timeout of a single lookup request.
    #[default(time::Duration::from_secs(5))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// Quiet period an input must survive before being looked up.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub debounce: time::Duration,

    /// Maximum number of concurrently tracked search sessions.
    #[default(10_000)]
    pub sessions: usize,
}

impl From<Address> for ban::Config {
    fn from(value: Address) -> Self {
        let Address {
            base_url,
            limit,
            timeout,
            debounce: _,
            sessions: _,
        } = value;
        Self {
            base_url,
            limit,
            timeout,
        }
    }
}

/// Lead webhook configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Webhook {
    /// URL to post leads to.
    #[default("http://127.0.0.1:5678/webhook/lead".to_owned())]
    pub url: String,

    /// Timeout of a single delivery request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Webhook> for webhook::Config {
    fn from(value: Webhook) -> Self {
        let Webhook { url, timeout } = value;
        Self {
            url: url.into(),
            timeout,
        }
    }
}

/// Service area configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Area {
    /// Latitude of the base point, in degrees.
    #[default(geo::Area::BASE.latitude)]
    pub latitude: f64,

    /// Longitude of the base point, in degrees.
    #[default(geo::Area::BASE.longitude)]
    pub longitude: f64,

    /// Radius around the base point, in kilometers.
    #[default(geo::Area::RADIUS.value())]
    pub radius_km: f64,
}

impl From<Area> for geo::Area {
    fn from(value: Area) -> Self {
        let Area {
            latitude,
            longitude,
            radius_km,
        } = value;
        Self {
            center: Coordinates::new(latitude, longitude),
            radius: Kilometers::new(radius_km),
        }
    }
}

/// Promotion configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Promotion {
    /// Indicator whether the promotion is switched on.
    pub active: bool,

    /// Discount percent offered by the promotion.
    pub discount: Percent,

    /// Human-readable label of the promotion.
    pub label: String,

    /// [RFC 3339] date and time the promotion ends at, if limited.
    ///
    /// [RFC 3339]: https://datatracker.ietf.org/doc/html/rfc3339
    pub expiry: Option<DateTime>,
}

impl From<Promotion> for service::domain::Promotion {
    fn from(value: Promotion) -> Self {
        let Promotion {
            active,
            discount,
            label,
            expiry,
        } = value;
        Self {
            active,
            discount,
            label,
            expiry,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
