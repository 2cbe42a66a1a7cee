//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use std::{sync::Arc, time::Duration};

use common::DateTime;
use smart_default::SmartDefault;

use crate::domain::{
    address::search, geo::Area, wizard::Selections, Catalog, Promotion, Wizard,
};
#[cfg(doc)]
use crate::infra::{AddressLookup, LeadSink};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Pricing [`Catalog`] to quote with.
    pub catalog: Arc<Catalog>,

    /// Service [`Area`] to check addresses against.
    pub area: Area,

    /// Currently configured [`Promotion`].
    pub promotion: Promotion,

    /// Address suggestions configuration.
    pub suggestions: SuggestionsConfig,
}

/// Address suggestions configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct SuggestionsConfig {
    /// Quiet period a query must survive before being looked up.
    #[default(Duration::from_millis(300))]
    pub debounce: Duration,

    /// Maximum number of concurrently tracked search sessions.
    #[default(10_000)]
    pub sessions: usize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Addresses, Leads> {
    /// Configuration of this [`Service`].
    config: Arc<Config>,

    /// [`AddressLookup`] of this [`Service`].
    addresses: Addresses,

    /// [`LeadSink`] of this [`Service`].
    leads: Leads,

    /// Tracked address search sessions.
    searches: Arc<search::Sessions>,
}

impl<Addresses, Leads> Service<Addresses, Leads> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, addresses: Addresses, leads: Leads) -> Self {
        let searches = Arc::new(search::Sessions::new(config.suggestions.sessions));
        Self {
            config: Arc::new(config),
            addresses,
            leads,
            searches,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`AddressLookup`] of this [`Service`].
    #[must_use]
    pub fn addresses(&self) -> &Addresses {
        &self.addresses
    }

    /// Returns [`LeadSink`] of this [`Service`].
    #[must_use]
    pub fn leads(&self) -> &Leads {
        &self.leads
    }

    /// Returns the tracked address search sessions.
    #[must_use]
    pub fn searches(&self) -> &search::Sessions {
        &self.searches
    }

    /// Restores a [`Wizard`] from the provided [`Selections`], offering the
    /// [`Promotion`] active at the provided [`DateTime`].
    #[must_use]
    pub fn wizard(&self, selections: Selections, now: DateTime) -> Wizard {
        let Config {
            catalog,
            area,
            promotion,
            suggestions: _,
        } = self.config();
        Wizard::restore(
            Arc::clone(catalog),
            *area,
            promotion.offer_at(now),
            selections,
        )
    }
}
