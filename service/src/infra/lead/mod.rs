//! [`LeadSink`]-related implementations.

#[cfg(feature = "http")]
pub mod webhook;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::webhook::Webhook;

/// Sink [`Perform`]ing the delivery of a lead [`Payload`], reporting whether
/// it was accepted.
///
/// [`Payload`]: crate::domain::lead::Payload
/// [`Perform`]: common::operations::Perform
pub use common::Handler as LeadSink;

/// [`LeadSink`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Webhook`] error.
    Webhook(webhook::Error),
}
