//! [`Command`] definition.

pub mod submit_lead;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::submit_lead::SubmitLead;
