//! [`AddressLookup`]-related implementations.

#[cfg(feature = "http")]
pub mod ban;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::ban::BanApi;

/// Lookup of address [`Suggestion`]s by a free-text [`Query`].
///
/// [`Query`]: crate::domain::address::Query
/// [`Suggestion`]: crate::domain::address::Suggestion
pub use common::Handler as AddressLookup;

/// [`AddressLookup`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`BanApi`] error.
    Ban(ban::Error),
}
