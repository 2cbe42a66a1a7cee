//! Infrastructure layer.

pub mod address;
pub mod lead;

#[cfg(feature = "http")]
pub use self::{address::BanApi, lead::Webhook};
pub use self::{address::AddressLookup, lead::LeadSink};
