//! Domain definitions.

pub mod address;
pub mod geo;
pub mod lead;
pub mod pricing;
pub mod promotion;
pub mod quote;
pub mod wizard;

pub use self::{
    pricing::{Catalog, Tier},
    promotion::Promotion,
    quote::Quote,
    wizard::Wizard,
};
