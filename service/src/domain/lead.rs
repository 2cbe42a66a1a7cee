//! Lead definitions.

use std::{str::FromStr, sync::LazyLock};

use common::{DateTime, Money};
use derive_more::{AsRef, Display};
use regex::Regex;
use serde::Serialize;

use crate::domain::{
    address::Suggestion,
    geo::Eligibility,
    quote::{DiscountPolicy, Quote},
};

/// Contact details left by a prospective client.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// [`Name`] of the client.
    pub name: Name,

    /// [`Email`] of the client.
    pub email: Email,

    /// [`Phone`] of the client.
    pub phone: Phone,

    /// Free-form message to the cook.
    pub message: Option<String>,
}

/// Name of a client.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.chars().count() <= 256
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a client.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// French phone number of a client.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    ///
    /// Accepts national (`06 12 34 56 78`) and international
    /// (`+33 6 12 34 56 78`) forms, separated by spaces, dots or dashes.
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?:(?:\+|00)33[\s.-]?|0)[1-9](?:[\s.-]?\d{2}){4}$")
                .expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Flat lead payload handed to a lead sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// [`Name`] of the client.
    pub name: String,

    /// [`Email`] of the client.
    pub email: String,

    /// [`Phone`] of the client.
    pub phone: String,

    /// Message to the cook.
    pub message: Option<String>,

    /// Full address label.
    pub address: String,

    /// City of the address.
    pub city: String,

    /// Postal code of the address.
    pub postcode: String,

    /// Latitude of the address.
    pub latitude: f64,

    /// Longitude of the address.
    pub longitude: f64,

    /// Distance to the service base in kilometers.
    pub distance_km: f64,

    /// Indicator whether the address is within the service area.
    pub eligible: bool,

    /// ID of the selected tier.
    pub tier: String,

    /// Label of the selected tier.
    pub tier_label: String,

    /// Number of meals of the selected tier.
    pub meals: u32,

    /// Number of persons to cook for.
    pub party_size: u32,

    /// Indicator whether the client subscribes.
    pub subscribed: bool,

    /// Frequency of the visits.
    pub frequency: String,

    /// Promotional discount in percents, zero if none.
    pub promo_percent: f64,

    /// Service price before any discount.
    pub gross_price: Money,

    /// Subscription discount amount.
    pub subscription_discount: Money,

    /// Promotional discount amount.
    pub promo_discount: Money,

    /// Amount payable to the cook.
    pub amount_due: Money,

    /// Tax credit amount.
    pub tax_credit: Money,

    /// Final cost after the tax credit.
    pub net_cost: Money,

    /// Lower bound of the grocery estimate.
    pub grocery_min: Money,

    /// Upper bound of the grocery estimate.
    pub grocery_max: Money,

    /// Service price of a single meal.
    pub price_per_meal: Money,

    /// [`DateTime`] the lead was submitted at.
    pub submitted_at: DateTime,
}

impl Payload {
    /// Assembles a new [`Payload`] out of the provided [`Contact`], selected
    /// address [`Suggestion`] with its [`Eligibility`], and [`Quote`].
    ///
    /// [`None`] is returned if the [`Eligibility`] is [`Eligibility::Idle`].
    #[must_use]
    pub fn new(
        contact: Contact,
        address: &Suggestion,
        eligibility: &Eligibility,
        quote: &Quote,
        submitted_at: DateTime,
    ) -> Option<Self> {
        let Contact {
            name,
            email,
            phone,
            message,
        } = contact;
        let check = eligibility.check()?;
        let promo_percent = match quote.discount {
            DiscountPolicy::Promo(p) => p.value(),
            DiscountPolicy::None | DiscountPolicy::Subscription => 0.0,
        };

        Some(Self {
            name: name.0,
            email: email.0,
            phone: phone.0,
            message: message.filter(|m| !m.trim().is_empty()),
            address: address.label.clone(),
            city: address.city.clone(),
            postcode: address.postcode.clone(),
            latitude: check.coordinates.latitude,
            longitude: check.coordinates.longitude,
            distance_km: check.distance.value(),
            eligible: eligibility.is_eligible(),
            tier: quote.tier.id.to_string(),
            tier_label: quote.tier.label.clone(),
            meals: quote.tier.meals.into(),
            party_size: quote.party_size.into(),
            subscribed: quote.discount == DiscountPolicy::Subscription,
            frequency: quote.frequency.to_string(),
            promo_percent,
            gross_price: quote.gross_price,
            subscription_discount: quote.subscription_discount,
            promo_discount: quote.promo_discount,
            amount_due: quote.amount_due,
            tax_credit: quote.tax_credit,
            net_cost: quote.net_cost,
            grocery_min: quote.grocery.min,
            grocery_max: quote.grocery.max,
            price_per_meal: quote.price_per_meal(),
            submitted_at,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Percent};
    use serde_json::json;

    use crate::domain::{
        address::Suggestion,
        geo::{Area, Coordinates, Eligibility},
        pricing::{Catalog, PartySize},
        quote::{DiscountPolicy, Frequency, Input, Quote},
    };

    use super::{Contact, Email, Name, Payload, Phone};

    fn contact() -> Contact {
        Contact {
            name: Name::new("Camille Martin").unwrap(),
            email: Email::new("camille@example.fr").unwrap(),
            phone: Phone::new("06 12 34 56 78").unwrap(),
            message: Some("  ".into()),
        }
    }

    #[test]
    fn validates_names() {
        assert!(Name::new("Camille").is_some());
        assert!(Name::new(" Camille").is_none());
        assert!(Name::new("").is_none());
    }

    #[test]
    fn limits_name_length_in_characters() {
        assert!(Name::new("é".repeat(256)).is_some());
        assert!(Name::new("é".repeat(257)).is_none());
    }

    #[test]
    fn validates_emails() {
        assert!(Email::new("camille@example.fr").is_some());
        assert!("camille.martin+cook@mail.example.com".parse::<Email>().is_ok());
        assert!(Email::new("camille@example").is_none());
        assert!(Email::new("camille example.fr").is_none());
        assert!(Email::new("@example.fr").is_none());
    }

    #[test]
    fn validates_french_phones() {
        for valid in [
            "0612345678",
            "06 12 34 56 78",
            "06.12.34.56.78",
            "06-12-34-56-78",
            "+33 6 12 34 56 78",
            "+33612345678",
            "0033 6 12 34 56 78",
        ] {
            assert!(Phone::new(valid).is_some(), "`{valid}` must be valid");
        }
        for invalid in ["0012345678", "06 12 34 56", "+1 555 123 4567", "phone"] {
            assert!(Phone::new(invalid).is_none(), "`{invalid}` must be invalid");
        }
    }

    #[test]
    fn payload_is_flat() {
        let quote = Quote::calculate(
            &Catalog::default(),
            &Input {
                tier: Catalog::SIX_MEALS,
                party_size: PartySize::from(4),
                frequency: Frequency::Biweekly,
                discount: DiscountPolicy::Promo(Percent::new(20.0).unwrap()),
            },
        );
        let address = Suggestion {
            label: "1 Rue Royale 74000 Annecy".into(),
            city: "Annecy".into(),
            postcode: "74000".into(),
            coordinates: Coordinates::new(45.9, 6.125),
        };
        let eligibility = Area::default().classify(Some(address.coordinates));
        let at = DateTime::from_rfc3339("2026-03-01T11:30:00Z").unwrap();

        let payload =
            Payload::new(contact(), &address, &eligibility, &quote, at)
                .unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], json!("Camille Martin"));
        assert_eq!(json["message"], json!(null));
        assert_eq!(json["postcode"], json!("74000"));
        assert_eq!(json["eligible"], json!(true));
        assert_eq!(json["tier"], json!("6-meals"));
        assert_eq!(json["partySize"], json!(4));
        assert_eq!(json["subscribed"], json!(false));
        assert_eq!(json["frequency"], json!("biweekly"));
        assert_eq!(json["promoPercent"], json!(20.0));
        assert_eq!(json["grossPrice"], json!(270.0));
        assert_eq!(json["amountDue"], json!(216.0));
        assert_eq!(json["netCost"], json!(108.0));
        assert_eq!(json["groceryMin"], json!(96.0));
        assert_eq!(json["submittedAt"], json!("2026-03-01T11:30:00Z"));
    }

    #[test]
    fn no_payload_without_address_check() {
        let quote = Quote::calculate(
            &Catalog::default(),
            &Input {
                tier: Catalog::THREE_MEALS,
                party_size: PartySize::ONE,
                frequency: Frequency::Weekly,
                discount: DiscountPolicy::None,
            },
        );
        let address = Suggestion {
            label: "Annecy".into(),
            city: "Annecy".into(),
            postcode: "74000".into(),
            coordinates: Area::BASE,
        };

        assert!(Payload::new(
            contact(),
            &address,
            &Eligibility::Idle,
            &quote,
            DateTime::now(),
        )
        .is_none());
    }
}
