//! [`Promotion`] definitions.

use common::{DateTime, Percent};

/// Promotional campaign offering a flat discount on the service price.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Promotion {
    /// Indicator whether this [`Promotion`] is switched on.
    pub active: bool,

    /// Discount offered by this [`Promotion`].
    pub discount: Percent,

    /// Human-readable label of this [`Promotion`].
    pub label: String,

    /// [`DateTime`] this [`Promotion`] ends at, if limited.
    pub expiry: Option<DateTime>,
}

impl Promotion {
    /// Indicates whether this [`Promotion`] applies at the provided
    /// [`DateTime`].
    ///
    /// An expired [`Promotion`] never applies, even if it's still switched
    /// on.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime) -> bool {
        self.active && self.expiry.is_none_or(|expiry| now < expiry)
    }

    /// Returns the discount offered by this [`Promotion`] at the provided
    /// [`DateTime`], if it applies.
    #[must_use]
    pub fn offer_at(&self, now: DateTime) -> Option<Percent> {
        self.is_active_at(now).then_some(self.discount)
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{DateTime, Percent};

    use super::Promotion;

    fn promotion(active: bool, expiry: Option<DateTime>) -> Promotion {
        Promotion {
            active,
            discount: Percent::new(20.0).unwrap(),
            label: "Offre de rentrée".into(),
            expiry,
        }
    }

    #[test]
    fn switched_off_never_applies() {
        let now = DateTime::now();

        assert!(!promotion(false, None).is_active_at(now));
        assert_eq!(promotion(false, None).offer_at(now), None);
    }

    #[test]
    fn unlimited_applies_while_switched_on() {
        let now = DateTime::now();

        assert_eq!(
            promotion(true, None).offer_at(now),
            Percent::new(20.0),
        );
    }

    #[test]
    fn expired_never_applies() {
        let now = DateTime::now();
        let day = Duration::from_secs(24 * 60 * 60);

        assert!(promotion(true, Some(now + day)).is_active_at(now));
        assert!(!promotion(true, Some(now - day)).is_active_at(now));
        assert!(!promotion(true, Some(now)).is_active_at(now));
    }
}
