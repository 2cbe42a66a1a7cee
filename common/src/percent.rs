//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;

/// Floating-point percentage in `[0, 100]` range.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd)]
#[display("{_0}%")]
pub struct Percent(f64);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: f64) -> Option<Self> {
        // `NaN` is never contained in a range.
        (0.0..=100.0).contains(&val).then_some(Self(val))
    }

    /// Returns the raw value of this [`Percent`] (`15.0` for `15%`).
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns this [`Percent`] as a ratio (`0.15` for `15%`).
    #[must_use]
    pub fn ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// Indicates whether this [`Percent`] is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_end_matches('%')
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let val = f64::deserialize(deserializer)?;
            Self::new(val).ok_or_else(|| {
                de::Error::custom(format!(
                    "percent must be in `[0, 100]` range, found: {val}",
                ))
            })
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Percentage in `[0, 100]` range.
    #[graphql_scalar(with = Self, parse_token(f64, i32))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(p: &Percent) -> Value<S> {
            Value::scalar(p.value())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_float_value()
                .or_else(|| input.as_int_value().map(f64::from))
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-numeric value: {input}",
                    )
                })
                .and_then(|v| {
                    Self::new(v).ok_or_else(|| {
                        format!(
                            "Cannot parse `Percent` input scalar: {v} is \
                             out of `[0, 100]` range",
                        )
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Percent;

    #[test]
    fn rejects_out_of_range() {
        assert!(Percent::new(0.0).is_some());
        assert!(Percent::new(100.0).is_some());
        assert!(Percent::new(-0.1).is_none());
        assert!(Percent::new(100.1).is_none());
        assert!(Percent::new(f64::NAN).is_none());
    }

    #[test]
    fn detects_zero() {
        assert!(Percent::new(0.0).unwrap().is_zero());
        assert!(!Percent::new(0.5).unwrap().is_zero());
    }

    #[test]
    fn ratio() {
        assert_eq!(Percent::new(15.0).unwrap().ratio(), 0.15);
        assert_eq!(Percent::new(50.0).unwrap().ratio(), 0.5);
        assert_eq!(Percent::new(20.0).unwrap().ratio(), 0.2);
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("20").unwrap().value(), 20.0);
        assert_eq!(Percent::from_str("12.5%").unwrap().value(), 12.5);
        assert!(Percent::from_str("120").is_err());
        assert!(Percent::from_str("abc").is_err());
    }
}
