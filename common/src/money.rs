//! [`Money`]-related definitions.

use std::{fmt, ops};

use crate::Percent;

/// Amount of money in euros.
///
/// Arithmetic on [`Money`] is performed on the raw floating-point amount and
/// never rounds. Rounding happens only when an amount is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(0.0);

    /// Creates a new [`Money`] of the provided `amount` of euros.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount of euros of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

/// Formats integral amounts without decimals, and non-integral ones truncated
/// to two decimals (`54.555` is displayed as `54.55€`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(amount) = *self;
        if amount.fract() == 0.0 {
            return write!(f, "{amount:.0}€");
        }

        // Truncate the decimal representation: `102.3 * 100.0` is
        // `10229.999999999998` in binary.
        let fixed = format!("{amount:.6}");
        let (int, frac) =
            fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        write!(f, "{int}.{}€", &frac[..2])
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl ops::Mul<f64> for Money {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl ops::Mul<Percent> for Money {
    type Output = Self;

    fn mul(self, rhs: Percent) -> Self::Output {
        Self(self.0 * rhs.ratio())
    }
}

impl ops::Div<f64> for Money {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.0)
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Amount of euros, not rounded.
    #[graphql_scalar(with = Self, parse_token(f64, i32))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.amount())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_float_value()
                .or_else(|| input.as_int_value().map(f64::from))
                .map(Self::new)
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-numeric value: {input}",
                    )
                })
        }
    }
}
