//! Geographic eligibility definitions.

use derive_more::{Display, From, Into};

/// Mean radius of the Earth.
pub const EARTH_RADIUS: Kilometers = Kilometers(6371.0);

/// Point on the Earth surface in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates new [`Coordinates`] out of the provided latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates new [`Coordinates`] out of a GeoJSON `[longitude, latitude]`
    /// position.
    #[must_use]
    pub const fn from_lon_lat([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }

    /// Calculates the great-circle distance to the `other` [`Coordinates`]
    /// using the haversine formula.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Kilometers {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Kilometers(EARTH_RADIUS.0 * c)
    }
}

/// Distance in kilometers.
#[derive(
    Clone, Copy, Debug, Default, Display, From, Into, PartialEq, PartialOrd,
)]
#[display("{_0:.2} km")]
pub struct Kilometers(f64);

impl Kilometers {
    /// Creates a new [`Kilometers`] distance.
    #[must_use]
    pub const fn new(km: f64) -> Self {
        Self(km)
    }

    /// Returns the distance as a number of kilometers.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Service area: a disc around the base point of the cooks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    /// Base point the distances are measured from.
    pub center: Coordinates,

    /// Maximum distance still served.
    pub radius: Kilometers,
}

impl Area {
    /// Base point of the service.
    pub const BASE: Coordinates =
        Coordinates::new(45.902_392_926_918_1, 6.124_958_650_165_817);

    /// Maximum distance from the [`Area::BASE`] served normally.
    pub const RADIUS: Kilometers = Kilometers(7.5);

    /// Indicates whether the provided `distance` is within this [`Area`].
    ///
    /// The boundary itself is served.
    #[must_use]
    pub fn covers(&self, distance: Kilometers) -> bool {
        distance <= self.radius
    }

    /// Classifies the provided [`Coordinates`] against this [`Area`].
    ///
    /// No [`Coordinates`] means no address is selected yet, so the
    /// [`Eligibility`] is [`Idle`].
    ///
    /// [`Idle`]: Eligibility::Idle
    #[must_use]
    pub fn classify(&self, coordinates: Option<Coordinates>) -> Eligibility {
        let Some(coordinates) = coordinates else {
            return Eligibility::Idle;
        };
        let check = Check {
            coordinates,
            distance: self.center.distance(&coordinates),
        };
        if self.covers(check.distance) {
            Eligibility::Eligible(check)
        } else {
            Eligibility::NotEligible(check)
        }
    }
}

impl Default for Area {
    fn default() -> Self {
        Self {
            center: Self::BASE,
            radius: Self::RADIUS,
        }
    }
}

/// Result of measuring resolved [`Coordinates`] against an [`Area`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Check {
    /// Resolved [`Coordinates`] of the address.
    pub coordinates: Coordinates,

    /// Distance from the [`Area`] center.
    pub distance: Kilometers,
}

/// Eligibility of an address to the service.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Eligibility {
    /// No address is selected.
    #[default]
    Idle,

    /// Address is within the [`Area`].
    Eligible(Check),

    /// Address is outside the [`Area`].
    NotEligible(Check),
}

impl Eligibility {
    /// Returns the [`Check`] of this [`Eligibility`], if any address was
    /// checked.
    #[must_use]
    pub fn check(&self) -> Option<&Check> {
        match self {
            Self::Idle => None,
            Self::Eligible(c) | Self::NotEligible(c) => Some(c),
        }
    }

    /// Indicates whether this [`Eligibility`] is [`Eligibility::Eligible`].
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible(_))
    }
}

#[cfg(test)]
mod spec {
    use approx::assert_relative_eq;

    use super::{Area, Coordinates, Eligibility, Kilometers, EARTH_RADIUS};

    /// Returns the point lying `km` to the north of the provided one.
    fn north_of(point: Coordinates, km: f64) -> Coordinates {
        Coordinates::new(
            point.latitude + (km / EARTH_RADIUS.value()).to_degrees(),
            point.longitude,
        )
    }

    #[test]
    fn distance_is_symmetric() {
        let annecy = Coordinates::new(45.899_247, 6.129_384);
        let geneva = Coordinates::new(46.204_391, 6.143_158);

        assert_relative_eq!(
            annecy.distance(&geneva).value(),
            geneva.distance(&annecy).value(),
        );
        assert_relative_eq!(
            annecy.distance(&geneva).value(),
            33.9,
            epsilon = 0.1,
        );
        assert_eq!(annecy.distance(&annecy), Kilometers::new(0.0));
    }

    #[test]
    fn distance_along_meridian() {
        let far = north_of(Area::BASE, 10.0);
        assert_relative_eq!(
            Area::BASE.distance(&far).value(),
            10.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn radius_boundary_is_served() {
        let area = Area::default();

        assert!(area.covers(Kilometers::new(7.5)));
        assert!(!area.covers(Kilometers::new(7.500_01)));
        assert!(area.classify(Some(north_of(Area::BASE, 7.499))).is_eligible());
        assert!(
            !area.classify(Some(north_of(Area::BASE, 7.501))).is_eligible()
        );
    }

    #[test]
    fn no_coordinates_is_idle() {
        let area = Area::default();

        assert_eq!(area.classify(None), Eligibility::Idle);
        assert_eq!(area.classify(None).check(), None);
    }

    #[test]
    fn classification_carries_the_check() {
        let point = north_of(Area::BASE, 12.0);

        let Eligibility::NotEligible(check) = Area::default().classify(Some(point))
        else {
            panic!("expected `NotEligible`");
        };
        assert_eq!(check.coordinates, point);
        assert_relative_eq!(check.distance.value(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn geojson_order() {
        let c = Coordinates::from_lon_lat([6.12, 45.9]);
        assert_eq!(c, Coordinates::new(45.9, 6.12));
    }

    #[test]
    fn kilometers_display() {
        assert_eq!(Kilometers::new(7.456).to_string(), "7.46 km");
    }
}
