use std::{fmt, str::FromStr};

use crate::{
    dms::Dms,
    error::{Axis, Error},
};

/// Axis order of a decimal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AxisOrder {
    /// `<lon> <lat>`, the WKT order
    #[default]
    LonLat,
    /// `<lat> <lon>`
    LatLon,
}

impl FromStr for AxisOrder {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        match data {
            "lon-lat" => Ok(Self::LonLat),
            "lat-lon" => Ok(Self::LatLon),
            other => Err(Error::InvalidAxisOrder(other.to_string())),
        }
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LonLat => write!(f, "lon-lat"),
            Self::LatLon => write!(f, "lat-lon"),
        }
    }
}

/// A WGS84 position in decimal degrees.
///
/// Both axes are range checked on construction, so a `Point` always
/// satisfies `|lng| <= 180` and `|lat| <= 90`. Negative zero is stored as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    lng: f64,
    lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Result<Self, Error> {
        Ok(Self {
            lng: unsigned_zero(Axis::Longitude.check(lng)?),
            lat: unsigned_zero(Axis::Latitude.check(lat)?),
        })
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// The same point with both axes exchanged.
    ///
    /// Fails if the longitude does not fit on the latitude axis.
    pub fn swapped(&self) -> Result<Self, Error> {
        Self::new(self.lat, self.lng)
    }

    /// Both values separated by a single space, in the requested order.
    pub fn to_decimal_string(self, order: AxisOrder) -> String {
        match order {
            AxisOrder::LonLat => format!("{} {}", self.lng, self.lat),
            AxisOrder::LatLon => format!("{} {}", self.lat, self.lng),
        }
    }

    /// Latitude then longitude as `D°M'S.sss"H`.
    pub fn to_sexagesimal_string(self) -> String {
        format!(
            "{} {}",
            Dms::from_decimal(self.lat, Axis::Latitude),
            Dms::from_decimal(self.lng, Axis::Longitude)
        )
    }
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Well-Known Text: `POINT(<lon> <lat>)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}
