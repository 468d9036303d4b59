use std::fmt;

/// One of the two axes of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude (in degrees) allowed on this axis.
    pub fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Check that `value` lies within `[-limit, limit]`.
    ///
    /// NaN and infinities are rejected.
    pub fn check(self, value: f64) -> Result<f64, Error> {
        if value.abs() <= self.limit() {
            Ok(value)
        } else {
            Err(Error::OutOfRange { axis: self, value })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors returned when reading or formatting a coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input matched neither the sexagesimal nor the decimal notation.
    #[error("invalid coordinate format: \"{0}\"")]
    InvalidCoordinateFormat(String),
    /// A numeric value lies outside the bounds of its axis.
    #[error("{axis} {value} out of range (limit is ±{})", .axis.limit())]
    OutOfRange { axis: Axis, value: f64 },
    /// No coordinate has been stored yet.
    #[error("coordinate is empty")]
    EmptyCoordinate,
    /// Unknown axis order selector.
    #[error("invalid axis order: \"{0}\" (expected \"lon-lat\" or \"lat-lon\")")]
    InvalidAxisOrder(String),
}
