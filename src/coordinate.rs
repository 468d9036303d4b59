use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    decimal,
    error::Error,
    normalize::{normalize, strip_delimiters},
    point::{AxisOrder, Point},
    sexagesimal::SexagesimalMatch,
};

/// Parse a coordinate string into a [`Point`].
///
/// Sexagesimal notation is tried first, then a decimal pair. Both notations
/// put latitude before longitude.
pub fn parse(data: &str) -> Result<Point, Error> {
    let err = || Error::InvalidCoordinateFormat(data.to_string());
    let normalized = normalize(data).ok_or_else(err)?;

    if let Some(dms) = SexagesimalMatch::parse(&normalized) {
        return dms.to_point().map_err(|e| {
            debug!("Rejected coordinate \"{}\": {}", data, e);
            err()
        });
    }

    if let Some((lat, lng)) = strip_delimiters(&normalized)
        .as_deref()
        .and_then(decimal::parse)
    {
        return Point::new(lng, lat);
    }

    debug!("Rejected coordinate: \"{}\"", data);
    Err(err())
}

/// Whether `data` is a coordinate in sexagesimal notation that [`parse`]
/// accepts.
pub fn is_sexagesimal(data: &str) -> bool {
    normalize(data)
        .and_then(|n| SexagesimalMatch::parse(&n))
        .is_some_and(|m| m.to_point().is_ok())
}

/// Whether `data` is a coordinate in decimal notation.
pub fn is_decimal(data: &str) -> bool {
    normalize(data)
        .and_then(|n| strip_delimiters(&n))
        .is_some_and(|s| decimal::parse(&s).is_some())
}

/// A coordinate that may or may not hold a position.
///
/// Every `read_*` call replaces the previous state. The coordinate is
/// cleared before the input is looked at, so a failed read leaves it empty.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Coordinate {
    point: Option<Point>,
    source_text: String,
}

impl Coordinate {
    /// An empty coordinate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(data: &str) -> Result<Self, Error> {
        let mut coord = Self::new();
        coord.read_str(data)?;
        Ok(coord)
    }

    pub fn from_numbers(lng: f64, lat: f64) -> Result<Self, Error> {
        let mut coord = Self::new();
        coord.read_numbers(lng, lat)?;
        Ok(coord)
    }

    /// Read a coordinate string, keeping it as source text on success.
    pub fn read_str(&mut self, data: &str) -> Result<(), Error> {
        self.clear();
        self.point = Some(parse(data)?);
        self.source_text = data.to_string();
        Ok(())
    }

    /// Read a longitude/latitude pair. The source text is cleared.
    pub fn read_numbers(&mut self, lng: f64, lat: f64) -> Result<(), Error> {
        self.clear();
        self.point = Some(Point::new(lng, lat)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.point = None;
        self.source_text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    pub fn point(&self) -> Option<Point> {
        self.point
    }

    pub fn longitude(&self) -> Option<f64> {
        self.point.map(|p| p.lng())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.point.map(|p| p.lat())
    }

    /// The string this coordinate was read from, empty if it was read from
    /// numbers.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    fn stored(&self) -> Result<Point, Error> {
        self.point.ok_or(Error::EmptyCoordinate)
    }

    pub fn to_decimal_string(&self, order: AxisOrder) -> Result<String, Error> {
        Ok(self.stored()?.to_decimal_string(order))
    }

    pub fn to_sexagesimal_string(&self) -> Result<String, Error> {
        Ok(self.stored()?.to_sexagesimal_string())
    }

    pub fn to_wkt(&self) -> Result<String, Error> {
        Ok(self.stored()?.to_string())
    }

    /// Exchange longitude and latitude, e.g. after reading a decimal pair
    /// that was written longitude first.
    ///
    /// Swapping an empty coordinate does nothing. If the longitude is not a
    /// valid latitude the coordinate is left as is.
    pub fn swap(&mut self) -> Result<(), Error> {
        if let Some(point) = self.point {
            self.point = Some(point.swapped().inspect_err(|e| {
                debug!("Refusing to swap: {}", e);
            })?);
        }
        Ok(())
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Self {
            point: Some(point),
            source_text: String::new(),
        }
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Self::parse(data)
    }
}

/// WKT of the stored point, `POINT EMPTY` if there is none.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.point {
            Some(point) => write!(f, "{point}"),
            None => write!(f, "POINT EMPTY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_compact_debug_snapshot;

    use super::*;
    use crate::error::Axis;

    #[test]
    fn parse_sexagesimal() {
        assert_compact_debug_snapshot!(parse("45:34:21 N 120:47:23 E"), @"Ok(Point { lng: 120.78972222222222, lat: 45.5725 })");
        assert_compact_debug_snapshot!(parse("45°34'21\", 120°47'23\""), @r#"Err(InvalidCoordinateFormat("45°34'21\", 120°47'23\""))"#);
        assert_compact_debug_snapshot!(parse("  N 45:34:21,  W 120:47:23 "), @"Ok(Point { lng: -120.78972222222222, lat: 45.5725 })");
        assert_compact_debug_snapshot!(parse("90:00:01 N 120:00:00 E"), @r#"Err(InvalidCoordinateFormat("90:00:01 N 120:00:00 E"))"#);
        assert_compact_debug_snapshot!(parse("10:00:00 N 180:30:00 W"), @r#"Err(InvalidCoordinateFormat("10:00:00 N 180:30:00 W"))"#);
    }

    #[test]
    fn parse_decimal() {
        assert_compact_debug_snapshot!(parse("34.45456 -101.21354"), @"Ok(Point { lng: -101.21354, lat: 34.45456 })");
        assert_compact_debug_snapshot!(parse("34.45456, -101.21354"), @"Ok(Point { lng: -101.21354, lat: 34.45456 })");
        assert_compact_debug_snapshot!(parse("34.45456° -101.21354°"), @"Ok(Point { lng: -101.21354, lat: 34.45456 })");
    }

    #[test]
    fn parse_invalid() {
        assert_compact_debug_snapshot!(parse("not a coordinate"), @r#"Err(InvalidCoordinateFormat("not a coordinate"))"#);
        assert_compact_debug_snapshot!(parse(""), @r#"Err(InvalidCoordinateFormat(""))"#);
        assert_compact_debug_snapshot!(parse(" , "), @r#"Err(InvalidCoordinateFormat(" , "))"#);
        assert_compact_debug_snapshot!(parse("95 10"), @r#"Err(InvalidCoordinateFormat("95 10"))"#);
    }

    #[test]
    fn validators() {
        assert!(is_sexagesimal("45:34:21 N 120:47:23 E"));
        assert!(is_sexagesimal("N 45:34:21, E 120:47:23"));
        assert!(!is_sexagesimal("34.45456 -101.21354"));
        assert!(!is_sexagesimal(""));

        assert!(is_decimal("34.45456 -101.21354"));
        assert!(is_decimal("34.45456,-101.21354"));
        assert!(!is_decimal("45:34:21 N 120:47:23 E"));
        assert!(!is_decimal("   "));
    }

    #[test]
    fn sexagesimal_validator_agrees_with_parse() {
        assert!(is_sexagesimal("90:00:00 N 180:00:00 E"));
        assert!(!is_sexagesimal("90:30:00 N 120:00:00 E"));
        assert!(!is_sexagesimal("10:00:00 N 180:59:59 E"));

        for data in [
            "90:00:00 N 180:00:00 E",
            "90:30:00 N 120:00:00 E",
            "10:00:00 N 180:59:59 E",
            "89:59:59.999 S 179:59:59.999 W",
            "89:60:00 N 179:60:00 W",
            "89:60:01 N 000:00:00 E",
            "S 90:00:00.001 W 0:0:0",
            "N 0:0:0 E 180:00:60",
        ] {
            assert_eq!(is_sexagesimal(data), parse(data).is_ok(), "{data}");
        }
    }

    #[test]
    fn decimal_marks_are_removed_not_replaced() {
        // "4:5 1:2" has no hemisphere letters, so it falls through to the
        // decimal matcher, which drops the colons
        assert_compact_debug_snapshot!(parse("4:5 1:2"), @"Ok(Point { lng: 12.0, lat: 45.0 })");
        assert!(is_decimal("4:5 1:2"));
        assert!(!is_sexagesimal("4:5 1:2"));
    }

    #[test]
    fn negative_zero_is_zero() {
        let coord = Coordinate::parse("00:00:00 S 000:00:00 W").unwrap();
        assert_eq!(coord.to_wkt().unwrap(), "POINT(0 0)");
        assert_eq!(coord.to_decimal_string(AxisOrder::LonLat).unwrap(), "0 0");
        assert_eq!(
            coord.to_sexagesimal_string().unwrap(),
            "0°0'0.000\"N 0°0'0.000\"E"
        );
        assert_eq!(Coordinate::parse("-0.0 -0").unwrap().to_string(), "POINT(0 0)");
    }

    #[test]
    fn read_str_keeps_source_text() {
        let mut coord = Coordinate::new();
        coord.read_str("34.45456 -101.21354").unwrap();
        assert_eq!(coord.source_text(), "34.45456 -101.21354");
        assert_eq!(coord.latitude(), Some(34.45456));
        assert_eq!(coord.longitude(), Some(-101.21354));

        coord.read_numbers(1.5, 2.5).unwrap();
        assert_eq!(coord.source_text(), "");
        assert_eq!(coord.longitude(), Some(1.5));
    }

    #[test]
    fn failed_read_clears() {
        let mut coord = Coordinate::parse("45:34:21 N 120:47:23 E").unwrap();
        assert_eq!(
            coord.read_str("not a coordinate"),
            Err(Error::InvalidCoordinateFormat("not a coordinate".into()))
        );
        assert!(coord.is_empty());
        assert_eq!(coord.source_text(), "");

        let mut coord = Coordinate::from_numbers(10.0, 20.0).unwrap();
        assert_eq!(
            coord.read_numbers(0.0, 91.0),
            Err(Error::OutOfRange {
                axis: Axis::Latitude,
                value: 91.0
            })
        );
        assert_eq!(coord.point(), None);
    }

    #[test]
    fn zero_is_not_empty() {
        let coord = Coordinate::from_numbers(0.0, 0.0).unwrap();
        assert!(!coord.is_empty());
        assert_eq!(coord.to_wkt().unwrap(), "POINT(0 0)");
        assert_eq!(coord.to_decimal_string(AxisOrder::LatLon).unwrap(), "0 0");
        assert_eq!(
            coord.to_sexagesimal_string().unwrap(),
            "0°0'0.000\"N 0°0'0.000\"E"
        );
    }

    #[test]
    fn empty() {
        let coord = Coordinate::new();
        assert_eq!(coord.longitude(), None);
        assert_eq!(coord.latitude(), None);
        assert_eq!(coord.to_wkt(), Err(Error::EmptyCoordinate));
        assert_eq!(coord.to_sexagesimal_string(), Err(Error::EmptyCoordinate));
        assert_eq!(
            coord.to_decimal_string(AxisOrder::LonLat),
            Err(Error::EmptyCoordinate)
        );
        assert_eq!(coord.to_string(), "POINT EMPTY");
    }

    #[test]
    fn swap() {
        let mut coord = Coordinate::from_numbers(10.0, 20.0).unwrap();
        coord.swap().unwrap();
        assert_eq!(coord.longitude(), Some(20.0));
        assert_eq!(coord.latitude(), Some(10.0));

        let mut coord = Coordinate::from_numbers(120.0, 20.0).unwrap();
        assert_compact_debug_snapshot!(coord.swap(), @"Err(OutOfRange { axis: Latitude, value: 120.0 })");
        assert_eq!(coord.longitude(), Some(120.0));
        assert_eq!(coord.latitude(), Some(20.0));

        let mut coord = Coordinate::new();
        assert_eq!(coord.swap(), Ok(()));
        assert!(coord.is_empty());
    }

    #[test]
    fn from_str() {
        let coord: Coordinate = "S 0:30:0 W 0:30:0".parse().unwrap();
        assert_eq!(coord.to_string(), "POINT(-0.5 -0.5)");
        assert_eq!(coord.source_text(), "S 0:30:0 W 0:30:0");
        assert!("".parse::<Coordinate>().is_err());
    }
}
