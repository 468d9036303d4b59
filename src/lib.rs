//! Parser and formatter for WGS84 coordinates written as text.
//!
//! Two notations are understood, both with latitude before longitude:
//!
//! - Sexagesimal (degrees, minutes, seconds and a hemisphere letter), e.g.
//!   `45:34:21 N 120:47:23 E`, `45°34'21"N 120°47'23"E` or
//!   `N 45:34:21 E 120:47:23`
//! - Decimal degrees, e.g. `34.45456 -101.21354` or `34.45456, -101.21354`
//!
//! Use [`parse`](fn.parse.html) to turn a string into a [`Point`], or keep
//! the state in a [`Coordinate`], which also remembers the source text and
//! renders decimal, sexagesimal and WKT output.
//!
//! ```
//! use wgs84_coords::{AxisOrder, Coordinate};
//!
//! let coord: Coordinate = "34.45456 -101.21354".parse().unwrap();
//! assert_eq!(coord.to_wkt().unwrap(), "POINT(-101.21354 34.45456)");
//! assert_eq!(
//!     coord.to_decimal_string(AxisOrder::LatLon).unwrap(),
//!     "34.45456 -101.21354"
//! );
//! ```
//!
//! ## Implementation Notes
//!
//! Input is normalized first: commas become spaces and whitespace runs are
//! collapsed. The sexagesimal grammar is tried before the decimal one. Range
//! checks for degrees, minutes and seconds are part of the grammars, so an
//! out-of-range field simply does not match.
//!
//! A decimal pair is always read as latitude, longitude. If the input was
//! written the other way round, [`Coordinate::swap`] fixes it up.
#![deny(clippy::all)]

mod coordinate;
mod decimal;
mod dms;
mod error;
mod normalize;
mod point;
mod sexagesimal;

pub use crate::{
    coordinate::{Coordinate, is_decimal, is_sexagesimal, parse},
    dms::{Dms, Hemisphere},
    error::{Axis, Error},
    point::{AxisOrder, Point},
};
