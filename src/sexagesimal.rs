//! Matcher for degrees/minutes/seconds notation.
//!
//! Two layouts are recognized, both latitude first:
//!
//! - Suffixed: `45:34:21 N 120:47:23 E`, `45°34'21"N 120°47'23"E`
//! - Prefixed: `N 45:34:21 E 120:47:23`
//!
//! Field bounds are part of the grammar: latitude degrees 0-90, longitude
//! degrees 0-180, minutes 0-60, seconds 0-60 (seconds may carry a fraction).
//! The axis bound on the combined value is checked by
//! [`SexagesimalMatch::to_point`].

use std::sync::LazyLock;

use log::trace;
use regex::{Captures, Regex};

use crate::{
    dms::{Dms, Hemisphere},
    error::{Axis, Error},
    point::Point,
};

const LAT_DEG: &str = r"0?\d|[1-8]\d|90";
const LON_DEG: &str = r"0{0,2}\d|0?[1-9]\d|1[0-7]\d|180";
const MIN: &str = r"[0-5]?\d|60";
const SEC: &str = r"[0-5]?\d(?:\.\d+)?|60(?:\.0+)?";

const DEG_MARK: &str = r"(?:[:°º]\s?|\s)";
const MIN_MARK: &str = r"(?:[:'’′]\s?|\s)";
const SEC_MARK: &str = r#"(?:["”″]|''|’’|′′)?"#;

/// Pattern for one degrees/minutes/seconds group with named captures.
fn group(prefix: &str, degrees: &str) -> String {
    format!(
        "(?P<{prefix}_deg>{degrees}){DEG_MARK}(?P<{prefix}_min>{MIN}){MIN_MARK}(?P<{prefix}_sec>{SEC}){SEC_MARK}"
    )
}

static SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)^{}\s?(?P<lat_hem>[NS])\s?{}\s?(?P<lon_hem>[EW])$",
        group("lat", LAT_DEG),
        group("lon", LON_DEG),
    );
    Regex::new(&pattern).expect("valid suffixed sexagesimal pattern")
});

static PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)^(?P<lat_hem>[NS])\s?{}\s?(?P<lon_hem>[EW])\s?{}$",
        group("lat", LAT_DEG),
        group("lon", LON_DEG),
    );
    Regex::new(&pattern).expect("valid prefixed sexagesimal pattern")
});

/// The decomposed latitude and longitude groups of a sexagesimal match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexagesimalMatch {
    pub lat: Dms,
    pub lng: Dms,
}

impl SexagesimalMatch {
    /// Match a normalized string. Returns `None` if neither layout fits.
    pub fn parse(normalized: &str) -> Option<Self> {
        let (layout, caps) = if let Some(caps) = SUFFIXED.captures(normalized) {
            ("suffixed", caps)
        } else if let Some(caps) = PREFIXED.captures(normalized) {
            ("prefixed", caps)
        } else {
            trace!("-> No sexagesimal match: {}", normalized);
            return None;
        };

        let lat = extract(&caps, "lat", Axis::Latitude)?;
        let lng = extract(&caps, "lon", Axis::Longitude)?;
        trace!("-> Found {} sexagesimal: {} {}", layout, lat, lng);
        Some(Self { lat, lng })
    }

    /// Signed decimal latitude and longitude.
    pub fn to_decimal(self) -> (f64, f64) {
        (self.lat.to_decimal(), self.lng.to_decimal())
    }

    /// The matched position. `90:30:00 N` passes the field bounds but not
    /// the axis bound, so this can fail with `OutOfRange`.
    pub fn to_point(self) -> Result<Point, Error> {
        let (lat, lng) = self.to_decimal();
        Point::new(lng, lat)
    }
}

fn extract(caps: &Captures, prefix: &str, axis: Axis) -> Option<Dms> {
    let field = |name: &str| caps.name(&format!("{prefix}_{name}")).map(|m| m.as_str());
    Some(Dms {
        degrees: field("deg")?.parse().ok()?,
        minutes: field("min")?.parse().ok()?,
        seconds: field("sec")?.parse().ok()?,
        hemisphere: Hemisphere::parse(field("hem")?, axis)?,
    })
}
