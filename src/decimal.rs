//! Matcher for signed decimal degree pairs, latitude first.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// Latitude and longitude with their magnitude bounded by the pattern itself.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lat>-?(?:90(?:\.0+)?|[0-8]?\d(?:\.\d+)?)) (?P<lon>-?(?:180(?:\.0+)?|(?:1[0-7]\d|0?\d?\d)(?:\.\d+)?))$",
    )
    .expect("valid decimal pattern")
});

/// Match a stripped, normalized string as `(latitude, longitude)`.
pub fn parse(stripped: &str) -> Option<(f64, f64)> {
    let Some(caps) = DECIMAL.captures(stripped) else {
        trace!("-> No decimal match: {}", stripped);
        return None;
    };

    let lat = caps.name("lat")?.as_str().parse::<f64>().ok()?;
    let lon = caps.name("lon")?.as_str().parse::<f64>().ok()?;
    trace!("-> Found decimal: {} {}", lat, lon);
    Some((lat, lon))
}
