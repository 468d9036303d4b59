use std::fmt;

use crate::error::Axis;

/// Hemisphere letter of a sexagesimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Parse a hemisphere letter (case-insensitive) valid for `axis`.
    pub fn parse(data: &str, axis: Axis) -> Option<Self> {
        let mut chars = data.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match (axis, ch) {
            (Axis::Latitude, 'N' | 'n') => Some(Self::N),
            (Axis::Latitude, 'S' | 's') => Some(Self::S),
            (Axis::Longitude, 'E' | 'e') => Some(Self::E),
            (Axis::Longitude, 'W' | 'w') => Some(Self::W),
            _ => None,
        }
    }

    /// Hemisphere of a signed decimal value. Zero counts as north/east.
    pub fn of(value: f64, axis: Axis) -> Self {
        match (axis, value >= 0.0) {
            (Axis::Latitude, true) => Self::N,
            (Axis::Latitude, false) => Self::S,
            (Axis::Longitude, true) => Self::E,
            (Axis::Longitude, false) => Self::W,
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::S | Self::W)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An unsigned degrees/minutes/seconds value with its hemisphere.
///
/// The sign of the value lives in the hemisphere only; all fields are
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Split a signed decimal value into degrees, minutes and seconds.
    ///
    /// The value is rounded to whole milliseconds of arc first, so rounding
    /// carries into minutes and degrees and seconds stay below 60.
    pub fn from_decimal(value: f64, axis: Axis) -> Self {
        let millis = (value.abs() * 3_600_000.0).round() as u64;
        Self {
            degrees: (millis / 3_600_000) as u16,
            minutes: (millis % 3_600_000 / 60_000) as u8,
            seconds: (millis % 60_000) as f64 / 1000.0,
            hemisphere: Hemisphere::of(value, axis),
        }
    }

    /// Signed decimal degrees (negative for `S` and `W`).
    pub fn to_decimal(self) -> f64 {
        let value =
            f64::from(self.degrees) + (f64::from(self.minutes) + self.seconds / 60.0) / 60.0;
        if self.hemisphere.is_negative() {
            -value
        } else {
            value
        }
    }
}

/// Formats as `D°M'S.sss"H`, seconds with exactly three decimals.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}°{}'{:.3}\"{}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}
