//! Depth → color classification.
//!
//! The band table is shared with the legend so both always agree on the
//! thresholds.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthColor {
    Black,
    Chartreuse,
    YellowGreen,
    Gold,
    Orange,
    DarkOrange,
    Red,
}

impl DepthColor {
    /// CSS named color.
    pub fn as_str(&self) -> &'static str {
        match self {
            DepthColor::Black => "black",
            DepthColor::Chartreuse => "chartreuse",
            DepthColor::YellowGreen => "yellowgreen",
            DepthColor::Gold => "gold",
            DepthColor::Orange => "orange",
            DepthColor::DarkOrange => "darkorange",
            DepthColor::Red => "red",
        }
    }
}

impl std::fmt::Display for DepthColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legend boundaries in km. The last value is a display sentinel, not a
/// classification limit: everything deeper than 90 km is red.
pub const DEPTH_LIMITS: [f64; 7] = [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0, 1000.0];

/// Colors for the six bands between consecutive `DEPTH_LIMITS`.
pub const DEPTH_BANDS: [DepthColor; 6] = [
    DepthColor::Chartreuse,
    DepthColor::YellowGreen,
    DepthColor::Gold,
    DepthColor::Orange,
    DepthColor::DarkOrange,
    DepthColor::Red,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleResult {
    pub color: DepthColor,
    pub fill_color: DepthColor,
}

impl StyleResult {
    fn uniform(color: DepthColor) -> Self {
        Self {
            color,
            fill_color: color,
        }
    }
}

/// Classify an event depth (km, may be negative).
///
/// First band wins. The lowest band is closed on both ends; the rest are
/// `(lower, upper]`. Anything matching no band, NaN included, is black.
pub fn classify(depth: f64) -> StyleResult {
    let color = if (-10.0..=10.0).contains(&depth) {
        DepthColor::Chartreuse
    } else if depth > 10.0 && depth <= 30.0 {
        DepthColor::YellowGreen
    } else if depth > 30.0 && depth <= 50.0 {
        DepthColor::Gold
    } else if depth > 50.0 && depth <= 70.0 {
        DepthColor::Orange
    } else if depth > 70.0 && depth <= 90.0 {
        DepthColor::DarkOrange
    } else if depth > 90.0 {
        DepthColor::Red
    } else {
        DepthColor::Black
    };
    StyleResult::uniform(color)
}
