//! Theme-dependent chart colors.

use crate::model::preference::DisplayPreference;
use serde::Serialize;

const PIE_COLORS: [&str; 3] = ["#FF6B6B", "#FFD93D", "#6BCB77"];

/// Colors for the pie, bar and axis strokes under one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPalette {
    /// Indexed like `PIE_STATUSES`.
    pub pie: [&'static str; 3],
    pub bar_fill: &'static str,
    pub axis_stroke: &'static str,
}

impl ChartPalette {
    pub fn for_preference(preference: DisplayPreference) -> Self {
        match preference {
            DisplayPreference::Light => Self {
                pie: PIE_COLORS,
                bar_fill: "#000000",
                axis_stroke: "#333333",
            },
            DisplayPreference::Dark => Self {
                pie: PIE_COLORS,
                bar_fill: "#FF6B6B",
                axis_stroke: "#CCCCCC",
            },
        }
    }
}
