//! Proficiency banding: similarity score to tier label and color.
//!
//! The color is a pure presentation hint keyed off the same band table as
//! the label, so the two can never disagree.

/// Inclusive lower bound, tier label, presentation color. Highest band first.
const BANDS: &[(f64, &str, &str)] = &[
    (0.75, "Expert", "#2e7d32"),
    (0.50, "Proficient", "#1976d2"),
    (0.25, "Developing", "#f9a825"),
    (0.00, "Needs Development", "#c62828"),
];

/// Maps a similarity score in [0, 1] to its (label, color) band.
pub fn band_for(similarity: f64) -> (&'static str, &'static str) {
    BANDS
        .iter()
        .find(|(floor, _, _)| similarity >= *floor)
        .map(|(_, label, color)| (*label, *color))
        // NaN compares false against every floor and lands here.
        .unwrap_or(("Needs Development", "#c62828"))
}
