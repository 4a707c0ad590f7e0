//! Color banding for proportional bars and TPS impact figures.
//!
//! Bands serialize as the surface's css classes (`color-green` ..
//! `color-red`) because the embedded driver applies them verbatim.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorBand {
    #[serde(rename = "color-green")]
    Low,
    #[serde(rename = "color-yellow")]
    Medium,
    #[serde(rename = "color-orange")]
    High,
    #[serde(rename = "color-red")]
    Critical,
}

/// Band a value against a scale: value/max as a percentage, quartered.
/// Boundaries are half-open on the upper side (25.0 is already Medium).
/// A zero scale maps everything to Low rather than dividing.
pub fn progressive_band(value: f64, max: f64) -> ColorBand {
    let percentage = if max > 0.0 { (value / max) * 100.0 } else { 0.0 };
    if percentage < 25.0 {
        ColorBand::Low
    } else if percentage < 50.0 {
        ColorBand::Medium
    } else if percentage < 75.0 {
        ColorBand::High
    } else {
        ColorBand::Critical
    }
}

/// Band a per-entry TPS impact figure (ticks lost to one operation).
pub fn tps_impact_band(impact: f64) -> ColorBand {
    if impact < 0.2 {
        ColorBand::Low
    } else if impact < 0.5 {
        ColorBand::Medium
    } else if impact < 1.0 {
        ColorBand::High
    } else {
        ColorBand::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(progressive_band(24.9, 100.0), ColorBand::Low);
        assert_eq!(progressive_band(25.0, 100.0), ColorBand::Medium);
        assert_eq!(progressive_band(49.9, 100.0), ColorBand::Medium);
        assert_eq!(progressive_band(50.0, 100.0), ColorBand::High);
        assert_eq!(progressive_band(74.9, 100.0), ColorBand::High);
        assert_eq!(progressive_band(75.0, 100.0), ColorBand::Critical);
    }

    #[test]
    fn zero_scale_is_always_low() {
        assert_eq!(progressive_band(0.0, 0.0), ColorBand::Low);
        assert_eq!(progressive_band(99.0, 0.0), ColorBand::Low);
        assert_eq!(progressive_band(-5.0, 0.0), ColorBand::Low);
    }

    #[test]
    fn band_scales_with_max() {
        assert_eq!(progressive_band(10.0, 200.0), ColorBand::Low);
        assert_eq!(progressive_band(150.0, 200.0), ColorBand::Critical);
    }

    #[test]
    fn tps_impact_bands() {
        assert_eq!(tps_impact_band(0.1), ColorBand::Low);
        assert_eq!(tps_impact_band(0.2), ColorBand::Medium);
        assert_eq!(tps_impact_band(0.5), ColorBand::High);
        assert_eq!(tps_impact_band(1.0), ColorBand::Critical);
    }

    #[test]
    fn bands_serialize_as_css_classes() {
        let json = serde_json::to_string(&ColorBand::Critical).unwrap();
        assert_eq!(json, "\"color-red\"");
    }
}
