use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Hue of the first series; keeps it off the pure red used for errors.
const HUE_OFFSET: f32 = 30.0;
/// Mid lightness so both the lines and the point markers stay readable on
/// light and dark themes.
const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.5;

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// One colour per series: evenly spaced hues at a fixed saturation and lightness.
pub fn series_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hue = (HUE_OFFSET + i as f32 * step) % 360.0;
            let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS).into_color();
            Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: company name → Color32
// ---------------------------------------------------------------------------

/// Maps company names to distinct series colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Assign one palette colour per company, in sorted order.
    pub fn new(companies: &BTreeSet<String>) -> Self {
        let palette = series_palette(companies.len());
        let mapping = companies.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Look up the colour for a company.
    pub fn color_for(&self, company: &str) -> Color32 {
        self.mapping
            .get(company)
            .copied()
            .unwrap_or(self.default_color)
    }
}
