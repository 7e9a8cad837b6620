use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use covid_chart::NamedSeries;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// One colour per region, shared by all of that region's series.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Assign colours to regions in the order they first appear.
    pub fn new(series: &[NamedSeries]) -> Self {
        let mut regions: Vec<&str> = Vec::new();
        for s in series {
            if !regions.contains(&s.region.as_str()) {
                regions.push(&s.region);
            }
        }
        let palette = generate_palette(regions.len());
        let mapping = regions
            .into_iter()
            .zip(palette)
            .map(|(r, c)| (r.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}
