use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::config::BodyEntry;

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

/// Resolve a CSS / matplotlib colour name (`"grey"`, `"Brown"`, ...).
pub fn named_color(name: &str) -> Option<Color32> {
    palette::named::from_str(&name.trim().to_ascii_lowercase())
        .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
}

// ---------------------------------------------------------------------------
// Color mapping: body file → Color32
// ---------------------------------------------------------------------------

/// Maps each configured body file to its line colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build the map from the configured bodies. Bodies whose colour name is
    /// not recognised get a generated colour instead.
    pub fn new(bodies: &[BodyEntry]) -> Self {
        let unknown: Vec<&BodyEntry> = bodies
            .iter()
            .filter(|b| named_color(&b.color).is_none())
            .collect();
        let mut fallback = generate_palette(unknown.len()).into_iter();

        let mut mapping = BTreeMap::new();
        for body in bodies {
            let color = match named_color(&body.color) {
                Some(c) => c,
                None => {
                    log::warn!(
                        "Unknown colour '{}' for {}, using a generated one",
                        body.color,
                        body.file
                    );
                    fallback.next().unwrap_or(Color32::GRAY)
                }
            };
            mapping.insert(body.file.clone(), color);
        }

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a body file.
    pub fn color_for(&self, file: &str) -> Color32 {
        self.mapping
            .get(file)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotterConfig;

    fn body(file: &str, color: &str) -> BodyEntry {
        BodyEntry {
            file: file.to_string(),
            color: color.to_string(),
            temperature_override: None,
        }
    }

    #[test]
    fn test_generate_palette_sizes() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_named_colors_resolve() {
        assert_eq!(named_color("red"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(named_color("grey"), Some(Color32::from_rgb(128, 128, 128)));
        assert_eq!(named_color(" Brown "), Some(Color32::from_rgb(165, 42, 42)));
        assert_eq!(named_color("not-a-colour"), None);
    }

    #[test]
    fn test_default_bodies_all_have_named_colors() {
        let config = PlotterConfig::default();
        for b in &config.bodies {
            assert!(named_color(&b.color).is_some(), "{} has no colour", b.file);
        }
        let map = ColorMap::new(&config.bodies);
        assert_eq!(map.color_for("Earth.txt"), Color32::from_rgb(0, 128, 0));
        assert_eq!(map.color_for("Uranus.txt"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_unknown_color_gets_generated_one() {
        let map = ColorMap::new(&[body("A.txt", "blue"), body("B.txt", "shiny")]);
        assert_eq!(map.color_for("A.txt"), Color32::from_rgb(0, 0, 255));
        assert_eq!(map.color_for("B.txt"), generate_palette(1)[0]);
    }

    #[test]
    fn test_unconfigured_file_is_gray() {
        let map = ColorMap::new(&[body("A.txt", "blue")]);
        assert_eq!(map.color_for("Ceres.txt"), Color32::GRAY);
    }
}
