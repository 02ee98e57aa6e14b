//! Static style tables: product-type presets, color palettes, and the
//! radius/shadow/typography/spacing scales they point into.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

/// Preset used when no product type is given or the given one is unknown.
pub const DEFAULT_PRESET: &str = "saas";

/// Shade keys every palette family carries, in emission order.
pub const SHADE_KEYS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const TABLES_JSON: &str = include_str!("../data/tables.json");

/// All static table data shipped with the binary.
///
/// Preset style fields form a closed vocabulary over the other tables: every
/// `primary_color`/`accent_color` is a palette family and every
/// `border_radius`/`typography`/`spacing`/`shadows` value is a key of the
/// matching scale table.
#[derive(Debug, Deserialize)]
pub struct Tables {
    pub presets: IndexMap<String, StylePreset>,
    pub palettes: IndexMap<String, IndexMap<String, String>>,
    pub radius: IndexMap<String, IndexMap<String, String>>,
    pub shadows: IndexMap<String, IndexMap<String, String>>,
    pub typography: IndexMap<String, Typeface>,
    pub spacing: IndexMap<String, SpacingScale>,
    pub breakpoints: IndexMap<String, String>,
}

/// A bundle of style choices recommended for one product type.
#[derive(Debug, Clone, Deserialize)]
pub struct StylePreset {
    pub description: String,
    pub primary_color: String,
    pub accent_color: String,
    pub border_radius: String,
    pub typography: String,
    pub spacing: String,
    pub shadows: String,
}

/// A font stack plus its size scale; each size maps to a
/// `[font-size, line-height]` pair.
#[derive(Debug, Deserialize)]
pub struct Typeface {
    pub family: Vec<String>,
    pub sizes: IndexMap<String, (String, String)>,
}

/// Spacing scale: numeric keys multiply `scale`, the `0.5` key uses `base`.
#[derive(Debug, Deserialize)]
pub struct SpacingScale {
    pub scale: f64,
    pub base: String,
}

impl Tables {
    /// Parse the table data embedded in the binary.
    pub fn load() -> Self {
        serde_json::from_str(TABLES_JSON).expect("embedded tables.json is valid")
    }

    /// Resolve a product type to its preset, case-insensitively.
    ///
    /// An absent or unknown product type falls back to [`DEFAULT_PRESET`];
    /// resolution never fails.
    pub fn resolve_preset(&self, product_type: Option<&str>) -> &StylePreset {
        if let Some(requested) = product_type {
            let key = requested.to_lowercase();
            if let Some(preset) = self.presets.get(&key) {
                info!("using '{key}' style: {}", preset.description);
                return preset;
            }
            warn!("unknown product type '{requested}', using default style");
        }
        let preset = &self.presets[DEFAULT_PRESET];
        info!("using default '{DEFAULT_PRESET}' style: {}", preset.description);
        preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_points_into_the_tables() {
        let tables = Tables::load();
        for (name, preset) in &tables.presets {
            assert!(
                tables.palettes.contains_key(&preset.primary_color),
                "{name}: unknown primary color family {}",
                preset.primary_color
            );
            assert!(
                tables.palettes.contains_key(&preset.accent_color),
                "{name}: unknown accent color family {}",
                preset.accent_color
            );
            assert!(tables.radius.contains_key(&preset.border_radius));
            assert!(tables.shadows.contains_key(&preset.shadows));
            assert!(tables.typography.contains_key(&preset.typography));
            assert!(tables.spacing.contains_key(&preset.spacing));
        }
    }

    #[test]
    fn every_palette_has_all_shades_in_order() {
        let tables = Tables::load();
        for (family, palette) in &tables.palettes {
            let keys: Vec<&str> = palette.keys().map(String::as_str).collect();
            assert_eq!(keys, SHADE_KEYS, "palette {family}");
        }
    }

    #[test]
    fn every_palette_value_is_a_css_color() {
        let tables = Tables::load();
        for (family, palette) in &tables.palettes {
            for (shade, value) in palette {
                csscolorparser::parse(value)
                    .unwrap_or_else(|err| panic!("{family}-{shade} ({value}): {err}"));
            }
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let tables = Tables::load();
        let preset = tables.resolve_preset(Some("Finance"));
        assert_eq!(preset.primary_color, "slate");
        assert_eq!(preset.accent_color, "emerald");
        assert_eq!(preset.border_radius, "subtle");
        assert_eq!(preset.shadows, "minimal");
        assert_eq!(preset.spacing, "spacious");

        let shouted = tables.resolve_preset(Some("FINANCE"));
        assert_eq!(shouted.primary_color, "slate");
    }

    #[test]
    fn unknown_product_type_falls_back_to_saas() {
        let tables = Tables::load();
        let preset = tables.resolve_preset(Some("spaceship"));
        assert_eq!(preset.primary_color, "indigo");
        assert_eq!(preset.accent_color, "purple");
    }

    #[test]
    fn missing_product_type_falls_back_to_saas() {
        let tables = Tables::load();
        let preset = tables.resolve_preset(None);
        assert_eq!(preset.primary_color, "indigo");
    }
}
