//! Design token model and generation from a resolved style preset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::tables::{StylePreset, Tables};

/// Numeric spacing steps; each is multiplied by the preset's scale factor.
const SPACING_STEPS: [u32; 12] = [1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24];

/// Weights every generated font token carries.
const FONT_WEIGHTS: [u16; 5] = [300, 400, 500, 600, 700];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Primary,
    Accent,
    Neutral,
    Semantic,
}

/// A named color with its full shade scale.
///
/// `value` is the representative `500` shade; `variants` always holds the
/// eleven shades of the source palette, verbatim and in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub variants: IndexMap<String, String>,
}

/// A font stack with its size and line-height scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontToken {
    pub name: String,
    pub family: String,
    pub weights: Vec<u16>,
    pub sizes: IndexMap<String, (String, String)>,
    pub line_heights: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingToken {
    pub scale_factor: f64,
    pub values: IndexMap<String, String>,
}

/// The complete generated token set. Built once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub colors: Vec<ColorToken>,
    pub fonts: Vec<FontToken>,
    pub spacing: SpacingToken,
    pub radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub breakpoints: IndexMap<String, String>,
}

impl DesignSystem {
    /// Build the full token set for a resolved preset.
    ///
    /// Preset style keys come from the same closed vocabulary as the tables,
    /// so a missing table entry is bad table data, not a runtime condition.
    ///
    /// Only `primary` and `accent` follow the preset's color families; the
    /// neutral and semantic tokens are pinned to fixed palettes.
    // TODO: merge palettes and typefaces from `assets` over the static tables.
    pub fn generate(preset: &StylePreset, tables: &Tables, _assets: &Assets) -> Self {
        let colors = vec![
            color_token("primary", TokenKind::Primary, &preset.primary_color, tables),
            color_token("accent", TokenKind::Accent, &preset.accent_color, tables),
            color_token("neutral", TokenKind::Neutral, "slate", tables),
            color_token("success", TokenKind::Semantic, "emerald", tables),
            color_token("warning", TokenKind::Semantic, "yellow", tables),
            color_token("error", TokenKind::Semantic, "red", tables),
        ];

        let typeface = tables
            .typography
            .get(&preset.typography)
            .expect("preset typography style missing from tables");
        let fonts = vec![FontToken {
            name: "sans".to_string(),
            family: typeface
                .family
                .first()
                .expect("typeface has no family entries")
                .clone(),
            weights: FONT_WEIGHTS.to_vec(),
            sizes: typeface.sizes.clone(),
            line_heights: [("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")]
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }];

        let scale = tables
            .spacing
            .get(&preset.spacing)
            .expect("preset spacing style missing from tables");
        let mut values = IndexMap::new();
        values.insert("0".to_string(), "0".to_string());
        values.insert("px".to_string(), "1px".to_string());
        // The "0.5" step is the scale's base unit, not scale * 0.5.
        values.insert("0.5".to_string(), scale.base.clone());
        for step in SPACING_STEPS {
            values.insert(step.to_string(), format!("{}rem", scale.scale * f64::from(step)));
        }

        let radius = tables
            .radius
            .get(&preset.border_radius)
            .expect("preset radius style missing from tables")
            .clone();
        let shadows = tables
            .shadows
            .get(&preset.shadows)
            .expect("preset shadow style missing from tables")
            .clone();

        DesignSystem {
            colors,
            fonts,
            spacing: SpacingToken {
                scale_factor: scale.scale,
                values,
            },
            radius,
            shadows,
            breakpoints: tables.breakpoints.clone(),
        }
    }

    /// Look up a color token by name.
    ///
    /// The six token names are fixed at generation time; a miss is a bug.
    pub fn color(&self, name: &str) -> &ColorToken {
        self.colors
            .iter()
            .find(|color| color.name == name)
            .unwrap_or_else(|| panic!("no color token named '{name}'"))
    }
}

fn color_token(name: &str, kind: TokenKind, family: &str, tables: &Tables) -> ColorToken {
    let variants = tables
        .palettes
        .get(family)
        .unwrap_or_else(|| panic!("color family '{family}' missing from palette table"))
        .clone();
    ColorToken {
        name: name.to_string(),
        value: variants["500"].clone(),
        kind,
        variants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SHADE_KEYS;

    fn generate(product_type: &str) -> DesignSystem {
        let tables = Tables::load();
        let preset = tables.resolve_preset(Some(product_type)).clone();
        DesignSystem::generate(&preset, &tables, &Assets::default())
    }

    #[test]
    fn six_color_tokens_with_verbatim_shades() {
        let tables = Tables::load();
        let system = generate("saas");

        let names: Vec<&str> = system.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["primary", "accent", "neutral", "success", "warning", "error"]
        );
        for color in &system.colors {
            let keys: Vec<&str> = color.variants.keys().map(String::as_str).collect();
            assert_eq!(keys, SHADE_KEYS, "token {}", color.name);
            assert_eq!(color.value, color.variants["500"]);
        }
        assert_eq!(system.color("primary").variants, tables.palettes["indigo"]);
        assert_eq!(system.color("accent").variants, tables.palettes["purple"]);
    }

    #[test]
    fn neutral_and_semantic_families_are_fixed() {
        // The ecommerce preset picks blue/orange, but the last four tokens
        // are pinned to slate/emerald/yellow/red regardless.
        let system = generate("ecommerce");
        assert_eq!(system.color("primary").value, "#3b82f6");
        assert_eq!(system.color("accent").value, "#f97316");
        assert_eq!(system.color("neutral").value, "#64748b");
        assert_eq!(system.color("success").value, "#10b981");
        assert_eq!(system.color("warning").value, "#eab308");
        assert_eq!(system.color("error").value, "#ef4444");
    }

    #[test]
    fn token_kinds_match_their_roles() {
        let system = generate("saas");
        assert_eq!(system.color("primary").kind, TokenKind::Primary);
        assert_eq!(system.color("accent").kind, TokenKind::Accent);
        assert_eq!(system.color("neutral").kind, TokenKind::Neutral);
        assert_eq!(system.color("success").kind, TokenKind::Semantic);
        assert_eq!(system.color("warning").kind, TokenKind::Semantic);
        assert_eq!(system.color("error").kind, TokenKind::Semantic);
    }

    #[test]
    fn finance_spacing_is_spacious() {
        let system = generate("finance");
        assert_eq!(system.spacing.scale_factor, 1.0);
        assert_eq!(system.spacing.values["4"], "4rem");
        // "0.5" takes the scale's base unit, not 1 * 0.5.
        assert_eq!(system.spacing.values["0.5"], "1rem");
        assert_eq!(system.spacing.values["0"], "0");
        assert_eq!(system.spacing.values["px"], "1px");
    }

    #[test]
    fn fractional_scales_format_cleanly() {
        // comfortable: scale 0.5
        let system = generate("saas");
        assert_eq!(system.spacing.values["1"], "0.5rem");
        assert_eq!(system.spacing.values["2"], "1rem");
        assert_eq!(system.spacing.values["3"], "1.5rem");
        assert_eq!(system.spacing.values["24"], "12rem");
    }

    #[test]
    fn font_token_follows_the_preset_typeface() {
        let sans = generate("finance");
        assert_eq!(sans.fonts.len(), 1);
        assert_eq!(sans.fonts[0].family, "Inter");
        assert_eq!(sans.fonts[0].weights, FONT_WEIGHTS);
        assert_eq!(sans.fonts[0].sizes["base"], ("1rem".into(), "1.5rem".into()));
        assert_eq!(sans.fonts[0].line_heights["normal"], "1.5");

        let friendly = generate("education");
        assert_eq!(friendly.fonts[0].family, "Nunito");
    }

    #[test]
    fn radius_shadows_and_breakpoints_copy_the_tables() {
        let tables = Tables::load();
        let system = generate("finance");
        assert_eq!(system.radius, tables.radius["subtle"]);
        assert_eq!(system.shadows, tables.shadows["minimal"]);
        assert_eq!(system.breakpoints, tables.breakpoints);
        assert_eq!(system.breakpoints["sm"], "640px");
        assert_eq!(system.breakpoints["2xl"], "1536px");
    }
}
