//! Stateless transforms from a [`DesignSystem`] to its output artifacts.
//!
//! The fourth artifact, the full JSON dump, is the derived `Serialize` impl
//! on [`DesignSystem`] itself and needs no code here.

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::system::{ColorToken, DesignSystem};

/// Theme fragment shaped for a Tailwind `theme.extend` block.
#[derive(Debug, Serialize)]
pub struct TailwindConfig {
    pub theme: TailwindTheme,
}

#[derive(Debug, Serialize)]
pub struct TailwindTheme {
    pub extend: TailwindExtend,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindExtend {
    pub colors: IndexMap<String, IndexMap<String, String>>,
    pub spacing: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub box_shadow: IndexMap<String, String>,
    pub screens: IndexMap<String, String>,
    pub font_family: IndexMap<String, String>,
    pub font_size: IndexMap<String, (String, String)>,
}

/// Semantic light theme in the shape component libraries (shadcn/ui) expect.
#[derive(Debug, Serialize)]
pub struct ComponentTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: SemanticColors,
    #[serde(rename = "borderRadius")]
    pub border_radius: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub destructive: String,
    pub destructive_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
}

impl DesignSystem {
    /// Render the token set as CSS custom properties in one `:root` block.
    ///
    /// Emission order is token declaration order, then map insertion order
    /// within each section, so the output is byte-stable across runs.
    pub fn to_css(&self) -> String {
        let mut sections: Vec<String> = self
            .colors
            .iter()
            .map(|color| {
                let vars = color
                    .variants
                    .iter()
                    .map(|(shade, value)| format!("  --color-{}-{shade}: {value};", color.name))
                    .join("\n");
                format!("  /* {} */\n{vars}", color.name.to_case(Case::Upper))
            })
            .collect();
        sections.push(css_section("SPACING", "spacing", &self.spacing.values));
        sections.push(css_section("BORDER RADIUS", "radius", &self.radius));
        sections.push(css_section("SHADOWS", "shadow", &self.shadows));
        sections.push(css_section("BREAKPOINTS", "breakpoint", &self.breakpoints));
        format!(":root {{\n{}\n}}\n", sections.join("\n\n"))
    }

    pub fn tailwind_config(&self) -> TailwindConfig {
        TailwindConfig {
            theme: TailwindTheme {
                extend: TailwindExtend {
                    colors: self
                        .colors
                        .iter()
                        .map(|color| (color.name.clone(), color.variants.clone()))
                        .collect(),
                    spacing: self.spacing.values.clone(),
                    border_radius: self.radius.clone(),
                    box_shadow: self.shadows.clone(),
                    screens: self.breakpoints.clone(),
                    font_family: self
                        .fonts
                        .iter()
                        .map(|font| (font.name.clone(), font.family.clone()))
                        .collect(),
                    font_size: self.fonts[0].sizes.clone(),
                },
            },
        }
    }

    /// Derive the semantic palette for component theming.
    ///
    /// `destructive` is sourced from the token named `error`, not from a
    /// position in the color list.
    pub fn component_theme(&self) -> ComponentTheme {
        let primary = self.color("primary");
        let accent = self.color("accent");
        let neutral = self.color("neutral");
        let error = self.color("error");

        ComponentTheme {
            name: "default".to_string(),
            kind: "light".to_string(),
            colors: SemanticColors {
                background: shade(neutral, "50"),
                foreground: shade(neutral, "950"),
                card: shade(neutral, "50"),
                card_foreground: shade(neutral, "950"),
                popover: shade(neutral, "50"),
                popover_foreground: shade(neutral, "950"),
                primary: shade(primary, "500"),
                primary_foreground: shade(neutral, "50"),
                secondary: shade(neutral, "100"),
                secondary_foreground: shade(neutral, "900"),
                muted: shade(neutral, "100"),
                muted_foreground: shade(neutral, "500"),
                accent: shade(accent, "500"),
                accent_foreground: shade(neutral, "50"),
                destructive: shade(error, "500"),
                destructive_foreground: shade(neutral, "50"),
                border: shade(neutral, "200"),
                input: shade(neutral, "200"),
                ring: shade(primary, "500"),
            },
            border_radius: self
                .radius
                .get("DEFAULT")
                .cloned()
                .unwrap_or_else(|| "0.5rem".to_string()),
        }
    }
}

fn shade(token: &ColorToken, key: &str) -> String {
    token.variants[key].clone()
}

fn css_section(header: &str, prefix: &str, entries: &IndexMap<String, String>) -> String {
    let vars = entries
        .iter()
        .map(|(key, value)| format!("  --{prefix}-{key}: {value};"))
        .join("\n");
    format!("  /* {header} */\n{vars}")
}
