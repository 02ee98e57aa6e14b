//! Best-effort loading of the optional design asset documents.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

pub const COLORS_FILE: &str = "colors.json";
pub const FONTS_FILE: &str = "fonts.json";
pub const STYLES_FILE: &str = "styles.json";

/// Asset documents loaded from the assets directory.
///
/// Each slot holds an arbitrary JSON document and defaults to an empty
/// object. The data is reported in logs only; it does not yet feed token
/// generation (see [`crate::system::DesignSystem::generate`]).
#[derive(Debug)]
pub struct Assets {
    pub colors: Value,
    pub fonts: Value,
    pub styles: Value,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            colors: empty_object(),
            fonts: empty_object(),
            styles: empty_object(),
        }
    }
}

impl Assets {
    /// Load `colors.json`, `fonts.json` and `styles.json` from `dir`.
    ///
    /// Every failure mode is recovered locally: a missing directory, a
    /// missing file, or an unreadable/unparseable document leaves the
    /// affected slot at its empty default. Never returns an error.
    pub fn load(dir: &Path) -> Self {
        let mut assets = Self::default();

        if !dir.exists() {
            warn!(
                "assets directory not found: {}, using default design tokens",
                dir.display()
            );
            return assets;
        }

        if let Some(value) = load_json(&dir.join(COLORS_FILE)) {
            assets.colors = value;
        }
        if let Some(value) = load_json(&dir.join(FONTS_FILE)) {
            assets.fonts = value;
        }
        if let Some(value) = load_json(&dir.join(STYLES_FILE)) {
            assets.styles = value;
        }
        assets
    }

    /// Number of top-level entries across all three documents.
    pub fn entry_count(&self) -> usize {
        [&self.colors, &self.fonts, &self.styles]
            .iter()
            .map(|value| value.as_object().map_or(0, |doc| doc.len()))
            .sum()
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Read and parse one optional JSON document, logging the outcome.
fn load_json(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("failed to read {}: {err}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => {
            info!("loaded {}", path.display());
            Some(value)
        }
        Err(err) => {
            warn!("failed to parse {}: {err}", path.display());
            None
        }
    }
}
