//! Writes the rendered artifacts to the output directory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::GenError;
use crate::system::DesignSystem;

pub const TOKENS_CSS: &str = "design-tokens.css";
pub const TAILWIND_CONFIG: &str = "tailwind.config.json";
pub const COMPONENT_THEME: &str = "shadcn-theme.json";
pub const SYSTEM_DUMP: &str = "design-system.json";

const CSS_HEADER: &str =
    "/* Design system CSS custom properties */\n/* Generated by design-system-gen */\n\n";

/// Write all four artifacts under `dir`, creating the directory first.
///
/// Writes are independent; artifacts written before a failure are left in
/// place. Directory creation and write errors are fatal to the run.
pub fn write_outputs(system: &DesignSystem, dir: &Path) -> Result<(), GenError> {
    fs::create_dir_all(dir)?;

    let css_path = dir.join(TOKENS_CSS);
    fs::write(&css_path, format!("{CSS_HEADER}{}", system.to_css()))?;
    info!("wrote {}", css_path.display());

    let tailwind_path = dir.join(TAILWIND_CONFIG);
    fs::write(
        &tailwind_path,
        serde_json::to_string_pretty(&system.tailwind_config())?,
    )?;
    info!("wrote {}", tailwind_path.display());

    let theme_path = dir.join(COMPONENT_THEME);
    fs::write(
        &theme_path,
        serde_json::to_string_pretty(&system.component_theme())?,
    )?;
    info!("wrote {}", theme_path.display());

    let dump_path = dir.join(SYSTEM_DUMP);
    fs::write(&dump_path, serde_json::to_string_pretty(system)?)?;
    info!("wrote {}", dump_path.display());

    Ok(())
}
