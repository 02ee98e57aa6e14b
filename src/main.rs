use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use design_system_gen::{output, Assets, DesignSystem, Tables};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate design tokens and framework configs from style presets"
)]
struct Args {
    /// Product type driving the style preset (ecommerce, saas, social,
    /// finance, healthcare, education); anything else uses the default
    #[arg(long)]
    product_type: Option<String>,

    /// Output directory for the generated files
    #[arg(long, default_value = "./design-system")]
    output: PathBuf,

    /// Assets directory containing colors.json, fonts.json and styles.json
    #[arg(long, default_value = "./assets")]
    assets: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let tables = Tables::load();

    let assets = Assets::load(&args.assets);
    if assets.entry_count() > 0 {
        info!("{} custom asset entries available", assets.entry_count());
    }

    let preset = tables.resolve_preset(args.product_type.as_deref());
    let system = DesignSystem::generate(preset, &tables, &assets);
    output::write_outputs(&system, &args.output)?;

    info!("design system written to {}", args.output.display());
    Ok(())
}
