//! Derives a design-token set (colors, typography, spacing, radii, shadows,
//! breakpoints) from product-type style presets and renders it as CSS custom
//! properties, a Tailwind config fragment, a component theme, and a full
//! JSON dump.

pub mod assets;
pub mod error;
pub mod output;
pub mod render;
pub mod system;
pub mod tables;

pub use assets::Assets;
pub use error::GenError;
pub use render::{ComponentTheme, TailwindConfig};
pub use system::{ColorToken, DesignSystem, FontToken, SpacingToken, TokenKind};
pub use tables::{StylePreset, Tables};
