//! Theme file handling

use std::path::Path;
use std::sync::Arc;

use andes_theme::{AndesTheme, ThemeState};
use anyhow::{Context, Result};
use tracing::info;

/// Install the theme for this run and return it
///
/// Without a path the default Andes theme is used.
pub fn load(path: Option<&Path>) -> Result<Arc<AndesTheme>> {
    let Some(path) = path else {
        return Ok(ThemeState::init_default().theme());
    };

    let theme = AndesTheme::load(path)
        .with_context(|| format!("Failed to load theme from {}", path.display()))?;
    info!("Using theme '{}' from {}", theme.name, path.display());

    ThemeState::init(theme).context("Theme was already initialized")?;
    Ok(ThemeState::get().theme())
}
