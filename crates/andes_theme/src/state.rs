//! Global theme state
//!
//! Components read the current theme from here when they are created or
//! reconfigured. The state is initialized lazily with the Andes default
//! theme unless [`ThemeState::init`] is called first.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::info;

use crate::error::{Result, ThemeError};
use crate::theme::AndesTheme;

static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Process-wide current theme
#[derive(Debug)]
pub struct ThemeState {
    theme: RwLock<Arc<AndesTheme>>,
}

impl ThemeState {
    fn new(theme: AndesTheme) -> Self {
        Self {
            theme: RwLock::new(Arc::new(theme)),
        }
    }

    /// Initialize the global state with `theme`
    ///
    /// Fails if the state was already initialized, explicitly or lazily.
    pub fn init(theme: AndesTheme) -> Result<()> {
        let name = theme.name.clone();
        THEME_STATE
            .set(Self::new(theme))
            .map_err(|_| ThemeError::AlreadyInitialized)?;
        info!(theme = %name, "theme state initialized");
        Ok(())
    }

    /// Initialize with the default theme if nothing was set yet
    pub fn init_default() -> &'static ThemeState {
        Self::get()
    }

    /// Get the global state, initializing it with the default theme if needed
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| Self::new(AndesTheme::andes()))
    }

    /// Get the global state only if it was already initialized
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Snapshot of the current theme
    pub fn theme(&self) -> Arc<AndesTheme> {
        let guard = self.theme.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the current theme
    ///
    /// Existing components keep the configuration they were built with until
    /// they are reconfigured.
    pub fn set_theme(&self, theme: AndesTheme) {
        info!(theme = %theme.name, "switching theme");
        let mut guard = self.theme.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(theme);
    }
}
