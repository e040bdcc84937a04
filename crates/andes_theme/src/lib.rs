//! # Andes Theme
//!
//! Design tokens for the Andes component library.
//!
//! - **Colors**: every named color a component resolves ([`ColorToken`])
//! - **Dimensions**: text sizes, heights, margins, paddings and radii
//! - **Typography**: semibold / regular typefaces with a platform fallback
//!
//! Themes are plain data. A partial TOML file can override any token while
//! the rest keeps the Andes defaults:
//!
//! ```rust
//! use andes_theme::{AndesTheme, ColorToken};
//! use andes_core::Color;
//!
//! let theme = AndesTheme::from_toml_str(r##"
//!     [colors]
//!     button_loud_bg = "#FF0000"
//! "##).unwrap();
//!
//! assert_eq!(theme.color(ColorToken::ButtonLoudBg), Color::from_hex(0xFF0000));
//! ```

pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::AndesTheme;
pub use tokens::{
    ButtonDimens, ButtonSizeDimens, ColorToken, ColorTokens, DimensionTokens, FontToken,
    MessageDimens, TypographyTokens,
};
