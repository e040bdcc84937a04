//! # Andes Component Library (andes_ui)
//!
//! Themed Button and Message components resolved from Andes design tokens.
//!
//! - **Primitives**: `andes_core` provides colors, state lists, drawables and typefaces
//! - **Theme Tokens**: `andes_theme` provides the design tokens and the global theme
//! - **Components**: `andes_ui` resolves tokens into component configurations
//!   and applies them to a headless view model
//!
//! Components can be declared in markup or built in code; both routes go
//! through the same factory and produce equal configurations.
//!
//! ## Example
//!
//! ```rust
//! use andes_ui::prelude::*;
//!
//! // Button with variants
//! let button = andes::button(ButtonSize::Large, ButtonHierarchy::Loud)
//!     .config()
//!     .clone();
//! assert_eq!(button.height, 48.0);
//!
//! // Markup-declared button
//! let attrs = AttributeSet::new()
//!     .with("andesButtonHierarchy", "quiet")
//!     .with("andesButtonSize", "201");
//! let from_markup = AndesButton::from_attrs(&attrs);
//! assert_eq!(from_markup.hierarchy(), ButtonHierarchy::Quiet);
//!
//! // Message
//! let message = andes::message("Saved").message_type(MessageType::Success).build();
//! assert_eq!(message.body(), "Saved");
//! ```

pub mod attrs;
pub mod components;
pub mod error;
pub mod markup;
pub mod view;

pub use attrs::AttributeSet;
pub use components::*;
pub use error::{AndesError, Result};

/// Convenience constructors with the `andes::` prefix
pub mod andes {
    use crate::components::button::{AndesButton, ButtonHierarchy, ButtonSize};
    use crate::components::message::{AndesMessage, MessageBuilder};

    /// Button styled with the current theme
    pub fn button(size: ButtonSize, hierarchy: ButtonHierarchy) -> AndesButton {
        AndesButton::with_style(size, hierarchy)
    }

    /// Message builder with default hierarchy and type
    pub fn message(body: impl Into<String>) -> MessageBuilder {
        AndesMessage::builder(body)
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::andes;
    pub use crate::attrs::AttributeSet;
    pub use crate::components::button::{
        AndesButton, AndesButtonIcon, BackgroundColorConfig, ButtonAttrs, ButtonFactory,
        ButtonHierarchy, ButtonSize, IconOrientation,
    };
    pub use crate::components::message::{
        AndesMessage, MessageAttrs, MessageFactory, MessageHierarchy, MessageType,
    };
    pub use crate::error::AndesError;
    pub use crate::view::{ClickEvent, Visibility};
    // Re-export commonly needed theme types
    pub use andes_theme::{AndesTheme, ColorToken, FontToken, ThemeState};
}
