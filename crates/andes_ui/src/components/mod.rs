//! Andes components
//!
//! Each component resolves its styling in three steps: typed selectors pick
//! stateless style objects, a factory turns them into a configuration, and
//! the widget applies that configuration to its views.

pub mod button;
pub mod message;

pub use button::{
    AndesButton, AndesButtonIcon, BackgroundColorConfig, ButtonAttrs, ButtonConfiguration,
    ButtonFactory, ButtonHierarchy, ButtonMargin, ButtonSize, IconConfig, IconOrientation,
    TextColorConfig,
};
pub use message::{
    AndesMessage, MessageAttrs, MessageBuilder, MessageConfiguration, MessageFactory,
    MessageHierarchy, MessageType,
};
