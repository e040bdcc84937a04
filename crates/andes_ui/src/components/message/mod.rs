//! Message component
//!
//! A message is styled by its [`MessageHierarchy`] (loud or quiet) and its
//! [`MessageType`] (neutral, success, warning, error).

mod attrs;
mod factory;
mod hierarchy;
mod message_type;
mod widget;

pub use attrs::{attr, MessageAttrs};
pub use factory::{MessageConfiguration, MessageFactory};
pub use hierarchy::{MessageHierarchy, MessageHierarchyStyle, DISMISS_ICON};
pub use message_type::{MessageType, MessageTypeStyle};
pub use widget::{AndesMessage, MessageBuilder};
