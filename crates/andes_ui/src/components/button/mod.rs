//! Button component
//!
//! A button is styled along two axes: its [`ButtonHierarchy`] picks colors,
//! its [`ButtonSize`] picks dimensions. Each variant resolves through a
//! stateless style object ([`ButtonHierarchyStyle`], [`ButtonSizeStyle`]).

mod factory;
mod hierarchy;
mod icon;
mod margin;
mod size;
mod widget;

pub use factory::{attr, ButtonAttrs, ButtonConfiguration, ButtonFactory};
pub use hierarchy::{BackgroundColorConfig, ButtonHierarchy, ButtonHierarchyStyle, TextColorConfig};
pub use icon::{AndesButtonIcon, IconConfig, IconOrientation};
pub use margin::ButtonMargin;
pub use size::{ButtonSize, ButtonSizeStyle};
pub use widget::AndesButton;
