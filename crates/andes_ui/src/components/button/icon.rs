//! Button icons

use andes_core::Drawable;
use serde::{Deserialize, Serialize};

/// Side of the text an icon sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconOrientation {
    #[default]
    Left,
    Right,
}

/// An icon placed on one side of the button text
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AndesButtonIcon {
    pub icon: Drawable,
    pub orientation: IconOrientation,
}

impl AndesButtonIcon {
    pub fn new(icon: Drawable, orientation: IconOrientation) -> Self {
        Self { icon, orientation }
    }

    pub fn left(icon: Drawable) -> Self {
        Self::new(icon, IconOrientation::Left)
    }

    pub fn right(icon: Drawable) -> Self {
        Self::new(icon, IconOrientation::Right)
    }

    pub fn left_icon(&self) -> Option<&Drawable> {
        (self.orientation == IconOrientation::Left).then_some(&self.icon)
    }

    pub fn right_icon(&self) -> Option<&Drawable> {
        (self.orientation == IconOrientation::Right).then_some(&self.icon)
    }
}

/// Icons a button actually displays, already scaled and tinted
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<Drawable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<Drawable>,
}
