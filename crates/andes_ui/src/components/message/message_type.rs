//! Message type: the feedback color family of a message

use andes_core::{Color, Drawable};
use andes_theme::{AndesTheme, ColorToken};
use serde::{Deserialize, Serialize};

use super::hierarchy::MessageHierarchy;
use crate::attrs::AttrValue;

/// Message type variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::Neutral,
        MessageType::Success,
        MessageType::Warning,
        MessageType::Error,
    ];

    /// Style resolver for this type
    pub fn style(self) -> &'static dyn MessageTypeStyle {
        match self {
            MessageType::Neutral => &NeutralType,
            MessageType::Success => &SuccessType,
            MessageType::Warning => &WarningType,
            MessageType::Error => &ErrorType,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MessageType::Neutral => "neutral",
            MessageType::Success => "success",
            MessageType::Warning => "warning",
            MessageType::Error => "error",
        }
    }
}

impl AttrValue for MessageType {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "neutral" | "highlight" | "2000" => Some(MessageType::Neutral),
            "success" | "2001" => Some(MessageType::Success),
            "warning" | "2002" => Some(MessageType::Warning),
            "error" | "2003" => Some(MessageType::Error),
            _ => None,
        }
    }
}

/// Resolves type-dependent message colors and the type icon
pub trait MessageTypeStyle: Sync + std::fmt::Debug {
    fn kind(&self) -> MessageType;

    fn primary_color(&self, theme: &AndesTheme) -> Color;

    /// Darker shade of the primary color
    fn secondary_color(&self, theme: &AndesTheme) -> Color;

    /// Glyph resource drawn inside the icon circle
    fn glyph(&self) -> &'static str;

    fn pipe_color(&self, theme: &AndesTheme) -> Color {
        self.primary_color(theme)
    }

    fn icon_background_color(&self, theme: &AndesTheme) -> Color {
        self.secondary_color(theme)
    }

    /// White glyph on a circle colored by the hierarchy
    fn icon(&self, theme: &AndesTheme, hierarchy: MessageHierarchy) -> Drawable {
        let circle = hierarchy
            .style()
            .icon_background_color(theme, self.kind());
        Drawable::Layers(vec![
            Drawable::oval(theme.dimensions.message.icon_diameter, circle),
            Drawable::resource(self.glyph()).tinted_with(theme.color(ColorToken::White)),
        ])
    }
}

#[derive(Debug)]
struct NeutralType;

impl MessageTypeStyle for NeutralType {
    fn kind(&self) -> MessageType {
        MessageType::Neutral
    }

    fn primary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageNeutralPrimary)
    }

    fn secondary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageNeutralPrimaryDark)
    }

    fn glyph(&self) -> &'static str {
        "andesui_ui_feedback_info_16"
    }
}

#[derive(Debug)]
struct SuccessType;

impl MessageTypeStyle for SuccessType {
    fn kind(&self) -> MessageType {
        MessageType::Success
    }

    fn primary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageSuccessPrimary)
    }

    fn secondary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageSuccessPrimaryDark)
    }

    fn glyph(&self) -> &'static str {
        "andesui_ui_feedback_success_16"
    }
}

#[derive(Debug)]
struct WarningType;

impl MessageTypeStyle for WarningType {
    fn kind(&self) -> MessageType {
        MessageType::Warning
    }

    fn primary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageWarningPrimary)
    }

    fn secondary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageWarningPrimaryDark)
    }

    fn glyph(&self) -> &'static str {
        "andesui_ui_feedback_warning_16"
    }
}

#[derive(Debug)]
struct ErrorType;

impl MessageTypeStyle for ErrorType {
    fn kind(&self) -> MessageType {
        MessageType::Error
    }

    fn primary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageErrorPrimary)
    }

    fn secondary_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageErrorPrimaryDark)
    }

    fn glyph(&self) -> &'static str {
        "andesui_ui_feedback_error_16"
    }
}
