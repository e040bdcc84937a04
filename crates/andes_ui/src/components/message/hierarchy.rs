//! Message hierarchy: how strongly a message stands out

use andes_core::{Color, Drawable, Typeface};
use andes_theme::{AndesTheme, ColorToken, FontToken};
use serde::{Deserialize, Serialize};

use super::message_type::MessageType;
use crate::attrs::AttrValue;
use crate::components::button::BackgroundColorConfig;

/// Close glyph of dismissable messages
pub const DISMISS_ICON: &str = "andesui_ui_close_20";

/// Blend ratio toward black for pressed action backgrounds
const PRESSED_DARKEN: f32 = 0.2;

/// Message hierarchy variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageHierarchy {
    /// Filled with the type color
    #[default]
    Loud,
    /// Neutral background, type color on the icon only
    Quiet,
}

impl MessageHierarchy {
    pub const ALL: [MessageHierarchy; 2] = [MessageHierarchy::Loud, MessageHierarchy::Quiet];

    /// Style resolver for this hierarchy
    pub fn style(self) -> &'static dyn MessageHierarchyStyle {
        match self {
            MessageHierarchy::Loud => &LoudMessage,
            MessageHierarchy::Quiet => &QuietMessage,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MessageHierarchy::Loud => "loud",
            MessageHierarchy::Quiet => "quiet",
        }
    }
}

impl AttrValue for MessageHierarchy {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "loud" | "1000" => Some(MessageHierarchy::Loud),
            "quiet" | "1001" => Some(MessageHierarchy::Quiet),
            _ => None,
        }
    }
}

/// Resolves hierarchy-dependent message styling
pub trait MessageHierarchyStyle: Sync + std::fmt::Debug {
    fn background_color(&self, theme: &AndesTheme, ty: MessageType) -> Color;

    fn text_color(&self, theme: &AndesTheme) -> Color;

    fn dismiss_icon_color(&self, theme: &AndesTheme) -> Color;

    fn icon_background_color(&self, theme: &AndesTheme, ty: MessageType) -> Color;

    fn secondary_action_text_color(&self, theme: &AndesTheme, ty: MessageType) -> Color;

    fn dismiss_icon(&self, theme: &AndesTheme) -> Drawable {
        Drawable::resource(DISMISS_ICON).tinted_with(self.dismiss_icon_color(theme))
    }

    fn title_typeface(&self, theme: &AndesTheme) -> Typeface {
        theme.typeface(FontToken::Semibold)
    }

    fn body_typeface(&self, theme: &AndesTheme) -> Typeface {
        theme.typeface(FontToken::Regular)
    }

    /// Icon background everywhere, darkened while pressed
    fn primary_action_background(&self, theme: &AndesTheme, ty: MessageType) -> BackgroundColorConfig {
        let color = self.icon_background_color(theme, ty);
        BackgroundColorConfig {
            enabled: color,
            pressed: color.darken(PRESSED_DARKEN),
            focused: color,
            hovered: color,
            disabled: color,
            other: Some(color),
        }
    }

    fn primary_action_text_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::White)
    }

    /// Transparent while idle, message background in other states
    fn secondary_action_background(
        &self,
        theme: &AndesTheme,
        ty: MessageType,
    ) -> BackgroundColorConfig {
        let idle = theme.color(ColorToken::TransparentIdle);
        let background = self.background_color(theme, ty);
        BackgroundColorConfig {
            enabled: idle,
            pressed: idle.darken(PRESSED_DARKEN),
            focused: background,
            hovered: background,
            disabled: background,
            other: Some(background),
        }
    }
}

#[derive(Debug)]
struct LoudMessage;

impl MessageHierarchyStyle for LoudMessage {
    fn background_color(&self, theme: &AndesTheme, ty: MessageType) -> Color {
        ty.style().primary_color(theme)
    }

    fn text_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageLoudText)
    }

    fn dismiss_icon_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageLoudDismissable)
    }

    fn icon_background_color(&self, theme: &AndesTheme, ty: MessageType) -> Color {
        ty.style().secondary_color(theme)
    }

    fn secondary_action_text_color(&self, theme: &AndesTheme, _ty: MessageType) -> Color {
        theme.color(ColorToken::White)
    }
}

#[derive(Debug)]
struct QuietMessage;

impl MessageHierarchyStyle for QuietMessage {
    fn background_color(&self, theme: &AndesTheme, _ty: MessageType) -> Color {
        theme.color(ColorToken::MessageQuietBg)
    }

    fn text_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageQuietText)
    }

    fn dismiss_icon_color(&self, theme: &AndesTheme) -> Color {
        theme.color(ColorToken::MessageQuietDismissable)
    }

    fn icon_background_color(&self, theme: &AndesTheme, ty: MessageType) -> Color {
        ty.style().primary_color(theme)
    }

    fn secondary_action_text_color(&self, theme: &AndesTheme, ty: MessageType) -> Color {
        self.icon_background_color(theme, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_core::{FontWeight, ViewState};

    #[test]
    fn test_loud_colors() {
        let theme = AndesTheme::andes();
        let loud = MessageHierarchy::Loud.style();
        let ty = MessageType::Error;
        assert_eq!(loud.background_color(&theme, ty), theme.color(ColorToken::MessageErrorPrimary));
        assert_eq!(
            loud.icon_background_color(&theme, ty),
            theme.color(ColorToken::MessageErrorPrimaryDark)
        );
        assert_eq!(loud.text_color(&theme), Color::WHITE);
        assert_eq!(loud.secondary_action_text_color(&theme, ty), Color::WHITE);
    }

    #[test]
    fn test_quiet_colors() {
        let theme = AndesTheme::andes();
        let quiet = MessageHierarchy::Quiet.style();
        for ty in MessageType::ALL {
            assert_eq!(quiet.background_color(&theme, ty), theme.color(ColorToken::MessageQuietBg));
            assert_eq!(quiet.icon_background_color(&theme, ty), ty.style().primary_color(&theme));
            assert_eq!(
                quiet.secondary_action_text_color(&theme, ty),
                quiet.icon_background_color(&theme, ty)
            );
        }
    }

    #[test]
    fn test_typefaces() {
        let theme = AndesTheme::andes();
        for hierarchy in MessageHierarchy::ALL {
            assert_eq!(hierarchy.style().title_typeface(&theme).weight, FontWeight::Semibold);
            assert_eq!(hierarchy.style().body_typeface(&theme).weight, FontWeight::Regular);
        }
    }

    #[test]
    fn test_action_backgrounds() {
        let theme = AndesTheme::andes();
        let loud = MessageHierarchy::Loud.style();
        let ty = MessageType::Success;
        let icon_bg = loud.icon_background_color(&theme, ty);

        let primary = loud.primary_action_background(&theme, ty);
        assert_eq!(primary.enabled, icon_bg);
        assert_eq!(primary.pressed, icon_bg.darken(0.2));
        assert_eq!(primary.disabled, icon_bg);

        let secondary = loud.secondary_action_background(&theme, ty);
        assert_eq!(secondary.enabled, theme.color(ColorToken::TransparentIdle));
        assert_eq!(secondary.focused, loud.background_color(&theme, ty));

        let drawable = primary.to_drawable(5.0);
        assert_eq!(drawable.fill_color(ViewState::ENABLED.pressed()), Some(icon_bg.darken(0.2)));
    }

    #[test]
    fn test_dismiss_icon_tint() {
        let theme = AndesTheme::andes();
        let quiet = MessageHierarchy::Quiet.style();
        let Drawable::Image(icon) = quiet.dismiss_icon(&theme) else {
            panic!("expected an image");
        };
        assert_eq!(icon.source, DISMISS_ICON);
        assert_eq!(
            icon.tint.and_then(|t| t.resolve(ViewState::ENABLED).copied()),
            Some(theme.color(ColorToken::MessageQuietDismissable))
        );
    }
}
