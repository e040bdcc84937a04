//! Button hierarchy: how much visual weight a button carries

use andes_core::{Color, ColorStateList, Drawable, StateList, StateSelector, Typeface};
use andes_theme::{AndesTheme, ColorToken, FontToken};
use serde::{Deserialize, Serialize};

use crate::attrs::AttrValue;

/// Button hierarchy variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonHierarchy {
    /// Filled with the accent color
    #[default]
    Loud,
    /// Soft accent background
    Quiet,
    /// No background until interacted with
    Transparent,
}

impl ButtonHierarchy {
    pub const ALL: [ButtonHierarchy; 3] = [
        ButtonHierarchy::Loud,
        ButtonHierarchy::Quiet,
        ButtonHierarchy::Transparent,
    ];

    /// Style resolver for this hierarchy
    pub fn style(self) -> &'static dyn ButtonHierarchyStyle {
        match self {
            ButtonHierarchy::Loud => &LoudHierarchy,
            ButtonHierarchy::Quiet => &QuietHierarchy,
            ButtonHierarchy::Transparent => &TransparentHierarchy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ButtonHierarchy::Loud => "loud",
            ButtonHierarchy::Quiet => "quiet",
            ButtonHierarchy::Transparent => "transparent",
        }
    }
}

impl AttrValue for ButtonHierarchy {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "loud" | "100" => Some(ButtonHierarchy::Loud),
            "quiet" | "101" => Some(ButtonHierarchy::Quiet),
            "transparent" | "102" => Some(ButtonHierarchy::Transparent),
            _ => None,
        }
    }
}

/// Background colors of a button per interaction state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundColorConfig {
    pub enabled: Color,
    pub pressed: Color,
    pub focused: Color,
    pub hovered: Color,
    pub disabled: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Color>,
}

impl BackgroundColorConfig {
    /// Round-rect state list, first match wins: pressed, enabled, disabled,
    /// hovered, focused
    pub fn to_drawable(&self, corner_radius: f32) -> Drawable {
        let shape = |color| Drawable::round_rect(corner_radius, color);
        Drawable::StateList(
            StateList::new()
                .with(StateSelector::pressed(), shape(self.pressed))
                .with(StateSelector::enabled(), shape(self.enabled))
                .with(StateSelector::unless_enabled(), shape(self.disabled))
                .with(StateSelector::hovered(), shape(self.hovered))
                .with(StateSelector::focused(), shape(self.focused)),
        )
    }
}

/// Text colors of a button
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextColorConfig {
    pub enabled: Color,
    pub disabled: Color,
}

impl TextColorConfig {
    pub fn to_color_state_list(&self) -> ColorStateList {
        ColorStateList::new()
            .with(StateSelector::unless_enabled(), self.disabled)
            .with(StateSelector::enabled(), self.enabled)
    }
}

/// Resolves hierarchy-dependent button styling from theme tokens
pub trait ButtonHierarchyStyle: Sync + std::fmt::Debug {
    fn background_colors(&self, theme: &AndesTheme) -> BackgroundColorConfig;

    fn text_colors(&self, theme: &AndesTheme) -> TextColorConfig;

    fn background(&self, theme: &AndesTheme, corner_radius: f32) -> Drawable {
        self.background_colors(theme).to_drawable(corner_radius)
    }

    fn text_color(&self, theme: &AndesTheme) -> ColorStateList {
        self.text_colors(theme).to_color_state_list()
    }

    /// Icons are tinted like the text
    fn icon_color(&self, theme: &AndesTheme) -> ColorStateList {
        self.text_color(theme)
    }

    fn typeface(&self, theme: &AndesTheme) -> Typeface {
        theme.typeface(FontToken::Semibold)
    }
}

#[derive(Debug)]
struct LoudHierarchy;

impl ButtonHierarchyStyle for LoudHierarchy {
    fn background_colors(&self, theme: &AndesTheme) -> BackgroundColorConfig {
        BackgroundColorConfig {
            enabled: theme.color(ColorToken::ButtonLoudBg),
            pressed: theme.color(ColorToken::ButtonLoudBgPressed),
            focused: theme.color(ColorToken::ButtonLoudBgFocused),
            hovered: theme.color(ColorToken::ButtonLoudBgHovered),
            disabled: theme.color(ColorToken::ButtonLoudBgDisabled),
            other: Some(theme.color(ColorToken::ButtonLoudBgOther)),
        }
    }

    fn text_colors(&self, theme: &AndesTheme) -> TextColorConfig {
        TextColorConfig {
            enabled: theme.color(ColorToken::ButtonLoudText),
            disabled: theme.color(ColorToken::ButtonLoudTextDisabled),
        }
    }
}

#[derive(Debug)]
struct QuietHierarchy;

impl ButtonHierarchyStyle for QuietHierarchy {
    fn background_colors(&self, theme: &AndesTheme) -> BackgroundColorConfig {
        BackgroundColorConfig {
            enabled: theme.color(ColorToken::ButtonQuietBg),
            pressed: theme.color(ColorToken::ButtonQuietBgPressed),
            focused: theme.color(ColorToken::ButtonQuietBgFocused),
            hovered: theme.color(ColorToken::ButtonQuietBgHovered),
            disabled: theme.color(ColorToken::ButtonQuietBgDisabled),
            other: Some(theme.color(ColorToken::ButtonQuietBgOther)),
        }
    }

    fn text_colors(&self, theme: &AndesTheme) -> TextColorConfig {
        TextColorConfig {
            enabled: theme.color(ColorToken::ButtonQuietText),
            disabled: theme.color(ColorToken::ButtonQuietTextDisabled),
        }
    }
}

#[derive(Debug)]
struct TransparentHierarchy;

impl ButtonHierarchyStyle for TransparentHierarchy {
    fn background_colors(&self, theme: &AndesTheme) -> BackgroundColorConfig {
        BackgroundColorConfig {
            enabled: theme.color(ColorToken::ButtonTransparentBg),
            pressed: theme.color(ColorToken::ButtonTransparentBgPressed),
            focused: theme.color(ColorToken::ButtonTransparentBgFocused),
            hovered: theme.color(ColorToken::ButtonTransparentBgHovered),
            disabled: theme.color(ColorToken::ButtonTransparentBgDisabled),
            other: None,
        }
    }

    fn text_colors(&self, theme: &AndesTheme) -> TextColorConfig {
        TextColorConfig {
            enabled: theme.color(ColorToken::ButtonTransparentText),
            disabled: theme.color(ColorToken::ButtonTransparentTextDisabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_core::{FontWeight, ViewState};

    #[test]
    fn test_attr_codes_and_names() {
        assert_eq!(ButtonHierarchy::from_attr("101"), Some(ButtonHierarchy::Quiet));
        assert_eq!(ButtonHierarchy::from_attr("Transparent"), Some(ButtonHierarchy::Transparent));
        assert_eq!(ButtonHierarchy::from_attr("loud"), Some(ButtonHierarchy::Loud));
        assert_eq!(ButtonHierarchy::from_attr("103"), None);
    }

    #[test]
    fn test_background_state_order() {
        let theme = AndesTheme::andes();
        let bg = ButtonHierarchy::Loud.style().background(&theme, 6.0);

        // Pressed wins over enabled
        assert_eq!(
            bg.fill_color(ViewState::ENABLED.pressed()),
            Some(theme.color(ColorToken::ButtonLoudBgPressed))
        );
        // Enabled wins over hovered and focused
        assert_eq!(
            bg.fill_color(ViewState::ENABLED.hovered()),
            Some(theme.color(ColorToken::ButtonLoudBg))
        );
        assert_eq!(
            bg.fill_color(ViewState::DISABLED.focused()),
            Some(theme.color(ColorToken::ButtonLoudBgDisabled))
        );
    }

    #[test]
    fn test_text_and_icon_colors() {
        let theme = AndesTheme::andes();
        for hierarchy in ButtonHierarchy::ALL {
            let style = hierarchy.style();
            let colors = style.text_colors(&theme);
            let list = style.text_color(&theme);
            assert_eq!(list.resolve(ViewState::ENABLED), Some(&colors.enabled));
            assert_eq!(list.resolve(ViewState::DISABLED), Some(&colors.disabled));
            assert_eq!(style.icon_color(&theme), list);
            assert_eq!(style.typeface(&theme).weight, FontWeight::Semibold);
        }
    }

    #[test]
    fn test_transparent_has_no_other_color() {
        let theme = AndesTheme::andes();
        assert!(ButtonHierarchy::Transparent
            .style()
            .background_colors(&theme)
            .other
            .is_none());
        assert!(ButtonHierarchy::Quiet.style().background_colors(&theme).other.is_some());
    }
}
