//! Button size: dimensions and icon support

use andes_core::Drawable;
use andes_theme::{AndesTheme, ButtonSizeDimens};
use serde::{Deserialize, Serialize};

use super::hierarchy::ButtonHierarchyStyle;
use super::icon::IconConfig;
use crate::attrs::AttrValue;

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    /// Full size, the only one that shows icons
    #[default]
    Large,
    Medium,
    Small,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Large, ButtonSize::Medium, ButtonSize::Small];

    /// Style resolver for this size
    pub fn style(self) -> &'static dyn ButtonSizeStyle {
        match self {
            ButtonSize::Large => &LargeSize,
            ButtonSize::Medium => &MediumSize,
            ButtonSize::Small => &SmallSize,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ButtonSize::Large => "large",
            ButtonSize::Medium => "medium",
            ButtonSize::Small => "small",
        }
    }
}

impl AttrValue for ButtonSize {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "large" | "200" => Some(ButtonSize::Large),
            "medium" | "201" => Some(ButtonSize::Medium),
            "small" | "202" => Some(ButtonSize::Small),
            _ => None,
        }
    }
}

/// Resolves size-dependent button dimensions from theme tokens
///
/// Icon margins are zero unless a size overrides them.
pub trait ButtonSizeStyle: Sync + std::fmt::Debug {
    fn dimens<'a>(&self, theme: &'a AndesTheme) -> &'a ButtonSizeDimens;

    fn text_size(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).text_size
    }

    fn height(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).height
    }

    fn text_left_margin(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).text_margin
    }

    fn text_right_margin(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).text_margin
    }

    fn lateral_padding(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).lateral_padding
    }

    fn corner_radius(&self, theme: &AndesTheme) -> f32 {
        self.dimens(theme).corner_radius
    }

    fn left_icon_left_margin(&self, _theme: &AndesTheme) -> f32 {
        0.0
    }

    fn left_icon_right_margin(&self, _theme: &AndesTheme) -> f32 {
        0.0
    }

    fn right_icon_left_margin(&self, _theme: &AndesTheme) -> f32 {
        0.0
    }

    fn right_icon_right_margin(&self, _theme: &AndesTheme) -> f32 {
        0.0
    }

    fn can_display_icon(&self) -> bool {
        false
    }

    /// Icons to display, or `None` when this size shows no icons
    fn icon_config(
        &self,
        _hierarchy: &dyn ButtonHierarchyStyle,
        _left: Option<&Drawable>,
        _right: Option<&Drawable>,
        _theme: &AndesTheme,
    ) -> Option<IconConfig> {
        None
    }
}

#[derive(Debug)]
struct LargeSize;

impl ButtonSizeStyle for LargeSize {
    fn dimens<'a>(&self, theme: &'a AndesTheme) -> &'a ButtonSizeDimens {
        &theme.dimensions.button.large
    }

    fn left_icon_right_margin(&self, theme: &AndesTheme) -> f32 {
        theme.dimensions.button.left_icon_right_margin
    }

    fn right_icon_left_margin(&self, theme: &AndesTheme) -> f32 {
        theme.dimensions.button.right_icon_left_margin
    }

    fn can_display_icon(&self) -> bool {
        true
    }

    fn icon_config(
        &self,
        hierarchy: &dyn ButtonHierarchyStyle,
        left: Option<&Drawable>,
        right: Option<&Drawable>,
        theme: &AndesTheme,
    ) -> Option<IconConfig> {
        let dimens = &theme.dimensions.button;
        let prepare = |icon: &Drawable| {
            icon.clone()
                .scaled(dimens.icon_width, dimens.icon_height)
                .tinted(hierarchy.icon_color(theme))
        };

        // Left icon takes precedence
        match (left, right) {
            (Some(icon), _) => Some(IconConfig {
                left_icon: Some(prepare(icon)),
                right_icon: None,
            }),
            (None, Some(icon)) => Some(IconConfig {
                left_icon: None,
                right_icon: Some(prepare(icon)),
            }),
            (None, None) => None,
        }
    }
}

#[derive(Debug)]
struct MediumSize;

impl ButtonSizeStyle for MediumSize {
    fn dimens<'a>(&self, theme: &'a AndesTheme) -> &'a ButtonSizeDimens {
        &theme.dimensions.button.medium
    }
}

#[derive(Debug)]
struct SmallSize;

impl ButtonSizeStyle for SmallSize {
    fn dimens<'a>(&self, theme: &'a AndesTheme) -> &'a ButtonSizeDimens {
        &theme.dimensions.button.small
    }
}
