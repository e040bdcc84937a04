//! Spacing between a button's text and its icon

use andes_core::Drawable;
use andes_theme::AndesTheme;
use serde::Serialize;

use super::size::ButtonSizeStyle;

/// Text and icon margins of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ButtonMargin {
    pub text_left_margin: f32,
    pub text_right_margin: f32,
    pub icon_left_margin: f32,
    pub icon_right_margin: f32,
}

impl ButtonMargin {
    /// Margins for a button of `size` showing `left` or `right`
    ///
    /// Icons only count when the size can display them; a left icon wins
    /// over a right one.
    pub fn new(
        size: &dyn ButtonSizeStyle,
        left: Option<&Drawable>,
        right: Option<&Drawable>,
        theme: &AndesTheme,
    ) -> Self {
        let shows_icons = size.can_display_icon();

        if shows_icons && left.is_some() {
            Self {
                text_left_margin: 0.0,
                text_right_margin: size.text_right_margin(theme),
                icon_left_margin: size.left_icon_left_margin(theme),
                icon_right_margin: size.left_icon_right_margin(theme),
            }
        } else if shows_icons && right.is_some() {
            Self {
                text_left_margin: size.text_left_margin(theme),
                text_right_margin: 0.0,
                icon_left_margin: size.right_icon_left_margin(theme),
                icon_right_margin: size.right_icon_right_margin(theme),
            }
        } else {
            Self {
                text_left_margin: size.text_left_margin(theme),
                text_right_margin: size.text_right_margin(theme),
                icon_left_margin: 0.0,
                icon_right_margin: 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::button::ButtonSize;

    #[test]
    fn test_large_margins() {
        let theme = AndesTheme::andes();
        let icon = Drawable::resource("icon");
        let large = ButtonSize::Large.style();

        let left = ButtonMargin::new(large, Some(&icon), Some(&icon), &theme);
        assert_eq!(left.text_left_margin, 0.0);
        assert_eq!(left.text_right_margin, 8.0);
        assert_eq!(left.icon_left_margin, 0.0);
        assert_eq!(left.icon_right_margin, 12.0);

        let right = ButtonMargin::new(large, None, Some(&icon), &theme);
        assert_eq!(right.text_left_margin, 8.0);
        assert_eq!(right.text_right_margin, 0.0);
        assert_eq!(right.icon_left_margin, 12.0);
        assert_eq!(right.icon_right_margin, 0.0);

        let plain = ButtonMargin::new(large, None, None, &theme);
        assert_eq!(plain.text_left_margin, 8.0);
        assert_eq!(plain.text_right_margin, 8.0);
    }

    #[test]
    fn test_icons_ignored_on_small_sizes() {
        let theme = AndesTheme::andes();
        let icon = Drawable::resource("icon");
        for size in [ButtonSize::Medium, ButtonSize::Small] {
            let with_icon = ButtonMargin::new(size.style(), Some(&icon), None, &theme);
            let without = ButtonMargin::new(size.style(), None, None, &theme);
            assert_eq!(with_icon, without);
        }
    }
}
