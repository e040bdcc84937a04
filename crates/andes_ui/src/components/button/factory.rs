//! Button configuration factory
//!
//! Both the markup entry point ([`ButtonFactory::from_attrs`]) and the typed
//! one ([`ButtonFactory::create`]) resolve through the same [`ButtonAttrs`],
//! so equivalent inputs always produce equal configurations.

use andes_core::{ColorStateList, Drawable, Typeface};
use andes_theme::AndesTheme;
use serde::Serialize;

use super::hierarchy::{ButtonHierarchy, ButtonHierarchyStyle};
use super::icon::{AndesButtonIcon, IconConfig, IconOrientation};
use super::margin::ButtonMargin;
use super::size::{ButtonSize, ButtonSizeStyle};
use crate::attrs::AttributeSet;

/// Markup attribute names
pub mod attr {
    pub const HIERARCHY: &str = "andesButtonHierarchy";
    pub const SIZE: &str = "andesButtonSize";
    pub const LEFT_ICON: &str = "andesButtonLeftIconCustom";
    pub const RIGHT_ICON: &str = "andesButtonRightIconCustom";
    pub const TEXT: &str = "andesButtonText";
    pub const ENABLED: &str = "andesButtonEnabled";
    /// Plain `text` attribute, used when the Andes one is absent
    pub const PLAIN_TEXT: &str = "text";
}

/// Everything a button is configured from
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonAttrs {
    pub hierarchy: ButtonHierarchy,
    pub size: ButtonSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<Drawable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<Drawable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub enabled: bool,
}

impl ButtonAttrs {
    pub fn new(size: ButtonSize, hierarchy: ButtonHierarchy) -> Self {
        Self {
            size,
            hierarchy,
            ..Self::default()
        }
    }

    /// Read button attributes from markup
    pub fn parse(attrs: &AttributeSet) -> Self {
        Self {
            hierarchy: attrs.get_selector(attr::HIERARCHY),
            size: attrs.get_selector(attr::SIZE),
            left_icon: attrs.get_drawable(attr::LEFT_ICON),
            right_icon: attrs.get_drawable(attr::RIGHT_ICON),
            text: attrs
                .get_string(attr::TEXT)
                .or_else(|| attrs.get_string(attr::PLAIN_TEXT)),
            enabled: attrs.get_bool(attr::ENABLED, true),
        }
    }

    /// Place `icon` on its side, clearing the other side
    pub fn icon(mut self, icon: AndesButtonIcon) -> Self {
        self.set_icon(Some(icon));
        self
    }

    pub fn set_icon(&mut self, icon: Option<AndesButtonIcon>) {
        self.left_icon = None;
        self.right_icon = None;
        if let Some(icon) = icon {
            match icon.orientation {
                IconOrientation::Left => self.left_icon = Some(icon.icon),
                IconOrientation::Right => self.right_icon = Some(icon.icon),
            }
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for ButtonAttrs {
    fn default() -> Self {
        Self {
            hierarchy: ButtonHierarchy::default(),
            size: ButtonSize::default(),
            left_icon: None,
            right_icon: None,
            text: None,
            enabled: true,
        }
    }
}

/// Fully resolved button styling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonConfiguration {
    pub background: Drawable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub text_color: ColorStateList,
    pub text_size: f32,
    pub margin: ButtonMargin,
    pub height: f32,
    pub typeface: Typeface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_config: Option<IconConfig>,
    pub enabled: bool,
    pub lateral_padding: f32,
}

impl ButtonConfiguration {
    pub fn max_lines(&self) -> u32 {
        1
    }

    pub fn left_icon(&self) -> Option<&Drawable> {
        self.icon_config.as_ref()?.left_icon.as_ref()
    }

    pub fn right_icon(&self) -> Option<&Drawable> {
        self.icon_config.as_ref()?.right_icon.as_ref()
    }
}

/// Builds [`ButtonConfiguration`]s
pub struct ButtonFactory;

impl ButtonFactory {
    /// Configuration for a markup element's attributes
    pub fn from_attrs(theme: &AndesTheme, attrs: &AttributeSet) -> ButtonConfiguration {
        Self::create(theme, &ButtonAttrs::parse(attrs))
    }

    /// Configuration for typed attributes
    pub fn create(theme: &AndesTheme, attrs: &ButtonAttrs) -> ButtonConfiguration {
        let hierarchy = attrs.hierarchy.style();
        let size = attrs.size.style();
        let left = attrs.left_icon.as_ref();
        let right = attrs.right_icon.as_ref();

        ButtonConfiguration {
            background: Self::resolve_background(hierarchy, size, theme),
            text: attrs.text.clone(),
            text_color: hierarchy.text_color(theme),
            text_size: size.text_size(theme),
            margin: ButtonMargin::new(size, left, right, theme),
            height: size.height(theme),
            typeface: hierarchy.typeface(theme),
            icon_config: size.icon_config(hierarchy, left, right, theme),
            enabled: attrs.enabled,
            lateral_padding: size.lateral_padding(theme),
        }
    }

    fn resolve_background(
        hierarchy: &dyn ButtonHierarchyStyle,
        size: &dyn ButtonSizeStyle,
        theme: &AndesTheme,
    ) -> Drawable {
        hierarchy.background(theme, size.corner_radius(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_core::ViewState;

    #[test]
    fn test_defaults_from_empty_markup() {
        let theme = AndesTheme::andes();
        let config = ButtonFactory::from_attrs(&theme, &AttributeSet::new());
        let expected = ButtonFactory::create(
            &theme,
            &ButtonAttrs::new(ButtonSize::Large, ButtonHierarchy::Loud),
        );
        assert_eq!(config, expected);
        assert!(config.enabled);
        assert_eq!(config.max_lines(), 1);
        assert!(config.text.is_none());
        assert!(config.icon_config.is_none());
    }

    #[test]
    fn test_background_uses_size_radius() {
        let theme = AndesTheme::andes();
        let config = ButtonFactory::create(
            &theme,
            &ButtonAttrs::new(ButtonSize::Small, ButtonHierarchy::Quiet),
        );
        let Some(Drawable::Shape(shape)) = config.background.resolve(ViewState::ENABLED) else {
            panic!("expected a shape background");
        };
        assert_eq!(shape.shape, andes_core::Shape::RoundRect { radius: 4.0 });
    }

    #[test]
    fn test_markup_text_and_enabled() {
        let theme = AndesTheme::andes();
        let attrs = AttributeSet::new()
            .with(attr::TEXT, "Pay")
            .with(attr::ENABLED, "false")
            .with(attr::PLAIN_TEXT, "ignored");
        let config = ButtonFactory::from_attrs(&theme, &attrs);
        assert_eq!(config.text.as_deref(), Some("Pay"));
        assert!(!config.enabled);

        let plain = AttributeSet::new().with(attr::PLAIN_TEXT, "Fallback");
        let config = ButtonFactory::from_attrs(&theme, &plain);
        assert_eq!(config.text.as_deref(), Some("Fallback"));
    }

    #[test]
    fn test_set_icon_replaces_side() {
        let mut attrs = ButtonAttrs::default().icon(AndesButtonIcon::left(Drawable::resource("a")));
        assert!(attrs.left_icon.is_some());
        attrs.set_icon(Some(AndesButtonIcon::right(Drawable::resource("b"))));
        assert!(attrs.left_icon.is_none());
        assert_eq!(attrs.right_icon, Some(Drawable::resource("b")));
        attrs.set_icon(None);
        assert!(attrs.right_icon.is_none());
    }
}
