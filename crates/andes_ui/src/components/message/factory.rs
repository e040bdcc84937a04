//! Message configuration factory

use andes_core::{Color, Drawable, Typeface};
use andes_theme::AndesTheme;
use serde::Serialize;

use super::attrs::MessageAttrs;
use crate::attrs::AttributeSet;
use crate::components::button::BackgroundColorConfig;
use crate::error::Result;

/// Fully resolved message styling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageConfiguration {
    pub icon_background_color: Color,
    pub background_color: Color,
    pub pipe_color: Color,
    pub text_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    pub body_text: String,
    pub title_size: f32,
    pub body_size: f32,
    pub line_height: f32,
    pub title_typeface: Typeface,
    pub body_typeface: Typeface,
    pub icon: Drawable,
    pub dismissable: bool,
    pub dismiss_icon: Drawable,
    pub dismiss_icon_color: Color,
    /// Actions are attached at runtime, never by the factory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action_text: Option<String>,
    pub primary_action_background: BackgroundColorConfig,
    pub primary_action_text_color: Color,
    pub secondary_action_background: BackgroundColorConfig,
    pub secondary_action_text_color: Color,
}

/// Builds [`MessageConfiguration`]s
pub struct MessageFactory;

impl MessageFactory {
    /// Configuration for a markup element's attributes
    pub fn from_attrs(theme: &AndesTheme, attrs: &AttributeSet) -> Result<MessageConfiguration> {
        Ok(Self::create(theme, &MessageAttrs::parse(attrs)?))
    }

    pub fn create(theme: &AndesTheme, attrs: &MessageAttrs) -> MessageConfiguration {
        let hierarchy = attrs.hierarchy.style();
        let ty = attrs.message_type;
        let type_style = ty.style();
        let dimens = &theme.dimensions.message;

        MessageConfiguration {
            icon_background_color: type_style.icon_background_color(theme),
            background_color: hierarchy.background_color(theme, ty),
            pipe_color: type_style.pipe_color(theme),
            text_color: hierarchy.text_color(theme),
            title_text: attrs.title.clone(),
            body_text: attrs.body.clone(),
            title_size: dimens.title_size,
            body_size: dimens.body_size,
            line_height: dimens.line_height,
            title_typeface: hierarchy.title_typeface(theme),
            body_typeface: hierarchy.body_typeface(theme),
            icon: type_style.icon(theme, attrs.hierarchy),
            dismissable: attrs.dismissable,
            dismiss_icon: hierarchy.dismiss_icon(theme),
            dismiss_icon_color: hierarchy.dismiss_icon_color(theme),
            primary_action_text: None,
            secondary_action_text: None,
            primary_action_background: hierarchy.primary_action_background(theme, ty),
            primary_action_text_color: hierarchy.primary_action_text_color(theme),
            secondary_action_background: hierarchy.secondary_action_background(theme, ty),
            secondary_action_text_color: hierarchy.secondary_action_text_color(theme, ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::message::{attr, MessageHierarchy, MessageType};
    use andes_theme::ColorToken;

    #[test]
    fn test_loud_neutral_defaults() {
        let theme = AndesTheme::andes();
        let config = MessageFactory::create(&theme, &MessageAttrs::new("Hello"));
        assert_eq!(config.background_color, theme.color(ColorToken::MessageNeutralPrimary));
        assert_eq!(config.pipe_color, theme.color(ColorToken::MessageNeutralPrimary));
        assert_eq!(
            config.icon_background_color,
            theme.color(ColorToken::MessageNeutralPrimaryDark)
        );
        assert_eq!(config.text_color, theme.color(ColorToken::MessageLoudText));
        assert_eq!(config.body_text, "Hello");
        assert!(config.title_text.is_none());
        assert!(!config.dismissable);
        assert!(config.primary_action_text.is_none());
        assert_eq!(config.line_height, 18.0);
    }

    #[test]
    fn test_markup_and_typed_agree() {
        let theme = AndesTheme::andes();
        let markup = AttributeSet::new()
            .with(attr::HIERARCHY, "quiet")
            .with(attr::TYPE, "2002")
            .with(attr::BODY, "Careful")
            .with(attr::TITLE, "Heads up")
            .with(attr::DISMISSABLE, "true");
        let typed = MessageAttrs::new("Careful")
            .hierarchy(MessageHierarchy::Quiet)
            .message_type(MessageType::Warning)
            .title("Heads up")
            .dismissable(true);

        assert_eq!(
            MessageFactory::from_attrs(&theme, &markup).unwrap(),
            MessageFactory::create(&theme, &typed)
        );
    }

    #[test]
    fn test_quiet_uses_quiet_background() {
        let theme = AndesTheme::andes();
        let attrs = MessageAttrs::new("Body").hierarchy(MessageHierarchy::Quiet);
        let config = MessageFactory::create(&theme, &attrs);
        assert_eq!(config.background_color, theme.color(ColorToken::MessageQuietBg));
        assert_eq!(config.secondary_action_text_color, theme.color(ColorToken::MessageNeutralPrimary));
    }
}
