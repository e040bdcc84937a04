//! Message attributes

use serde::Serialize;

use super::hierarchy::MessageHierarchy;
use super::message_type::MessageType;
use crate::attrs::AttributeSet;
use crate::error::{AndesError, Result};

/// Markup attribute names
pub mod attr {
    pub const HIERARCHY: &str = "andesMessageHierarchy";
    pub const TYPE: &str = "andesMessageType";
    /// Older name of [`TYPE`]
    pub const STATE: &str = "andesMessageState";
    pub const BODY: &str = "andesMessageBodyText";
    pub const TITLE: &str = "andesMessageTitleText";
    pub const DISMISSABLE: &str = "andesMessageDismissable";
}

/// Everything a message is configured from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageAttrs {
    pub hierarchy: MessageHierarchy,
    pub message_type: MessageType,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub dismissable: bool,
}

impl MessageAttrs {
    /// Loud neutral message without title, not dismissable
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            hierarchy: MessageHierarchy::default(),
            message_type: MessageType::default(),
            body: body.into(),
            title: None,
            dismissable: false,
        }
    }

    /// Read message attributes from markup
    ///
    /// The body is mandatory.
    pub fn parse(attrs: &AttributeSet) -> Result<Self> {
        let body = attrs.get_string(attr::BODY).ok_or(AndesError::MissingBody)?;
        let type_attr = if attrs.contains(attr::TYPE) {
            attr::TYPE
        } else {
            attr::STATE
        };

        Ok(Self {
            hierarchy: attrs.get_selector(attr::HIERARCHY),
            message_type: attrs.get_selector(type_attr),
            body,
            title: attrs.get_string(attr::TITLE),
            dismissable: attrs.get_bool(attr::DISMISSABLE, false),
        })
    }

    pub fn hierarchy(mut self, hierarchy: MessageHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_mandatory() {
        let attrs = AttributeSet::new().with(attr::TITLE, "Title");
        assert!(matches!(MessageAttrs::parse(&attrs), Err(AndesError::MissingBody)));
    }

    #[test]
    fn test_parse_codes() {
        let attrs = AttributeSet::new()
            .with(attr::HIERARCHY, "1001")
            .with(attr::STATE, "2001")
            .with(attr::BODY, "Body")
            .with(attr::DISMISSABLE, "true");
        let parsed = MessageAttrs::parse(&attrs).unwrap();
        assert_eq!(
            parsed,
            MessageAttrs::new("Body")
                .hierarchy(MessageHierarchy::Quiet)
                .message_type(MessageType::Success)
                .dismissable(true)
        );
    }

    #[test]
    fn test_type_attribute_wins_over_state_alias() {
        let attrs = AttributeSet::new()
            .with(attr::TYPE, "error")
            .with(attr::STATE, "warning")
            .with(attr::BODY, "Body");
        let parsed = MessageAttrs::parse(&attrs).unwrap();
        assert_eq!(parsed.message_type, MessageType::Error);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let attrs = AttributeSet::new()
            .with(attr::HIERARCHY, "shouty")
            .with(attr::TYPE, "9999")
            .with(attr::BODY, "Body");
        let parsed = MessageAttrs::parse(&attrs).unwrap();
        assert_eq!(parsed, MessageAttrs::new("Body"));
    }
}
