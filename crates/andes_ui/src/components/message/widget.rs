//! The `AndesMessage` widget

use std::sync::Arc;

use andes_theme::{AndesTheme, ThemeState};
use tracing::{debug, warn};

use super::attrs::MessageAttrs;
use super::factory::{MessageConfiguration, MessageFactory};
use super::hierarchy::MessageHierarchy;
use super::message_type::MessageType;
use crate::attrs::AttributeSet;
use crate::components::button::{AndesButton, ButtonAttrs, ButtonHierarchy, ButtonSize};
use crate::error::{AndesError, Result};
use crate::view::{ClickEvent, Container, ImageView, TextView, ViewId, ViewNode, Visibility};

/// An inline feedback message with optional title, actions and dismiss button
///
/// There is no parameterless constructor: a message always has a body.
///
/// # Example
///
/// ```rust
/// use andes_ui::prelude::*;
///
/// let mut message = AndesMessage::builder("Your payment was approved")
///     .message_type(MessageType::Success)
///     .title("Done")
///     .dismissable(true)
///     .build();
///
/// message.setup_primary_action("See receipt", |_| {});
/// assert!(message.dismiss());
/// assert_eq!(message.visibility(), Visibility::Gone);
/// ```
#[derive(Clone, Debug)]
pub struct AndesMessage {
    id: ViewId,
    theme: Arc<AndesTheme>,
    attrs: MessageAttrs,
    config: MessageConfiguration,
    root: Container,
    message_container: Container,
    pipe: Container,
    icon: ImageView,
    title: TextView,
    body: TextView,
    dismiss: ImageView,
    primary_action: AndesButton,
    secondary_action: AndesButton,
}

impl AndesMessage {
    pub fn new(
        hierarchy: MessageHierarchy,
        message_type: MessageType,
        body: impl Into<String>,
        title: Option<String>,
        dismissable: bool,
    ) -> Self {
        let attrs = MessageAttrs {
            hierarchy,
            message_type,
            body: body.into(),
            title,
            dismissable,
        };
        Self::with_attrs(current_theme(), attrs)
    }

    /// Start a message with default hierarchy, type and no title
    pub fn builder(body: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            attrs: MessageAttrs::new(body),
            theme: None,
        }
    }

    /// Message declared in markup, styled with the current theme
    pub fn from_attrs(attrs: &AttributeSet) -> Result<Self> {
        Self::from_attrs_with_theme(current_theme(), attrs)
    }

    pub fn from_attrs_with_theme(theme: Arc<AndesTheme>, attrs: &AttributeSet) -> Result<Self> {
        Ok(Self::with_attrs(theme, MessageAttrs::parse(attrs)?))
    }

    pub fn with_attrs(theme: Arc<AndesTheme>, attrs: MessageAttrs) -> Self {
        let config = MessageFactory::create(&theme, &attrs);
        let action = |hierarchy| {
            let mut button = AndesButton::with_attrs(
                Arc::clone(&theme),
                ButtonAttrs::new(ButtonSize::Medium, hierarchy),
            );
            button.set_visibility(Visibility::Gone);
            button
        };
        let primary_action = action(ButtonHierarchy::Loud);
        let secondary_action = action(ButtonHierarchy::Transparent);

        let mut message = Self {
            id: ViewId::generate(),
            theme,
            attrs,
            config,
            root: Container::default(),
            message_container: Container::default(),
            pipe: Container::default(),
            icon: ImageView::default(),
            title: TextView::default(),
            body: TextView::default(),
            dismiss: ImageView::default(),
            primary_action,
            secondary_action,
        };
        message.setup_components();
        message
    }

    fn setup_components(&mut self) {
        self.setup_color_components();
        self.setup_dismissable();
    }

    fn setup_color_components(&mut self) {
        self.setup_title_component();
        self.setup_body_component();
        self.setup_background();
        self.setup_pipe();
        self.setup_icon();
        self.setup_buttons();
    }

    fn setup_title_component(&mut self) {
        let config = &self.config;
        match config.title_text.as_deref() {
            None | Some("") => self.title.visibility = Visibility::Gone,
            Some(title) => {
                self.title.visibility = Visibility::Visible;
                self.title.text = title.to_string();
                self.title.text_size = config.title_size;
                self.title.set_text_color(config.text_color);
                self.title.typeface = config.title_typeface.clone();
                self.title.all_caps = false;
            }
        }
    }

    fn setup_body_component(&mut self) {
        let config = &self.config;
        self.body.text = config.body_text.clone();
        self.body.text_size = config.body_size;
        self.body.set_text_color(config.text_color);
        self.body.typeface = config.body_typeface.clone();
        self.body.line_height = Some(config.line_height);
        self.body.all_caps = false;
    }

    fn setup_background(&mut self) {
        self.message_container
            .set_background_color(self.config.background_color);
    }

    fn setup_pipe(&mut self) {
        self.pipe.set_background_color(self.config.pipe_color);
    }

    fn setup_icon(&mut self) {
        self.icon.drawable = Some(self.config.icon.clone());
        self.dismiss.drawable = Some(self.config.dismiss_icon.clone());
    }

    fn setup_dismissable(&mut self) {
        self.dismiss.visibility = Visibility::from_visible(self.config.dismissable);
    }

    fn setup_buttons(&mut self) {
        let config = &self.config;
        self.primary_action
            .change_background(&config.primary_action_background);
        self.primary_action
            .change_text_color(config.primary_action_text_color);
        self.secondary_action
            .change_background(&config.secondary_action_background);
        self.secondary_action
            .change_text_color(config.secondary_action_text_color);
    }

    /// Re-run the factory, keeping the texts of attached actions
    fn refresh_config(&mut self) {
        debug!(
            id = self.id.get(),
            hierarchy = self.attrs.hierarchy.name(),
            message_type = self.attrs.message_type.name(),
            "reconfiguring message"
        );
        let mut config = MessageFactory::create(&self.theme, &self.attrs);
        config.primary_action_text = action_text(&self.primary_action);
        config.secondary_action_text = action_text(&self.secondary_action);
        self.config = config;
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn config(&self) -> &MessageConfiguration {
        &self.config
    }

    pub fn attrs(&self) -> &MessageAttrs {
        &self.attrs
    }

    pub fn hierarchy(&self) -> MessageHierarchy {
        self.attrs.hierarchy
    }

    pub fn set_hierarchy(&mut self, hierarchy: MessageHierarchy) {
        self.attrs.hierarchy = hierarchy;
        self.refresh_config();
        self.setup_color_components();
    }

    pub fn message_type(&self) -> MessageType {
        self.attrs.message_type
    }

    pub fn set_type(&mut self, message_type: MessageType) {
        self.attrs.message_type = message_type;
        self.refresh_config();
        self.setup_color_components();
    }

    pub fn body(&self) -> &str {
        &self.attrs.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.attrs.body = body.into();
        self.refresh_config();
        self.setup_body_component();
    }

    pub fn title(&self) -> Option<&str> {
        self.attrs.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.attrs.title = title;
        self.refresh_config();
        self.setup_title_component();
    }

    pub fn is_dismissable(&self) -> bool {
        self.attrs.dismissable
    }

    pub fn set_dismissable(&mut self, dismissable: bool) {
        self.attrs.dismissable = dismissable;
        self.refresh_config();
        self.setup_dismissable();
    }

    /// Restyle with another theme
    pub fn apply_theme(&mut self, theme: Arc<AndesTheme>) {
        self.primary_action.apply_theme(Arc::clone(&theme));
        self.secondary_action.apply_theme(Arc::clone(&theme));
        self.theme = theme;
        self.refresh_config();
        self.setup_components();
    }

    /// Show the primary action
    pub fn setup_primary_action<F>(&mut self, text: impl Into<String>, handler: F)
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        let text = text.into();
        self.primary_action.set_visibility(Visibility::Visible);
        self.primary_action.set_text(text.clone());
        self.primary_action.set_on_click(handler);
        self.config.primary_action_text = Some(text);
    }

    /// Show the secondary action; requires a visible primary action
    pub fn setup_secondary_action<F>(&mut self, text: impl Into<String>, handler: F) -> Result<()>
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        if !self.primary_action.visibility().is_visible() {
            warn!(id = self.id.get(), "secondary action requested without a primary action");
            return Err(AndesError::SecondaryActionWithoutPrimary);
        }
        let text = text.into();
        self.secondary_action.set_visibility(Visibility::Visible);
        self.secondary_action.set_text(text.clone());
        self.secondary_action.set_on_click(handler);
        self.config.secondary_action_text = Some(text);
        Ok(())
    }

    /// Hide the primary action, and the secondary along with it
    pub fn hide_primary_action(&mut self) {
        self.primary_action.set_visibility(Visibility::Gone);
        self.primary_action.set_click_handler(None);
        self.config.primary_action_text = None;
        self.hide_secondary_action();
    }

    pub fn hide_secondary_action(&mut self) {
        self.secondary_action.set_visibility(Visibility::Gone);
        self.secondary_action.set_click_handler(None);
        self.config.secondary_action_text = None;
    }

    pub fn click_primary_action(&self) -> bool {
        self.primary_action.click()
    }

    pub fn click_secondary_action(&self) -> bool {
        self.secondary_action.click()
    }

    /// Click the dismiss button: hides the message if it is dismissable
    pub fn dismiss(&mut self) -> bool {
        if !self.dismiss.visibility.is_visible() {
            return false;
        }
        debug!(id = self.id.get(), "message dismissed");
        self.root.visibility = Visibility::Gone;
        true
    }

    pub fn visibility(&self) -> Visibility {
        self.root.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.root.visibility = visibility;
    }

    pub fn primary_action(&self) -> &AndesButton {
        &self.primary_action
    }

    pub fn secondary_action(&self) -> &AndesButton {
        &self.secondary_action
    }

    pub fn message_container(&self) -> &Container {
        &self.message_container
    }

    pub fn pipe(&self) -> &Container {
        &self.pipe
    }

    pub fn icon_view(&self) -> &ImageView {
        &self.icon
    }

    pub fn title_view(&self) -> &TextView {
        &self.title
    }

    pub fn body_view(&self) -> &TextView {
        &self.body
    }

    pub fn dismiss_view(&self) -> &ImageView {
        &self.dismiss
    }

    pub fn snapshot(&self) -> ViewNode {
        ViewNode::container(
            "andes_message",
            &self.root,
            vec![ViewNode::container(
                "message_container",
                &self.message_container,
                vec![
                    ViewNode::container("pipe", &self.pipe, Vec::new()),
                    ViewNode::image("icon", &self.icon),
                    ViewNode::text("title", &self.title),
                    ViewNode::text("body", &self.body),
                    ViewNode::image("dismiss", &self.dismiss),
                    self.primary_action.snapshot_named("primary_action"),
                    self.secondary_action.snapshot_named("secondary_action"),
                ],
            )],
        )
    }
}

/// Builder returned by [`AndesMessage::builder`]
#[derive(Clone, Debug)]
pub struct MessageBuilder {
    attrs: MessageAttrs,
    theme: Option<Arc<AndesTheme>>,
}

impl MessageBuilder {
    pub fn hierarchy(mut self, hierarchy: MessageHierarchy) -> Self {
        self.attrs = self.attrs.hierarchy(hierarchy);
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.attrs = self.attrs.message_type(message_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.attrs = self.attrs.title(title);
        self
    }

    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.attrs = self.attrs.dismissable(dismissable);
        self
    }

    /// Style with `theme` instead of the current global theme
    pub fn theme(mut self, theme: Arc<AndesTheme>) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn build(self) -> AndesMessage {
        let theme = self.theme.unwrap_or_else(current_theme);
        AndesMessage::with_attrs(theme, self.attrs)
    }
}

fn action_text(button: &AndesButton) -> Option<String> {
    button
        .visibility()
        .is_visible()
        .then(|| button.text().to_string())
}

fn current_theme() -> Arc<AndesTheme> {
    ThemeState::get().theme()
}
