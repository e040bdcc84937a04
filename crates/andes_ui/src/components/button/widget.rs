//! The `AndesButton` widget

use std::fmt;
use std::sync::Arc;

use andes_core::Color;
use andes_theme::{AndesTheme, ThemeState};
use tracing::debug;

use super::factory::{ButtonAttrs, ButtonConfiguration, ButtonFactory};
use super::hierarchy::{BackgroundColorConfig, ButtonHierarchy};
use super::icon::AndesButtonIcon;
use super::size::ButtonSize;
use crate::attrs::AttributeSet;
use crate::view::{
    ChainMargins, ClickEvent, ClickHandler, Container, Ellipsize, ImageView, Padding, TextView,
    ViewId, ViewNode, Visibility,
};

/// A themed button: a text packed between two optional icons
///
/// # Example
///
/// ```rust
/// use andes_ui::prelude::*;
///
/// let mut button = AndesButton::with_style(ButtonSize::Medium, ButtonHierarchy::Quiet);
/// button.set_text("Continue");
/// assert_eq!(button.text(), "Continue");
/// assert_eq!(button.config().height, 32.0);
/// ```
#[derive(Clone)]
pub struct AndesButton {
    id: ViewId,
    theme: Arc<AndesTheme>,
    attrs: ButtonAttrs,
    config: ButtonConfiguration,
    container: Container,
    text: TextView,
    left_icon: ImageView,
    right_icon: ImageView,
    on_click: Option<ClickHandler>,
}

impl AndesButton {
    /// Large loud button without icon
    pub fn new() -> Self {
        Self::with_style(ButtonSize::Large, ButtonHierarchy::Loud)
    }

    pub fn with_style(size: ButtonSize, hierarchy: ButtonHierarchy) -> Self {
        Self::with_attrs(current_theme(), ButtonAttrs::new(size, hierarchy))
    }

    pub fn with_icon(size: ButtonSize, hierarchy: ButtonHierarchy, icon: AndesButtonIcon) -> Self {
        Self::with_attrs(current_theme(), ButtonAttrs::new(size, hierarchy).icon(icon))
    }

    /// Button declared in markup, styled with the current theme
    pub fn from_attrs(attrs: &AttributeSet) -> Self {
        Self::from_attrs_with_theme(current_theme(), attrs)
    }

    pub fn from_attrs_with_theme(theme: Arc<AndesTheme>, attrs: &AttributeSet) -> Self {
        Self::with_attrs(theme, ButtonAttrs::parse(attrs))
    }

    pub fn with_attrs(theme: Arc<AndesTheme>, attrs: ButtonAttrs) -> Self {
        let config = ButtonFactory::create(&theme, &attrs);
        let mut button = Self {
            id: ViewId::generate(),
            theme,
            attrs,
            config,
            container: Container::default(),
            text: TextView::default(),
            left_icon: ImageView::default(),
            right_icon: ImageView::default(),
            on_click: None,
        };
        button.setup_components();
        button
    }

    fn setup_components(&mut self) {
        self.setup_view_as_clickable();
        self.setup_height();
        self.setup_text_component();
        self.setup_icon_components();
        self.setup_margins();
        self.container.padding = Padding::horizontal(self.config.lateral_padding);
        self.container.background = Some(self.config.background.clone());
        self.set_enabled(self.config.enabled);
    }

    fn setup_view_as_clickable(&mut self) {
        self.container.clickable = true;
        self.container.focusable = true;
    }

    fn setup_height(&mut self) {
        self.container.set_fixed_height(self.config.height);
    }

    fn setup_text_component(&mut self) {
        let config = &self.config;
        self.text.text = config.text.clone().unwrap_or_default();
        self.text.max_lines = Some(config.max_lines());
        self.text.all_caps = false;
        self.text.text_size = config.text_size;
        self.text.text_color = config.text_color.clone();
        self.text.typeface = config.typeface.clone();
        self.text.ellipsize = Some(Ellipsize::End);
    }

    fn setup_icon_components(&mut self) {
        self.left_icon.set_drawable(self.config.left_icon().cloned());
        self.right_icon.set_drawable(self.config.right_icon().cloned());
    }

    fn setup_margins(&mut self) {
        let margin = &self.config.margin;
        self.text.margins = ChainMargins {
            start: margin.icon_right_margin,
            end: margin.icon_left_margin,
            gone_start: margin.text_left_margin,
            gone_end: margin.text_right_margin,
        };
    }

    fn reconfigure(&mut self) {
        debug!(
            id = self.id.get(),
            size = self.attrs.size.name(),
            hierarchy = self.attrs.hierarchy.name(),
            "reconfiguring button"
        );
        self.config = ButtonFactory::create(&self.theme, &self.attrs);
        self.setup_components();
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn config(&self) -> &ButtonConfiguration {
        &self.config
    }

    pub fn attrs(&self) -> &ButtonAttrs {
        &self.attrs
    }

    pub fn size(&self) -> ButtonSize {
        self.attrs.size
    }

    pub fn hierarchy(&self) -> ButtonHierarchy {
        self.attrs.hierarchy
    }

    pub fn text(&self) -> &str {
        &self.text.text
    }

    pub fn is_enabled(&self) -> bool {
        self.container.enabled
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn text_view(&self) -> &TextView {
        &self.text
    }

    pub fn left_icon_view(&self) -> &ImageView {
        &self.left_icon
    }

    pub fn right_icon_view(&self) -> &ImageView {
        &self.right_icon
    }

    /// Space left of and right of the text, given which icons are shown
    pub fn text_margins(&self) -> (f32, f32) {
        (
            self.text.margins.effective_start(self.left_icon.visibility),
            self.text.margins.effective_end(self.right_icon.visibility),
        )
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text.text = text.clone();
        self.config.text = Some(text.clone());
        self.attrs.text = Some(text);
    }

    /// Enable or disable the button and all of its children
    pub fn set_enabled(&mut self, enabled: bool) {
        self.attrs.enabled = enabled;
        self.container.enabled = enabled;
        self.text.enabled = enabled;
        self.left_icon.enabled = enabled;
        self.right_icon.enabled = enabled;
    }

    pub fn set_size(&mut self, size: ButtonSize) {
        self.attrs.size = size;
        self.reconfigure();
    }

    pub fn set_hierarchy(&mut self, hierarchy: ButtonHierarchy) {
        self.attrs.hierarchy = hierarchy;
        self.reconfigure();
    }

    pub fn set_icon(&mut self, icon: Option<AndesButtonIcon>) {
        self.attrs.set_icon(icon);
        self.reconfigure();
    }

    /// Restyle with another theme
    pub fn apply_theme(&mut self, theme: Arc<AndesTheme>) {
        self.theme = theme;
        self.reconfigure();
    }

    /// Force one text color for every state
    pub fn change_text_color(&mut self, color: Color) {
        self.text.set_text_color(color);
    }

    /// Replace the background, drawn with the medium corner radius
    pub fn change_background(&mut self, colors: &BackgroundColorConfig) {
        let radius = self.theme.dimensions.button.medium.corner_radius;
        self.container.background = Some(colors.to_drawable(radius));
    }

    pub fn set_on_click<F>(&mut self, handler: F)
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
    }

    pub(crate) fn set_click_handler(&mut self, handler: Option<ClickHandler>) {
        self.on_click = handler;
    }

    /// Deliver a click; ignored while disabled or gone
    ///
    /// Returns whether a handler ran.
    pub fn click(&self) -> bool {
        if !self.container.enabled || !self.container.visibility.is_visible() {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler(&ClickEvent { view_id: self.id });
                true
            }
            None => false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.container.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.container.visibility = visibility;
    }

    pub fn snapshot(&self) -> ViewNode {
        self.snapshot_named("andes_button")
    }

    pub(crate) fn snapshot_named(&self, name: &str) -> ViewNode {
        ViewNode::container(
            name,
            &self.container,
            vec![
                ViewNode::image("left_icon", &self.left_icon),
                ViewNode::text("text", &self.text),
                ViewNode::image("right_icon", &self.right_icon),
            ],
        )
    }
}

impl Default for AndesButton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AndesButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndesButton")
            .field("id", &self.id)
            .field("attrs", &self.attrs)
            .field("text", &self.text.text)
            .field("enabled", &self.container.enabled)
            .field("visibility", &self.container.visibility)
            .field("has_click_handler", &self.on_click.is_some())
            .finish()
    }
}

fn current_theme() -> Arc<AndesTheme> {
    ThemeState::get().theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_core::{Drawable, ViewState};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn theme() -> Arc<AndesTheme> {
        Arc::new(AndesTheme::andes())
    }

    #[test]
    fn test_default_button() {
        let button = AndesButton::with_attrs(theme(), ButtonAttrs::default());
        assert_eq!(button.size(), ButtonSize::Large);
        assert_eq!(button.hierarchy(), ButtonHierarchy::Loud);
        assert!(button.container().clickable);
        assert!(button.container().focusable);
        assert_eq!(button.container().min_height, Some(48.0));
        assert_eq!(button.container().max_height, Some(48.0));
        assert_eq!(button.container().padding, Padding::horizontal(16.0));
        assert_eq!(button.text_view().max_lines, Some(1));
        assert!(!button.text_view().all_caps);
        assert_eq!(button.left_icon_view().visibility, Visibility::Gone);
        assert_eq!(button.right_icon_view().visibility, Visibility::Gone);
        assert_eq!(button.text_margins(), (8.0, 8.0));
    }

    #[test]
    fn test_icon_margins_in_layout() {
        let icon = AndesButtonIcon::left(Drawable::resource("andesui_icon"));
        let attrs = ButtonAttrs::new(ButtonSize::Large, ButtonHierarchy::Quiet).icon(icon);
        let mut button = AndesButton::with_attrs(theme(), attrs);
        assert!(button.left_icon_view().visibility.is_visible());
        assert_eq!(button.text_margins(), (12.0, 8.0));

        button.set_icon(Some(AndesButtonIcon::right(Drawable::resource("andesui_icon"))));
        assert_eq!(button.left_icon_view().visibility, Visibility::Gone);
        assert!(button.right_icon_view().visibility.is_visible());
        assert_eq!(button.text_margins(), (8.0, 12.0));

        // Medium buttons drop the icon entirely
        button.set_size(ButtonSize::Medium);
        assert_eq!(button.right_icon_view().visibility, Visibility::Gone);
        assert_eq!(button.text_margins(), (0.0, 0.0));
    }

    #[test]
    fn test_enabled_propagates_to_children() {
        let mut button = AndesButton::with_attrs(theme(), ButtonAttrs::default());
        button.set_enabled(false);
        assert!(!button.is_enabled());
        assert!(!button.text_view().enabled);
        assert!(!button.left_icon_view().enabled);
        assert!(!button.right_icon_view().enabled);

        let disabled = theme().color(andes_theme::ColorToken::ButtonLoudTextDisabled);
        assert_eq!(button.text_view().current_color(), disabled);
    }

    #[test]
    fn test_setters_keep_text_and_enabled() {
        let mut button = AndesButton::with_attrs(theme(), ButtonAttrs::default());
        button.set_text("Buy");
        button.set_enabled(false);
        button.set_hierarchy(ButtonHierarchy::Transparent);
        assert_eq!(button.text(), "Buy");
        assert!(!button.is_enabled());
        assert_eq!(button.config().height, 48.0);
    }

    #[test]
    fn test_set_text_updates_configuration() {
        let mut button = AndesButton::with_attrs(theme(), ButtonAttrs::default().text("Old"));
        button.set_text("New");
        assert_eq!(button.config().text.as_deref(), Some("New"));
        assert_eq!(button.text_view().text, "New");
        assert_eq!(button.attrs().text.as_deref(), Some("New"));
    }

    #[test]
    fn test_click_dispatch() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let mut button = AndesButton::with_attrs(theme(), ButtonAttrs::default());
        assert!(!button.click());

        let counter = Arc::clone(&clicks);
        let id = button.id();
        button.set_on_click(move |event| {
            assert_eq!(event.view_id, id);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(button.click());

        button.set_enabled(false);
        assert!(!button.click());
        button.set_enabled(true);
        button.set_visibility(Visibility::Gone);
        assert!(!button.click());

        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_change_background_uses_medium_radius() {
        let theme = theme();
        let mut button = AndesButton::with_attrs(Arc::clone(&theme), ButtonAttrs::default());
        let colors = BackgroundColorConfig {
            enabled: Color::WHITE,
            pressed: Color::BLACK,
            focused: Color::WHITE,
            hovered: Color::WHITE,
            disabled: Color::WHITE,
            other: None,
        };
        button.change_background(&colors);

        let background = button.container().background.as_ref().unwrap();
        let Some(Drawable::Shape(shape)) = background.resolve(ViewState::ENABLED) else {
            panic!("expected a shape background");
        };
        assert_eq!(
            shape.shape,
            andes_core::Shape::RoundRect {
                radius: theme.dimensions.button.medium.corner_radius
            }
        );
        assert_eq!(background.fill_color(ViewState::ENABLED.pressed()), Some(Color::BLACK));
    }

    #[test]
    fn test_snapshot_tree() {
        let mut button = AndesButton::with_attrs(theme(), ButtonAttrs::default());
        button.set_text("Save");
        let snapshot = button.snapshot();
        assert_eq!(snapshot.name(), "andes_button");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["children"][1]["text"], "Save");
        assert_eq!(json["children"][0]["visibility"], "gone");
    }
}
