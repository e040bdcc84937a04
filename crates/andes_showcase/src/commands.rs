//! Showcase subcommands
//!
//! Every command renders to a string; `main` prints it.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use andes_core::{Color, Drawable, ViewState};
use andes_theme::AndesTheme;
use andes_ui::components::button::ButtonSizeStyle;
use andes_ui::markup;
use andes_ui::{
    AndesButtonIcon, ButtonAttrs, ButtonFactory, ButtonHierarchy, ButtonSize, IconOrientation,
    MessageAttrs, MessageFactory, MessageHierarchy, MessageType,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

pub struct ButtonArgs {
    pub hierarchy: ButtonHierarchy,
    pub size: ButtonSize,
    pub icon: Option<String>,
    pub icon_side: IconOrientation,
    pub text: Option<String>,
    pub enabled: bool,
}

pub struct MessageArgs {
    pub hierarchy: MessageHierarchy,
    pub message_type: MessageType,
    pub body: String,
    pub title: Option<String>,
    pub dismissable: bool,
}

pub fn button(theme: &AndesTheme, args: ButtonArgs) -> Result<String> {
    let mut attrs = ButtonAttrs::new(args.size, args.hierarchy).enabled(args.enabled);
    if let Some(text) = args.text {
        attrs = attrs.text(text);
    }
    if let Some(icon) = args.icon {
        attrs = attrs.icon(AndesButtonIcon::new(Drawable::resource(icon), args.icon_side));
    }
    debug!(?attrs, "resolving button");

    let config = ButtonFactory::create(theme, &attrs);
    to_json(&config)
}

pub fn message(theme: &AndesTheme, args: MessageArgs) -> Result<String> {
    let mut attrs = MessageAttrs::new(args.body)
        .hierarchy(args.hierarchy)
        .message_type(args.message_type)
        .dismissable(args.dismissable);
    if let Some(title) = args.title {
        attrs = attrs.title(title);
    }
    debug!(?attrs, "resolving message");

    let config = MessageFactory::create(theme, &attrs);
    to_json(&config)
}

#[derive(Serialize)]
struct InflatedSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    kind: &'static str,
    tree: andes_ui::view::ViewNode,
}

pub fn inflate(theme: &Arc<AndesTheme>, layout: &Path) -> Result<String> {
    let xml = fs::read_to_string(layout)
        .with_context(|| format!("Failed to read {}", layout.display()))?;
    let views = markup::inflate(&xml, Arc::clone(theme))
        .with_context(|| format!("Failed to inflate {}", layout.display()))?;
    info!("Inflated {} widgets from {}", views.len(), layout.display());

    let snapshots: Vec<_> = views
        .iter()
        .map(|view| InflatedSnapshot {
            id: view.id.clone(),
            kind: view.widget.kind(),
            tree: view.widget.snapshot(),
        })
        .collect();
    to_json(&snapshots)
}

pub fn matrix(theme: &AndesTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<12} {:>6} {:>5} {:>8} {:>6}  {:<10} {:<10}",
        "size", "hierarchy", "height", "text", "padding", "radius", "background", "text color"
    );

    for size in ButtonSize::ALL {
        for hierarchy in ButtonHierarchy::ALL {
            let config = ButtonFactory::create(theme, &ButtonAttrs::new(size, hierarchy));
            let background = config
                .background
                .fill_color(ViewState::ENABLED)
                .unwrap_or(Color::TRANSPARENT);
            let text = config.text_color.default_color();
            let radius = size.style().corner_radius(theme);
            let _ = writeln!(
                out,
                "{:<8} {:<12} {:>6} {:>5} {:>8} {:>6}  {:<10} {:<10}",
                size.name(),
                hierarchy.name(),
                config.height,
                config.text_size,
                config.lateral_padding,
                radius,
                background.to_hex_string(),
                text.to_hex_string(),
            );
        }
    }
    out
}

pub fn theme(theme: &AndesTheme) -> Result<String> {
    theme
        .to_toml_string()
        .context("Failed to serialize theme")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_json() {
        let theme = AndesTheme::andes();
        let json = button(
            &theme,
            ButtonArgs {
                hierarchy: ButtonHierarchy::Quiet,
                size: ButtonSize::Large,
                icon: Some("andesui_icon".to_string()),
                icon_side: IconOrientation::Right,
                text: Some("Next".to_string()),
                enabled: true,
            },
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["height"], 48.0);
        assert_eq!(value["text"], "Next");
        assert!(value["icon_config"]["right_icon"].is_object());
        assert_eq!(value["margin"]["icon_left_margin"], 12.0);
    }

    #[test]
    fn test_message_json() {
        let theme = AndesTheme::andes();
        let json = message(
            &theme,
            MessageArgs {
                hierarchy: MessageHierarchy::Quiet,
                message_type: MessageType::Warning,
                body: "Check your data".to_string(),
                title: None,
                dismissable: true,
            },
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body_text"], "Check your data");
        assert_eq!(value["dismissable"], true);
        assert!(value.get("title_text").is_none());
    }

    #[test]
    fn test_matrix_lists_every_variant() {
        let table = matrix(&AndesTheme::andes());
        // Header plus one row per size and hierarchy
        assert_eq!(table.lines().count(), 1 + 9);
        assert!(table.contains("small    transparent"));
    }

    #[test]
    fn test_inflate_sample_layouts() {
        let theme = Arc::new(AndesTheme::andes());
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("layouts");
        for file in ["button_showcase.xml", "message_showcase.xml"] {
            let json = inflate(&theme, &dir.join(file)).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(!value.as_array().unwrap().is_empty(), "{file}");
        }
    }

    #[test]
    fn test_sample_theme_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("layouts/theme.toml");
        let theme = AndesTheme::load(path).unwrap();
        assert_eq!(theme.name, "andes-dark-accent");
        assert!(theme.to_toml_string().unwrap().contains("[colors]"));
    }
}
