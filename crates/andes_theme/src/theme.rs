//! Theme definition and loading

use std::fs;
use std::path::Path;

use andes_core::{Color, Typeface};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Result, ThemeError};
use crate::tokens::{ColorToken, ColorTokens, DimensionTokens, FontToken, TypographyTokens};

/// A complete set of design tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndesTheme {
    pub name: String,
    pub colors: ColorTokens,
    pub dimensions: DimensionTokens,
    pub typography: TypographyTokens,
}

impl AndesTheme {
    pub const DEFAULT_NAME: &'static str = "andes";

    /// The default Andes light theme
    pub fn andes() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            colors: ColorTokens::andes(),
            dimensions: DimensionTokens::default(),
            typography: TypographyTokens::default(),
        }
    }

    /// Parse a (possibly partial) theme from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let theme: AndesTheme = toml::from_str(content)?;
        debug!(name = %theme.name, "parsed theme");
        Ok(theme)
    }

    /// Load a (possibly partial) theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the full theme, every token included
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Resolve a typeface, falling back to the platform default when the
    /// slot is unavailable
    pub fn typeface(&self, token: FontToken) -> Typeface {
        match self.typography.get(token) {
            Some(typeface) => typeface.clone(),
            None => {
                error!(?token, "Error solving typeface, using the default one");
                Typeface::system_default()
            }
        }
    }
}

impl Default for AndesTheme {
    fn default() -> Self {
        Self::andes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_core::FontWeight;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let theme = AndesTheme::from_toml_str(
            r##"
            name = "brand"

            [colors]
            button_loud_bg = "#112233"

            [dimensions.message]
            icon_diameter = 32.0
            "##,
        )
        .unwrap();

        let defaults = AndesTheme::andes();
        assert_eq!(theme.name, "brand");
        assert_eq!(theme.color(ColorToken::ButtonLoudBg), Color::from_hex(0x112233));
        assert_eq!(
            theme.color(ColorToken::ButtonQuietBg),
            defaults.color(ColorToken::ButtonQuietBg)
        );
        assert_eq!(theme.dimensions.message.icon_diameter, 32.0);
        assert_eq!(theme.dimensions.message.body_size, defaults.dimensions.message.body_size);
        assert_eq!(theme.dimensions.button, defaults.dimensions.button);
    }

    #[test]
    fn test_single_button_size_field_override() {
        let theme = AndesTheme::from_toml_str("[dimensions.button.large]\nheight = 56.0\n").unwrap();

        let defaults = AndesTheme::andes().dimensions.button;
        let button = theme.dimensions.button;
        assert_eq!(button.large.height, 56.0);
        assert_eq!(button.large.text_size, defaults.large.text_size);
        assert_eq!(button.large.text_margin, defaults.large.text_margin);
        assert_eq!(button.large.lateral_padding, defaults.large.lateral_padding);
        assert_eq!(button.large.corner_radius, defaults.large.corner_radius);
        assert_eq!(button.medium, defaults.medium);
        assert_eq!(button.small, defaults.small);
        assert_eq!(button.left_icon_right_margin, defaults.left_icon_right_margin);
        assert_eq!(button.icon_width, defaults.icon_width);
    }

    #[test]
    fn test_single_typeface_field_override() {
        let theme = AndesTheme::from_toml_str("[typography.semibold]\nweight = \"bold\"\n").unwrap();

        let defaults = AndesTheme::andes();
        let semibold = theme.typeface(FontToken::Semibold);
        assert_eq!(semibold.weight, FontWeight::Bold);
        assert_eq!(semibold.family, defaults.typeface(FontToken::Semibold).family);
        assert_eq!(theme.typography.regular, defaults.typography.regular);
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        let err = AndesTheme::from_toml_str("[colors]\nwhite = \"blue\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AndesTheme::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn test_typeface_fallback() {
        let mut theme = AndesTheme::andes();
        assert_eq!(theme.typeface(FontToken::Semibold).weight, FontWeight::Semibold);

        theme.typography.semibold = None;
        assert!(theme.typeface(FontToken::Semibold).is_system_default());

        let theme = AndesTheme::from_toml_str(
            r#"
            [typography.regular]
            family = ""
            "#,
        )
        .unwrap();
        assert!(theme.typeface(FontToken::Regular).is_system_default());
    }

    #[test]
    fn test_dump_lists_every_section() {
        let text = AndesTheme::andes().to_toml_string().unwrap();
        assert!(text.contains("button_loud_bg = \"#3483FAFF\""));
        assert!(text.contains("[dimensions.button.large]"));
        assert!(text.contains("[typography.semibold]"));

        // Dumped output is itself a valid theme file
        let reparsed = AndesTheme::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.dimensions, AndesTheme::andes().dimensions);
    }
}
