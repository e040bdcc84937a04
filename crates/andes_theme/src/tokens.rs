//! Design tokens
//!
//! Every struct here deserializes with `#[serde(default)]`, so a theme file
//! only lists the tokens it overrides.

use andes_core::{Color, FontWeight, Typeface};
use serde::{Deserialize, Serialize};

// ============================================================================
// Colors
// ============================================================================

/// Named color slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    // Loud button
    ButtonLoudBg,
    ButtonLoudBgPressed,
    ButtonLoudBgFocused,
    ButtonLoudBgHovered,
    ButtonLoudBgDisabled,
    ButtonLoudBgOther,
    ButtonLoudText,
    ButtonLoudTextDisabled,
    // Quiet button
    ButtonQuietBg,
    ButtonQuietBgPressed,
    ButtonQuietBgFocused,
    ButtonQuietBgHovered,
    ButtonQuietBgDisabled,
    ButtonQuietBgOther,
    ButtonQuietText,
    ButtonQuietTextDisabled,
    // Transparent button
    ButtonTransparentBg,
    ButtonTransparentBgPressed,
    ButtonTransparentBgFocused,
    ButtonTransparentBgHovered,
    ButtonTransparentBgDisabled,
    ButtonTransparentText,
    ButtonTransparentTextDisabled,
    // Message
    MessageQuietBg,
    MessageLoudText,
    MessageQuietText,
    MessageLoudDismissable,
    MessageQuietDismissable,
    MessageNeutralPrimary,
    MessageNeutralPrimaryDark,
    MessageSuccessPrimary,
    MessageSuccessPrimaryDark,
    MessageWarningPrimary,
    MessageWarningPrimaryDark,
    MessageErrorPrimary,
    MessageErrorPrimaryDark,
    // Base
    White,
    TransparentIdle,
}

/// Color token values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    pub button_loud_bg: Color,
    pub button_loud_bg_pressed: Color,
    pub button_loud_bg_focused: Color,
    pub button_loud_bg_hovered: Color,
    pub button_loud_bg_disabled: Color,
    pub button_loud_bg_other: Color,
    pub button_loud_text: Color,
    pub button_loud_text_disabled: Color,

    pub button_quiet_bg: Color,
    pub button_quiet_bg_pressed: Color,
    pub button_quiet_bg_focused: Color,
    pub button_quiet_bg_hovered: Color,
    pub button_quiet_bg_disabled: Color,
    pub button_quiet_bg_other: Color,
    pub button_quiet_text: Color,
    pub button_quiet_text_disabled: Color,

    pub button_transparent_bg: Color,
    pub button_transparent_bg_pressed: Color,
    pub button_transparent_bg_focused: Color,
    pub button_transparent_bg_hovered: Color,
    pub button_transparent_bg_disabled: Color,
    pub button_transparent_text: Color,
    pub button_transparent_text_disabled: Color,

    pub message_quiet_bg: Color,
    pub message_loud_text: Color,
    pub message_quiet_text: Color,
    pub message_loud_dismissable: Color,
    pub message_quiet_dismissable: Color,
    pub message_neutral_primary: Color,
    pub message_neutral_primary_dark: Color,
    pub message_success_primary: Color,
    pub message_success_primary_dark: Color,
    pub message_warning_primary: Color,
    pub message_warning_primary_dark: Color,
    pub message_error_primary: Color,
    pub message_error_primary_dark: Color,

    pub white: Color,
    pub transparent_idle: Color,
}

impl ColorTokens {
    /// Andes light palette
    pub fn andes() -> Self {
        let accent = Color::from_hex(0x3483FA);
        let accent_dark = Color::from_hex(0x2968C8);
        let accent_soft = Color::from_hex(0x4189E6);
        let disabled_bg = Color::BLACK.with_alpha(0.1);
        let disabled_text = Color::BLACK.with_alpha(0.25);

        Self {
            button_loud_bg: accent,
            button_loud_bg_pressed: Color::from_hex(0x1F4E96),
            button_loud_bg_focused: accent_dark,
            button_loud_bg_hovered: accent_dark,
            button_loud_bg_disabled: disabled_bg,
            button_loud_bg_other: accent_dark,
            button_loud_text: Color::WHITE,
            button_loud_text_disabled: disabled_text,

            button_quiet_bg: accent_soft.with_alpha(0.1),
            button_quiet_bg_pressed: accent_soft.with_alpha(0.25),
            button_quiet_bg_focused: accent_soft.with_alpha(0.2),
            button_quiet_bg_hovered: accent_soft.with_alpha(0.2),
            button_quiet_bg_disabled: disabled_bg,
            button_quiet_bg_other: accent_soft.with_alpha(0.2),
            button_quiet_text: accent,
            button_quiet_text_disabled: disabled_text,

            button_transparent_bg: Color::TRANSPARENT,
            button_transparent_bg_pressed: accent_soft.with_alpha(0.25),
            button_transparent_bg_focused: accent_soft.with_alpha(0.2),
            button_transparent_bg_hovered: accent_soft.with_alpha(0.15),
            button_transparent_bg_disabled: Color::TRANSPARENT,
            button_transparent_text: accent,
            button_transparent_text_disabled: disabled_text,

            message_quiet_bg: Color::from_hex(0xF5F5F5),
            message_loud_text: Color::WHITE,
            message_quiet_text: Color::BLACK.with_alpha(0.9),
            message_loud_dismissable: Color::WHITE,
            message_quiet_dismissable: Color::BLACK.with_alpha(0.45),
            message_neutral_primary: accent,
            message_neutral_primary_dark: accent_dark,
            message_success_primary: Color::from_hex(0x00A650),
            message_success_primary_dark: Color::from_hex(0x008C44),
            message_warning_primary: Color::from_hex(0xFF7733),
            message_warning_primary_dark: Color::from_hex(0xE0601F),
            message_error_primary: Color::from_hex(0xF23D4F),
            message_error_primary_dark: Color::from_hex(0xCC1F30),

            white: Color::WHITE,
            transparent_idle: Color::TRANSPARENT,
        }
    }

    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::ButtonLoudBg => self.button_loud_bg,
            ColorToken::ButtonLoudBgPressed => self.button_loud_bg_pressed,
            ColorToken::ButtonLoudBgFocused => self.button_loud_bg_focused,
            ColorToken::ButtonLoudBgHovered => self.button_loud_bg_hovered,
            ColorToken::ButtonLoudBgDisabled => self.button_loud_bg_disabled,
            ColorToken::ButtonLoudBgOther => self.button_loud_bg_other,
            ColorToken::ButtonLoudText => self.button_loud_text,
            ColorToken::ButtonLoudTextDisabled => self.button_loud_text_disabled,
            ColorToken::ButtonQuietBg => self.button_quiet_bg,
            ColorToken::ButtonQuietBgPressed => self.button_quiet_bg_pressed,
            ColorToken::ButtonQuietBgFocused => self.button_quiet_bg_focused,
            ColorToken::ButtonQuietBgHovered => self.button_quiet_bg_hovered,
            ColorToken::ButtonQuietBgDisabled => self.button_quiet_bg_disabled,
            ColorToken::ButtonQuietBgOther => self.button_quiet_bg_other,
            ColorToken::ButtonQuietText => self.button_quiet_text,
            ColorToken::ButtonQuietTextDisabled => self.button_quiet_text_disabled,
            ColorToken::ButtonTransparentBg => self.button_transparent_bg,
            ColorToken::ButtonTransparentBgPressed => self.button_transparent_bg_pressed,
            ColorToken::ButtonTransparentBgFocused => self.button_transparent_bg_focused,
            ColorToken::ButtonTransparentBgHovered => self.button_transparent_bg_hovered,
            ColorToken::ButtonTransparentBgDisabled => self.button_transparent_bg_disabled,
            ColorToken::ButtonTransparentText => self.button_transparent_text,
            ColorToken::ButtonTransparentTextDisabled => self.button_transparent_text_disabled,
            ColorToken::MessageQuietBg => self.message_quiet_bg,
            ColorToken::MessageLoudText => self.message_loud_text,
            ColorToken::MessageQuietText => self.message_quiet_text,
            ColorToken::MessageLoudDismissable => self.message_loud_dismissable,
            ColorToken::MessageQuietDismissable => self.message_quiet_dismissable,
            ColorToken::MessageNeutralPrimary => self.message_neutral_primary,
            ColorToken::MessageNeutralPrimaryDark => self.message_neutral_primary_dark,
            ColorToken::MessageSuccessPrimary => self.message_success_primary,
            ColorToken::MessageSuccessPrimaryDark => self.message_success_primary_dark,
            ColorToken::MessageWarningPrimary => self.message_warning_primary,
            ColorToken::MessageWarningPrimaryDark => self.message_warning_primary_dark,
            ColorToken::MessageErrorPrimary => self.message_error_primary,
            ColorToken::MessageErrorPrimaryDark => self.message_error_primary_dark,
            ColorToken::White => self.white,
            ColorToken::TransparentIdle => self.transparent_idle,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::andes()
    }
}

// ============================================================================
// Dimensions
// ============================================================================

/// Dimensions of one button size, in px
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonSizeDimens {
    pub text_size: f32,
    pub height: f32,
    /// Margin between the text and the button edge when there is no icon
    pub text_margin: f32,
    pub lateral_padding: f32,
    pub corner_radius: f32,
}

/// Button dimensions
///
/// A theme file may set any subset of fields, per size too; the rest keep
/// the Andes values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ButtonDimensOverride")]
pub struct ButtonDimens {
    pub large: ButtonSizeDimens,
    pub medium: ButtonSizeDimens,
    pub small: ButtonSizeDimens,
    /// Gap between a left icon and the text
    pub left_icon_right_margin: f32,
    /// Gap between the text and a right icon
    pub right_icon_left_margin: f32,
    pub icon_width: f32,
    pub icon_height: f32,
}

impl Default for ButtonDimens {
    fn default() -> Self {
        Self {
            large: ButtonSizeDimens {
                text_size: 16.0,
                height: 48.0,
                text_margin: 8.0,
                lateral_padding: 16.0,
                corner_radius: 6.0,
            },
            medium: ButtonSizeDimens {
                text_size: 14.0,
                height: 32.0,
                text_margin: 0.0,
                lateral_padding: 12.0,
                corner_radius: 5.0,
            },
            small: ButtonSizeDimens {
                text_size: 12.0,
                height: 24.0,
                text_margin: 0.0,
                lateral_padding: 8.0,
                corner_radius: 4.0,
            },
            left_icon_right_margin: 12.0,
            right_icon_left_margin: 12.0,
            icon_width: 20.0,
            icon_height: 20.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonSizeOverride {
    text_size: Option<f32>,
    height: Option<f32>,
    text_margin: Option<f32>,
    lateral_padding: Option<f32>,
    corner_radius: Option<f32>,
}

impl ButtonSizeOverride {
    fn apply(self, base: ButtonSizeDimens) -> ButtonSizeDimens {
        ButtonSizeDimens {
            text_size: self.text_size.unwrap_or(base.text_size),
            height: self.height.unwrap_or(base.height),
            text_margin: self.text_margin.unwrap_or(base.text_margin),
            lateral_padding: self.lateral_padding.unwrap_or(base.lateral_padding),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonDimensOverride {
    large: ButtonSizeOverride,
    medium: ButtonSizeOverride,
    small: ButtonSizeOverride,
    left_icon_right_margin: Option<f32>,
    right_icon_left_margin: Option<f32>,
    icon_width: Option<f32>,
    icon_height: Option<f32>,
}

impl From<ButtonDimensOverride> for ButtonDimens {
    fn from(over: ButtonDimensOverride) -> Self {
        let base = ButtonDimens::default();
        Self {
            large: over.large.apply(base.large),
            medium: over.medium.apply(base.medium),
            small: over.small.apply(base.small),
            left_icon_right_margin: over
                .left_icon_right_margin
                .unwrap_or(base.left_icon_right_margin),
            right_icon_left_margin: over
                .right_icon_left_margin
                .unwrap_or(base.right_icon_left_margin),
            icon_width: over.icon_width.unwrap_or(base.icon_width),
            icon_height: over.icon_height.unwrap_or(base.icon_height),
        }
    }
}

/// Message dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDimens {
    pub title_size: f32,
    pub body_size: f32,
    pub line_height: f32,
    pub icon_diameter: f32,
    pub corner_radius: f32,
}

impl Default for MessageDimens {
    fn default() -> Self {
        Self {
            title_size: 14.0,
            body_size: 14.0,
            line_height: 18.0,
            icon_diameter: 24.0,
            corner_radius: 6.0,
        }
    }
}

/// All dimension tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionTokens {
    pub button: ButtonDimens,
    pub message: MessageDimens,
}

// ============================================================================
// Typography
// ============================================================================

/// Named typeface slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontToken {
    Regular,
    Semibold,
}

/// Typeface slots
///
/// A slot that is `None`, or names an empty family, is unavailable and
/// resolves to the platform default typeface. Theme files override a slot
/// field by field over the Andes typeface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "TypographyOverride")]
pub struct TypographyTokens {
    pub regular: Option<Typeface>,
    pub semibold: Option<Typeface>,
}

impl TypographyTokens {
    pub const ANDES_FAMILY: &'static str = "Proxima Nova";

    pub fn get(&self, token: FontToken) -> Option<&Typeface> {
        let slot = match token {
            FontToken::Regular => self.regular.as_ref(),
            FontToken::Semibold => self.semibold.as_ref(),
        };
        slot.filter(|typeface| !typeface.family.is_empty())
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            regular: Some(Typeface::new(Self::ANDES_FAMILY, FontWeight::Regular)),
            semibold: Some(Typeface::new(Self::ANDES_FAMILY, FontWeight::Semibold)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypefaceOverride {
    family: Option<String>,
    weight: Option<FontWeight>,
}

impl TypefaceOverride {
    fn apply(self, base: Option<Typeface>) -> Option<Typeface> {
        let base = base.unwrap_or_else(Typeface::system_default);
        Some(Typeface {
            family: self.family.unwrap_or(base.family),
            weight: self.weight.unwrap_or(base.weight),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypographyOverride {
    regular: Option<TypefaceOverride>,
    semibold: Option<TypefaceOverride>,
}

impl From<TypographyOverride> for TypographyTokens {
    fn from(over: TypographyOverride) -> Self {
        let base = TypographyTokens::default();
        Self {
            regular: match over.regular {
                Some(slot) => slot.apply(base.regular),
                None => base.regular,
            },
            semibold: match over.semibold {
                Some(slot) => slot.apply(base.semibold),
                None => base.semibold,
            },
        }
    }
}
