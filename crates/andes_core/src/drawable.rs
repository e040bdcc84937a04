//! Drawable descriptions
//!
//! Drawables are plain data: a renderer (or a test) decides how to paint them.

use serde::Serialize;

use crate::color::Color;
use crate::state::{ColorStateList, StateList, ViewState};

/// Geometric shape of a [`ShapeDrawable`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Rectangle with the same radius on all eight corner radii
    RoundRect { radius: f32 },
    /// Circle of the given diameter
    Oval { diameter: f32 },
}

/// Filled shape
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeDrawable {
    pub shape: Shape,
    pub color: Color,
}

/// Image resource, optionally scaled and tinted
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageDrawable {
    /// Resource name, e.g. `andesui_icon_clip`
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<ColorStateList>,
}

/// Anything a view can paint as background, icon or image
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Drawable {
    Image(ImageDrawable),
    Shape(ShapeDrawable),
    StateList(StateList<Drawable>),
    /// Painted bottom to top
    Layers(Vec<Drawable>),
}

impl Drawable {
    /// Unscaled, untinted image resource
    pub fn resource(name: impl Into<String>) -> Self {
        Drawable::Image(ImageDrawable {
            source: name.into(),
            width: None,
            height: None,
            tint: None,
        })
    }

    pub fn round_rect(radius: f32, color: Color) -> Self {
        Drawable::Shape(ShapeDrawable {
            shape: Shape::RoundRect { radius },
            color,
        })
    }

    pub fn oval(diameter: f32, color: Color) -> Self {
        Drawable::Shape(ShapeDrawable {
            shape: Shape::Oval { diameter },
            color,
        })
    }

    /// Resize an image; other drawables are returned unchanged
    pub fn scaled(self, width: f32, height: f32) -> Self {
        match self {
            Drawable::Image(mut image) => {
                image.width = Some(width);
                image.height = Some(height);
                Drawable::Image(image)
            }
            other => other,
        }
    }

    /// Tint an image with a color list; other drawables are returned unchanged
    pub fn tinted(self, tint: ColorStateList) -> Self {
        match self {
            Drawable::Image(mut image) => {
                image.tint = Some(tint);
                Drawable::Image(image)
            }
            other => other,
        }
    }

    /// Tint an image with one color for every state
    pub fn tinted_with(self, color: Color) -> Self {
        self.tinted(ColorStateList::single(color))
    }

    /// Concrete drawable shown for `state`
    ///
    /// State lists are resolved recursively; a state list with no matching
    /// entry resolves to `None`.
    pub fn resolve(&self, state: ViewState) -> Option<&Drawable> {
        match self {
            Drawable::StateList(list) => list.resolve(state).and_then(|d| d.resolve(state)),
            other => Some(other),
        }
    }

    /// Fill color of the shape shown for `state`, if it is a shape
    pub fn fill_color(&self, state: ViewState) -> Option<Color> {
        match self.resolve(state)? {
            Drawable::Shape(shape) => Some(shape.color),
            _ => None,
        }
    }

    /// Image resource name, looking through layers
    pub fn source(&self) -> Option<&str> {
        match self {
            Drawable::Image(image) => Some(&image.source),
            Drawable::Layers(layers) => layers.iter().rev().find_map(|d| d.source()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateSelector;

    #[test]
    fn test_scale_and_tint_only_touch_images() {
        let icon = Drawable::resource("clip")
            .scaled(20.0, 20.0)
            .tinted_with(Color::WHITE);
        match &icon {
            Drawable::Image(image) => {
                assert_eq!(image.width, Some(20.0));
                assert_eq!(image.height, Some(20.0));
                assert_eq!(image.tint.as_ref().unwrap().default_color(), Color::WHITE);
            }
            other => panic!("expected image, got {other:?}"),
        }

        let shape = Drawable::oval(24.0, Color::BLACK).scaled(1.0, 1.0);
        assert_eq!(shape, Drawable::oval(24.0, Color::BLACK));
    }

    #[test]
    fn test_state_list_resolution() {
        let bg = Drawable::StateList(
            StateList::new()
                .with(StateSelector::pressed(), Drawable::round_rect(6.0, Color::BLACK))
                .with(StateSelector::enabled(), Drawable::round_rect(6.0, Color::WHITE)),
        );
        assert_eq!(bg.fill_color(ViewState::ENABLED), Some(Color::WHITE));
        assert_eq!(bg.fill_color(ViewState::ENABLED.pressed()), Some(Color::BLACK));
        assert_eq!(bg.fill_color(ViewState::DISABLED), None);
    }

    #[test]
    fn test_layer_source() {
        let layered = Drawable::Layers(vec![
            Drawable::oval(24.0, Color::BLACK),
            Drawable::resource("feedback_info"),
        ]);
        assert_eq!(layered.source(), Some("feedback_info"));
    }
}
