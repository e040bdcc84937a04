//! Headless view model
//!
//! Components apply their configuration to these plain views. Nothing here
//! paints; a renderer or a test reads the resulting properties, or takes a
//! [`ViewNode`] snapshot of the whole tree.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use andes_core::{Color, ColorStateList, Drawable, Typeface, ViewState};
use serde::Serialize;

static NEXT_VIEW_ID: AtomicU32 = AtomicU32::new(1);

/// Unique view identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewId(u32);

impl ViewId {
    /// Allocate a fresh identifier
    pub fn generate() -> Self {
        ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// A click delivered to a component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    /// The view that was clicked
    pub view_id: ViewId,
}

/// Shared click callback
pub type ClickHandler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// Whether a view takes part in layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    Gone,
}

impl Visibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Gone
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Horizontal chain margins of a view
///
/// `start` / `end` apply while the neighbor on that side is visible; the
/// `gone_*` variants apply once it is gone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainMargins {
    pub start: f32,
    pub end: f32,
    pub gone_start: f32,
    pub gone_end: f32,
}

impl ChainMargins {
    pub fn effective_start(&self, neighbor: Visibility) -> f32 {
        if neighbor.is_visible() {
            self.start
        } else {
            self.gone_start
        }
    }

    pub fn effective_end(&self, neighbor: Visibility) -> f32 {
        if neighbor.is_visible() {
            self.end
        } else {
            self.gone_end
        }
    }
}

/// Inner padding of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn horizontal(amount: f32) -> Self {
        Self {
            left: amount,
            right: amount,
            ..Self::default()
        }
    }
}

/// Truncation of text that does not fit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ellipsize {
    End,
}

/// A run of styled text
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextView {
    pub text: String,
    pub text_size: f32,
    pub text_color: ColorStateList,
    pub typeface: Typeface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipsize: Option<Ellipsize>,
    pub all_caps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    pub enabled: bool,
    pub visibility: Visibility,
    pub margins: ChainMargins,
}

impl TextView {
    /// Color shown in the view's current enabled state
    pub fn current_color(&self) -> Color {
        let state = if self.enabled {
            ViewState::ENABLED
        } else {
            ViewState::DISABLED
        };
        self.text_color
            .resolve(state)
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = ColorStateList::single(color);
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: 14.0,
            text_color: ColorStateList::single(Color::BLACK),
            typeface: Typeface::system_default(),
            max_lines: None,
            ellipsize: None,
            all_caps: true,
            line_height: None,
            enabled: true,
            visibility: Visibility::Visible,
            margins: ChainMargins::default(),
        }
    }
}

/// An image slot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawable: Option<Drawable>,
    pub enabled: bool,
    pub visibility: Visibility,
}

impl ImageView {
    /// Show `drawable`, or hide the view when there is none
    pub fn set_drawable(&mut self, drawable: Option<Drawable>) {
        self.visibility = Visibility::from_visible(drawable.is_some());
        self.drawable = drawable;
    }
}

impl Default for ImageView {
    fn default() -> Self {
        Self {
            drawable: None,
            enabled: true,
            visibility: Visibility::Visible,
        }
    }
}

/// A box holding other views
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Drawable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    pub padding: Padding,
    pub clickable: bool,
    pub focusable: bool,
    pub enabled: bool,
    pub visibility: Visibility,
}

impl Container {
    /// Fill the whole container with one color
    pub fn set_background_color(&mut self, color: Color) {
        self.background = Some(Drawable::round_rect(0.0, color));
    }

    /// Pin the height to exactly `height`
    pub fn set_fixed_height(&mut self, height: f32) {
        self.min_height = Some(height);
        self.max_height = Some(height);
    }

    /// Fill color of the background in the container's current state
    pub fn background_color(&self) -> Option<Color> {
        let state = if self.enabled {
            ViewState::ENABLED
        } else {
            ViewState::DISABLED
        };
        self.background.as_ref()?.fill_color(state)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self {
            background: None,
            min_height: None,
            max_height: None,
            padding: Padding::default(),
            clickable: false,
            focusable: false,
            enabled: true,
            visibility: Visibility::Visible,
        }
    }
}

/// Serializable snapshot of a view tree
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewNode {
    Container {
        name: String,
        #[serde(flatten)]
        props: Container,
        children: Vec<ViewNode>,
    },
    Text {
        name: String,
        #[serde(flatten)]
        props: TextView,
    },
    Image {
        name: String,
        #[serde(flatten)]
        props: ImageView,
    },
}

impl ViewNode {
    pub fn container(name: impl Into<String>, props: &Container, children: Vec<ViewNode>) -> Self {
        ViewNode::Container {
            name: name.into(),
            props: props.clone(),
            children,
        }
    }

    pub fn text(name: impl Into<String>, props: &TextView) -> Self {
        ViewNode::Text {
            name: name.into(),
            props: props.clone(),
        }
    }

    pub fn image(name: impl Into<String>, props: &ImageView) -> Self {
        ViewNode::Image {
            name: name.into(),
            props: props.clone(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ViewNode::Container { name, .. }
            | ViewNode::Text { name, .. }
            | ViewNode::Image { name, .. } => name,
        }
    }

    /// Depth-first search by name
    pub fn find(&self, name: &str) -> Option<&ViewNode> {
        if self.name() == name {
            return Some(self);
        }
        match self {
            ViewNode::Container { children, .. } => children.iter().find_map(|c| c.find(name)),
            _ => None,
        }
    }
}
