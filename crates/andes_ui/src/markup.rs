//! Markup inflation
//!
//! Reads layout markup and builds the Andes widgets it declares. Attribute
//! namespace prefixes (`app:`, `android:`) are dropped, and widget tags may
//! be written short (`AndesButton`) or fully qualified
//! (`com.example.andesui.button.AndesButton`). Any other element is skipped.
//!
//! ```rust
//! use std::sync::Arc;
//! use andes_theme::AndesTheme;
//! use andes_ui::markup;
//!
//! let xml = r#"
//!     <LinearLayout xmlns:app="http://schemas.android.com/apk/res-auto">
//!         <AndesButton app:andesButtonSize="medium" app:andesButtonText="Pay" />
//!     </LinearLayout>
//! "#;
//!
//! let views = markup::inflate(xml, Arc::new(AndesTheme::andes())).unwrap();
//! assert_eq!(views.len(), 1);
//! ```

use std::sync::Arc;

use andes_theme::AndesTheme;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, trace};

use crate::attrs::AttributeSet;
use crate::components::button::AndesButton;
use crate::components::message::AndesMessage;
use crate::error::{AndesError, Result};
use crate::view::ViewNode;

/// Tag of the button widget
pub const BUTTON_TAG: &str = "AndesButton";

/// Tag of the message widget
pub const MESSAGE_TAG: &str = "AndesMessage";

const ID_ATTR: &str = "id";

/// One element of a markup document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupElement {
    /// Tag as written, possibly fully qualified
    pub tag: String,
    pub attrs: AttributeSet,
}

impl MarkupElement {
    /// Tag without its package qualifier
    pub fn short_name(&self) -> &str {
        self.tag.rsplit('.').next().unwrap_or(&self.tag)
    }

    /// Identifier from an `id` attribute, with `@+id/` / `@id/` stripped
    pub fn id(&self) -> Option<&str> {
        let raw = self.attrs.get(ID_ATTR)?;
        Some(
            raw.strip_prefix("@+id/")
                .or_else(|| raw.strip_prefix("@id/"))
                .unwrap_or(raw),
        )
    }
}

/// A widget built from markup
#[derive(Clone, Debug)]
pub enum Widget {
    Button(AndesButton),
    Message(AndesMessage),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Button(_) => BUTTON_TAG,
            Widget::Message(_) => MESSAGE_TAG,
        }
    }

    pub fn snapshot(&self) -> ViewNode {
        match self {
            Widget::Button(button) => button.snapshot(),
            Widget::Message(message) => message.snapshot(),
        }
    }

    pub fn as_button(&self) -> Option<&AndesButton> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&AndesMessage> {
        match self {
            Widget::Message(message) => Some(message),
            _ => None,
        }
    }
}

/// An inflated widget with the markup id it was declared under
#[derive(Clone, Debug)]
pub struct InflatedView {
    pub id: Option<String>,
    pub widget: Widget,
}

/// Parse every element of `xml`, in document order
pub fn parse(xml: &str) -> Result<Vec<MarkupElement>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut elements = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                elements.push(read_element(e)?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(AndesError::Markup(format!(
                    "at byte {}: {err}",
                    reader.buffer_position()
                )));
            }
        }
    }
    Ok(elements)
}

fn read_element(e: &BytesStart<'_>) -> Result<MarkupElement> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut attrs = AttributeSet::new();

    for attr in e.attributes() {
        let attr = attr.map_err(|err| AndesError::Markup(format!("<{tag}>: {err}")))?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| AndesError::Markup(format!("<{tag}> {name}: {err}")))?;
        attrs.insert(name, value.into_owned());
    }

    Ok(MarkupElement { tag, attrs })
}

/// Build every Andes widget declared in `xml`
///
/// Fails on malformed markup or when a widget's attributes are invalid
/// (a message without body).
pub fn inflate(xml: &str, theme: Arc<AndesTheme>) -> Result<Vec<InflatedView>> {
    let mut views = Vec::new();
    for element in parse(xml)? {
        let widget = match element.short_name() {
            BUTTON_TAG => Widget::Button(AndesButton::from_attrs_with_theme(
                Arc::clone(&theme),
                &element.attrs,
            )),
            MESSAGE_TAG => Widget::Message(AndesMessage::from_attrs_with_theme(
                Arc::clone(&theme),
                &element.attrs,
            )?),
            other => {
                trace!(tag = other, "skipping element");
                continue;
            }
        };
        debug!(kind = widget.kind(), id = ?element.id(), "inflated widget");
        views.push(InflatedView {
            id: element.id().map(str::to_string),
            widget,
        });
    }
    Ok(views)
}
