//! Markup attribute sets
//!
//! An [`AttributeSet`] is the flat `name -> value` map a markup element
//! carries. Lookups never fail: unrecognized values fall back to the
//! caller's default and log a warning.

use andes_core::Drawable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Prefix of drawable resource references
pub const DRAWABLE_PREFIX: &str = "@drawable/";

/// Reference meaning "no value"
pub const NULL_REFERENCE: &str = "@null";

/// A selector that can be read from a markup attribute value
pub trait AttrValue: Sized + Copy + Default + std::fmt::Debug {
    /// Parse a raw attribute value; `None` if unrecognized
    fn from_attr(raw: &str) -> Option<Self>;
}

/// Ordered attribute map of one markup element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attrs: IndexMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Owned string value
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// Boolean value; anything but `true` / `false` yields `default`
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            None => default,
            Some(raw) if raw.eq_ignore_ascii_case("true") => true,
            Some(raw) if raw.eq_ignore_ascii_case("false") => false,
            Some(raw) => {
                warn!(attribute = name, value = raw, default, "invalid boolean, using default");
                default
            }
        }
    }

    /// Drawable reference (`@drawable/name` or a bare resource name)
    pub fn get_drawable(&self, name: &str) -> Option<Drawable> {
        let raw = self.get(name)?.trim();
        if raw.is_empty() || raw == NULL_REFERENCE {
            return None;
        }
        let resource = raw.strip_prefix(DRAWABLE_PREFIX).unwrap_or(raw);
        Some(Drawable::resource(resource))
    }

    /// Selector value; missing or unrecognized values yield `T::default()`
    pub fn get_selector<T: AttrValue>(&self, name: &str) -> T {
        match self.get(name) {
            None => T::default(),
            Some(raw) => T::from_attr(raw.trim()).unwrap_or_else(|| {
                let fallback = T::default();
                warn!(attribute = name, value = raw, ?fallback, "unknown value, using default");
                fallback
            }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
