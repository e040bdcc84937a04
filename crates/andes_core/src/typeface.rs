//! Typeface references

use serde::{Deserialize, Serialize};

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// A font family at a given weight
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typeface {
    pub family: String,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Typeface {
    /// Family name of the platform default typeface
    pub const DEFAULT_FAMILY: &'static str = "sans-serif";

    pub fn new(family: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            weight,
        }
    }

    /// Platform default typeface
    pub fn system_default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, FontWeight::Regular)
    }

    pub fn is_system_default(&self) -> bool {
        *self == Self::system_default()
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Self::system_default()
    }
}
