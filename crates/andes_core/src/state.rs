//! View states and state lists
//!
//! A [`StateList`] is an ordered list of `(selector, value)` pairs. Resolving
//! it against a [`ViewState`] returns the value of the *first* entry whose
//! selector matches, so entry order matters: a `pressed` entry placed before
//! an `enabled` entry wins while the view is both pressed and enabled.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Interaction flags of a view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub enabled: bool,
    pub pressed: bool,
    pub focused: bool,
    pub hovered: bool,
}

impl ViewState {
    /// Enabled and idle
    pub const ENABLED: ViewState = ViewState {
        enabled: true,
        pressed: false,
        focused: false,
        hovered: false,
    };

    /// Disabled and idle
    pub const DISABLED: ViewState = ViewState {
        enabled: false,
        pressed: false,
        focused: false,
        hovered: false,
    };

    pub fn pressed(mut self) -> Self {
        self.pressed = true;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn hovered(mut self) -> Self {
        self.hovered = true;
        self
    }

    fn has(&self, flag: StateFlag) -> bool {
        match flag {
            StateFlag::Enabled => self.enabled,
            StateFlag::Pressed => self.pressed,
            StateFlag::Focused => self.focused,
            StateFlag::Hovered => self.hovered,
        }
    }
}

/// A single view state flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateFlag {
    Enabled,
    Pressed,
    Focused,
    Hovered,
}

/// Condition on a [`ViewState`]: all `required` flags set, all `forbidden` unset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSelector {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<StateFlag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden: Vec<StateFlag>,
}

impl StateSelector {
    /// Matches every state
    pub fn any() -> Self {
        Self::default()
    }

    /// Matches when `flag` is set
    pub fn when(flag: StateFlag) -> Self {
        Self {
            required: vec![flag],
            forbidden: Vec::new(),
        }
    }

    /// Matches when `flag` is not set
    pub fn unless(flag: StateFlag) -> Self {
        Self {
            required: Vec::new(),
            forbidden: vec![flag],
        }
    }

    pub fn enabled() -> Self {
        Self::when(StateFlag::Enabled)
    }

    pub fn unless_enabled() -> Self {
        Self::unless(StateFlag::Enabled)
    }

    pub fn pressed() -> Self {
        Self::when(StateFlag::Pressed)
    }

    pub fn focused() -> Self {
        Self::when(StateFlag::Focused)
    }

    pub fn hovered() -> Self {
        Self::when(StateFlag::Hovered)
    }

    pub fn matches(&self, state: ViewState) -> bool {
        self.required.iter().all(|f| state.has(*f))
            && self.forbidden.iter().all(|f| !state.has(*f))
    }
}

/// Ordered, first-match list of values keyed by view state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateList<T> {
    entries: Vec<(StateSelector, T)>,
}

/// State list of colors
pub type ColorStateList = StateList<Color>;

impl<T> StateList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A list holding one value for every state
    pub fn single(value: T) -> Self {
        Self::new().with(StateSelector::any(), value)
    }

    /// Append an entry (builder style)
    pub fn with(mut self, selector: StateSelector, value: T) -> Self {
        self.push(selector, value);
        self
    }

    pub fn push(&mut self, selector: StateSelector, value: T) {
        self.entries.push((selector, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry matching `state`
    pub fn resolve(&self, state: ViewState) -> Option<&T> {
        self.entries
            .iter()
            .find(|(selector, _)| selector.matches(state))
            .map(|(_, value)| value)
    }

    /// Apply `f` to every value, keeping selectors and order
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> StateList<U> {
        StateList {
            entries: self
                .entries
                .iter()
                .map(|(selector, value)| (selector.clone(), f(value)))
                .collect(),
        }
    }
}

impl<T> Default for StateList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStateList {
    /// Color for the enabled idle state, falling back to transparent
    pub fn default_color(&self) -> Color {
        self.resolve(ViewState::ENABLED)
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_like() -> StateList<&'static str> {
        StateList::new()
            .with(StateSelector::pressed(), "pressed")
            .with(StateSelector::enabled(), "enabled")
            .with(StateSelector::unless_enabled(), "disabled")
            .with(StateSelector::hovered(), "hovered")
    }

    #[test]
    fn test_first_match_wins() {
        let list = button_like();
        assert_eq!(list.resolve(ViewState::ENABLED), Some(&"enabled"));
        assert_eq!(list.resolve(ViewState::ENABLED.pressed()), Some(&"pressed"));
        assert_eq!(list.resolve(ViewState::DISABLED), Some(&"disabled"));
        // Hovered never wins over enabled because enabled comes first
        assert_eq!(list.resolve(ViewState::ENABLED.hovered()), Some(&"enabled"));
    }

    #[test]
    fn test_empty_list_resolves_nothing() {
        let list: StateList<u8> = StateList::new();
        assert!(list.is_empty());
        assert_eq!(list.resolve(ViewState::ENABLED), None);
        assert_eq!(ColorStateList::new().default_color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_map_keeps_order() {
        let lengths = button_like().map(|s| s.len());
        assert_eq!(lengths.len(), 4);
        assert_eq!(lengths.resolve(ViewState::DISABLED), Some(&"disabled".len()));
    }
}
