//! Andes Core Primitives
//!
//! This crate provides the value types every Andes component resolves its
//! style into:
//!
//! - **Color**: RGBA color with hex parsing and ARGB blending
//! - **View State**: enabled / pressed / focused / hovered flags
//! - **State Lists**: ordered, first-match selection of a value per view state
//! - **Drawables**: image, shape, state-list and layered drawables
//! - **Typefaces**: font family and weight references
//!
//! # Example
//!
//! ```rust
//! use andes_core::{Color, ColorStateList, StateSelector, ViewState};
//!
//! let text = ColorStateList::new()
//!     .with(StateSelector::unless_enabled(), Color::from_hex(0x999999))
//!     .with(StateSelector::enabled(), Color::WHITE);
//!
//! assert_eq!(text.resolve(ViewState::ENABLED), Some(&Color::WHITE));
//! ```

pub mod color;
pub mod drawable;
pub mod state;
pub mod typeface;

pub use color::{Color, ColorParseError};
pub use drawable::{Drawable, ImageDrawable, Shape, ShapeDrawable};
pub use state::{ColorStateList, StateFlag, StateList, StateSelector, ViewState};
pub use typeface::{FontWeight, Typeface};
