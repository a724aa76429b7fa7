//! Neumorph: a neumorphic on/off switch.
//!
//! The control resolves a size input into a family of dimensions, keeps its
//! value either itself or under caller control, and turns clicks, taps, Space
//! and Enter into toggle requests. It paints through the [`Canvas`] trait and
//! can be mounted into a browser page on `wasm32`.
//!
//! # Example
//!
//! ```
//! use neumorph::widgets::{NeumorphicToggle, SizePreset};
//!
//! let mut toggle = NeumorphicToggle::new().size(SizePreset::Small);
//! assert_eq!(toggle.request_toggle(), Some(true));
//! assert!(toggle.is_on());
//! ```

#![allow(clippy::module_name_repetitions, clippy::missing_const_for_fn)]

pub use neumorph_core::*;
pub use neumorph_widgets as widgets;

pub mod browser;

/// Commonly used items.
pub mod prelude {
    pub use neumorph_core::{Canvas, Event, Key, Widget};
    pub use neumorph_widgets::{
        NeumorphicToggle, OwnershipMode, SizePreset, ToggleChanged, ToggleProps, ToggleSize,
    };
}
