//! The retained widget interface.
//!
//! A host drives every widget through the same cycle: `measure` against
//! [`Constraints`], `layout` into a [`Rect`], `paint` onto a [`Canvas`], and
//! `event` for input. An event may yield a boxed message for the host.
//!
//! ```
//! use neumorph_core::TypeId;
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identity of a concrete widget type, for tree inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Identity of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size the widget settled on
    pub size: Size,
}

/// A UI element.
pub trait Widget: Send + Sync {
    /// Concrete type identity.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept final bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to input, optionally producing a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Direct children.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Whether input currently does anything.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget belongs in the keyboard focus order.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Name announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Checked state for checkable roles such as [`AccessibleRole::Switch`].
    fn accessible_checked(&self) -> Option<bool> {
        None
    }

    /// Stable handle for tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing backend.
///
/// Only the shapes neumorphic controls need: pills and circles.
pub trait Canvas {
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Outline a rectangle with rounded corners.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// What a widget is, for assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No particular semantics
    #[default]
    Generic,
    /// Push button
    Button,
    /// On/off switch
    Switch,
}
