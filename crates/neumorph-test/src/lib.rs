//! Headless testing tools for Neumorph widgets.
//!
//! ```
//! use neumorph_test::Harness;
//! # use neumorph_core::{widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, Widget};
//! # struct Blank;
//! # impl Widget for Blank {
//! #     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//! #     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(10.0, 10.0)) }
//! #     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//! #     fn paint(&self, _: &mut dyn Canvas) {}
//! #     fn event(&mut self, _: &Event) -> Option<Box<dyn std::any::Any + Send>> { None }
//! #     fn children(&self) -> &[Box<dyn Widget>] { &[] }
//! # }
//! let mut harness = Harness::new(Blank);
//! harness.click();
//! assert_eq!(harness.message_count(), 0);
//! ```

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::manual_assert)]

mod harness;

pub use harness::Harness;
