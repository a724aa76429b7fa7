//! Test harness for Neumorph widgets.
//!
//! Drives a widget with synthetic input, collects the messages it emits and
//! records what it paints. No window or GPU needed.

use neumorph_core::{
    AccessibleRole, Constraints, Event, Key, MouseButton, Rect, RecordingCanvas, Size, Widget,
};
use std::any::Any;
use std::collections::VecDeque;

/// Test harness for interacting with a Neumorph widget.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the root, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("pending_events", &self.event_queue.len())
            .field("messages", &self.messages.len())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Harness {
    /// Create a new harness and lay the root out at the viewport origin.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Measure the root within the viewport and place it at the origin.
    pub fn relayout(&mut self) {
        let constraints = Constraints::loose(Size::new(self.viewport.width, self.viewport.height));
        let size = self.root.measure(constraints);
        self.root
            .layout(Rect::new(self.viewport.x, self.viewport.y, size.width, size.height));
    }

    // === Event Simulation ===

    /// Simulate a left click at the center of the root.
    pub fn click(&mut self) -> &mut Self {
        let center = self.root.bounds().center();
        self.event_queue
            .push_back(Event::MouseMove { position: center });
        self.event_queue.push_back(Event::MouseDown {
            position: center,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position: center,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Simulate a tap at the center of the root.
    pub fn tap(&mut self) -> &mut Self {
        let position = self.root.bounds().center();
        self.event_queue.push_back(Event::Tap { position });
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Give the root keyboard focus, if it accepts it.
    pub fn focus(&mut self) -> &mut Self {
        if self.root.is_focusable() {
            self.event_queue.push_back(Event::FocusIn);
            self.process_events();
        }
        self
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::FocusOut);
        self.process_events();
        self
    }

    /// Send an arbitrary event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Queries ===

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        &*self.root
    }

    /// Find a widget by test ID.
    #[must_use]
    pub fn query(&self, test_id: &str) -> Option<&dyn Widget> {
        find_widget(&*self.root, test_id)
    }

    /// Check if a widget with the test ID exists.
    #[must_use]
    pub fn exists(&self, test_id: &str) -> bool {
        self.query(test_id).is_some()
    }

    /// Number of messages collected so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Drain collected messages of type `T`, oldest first.
    ///
    /// Messages of other types stay queued.
    pub fn take_messages<T: Any + Send>(&mut self) -> Vec<T> {
        let (matching, rest): (Vec<_>, Vec<_>) =
            self.messages.drain(..).partition(|msg| msg.is::<T>());
        self.messages = rest;
        matching
            .into_iter()
            .filter_map(|msg| msg.downcast::<T>().ok().map(|boxed| *boxed))
            .collect()
    }

    /// Paint the root onto a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that a widget with the test ID exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, test_id: &str) -> &Self {
        assert!(
            self.exists(test_id),
            "Expected widget with test id '{test_id}' to exist"
        );
        self
    }

    /// Assert the root's accessible role.
    ///
    /// # Panics
    ///
    /// Panics if the role differs.
    pub fn assert_role(&self, expected: AccessibleRole) -> &Self {
        let actual = self.root.accessible_role();
        assert_eq!(actual, expected, "Expected role {expected:?} but got {actual:?}");
        self
    }

    /// Assert the root's accessible checked state.
    ///
    /// # Panics
    ///
    /// Panics if the checked state differs.
    pub fn assert_checked(&self, expected: bool) -> &Self {
        let actual = self.root.accessible_checked();
        assert_eq!(
            actual,
            Some(expected),
            "Expected checked state {expected} but got {actual:?}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, test_id: &str) -> Option<&'a dyn Widget> {
    if widget.test_id() == Some(test_id) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), test_id))
}
