//! Browser host for the toggle.
//!
//! [`render`] describes the element tree for a toggle without touching the
//! DOM, so it runs on every target. [`ToggleHost`] decides what click and key
//! input does. On `wasm32`, [`mount`] builds the tree in a page and wires its
//! listeners through a host.

#[cfg(target_arch = "wasm32")]
mod element;
mod host;

pub use host::{KeyOutcome, ToggleHost};

#[cfg(target_arch = "wasm32")]
pub use element::{mount, MountedToggle};

use neumorph_core::Key;
use neumorph_widgets::NeumorphicToggle;

/// Text shown on the track's left side.
pub const LABEL_LEFT: &str = "DARK MODE";
/// Text shown on the track's right side.
pub const LABEL_RIGHT: &str = "LIGHT MODE";

/// Handle icon: moon while on, sun while off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Dark appearance
    Moon,
    /// Light appearance
    Sun,
}

impl Icon {
    /// Icon for the given state.
    #[must_use]
    pub const fn for_state(on: bool) -> Self {
        if on {
            Self::Moon
        } else {
            Self::Sun
        }
    }

    /// Value of the icon element's `data-icon` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::Sun => "sun",
        }
    }
}

/// One element in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    /// Tag name
    pub tag: &'static str,
    /// Attributes in document order
    pub attributes: Vec<(&'static str, String)>,
    /// Text content
    pub text: Option<&'static str>,
    /// Child elements
    pub children: Vec<DomNode>,
}

impl DomNode {
    fn new(tag: &'static str, class: &str) -> Self {
        Self {
            tag,
            attributes: vec![("class", class.to_string())],
            text: None,
            children: Vec::new(),
        }
    }

    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    fn text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant (or self) carrying `class` in its class list.
    #[must_use]
    pub fn find_class(&self, class: &str) -> Option<&Self> {
        let matches = self
            .attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class));
        if matches {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_class(class))
    }
}

/// Describe the element tree for a toggle.
///
/// The root carries the switch semantics: `role`, `aria-checked`,
/// `aria-label` and `tabindex`, plus the class list and inline sizing style.
#[must_use]
pub fn render(toggle: &NeumorphicToggle) -> DomNode {
    let on = toggle.is_on();
    let mut root = DomNode::new("div", &toggle.class_names())
        .attr("style", toggle.style_attribute())
        .attr("role", "switch")
        .attr("aria-checked", on.to_string())
        .attr("aria-label", toggle.get_label())
        .attr("tabindex", toggle.tab_index().to_string());
    if let Some(id) = neumorph_core::Widget::test_id(toggle) {
        root = root.attr("data-testid", id);
    }

    let handle = DomNode::new("div", "toggle-handle")
        .child(DomNode::new("div", "toggle-icon").attr("data-icon", Icon::for_state(on).name()));
    let labels = DomNode::new("div", "toggle-labels")
        .child(DomNode::new("span", "label-left").text(LABEL_LEFT))
        .child(DomNode::new("span", "label-right").text(LABEL_RIGHT));
    let track = DomNode::new("div", "toggle-track").child(handle).child(labels);

    root.child(DomNode::new("div", "toggle-track-container").child(track))
}

/// Map a DOM `KeyboardEvent.key` value to a key the toggle understands.
///
/// Only the activation keys are mapped; everything else is left to the page.
#[must_use]
pub fn key_from_dom(key: &str) -> Option<Key> {
    match key {
        " " | "Spacebar" => Some(Key::Space),
        "Enter" => Some(Key::Enter),
        _ => None,
    }
}
