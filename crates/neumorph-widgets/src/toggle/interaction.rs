//! Normalizes raw input into toggle requests.

use neumorph_core::{Event, Key, MouseButton, Rect};
use serde::{Deserialize, Serialize};

/// Where a toggle request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationSource {
    /// Click or tap on the control surface.
    Pointer,
    /// Space or Enter while focused.
    Keyboard(Key),
}

impl ActivationSource {
    /// Whether the host should suppress the event's default action.
    ///
    /// Space would scroll the page and Enter would submit a surrounding form.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        matches!(self, Self::Keyboard(_))
    }
}

/// Keys that activate the control.
#[must_use]
pub const fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Space | Key::Enter)
}

/// Map an event to a toggle request, before the disabled gate.
///
/// Pointer activation must land inside `bounds`. Only the primary mouse button
/// and taps count, and a click yields one request on press.
#[must_use]
pub fn classify(event: &Event, bounds: &Rect) -> Option<ActivationSource> {
    match event {
        Event::MouseDown {
            position,
            button: MouseButton::Left,
        }
        | Event::Tap { position } => bounds
            .contains_point(position)
            .then_some(ActivationSource::Pointer),
        Event::KeyDown { key } if is_activation_key(*key) => Some(ActivationSource::Keyboard(*key)),
        _ => None,
    }
}

/// Position in the keyboard focus order: `0` when enabled, `-1` when removed.
#[must_use]
pub const fn tab_index(disabled: bool) -> i32 {
    if disabled {
        -1
    } else {
        0
    }
}
