//! Input delivered to widgets by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A single input occurrence, in layout coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved.
    MouseMove {
        /// Pointer location
        position: Point,
    },
    /// Mouse button went down.
    MouseDown {
        /// Pointer location
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Mouse button came up.
    MouseUp {
        /// Pointer location
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Touch or pen tap.
    Tap {
        /// Tap location
        position: Point,
    },
    /// Key went down.
    KeyDown {
        /// Which key
        key: Key,
    },
    /// Key came up.
    KeyUp {
        /// Which key
        key: Key,
    },
    /// Keyboard focus arrived.
    FocusIn,
    /// Keyboard focus left.
    FocusOut,
}

/// Mouse buttons. Only the primary one activates controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary
    Left,
    /// Secondary
    Right,
    /// Wheel
    Middle,
}

/// Keys a widget can tell apart.
///
/// Named keys cover activation and focus movement; printable input arrives
/// as [`Key::Char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
    /// Esc
    Escape,
    /// Tab
    Tab,
    /// Printable character
    Char(char),
}
