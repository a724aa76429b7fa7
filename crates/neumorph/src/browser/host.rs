//! Listener logic shared by every target.
//!
//! The DOM listeners in `element.rs` only translate browser events and apply
//! the outcome. Everything they decide lives here, so it runs natively too.

use super::{key_from_dom, render, DomNode};
use neumorph_core::Event;
use neumorph_widgets::{ChangeCallback, NeumorphicToggle, ToggleError};
use std::cell::RefCell;

/// What a `keydown` listener should do with the browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Suppress the browser's default action (page scroll, form submit)
    pub prevent_default: bool,
    /// New intended value when the toggle accepted the request
    pub changed: Option<bool>,
}

/// A toggle shared between DOM listeners and its owner.
///
/// The host keeps the change callback outside the toggle's cell and runs it
/// after the toggle borrow ends. A callback may therefore call
/// [`ToggleHost::set_state`] or [`ToggleHost::set_disabled`] on the same host.
pub struct ToggleHost {
    toggle: RefCell<NeumorphicToggle>,
    on_change: RefCell<Option<ChangeCallback>>,
}

impl std::fmt::Debug for ToggleHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleHost")
            .field("toggle", &self.toggle)
            .finish_non_exhaustive()
    }
}

impl ToggleHost {
    /// Take ownership of `toggle` and its change callback.
    #[must_use]
    pub fn new(mut toggle: NeumorphicToggle) -> Self {
        let on_change = toggle.take_on_change();
        Self {
            toggle: RefCell::new(toggle),
            on_change: RefCell::new(on_change),
        }
    }

    /// Current value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.toggle.borrow().is_on()
    }

    /// Whether interaction is suppressed.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.toggle.borrow().is_disabled()
    }

    /// Element tree for the current state.
    #[must_use]
    pub fn render(&self) -> DomNode {
        render(&self.toggle.borrow())
    }

    /// Handle a `click` on the element.
    ///
    /// Returns the intended value, or `None` when disabled.
    pub fn click(&self) -> Option<bool> {
        let on = self.toggle.borrow_mut().request_toggle()?;
        self.notify(on);
        Some(on)
    }

    /// Handle a `keydown` carrying the DOM `key` value.
    ///
    /// Activation keys always prevent the default action, even when the toggle
    /// is disabled and the request is ignored.
    pub fn key_down(&self, key: &str) -> KeyOutcome {
        let Some(key) = key_from_dom(key) else {
            return KeyOutcome::default();
        };
        let changed = self
            .toggle
            .borrow_mut()
            .handle_event(&Event::KeyDown { key })
            .map(|changed| changed.on);
        if let Some(on) = changed {
            self.notify(on);
        }
        KeyOutcome {
            prevent_default: true,
            changed,
        }
    }

    /// Push a new caller-owned value.
    ///
    /// # Errors
    ///
    /// Fails if the value would change the toggle's ownership mode.
    pub fn set_state(&self, on: Option<bool>) -> Result<(), ToggleError> {
        self.toggle.borrow_mut().set_state(on)
    }

    /// Enable or disable the toggle.
    pub fn set_disabled(&self, disabled: bool) {
        self.toggle.borrow_mut().set_disabled(disabled);
    }

    fn notify(&self, on: bool) {
        let Ok(mut slot) = self.on_change.try_borrow_mut() else {
            log::warn!("change callback re-entered; skipping notification of {on}");
            return;
        };
        if let Some(callback) = slot.as_mut() {
            callback(on);
        }
    }
}
