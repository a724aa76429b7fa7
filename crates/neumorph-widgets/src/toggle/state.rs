//! Ownership of the on/off value.
//!
//! A toggle either owns its value ([`ToggleState::SelfOwned`]) or mirrors a
//! value the caller supplies on every render ([`ToggleState::Controlled`]).
//! The variant is picked once at construction and never changes.

use crate::error::ToggleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who owns a toggle's on/off value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipMode {
    /// The instance stores and flips its own value.
    SelfOwned,
    /// The caller supplies the value; the instance never mutates it.
    Controlled,
}

impl OwnershipMode {
    /// Mode implied by whether the caller supplied a value.
    #[must_use]
    pub const fn for_supplied(supplied: Option<bool>) -> Self {
        match supplied {
            Some(_) => Self::Controlled,
            None => Self::SelfOwned,
        }
    }
}

impl fmt::Display for OwnershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelfOwned => "self-owned",
            Self::Controlled => "controlled",
        })
    }
}

/// The displayed on/off value together with its ownership mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Value held by the instance.
    SelfOwned {
        /// Current value
        on: bool,
    },
    /// Value supplied by the caller.
    Controlled {
        /// Last supplied value
        on: bool,
    },
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::SelfOwned { on: false }
    }
}

impl ToggleState {
    /// Pick the mode from whether a value was supplied.
    ///
    /// Self-owned state always starts off.
    #[must_use]
    pub const fn new(supplied: Option<bool>) -> Self {
        match supplied {
            Some(on) => Self::Controlled { on },
            None => Self::SelfOwned { on: false },
        }
    }

    /// Displayed value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        match self {
            Self::SelfOwned { on } | Self::Controlled { on } => *on,
        }
    }

    /// Ownership mode.
    #[must_use]
    pub const fn mode(&self) -> OwnershipMode {
        match self {
            Self::SelfOwned { .. } => OwnershipMode::SelfOwned,
            Self::Controlled { .. } => OwnershipMode::Controlled,
        }
    }

    /// Check whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Apply an accepted toggle request and return the intended new value.
    ///
    /// Only self-owned state changes here. Controlled state keeps showing the
    /// supplied value until the caller passes the new one to [`Self::sync`].
    pub fn request_toggle(&mut self) -> bool {
        match self {
            Self::SelfOwned { on } => {
                *on = !*on;
                *on
            }
            Self::Controlled { on } => !*on,
        }
    }

    /// Per-render update from the caller.
    ///
    /// A controlled toggle takes `Some(value)`; a self-owned toggle takes
    /// `None` and keeps its own value.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ModeSwitch`] if `supplied` implies the other
    /// ownership mode. The state is left unchanged.
    pub fn sync(&mut self, supplied: Option<bool>) -> Result<(), ToggleError> {
        match (self, supplied) {
            (Self::Controlled { on }, Some(value)) => {
                *on = value;
                Ok(())
            }
            (Self::SelfOwned { .. }, None) => Ok(()),
            (state, supplied) => Err(ToggleError::ModeSwitch {
                from: state.mode(),
                to: OwnershipMode::for_supplied(supplied),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Construction Tests =====

    #[test]
    fn test_new_without_value_is_self_owned_and_off() {
        let state = ToggleState::new(None);
        assert_eq!(state.mode(), OwnershipMode::SelfOwned);
        assert!(!state.is_on());
        assert_eq!(state, ToggleState::default());
    }

    #[test]
    fn test_new_with_value_is_controlled() {
        let state = ToggleState::new(Some(true));
        assert!(state.is_controlled());
        assert!(state.is_on());

        let state = ToggleState::new(Some(false));
        assert!(state.is_controlled());
        assert!(!state.is_on());
    }

    // ===== Toggle Request Tests =====

    #[test]
    fn test_self_owned_flips_and_persists() {
        let mut state = ToggleState::new(None);
        assert!(state.request_toggle());
        assert!(state.is_on());
        assert!(!state.request_toggle());
        assert!(!state.is_on());
    }

    #[test]
    fn test_controlled_reports_flip_without_showing_it() {
        let mut state = ToggleState::new(Some(true));
        assert!(!state.request_toggle());
        assert!(state.is_on());
        assert!(!state.request_toggle());
        assert!(state.is_on());
    }

    // ===== Sync Tests =====

    #[test]
    fn test_controlled_sync_updates_value() {
        let mut state = ToggleState::new(Some(false));
        state.sync(Some(true)).unwrap();
        assert!(state.is_on());
        assert!(state.is_controlled());
    }

    #[test]
    fn test_self_owned_sync_none_keeps_value() {
        let mut state = ToggleState::new(None);
        state.request_toggle();
        state.sync(None).unwrap();
        assert!(state.is_on());
    }

    #[test]
    fn test_sync_rejects_switch_to_controlled() {
        let mut state = ToggleState::new(None);
        let err = state.sync(Some(true)).unwrap_err();
        assert_eq!(
            err,
            ToggleError::ModeSwitch {
                from: OwnershipMode::SelfOwned,
                to: OwnershipMode::Controlled,
            }
        );
        assert_eq!(state, ToggleState::SelfOwned { on: false });
    }

    #[test]
    fn test_sync_rejects_switch_to_self_owned() {
        let mut state = ToggleState::new(Some(true));
        let err = state.sync(None).unwrap_err();
        assert_eq!(
            err,
            ToggleError::ModeSwitch {
                from: OwnershipMode::Controlled,
                to: OwnershipMode::SelfOwned,
            }
        );
        assert_eq!(state, ToggleState::Controlled { on: true });
    }

    #[test]
    fn test_ownership_mode_display() {
        assert_eq!(OwnershipMode::SelfOwned.to_string(), "self-owned");
        assert_eq!(OwnershipMode::Controlled.to_string(), "controlled");
    }

    proptest! {
        #[test]
        fn prop_self_owned_parity(requests in 0usize..64) {
            let mut state = ToggleState::new(None);
            for _ in 0..requests {
                state.request_toggle();
            }
            prop_assert_eq!(state.is_on(), requests % 2 == 1);
        }

        #[test]
        fn prop_controlled_never_self_mutates(initial: bool, requests in 0usize..64) {
            let mut state = ToggleState::new(Some(initial));
            for _ in 0..requests {
                prop_assert_eq!(state.request_toggle(), !initial);
            }
            prop_assert_eq!(state.is_on(), initial);
            prop_assert_eq!(state.mode(), OwnershipMode::Controlled);
        }
    }
}
