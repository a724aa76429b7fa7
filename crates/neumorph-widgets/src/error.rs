//! Error types for neumorph-widgets.

use crate::toggle::OwnershipMode;
use thiserror::Error;

/// Errors raised by a toggle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The caller tried to change who owns the state after construction.
    #[error("cannot switch toggle state from {from} to {to} after construction")]
    ModeSwitch {
        /// Mode fixed at construction
        from: OwnershipMode,
        /// Mode implied by the rejected update
        to: OwnershipMode,
    },
}

/// Errors loading toggle configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed YAML document.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
