//! Declarative toggle configuration.

use super::size::ToggleSize;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Accessible name used when the caller gives none.
pub const DEFAULT_LABEL: &str = "Toggle switch";

/// Every construction option except the change callback.
///
/// Field aliases accept the camel-case option names used by web hosts
/// (`isOn`, `className`, `aria-label`).
///
/// # Examples
///
/// ```
/// use neumorph_widgets::{SizePreset, ToggleProps, ToggleSize};
///
/// let props = ToggleProps::from_yaml("size: small\nlabel: Dark mode\n").unwrap();
/// assert_eq!(props.size, ToggleSize::Preset(SizePreset::Small));
/// assert_eq!(props.state, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleProps {
    /// Caller-owned value; presence selects controlled mode.
    #[serde(alias = "isOn", skip_serializing_if = "Option::is_none")]
    pub state: Option<bool>,
    /// Size input
    pub size: ToggleSize,
    /// Suppress all interaction
    pub disabled: bool,
    /// Accessible name
    #[serde(alias = "aria-label")]
    pub label: String,
    /// Extra style class appended to the class list
    #[serde(alias = "className")]
    pub class_name: String,
    /// Test ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Default for ToggleProps {
    fn default() -> Self {
        Self {
            state: None,
            size: ToggleSize::default(),
            disabled: false,
            label: DEFAULT_LABEL.to_string(),
            class_name: String::new(),
            test_id: None,
        }
    }
}

impl ToggleProps {
    /// Parse props from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse props from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::size::SizePreset;

    #[test]
    fn test_defaults() {
        let props = ToggleProps::default();
        assert_eq!(props.state, None);
        assert_eq!(props.size, ToggleSize::Preset(SizePreset::Medium));
        assert!(!props.disabled);
        assert_eq!(props.label, "Toggle switch");
        assert!(props.class_name.is_empty());
    }

    #[test]
    fn test_empty_yaml_mapping_uses_defaults() {
        let props = ToggleProps::from_yaml("{}").unwrap();
        assert_eq!(props, ToggleProps::default());
    }

    #[test]
    fn test_yaml_sizes() {
        let small = ToggleProps::from_yaml("size: small").unwrap();
        assert_eq!(small.size, ToggleSize::Preset(SizePreset::Small));

        let px = ToggleProps::from_yaml("size: 35").unwrap();
        assert_eq!(px.size, ToggleSize::Pixels(35.0));

        let rem = ToggleProps::from_yaml("size: 5rem").unwrap();
        assert_eq!(rem.size, ToggleSize::Length("5rem".to_string()));
    }

    #[test]
    fn test_yaml_full_document() {
        let yaml = r"
state: true
size: large
disabled: true
label: Controlled toggle example
class_name: hero
test_id: dark-mode
";
        let props = ToggleProps::from_yaml(yaml).unwrap();
        assert_eq!(props.state, Some(true));
        assert_eq!(props.size, ToggleSize::Preset(SizePreset::Large));
        assert!(props.disabled);
        assert_eq!(props.label, "Controlled toggle example");
        assert_eq!(props.class_name, "hero");
        assert_eq!(props.test_id.as_deref(), Some("dark-mode"));
    }

    #[test]
    fn test_json_aliases() {
        let json = r#"{"isOn": false, "className": "compact", "aria-label": "35px toggle example", "size": 35}"#;
        let props = ToggleProps::from_json(json).unwrap();
        assert_eq!(props.state, Some(false));
        assert_eq!(props.class_name, "compact");
        assert_eq!(props.label, "35px toggle example");
        assert_eq!(props.size, ToggleSize::Pixels(35.0));
    }

    #[test]
    fn test_malformed_documents_error() {
        assert!(matches!(
            ToggleProps::from_yaml("disabled: [unterminated"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            ToggleProps::from_json("{\"disabled\": \"yes\"}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_serialize_omits_absent_state() {
        let json = serde_json::to_string(&ToggleProps::default()).unwrap();
        assert!(!json.contains("state"));
        assert!(json.contains("\"size\":\"medium\""));
    }
}
