//! Widget configuration: host element ids, style classes and user-facing copy.
//!
//! Every field carries a default matching the stock upload page, so an empty
//! JSON object (or no configuration at all) yields a working widget.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only MIME type accepted from a drop by default.
pub const WAV_MIME_TYPE: &str = "audio/wav";

pub const DEFAULT_FILE_INPUT_ID: &str = "file-input";
pub const DEFAULT_FILE_NAME_ID: &str = "file-name";
pub const DEFAULT_DROP_AREA_ID: &str = "drop-area";

pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_DRAG_OVER_CLASS: &str = "dragover";

/// Label text shown while no file is selected.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Drop music files here, or click to select";
/// Label text shown after a drop with the wrong MIME type.
pub const DEFAULT_REJECTION_TEXT: &str = "Only .wav files are allowed";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error surfaced when a configuration cannot be parsed or is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload did not match the configuration schema.
    #[error("widget config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field that must name something was left blank.
    #[error("widget config field `{0}` must not be empty")]
    EmptyField(&'static str),
    /// A class name the host's class list would refuse.
    #[error("widget config field `{field}` holds `{value}`, which is not a single class name")]
    InvalidClassName { field: &'static str, value: String },
    /// Two roles point at the same element.
    #[error("element id `{0}` is used for more than one widget element")]
    DuplicateElementId(String),
}

/// Identifiers of the three host elements the widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// The native file input owning the form's file list.
    pub file_input: String,
    /// The element whose text shows the selected file name.
    pub file_name: String,
    /// The container accepting drag-and-drop gestures.
    pub drop_area: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            file_input: DEFAULT_FILE_INPUT_ID.to_string(),
            file_name: DEFAULT_FILE_NAME_ID.to_string(),
            drop_area: DEFAULT_DROP_AREA_ID.to_string(),
        }
    }
}

/// CSS classes toggled by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleClasses {
    /// Added to the label while a valid file is selected.
    pub active: String,
    /// Added to the drop area while a drag hovers over it.
    pub drag_over: String,
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            active: DEFAULT_ACTIVE_CLASS.to_string(),
            drag_over: DEFAULT_DRAG_OVER_CLASS.to_string(),
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub elements: ElementIds,
    pub classes: StyleClasses,
    /// MIME type a dropped file must report, compared by exact string equality.
    pub accepted_mime_type: String,
    pub placeholder_text: String,
    pub rejection_text: String,
    /// Remove the hover style when a drop lands. The stock page leaves it on.
    pub clear_hover_on_drop: bool,
    /// Filter directive for browser console logging (e.g. `debug`, `wavdrop_widget=trace`).
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            classes: StyleClasses::default(),
            accepted_mime_type: WAV_MIME_TYPE.to_string(),
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            rejection_text: DEFAULT_REJECTION_TEXT.to_string(),
            clear_hover_on_drop: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every element id, class and the accepted MIME type is usable.
    ///
    /// Label copy may legitimately be empty and is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("elements.file_input", &self.elements.file_input),
            ("elements.file_name", &self.elements.file_name),
            ("elements.drop_area", &self.elements.drop_area),
            ("classes.active", &self.classes.active),
            ("classes.drag_over", &self.classes.drag_over),
            ("accepted_mime_type", &self.accepted_mime_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }

        let classes = [
            ("classes.active", &self.classes.active),
            ("classes.drag_over", &self.classes.drag_over),
        ];
        for (field, value) in classes {
            if value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(ConfigError::InvalidClassName {
                    field,
                    value: value.clone(),
                });
            }
        }

        let ids = [&self.elements.file_input, &self.elements.file_name, &self.elements.drop_area];
        for (index, id) in ids.iter().enumerate() {
            if ids[index + 1..].contains(id) {
                return Err(ConfigError::DuplicateElementId((*id).clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_stock_page_defaults() {
        let config = WidgetConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.elements.file_input, "file-input");
        assert_eq!(config.accepted_mime_type, "audio/wav");
        assert_eq!(config.placeholder_text, "Drop music files here, or click to select");
        assert_eq!(config.rejection_text, "Only .wav files are allowed");
        assert!(!config.clear_hover_on_drop);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = WidgetConfig::from_json_str(r#"{"elements": {"drop_area": "zone"}, "clear_hover_on_drop": true}"#)
            .unwrap();
        assert_eq!(config.elements.drop_area, "zone");
        assert_eq!(config.elements.file_name, DEFAULT_FILE_NAME_ID);
        assert_eq!(config.classes.drag_over, DEFAULT_DRAG_OVER_CLASS);
        assert!(config.clear_hover_on_drop);
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        let error = WidgetConfig::from_json_str(r#"{"classes": {"active": "  "}}"#).unwrap_err();
        assert!(matches!(error, ConfigError::EmptyField("classes.active")));
    }

    #[test]
    fn class_names_with_whitespace_are_rejected() {
        let error = WidgetConfig::from_json_str(r#"{"classes": {"active": "is active"}}"#).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidClassName { field: "classes.active", ref value } if value == "is active"
        ));

        let error = WidgetConfig::from_json_str(r#"{"classes": {"drag_over": "drag\tover"}}"#).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidClassName { field: "classes.drag_over", .. }));

        assert!(WidgetConfig::from_json_str(r#"{"classes": {"active": "is-active"}}"#).is_ok());
    }

    #[test]
    fn shared_element_ids_are_rejected() {
        let error =
            WidgetConfig::from_json_str(r#"{"elements": {"file_name": "drop-area"}}"#).unwrap_err();
        assert!(matches!(error, ConfigError::DuplicateElementId(ref id) if id == "drop-area"));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let error = WidgetConfig::from_json_str("{\"elements\": 3}").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
