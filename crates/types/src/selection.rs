//! Selection model mirrored by the file name label.

use serde::{Deserialize, Serialize};

/// Plain description of a file as reported by the host.
///
/// Only the name and the reported MIME type are ever inspected; file contents
/// are never read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name including extension (e.g. `song.wav`).
    pub name: String,
    /// MIME type string reported by the host, possibly empty.
    #[serde(default, alias = "type")]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// The transient selection shown by the widget.
///
/// `is_active` is true exactly when a file name is held. The fields are only
/// reachable through [`SelectionState::select`] and [`SelectionState::clear`]
/// so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_file_name: Option<String>,
    is_active: bool,
}

impl SelectionState {
    /// Returns the name of the most recently accepted file.
    pub fn selected_file_name(&self) -> Option<&str> {
        self.selected_file_name.as_deref()
    }

    /// Whether a valid file is currently selected.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Records `name` as the current selection and marks the state active.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selected_file_name = Some(name.into());
        self.is_active = true;
    }

    /// Drops any recorded selection and marks the state inactive.
    pub fn clear(&mut self) {
        self.selected_file_name = None;
        self.is_active = false;
    }
}

/// What a drop gesture did to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropOutcome {
    /// The drop carried no files; nothing changed.
    Ignored,
    /// The first dropped file had the accepted MIME type and now backs the input.
    Accepted { name: String },
    /// The first dropped file was refused; the input kept its previous files.
    Rejected { name: String, mime_type: String },
}

impl DropOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_and_clear_keep_active_flag_in_sync() {
        let mut state = SelectionState::default();
        assert!(!state.is_active());
        assert_eq!(state.selected_file_name(), None);

        state.select("song.wav");
        assert!(state.is_active());
        assert_eq!(state.selected_file_name(), Some("song.wav"));

        state.clear();
        assert!(!state.is_active());
        assert_eq!(state.selected_file_name(), None);
    }

    #[test]
    fn descriptor_accepts_browser_style_type_key() {
        let descriptor: FileDescriptor = serde_json::from_value(json!({"name": "a.wav", "type": "audio/wav"})).unwrap();
        assert_eq!(descriptor, FileDescriptor::new("a.wav", "audio/wav"));

        let untyped: FileDescriptor = serde_json::from_value(json!({"name": "blob"})).unwrap();
        assert_eq!(untyped.mime_type, "");
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let rejected = DropOutcome::Rejected {
            name: "track.mp3".into(),
            mime_type: "audio/mpeg".into(),
        };
        assert_eq!(
            serde_json::to_value(&rejected).unwrap(),
            json!({"kind": "rejected", "name": "track.mp3", "mime_type": "audio/mpeg"})
        );
        assert_eq!(serde_json::to_value(DropOutcome::Ignored).unwrap(), json!({"kind": "ignored"}));
    }
}
