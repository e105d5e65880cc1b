//! In-memory host used by the replay tool and tests.

use std::cell::Cell;

use serde::Serialize;
use wavdrop_types::FileDescriptor;

use crate::host::{FileDrop, Gesture, HostDom, HostError};

/// A document reduced to the state the widget can observe or change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InMemoryDom {
    label_text: String,
    label_active: bool,
    drop_hover: bool,
    input_files: Vec<FileDescriptor>,
}

impl InMemoryDom {
    /// Creates a host whose label initially reads `label_text`.
    pub fn new(label_text: impl Into<String>) -> Self {
        Self {
            label_text: label_text.into(),
            ..Self::default()
        }
    }

    /// Simulates the user picking `files` in the browse dialog.
    ///
    /// Like the browser, this only updates the input; the caller fires the
    /// widget's change handler afterwards.
    pub fn choose_files(&mut self, files: Vec<FileDescriptor>) {
        self.input_files = files;
    }

    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    pub fn label_active(&self) -> bool {
        self.label_active
    }

    pub fn drop_hover(&self) -> bool {
        self.drop_hover
    }

    pub fn input_files(&self) -> &[FileDescriptor] {
        &self.input_files
    }
}

impl HostDom for InMemoryDom {
    type File = FileDescriptor;

    fn first_selected_file(&self) -> Option<FileDescriptor> {
        self.input_files.first().cloned()
    }

    fn set_label_text(&mut self, text: &str) -> Result<(), HostError> {
        self.label_text = text.to_string();
        Ok(())
    }

    fn set_label_active(&mut self, active: bool) -> Result<(), HostError> {
        self.label_active = active;
        Ok(())
    }

    fn set_drop_hover(&mut self, hovering: bool) -> Result<(), HostError> {
        self.drop_hover = hovering;
        Ok(())
    }

    fn replace_selection(&mut self, file: &FileDescriptor) -> Result<(), HostError> {
        self.input_files = vec![file.clone()];
        Ok(())
    }
}

/// A drag gesture built from plain descriptors.
#[derive(Debug, Default)]
pub struct SyntheticGesture {
    files: Vec<FileDescriptor>,
    default_prevented: Cell<bool>,
}

impl SyntheticGesture {
    /// A gesture without files, as seen on `dragover` or an empty drop.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_files(files: Vec<FileDescriptor>) -> Self {
        Self {
            files,
            default_prevented: Cell::new(false),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl Gesture for SyntheticGesture {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

impl FileDrop for SyntheticGesture {
    type File = FileDescriptor;

    fn files(&self) -> Vec<FileDescriptor> {
        self.files.clone()
    }
}
