//! Capabilities the widget needs from whatever hosts it.

use thiserror::Error;
use wavdrop_types::FileDescriptor;

/// Failure of a host primitive.
///
/// These are environment faults (a missing element, a rejected DOM call), not
/// user-facing outcomes; wrong file types and empty drops are ordinary widget
/// states and never produce a `HostError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A configured element id did not resolve.
    #[error("element `{id}` is not present in the document")]
    MissingElement { id: String },
    /// The element exists but is not the kind the widget needs.
    #[error("element `{id}` is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },
    /// The host refused an operation.
    #[error("host operation `{operation}` failed: {message}")]
    Operation { operation: &'static str, message: String },
}

impl HostError {
    pub fn operation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            message: message.into(),
        }
    }
}

/// A file handle as seen by the widget.
pub trait PickedFile: Clone {
    fn name(&self) -> String;
    /// MIME type the host reports for the file, possibly empty.
    fn mime_type(&self) -> String;
}

impl PickedFile for FileDescriptor {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// An input event whose default browser action can be suppressed.
pub trait Gesture {
    fn prevent_default(&self);
}

/// A gesture that carries dropped files.
pub trait FileDrop: Gesture {
    type File: PickedFile;

    /// All dropped files, in the order the host reports them.
    fn files(&self) -> Vec<Self::File>;
}

/// The three elements the widget drives, abstracted over the host.
pub trait HostDom {
    type File: PickedFile;

    /// First file of the file input's current selection.
    fn first_selected_file(&self) -> Option<Self::File>;

    fn set_label_text(&mut self, text: &str) -> Result<(), HostError>;

    /// Toggles the label's highlight style.
    fn set_label_active(&mut self, active: bool) -> Result<(), HostError>;

    /// Toggles the drop area's hover style.
    fn set_drop_hover(&mut self, hovering: bool) -> Result<(), HostError>;

    /// Replaces the file input's selection with exactly `file`, so a form
    /// submission carries it.
    fn replace_selection(&mut self, file: &Self::File) -> Result<(), HostError>;
}
