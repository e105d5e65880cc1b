//! File picker widget that keeps a file-name label in sync with a file input.
//!
//! The widget reacts to four gestures: a selection made through the browse
//! dialog (`change`), a drag hovering over the drop area (`dragover`), the drag
//! leaving it (`dragleave`) and a drop. It never touches a document directly;
//! every side effect goes through a [`HostDom`] supplied at construction, so the
//! same logic drives the browser binding and the in-memory host used by the
//! replay tool and the tests.

mod host;
mod memory;
mod widget;

pub use host::{FileDrop, Gesture, HostDom, HostError, PickedFile};
pub use memory::{InMemoryDom, SyntheticGesture};
pub use widget::FilePickerWidget;
