//! Shared type definitions for the wavdrop file picker.
//!
//! The widget, the browser binding and the replay CLI all speak in terms of
//! these types: the selection the label mirrors, the outcome of a drop, and the
//! configuration naming the host elements and the user-facing copy.

pub mod config;
pub mod selection;

pub use config::{
    ConfigError, DEFAULT_ACTIVE_CLASS, DEFAULT_DRAG_OVER_CLASS, DEFAULT_DROP_AREA_ID, DEFAULT_FILE_INPUT_ID,
    DEFAULT_FILE_NAME_ID, DEFAULT_LOG_LEVEL, DEFAULT_PLACEHOLDER_TEXT, DEFAULT_REJECTION_TEXT, ElementIds,
    StyleClasses, WAV_MIME_TYPE, WidgetConfig,
};
pub use selection::{DropOutcome, FileDescriptor, SelectionState};
