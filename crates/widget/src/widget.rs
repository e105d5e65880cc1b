//! The file picker widget and its event handlers.

use tracing::{debug, info};
use wavdrop_types::{DropOutcome, SelectionState, WidgetConfig};

use crate::host::{FileDrop, Gesture, HostDom, HostError, PickedFile};

/// Which neutral text the label falls back to.
#[derive(Debug, Clone, Copy)]
enum Neutral {
    Placeholder,
    Rejection,
}

/// Keeps the file-name label consistent with the file input across both the
/// browse dialog and drag-and-drop.
///
/// Each handler runs to completion and leaves the host in a well-defined state
/// that the next gesture can build on. Errors are only returned when a host
/// primitive itself fails.
#[derive(Debug)]
pub struct FilePickerWidget<H: HostDom> {
    host: H,
    config: WidgetConfig,
    selection: SelectionState,
    hovering: bool,
}

impl<H: HostDom> FilePickerWidget<H> {
    /// Wraps `host` without touching it; the page's initial markup stays as is.
    pub fn new(host: H, config: WidgetConfig) -> Self {
        Self {
            host,
            config,
            selection: SelectionState::default(),
            hovering: false,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether the drop area currently carries the hover style.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Handles `change` on the file input.
    pub fn on_input_change(&mut self) -> Result<(), HostError> {
        match self.host.first_selected_file() {
            Some(file) => {
                let name = file.name();
                debug!(file = %name, "file input selection changed");
                self.show_selected(name)
            }
            None => {
                debug!("file input selection cleared");
                self.show_neutral(Neutral::Placeholder)
            }
        }
    }

    /// Handles `dragover` on the drop area. Fires repeatedly while hovering.
    pub fn on_drag_over<G: Gesture>(&mut self, event: &G) -> Result<(), HostError> {
        event.prevent_default();
        self.set_hover(true)
    }

    /// Handles `dragleave` on the drop area.
    pub fn on_drag_leave(&mut self) -> Result<(), HostError> {
        self.set_hover(false)
    }

    /// Handles `drop` on the drop area.
    ///
    /// Only the first dropped file is considered. It is accepted when its
    /// reported MIME type equals the configured one exactly; the file name's
    /// extension plays no part. A refused file leaves the file input's previous
    /// selection in place and only rewrites the label. If the host cannot
    /// install an accepted file into the input, the error is returned and the
    /// label and selection keep their previous values.
    pub fn on_drop<D>(&mut self, event: &D) -> Result<DropOutcome, HostError>
    where
        D: FileDrop<File = H::File>,
    {
        event.prevent_default();
        if self.config.clear_hover_on_drop {
            self.set_hover(false)?;
        }

        let mut files = event.files().into_iter();
        let Some(file) = files.next() else {
            debug!("drop carried no files");
            return Ok(DropOutcome::Ignored);
        };
        let ignored = files.count();
        if ignored > 0 {
            debug!(ignored, "only the first dropped file is considered");
        }

        let name = file.name();
        let mime_type = file.mime_type();
        if mime_type == self.config.accepted_mime_type {
            // The input must hold the file before the label claims it.
            self.host.replace_selection(&file)?;
            self.show_selected(name.clone())?;
            info!(file = %name, "accepted dropped file");
            Ok(DropOutcome::Accepted { name })
        } else {
            info!(file = %name, mime_type = %mime_type, "rejected dropped file");
            self.show_neutral(Neutral::Rejection)?;
            Ok(DropOutcome::Rejected { name, mime_type })
        }
    }

    fn show_selected(&mut self, name: String) -> Result<(), HostError> {
        self.host.set_label_text(&name)?;
        self.host.set_label_active(true)?;
        self.selection.select(name);
        Ok(())
    }

    fn show_neutral(&mut self, neutral: Neutral) -> Result<(), HostError> {
        let text = match neutral {
            Neutral::Placeholder => &self.config.placeholder_text,
            Neutral::Rejection => &self.config.rejection_text,
        };
        self.host.set_label_text(text)?;
        self.host.set_label_active(false)?;
        self.selection.clear();
        Ok(())
    }

    fn set_hover(&mut self, hovering: bool) -> Result<(), HostError> {
        if self.hovering != hovering {
            debug!(hovering, "drop area hover changed");
        }
        self.host.set_drop_hover(hovering)?;
        self.hovering = hovering;
        Ok(())
    }
}
