//! Gesture scripts replayed against the in-memory host.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wavdrop_types::{DropOutcome, FileDescriptor, SelectionState, WidgetConfig};
use wavdrop_widget::{FilePickerWidget, HostError, InMemoryDom, SyntheticGesture};

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Step {
    /// Files picked in the browse dialog, followed by `change`.
    Select {
        #[serde(default)]
        files: Vec<FileDescriptor>,
    },
    DragOver,
    DragLeave,
    Drop {
        #[serde(default)]
        files: Vec<FileDescriptor>,
    },
}

impl Step {
    fn event_name(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::DragOver => "drag_over",
            Self::DragLeave => "drag_leave",
            Self::Drop { .. } => "drop",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// State observed after a step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DropOutcome>,
    pub selection: SelectionState,
    pub host: InMemoryDom,
}

/// Runs every step in order against a fresh widget whose label starts at the
/// configured placeholder.
pub fn replay(config: WidgetConfig, scenario: &Scenario) -> Result<Vec<StepReport>, HostError> {
    let host = InMemoryDom::new(config.placeholder_text.clone());
    let mut widget = FilePickerWidget::new(host, config);
    let mut reports = Vec::with_capacity(scenario.steps.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        debug!(index, event = step.event_name(), "replaying step");
        let outcome = match step {
            Step::Select { files } => {
                widget.host_mut().choose_files(files.clone());
                widget.on_input_change()?;
                None
            }
            Step::DragOver => {
                widget.on_drag_over(&SyntheticGesture::empty())?;
                None
            }
            Step::DragLeave => {
                widget.on_drag_leave()?;
                None
            }
            Step::Drop { files } => Some(widget.on_drop(&SyntheticGesture::with_files(files.clone()))?),
        };
        reports.push(StepReport {
            index,
            event: step.event_name(),
            outcome,
            selection: widget.selection().clone(),
            host: widget.host().clone(),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario(value: serde_json::Value) -> Scenario {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_all_step_kinds() {
        let parsed = scenario(json!({
            "steps": [
                {"event": "select", "files": [{"name": "a.wav", "type": "audio/wav"}]},
                {"event": "drag_over"},
                {"event": "drag_leave"},
                {"event": "drop"}
            ]
        }));
        assert_eq!(
            parsed.steps,
            vec![
                Step::Select {
                    files: vec![FileDescriptor::new("a.wav", "audio/wav")]
                },
                Step::DragOver,
                Step::DragLeave,
                Step::Drop { files: vec![] },
            ]
        );
    }

    #[test]
    fn replay_reports_state_after_each_step() {
        let script = scenario(json!({
            "steps": [
                {"event": "drag_over"},
                {"event": "drop", "files": [{"name": "song.wav", "mime_type": "audio/wav"}]},
                {"event": "drag_leave"},
                {"event": "drop", "files": [{"name": "track.mp3", "mime_type": "audio/mpeg"}]},
                {"event": "select", "files": []}
            ]
        }));
        let reports = replay(WidgetConfig::default(), &script).unwrap();
        assert_eq!(reports.len(), 5);

        let accepted = serde_json::to_value(&reports[1]).unwrap();
        assert_eq!(accepted["outcome"], json!({"kind": "accepted", "name": "song.wav"}));
        assert_eq!(accepted["host"]["label_text"], json!("song.wav"));
        assert_eq!(accepted["host"]["drop_hover"], json!(true));
        assert_eq!(accepted["selection"]["is_active"], json!(true));

        let rejected = serde_json::to_value(&reports[3]).unwrap();
        assert_eq!(rejected["host"]["label_text"], json!("Only .wav files are allowed"));
        assert_eq!(
            rejected["host"]["input_files"],
            json!([{"name": "song.wav", "mime_type": "audio/wav"}])
        );

        let cleared = serde_json::to_value(&reports[4]).unwrap();
        assert!(cleared.get("outcome").is_none());
        assert_eq!(cleared["host"]["label_text"], json!("Drop music files here, or click to select"));
        assert_eq!(cleared["selection"]["selected_file_name"], json!(null));
    }

    #[test]
    fn empty_script_produces_no_reports() {
        let reports = replay(WidgetConfig::default(), &Scenario::default()).unwrap();
        assert!(reports.is_empty());
    }
}
