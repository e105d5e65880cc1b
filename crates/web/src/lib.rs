//! Browser entry points for the wavdrop file picker.
//!
//! With the default `auto-mount` feature the module binds to the stock
//! `file-input`, `file-name` and `drop-area` elements as soon as it starts.
//! Pages with other markup disable that feature and call `mountWithConfig`.

mod binding;
mod dom;
mod logging;

pub use binding::{WidgetBinding, active_selection, mount, mount_after_content_loaded, unmount};
pub use dom::{BrowserDom, BrowserDragEvent, BrowserFile};
pub use logging::{ConsoleMakeWriter, ConsoleWriter, init_console_tracing};

use wasm_bindgen::prelude::*;
use wavdrop_types::WidgetConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if cfg!(feature = "auto-mount") {
        let config = WidgetConfig::default();
        init_console_tracing(&config.log_level);
        // Pages without the stock markup mount explicitly later.
        if let Err(error) = mount(config) {
            tracing::error!(error = %error, "auto-mount failed");
        }
    }
    Ok(())
}

/// Binds the widget using a JSON configuration, replacing any earlier binding.
///
/// The config's `log_level` only applies if no console logging was installed
/// yet (auto-mount installs it with the default level).
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json_str(config_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    init_console_tracing(&config.log_level);
    mount(config).map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Detaches the active binding. Returns whether one existed.
#[wasm_bindgen(js_name = unmount)]
pub fn unmount_widget() -> bool {
    unmount()
}

/// Name of the currently selected file, or `undefined`.
#[wasm_bindgen(js_name = selectedFileName)]
pub fn selected_file_name() -> Option<String> {
    active_selection()
}
