//! Event wiring between page elements and the widget.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wavdrop_types::WidgetConfig;
use wavdrop_widget::{FilePickerWidget, HostError};
use web_sys::{Document, DragEvent, Event, EventTarget};

use crate::dom::{BrowserDom, BrowserDragEvent, describe};

type SharedWidget = Rc<RefCell<FilePickerWidget<BrowserDom>>>;

thread_local! {
    static ACTIVE: RefCell<Option<WidgetBinding>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<PendingMount>> = const { RefCell::new(None) };
}

const CONTENT_LOADED: &str = "DOMContentLoaded";

/// A registered event listener, removed again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, HostError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|error| HostError::operation("addEventListener", describe(&error)))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A widget bound to live page elements.
///
/// Dropping the binding detaches every listener it registered.
pub struct WidgetBinding {
    widget: SharedWidget,
    _listeners: Vec<Listener>,
}

impl WidgetBinding {
    /// Locates the configured elements in `document` and registers the
    /// `change`, `dragover`, `dragleave` and `drop` handlers.
    pub fn bind(document: &Document, config: WidgetConfig) -> Result<Self, HostError> {
        let dom = BrowserDom::locate(document, &config)?;
        let input: EventTarget = dom.file_input().clone().into();
        let drop_area: EventTarget = dom.drop_area().clone().into();
        let widget: SharedWidget = Rc::new(RefCell::new(FilePickerWidget::new(dom, config)));

        let listeners = vec![
            Listener::attach(&input, "change", {
                let widget = Rc::clone(&widget);
                move |_event: Event| dispatch(&widget, "change", |widget| widget.on_input_change())
            })?,
            Listener::attach(&drop_area, "dragover", {
                let widget = Rc::clone(&widget);
                move |event: Event| {
                    let event = BrowserDragEvent(event.unchecked_into::<DragEvent>());
                    dispatch(&widget, "dragover", |widget| widget.on_drag_over(&event));
                }
            })?,
            Listener::attach(&drop_area, "dragleave", {
                let widget = Rc::clone(&widget);
                move |_event: Event| dispatch(&widget, "dragleave", |widget| widget.on_drag_leave())
            })?,
            Listener::attach(&drop_area, "drop", {
                let widget = Rc::clone(&widget);
                move |event: Event| {
                    let event = BrowserDragEvent(event.unchecked_into::<DragEvent>());
                    dispatch(&widget, "drop", |widget| widget.on_drop(&event).map(|_| ()));
                }
            })?,
        ];
        debug!("file picker bound");

        Ok(Self {
            widget,
            _listeners: listeners,
        })
    }

    /// Name of the currently selected file, if any.
    pub fn selected_file_name(&self) -> Option<String> {
        self.widget
            .try_borrow()
            .ok()
            .and_then(|widget| widget.selection().selected_file_name().map(str::to_string))
    }
}

/// Runs one handler, logging host failures instead of throwing into JS.
fn dispatch<F>(widget: &SharedWidget, event: &'static str, handler: F)
where
    F: FnOnce(&mut FilePickerWidget<BrowserDom>) -> Result<(), HostError>,
{
    let Ok(mut widget) = widget.try_borrow_mut() else {
        warn!(event, "file picker busy; event dropped");
        return;
    };
    if let Err(error) = handler(&mut widget) {
        error!(event, error = %error, "file picker handler failed");
    }
}

/// A bind waiting for `DOMContentLoaded`. Dropping it withdraws the listener.
struct PendingMount {
    document: Document,
    callback: JsValue,
}

impl Drop for PendingMount {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(CONTENT_LOADED, self.callback.unchecked_ref());
    }
}

pub(crate) fn document() -> Result<Document, HostError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| HostError::operation("window.document", "no document available"))
}

/// Binds the widget once the document's structure is available.
///
/// While the document is still loading, binding is deferred to
/// `DOMContentLoaded`. Any previous binding or pending bind is replaced.
pub fn mount(config: WidgetConfig) -> Result<(), HostError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        mount_after_content_loaded(&document, config)
    } else {
        cancel_pending();
        attach(&document, config)
    }
}

/// Binds the widget in `document` when it next dispatches `DOMContentLoaded`.
///
/// Replaces any earlier pending bind; [`unmount`] cancels it.
pub fn mount_after_content_loaded(document: &Document, config: WidgetConfig) -> Result<(), HostError> {
    cancel_pending();
    let target = document.clone();
    let callback = Closure::once_into_js(move || {
        let fired = PENDING.with(|slot| slot.borrow_mut().take());
        drop(fired);
        if let Err(error) = attach(&target, config) {
            error!(error = %error, "deferred file picker binding failed");
        }
    });
    document
        .add_event_listener_with_callback(CONTENT_LOADED, callback.unchecked_ref())
        .map_err(|error| HostError::operation("addEventListener", describe(&error)))?;
    let previous = PENDING.with(|slot| {
        slot.borrow_mut().replace(PendingMount {
            document: document.clone(),
            callback,
        })
    });
    drop(previous);
    debug!("binding deferred until DOMContentLoaded");
    Ok(())
}

/// Detaches the active binding and cancels a pending one. Returns whether
/// either existed.
pub fn unmount() -> bool {
    let cancelled = cancel_pending();
    let bound = ACTIVE.with(|slot| slot.borrow_mut().take());
    cancelled || bound.is_some()
}

/// Name of the file selected in the active binding.
pub fn active_selection() -> Option<String> {
    ACTIVE.with(|slot| slot.borrow().as_ref().and_then(WidgetBinding::selected_file_name))
}

fn cancel_pending() -> bool {
    let pending = PENDING.with(|slot| slot.borrow_mut().take());
    pending.is_some()
}

fn attach(document: &Document, config: WidgetConfig) -> Result<(), HostError> {
    let binding = WidgetBinding::bind(document, config)?;
    // The previous binding is dropped outside the borrow so its listeners
    // detach without holding the slot.
    let previous = ACTIVE.with(|slot| slot.borrow_mut().replace(binding));
    drop(previous);
    Ok(())
}
