//! `HostDom` over real page elements.

use wasm_bindgen::{JsCast, JsValue};
use wavdrop_types::WidgetConfig;
use wavdrop_widget::{FileDrop, Gesture, HostDom, HostError, PickedFile};
use web_sys::{DataTransfer, Document, DragEvent, Element, File, HtmlInputElement};

/// Renders a thrown JS value for error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// A browser `File`.
#[derive(Debug, Clone)]
pub struct BrowserFile(pub File);

impl PickedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// A `dragover` or `drop` event.
#[derive(Debug)]
pub struct BrowserDragEvent(pub DragEvent);

impl Gesture for BrowserDragEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(&self.0);
    }
}

impl FileDrop for BrowserDragEvent {
    type File = BrowserFile;

    fn files(&self) -> Vec<BrowserFile> {
        let Some(list) = self.0.data_transfer().and_then(|transfer| transfer.files()) else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|index| list.get(index)).map(BrowserFile).collect()
    }
}

/// The three page elements named by a [`WidgetConfig`].
#[derive(Debug, Clone)]
pub struct BrowserDom {
    file_input: HtmlInputElement,
    file_name: Element,
    drop_area: Element,
    active_class: String,
    drag_over_class: String,
}

impl BrowserDom {
    /// Resolves the configured element ids in `document`.
    pub fn locate(document: &Document, config: &WidgetConfig) -> Result<Self, HostError> {
        let ids = &config.elements;
        let file_input = find(document, &ids.file_input)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| HostError::WrongElementKind {
                id: ids.file_input.clone(),
                expected: "input element",
            })?;
        Ok(Self {
            file_input,
            file_name: find(document, &ids.file_name)?,
            drop_area: find(document, &ids.drop_area)?,
            active_class: config.classes.active.clone(),
            drag_over_class: config.classes.drag_over.clone(),
        })
    }

    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }

    pub fn drop_area(&self) -> &Element {
        &self.drop_area
    }
}

fn find(document: &Document, id: &str) -> Result<Element, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement { id: id.to_string() })
}

fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), HostError> {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    result.map_err(|error| HostError::operation("classList", describe(&error)))
}

impl HostDom for BrowserDom {
    type File = BrowserFile;

    fn first_selected_file(&self) -> Option<BrowserFile> {
        self.file_input.files().and_then(|list| list.get(0)).map(BrowserFile)
    }

    fn set_label_text(&mut self, text: &str) -> Result<(), HostError> {
        self.file_name.set_text_content(Some(text));
        Ok(())
    }

    fn set_label_active(&mut self, active: bool) -> Result<(), HostError> {
        toggle_class(&self.file_name, &self.active_class, active)
    }

    fn set_drop_hover(&mut self, hovering: bool) -> Result<(), HostError> {
        toggle_class(&self.drop_area, &self.drag_over_class, hovering)
    }

    fn replace_selection(&mut self, file: &BrowserFile) -> Result<(), HostError> {
        // A file input's list is read-only; a fresh transfer owns a writable one.
        let transfer = DataTransfer::new().map_err(|error| HostError::operation("new DataTransfer", describe(&error)))?;
        transfer
            .items()
            .add_with_file(&file.0)
            .map_err(|error| HostError::operation("DataTransferItemList.add", describe(&error)))?;
        self.file_input.set_files(transfer.files().as_ref());
        Ok(())
    }
}
