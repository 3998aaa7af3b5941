// src/views.rs
//
// Renders the active top-level view into the app root.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{add_student, dashboard};
use crate::constants::APP_ROOT_ID;
use crate::dom_utils;
use crate::state::AppState;
use crate::storage::ActiveView;

pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let root = app_root(document)?;
    let previous = dom_utils::take_view_listeners();
    root.set_inner_html("");
    drop(previous);

    let view = match state.active_view {
        ActiveView::Dashboard => dashboard::render(document, state)?,
        ActiveView::AddStudent => add_student::render(document, &state.add_form, &state.grades)?,
    };
    root.append_child(&view)?;
    Ok(())
}

/// The host page's `#app-container`, created under `<body>` when missing.
fn app_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(root) = document.get_element_by_id(APP_ROOT_ID) {
        return Ok(root);
    }
    let root = document.create_element("div")?;
    root.set_id(APP_ROOT_ID);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}
