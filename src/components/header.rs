use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom_utils::element;
use crate::roles::Role;

/// Title bar shown above the student list, with the signed-in role.
pub fn render(document: &Document, role: Role) -> Result<Element, JsValue> {
    let header = element(document, "header", "app-header", None)?;
    header.append_child(&*element(document, "h1", "app-title", Some("School Fees"))?)?;

    let badge = element(document, "span", "role-badge", Some(role.display_name()))?;
    badge.set_attribute("data-role", role.as_str())?;
    header.append_child(&badge)?;

    Ok(header)
}
