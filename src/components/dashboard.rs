use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::DASHBOARD_TITLE;
use crate::dom_utils::{self, element};
use crate::messages::Message;
use crate::state::AppState;
use crate::storage::ActiveView;

// Two-column dashboard: student list on the left, details on the right
pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let container = element(document, "div", "dashboard-container", None)?;
    container.set_id("dashboard-container");

    let list_section = element(document, "div", "dashboard-section", None)?;
    list_section.append_child(&*element(document, "h2", "", Some(DASHBOARD_TITLE))?)?;

    if state.session.role.can_add_students() {
        let add_btn = element(document, "button", "add-student-btn", Some("Add New Student"))?;
        add_btn.set_id("add-student-btn");
        dom_utils::on_click(&add_btn, Message::ShowView(ActiveView::AddStudent))?;
        list_section.append_child(&add_btn)?;
    }

    list_section.append_child(&*super::student_list::render(document, state)?)?;
    container.append_child(&list_section)?;

    let details_section = element(document, "div", "dashboard-section", None)?;
    details_section.set_id("details-section");
    details_section.append_child(&*super::student_details::render(
        document,
        state.selected_student(),
        state.show_add_payment(),
        &state.payment_form,
    )?)?;
    container.append_child(&details_section)?;

    Ok(container)
}
