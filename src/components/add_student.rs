//! Add-student form.
//!
//! Field edits are pushed into `AppState::add_form` as the user types; the
//! view is only rebuilt when something else on the form depends on the edit
//! (the grade decides whether the boarding fee is editable).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlOptionElement, HtmlSelectElement};

use crate::dom_utils::{self, element};
use crate::forms::AddStudentForm;
use crate::messages::Message;
use crate::models::Grade;
use crate::storage::ActiveView;

pub fn render(document: &Document, form: &AddStudentForm, grades: &[Grade]) -> Result<Element, JsValue> {
    let wrapper = element(document, "div", "add-student", None)?;
    let container = element(document, "div", "form-container", None)?;
    wrapper.append_child(&container)?;

    let back = element(document, "button", "back-btn", Some("Back to Dashboard"))?;
    back.set_attribute("type", "button")?;
    dom_utils::on_click(&back, Message::ShowView(ActiveView::Dashboard))?;
    container.append_child(&back)?;

    container.append_child(&*element(document, "h2", "", Some("Add Student"))?)?;
    if let Some(message) = &form.message {
        container.append_child(&*element(document, "p", "message", Some(message))?)?;
    }

    let form_el = document.create_element("form")?;
    form_el.set_id("add-student-form");
    dom_utils::on_event(&form_el, "submit", |e| {
        e.prevent_default();
        Some(Message::SubmitNewStudent)
    })?;

    // Name
    let name = dom_utils::input(document, "text", &form.name, true)?;
    name.set_id("student-name");
    dom_utils::on_event(&name, "input", |e| dom_utils::input_value(e).map(Message::SetStudentName))?;
    form_el.append_child(&*form_group(document, "Name:", &name)?)?;

    // Admission number
    let adm = dom_utils::input(document, "text", &form.admission_number, true)?;
    adm.set_id("admission-number");
    dom_utils::on_event(&adm, "input", |e| {
        dom_utils::input_value(e).map(Message::SetAdmissionNumber)
    })?;
    form_el.append_child(&*form_group(document, "Admission Number:", &adm)?)?;

    // Grade
    let select = grade_select(document, &form.grade, grades)?;
    form_el.append_child(&*form_group(document, "Grade:", &select)?)?;

    // Bus
    let bus_group = element(document, "div", "form-group", None)?;
    let bus_label = document.create_element("label")?;
    let bus = dom_utils::input(document, "checkbox", "", false)?;
    bus.set_id("use-bus");
    bus.set_checked(form.use_bus);
    dom_utils::on_event(&bus, "change", |_| Some(Message::ToggleUseBus))?;
    bus_label.append_child(&bus)?;
    bus_label.append_child(&document.create_text_node(" Will use bus"))?;
    bus_group.append_child(&bus_label)?;
    form_el.append_child(&bus_group)?;

    // Boarding fee, fixed for boarding grades
    let fee = dom_utils::input(document, "number", &form.boarding_fee, false)?;
    fee.set_id("boarding-fee");
    fee.set_min("0");
    fee.set_disabled(form.is_boarding);
    dom_utils::on_event(&fee, "input", |e| dom_utils::input_value(e).map(Message::SetBoardingFee))?;
    let fee_group = form_group(document, "Boarding Fee:", &fee)?;
    if form.is_boarding {
        fee_group.append_child(&*element(document, "small", "hint", Some("Fixed for boarding grades"))?)?;
    }
    form_el.append_child(&fee_group)?;

    let submit = element(document, "button", "submit-btn", Some("Add Student"))?;
    submit.set_attribute("type", "submit")?;
    dom_utils::set_busy(&submit, form.submitting);
    form_el.append_child(&submit)?;

    container.append_child(&form_el)?;
    Ok(wrapper)
}

fn form_group(document: &Document, label: &str, control: &Element) -> Result<Element, JsValue> {
    let group = element(document, "div", "form-group", None)?;
    let label_el = element(document, "label", "", Some(label))?;
    if !control.id().is_empty() {
        label_el.set_attribute("for", &control.id())?;
    }
    group.append_child(&label_el)?;
    group.append_child(control)?;
    Ok(group)
}

fn grade_select(document: &Document, selected: &str, grades: &[Grade]) -> Result<Element, JsValue> {
    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_id("grade");
    select.set_required(true);

    let placeholder: HtmlOptionElement = document.create_element("option")?.dyn_into()?;
    placeholder.set_value("");
    placeholder.set_text("Select grade");
    placeholder.set_disabled(true);
    select.append_child(&placeholder)?;

    for grade in grades {
        let option: HtmlOptionElement = document.create_element("option")?.dyn_into()?;
        option.set_value(&grade.grade);
        option.set_text(&grade.grade);
        option.set_attribute("data-grade-id", &grade.id.to_string())?;
        select.append_child(&option)?;
    }
    select.set_value(selected);

    dom_utils::on_event(&select, "change", |e| dom_utils::select_value(e).map(Message::SelectGrade))?;
    Ok(select.into())
}
