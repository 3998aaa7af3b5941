//! Details panel for the selected student.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::NO_SELECTION_TEXT;
use crate::dom_utils::{self, element, labelled_line};
use crate::forms::PaymentForm;
use crate::messages::Message;
use crate::models::Student;
use crate::utils::{format_amount, yes_no};

pub fn render(
    document: &Document,
    student: Option<&Student>,
    show_add_payment: bool,
    payment: &PaymentForm,
) -> Result<Element, JsValue> {
    let panel = element(document, "div", "student-details", None)?;

    let student = match student {
        Some(s) => s,
        None => {
            panel.append_child(&*element(document, "p", "", Some(NO_SELECTION_TEXT))?)?;
            return Ok(panel);
        }
    };

    let title = format!("Details for {}", student.name);
    panel.append_child(&*element(document, "h3", "", Some(&title))?)?;

    let close = element(document, "button", "close-details-btn", Some("Close"))?;
    dom_utils::on_click(&close, Message::ClearSelection)?;
    panel.append_child(&close)?;

    let lines = [
        ("Grade", student.grade_label().to_string()),
        ("Admission Number", student.admission_label().to_string()),
        ("Balance", format_amount(student.balance)),
        ("Arrears", format_amount(student.arrears)),
        ("Term Fee", format_amount(student.term_fee)),
        ("Uses Bus Service", yes_no(student.uses_bus()).to_string()),
        ("Bus Balance", format_amount(student.bus_balance)),
    ];
    for (label, value) in lines.iter() {
        panel.append_child(&*labelled_line(document, label, value)?)?;
    }

    if show_add_payment {
        panel.append_child(&*payment_form(document, payment)?)?;
    }

    Ok(panel)
}

fn payment_form(document: &Document, payment: &PaymentForm) -> Result<Element, JsValue> {
    let form = element(document, "div", "payment-form", None)?;

    let amount = dom_utils::input(document, "number", &payment.amount, true)?;
    amount.set_id("payment-amount");
    amount.set_placeholder("Amount");
    amount.set_min("0");
    dom_utils::on_event(&amount, "input", |e| {
        dom_utils::input_value(e).map(Message::SetPaymentAmount)
    })?;
    form.append_child(&amount)?;

    let button = element(document, "button", "add-payment-btn", Some("Add Payment"))?;
    dom_utils::set_busy(&button, payment.submitting());
    dom_utils::on_click(&button, Message::SubmitPayment)?;
    form.append_child(&button)?;

    if let Some(error) = &payment.error {
        form.append_child(&*element(document, "p", "error-message", Some(error))?)?;
    }
    if let Some(message) = &payment.message {
        form.append_child(&*element(document, "p", "message", Some(message))?)?;
    }

    Ok(form)
}
