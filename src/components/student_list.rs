//! Student list: one clickable card per student, filtered by the search box.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CARD_NAME_MAX_GRAPHEMES;
use crate::dom_utils::{self, element, labelled_line};
use crate::messages::Message;
use crate::models::Student;
use crate::state::AppState;
use crate::utils::{format_amount, format_refreshed_at, initials, truncate_text};

pub const CARDS_ID: &str = "student-cards";

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let container = element(document, "div", "student-list-container", None)?;
    container.append_child(&*super::header::render(document, state.session.role)?)?;
    container.append_child(&*element(document, "h2", "", Some("Student List"))?)?;

    let search = dom_utils::input(document, "search", &state.search_query, false)?;
    search.set_id("student-search");
    search.set_placeholder("Search by name or admission number");
    dom_utils::on_event(&search, "input", |e| {
        dom_utils::input_value(e).map(Message::UpdateSearch)
    })?;
    container.append_child(&search)?;

    let status = if state.students_loading {
        Some("Loading students...".to_string())
    } else {
        state.last_loaded_at.as_ref().map(format_refreshed_at)
    };
    if let Some(text) = status {
        container.append_child(&*element(document, "p", "list-status", Some(&text))?)?;
    }

    if let Some(error) = &state.students_error {
        container.append_child(&*element(document, "p", "error-message", Some(error))?)?;
    }

    let cards = element(document, "div", "student-list", None)?;
    cards.set_id(CARDS_ID);
    // One handler for every card, so refreshing the cards attaches nothing
    dom_utils::on_event(&cards, "click", |e| {
        dom_utils::closest_attribute(e, ".student-card", "data-student-id")
            .and_then(|id| id.parse::<u32>().ok())
            .map(Message::SelectStudent)
    })?;
    fill_cards(document, &cards, state)?;
    container.append_child(&cards)?;

    Ok(container)
}

/// Re-render only the cards, leaving the search box untouched.
pub fn refresh_cards(document: &Document, state: &AppState) -> Result<(), JsValue> {
    if let Some(cards) = document.get_element_by_id(CARDS_ID) {
        cards.set_inner_html("");
        fill_cards(document, &cards, state)?;
    }
    Ok(())
}

fn fill_cards(document: &Document, cards: &Element, state: &AppState) -> Result<(), JsValue> {
    let visible = state.visible_students();
    if visible.is_empty() && !state.students_loading && state.students_error.is_none() {
        let text = if state.students.is_empty() {
            "No students found."
        } else {
            "No students match your search."
        };
        cards.append_child(&*element(document, "p", "empty-list", Some(text))?)?;
        return Ok(());
    }
    for student in visible {
        let selected = state.selected_student_id == Some(student.id);
        cards.append_child(&*student_card(document, student, selected)?)?;
    }
    Ok(())
}

fn student_card(document: &Document, student: &Student, selected: bool) -> Result<Element, JsValue> {
    let class = if selected { "student-card selected" } else { "student-card" };
    let card = element(document, "div", class, None)?;
    card.set_attribute("data-student-id", &student.id.to_string())?;

    card.append_child(&*element(document, "span", "avatar", Some(&initials(&student.name)))?)?;

    let name = element(
        document,
        "h3",
        "",
        Some(&truncate_text(&student.name, CARD_NAME_MAX_GRAPHEMES)),
    )?;
    name.set_attribute("title", &student.name)?;
    card.append_child(&name)?;
    card.append_child(&*labelled_line(document, "Grade", student.grade_label())?)?;
    card.append_child(&*labelled_line(document, "Balance", &format_amount(student.balance))?)?;
    Ok(card)
}
