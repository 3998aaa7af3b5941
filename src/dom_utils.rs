//! Thin helper layer for repetitive DOM construction.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::messages::Message;
use crate::state::dispatch_global_message;

// Listeners attached to the current view. Dropped when the view is rebuilt
// so every render does not leak its closures.
thread_local! {
    static VIEW_LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = RefCell::new(Vec::new());
}

/// Create `<tag class="...">` with optional text content.
pub fn element(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

/// `<p><strong>{label}:</strong> {value}</p>`
pub fn labelled_line(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let p = document.create_element("p")?;
    let strong = element(document, "strong", "", Some(&format!("{}:", label)))?;
    p.append_child(&strong)?;
    p.append_child(&document.create_text_node(&format!(" {}", value)))?;
    Ok(p)
}

/// Dispatch the message built by `to_msg` whenever `el` fires `event`.
pub fn on_event<F>(el: &Element, event: &str, to_msg: F) -> Result<(), JsValue>
where
    F: Fn(&Event) -> Option<Message> + 'static,
{
    let cb = Closure::wrap(Box::new(move |e: Event| {
        if let Some(msg) = to_msg(&e) {
            dispatch_global_message(msg);
        }
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    VIEW_LISTENERS.with(|listeners| listeners.borrow_mut().push(cb));
    Ok(())
}

/// Take the listeners of the view about to be replaced. The caller drops
/// them once the old nodes are detached.
pub fn take_view_listeners() -> Vec<Closure<dyn FnMut(Event)>> {
    VIEW_LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()))
}

pub fn view_listener_count() -> usize {
    VIEW_LISTENERS.with(|listeners| listeners.borrow().len())
}

/// Click handler dispatching a fixed message.
pub fn on_click(el: &Element, msg: Message) -> Result<(), JsValue> {
    on_event(el, "click", move |_| Some(msg.clone()))
}

/// Value of `attr` on the closest ancestor of the event target matching
/// `selector`, for handlers delegated to a container.
pub fn closest_attribute(event: &Event, selector: &str, attr: &str) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .and_then(|el| el.get_attribute(attr))
}

/// Current value of the `<input>` that fired `event`.
pub fn input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Current value of the `<select>` that fired `event`.
pub fn select_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

/// Build an `<input>` with type, value and optional `required`.
pub fn input(document: &Document, kind: &str, value: &str, required: bool) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type(kind);
    input.set_value(value);
    input.set_required(required);
    Ok(input)
}

/// Disable a button while a request is in flight.
pub fn set_busy(button: &Element, busy: bool) {
    if let Some(btn) = button.dyn_ref::<HtmlElement>() {
        if busy {
            let _ = btn.set_attribute("disabled", "true");
            let _ = btn.class_list().add_1("busy");
        } else {
            let _ = btn.remove_attribute("disabled");
            let _ = btn.class_list().remove_1("busy");
        }
    }
}
