//! Thin helpers over `web_sys` used by the page bindings.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

const RESET_TEXT_ATTR: &str = "data-reset-text";
const LOADING_TEXT_ATTR: &str = "data-loading-text";
const DEFAULT_LOADING_TEXT: &str = "Loading...";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok()?
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Some(doc) => match doc.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok()?
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(_) => Vec::new(),
    }
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not listen to `{}`", event);
    }
    closure.forget();
}

/// Document level listener firing for events whose target sits inside
/// an element matching `selector`; the handler gets that element.
pub fn delegate<F>(event: &str, selector: &'static str, mut handler: F)
where
    F: FnMut(Event, Element) + 'static,
{
    let Some(doc) = document() else { return };
    on(&doc, event, move |ev: Event| {
        let matched = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(selector).ok().flatten());
        if let Some(el) = matched {
            handler(ev, el);
        }
    });
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_visible(el: &Element, visible: bool) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.set_hidden(!visible);
    }
}

pub fn is_visible(el: &Element) -> bool {
    el.dyn_ref::<HtmlElement>().map_or(true, |el| !el.hidden())
}

pub fn set_input_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

pub fn append_html(el: &Element, html: &str) {
    if let Err(err) = el.insert_adjacent_html("beforeend", html) {
        log::error!("insert failed: {:?}", err);
    }
}

/// Swap a button into its loading label and disable it.
pub fn set_busy(button: &Element) {
    if button.get_attribute(RESET_TEXT_ATTR).is_none() {
        let _ = button.set_attribute(RESET_TEXT_ATTR, &button.inner_html());
    }
    let label = button
        .get_attribute(LOADING_TEXT_ATTR)
        .unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_string());
    button.set_inner_html(&label);
    let _ = button.set_attribute("disabled", "disabled");
    let _ = button.class_list().add_1("disabled");
}

/// Undo [`set_busy`].
pub fn reset_busy(button: &Element) {
    if let Some(label) = button.get_attribute(RESET_TEXT_ATTR) {
        button.set_inner_html(&label);
        let _ = button.remove_attribute(RESET_TEXT_ATTR);
    }
    let _ = button.remove_attribute("disabled");
    let _ = button.class_list().remove_1("disabled");
}

pub fn remove_all_in(root: &Element, selector: &str) {
    for el in query_all_in(root, selector) {
        el.remove();
    }
}
