//! Closing the Bootstrap modals rendered by the server.

use crate::shared::dom;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Hide the modal matching `selector` and drop its backdrop.
pub fn hide(selector: &str) {
    let Some(modal) = dom::query(selector) else {
        log::debug!("modal {} not on this page", selector);
        return;
    };
    let _ = modal.class_list().remove_2("in", "show");
    let _ = modal.set_attribute("aria-hidden", "true");
    if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
        let _ = modal.style().set_property("display", "none");
    }

    for backdrop in dom::query_all(".modal-backdrop") {
        backdrop.remove();
    }
    if let Some(body) = dom::document().and_then(|doc| doc.body()) {
        let _ = body.class_list().remove_1("modal-open");
        let _ = body.style().remove_property("padding-right");
    }
}
