#![cfg(target_arch = "wasm32")]

use frontend::domain::Page;
use frontend::shared::callbacks::CallbackRegistry;
use frontend::shared::dom;
use frontend::shared::form::controller::field_wrapper;
use frontend::shared::form::{decode_response, state, FormController, SubmitState};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

const JSON: Option<&str> = Some("application/json");

/// Test markup lives in a `<section>` so no `div` encloses it.
fn render(html: &str) {
    let fixture = dom::query("section#fixture").unwrap_or_else(|| {
        let doc = dom::document().unwrap();
        let section = doc.create_element("section").unwrap();
        section.set_id("fixture");
        doc.body().unwrap().append_child(&section).unwrap();
        section
    });
    fixture.set_inner_html(html);
}

fn form(selector: &str) -> HtmlFormElement {
    dom::query(selector).unwrap().dyn_into::<HtmlFormElement>().unwrap()
}

fn el(selector: &str) -> Element {
    dom::query(selector).unwrap_or_else(|| panic!("no {}", selector))
}

const ORDER_FORM: &str = r#"
<form id="order" action="/order">
  <div class="form-group"><label>Quantity <input name="quantity" value="-1"></label></div>
  <div class="form-group"><input name="remark" value=""></div>
  <div class="actions"><button type="submit" data-loading-text="Saving...">Save</button></div>
</form>
"#;

#[wasm_bindgen_test]
fn rejected_submit_marks_fields_and_restores_button() {
    render(ORDER_FORM);
    let order = form("#order");
    let button = el("#order button");

    state::begin(&order).unwrap();
    dom::set_busy(&button);
    assert_eq!(button.inner_html(), "Saving...");
    assert!(button.has_attribute("disabled"));

    let controller = FormController::new(CallbackRegistry::new(), 0);
    controller.complete(
        &order,
        Some(&button),
        decode_response(
            400,
            JSON,
            r#"{"error":"Invalid data","details":{"quantity":"Must be positive"}}"#,
        ),
    );

    let wrapper = el("#order .form-group");
    assert!(wrapper.class_list().contains("has-error"));
    assert!(!el("#order label").class_list().contains("has-error"));
    let message = el("#order .form-group > p.text-danger.form-feedback");
    assert_eq!(dom::text(&message), "Must be positive");
    assert_eq!(dom::query_all("#order .has-error").len(), 1);

    let banner = el("#order .actions .form-feedback");
    assert_eq!(dom::text(&banner), "Invalid data");

    assert_eq!(button.inner_html(), "Save");
    assert!(!button.has_attribute("disabled"));
    assert_eq!(
        SubmitState::from_attr(order.get_attribute(state::STATE_ATTR).as_deref()),
        SubmitState::Idle
    );
}

#[wasm_bindgen_test]
fn server_fault_shows_banner_without_field_errors() {
    render(ORDER_FORM);
    let order = form("#order");
    let button = el("#order button");
    state::begin(&order).unwrap();

    let controller = FormController::new(CallbackRegistry::new(), 0);
    controller.complete(
        &order,
        Some(&button),
        decode_response(500, JSON, r#"{"error":"boom","details":{"quantity":"x"}}"#),
    );

    assert!(dom::query("#order .has-error").is_none());
    let banner = el("#order .actions .form-feedback");
    assert!(dom::text(&banner).contains("500"));
}

#[wasm_bindgen_test]
fn wrapper_is_the_enclosing_div() {
    render(ORDER_FORM);
    let quantity = el("input[name=quantity]");
    assert_eq!(field_wrapper(&quantity).unwrap().class_name(), "form-group");

    render(r#"<table><tr><td><input name="loose"></td></tr></table>"#);
    assert!(field_wrapper(&el("input[name=loose]")).is_none());
}

#[wasm_bindgen_test]
fn update_article_replaces_item_and_closes_modal() {
    render(
        r#"
<div class="modal-backdrop"></div>
<div id="action_modal" class="modal in" style="display: block">
  <form id="edit" action="/edit" data-form-callback="updateArticle">
    <div class="footer"><button type="submit">Save</button></div>
  </form>
</div>
<div id="item-list"><div class="item-div" id="item-7">old</div></div>
"#,
    );
    let body = dom::document().unwrap().body().unwrap();
    body.class_list().add_1("modal-open").unwrap();

    let controller = FormController::new(Page::Inventory.callbacks(), 0);
    controller.complete(
        &form("#edit"),
        Some(&el("#edit button")),
        decode_response(
            200,
            JSON,
            r#"{"success":"Saved","id":7,"content":"<div class=\"item-div\" id=\"item-7\">new</div>"}"#,
        ),
    );

    assert_eq!(dom::text(&el("#item-7")), "new");
    assert_eq!(dom::query_all("#item-7").len(), 1);

    let modal = el("#action_modal");
    assert!(!modal.class_list().contains("in"));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));
    let display = modal
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap();
    assert_eq!(display, "none");
    assert!(dom::query(".modal-backdrop").is_none());
    assert!(!body.class_list().contains("modal-open"));

    assert_eq!(dom::text(&el("#edit .footer .form-feedback")), "Saved");
}

#[wasm_bindgen_test]
async fn error_banner_expires_after_ttl() {
    render(ORDER_FORM);
    let order = form("#order");
    state::begin(&order).unwrap();

    let controller = FormController::new(CallbackRegistry::new(), 20);
    controller.complete(
        &order,
        Some(&el("#order button")),
        decode_response(400, JSON, r#"{"error":"Invalid data"}"#),
    );
    assert!(dom::query("#order .actions .form-feedback").is_some());

    TimeoutFuture::new(100).await;
    assert!(dom::query("#order .actions .form-feedback").is_none());
}
