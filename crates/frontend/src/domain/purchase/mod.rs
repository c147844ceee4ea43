//! Purchase requisition page: inline quantity edits, item search and
//! status changes.

mod callbacks;

use crate::shared::accent;
use crate::shared::callbacks::{CallbackContext, CallbackId, CallbackRegistry};
use crate::shared::form::body::{form_body, FormBody};
use crate::shared::form::feedback::{self, mount_into, FeedbackKind};
use crate::shared::form::{decode_response, state, SubmitError};
use crate::shared::{actions, api_utils, dom};
use crate::system::config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

pub const ACTION_MODAL: &str = "#action_modal";
pub const ITEM_LIST: &str = ".ps-scroll-items";
pub const ITEM: &str = ".ps-item";
pub const ITEM_NAME: &str = ".ps-item-name";

const QTY_FIELD: &str = ".update-on-focus";
const QTY_FIELD_PREFIX: &str = "item_qty-";
const UPDATE_FORM: &str = "#update-form";
const NEW_ITEM_SUBMIT: &str = ".item_submit";
const NEW_ITEM_FORM: &str = "form[name=new_item]";

pub fn callbacks() -> CallbackRegistry {
    CallbackRegistry::new()
        .with(CallbackId::UpdateName, callbacks::update_name)
        .with(CallbackId::UpdateStatus, callbacks::update_status)
        .with(CallbackId::Redirect, callbacks::redirect)
        .with(CallbackId::QuantityFeedback, callbacks::quantity_feedback)
        .with(CallbackId::ItemAdd, callbacks::item_add)
}

pub fn boot() {
    actions::install_delete(".row");

    dom::delegate("focusout", QTY_FIELD, |_, field| send_quantity(field));

    dom::delegate("click", NEW_ITEM_SUBMIT, |ev, _| {
        ev.prevent_default();
        let Some(form) = form(NEW_ITEM_FORM) else {
            log::warn!("missing {}", NEW_ITEM_FORM);
            return;
        };
        let name = dom::query("input[name=new_item_name]")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        if let Some(target) = dom::query_in(&form, "input[name=object_id]") {
            dom::set_input_value(&target, &name);
        }
        let _ = form.request_submit();
    });
}

/// Item id encoded in a quantity field name, `item_qty-<id>`.
pub fn item_id_from_field(name: &str) -> Option<&str> {
    name.strip_prefix(QTY_FIELD_PREFIX).filter(|id| !id.is_empty())
}

/// Positions of `names` in case and accent insensitive order.
pub fn sorted_positions<S: AsRef<str>>(names: &[S]) -> Vec<usize> {
    let keys: Vec<String> = names.iter().map(|n| accent::fold(n.as_ref().trim())).collect();
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by(|a, b| keys[*a].cmp(&keys[*b]));
    order
}

fn form(selector: &str) -> Option<HtmlFormElement> {
    dom::query(selector)?.dyn_into::<HtmlFormElement>().ok()
}

#[component]
fn QuantityFeedbackButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-link qty-feedback"
            data-loading-text="<span class='glyphicon glyphicon-refresh spinning'></span>"
        ></button>
    }
}

/// One quantity change, captured from `#update-form` when its field lost
/// focus.
pub struct QuantityEdit {
    pub form: HtmlFormElement,
    pub body: FormBody,
    /// Busy button shown in the row until the answer arrives.
    pub spinner: Option<Element>,
}

fn row_actions(field: &Element) -> Option<Element> {
    field
        .closest("div.row")
        .ok()
        .flatten()
        .and_then(|row| dom::query_in(&row, ".actions"))
}

/// Snapshot the body for `field` and start its own submission.
///
/// Each field is a separate single flight: editing another line while
/// this one is posting is allowed, editing the same line again is refused
/// with [`SubmitError::InFlight`].
pub fn prepare_quantity(field: &Element) -> Result<QuantityEdit, SubmitError> {
    let input = field
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| SubmitError::Form("not an input".to_string()))?;
    let name = input.name();
    let id = item_id_from_field(&name)
        .ok_or_else(|| SubmitError::Form(format!("unexpected field name `{}`", name)))?;
    let form = form(UPDATE_FORM).ok_or_else(|| SubmitError::Form(format!("missing {}", UPDATE_FORM)))?;

    state::begin(field)?;

    if let Some(target) = dom::query_in(&form, "input[name=item_id]") {
        dom::set_input_value(&target, id);
    }
    if let Some(target) = dom::query_in(&form, "input[name=item_qty]") {
        dom::set_input_value(&target, &input.value());
    }
    let body = match form_body(&form) {
        Ok(body) => body,
        Err(err) => {
            state::finish(field);
            return Err(SubmitError::Form(format!("{:?}", err)));
        }
    };

    let spinner = row_actions(field).and_then(|actions| {
        if let Some(old) = dom::query_in(&actions, ".qty-feedback") {
            old.remove();
        }
        mount_into(&actions, QuantityFeedbackButton)
    });
    if let Some(spinner) = &spinner {
        dom::set_busy(spinner);
    }

    Ok(QuantityEdit { form, body, spinner })
}

fn send_quantity(field: Element) {
    let ttl_ms = AppConfig::current().feedback_ttl_ms;
    let edit = match prepare_quantity(&field) {
        Ok(edit) => edit,
        Err(err) => {
            log::warn!("quantity not sent: {}", err);
            if let Some(actions) = row_actions(&field) {
                feedback::show_status(&actions, FeedbackKind::Error, err.to_string(), ttl_ms);
            }
            return;
        }
    };

    spawn_local(async move {
        let QuantityEdit { form, body, spinner } = edit;
        let result = api_utils::post(&form.action(), body)
            .await
            .and_then(|raw| decode_response(raw.status, raw.content_type.as_deref(), &raw.body));
        state::finish(&field);

        match result {
            Ok(body) => {
                if let Err(err) = callbacks::quantity_feedback(&CallbackContext { form: &form, body: &body }) {
                    log::error!("quantity feedback: {}", err);
                }
            }
            Err(err) => {
                log::error!("{}: {:?}", form.action(), err);
                if let Some(actions) = row_actions(&field) {
                    feedback::show_status(&actions, FeedbackKind::Error, err.to_string(), ttl_ms);
                }
            }
        }
        if let Some(spinner) = spinner.filter(|s| s.has_attribute("disabled")) {
            dom::reset_busy(&spinner);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_is_taken_after_prefix() {
        assert_eq!(item_id_from_field("item_qty-42"), Some("42"));
        assert_eq!(item_id_from_field("item_qty-"), None);
        assert_eq!(item_id_from_field("quantity"), None);
    }

    #[test]
    fn items_sort_without_accents_or_case() {
        let names = ["Éther", "aspirine", "Bandage", "  zinc"];
        assert_eq!(sorted_positions(&names), vec![1, 2, 0, 3]);
    }

    #[test]
    fn registry_covers_requisition_forms() {
        let registry = callbacks();
        assert_eq!(registry.len(), 5);
        assert!(registry.contains(CallbackId::QuantityFeedback));
        assert!(!registry.contains(CallbackId::ImportLog));
    }
}
