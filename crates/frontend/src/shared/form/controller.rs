use super::body::form_body;
use super::feedback::{self, FeedbackKind};
use super::response::{decode_response, ResponseBody, SubmitError};
use super::{state, CALLBACK_ATTR, ERROR_CALLBACK_ATTR};
use crate::shared::api_utils;
use crate::shared::callbacks::{CallbackContext, CallbackRegistry};
use crate::shared::dom;
use crate::system::config::AppConfig;
use contracts::forms::FormErrorPayload;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlFormElement};

const SUBMIT_BUTTON: &str = "button[type=submit]";

/// Intercepts every form submission of the document.
pub struct FormController {
    registry: CallbackRegistry,
    feedback_ttl_ms: u32,
}

impl FormController {
    pub fn new(registry: CallbackRegistry, feedback_ttl_ms: u32) -> Self {
        Self {
            registry,
            feedback_ttl_ms,
        }
    }

    pub fn install(registry: CallbackRegistry, config: &AppConfig) {
        let Some(document) = dom::document() else { return };
        log::debug!("form controller: {} callbacks", registry.len());

        let controller = Rc::new(Self::new(registry, config.feedback_ttl_ms));

        dom::on(&document, "submit", move |ev: Event| {
            let Some(form) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            let controller = Rc::clone(&controller);
            spawn_local(async move { controller.submit(form).await });
        });

        // Small "x" buttons emptying the input of their group.
        dom::delegate("click", ".input_erase", |_, button| {
            if let Some(input) = button
                .closest("div.input-group")
                .ok()
                .flatten()
                .and_then(|group| dom::query_in(&group, "input"))
            {
                dom::set_input_value(&input, "");
            }
        });
    }

    async fn submit(self: Rc<Self>, form: HtmlFormElement) {
        let url = form.action();
        if let Err(err) = state::begin(&form) {
            log::warn!("{}: {}", url, err);
            return;
        }

        feedback::clear(&form);
        let button = dom::query_in(&form, SUBMIT_BUTTON);
        if let Some(button) = &button {
            dom::set_busy(button);
        }

        let result = match form_body(&form) {
            Ok(body) => api_utils::post(&url, body).await.and_then(|raw| {
                decode_response(raw.status, raw.content_type.as_deref(), &raw.body)
            }),
            Err(err) => Err(SubmitError::Form(format!("{:?}", err))),
        };

        self.complete(&form, button.as_ref(), result);
    }

    /// Settle a submission: back to idle, button restored, answer rendered
    /// and the declared callback run.
    pub fn complete(
        &self,
        form: &HtmlFormElement,
        button: Option<&Element>,
        result: Result<ResponseBody, SubmitError>,
    ) {
        state::finish(form);
        if let Some(button) = button {
            dom::reset_busy(button);
        }

        // Messages go next to the submit button, or at the end of the form.
        let container = button
            .and_then(|b| b.parent_element())
            .unwrap_or_else(|| form.clone().into());

        match result {
            Ok(body) => self.succeeded(form, &container, body),
            Err(err) => self.failed(form, &container, err),
        }
    }

    fn succeeded(&self, form: &HtmlFormElement, container: &Element, body: ResponseBody) {
        if let Some(message) = body.success().success {
            feedback::show_status(container, FeedbackKind::Success, message, self.feedback_ttl_ms);
        }
        self.dispatch(form, CALLBACK_ATTR, &body);
    }

    fn failed(&self, form: &HtmlFormElement, container: &Element, err: SubmitError) {
        match err {
            SubmitError::Rejected { payload, raw, status } => {
                log::debug!("{} rejected ({}): {}", form.action(), status, payload.error);
                mark_fields(form, &payload);
                feedback::show_status(container, FeedbackKind::Error, payload.error, self.feedback_ttl_ms);
                self.dispatch(form, ERROR_CALLBACK_ATTR, &ResponseBody::Json(raw));
            }
            other => {
                log::error!("{}: {:?}", form.action(), other);
                feedback::show_status(
                    container,
                    FeedbackKind::Error,
                    other.to_string(),
                    self.feedback_ttl_ms,
                );
            }
        }
    }

    fn dispatch(&self, form: &HtmlFormElement, attr: &str, body: &ResponseBody) {
        let declared = form.get_attribute(attr);
        let Some((id, handler)) = self.registry.resolve(declared.as_deref()) else {
            if let Some(name) = declared {
                log::debug!("no `{}` callback on this page", name);
            }
            return;
        };
        log::debug!("form callback: {}", id);
        if let Err(err) = handler(&CallbackContext { form, body }) {
            log::error!("callback {} failed: {}", id, err);
        }
    }
}

/// Selector for the controls of a field, matched on a name fragment so
/// that prefixed formset names are found too.
pub fn field_selector(field: &str) -> String {
    let escaped = field.replace('\\', "\\\\").replace('\'', "\\'");
    format!("[name*='{}']", escaped)
}

/// The `div` holding a control; labels and table cells are skipped.
pub fn field_wrapper(input: &Element) -> Option<Element> {
    input.parent_element()?.closest("div").ok()?
}

fn mark_fields(form: &HtmlFormElement, payload: &FormErrorPayload) {
    for (field, messages) in &payload.details {
        let mut wrappers: Vec<Element> = Vec::new();
        for input in dom::query_all_in(form, &field_selector(field)) {
            let Some(wrapper) = field_wrapper(&input) else { continue };
            if !wrappers.iter().any(|w| w.is_same_node(Some(&*wrapper))) {
                wrappers.push(wrapper);
            }
        }
        if wrappers.is_empty() {
            log::debug!("no control for field `{}`", field);
        }
        for wrapper in wrappers {
            feedback::show_field_error(&wrapper, messages.joined());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::field_selector;

    #[test]
    fn plain_field() {
        assert_eq!(field_selector("quantity"), "[name*='quantity']");
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(field_selector("it's"), r"[name*='it\'s']");
        assert_eq!(field_selector(r"a\b"), r"[name*='a\\b']");
    }
}
