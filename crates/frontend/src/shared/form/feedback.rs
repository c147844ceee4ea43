//! Feedback markup rendered next to forms and action links.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

/// Marker class of everything this module renders; cleared before a new
/// submission.
pub const FEEDBACK_CLASS: &str = "form-feedback";
pub const FIELD_ERROR_CLASS: &str = "has-error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    fn class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "text-success form-feedback",
            FeedbackKind::Error => "text-danger form-feedback",
        }
    }
}

#[component]
pub fn StatusMessage(kind: FeedbackKind, message: String) -> impl IntoView {
    view! {
        <span class=kind.class()>
            <b>{message}</b>
        </span>
    }
}

#[component]
pub fn FieldMessage(message: String) -> impl IntoView {
    view! { <p class="text-danger form-feedback">{message}</p> }
}

/// Append a view at the end of `parent` and return its root element.
pub fn mount_into<F, N>(parent: &Element, view: F) -> Option<Element>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let parent = parent.clone().dyn_into::<HtmlElement>().ok()?;
    leptos::mount::mount_to(parent.clone(), view).forget();
    parent.last_element_child()
}

/// Show the global message of an operation at the end of `container`.
///
/// The banner goes away after `ttl_ms`, or at the next submission when
/// `ttl_ms` is `0`.
pub fn show_status(container: &Element, kind: FeedbackKind, message: String, ttl_ms: u32) {
    let rendered = mount_into(container, move || view! { <StatusMessage kind=kind message=message/> });
    if let (Some(el), true) = (rendered, ttl_ms > 0) {
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            el.remove();
        });
    }
}

/// Flag the control wrapper as invalid and explain why.
pub fn show_field_error(wrapper: &Element, message: String) {
    let _ = wrapper.class_list().add_1(FIELD_ERROR_CLASS);
    mount_into(wrapper, move || view! { <FieldMessage message=message/> });
}

/// Remove previous feedback inside `root`.
pub fn clear(root: &Element) {
    crate::shared::dom::remove_all_in(root, &format!(".{}", FEEDBACK_CLASS));
    for el in crate::shared::dom::query_all_in(root, &format!(".{}", FIELD_ERROR_CLASS)) {
        let _ = el.class_list().remove_1(FIELD_ERROR_CLASS);
    }
}
