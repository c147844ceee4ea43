//! Action links answered by the server without a form (delete buttons).

use crate::shared::api_utils;
use crate::shared::dom;
use crate::shared::form::feedback::{self, FeedbackKind};
use crate::shared::form::{decode_response, state};
use crate::system::config::AppConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

pub const DELETE_LINK: &str = ".btn-delete";

/// Delete links: GET the `href`, then drop the row holding the link.
///
/// `row` is the page specific selector of that row (`tr`, `.row`).
pub fn install_delete(row: &'static str) {
    dom::delegate("click", DELETE_LINK, move |ev: Event, link| {
        ev.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            log::warn!("delete link without href");
            return;
        };
        if let Err(err) = state::begin(&link) {
            log::warn!("{}: {}", href, err);
            return;
        }

        let container = link.parent_element();
        if let Some(container) = &container {
            feedback::clear(container);
        }
        let item = link.closest(row).ok().flatten();
        dom::set_busy(&link);

        spawn_local(async move {
            let result = api_utils::get(&href).await.and_then(|raw| {
                decode_response(raw.status, raw.content_type.as_deref(), &raw.body)
            });
            state::finish(&link);
            dom::reset_busy(&link);

            match result {
                Ok(_) => match item {
                    Some(item) => item.remove(),
                    None => log::warn!("deleted {} but no `{}` to remove", href, row),
                },
                Err(err) => {
                    log::error!("{}: {:?}", href, err);
                    if let Some(container) = &container {
                        feedback::show_status(
                            container,
                            FeedbackKind::Error,
                            err.to_string(),
                            AppConfig::current().feedback_ttl_ms,
                        );
                    }
                }
            }
        });
    });
}
