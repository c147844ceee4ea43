use super::{ACTION_MODAL, ITEM_LIST, LOCATION_MODAL};
use crate::shared::callbacks::{CallbackContext, CallbackError};
use crate::shared::filter::dom::ListFilter;
use crate::shared::form::feedback::FEEDBACK_CLASS;
use crate::shared::{dom, modal};
use contracts::domain::inventory::{ArticleUpdate, LocationAdded, RemarkUpdate};

fn element(id: String) -> Result<web_sys::Element, CallbackError> {
    dom::by_id(&id).ok_or(CallbackError::MissingElement(id))
}

fn refilter() {
    if let Some(filter) = ListFilter::current() {
        filter.refresh();
    }
}

/// Swap the edited item for its new rendering.
pub fn update_article(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let update: ArticleUpdate = ctx.payload()?;
    element(format!("item-{}", update.id))?.set_outer_html(&update.content);
    modal::hide(ACTION_MODAL);
    refilter();
    Ok(())
}

pub fn update_remark(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let update: RemarkUpdate = ctx.payload()?;
    element(format!("remark-{}", update.id))?.set_inner_html(&update.content);
    modal::hide(ACTION_MODAL);
    Ok(())
}

/// The whole list comes back re-rendered, e.g. after an allowance change.
pub fn update_list(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let html = ctx
        .body
        .html()
        .ok_or_else(|| CallbackError::Dom("no markup in answer".to_string()))?;
    dom::query(ITEM_LIST)
        .ok_or_else(|| CallbackError::MissingElement(ITEM_LIST.to_string()))?
        .set_outer_html(html);
    refilter();
    Ok(())
}

pub fn add_location(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let added: LocationAdded = ctx.payload()?;
    let table = ".location-table > tbody";
    let body = dom::query(table).ok_or_else(|| CallbackError::MissingElement(table.to_string()))?;
    dom::append_html(&body, &added.location);

    modal::hide(LOCATION_MODAL);
    for input in dom::query_all(".modal-body input") {
        dom::set_input_value(&input, "");
    }
    for el in dom::query_all(&format!(".{}", FEEDBACK_CLASS)) {
        el.remove();
    }
    Ok(())
}
