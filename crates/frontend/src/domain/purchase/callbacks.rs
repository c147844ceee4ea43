use super::{sorted_positions, ACTION_MODAL, ITEM, ITEM_LIST, ITEM_NAME};
use crate::shared::callbacks::{CallbackContext, CallbackError};
use crate::shared::form::feedback::FEEDBACK_CLASS;
use crate::shared::{dom, modal};
use contracts::domain::purchase::{ItemAdded, QuantityFeedback, Redirect, RequisitionName, RequisitionStatus};
use web_sys::Element;

fn required(selector: &str) -> Result<Element, CallbackError> {
    dom::query(selector).ok_or_else(|| CallbackError::MissingElement(selector.to_string()))
}

pub fn update_name(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let renamed: RequisitionName = ctx.payload()?;
    required("#requisition-name")?.set_inner_html(&renamed.name);
    modal::hide(ACTION_MODAL);
    Ok(())
}

/// Refresh the status label; past the draft stage the delete menu goes away.
pub fn update_status(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let status: RequisitionStatus = ctx.payload()?;
    required("#requisition-status")?.set_inner_html(&status.status);
    for menu in dom::query_all(".requisition-dropdown") {
        let _ = menu.class_list().toggle_with_force("hidden", status.is_locked());
    }
    modal::hide(ACTION_MODAL);
    Ok(())
}

pub fn redirect(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let target: Redirect = ctx.payload()?;
    let window = web_sys::window().ok_or_else(|| CallbackError::Dom("no window".to_string()))?;
    window
        .location()
        .set_href(&target.url)
        .map_err(|err| CallbackError::Dom(format!("{:?}", err)))
}

/// Turn the spinner of the edited line into a confirmation mark.
pub fn quantity_feedback(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let feedback: QuantityFeedback = ctx.payload()?;
    if feedback.success.is_none() {
        return Ok(());
    }
    let id = format!("item-{}", feedback.id);
    let row = dom::by_id(&id).ok_or(CallbackError::MissingElement(id))?;
    if let Some(button) = dom::query_in(&row, ".qty-feedback") {
        let _ = button.set_attribute("data-reset-text", "<span class='glyphicon glyphicon-ok'></span>");
        dom::reset_busy(&button);
        let _ = button.class_list().add_1(FEEDBACK_CLASS);
    }
    Ok(())
}

/// Insert the new line and keep the list alphabetical.
pub fn item_add(ctx: &CallbackContext<'_>) -> Result<(), CallbackError> {
    let added: ItemAdded = ctx.payload()?;
    let list = required(ITEM_LIST)?;
    dom::append_html(&list, &added.content);

    let items = dom::query_all_in(&list, ITEM);
    let names: Vec<String> = items
        .iter()
        .map(|item| dom::query_in(item, ITEM_NAME).map(|el| dom::text(&el)).unwrap_or_default())
        .collect();
    for position in sorted_positions(&names) {
        list.append_child(&items[position])
            .map_err(|err| CallbackError::Dom(format!("{:?}", err)))?;
    }
    Ok(())
}
