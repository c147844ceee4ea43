//! Inventory list (equipment, rescue bag, first aid kits).

mod callbacks;

use crate::shared::actions;
use crate::shared::callbacks::{CallbackId, CallbackRegistry};
use crate::shared::filter::dom::{ChecklistSelectors, FilterSelectors, ListFilter, TagControl};

pub const ACTION_MODAL: &str = "#action_modal";
pub const LOCATION_MODAL: &str = "#location_add_modal";
pub const ITEM_LIST: &str = "#item-list";

pub const FILTERS: FilterSelectors = FilterSelectors {
    list: ITEM_LIST,
    fragment: ".item-div",
    group_container: Some(".group-div"),
    name_input: "#filter-input",
    name_label: "h4",
    group_select: Some("#filter-group-select"),
    group_label: "h3.group",
    tag: Some(TagControl::Button("#filter-tag")),
    tag_label: ".item-tag",
    location_select: Some("#filter-location-select"),
    location_label: ".location",
    checklist: Some(ChecklistSelectors {
        reset: "input[name=allowance-0]",
        boxes: "input.filter-check",
    }),
    reset: Some("#filter-reset"),
};

pub fn callbacks() -> CallbackRegistry {
    CallbackRegistry::new()
        .with(CallbackId::UpdateArticle, callbacks::update_article)
        .with(CallbackId::UpdateRemark, callbacks::update_remark)
        .with(CallbackId::UpdateList, callbacks::update_list)
        .with(CallbackId::AddLocation, callbacks::add_location)
}

pub fn boot() {
    ListFilter::install(FILTERS);
    actions::install_delete("tr");
}
