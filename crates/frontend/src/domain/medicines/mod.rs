//! Medicine and drug inventories. Both pages render articles grouped in
//! `div.group_div` with a collapsible detail panel; label classes, the
//! allowance checkbox name and the panel classes differ.

mod accordion;
mod callbacks;

pub use accordion::{Accordion, MoreFilters};

use crate::shared::callbacks::{CallbackId, CallbackRegistry};
use crate::shared::dom;
use crate::shared::filter::dom::{ChecklistSelectors, FilterSelectors, ListFilter, TagControl};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Everything a medicine-like list page binds at boot.
#[derive(Debug, Clone, Copy)]
pub struct ArticlePage {
    pub filters: FilterSelectors,
    pub accordion: Accordion,
    pub more_filters: Option<MoreFilters>,
}

pub const MEDICINE_FILTERS: FilterSelectors = FilterSelectors {
    list: "#articles",
    fragment: "article",
    group_container: Some("div.group_div"),
    name_input: "#filterinput",
    name_label: "ul.inn_list>li.medicine_inn",
    group_select: Some("#filterselect"),
    group_label: "h2",
    tag: Some(TagControl::Checkbox("#filtertag")),
    tag_label: "p.medicine_tag",
    location_select: Some("#filterlocation"),
    location_label: "td.location",
    checklist: Some(ChecklistSelectors {
        reset: "input[name=allowance-0]",
        boxes: "input.filtercheck",
    }),
    reset: Some("#reset_input"),
};

pub const DRUG_FILTERS: FilterSelectors = FilterSelectors {
    name_label: "ul.inn_list>li",
    group_label: "p.drug_group",
    tag_label: "p.drug_group",
    location_label: "li.drug_location",
    checklist: Some(ChecklistSelectors {
        reset: "input[name=dotation-0]",
        boxes: "input.filtercheck",
    }),
    ..MEDICINE_FILTERS
};

pub const MEDICINES: ArticlePage = ArticlePage {
    filters: MEDICINE_FILTERS,
    accordion: Accordion {
        header: ".medicine_inn_header",
        panel: "div.medicine_more",
        active_class: "active",
    },
    more_filters: Some(MoreFilters {
        link: "#advanced_filter",
        panel: "div#filter_more",
    }),
};

pub const DRUGS: ArticlePage = ArticlePage {
    filters: DRUG_FILTERS,
    accordion: Accordion {
        header: ".drug_inn_header",
        panel: "div.drug_more",
        active_class: "yellow",
    },
    more_filters: None,
};

pub fn callbacks() -> CallbackRegistry {
    CallbackRegistry::new().with(CallbackId::ReloadArticle, callbacks::reload_article)
}

pub fn boot(page: ArticlePage) {
    ListFilter::install(page.filters);
    page.accordion.install();
    if let Some(more) = page.more_filters {
        more.install();
    }
    if let Some(input) = dom::query(page.filters.name_input)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = input.focus();
    }
}
