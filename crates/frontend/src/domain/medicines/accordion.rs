//! One-at-a-time detail panels of the article list, and the advanced
//! filter panel.

use crate::shared::dom;
use std::cell::Cell;
use web_sys::{Element, Event};

thread_local! {
    static CURRENT: Cell<Option<Accordion>> = const { Cell::new(None) };
}

const BRAND: &str = "small.brand";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    /// Clicking it toggles the panel of its article.
    pub header: &'static str,
    pub panel: &'static str,
    /// Class set on the first `header` of the open article.
    pub active_class: &'static str,
}

impl Accordion {
    /// Hide every panel and listen to header clicks.
    pub fn install(self) {
        for panel in dom::query_all(self.panel) {
            dom::set_visible(&panel, false);
        }
        CURRENT.with(|current| current.set(Some(self)));
        dom::delegate("click", self.header, move |_, header| {
            if let Some(article) = header.closest("article").ok().flatten() {
                self.toggle(&article);
            }
        });
    }

    pub fn current() -> Option<Self> {
        CURRENT.with(Cell::get)
    }

    /// Close every article, then open `article` unless it was the open one.
    pub fn toggle(self, article: &Element) {
        let was_closed = dom::query_in(article, self.panel).map_or(false, |panel| !dom::is_visible(&panel));
        self.collapse_all();
        if was_closed {
            self.expand(article);
        }
    }

    pub fn collapse_all(self) {
        for panel in dom::query_all(self.panel) {
            dom::set_visible(&panel, false);
        }
        for article in dom::query_all("article") {
            if let Some(header) = dom::query_in(&article, "header") {
                let _ = header.class_list().remove_1(self.active_class);
            }
        }
        for brand in dom::query_all(BRAND) {
            dom::set_visible(&brand, true);
        }
    }

    pub fn expand(self, article: &Element) {
        if let Some(header) = dom::query_in(article, "header") {
            let _ = header.class_list().add_1(self.active_class);
        }
        if let Some(panel) = dom::query_in(article, self.panel) {
            dom::set_visible(&panel, true);
        }
        if let Some(brand) = dom::query_in(article, BRAND) {
            dom::set_visible(&brand, false);
        }
    }
}

/// Link showing or hiding the extra filter controls.
#[derive(Debug, Clone, Copy)]
pub struct MoreFilters {
    pub link: &'static str,
    pub panel: &'static str,
}

const MORE_TEXT_ATTR: &str = "data-more-text";
const LESS_TEXT_ATTR: &str = "data-less-text";

impl MoreFilters {
    pub fn install(self) {
        let (Some(link), Some(panel)) = (dom::query(self.link), dom::query(self.panel)) else {
            return;
        };
        dom::set_visible(&panel, false);
        let target = link.clone();
        dom::on(&link, "click", move |ev: Event| {
            ev.prevent_default();
            let open = !dom::is_visible(&panel);
            dom::set_visible(&panel, open);
            let (attr, fallback) = if open {
                (LESS_TEXT_ATTR, "Less filters")
            } else {
                (MORE_TEXT_ATTR, "More filters")
            };
            let label = target.get_attribute(attr).unwrap_or_else(|| fallback.to_string());
            target.set_text_content(Some(&label));
        });
    }
}
