//! Binding of the filter engine to a server-rendered list.

use super::{ActiveFilter, CategoryChecklist, FilterAxis, FilterChange, FilterState};
use crate::shared::dom::{self, on, query, query_all, query_all_in, set_visible};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

/// Space separated category keys carried by each fragment.
pub const CATEGORIES_ATTR: &str = "data-categories";
/// Key of a category checkbox; falls back to the box `value`.
pub const CATEGORY_KEY_ATTR: &str = "data-category";

thread_local! {
    static CURRENT: RefCell<Option<Rc<ListFilter>>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy)]
pub enum TagControl {
    /// Bootstrap toggle button, on while it carries the `active` class.
    /// Its text is the tag label.
    Button(&'static str),
    /// Checkbox whose value is the tag label.
    Checkbox(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ChecklistSelectors {
    /// The "all" checkbox.
    pub reset: &'static str,
    pub boxes: &'static str,
}

/// Where each control and label of a filterable list lives on a page.
#[derive(Debug, Clone, Copy)]
pub struct FilterSelectors {
    pub list: &'static str,
    pub fragment: &'static str,
    /// Wrapper holding the fragments of one group, hidden when empty.
    pub group_container: Option<&'static str>,
    pub name_input: &'static str,
    pub name_label: &'static str,
    pub group_select: Option<&'static str>,
    /// Searched in the group container when there is one.
    pub group_label: &'static str,
    pub tag: Option<TagControl>,
    pub tag_label: &'static str,
    pub location_select: Option<&'static str>,
    pub location_label: &'static str,
    pub checklist: Option<ChecklistSelectors>,
    pub reset: Option<&'static str>,
}

pub struct ListFilter {
    selectors: FilterSelectors,
    state: RefCell<FilterState>,
}

impl ListFilter {
    /// Wire every control found on the page. Returns `None` when the page
    /// has no list to filter.
    pub fn install(selectors: FilterSelectors) -> Option<Rc<Self>> {
        query(selectors.list)?;

        let keys = selectors
            .checklist
            .map(|c| query_all(c.boxes).iter().map(category_key).collect::<Vec<_>>())
            .unwrap_or_default();

        let filter = Rc::new(Self {
            selectors,
            state: RefCell::new(FilterState::new(CategoryChecklist::new(keys))),
        });
        filter.bind();
        CURRENT.with(|current| *current.borrow_mut() = Some(Rc::clone(&filter)));
        log::debug!("list filter installed on {}", selectors.list);
        Some(filter)
    }

    /// The filter of the current page, if any.
    pub fn current() -> Option<Rc<Self>> {
        CURRENT.with(|current| current.borrow().clone())
    }

    fn bind(self: &Rc<Self>) {
        let s = self.selectors;

        if let Some(input) = query(s.name_input) {
            for event in ["input", "change"] {
                let this = Rc::clone(self);
                let el = input.clone();
                on(&input, event, move |_| {
                    this.change(FilterChange::Name(control_value(&el)))
                });
            }
        }

        if let Some(select) = s.group_select.and_then(query) {
            let this = Rc::clone(self);
            let el = select.clone();
            on(&select, "change", move |_| {
                this.change(FilterChange::Group(control_value(&el)))
            });
        }

        if let Some(select) = s.location_select.and_then(query) {
            let this = Rc::clone(self);
            let el = select.clone();
            on(&select, "change", move |_| {
                this.change(FilterChange::Location(control_value(&el)))
            });
        }

        match s.tag {
            Some(TagControl::Button(selector)) => {
                if let Some(button) = query(selector) {
                    let this = Rc::clone(self);
                    let el = button.clone();
                    on(&button, "click", move |ev: Event| {
                        ev.prevent_default();
                        let active = el.class_list().toggle("active").unwrap_or(false);
                        let label = active.then(|| dom::text(&el).trim().to_string());
                        this.change(FilterChange::Tag(label));
                    });
                }
            }
            Some(TagControl::Checkbox(selector)) => {
                if let Some(checkbox) = query(selector) {
                    let this = Rc::clone(self);
                    let el = checkbox.clone();
                    on(&checkbox, "change", move |_| {
                        let label = is_checked(&el).then(|| control_value(&el));
                        this.change(FilterChange::Tag(label));
                    });
                }
            }
            None => {}
        }

        if let Some(checklist) = s.checklist {
            if let Some(reset) = query(checklist.reset) {
                let this = Rc::clone(self);
                on(&reset, "change", move |_| this.change(FilterChange::CategoryReset));
            }
            for checkbox in query_all(checklist.boxes) {
                let this = Rc::clone(self);
                let el = checkbox.clone();
                on(&checkbox, "change", move |_| {
                    this.change(FilterChange::CategoryToggled {
                        key: category_key(&el),
                        checked: is_checked(&el),
                    })
                });
            }
        }

        if let Some(link) = s.reset.and_then(query) {
            let this = Rc::clone(self);
            on(&link, "click", move |ev: Event| {
                ev.prevent_default();
                this.change(FilterChange::Reset);
            });
        }
    }

    /// Feed one control change through the engine and redraw the list.
    pub fn change(&self, change: FilterChange) {
        let transition = self.state.borrow_mut().apply(change);
        for axis in transition.cleared {
            self.neutralize(axis);
        }
        self.sync_checklist();
        self.refresh();
    }

    /// Recompute visibility of every fragment currently in the page.
    pub fn refresh(&self) {
        let s = self.selectors;
        let Some(list) = query(s.list) else { return };
        let state = self.state.borrow();
        let axis = state.active().map(ActiveFilter::axis);

        for fragment in query_all_in(&list, s.fragment) {
            let visible = match axis {
                None => true,
                Some(axis) => state.matches(self.labels(&fragment, axis).as_slice()),
            };
            set_visible(&fragment, visible);
        }

        if let Some(container) = s.group_container {
            for group in query_all_in(&list, container) {
                let visible = axis.is_none()
                    || query_all_in(&group, s.fragment).iter().any(dom::is_visible);
                set_visible(&group, visible);
            }
        }
    }

    fn labels(&self, fragment: &Element, axis: FilterAxis) -> Vec<String> {
        let s = self.selectors;
        let texts = |root: &Element, selector: &str| {
            query_all_in(root, selector)
                .iter()
                .map(dom::text)
                .collect::<Vec<_>>()
        };
        match axis {
            FilterAxis::Name => texts(fragment, s.name_label),
            FilterAxis::Group => {
                let scope = s
                    .group_container
                    .and_then(|sel| fragment.closest(sel).ok().flatten())
                    .unwrap_or_else(|| fragment.clone());
                texts(&scope, s.group_label)
            }
            FilterAxis::Tag => texts(fragment, s.tag_label),
            FilterAxis::Location => texts(fragment, s.location_label),
            FilterAxis::Category => fragment
                .get_attribute(CATEGORIES_ATTR)
                .map(|keys| keys.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
        }
    }

    fn neutralize(&self, axis: FilterAxis) {
        let s = self.selectors;
        match axis {
            FilterAxis::Name => {
                if let Some(input) = query(s.name_input) {
                    dom::set_input_value(&input, "");
                }
            }
            FilterAxis::Group => reset_select(s.group_select),
            FilterAxis::Location => reset_select(s.location_select),
            FilterAxis::Tag => match s.tag {
                Some(TagControl::Button(selector)) => {
                    if let Some(button) = query(selector) {
                        let _ = button.class_list().remove_1("active");
                    }
                }
                Some(TagControl::Checkbox(selector)) => {
                    if let Some(checkbox) = query(selector) {
                        set_checked(&checkbox, false);
                    }
                }
                None => {}
            },
            // Mirrored from the engine state in `sync_checklist`.
            FilterAxis::Category => {}
        }
    }

    fn sync_checklist(&self) {
        let Some(checklist) = self.selectors.checklist else { return };
        let state = self.state.borrow();
        let categories = state.checklist();
        if let Some(reset) = query(checklist.reset) {
            set_checked(&reset, categories.is_reset());
        }
        for checkbox in query_all(checklist.boxes) {
            set_checked(&checkbox, categories.is_checked(&category_key(&checkbox)));
        }
    }
}

fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        dom::text(el)
    }
}

fn is_checked(el: &Element) -> bool {
    el.dyn_ref::<HtmlInputElement>().map_or(false, |input| input.checked())
}

fn set_checked(el: &Element, checked: bool) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_checked(checked);
    }
}

fn reset_select(selector: Option<&'static str>) {
    if let Some(select) = selector
        .and_then(query)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_selected_index(0);
    }
}

fn category_key(el: &Element) -> String {
    el.get_attribute(CATEGORY_KEY_ATTR)
        .unwrap_or_else(|| control_value(el))
}
