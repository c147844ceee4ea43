//! List filter engine.
//!
//! Every filter axis is mutually exclusive with the others: activating one
//! axis puts all other controls back to their neutral value and the whole
//! list is recomputed from scratch in a single pass. The engine itself is
//! DOM-free; [`dom::ListFilter`] binds it to a rendered page.

pub mod checklist;
pub mod dom;

pub use checklist::CategoryChecklist;

use crate::shared::accent::Needle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterAxis {
    Name,
    Group,
    Tag,
    Location,
    Category,
}

impl FilterAxis {
    pub const ALL: [FilterAxis; 5] = [
        FilterAxis::Name,
        FilterAxis::Group,
        FilterAxis::Tag,
        FilterAxis::Location,
        FilterAxis::Category,
    ];
}

/// A user action on one of the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Name(String),
    Group(String),
    /// `Some(label)` when the tag toggle is on.
    Tag(Option<String>),
    Location(String),
    CategoryToggled { key: String, checked: bool },
    /// The "all categories" box was checked.
    CategoryReset,
    /// The reset link: every axis back to neutral.
    Reset,
}

impl FilterChange {
    pub fn axis(&self) -> Option<FilterAxis> {
        match self {
            FilterChange::Name(_) => Some(FilterAxis::Name),
            FilterChange::Group(_) => Some(FilterAxis::Group),
            FilterChange::Tag(_) => Some(FilterAxis::Tag),
            FilterChange::Location(_) => Some(FilterAxis::Location),
            FilterChange::CategoryToggled { .. } | FilterChange::CategoryReset => {
                Some(FilterAxis::Category)
            }
            FilterChange::Reset => None,
        }
    }
}

/// The one axis currently restricting the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Text { axis: FilterAxis, needle: Needle },
    Category,
}

impl ActiveFilter {
    pub fn axis(&self) -> FilterAxis {
        match self {
            ActiveFilter::Text { axis, .. } => *axis,
            ActiveFilter::Category => FilterAxis::Category,
        }
    }
}

/// Outcome of [`FilterState::apply`]: which controls must be neutralised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub changed: Option<FilterAxis>,
    pub cleared: Vec<FilterAxis>,
}

/// Labels a fragment exposes for each axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentLabels {
    pub names: Vec<String>,
    pub groups: Vec<String>,
    pub tags: Vec<String>,
    pub locations: Vec<String>,
    pub categories: Vec<String>,
}

impl FragmentLabels {
    pub fn get(&self, axis: FilterAxis) -> &[String] {
        match axis {
            FilterAxis::Name => &self.names,
            FilterAxis::Group => &self.groups,
            FilterAxis::Tag => &self.tags,
            FilterAxis::Location => &self.locations,
            FilterAxis::Category => &self.categories,
        }
    }
}

/// Select boxes use `0` for their "all" option.
pub fn is_neutral(value: &str) -> bool {
    value.is_empty() || value == "0"
}

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: Option<ActiveFilter>,
    checklist: CategoryChecklist,
}

impl FilterState {
    pub fn new(checklist: CategoryChecklist) -> Self {
        Self {
            active: None,
            checklist,
        }
    }

    pub fn active(&self) -> Option<&ActiveFilter> {
        self.active.as_ref()
    }

    pub fn checklist(&self) -> &CategoryChecklist {
        &self.checklist
    }

    /// Single transition function for every filter control.
    pub fn apply(&mut self, change: FilterChange) -> Transition {
        let changed = change.axis();

        if changed != Some(FilterAxis::Category) {
            self.checklist.reset();
        }

        self.active = match change {
            FilterChange::Name(value) => text_filter(FilterAxis::Name, value),
            FilterChange::Group(value) => text_filter(FilterAxis::Group, value),
            FilterChange::Location(value) => text_filter(FilterAxis::Location, value),
            FilterChange::Tag(label) => label.and_then(|l| text_filter(FilterAxis::Tag, l)),
            FilterChange::CategoryToggled { key, checked } => {
                self.checklist.toggle(&key, checked);
                (!self.checklist.is_reset()).then_some(ActiveFilter::Category)
            }
            FilterChange::CategoryReset => {
                self.checklist.reset();
                None
            }
            FilterChange::Reset => None,
        };

        Transition {
            changed,
            cleared: FilterAxis::ALL
                .into_iter()
                .filter(|axis| Some(*axis) != changed)
                .collect(),
        }
    }

    /// Does a fragment carrying `labels` for the active axis stay visible?
    pub fn matches<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        match &self.active {
            None => true,
            Some(ActiveFilter::Text { needle, .. }) => {
                labels.iter().any(|label| needle.is_in(label.as_ref()))
            }
            Some(ActiveFilter::Category) => self.checklist.matches(labels),
        }
    }

    pub fn visibility(&self, fragments: &[FragmentLabels]) -> Vec<bool> {
        match self.active.as_ref().map(ActiveFilter::axis) {
            None => vec![true; fragments.len()],
            Some(axis) => fragments
                .iter()
                .map(|fragment| self.matches(fragment.get(axis)))
                .collect(),
        }
    }
}

fn text_filter(axis: FilterAxis, value: String) -> Option<ActiveFilter> {
    let neutral = match axis {
        FilterAxis::Group | FilterAxis::Location => is_neutral(&value),
        _ => value.is_empty(),
    };
    (!neutral).then(|| ActiveFilter::Text {
        axis,
        needle: Needle::new(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, group: &str, tag: Option<&str>, location: Option<&str>) -> FragmentLabels {
        FragmentLabels {
            names: vec![name.to_string()],
            groups: vec![group.to_string()],
            tags: tag.map(|t| vec![t.to_string()]).unwrap_or_default(),
            locations: location.map(|l| vec![l.to_string()]).unwrap_or_default(),
            categories: Vec::new(),
        }
    }

    fn list() -> Vec<FragmentLabels> {
        vec![
            item("Paracétamol 500 mg", "Analgesics", Some("Required"), Some("Hospital")),
            item("Morphine", "Analgesics", None, Some("Bridge")),
            item("Éphédrine", "Cardiology", Some("Required"), None),
            item("Bandage", "Dressings", None, Some("hospital locker")),
        ]
    }

    fn state() -> FilterState {
        FilterState::new(CategoryChecklist::new(["1", "2", "3"]))
    }

    #[test]
    fn no_filter_shows_everything() {
        assert_eq!(state().visibility(&list()), vec![true; 4]);
    }

    #[test]
    fn name_filter_is_accent_and_case_insensitive() {
        let mut state = state();
        state.apply(FilterChange::Name("E".into()));
        assert_eq!(state.visibility(&list()), vec![true, true, true, true]);

        state.apply(FilterChange::Name("phé".into()));
        assert_eq!(state.visibility(&list()), vec![false, false, true, false]);

        state.apply(FilterChange::Name("PARACETAMOL".into()));
        assert_eq!(state.visibility(&list()), vec![true, false, false, false]);
    }

    #[test]
    fn empty_name_shows_everything() {
        let mut state = state();
        state.apply(FilterChange::Name("xyz".into()));
        assert_eq!(state.visibility(&list()), vec![false; 4]);
        state.apply(FilterChange::Name(String::new()));
        assert!(state.active().is_none());
        assert_eq!(state.visibility(&list()), vec![true; 4]);
    }

    #[test]
    fn group_after_name_drops_the_name_filter() {
        let mut state = state();
        state.apply(FilterChange::Name("morph".into()));
        let transition = state.apply(FilterChange::Group("Analgesics".into()));
        assert_eq!(transition.changed, Some(FilterAxis::Group));
        assert!(transition.cleared.contains(&FilterAxis::Name));
        assert!(!transition.cleared.contains(&FilterAxis::Group));
        assert_eq!(state.visibility(&list()), vec![true, true, false, false]);
    }

    #[test]
    fn zero_select_value_is_neutral() {
        let mut state = state();
        state.apply(FilterChange::Location("0".into()));
        assert!(state.active().is_none());
        state.apply(FilterChange::Group(String::new()));
        assert!(state.active().is_none());
    }

    #[test]
    fn missing_location_does_not_match() {
        let mut state = state();
        state.apply(FilterChange::Location("hospital".into()));
        assert_eq!(state.visibility(&list()), vec![true, false, false, true]);
    }

    #[test]
    fn tag_toggle() {
        let mut state = state();
        state.apply(FilterChange::Tag(Some("Required".into())));
        assert_eq!(state.visibility(&list()), vec![true, false, true, false]);
        state.apply(FilterChange::Tag(None));
        assert_eq!(state.visibility(&list()), vec![true; 4]);
    }

    #[test]
    fn category_or_and_collapse_to_reset() {
        let mut fragments = list();
        fragments[0].categories = vec!["1".into()];
        fragments[1].categories = vec!["2".into(), "3".into()];
        fragments[2].categories = vec!["3".into()];

        let mut state = state();
        state.apply(FilterChange::Name("morph".into()));
        let transition = state.apply(FilterChange::CategoryToggled {
            key: "1".into(),
            checked: true,
        });
        assert!(transition.cleared.contains(&FilterAxis::Name));
        state.apply(FilterChange::CategoryToggled {
            key: "2".into(),
            checked: true,
        });
        assert_eq!(state.visibility(&fragments), vec![true, true, false, false]);

        state.apply(FilterChange::CategoryToggled {
            key: "3".into(),
            checked: true,
        });
        assert!(state.checklist().is_reset());
        assert!(state.active().is_none());
        assert_eq!(state.visibility(&fragments), vec![true; 4]);
    }

    #[test]
    fn other_axis_resets_the_checklist() {
        let mut state = state();
        state.apply(FilterChange::CategoryToggled {
            key: "2".into(),
            checked: true,
        });
        assert!(!state.checklist().is_reset());
        state.apply(FilterChange::Location("Bridge".into()));
        assert!(state.checklist().is_reset());
    }

    #[test]
    fn reset_clears_every_axis() {
        let mut state = state();
        state.apply(FilterChange::Tag(Some("Required".into())));
        let transition = state.apply(FilterChange::Reset);
        assert_eq!(transition.changed, None);
        assert_eq!(transition.cleared, FilterAxis::ALL.to_vec());
        assert!(state.active().is_none());
        assert!(state.checklist().is_reset());
        assert_eq!(state.visibility(&list()), vec![true; 4]);
    }
}
