use std::collections::BTreeSet;

/// State of the category checkboxes (allowances on the inventory pages).
///
/// The "all" box is not stored: it is checked exactly when no category is.
/// Checking every category is the same as checking none and collapses back
/// to that state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChecklist {
    available: BTreeSet<String>,
    checked: BTreeSet<String>,
}

impl CategoryChecklist {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
            checked: BTreeSet::new(),
        }
    }

    /// Apply a click on one category box. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &str, checked: bool) {
        if !self.available.contains(key) {
            return;
        }
        if checked {
            self.checked.insert(key.to_string());
        } else {
            self.checked.remove(key);
        }
        if self.checked.len() == self.available.len() {
            self.checked.clear();
        }
    }

    /// The "all" box was checked.
    pub fn reset(&mut self) {
        self.checked.clear();
    }

    pub fn is_reset(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    pub fn checked(&self) -> impl Iterator<Item = &str> {
        self.checked.iter().map(String::as_str)
    }

    /// OR across checked categories; everything matches in the reset state.
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        self.is_reset()
            || categories
                .iter()
                .any(|category| self.checked.contains(category.as_ref()))
    }
}
