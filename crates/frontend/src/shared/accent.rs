//! Accent and case insensitive text matching for the list filters.
//!
//! Only the Latin-1 accented letters are folded; anything outside that
//! block is compared as is after uppercasing.

/// Replace a Latin-1 accented letter by its base letter.
pub fn fold_char(c: char) -> char {
    match c {
        '\u{C0}'..='\u{C6}' => 'A',
        '\u{E0}'..='\u{E6}' => 'a',
        '\u{C7}' => 'C',
        '\u{E7}' => 'c',
        '\u{C8}'..='\u{CB}' => 'E',
        '\u{E8}'..='\u{EB}' => 'e',
        '\u{CC}'..='\u{CF}' => 'I',
        '\u{EC}'..='\u{EF}' => 'i',
        '\u{D1}' => 'N',
        '\u{F1}' => 'n',
        '\u{D2}'..='\u{D6}' => 'O',
        '\u{F2}'..='\u{F6}' => 'o',
        '\u{D9}'..='\u{DC}' => 'U',
        '\u{F9}'..='\u{FC}' => 'u',
        other => other,
    }
}

/// Fold accents then uppercase, the canonical form used for comparisons.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect::<String>().to_uppercase()
}

/// A search string folded once and matched against many labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    raw: String,
    folded: String,
}

impl Needle {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = fold(&raw);
        Self { raw, folded }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Substring test on folded text.
    pub fn is_in(&self, haystack: &str) -> bool {
        fold(haystack).contains(&self.folded)
    }
}
