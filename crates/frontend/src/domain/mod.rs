//! Page modules. Each one wires the shared filter, form and action
//! machinery to the selectors of its template and registers the callbacks
//! its forms declare.

pub mod inventory;
pub mod medicines;
pub mod purchase;
pub mod settings;

use crate::shared::callbacks::CallbackRegistry;
use std::fmt;
use std::str::FromStr;

/// Value of `<body data-page="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Inventory,
    Medicines,
    Drugs,
    Purchase,
    Settings,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Inventory => "inventory",
            Page::Medicines => "medicines",
            Page::Drugs => "drugs",
            Page::Purchase => "purchase",
            Page::Settings => "settings",
        }
    }

    pub fn callbacks(self) -> CallbackRegistry {
        match self {
            Page::Inventory => inventory::callbacks(),
            Page::Medicines | Page::Drugs => medicines::callbacks(),
            Page::Purchase => purchase::callbacks(),
            Page::Settings => settings::callbacks(),
        }
    }

    /// Page specific listeners, installed once the DOM is ready.
    pub fn boot(self) {
        match self {
            Page::Inventory => inventory::boot(),
            Page::Medicines => medicines::boot(medicines::MEDICINES),
            Page::Drugs => medicines::boot(medicines::DRUGS),
            Page::Purchase => purchase::boot(),
            Page::Settings => settings::boot(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inventory" => Ok(Page::Inventory),
            "medicines" => Ok(Page::Medicines),
            "drugs" => Ok(Page::Drugs),
            "purchase" => Ok(Page::Purchase),
            "settings" => Ok(Page::Settings),
            other => Err(format!("unknown page `{}`", other)),
        }
    }
}
