//! Runtime settings read from the `data-*` attributes of `<body>`.

use crate::domain::Page;
use crate::shared::dom;
use std::cell::RefCell;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_FEEDBACK_TTL_MS: u32 = 5000;

thread_local! {
    static CURRENT: RefCell<AppConfig> = RefCell::new(AppConfig::default());
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Page module to boot; `None` boots only the form controller.
    pub page: Option<Page>,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub log_level: log::Level,
    /// How long success messages stay on screen, `0` keeps them.
    pub feedback_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page: None,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            log_level: log::Level::Debug,
            feedback_ttl_ms: DEFAULT_FEEDBACK_TTL_MS,
        }
    }
}

impl AppConfig {
    /// Build from an attribute lookup; invalid values fall back to defaults.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| attr(name).filter(|v| !v.trim().is_empty());

        Self {
            page: non_empty("data-page").and_then(|v| v.parse().ok()),
            csrf_cookie: non_empty("data-csrf-cookie").unwrap_or(defaults.csrf_cookie),
            csrf_header: non_empty("data-csrf-header").unwrap_or(defaults.csrf_header),
            log_level: non_empty("data-log-level")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            feedback_ttl_ms: non_empty("data-feedback-ttl")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.feedback_ttl_ms),
        }
    }

    pub fn from_document() -> Self {
        match dom::document().and_then(|doc| doc.body()) {
            Some(body) => Self::from_attributes(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }

    /// Make this configuration visible to [`AppConfig::current`].
    pub fn install(&self) {
        CURRENT.with(|current| *current.borrow_mut() = self.clone());
    }

    pub fn current() -> Self {
        CURRENT.with(|current| current.borrow().clone())
    }
}
