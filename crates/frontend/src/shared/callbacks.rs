//! Page callbacks run after a form answer.
//!
//! Forms name their callback with `data-form-callback` and
//! `data-form-error-callback`. Names map onto a closed set of
//! [`CallbackId`]s and each page registers the handlers it supports at
//! boot. Unknown names and callbacks the page did not register are ignored.

use crate::shared::form::ResponseBody;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use web_sys::HtmlFormElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackId {
    UpdateArticle,
    UpdateRemark,
    UpdateList,
    AddLocation,
    ReloadArticle,
    UpdateName,
    UpdateStatus,
    Redirect,
    QuantityFeedback,
    ItemAdd,
    ImportLog,
    ImportKey,
    UpdateUser,
}

impl CallbackId {
    pub const ALL: [CallbackId; 13] = [
        CallbackId::UpdateArticle,
        CallbackId::UpdateRemark,
        CallbackId::UpdateList,
        CallbackId::AddLocation,
        CallbackId::ReloadArticle,
        CallbackId::UpdateName,
        CallbackId::UpdateStatus,
        CallbackId::Redirect,
        CallbackId::QuantityFeedback,
        CallbackId::ItemAdd,
        CallbackId::ImportLog,
        CallbackId::ImportKey,
        CallbackId::UpdateUser,
    ];

    /// Name used in the templates.
    pub fn name(self) -> &'static str {
        match self {
            CallbackId::UpdateArticle => "updateArticle",
            CallbackId::UpdateRemark => "updateRemark",
            CallbackId::UpdateList => "updateList",
            CallbackId::AddLocation => "addLocation",
            CallbackId::ReloadArticle => "reloadArticle",
            CallbackId::UpdateName => "updateName",
            CallbackId::UpdateStatus => "updateStatus",
            CallbackId::Redirect => "redirect",
            CallbackId::QuantityFeedback => "quantityFeedback",
            CallbackId::ItemAdd => "itemAdd",
            CallbackId::ImportLog => "importLog",
            CallbackId::ImportKey => "importKey",
            CallbackId::UpdateUser => "updateUser",
        }
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown callback `{0}`")]
pub struct UnknownCallback(pub String);

impl FromStr for CallbackId {
    type Err = UnknownCallback;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CallbackId::ALL
            .into_iter()
            .find(|id| id.name() == s.trim())
            .ok_or_else(|| UnknownCallback(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

/// What a callback gets to work with.
pub struct CallbackContext<'a> {
    pub form: &'a HtmlFormElement,
    pub body: &'a ResponseBody,
}

impl CallbackContext<'_> {
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, CallbackError> {
        Ok(self.body.decode()?)
    }
}

pub type Handler = fn(&CallbackContext<'_>) -> Result<(), CallbackError>;

#[derive(Default)]
pub struct CallbackRegistry {
    handlers: HashMap<CallbackId, Handler>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: CallbackId, handler: Handler) -> Self {
        self.handlers.insert(id, handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn contains(&self, id: CallbackId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Look a declared attribute value up.
    pub fn resolve(&self, name: Option<&str>) -> Option<(CallbackId, Handler)> {
        let id = name?.parse::<CallbackId>().ok()?;
        self.handlers.get(&id).map(|handler| (id, *handler))
    }
}
