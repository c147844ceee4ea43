//! Success and error envelopes returned by asynchronous form posts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a rendered item, used to build element ids like `item-7`.
///
/// The server sends numeric primary keys for most models but some views
/// echo back the raw URL segment as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Common head of every successful JSON answer.
///
/// Page-specific fields live next to these keys and are decoded by the
/// callback that consumes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSuccess {
    /// Human readable confirmation shown next to the submit button.
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub id: Option<ItemId>,
    /// Markup replacing or extending an existing fragment.
    #[serde(default)]
    pub content: Option<String>,
}

/// Validation messages attached to one field.
///
/// Form views send `form.errors` as lists; hand-written views send a
/// single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    pub fn joined(&self) -> String {
        match self {
            FieldMessages::One(message) => message.clone(),
            FieldMessages::Many(messages) => messages.join(" "),
        }
    }
}

/// Body of a 4xx answer: a global message plus per-field messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormErrorPayload {
    pub error: String,
    #[serde(default)]
    pub details: BTreeMap<String, FieldMessages>,
}

impl FormErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.details
            .insert(field.into(), FieldMessages::One(message.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_numeric_id() {
        let ok: FormSuccess = serde_json::from_str(r#"{"success":"Saved","id":7}"#).unwrap();
        assert_eq!(ok.success.as_deref(), Some("Saved"));
        assert_eq!(ok.id, Some(ItemId::Number(7)));
        assert_eq!(ok.id.unwrap().to_string(), "7");
        assert!(ok.content.is_none());
    }

    #[test]
    fn success_ignores_page_specific_fields() {
        let ok: FormSuccess =
            serde_json::from_str(r#"{"success":"Data updated","id":"12","status":"Sent"}"#)
                .unwrap();
        assert_eq!(ok.id.unwrap().to_string(), "12");
    }

    #[test]
    fn error_details_accept_strings_and_lists() {
        let err: FormErrorPayload = serde_json::from_str(
            r#"{"error":"Something went wrong!","details":{"quantity":["Must be positive","Required"],"name":"Too long"}}"#,
        )
        .unwrap();
        assert_eq!(err.error, "Something went wrong!");
        assert_eq!(err.details["quantity"].joined(), "Must be positive Required");
        assert_eq!(err.details["name"].joined(), "Too long");
    }

    #[test]
    fn error_without_details() {
        let err: FormErrorPayload = serde_json::from_str(r#"{"error":"Not available."}"#).unwrap();
        assert!(err.details.is_empty());
    }

    #[test]
    fn error_requires_a_message() {
        assert!(serde_json::from_str::<FormErrorPayload>(r#"{"details":{}}"#).is_err());
    }

    #[test]
    fn builder_matches_wire_format() {
        let built = FormErrorPayload::new("Invalid data").with_field("quantity", "Must be positive");
        let parsed: FormErrorPayload = serde_json::from_str(
            r#"{"error":"Invalid data","details":{"quantity":"Must be positive"}}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }
}
