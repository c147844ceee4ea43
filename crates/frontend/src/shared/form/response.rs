//! Decoding of the server answer to a form post or delete link.

use contracts::forms::{FormErrorPayload, FormSuccess};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Body of a successful answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Markup returned directly, e.g. a re-rendered list.
    Html(String),
    Empty,
}

impl ResponseBody {
    /// Decode a page specific payload.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            ResponseBody::Json(value) => T::deserialize(value),
            ResponseBody::Html(_) => Err(serde::de::Error::custom("expected JSON, got markup")),
            ResponseBody::Empty => Err(serde::de::Error::custom("empty response")),
        }
    }

    /// The common success fields; all empty when the body has none.
    pub fn success(&self) -> FormSuccess {
        match self {
            ResponseBody::Json(value) => FormSuccess::deserialize(value).unwrap_or_default(),
            _ => FormSuccess::default(),
        }
    }

    /// Markup carried by the answer: the raw body or its `content` field.
    pub fn html(&self) -> Option<&str> {
        match self {
            ResponseBody::Html(html) => Some(html),
            ResponseBody::Json(value) => value.get("content").and_then(Value::as_str),
            ResponseBody::Empty => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InFlight,

    /// Validation or processing error reported by the server.
    #[error("{}", .payload.error)]
    Rejected {
        status: u16,
        payload: FormErrorPayload,
        /// Full body, handed to the error callback.
        raw: Value,
    },

    #[error("Internal server error ({status}), please try again later")]
    Server { status: u16 },

    #[error("Unexpected answer from the server")]
    Malformed { status: u16, reason: String },

    #[error("Could not read the form: {0}")]
    Form(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Turn a raw answer into a body or a typed failure.
///
/// 5xx answers are never parsed. Other non-2xx answers must carry a
/// [`FormErrorPayload`]; anything else is reported as malformed.
pub fn decode_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<ResponseBody, SubmitError> {
    match status {
        200..=299 => decode_success(status, content_type, body),
        500..=599 => Err(SubmitError::Server { status }),
        _ => Err(decode_rejection(status, body)),
    }
}

fn decode_success(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<ResponseBody, SubmitError> {
    let declared_json = content_type.map_or(false, |ct| ct.contains("json"));
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return if declared_json {
            Err(SubmitError::Malformed {
                status,
                reason: "empty JSON body".to_string(),
            })
        } else {
            Ok(ResponseBody::Empty)
        };
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => Ok(ResponseBody::Json(value)),
        Err(err) if declared_json => Err(SubmitError::Malformed {
            status,
            reason: err.to_string(),
        }),
        Err(_) => Ok(ResponseBody::Html(body.to_string())),
    }
}

fn decode_rejection(status: u16, body: &str) -> SubmitError {
    let malformed = |reason: String| SubmitError::Malformed { status, reason };
    let raw: Value = match serde_json::from_str(body.trim()) {
        Ok(raw) => raw,
        Err(err) => return malformed(err.to_string()),
    };
    match FormErrorPayload::deserialize(&raw) {
        Ok(payload) => SubmitError::Rejected {
            status,
            payload,
            raw,
        },
        Err(err) => malformed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forms::ItemId;

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn success_json() {
        let body = decode_response(200, JSON, r#"{"success":"Saved","id":7}"#).unwrap();
        let success = body.success();
        assert_eq!(success.success.as_deref(), Some("Saved"));
        assert_eq!(success.id, Some(ItemId::Number(7)));
    }

    #[test]
    fn success_markup() {
        let html = "<div id=\"item-list\"></div>";
        let body = decode_response(200, Some("text/html; charset=utf-8"), html).unwrap();
        assert_eq!(body, ResponseBody::Html(html.to_string()));
        assert_eq!(body.html(), Some(html));
        assert_eq!(body.success(), FormSuccess::default());
        assert!(body.decode::<FormSuccess>().is_err());
    }

    #[test]
    fn success_empty() {
        assert_eq!(decode_response(204, None, "").unwrap(), ResponseBody::Empty);
    }

    #[test]
    fn success_declared_json_but_broken() {
        let err = decode_response(200, JSON, "{not json").unwrap_err();
        assert!(matches!(err, SubmitError::Malformed { status: 200, .. }));
    }

    #[test]
    fn content_field_is_markup() {
        let body = decode_response(200, JSON, r#"{"success":"ok","content":"<tr></tr>"}"#).unwrap();
        assert_eq!(body.html(), Some("<tr></tr>"));
    }

    #[test]
    fn validation_error() {
        let err = decode_response(
            400,
            JSON,
            r#"{"error":"Invalid data","details":{"quantity":"Must be positive"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid data");
        match err {
            SubmitError::Rejected { status, payload, raw } => {
                assert_eq!(status, 400);
                assert_eq!(payload.details["quantity"].joined(), "Must be positive");
                assert_eq!(raw["details"]["quantity"], "Must be positive");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn server_fault_is_not_parsed() {
        let err = decode_response(500, JSON, r#"{"error":"boom","details":{"a":"b"}}"#).unwrap_err();
        assert!(matches!(err, SubmitError::Server { status: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn empty_error_body_is_malformed() {
        let err = decode_response(400, JSON, "").unwrap_err();
        assert!(matches!(err, SubmitError::Malformed { status: 400, .. }));
        assert_eq!(err.to_string(), "Unexpected answer from the server");
    }

    #[test]
    fn error_page_markup_is_malformed() {
        let err = decode_response(403, Some("text/html"), "<h1>Forbidden</h1>").unwrap_err();
        assert!(matches!(err, SubmitError::Malformed { status: 403, .. }));
    }

    #[test]
    fn error_json_without_message_is_malformed() {
        let err = decode_response(400, JSON, r#"{"details":{}}"#).unwrap_err();
        assert!(matches!(err, SubmitError::Malformed { .. }));
    }
}
