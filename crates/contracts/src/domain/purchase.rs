use crate::forms::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionName {
    pub name: String,
}

/// New status label of a requisition.
///
/// `code` is the numeric status; anything above zero means the
/// requisition left the draft stage and can no longer be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionStatus {
    pub status: String,
    #[serde(default)]
    pub code: i64,
}

impl RequisitionStatus {
    pub fn is_locked(&self) -> bool {
        self.code > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub url: String,
}

/// Confirmation of an inline quantity change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityFeedback {
    #[serde(default)]
    pub success: Option<String>,
    pub id: ItemId,
}

/// A new requisition line rendered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    #[serde(default)]
    pub success: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_without_code_is_unlocked() {
        let status: RequisitionStatus =
            serde_json::from_str(r#"{"success":"Data updated","id":3,"status":"Draft"}"#).unwrap();
        assert!(!status.is_locked());
    }

    #[test]
    fn status_with_positive_code_is_locked() {
        let status: RequisitionStatus =
            serde_json::from_str(r#"{"status":"Sent","code":2}"#).unwrap();
        assert!(status.is_locked());
    }

    #[test]
    fn quantity_feedback_string_id() {
        let feedback: QuantityFeedback =
            serde_json::from_str(r#"{"success":"ok","id":"41"}"#).unwrap();
        assert_eq!(feedback.id.to_string(), "41");
    }
}
