use crate::forms::ItemId;
use serde::{Deserialize, Serialize};

/// Answer of the article edit form: the re-rendered item.
///
/// Without `content` the item is replaced by nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub id: ItemId,
    #[serde(default)]
    pub content: String,
}

/// Answer of the remark edit form: the new remark markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarkUpdate {
    pub id: ItemId,
    #[serde(default)]
    pub content: String,
}

/// Answer of the location add form: a `<tr>` for the locations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAdded {
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_update_from_success_payload() {
        let update: ArticleUpdate = serde_json::from_str(
            r#"{"success":"Saved","id":7,"content":"<div id=\"item-7\"></div>"}"#,
        )
        .unwrap();
        assert_eq!(update.id, ItemId::Number(7));
        assert!(update.content.starts_with("<div"));
    }

    #[test]
    fn article_update_without_content() {
        let update: ArticleUpdate = serde_json::from_str(r#"{"success":"Saved","id":7}"#).unwrap();
        assert_eq!(update.id.to_string(), "7");
        assert!(update.content.is_empty());
    }

    #[test]
    fn article_update_needs_an_id() {
        assert!(serde_json::from_str::<ArticleUpdate>(r#"{"success":"Saved"}"#).is_err());
    }
}
