//! Todo item entity and its input payload.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Todo entry owned by a user.
///
/// `owner_id` and `created_at` are fixed at creation; `updated_at` moves on
/// every update and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[schema(example = "0b8e3f5c-2f7a-4a3e-b8a1-5d2c9e1f4a77")]
    pub id: String,
    /// Id of the owning user (not checked against the user store)
    #[serde(rename = "userId", alias = "ownerId")]
    pub owner_id: String,
    #[schema(example = "Buy milk")]
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item fields accepted on create and update.
///
/// Anything else in the body (id, timestamps) is ignored. On update the
/// payload replaces the stored fields wholesale, so omitted fields reset.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    #[schema(example = "Buy milk")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Accepted for compatibility; ownership never changes through the API
    #[serde(default, rename = "userId", alias = "ownerId")]
    pub owner_id: Option<String>,
}

impl ItemInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl Item {
    /// Build a new item for `owner_id`; both timestamps are the same instant.
    pub fn new(input: ItemInput, owner_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields with `input` and bump `updated_at`.
    pub fn apply_update(&mut self, input: ItemInput) {
        self.title = input.title;
        self.description = input.description;
        self.completed = input.completed;
        self.touch();
    }

    fn touch(&mut self) {
        let now = Utc::now();
        // Keep updated_at strictly after created_at even on a coarse clock
        self.updated_at = if now > self.created_at {
            now
        } else {
            self.created_at + Duration::microseconds(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new(ItemInput::titled("Buy milk"), "u1".to_string());

        assert!(!item.id.is_empty());
        assert_eq!(item.owner_id, "u1");
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_apply_update_is_full_replace() {
        let mut item = Item::new(
            ItemInput {
                title: "Buy milk".into(),
                description: Some("2 liters".into()),
                completed: true,
                owner_id: None,
            },
            "u1".to_string(),
        );
        let created_at = item.created_at;

        item.apply_update(ItemInput::titled("Buy bread"));

        assert_eq!(item.title, "Buy bread");
        assert_eq!(item.description, None);
        assert!(!item.completed);
        assert_eq!(item.created_at, created_at);
        assert!(item.updated_at > item.created_at);
    }

    #[test]
    fn test_apply_update_ignores_owner_in_payload() {
        let mut item = Item::new(ItemInput::titled("Buy milk"), "u1".to_string());

        item.apply_update(ItemInput {
            owner_id: Some("u2".into()),
            ..ItemInput::titled("Buy milk")
        });

        assert_eq!(item.owner_id, "u1");
    }

    #[test]
    fn test_json_shape() {
        let item = Item::new(ItemInput::titled("Buy milk"), "u1".to_string());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_input_accepts_owner_alias_and_missing_fields() {
        let input: ItemInput =
            serde_json::from_str(r#"{"title":"x","ownerId":"u9","id":"ignored"}"#).unwrap();

        assert_eq!(input.title, "x");
        assert_eq!(input.owner_id.as_deref(), Some("u9"));
        assert!(!input.completed);
        assert!(input.description.is_none());
    }
}
