//! Wire Records
//!
//! JSON shapes exchanged with the backend, and the pure transforms between
//! wire and canonical form. The transforms are total: any structurally valid
//! wire record maps to a canonical request, with defaults substituted for
//! missing or unrecognized fields.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, NewPrayerRequest, PrayerRequest};

/// Prayer request as the backend serializes it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WirePrayerRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pray_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Creation payload for POST /prayers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrayerInput {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial update payload for PUT /prayers/{id}
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePrayerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_answered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Aggregate counters from GET /prayers/stats
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireStats {
    #[serde(default)]
    pub total_prayers: u32,
    #[serde(default)]
    pub total_pray_count: u32,
    #[serde(default)]
    pub answered_prayers: u32,
    #[serde(default)]
    pub urgent_prayers: u32,
    #[serde(default)]
    pub categories_count: HashMap<String, u32>,
}

/// Comment on a request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireComment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub prayer_request_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Creation payload for POST /prayers/{id}/comments
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub is_anonymous: bool,
}

const PRIORITY_URGENT: &str = "urgent";
const PRIORITY_DEFAULT: &str = "medium";

/// Wire record to canonical form. The backend carries no `location` yet, and
/// `tags`/`is_answered` have no canonical counterpart, so those are dropped.
pub fn from_wire(record: WirePrayerRequest) -> PrayerRequest {
    PrayerRequest {
        id: record.id,
        name: if record.is_anonymous {
            String::new()
        } else {
            record.user_name
        },
        request_text: record.description,
        location: None,
        created_at: record.created_at.unwrap_or(DateTime::UNIX_EPOCH),
        prayed_for_count: record.pray_count,
        is_urgent: record.priority == PRIORITY_URGENT,
        is_anonymous: record.is_anonymous,
        category: Category::parse(&record.category),
        author_id: if record.user_id.is_empty() {
            None
        } else {
            Some(record.user_id)
        },
    }
}

/// Form payload to creation wire shape. The form has no separate title field,
/// so the title is derived from the body text.
pub fn to_wire(input: &NewPrayerRequest) -> CreatePrayerInput {
    CreatePrayerInput {
        title: derive_title(&input.request_text),
        description: input.request_text.clone(),
        user_name: if input.is_anonymous {
            None
        } else {
            Some(input.name.clone())
        },
        is_anonymous: input.is_anonymous,
        priority: Some(
            if input.is_urgent {
                PRIORITY_URGENT
            } else {
                PRIORITY_DEFAULT
            }
            .to_string(),
        ),
        category: Some(input.category.as_str().to_string()),
        tags: None,
    }
}

fn derive_title(text: &str) -> String {
    const MAX_TITLE_CHARS: usize = 50;
    if text.chars().count() <= MAX_TITLE_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_TITLE_CHARS).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wire_tolerates_missing_fields() {
        let record: WirePrayerRequest = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        let request = from_wire(record);

        assert_eq!(request.id, "abc");
        assert_eq!(request.category, Category::Other);
        assert_eq!(request.prayed_for_count, 0);
        assert!(!request.is_urgent);
        assert!(!request.is_anonymous);
        assert_eq!(request.author_id, None);
        assert_eq!(request.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn from_wire_maps_urgent_priority() {
        let record = WirePrayerRequest {
            priority: "urgent".to_string(),
            ..Default::default()
        };
        assert!(from_wire(record).is_urgent);

        let record = WirePrayerRequest {
            priority: "high".to_string(),
            ..Default::default()
        };
        assert!(!from_wire(record).is_urgent);
    }

    #[test]
    fn from_wire_clears_name_for_anonymous() {
        let record = WirePrayerRequest {
            user_name: "Omar".to_string(),
            is_anonymous: true,
            ..Default::default()
        };
        let request = from_wire(record);
        assert!(request.name.is_empty());
        assert!(request.is_anonymous);
    }

    #[test]
    fn from_wire_parses_unknown_category_as_other() {
        let record = WirePrayerRequest {
            category: "finances".to_string(),
            ..Default::default()
        };
        assert_eq!(from_wire(record).category, Category::Other);
    }

    #[test]
    fn to_wire_omits_name_for_anonymous() {
        let input = NewPrayerRequest {
            name: "Omar".to_string(),
            request_text: "Safe travels".to_string(),
            is_anonymous: true,
            ..Default::default()
        };
        let payload = to_wire(&input);
        assert_eq!(payload.user_name, None);
        assert!(payload.is_anonymous);
    }

    #[test]
    fn to_wire_maps_urgency_to_priority() {
        let input = NewPrayerRequest {
            request_text: "Recovery".to_string(),
            is_urgent: true,
            category: Category::Health,
            ..Default::default()
        };
        let payload = to_wire(&input);
        assert_eq!(payload.priority.as_deref(), Some("urgent"));
        assert_eq!(payload.category.as_deref(), Some("health"));

        let input = NewPrayerRequest {
            request_text: "Recovery".to_string(),
            ..Default::default()
        };
        assert_eq!(to_wire(&input).priority.as_deref(), Some("medium"));
    }

    #[test]
    fn derive_title_truncates_long_text() {
        let short = "Pray for rain";
        assert_eq!(derive_title(short), short);

        let long = "a".repeat(80);
        let title = derive_title(&long);
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
    }
}
