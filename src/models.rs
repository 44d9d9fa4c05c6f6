//! Frontend Models
//!
//! Canonical, UI-facing data structures, post wire-transform.

use chrono::{DateTime, Utc};

/// Fixed set of request categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    Health,
    Travel,
    Marriage,
    Work,
    Studies,
    Family,
    Guidance,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Health,
        Category::Travel,
        Category::Marriage,
        Category::Work,
        Category::Studies,
        Category::Family,
        Category::Guidance,
        Category::Other,
    ];

    /// Stable wire string for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Travel => "travel",
            Category::Marriage => "marriage",
            Category::Work => "work",
            Category::Studies => "studies",
            Category::Family => "family",
            Category::Guidance => "guidance",
            Category::Other => "other",
        }
    }

    /// Human-readable label for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Marriage => "Marriage",
            Category::Work => "Work",
            Category::Studies => "Studies",
            Category::Family => "Family",
            Category::Guidance => "Guidance",
            Category::Other => "Other",
        }
    }

    /// Parse a wire string; unknown or empty input falls back to Other
    pub fn parse(value: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or(Category::Other)
    }
}

/// Prayer request in canonical form. Only `prayed_for_count` is ever mutated
/// after creation; everything else is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerRequest {
    pub id: String,
    /// Submitter display name; empty when anonymous
    pub name: String,
    pub request_text: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub prayed_for_count: u32,
    pub is_urgent: bool,
    pub is_anonymous: bool,
    pub category: Category,
    pub author_id: Option<String>,
}

impl PrayerRequest {
    /// Name shown anywhere in the UI; anonymous requests never reveal the
    /// submitter
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            "Anonymous"
        } else {
            &self.name
        }
    }

    /// Shareable plain-text rendition used by the clipboard action
    pub fn share_text(&self) -> String {
        let mut text = format!(
            "Prayer Request from {}:\n\n{}\n\n",
            self.display_name(),
            self.request_text
        );
        if let Some(location) = &self.location {
            text.push_str(&format!("Location: {}\n", location));
        }
        text.push_str("Please remember them in your prayers.");
        text
    }
}

/// Form payload for a new request, before the wire transform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPrayerRequest {
    pub name: String,
    pub request_text: String,
    pub location: String,
    pub is_urgent: bool,
    pub is_anonymous: bool,
    pub category: Category,
}

/// Pre-network validation for a submission. The body must be non-empty, and
/// a name is required unless the request is anonymous or a user is signed in.
pub fn validate_submission(input: &NewPrayerRequest, signed_in: bool) -> Result<(), String> {
    if input.request_text.trim().is_empty() {
        return Err("Please describe what you would like prayers for.".to_string());
    }
    if !input.is_anonymous && input.name.trim().is_empty() && !signed_in {
        return Err("Please enter your name or post anonymously.".to_string());
    }
    Ok(())
}

/// Session-local user from mock auth; never persisted, cleared on sign-out
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Relative time label for a creation timestamp
pub fn time_ago(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - from).num_seconds().max(0);
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(name: &str, is_anonymous: bool) -> PrayerRequest {
        PrayerRequest {
            id: "r1".to_string(),
            name: name.to_string(),
            request_text: "Please pray for my exams".to_string(),
            location: Some("Madinah".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            prayed_for_count: 0,
            is_urgent: false,
            is_anonymous,
            category: Category::Studies,
            author_id: None,
        }
    }

    #[test]
    fn parse_known_category() {
        assert_eq!(Category::parse("health"), Category::Health);
        assert_eq!(Category::parse("guidance"), Category::Guidance);
    }

    #[test]
    fn parse_unknown_category_falls_back_to_other() {
        assert_eq!(Category::parse("finances"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn display_name_suppressed_when_anonymous() {
        assert_eq!(request("Aisha", false).display_name(), "Aisha");
        assert_eq!(request("Aisha", true).display_name(), "Anonymous");
    }

    #[test]
    fn share_text_never_reveals_anonymous_name() {
        let text = request("Aisha", true).share_text();
        assert!(!text.contains("Aisha"));
        assert!(text.contains("Anonymous"));
        assert!(text.contains("Please pray for my exams"));
        assert!(text.contains("Location: Madinah"));
    }

    fn draft(name: &str, body: &str, is_anonymous: bool) -> NewPrayerRequest {
        NewPrayerRequest {
            name: name.to_string(),
            request_text: body.to_string(),
            is_anonymous,
            ..NewPrayerRequest::default()
        }
    }

    #[test]
    fn submission_requires_a_body() {
        assert_eq!(
            validate_submission(&draft("Aisha", "   ", false), false),
            Err("Please describe what you would like prayers for.".to_string())
        );
    }

    #[test]
    fn anonymous_submission_needs_no_name() {
        assert_eq!(
            validate_submission(&draft("", "Please pray for safe travel", true), false),
            Ok(())
        );
    }

    #[test]
    fn named_submission_without_name_or_session_is_rejected() {
        assert_eq!(
            validate_submission(&draft("  ", "Please pray for safe travel", false), false),
            Err("Please enter your name or post anonymously.".to_string())
        );
        // A signed-in user can leave the name blank
        assert_eq!(
            validate_submission(&draft("", "Please pray for safe travel", false), true),
            Ok(())
        );
    }

    #[test]
    fn time_ago_thresholds() {
        let base = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(time_ago(base, base + chrono::Duration::seconds(30)), "Just now");
        assert_eq!(time_ago(base, base + chrono::Duration::minutes(5)), "5m ago");
        assert_eq!(time_ago(base, base + chrono::Duration::hours(3)), "3h ago");
        assert_eq!(time_ago(base, base + chrono::Duration::days(2)), "2d ago");
    }
}
