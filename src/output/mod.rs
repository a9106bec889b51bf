// Output formatting — terminal display and shared text helpers.

pub mod terminal;

use chrono::{DateTime, Utc};

use crate::feed::FeedReview;

/// Username shown when the author has none.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Short relative age of `ts` as seen at `now` ("5m ago", "3h ago", ...).
///
/// Timestamps in the future read as "just now".
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - ts;
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }

    let days = elapsed.num_days();
    if days < 30 {
        format!("{days}d ago")
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

/// The verb phrase describing what the author did.
pub fn review_action(entry: &FeedReview) -> &'static str {
    if entry.has_user_images() {
        "added photos of"
    } else if entry.is_pending() {
        "saved"
    } else {
        "visited"
    }
}

/// Display name for an entry's author.
pub fn display_username(entry: &FeedReview) -> &str {
    entry.user.username.as_deref().unwrap_or(UNKNOWN_USER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Ronchamp", 20), "Ronchamp");
        assert_eq!(truncate_chars("Église Saint-Pierre", 6), "Église...");
    }

    #[test]
    fn action_and_username_fallbacks() {
        let json = r#"{
            "id": "r1",
            "user_id": "u1",
            "user": { "username": null, "avatar_url": null },
            "created_at": "2025-06-01T12:00:00Z",
            "edited_at": null,
            "building": { "name": "Kunsthal" },
            "status": "pending"
        }"#;
        let mut entry: FeedReview = serde_json::from_str(json).unwrap();
        assert_eq!(display_username(&entry), UNKNOWN_USER);
        assert_eq!(review_action(&entry), "saved");

        entry.status = Some("visited".to_string());
        assert_eq!(review_action(&entry), "visited");

        entry.images.push(crate::feed::ReviewImage {
            id: "i1".to_string(),
            url: "https://img.example/k.jpg".to_string(),
            likes_count: 0,
            is_liked: false,
        });
        assert_eq!(review_action(&entry), "added photos of");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now + Duration::hours(2), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::minutes(150), now), "2h ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3d ago");
        assert_eq!(relative_time(now - Duration::days(65), now), "2mo ago");
        assert_eq!(relative_time(now - Duration::days(800), now), "2y ago");
    }
}
