// Feed data models — the review entries that flow through aggregation.
//
// A FeedReview is one user's rating/visit of a building. The nested `user`
// is denormalized display data only; identity comparisons always go through
// `user_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display data for a review's author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedUser {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified_architect: bool,
}

/// The building a review is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedBuilding {
    pub id: Option<String>,
    pub short_id: Option<i64>,
    pub slug: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub main_image_url: Option<String>,
    pub architects: Option<Vec<String>>,
    pub year_completed: Option<i32>,
}

/// A user-uploaded photo attached to a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub is_liked: bool,
}

/// A single feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedReview {
    pub id: String,
    /// Stable author identity, used for grouping
    pub user_id: String,
    /// Author display data, used for rendering only
    pub user: FeedUser,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub building: FeedBuilding,
    #[serde(default)]
    pub images: Vec<ReviewImage>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub group_id: Option<String>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_suggested: bool,
    pub suggestion_reason: Option<String>,
}

impl FeedReview {
    /// The timestamp used for ordering and clustering: `edited_at` when the
    /// review was edited, otherwise `created_at`.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.edited_at.unwrap_or(self.created_at)
    }

    /// Whether the author attached photos of their own.
    pub fn has_user_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Best-effort city label for this review's building.
    ///
    /// Uses `building.city` when set, otherwise the last comma-separated
    /// segment of the address ("12 Rue X, 75001 Paris" -> "75001 Paris").
    /// Blank values count as absent.
    pub fn location_candidate(&self) -> Option<&str> {
        if let Some(city) = self.building.city.as_deref() {
            if !city.is_empty() {
                return Some(city);
            }
        }

        let address = self.building.address.as_deref()?;
        let tail = address.rsplit(',').next()?.trim();
        if tail.is_empty() {
            None
        } else {
            Some(tail)
        }
    }

    /// Whether the review is still a bookmark rather than a visit.
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some("pending")
    }
}
