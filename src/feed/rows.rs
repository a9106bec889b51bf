// Feed row decoding — turns raw `get_feed` rows into FeedReviews.
//
// The feed query returns one flat row per review with the author, building,
// and photos nested as JSON objects. Rows marked `ignored` are hidden from
// the feed entirely. Missing display fields get the same defaults the feed
// has always shown ("Unknown Building", zero counts, not liked).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::models::{FeedBuilding, FeedReview, FeedUser, ReviewImage};

/// Building name shown when the row carries none.
pub const UNKNOWN_BUILDING: &str = "Unknown Building";

/// Review status that removes a row from the feed.
const IGNORED_STATUS: &str = "ignored";

/// Author columns of a feed row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified_architect: Option<bool>,
}

/// Building columns of a feed row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingData {
    pub id: Option<String>,
    pub short_id: Option<i64>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub main_image_url: Option<String>,
    pub architects: Option<Vec<String>>,
    pub year_completed: Option<i32>,
}

/// A photo row attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRow {
    pub id: String,
    pub storage_path: String,
    pub likes_count: Option<i64>,
    pub is_liked: Option<bool>,
}

/// One row as returned by the feed query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedRow {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_data: Option<UserData>,
    #[serde(default)]
    pub building_data: Option<BuildingData>,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub comments_count: Option<i64>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default)]
    pub review_images: Option<Vec<ImageRow>>,
    #[serde(default)]
    pub is_suggested: Option<bool>,
    #[serde(default)]
    pub suggestion_reason: Option<String>,
}

impl FeedRow {
    pub fn is_ignored(&self) -> bool {
        self.status.as_deref() == Some(IGNORED_STATUS)
    }

    /// Convert this row into a feed entry, filling display defaults.
    ///
    /// `image_base_url` is prefixed to relative photo storage paths.
    pub fn into_review(self, image_base_url: Option<&str>) -> FeedReview {
        let user_data = self.user_data.unwrap_or_default();
        let building_data = self.building_data.unwrap_or_default();

        let images = self
            .review_images
            .unwrap_or_default()
            .into_iter()
            .map(|img| ReviewImage {
                url: image_url(image_base_url, &img.storage_path),
                id: img.id,
                likes_count: img.likes_count.unwrap_or(0),
                is_liked: img.is_liked.unwrap_or(false),
            })
            .collect();

        FeedReview {
            id: self.id,
            user_id: self.user_id,
            user: FeedUser {
                username: non_empty(user_data.username),
                avatar_url: non_empty(user_data.avatar_url),
                is_verified_architect: user_data.is_verified_architect.unwrap_or(false),
            },
            created_at: self.created_at,
            edited_at: self.edited_at,
            building: FeedBuilding {
                id: building_data.id,
                short_id: building_data.short_id,
                slug: building_data.slug,
                name: non_empty(building_data.name)
                    .unwrap_or_else(|| UNKNOWN_BUILDING.to_string()),
                address: non_empty(building_data.address),
                city: non_empty(building_data.city),
                country: non_empty(building_data.country),
                main_image_url: non_empty(building_data.main_image_url),
                architects: building_data.architects,
                year_completed: building_data.year_completed,
            },
            images,
            content: self.content,
            rating: self.rating,
            tags: self.tags.unwrap_or_default(),
            status: self.status,
            group_id: self.group_id,
            likes_count: self.likes_count.unwrap_or(0),
            comments_count: self.comments_count.unwrap_or(0),
            is_liked: self.is_liked.unwrap_or(false),
            is_suggested: self.is_suggested.unwrap_or(false),
            suggestion_reason: self.suggestion_reason,
        }
    }
}

/// Build the public URL for a review photo.
///
/// Absolute URLs pass through untouched. Relative storage paths are joined
/// onto `base` with exactly one slash at the seam.
pub fn image_url(base: Option<&str>, storage_path: &str) -> String {
    if storage_path.starts_with("http://") || storage_path.starts_with("https://") {
        return storage_path.to_string();
    }

    match base {
        Some(base) if !base.is_empty() => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            storage_path.trim_start_matches('/')
        ),
        _ => storage_path.to_string(),
    }
}

/// Parse a JSON array of feed rows and convert the visible ones to entries.
///
/// Row order is preserved; ignored rows are dropped.
pub fn decode_feed_rows(json: &str, image_base_url: Option<&str>) -> Result<Vec<FeedReview>> {
    let rows: Vec<FeedRow> =
        serde_json::from_str(json).context("Failed to parse feed rows as a JSON array")?;
    Ok(rows_to_reviews(rows, image_base_url))
}

/// Read a feed export from disk and decode it.
pub fn read_feed_file(path: &Path, image_base_url: Option<&str>) -> Result<Vec<FeedReview>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed file {}", path.display()))?;
    decode_feed_rows(&json, image_base_url)
        .with_context(|| format!("Invalid feed file {}", path.display()))
}

/// Convert already-parsed rows to entries, dropping ignored rows.
pub fn rows_to_reviews(rows: Vec<FeedRow>, image_base_url: Option<&str>) -> Vec<FeedReview> {
    let total = rows.len();

    let reviews: Vec<FeedReview> = rows
        .into_iter()
        .filter(|row| {
            if row.is_ignored() {
                debug!(review_id = %row.id, "Skipping ignored feed row");
                false
            } else {
                true
            }
        })
        .map(|row| row.into_review(image_base_url))
        .collect();

    info!(
        decoded = reviews.len(),
        ignored = total - reviews.len(),
        "Decoded feed rows"
    );

    reviews
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
