// Like toggling — optimistic updates over loaded feed entries.
//
// The feed flips the like state locally before the remote write completes.
// Each toggle returns a snapshot of the previous state so a failed write
// can be rolled back.

use tracing::debug;

use super::models::FeedReview;

/// Like state captured before a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSnapshot {
    pub is_liked: bool,
    pub likes_count: i64,
}

/// Flip a like flag and move the counter with it. Counts never go negative.
fn flip(is_liked: &mut bool, likes_count: &mut i64) -> LikeSnapshot {
    let snapshot = LikeSnapshot {
        is_liked: *is_liked,
        likes_count: *likes_count,
    };
    if *is_liked {
        *likes_count = (*likes_count - 1).max(0);
    } else {
        *likes_count += 1;
    }
    *is_liked = !*is_liked;
    snapshot
}

/// Toggle the viewer's like on a review.
///
/// Returns the state before the toggle, or `None` if no entry matched.
pub fn toggle_review_like(entries: &mut [FeedReview], review_id: &str) -> Option<LikeSnapshot> {
    let review = entries.iter_mut().find(|r| r.id == review_id)?;
    let snapshot = flip(&mut review.is_liked, &mut review.likes_count);
    debug!(review_id, liked = review.is_liked, "Toggled review like");
    Some(snapshot)
}

/// Toggle the viewer's like on one photo of a review.
pub fn toggle_image_like(
    entries: &mut [FeedReview],
    review_id: &str,
    image_id: &str,
) -> Option<LikeSnapshot> {
    let review = entries.iter_mut().find(|r| r.id == review_id)?;
    let image = review.images.iter_mut().find(|i| i.id == image_id)?;
    let snapshot = flip(&mut image.is_liked, &mut image.likes_count);
    debug!(review_id, image_id, liked = image.is_liked, "Toggled image like");
    Some(snapshot)
}

/// Current like state of a review, or of one of its photos when `image_id`
/// is given.
pub fn like_state(
    entries: &[FeedReview],
    review_id: &str,
    image_id: Option<&str>,
) -> Option<LikeSnapshot> {
    let review = entries.iter().find(|r| r.id == review_id)?;
    match image_id {
        Some(image_id) => review
            .images
            .iter()
            .find(|i| i.id == image_id)
            .map(|i| LikeSnapshot {
                is_liked: i.is_liked,
                likes_count: i.likes_count,
            }),
        None => Some(LikeSnapshot {
            is_liked: review.is_liked,
            likes_count: review.likes_count,
        }),
    }
}

/// Restore a review's like state after a failed write.
pub fn revert_review_like(entries: &mut [FeedReview], review_id: &str, snapshot: LikeSnapshot) {
    if let Some(review) = entries.iter_mut().find(|r| r.id == review_id) {
        review.is_liked = snapshot.is_liked;
        review.likes_count = snapshot.likes_count;
    }
}

/// Restore a photo's like state after a failed write.
pub fn revert_image_like(
    entries: &mut [FeedReview],
    review_id: &str,
    image_id: &str,
    snapshot: LikeSnapshot,
) {
    let image = entries
        .iter_mut()
        .find(|r| r.id == review_id)
        .and_then(|r| r.images.iter_mut().find(|i| i.id == image_id));
    if let Some(image) = image {
        image.is_liked = snapshot.is_liked;
        image.likes_count = snapshot.likes_count;
    }
}
