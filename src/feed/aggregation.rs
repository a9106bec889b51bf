// Feed aggregation — groups a newest-first list of reviews into display units.
//
// Two rules, applied in a single forward pass:
// - Image exemption: a review with user photos is always shown on its own
//   as a hero card, and it breaks any run in progress.
// - Clustering: consecutive photo-less reviews by the same author, each
//   less than 4 whole hours from the previous one, are collected into a
//   pending group. Groups of 4+ become one cluster; smaller groups are
//   shown as individual compact rows.
//
// The time window chains against the most recently added member, so a
// long streak of closely spaced reviews can span more than 4 hours.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{FeedReview, FeedUser};

/// Minimum number of reviews in a run before it is collapsed into a cluster.
pub const CLUSTER_MIN_ENTRIES: usize = 4;

/// Maximum gap, in whole hours, between neighbouring reviews of a cluster.
/// The comparison is strict: a gap of exactly this many hours splits the run.
pub const CLUSTER_WINDOW_HOURS: i64 = 4;

/// One display unit of the aggregated feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AggregatedFeedItem {
    /// A review with user photos, always shown on its own
    Hero { entry: FeedReview },
    /// A review from a run too short to cluster
    Compact { entry: FeedReview },
    /// A run of same-author reviews collapsed into one card
    Cluster {
        entries: Vec<FeedReview>,
        /// Display user of the newest review in the run
        user: FeedUser,
        /// Shared city of the run, if every known location agrees
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        /// Effective timestamp of the newest review in the run
        timestamp: DateTime<Utc>,
    },
}

impl AggregatedFeedItem {
    /// The reviews wrapped by this item, in feed order.
    pub fn entries(&self) -> &[FeedReview] {
        match self {
            AggregatedFeedItem::Hero { entry } | AggregatedFeedItem::Compact { entry } => {
                std::slice::from_ref(entry)
            }
            AggregatedFeedItem::Cluster { entries, .. } => entries,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AggregatedFeedItem::Hero { .. } => "hero",
            AggregatedFeedItem::Compact { .. } => "compact",
            AggregatedFeedItem::Cluster { .. } => "cluster",
        }
    }
}

/// Counts of each item kind in an aggregated feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStats {
    pub hero: usize,
    pub compact: usize,
    pub cluster: usize,
    /// Total reviews across all items
    pub entries: usize,
}

impl FeedStats {
    pub fn from_items(items: &[AggregatedFeedItem]) -> Self {
        let mut stats = Self::default();
        for item in items {
            match item {
                AggregatedFeedItem::Hero { .. } => stats.hero += 1,
                AggregatedFeedItem::Compact { .. } => stats.compact += 1,
                AggregatedFeedItem::Cluster { .. } => stats.cluster += 1,
            }
            stats.entries += item.entries().len();
        }
        stats
    }
}

/// The run of reviews collected but not yet emitted.
///
/// Empty means no run is in progress; otherwise the last element is the
/// anchor that the next review is compared against.
#[derive(Default)]
struct PendingGroup {
    entries: Vec<FeedReview>,
}

impl PendingGroup {
    /// Whether `review` continues the current run.
    fn accepts(&self, review: &FeedReview) -> bool {
        match self.entries.last() {
            Some(last) => {
                review.user_id == last.user_id
                    && within_cluster_window(
                        review.effective_timestamp(),
                        last.effective_timestamp(),
                    )
            }
            None => false,
        }
    }

    fn push(&mut self, review: FeedReview) {
        self.entries.push(review);
    }

    /// Emit the run into `out` and reset to empty.
    fn flush(&mut self, out: &mut Vec<AggregatedFeedItem>) {
        if self.entries.is_empty() {
            return;
        }

        let entries = std::mem::take(&mut self.entries);

        if entries.len() < CLUSTER_MIN_ENTRIES {
            debug!(size = entries.len(), "Flushing short run as compact rows");
            out.extend(
                entries
                    .into_iter()
                    .map(|entry| AggregatedFeedItem::Compact { entry }),
            );
            return;
        }

        let location = resolve_cluster_location(&entries);
        let user = entries[0].user.clone();
        let timestamp = entries[0].effective_timestamp();

        debug!(
            size = entries.len(),
            user_id = %entries[0].user_id,
            location = location.as_deref().unwrap_or("-"),
            "Flushing run as cluster"
        );

        out.push(AggregatedFeedItem::Cluster {
            entries,
            user,
            location,
            timestamp,
        });
    }
}

/// Whether two timestamps are less than `CLUSTER_WINDOW_HOURS` whole hours
/// apart. Partial hours are truncated, so 3h59m is inside the window.
pub fn within_cluster_window(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    (a - b).num_hours().abs() < CLUSTER_WINDOW_HOURS
}

/// Pick a single location label for a run of reviews.
///
/// Returns the location only when every review that has one agrees on it.
/// Mixed locations, or no location data at all, yield `None`.
pub fn resolve_cluster_location(entries: &[FeedReview]) -> Option<String> {
    let candidates: BTreeSet<&str> = entries
        .iter()
        .filter_map(FeedReview::location_candidate)
        .collect();

    if candidates.len() == 1 {
        candidates.into_iter().next().map(str::to_string)
    } else {
        None
    }
}

/// Aggregate a newest-first list of reviews into feed display items.
///
/// The input must already be sorted by effective timestamp, newest first.
/// Unsorted input is not rejected; it only produces less useful clusters.
/// Every review appears in exactly one output item, and flattening the
/// output reproduces the input order.
pub fn aggregate_feed<I>(reviews: I) -> Vec<AggregatedFeedItem>
where
    I: IntoIterator<Item = FeedReview>,
{
    let mut aggregated = Vec::new();
    let mut pending = PendingGroup::default();

    for review in reviews {
        if review.has_user_images() {
            pending.flush(&mut aggregated);
            aggregated.push(AggregatedFeedItem::Hero { entry: review });
            continue;
        }

        if !pending.accepts(&review) {
            pending.flush(&mut aggregated);
        }
        pending.push(review);
    }

    pending.flush(&mut aggregated);

    debug!(items = aggregated.len(), "Aggregated feed");

    aggregated
}
