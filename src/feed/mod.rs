// Activity feed — entry models, row decoding, and aggregation into display units.

pub mod aggregation;
pub mod likes;
pub mod models;
pub mod pagination;
pub mod rows;

pub use aggregation::{aggregate_feed, AggregatedFeedItem};
pub use models::{FeedBuilding, FeedReview, FeedUser, ReviewImage};
