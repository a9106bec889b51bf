// Colored terminal output for the aggregated feed.
//
// Each item kind gets its own treatment: hero cards are bold and show photo
// and like counts, compact items are a single dimmed line, and clusters get
// a header followed by one indented line per building.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::feed::aggregation::FeedStats;
use crate::feed::{AggregatedFeedItem, FeedReview};

use super::{display_username, relative_time, review_action, truncate_chars, UNKNOWN_USER};

/// Display an aggregated feed in the terminal.
pub fn display_feed(items: &[AggregatedFeedItem], now: DateTime<Utc>) {
    if items.is_empty() {
        println!("Your feed is empty. Follow people or join a group to see their visits.");
        return;
    }

    println!("\n{}", format!("=== Feed ({} items) ===", items.len()).bold());
    println!();

    for item in items {
        match item {
            AggregatedFeedItem::Hero { entry } => display_hero(entry, now),
            AggregatedFeedItem::Compact { entry } => display_compact(entry, now),
            AggregatedFeedItem::Cluster {
                entries,
                user,
                location,
                timestamp,
            } => {
                let username = user.username.as_deref().unwrap_or(UNKNOWN_USER);
                let place = match location {
                    Some(location) => format!(" in {}", location.cyan()),
                    None => String::new(),
                };
                println!(
                    "  {} {} visited {} buildings{}  {}",
                    "[]".blue().bold(),
                    username.bold(),
                    entries.len(),
                    place,
                    relative_time(*timestamp, now).dimmed()
                );
                for entry in entries {
                    println!(
                        "      - {}{}",
                        entry.building.name,
                        rating_suffix(entry.rating)
                    );
                }
                println!();
            }
        }
    }
}

fn display_hero(entry: &FeedReview, now: DateTime<Utc>) {
    println!(
        "  {} {} {} {}",
        "**".yellow().bold(),
        display_username(entry).bold(),
        review_action(entry).dimmed(),
        entry.building.name.bold()
    );

    let city = entry.location_candidate().unwrap_or("");
    println!(
        "     {}{}  {}",
        city.cyan(),
        rating_suffix(entry.rating),
        relative_time(entry.effective_timestamp(), now).dimmed()
    );

    if let Some(content) = entry.content.as_deref().filter(|c| !c.is_empty()) {
        println!("     \"{}\"", truncate_chars(content, 140).italic());
    }

    println!(
        "     {} photos  {} likes  {} comments",
        entry.images.len(),
        entry.likes_count,
        entry.comments_count
    );
    println!();
}

fn display_compact(entry: &FeedReview, now: DateTime<Utc>) {
    println!(
        "  {} {} {} {}{}  {}",
        "-".dimmed(),
        display_username(entry),
        review_action(entry).dimmed(),
        entry.building.name,
        rating_suffix(entry.rating),
        relative_time(entry.effective_timestamp(), now).dimmed()
    );
}

/// Five-dot rating, or nothing for unrated reviews.
fn rating_suffix(rating: Option<i32>) -> String {
    match rating {
        Some(r) if r > 0 => {
            let filled = r.clamp(0, 5) as usize;
            format!(" {}{}", "●".repeat(filled), "○".repeat(5 - filled).dimmed())
        }
        _ => String::new(),
    }
}

/// Display item counts for an aggregated feed.
pub fn display_feed_stats(stats: &FeedStats) {
    println!("\n{}", "=== Feed Summary ===".bold());
    println!("  Reviews:  {}", stats.entries);
    println!("  Hero:     {}", stats.hero.to_string().yellow());
    println!("  Compact:  {}", stats.compact);
    println!("  Clusters: {}", stats.cluster.to_string().blue());
}
