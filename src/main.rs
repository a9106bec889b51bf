use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use plano_feed::config::{Config, OutputFormat};
use plano_feed::feed::aggregation::FeedStats;
use plano_feed::feed::{aggregate_feed, likes, rows};
use plano_feed::output::terminal;

/// PLANO feed: group building reviews into the activity feed's display units.
///
/// Reads an export of the `get_feed` query (a JSON array of rows, newest
/// first) and shows how the feed would be laid out.
#[derive(Parser)]
#[command(name = "plano-feed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a feed export and print the result
    Aggregate {
        /// Feed export to read (defaults to PLANO_FEED_PATH)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print aggregated items as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Show how many hero, compact, and cluster items a feed produces
    Stats {
        /// Feed export to read (defaults to PLANO_FEED_PATH)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Preview the optimistic like toggle on a review or one of its photos
    Like {
        /// The review to like or unlike
        review_id: String,

        /// Toggle the like on this photo of the review instead
        #[arg(long)]
        image: Option<String>,

        /// Feed export to read (defaults to PLANO_FEED_PATH)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plano_feed=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Aggregate { file, json } => {
            let path = config.require_feed_path(file)?;
            let reviews = rows::read_feed_file(&path, config.image_base_url.as_deref())?;
            info!(reviews = reviews.len(), path = %path.display(), "Aggregating feed");

            let items = aggregate_feed(reviews);

            if json || config.output_format == OutputFormat::Json {
                let out = serde_json::to_string_pretty(&items)
                    .context("Failed to serialize aggregated feed")?;
                println!("{out}");
            } else {
                terminal::display_feed(&items, Utc::now());
            }
        }

        Commands::Stats { file } => {
            let path = config.require_feed_path(file)?;
            let reviews = rows::read_feed_file(&path, config.image_base_url.as_deref())?;
            let items = aggregate_feed(reviews);
            let stats = FeedStats::from_items(&items);

            if config.output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                terminal::display_feed_stats(&stats);
            }
        }

        Commands::Like {
            review_id,
            image,
            file,
        } => {
            let path = config.require_feed_path(file)?;
            let mut reviews = rows::read_feed_file(&path, config.image_base_url.as_deref())?;

            let (target, before) = match image.as_deref() {
                Some(image_id) => (
                    format!("photo {image_id} of review {review_id}"),
                    likes::toggle_image_like(&mut reviews, &review_id, image_id),
                ),
                None => (
                    format!("review {review_id}"),
                    likes::toggle_review_like(&mut reviews, &review_id),
                ),
            };

            let Some(before) = before else {
                anyhow::bail!("No {target} in {}", path.display());
            };

            let after = likes::like_state(&reviews, &review_id, image.as_deref())
                .context("Toggled entry disappeared from the feed")?;
            let verb = if after.is_liked { "Liked" } else { "Unliked" };
            println!(
                "{} {}: {} -> {} likes",
                verb.bold(),
                target,
                before.likes_count,
                after.likes_count.to_string().green()
            );
        }
    }

    Ok(())
}
