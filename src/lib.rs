// PLANO feed: activity feed aggregation for building reviews
//
// This is the library root. `feed` holds the data model and the aggregation
// algorithm; `output` renders aggregated feeds for the terminal.

pub mod config;
pub mod feed;
pub mod output;
