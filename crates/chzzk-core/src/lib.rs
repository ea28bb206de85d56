//! Chzzk Live Stream Reporter Core Library
//!
//! Provides an async API for fetching currently live Chzzk broadcasts and
//! turning them into simple reports.
//!
//! # Overview
//!
//! This crate covers the data side of the reporter:
//! - HTTP client for the Chzzk lives endpoint
//! - JSON response parsing with category filtering
//! - Top-N listing, category aggregation and random recommendation
//! - BOM-prefixed CSV export with a date-stamped filename
//!
//! # Example
//!
//! ```no_run
//! use chzzk_core::{ChzzkReporter, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reporter = ChzzkReporter::new()?;
//!
//!     // Top 10 live broadcasts by viewers
//!     for (i, stream) in reporter.top_streams(10).await?.iter().enumerate() {
//!         println!("{}. {} ({} viewers)", i + 1, stream.streamer, stream.viewers);
//!     }
//!
//!     // Categories ranked by aggregated viewers
//!     for totals in reporter.category_ranking().await?.iter().take(10) {
//!         println!("{}: {}", totals.category, totals.viewers);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Every operation issues one fresh HTTP request against the lives
//! endpoint; nothing is cached or persisted beyond the export file.

mod client;
mod error;
mod export;
pub mod parser;
mod rank;
mod reporter;
mod types;
pub mod url;

// Re-export client types
pub use client::{ChzzkClient, ClientConfig};

// Re-export error types
pub use error::{ChzzkError, Result};

// Re-export export helpers
pub use export::{EXPORT_PREFIX, export_filename, export_streams, write_csv};

// Re-export parser functions
pub use parser::parse_lives_response;

// Re-export ranking helpers
pub use rank::{CategoryTotals, pick_random, rank_categories};

// Re-export main reporter API
pub use reporter::{CATEGORY_SAMPLE_LIMIT, ChzzkReporter, EXPORT_LIMIT, RANDOM_SAMPLE_LIMIT};

// Re-export data types
pub use types::LiveStream;
