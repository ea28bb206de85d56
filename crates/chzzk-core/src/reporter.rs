//! Main reporter API for the Chzzk live stream reporter
//!
//! Provides the high-level operations combining HTTP client, response
//! parsing, ranking and export.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::client::{ChzzkClient, ClientConfig};
use crate::error::{ChzzkError, Result};
use crate::export::export_streams;
use crate::parser::parse_lives_response;
use crate::rank::{CategoryTotals, pick_random, rank_categories};
use crate::types::LiveStream;
use crate::url::build_lives_path;

/// Sample size for the category ranking
pub const CATEGORY_SAMPLE_LIMIT: u32 = 100;

/// Sample size for the random recommendation
pub const RANDOM_SAMPLE_LIMIT: u32 = 50;

/// Sample size for CSV exports
pub const EXPORT_LIMIT: u32 = 100;

/// High-level API over the Chzzk lives feed
///
/// Every operation issues one fresh HTTP request; nothing is cached
/// between calls.
pub struct ChzzkReporter {
    client: ChzzkClient,
}

impl ChzzkReporter {
    /// Create a new reporter with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = ChzzkClient::new()?;
        Ok(Self { client })
    }

    /// Create a new reporter with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = ChzzkClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Fetch currently live broadcasts, most popular first
    ///
    /// Uncategorized broadcasts (24-hour special channels) are filtered
    /// out, so the result may contain fewer than `limit` entries.
    ///
    /// # Arguments
    /// * `limit` - Number of broadcasts to request (positive, capped by the API)
    ///
    /// # Errors
    /// - `InvalidLimit` if `limit` is zero
    /// - `Http` / `Status` if the request fails
    /// - `Decode` if the response body is not the expected JSON
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> chzzk_core::Result<()> {
    /// use chzzk_core::ChzzkReporter;
    /// let reporter = ChzzkReporter::new()?;
    /// let streams = reporter.live_streams(10).await?;
    /// for stream in streams {
    ///     println!("{}: {}", stream.streamer, stream.viewers);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn live_streams(&self, limit: u32) -> Result<Vec<LiveStream>> {
        if limit == 0 {
            return Err(ChzzkError::InvalidLimit(limit));
        }

        let body = self.client.fetch(&build_lives_path(limit)).await?;
        parse_lives_response(&body)
    }

    /// Fetch the top `n` most popular live broadcasts
    ///
    /// The API already returns broadcasts by popularity; the result is
    /// truncated to at most `n` entries. Fewer than `n` live broadcasts
    /// yields a shorter list, not an error.
    ///
    /// # Errors
    /// Same as [`ChzzkReporter::live_streams`]
    pub async fn top_streams(&self, n: u32) -> Result<Vec<LiveStream>> {
        let mut streams = self.live_streams(n).await?;
        streams.truncate(n as usize);
        Ok(streams)
    }

    /// Rank categories by aggregated viewers over a 100-broadcast sample
    ///
    /// Returns all category groups, sorted by total viewers descending;
    /// callers render as many as they need.
    ///
    /// # Errors
    /// Same as [`ChzzkReporter::live_streams`]
    pub async fn category_ranking(&self) -> Result<Vec<CategoryTotals>> {
        let streams = self.live_streams(CATEGORY_SAMPLE_LIMIT).await?;
        Ok(rank_categories(&streams))
    }

    /// Recommend one broadcast picked uniformly from the top 50
    ///
    /// # Errors
    /// - `NoStreams` if the fetch returned no usable broadcasts
    /// - otherwise same as [`ChzzkReporter::live_streams`]
    pub async fn random_stream(&self) -> Result<LiveStream> {
        let streams = self.live_streams(RANDOM_SAMPLE_LIMIT).await?;
        pick_random(&streams, &mut rand::thread_rng())
            .cloned()
            .ok_or(ChzzkError::NoStreams)
    }

    /// Export up to 100 broadcasts to `<dir>/chzzk_lives_<today>.csv`
    ///
    /// The filename is stamped with the current local date. A failed or
    /// empty fetch produces no file at all.
    ///
    /// # Returns
    /// Path of the written file
    ///
    /// # Errors
    /// - `NoStreams` if the fetch returned no usable broadcasts
    /// - `Io` on file-system errors
    /// - otherwise same as [`ChzzkReporter::live_streams`]
    pub async fn export_csv(&self, dir: &Path) -> Result<PathBuf> {
        let streams = self.live_streams(EXPORT_LIMIT).await?;
        if streams.is_empty() {
            return Err(ChzzkError::NoStreams);
        }

        export_streams(dir, &streams, Local::now().date_naive())
    }
}
