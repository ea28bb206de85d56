//! Response parser for the Chzzk lives endpoint
//!
//! Deserializes the JSON body, extracts the nested content list and
//! filters out broadcasts without a category label.

use serde::Deserialize;

use crate::error::Result;
use crate::types::LiveStream;

/// Placeholder used when the API omits a streamer name or title
const MISSING_FIELD: &str = "N/A";

/// Top-level response wrapper: `{"content": {"data": [...]}}`
#[derive(Debug, Deserialize)]
struct LivesResponse {
    #[serde(default)]
    content: Option<LivesContent>,
}

#[derive(Debug, Deserialize)]
struct LivesContent {
    #[serde(default)]
    data: Vec<LiveEntry>,
}

/// One raw broadcast entry as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LiveEntry {
    #[serde(default)]
    channel: Option<ChannelEntry>,
    #[serde(default)]
    live_title: Option<String>,
    #[serde(default)]
    concurrent_user_count: u64,
    #[serde(default)]
    live_category_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelEntry {
    #[serde(default)]
    channel_name: Option<String>,
}

impl LiveEntry {
    /// Converts a raw entry into a [`LiveStream`]
    ///
    /// Returns `None` when the category label is empty or missing
    /// (24-hour uncategorized channels). Missing names and titles fall
    /// back to `"N/A"`, missing viewer counts to 0.
    fn into_stream(self) -> Option<LiveStream> {
        let category = self.live_category_value.filter(|c| !c.is_empty())?;

        let streamer = self
            .channel
            .and_then(|c| c.channel_name)
            .unwrap_or_else(|| MISSING_FIELD.to_string());

        let title = self
            .live_title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| MISSING_FIELD.to_string());

        Some(LiveStream {
            streamer,
            title,
            viewers: self.concurrent_user_count,
            category,
        })
    }
}

/// Parses a lives endpoint response body into live stream records
///
/// # Arguments
/// * `body` - Raw JSON string from the lives endpoint
///
/// # Returns
/// Records in API order (most popular first), uncategorized entries
/// dropped. A response without `content` or `data` yields an empty vec.
///
/// # Errors
/// Returns `Decode` if the body is not valid JSON of the expected shape
pub fn parse_lives_response(body: &str) -> Result<Vec<LiveStream>> {
    let response: LivesResponse = serde_json::from_str(body)?;

    let entries = response.content.map(|c| c.data).unwrap_or_default();

    Ok(entries
        .into_iter()
        .filter_map(LiveEntry::into_stream)
        .collect())
}
