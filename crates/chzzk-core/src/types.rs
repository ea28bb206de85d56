//! Core data types for the Chzzk live stream reporter
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

/// Represents one live broadcast from the Chzzk lives feed
///
/// Records are built fresh from each API response and are never cached.
/// Broadcasts without a category label are filtered out during parsing,
/// so `category` is always non-empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStream {
    /// Streamer (channel) display name
    pub streamer: String,

    /// Live broadcast title, surrounding whitespace trimmed
    pub title: String,

    /// Concurrent viewer count at fetch time
    pub viewers: u64,

    /// Category label (e.g. "Just Chatting", a game name)
    pub category: String,
}
