use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::ratio;

pub use crate::types::{ChannelId, ChannelName, VideoId};

/// Canonical video-performance record produced by the parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Stable video identifier.
    pub id: VideoId,
    /// Video title as published.
    pub title: String,
    /// Channel name; the exact-match key for channel grouping.
    pub channel_name: ChannelName,
    /// Channel identifier assigned by the hosting platform.
    pub channel_id: ChannelId,
    /// Lifetime view count at capture time.
    pub view_count: u64,
    /// Lifetime like count at capture time.
    pub like_count: u64,
    /// Lifetime comment count at capture time.
    pub comment_count: u64,
    /// Publish timestamp normalized to UTC; the Unix epoch when unparsable.
    pub published_at: DateTime<Utc>,
}

impl VideoRecord {
    /// Likes per view; 0 when the record has no views.
    pub fn like_ratio(&self) -> f64 {
        ratio(self.like_count as f64, self.view_count as f64)
    }

    /// Comments per view; 0 when the record has no views.
    pub fn comment_ratio(&self) -> f64 {
        ratio(self.comment_count as f64, self.view_count as f64)
    }

    /// Likes per comment; 0 when the record has no comments.
    pub fn like_comment_ratio(&self) -> f64 {
        ratio(self.like_count as f64, self.comment_count as f64)
    }
}
