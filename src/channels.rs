//! Channel aggregation and view-count ranking.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::config::ChannelRankingConfig;
use crate::data::VideoRecord;
use crate::normalize::sqrt_compress;
use crate::types::ChannelName;

/// Aggregated lifetime totals for one channel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelAggregate {
    /// Channel name, exactly as it appeared in the records.
    pub channel_name: ChannelName,
    /// Number of videos aggregated into this entry.
    pub video_count: usize,
    /// Sum of view counts across the channel's videos.
    pub total_views: f64,
    /// Sum of like counts across the channel's videos.
    pub total_likes: f64,
    /// Sum of comment counts across the channel's videos.
    pub total_comments: f64,
}

/// Ranked channel aggregates plus the scale reference for height mapping.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelRanking {
    /// Channels ordered by total views, largest first.
    pub channels: Vec<ChannelAggregate>,
    /// Largest `total_views` among the kept channels, floored at 1.0 so
    /// height normalization never divides by zero.
    pub max_total_views: f64,
}

impl ChannelRanking {
    /// Square-root-compressed height scalar in `[0, 1]` for one aggregate.
    pub fn height01(&self, aggregate: &ChannelAggregate) -> f64 {
        sqrt_compress(aggregate.total_views / self.max_total_views)
    }

    /// Number of kept channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Group records by exact channel name and keep the top
/// `config.max_channels` channels by total views.
///
/// Grouping does no trimming or case folding: names differing in case or
/// surrounding whitespace count as distinct channels. The descending sort
/// is stable, so channels tied on total views keep the order in which they
/// first appeared in the input.
pub fn rank_channels(records: &[VideoRecord], config: &ChannelRankingConfig) -> ChannelRanking {
    let mut groups: IndexMap<&str, ChannelAggregate> = IndexMap::new();
    for record in records {
        let entry = groups
            .entry(record.channel_name.as_str())
            .or_insert_with(|| ChannelAggregate {
                channel_name: record.channel_name.clone(),
                video_count: 0,
                total_views: 0.0,
                total_likes: 0.0,
                total_comments: 0.0,
            });
        entry.video_count += 1;
        entry.total_views += record.view_count as f64;
        entry.total_likes += record.like_count as f64;
        entry.total_comments += record.comment_count as f64;
    }
    let grouped = groups.len();

    let mut channels: Vec<ChannelAggregate> = groups.into_values().collect();
    channels.sort_by(|a, b| b.total_views.total_cmp(&a.total_views));
    channels.truncate(config.max_channels);

    // Max over the kept set; <= 0 (empty input or all-zero views) floors to 1.
    let mut max_total_views = channels
        .iter()
        .map(|aggregate| aggregate.total_views)
        .fold(0.0, f64::max);
    if max_total_views <= 0.0 {
        max_total_views = 1.0;
    }

    debug!(grouped, kept = channels.len(), max_total_views, "ranked channels");
    ChannelRanking {
        channels,
        max_total_views,
    }
}
