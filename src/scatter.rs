//! Engagement scatter projection.
//!
//! Record selection runs two independent passes: rank by views to pick the
//! subset, then re-sort the survivors by publish date. Folding these into
//! one multi-key sort would change which records survive truncation, so the
//! passes stay separate.

use tracing::debug;

use crate::config::ScatterConfig;
use crate::data::VideoRecord;
use crate::normalize::{MinMax, clamp01};

/// One projected record in the scatter space.
#[derive(Clone, Debug)]
pub struct ScatterPoint<'a> {
    /// Source record this point was derived from.
    pub record: &'a VideoRecord,
    /// Position along the time axis by rank: oldest 0.0, newest 1.0.
    /// Spacing is uniform per rank, not proportional to elapsed time.
    pub time_rank01: f64,
    /// Like ratio normalized across the selected subset.
    pub like_ratio01: f64,
    /// Comment ratio normalized across the selected subset.
    pub comment_ratio01: f64,
    /// Raw likes-per-view, kept unnormalized for the color axis.
    pub engagement_score: f64,
}

/// Scatter points plus the engagement range the color consumer maps against.
#[derive(Clone, Debug)]
pub struct ScatterProjection<'a> {
    /// Points ordered by publish date, oldest first.
    pub points: Vec<ScatterPoint<'a>>,
    /// Engagement range over the selected subset. The color axis normalizes
    /// against this on its own, independent of the position axes.
    pub engagement: MinMax,
}

impl<'a> ScatterProjection<'a> {
    /// Normalized, clamped color scalar in `[0, 1]` for one point.
    pub fn engagement01(&self, point: &ScatterPoint<'a>) -> f64 {
        clamp01(self.engagement.normalize(point.engagement_score))
    }

    /// Number of projected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the projection holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Project the top `config.max_points` records by views onto the
/// time-rank, like-ratio, and comment-ratio axes.
///
/// Both sorts are stable: view-count ties keep input order, and records
/// sharing a publish timestamp keep their view-rank order.
pub fn project_scatter<'a>(
    records: &'a [VideoRecord],
    config: &ScatterConfig,
) -> ScatterProjection<'a> {
    let mut selected: Vec<&VideoRecord> = records.iter().collect();
    selected.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    selected.truncate(config.max_points);
    selected.sort_by(|a, b| a.published_at.cmp(&b.published_at));

    if selected.is_empty() {
        debug!("scatter projection over empty input");
        return ScatterProjection {
            points: Vec::new(),
            engagement: MinMax::default(),
        };
    }

    let like_range = MinMax::of(selected.iter().map(|record| record.like_ratio()));
    let comment_range = MinMax::of(selected.iter().map(|record| record.comment_ratio()));
    // The color axis scans its own range even though it shares the
    // underlying like ratio with the Y axis.
    let engagement = MinMax::of(selected.iter().map(|record| record.like_ratio()));

    let count = selected.len();
    let points: Vec<ScatterPoint<'a>> = selected
        .into_iter()
        .enumerate()
        .map(|(index, record)| ScatterPoint {
            record,
            time_rank01: if count > 1 {
                index as f64 / (count - 1) as f64
            } else {
                0.5
            },
            like_ratio01: like_range.normalize(record.like_ratio()),
            comment_ratio01: comment_range.normalize(record.comment_ratio()),
            engagement_score: record.like_ratio(),
        })
        .collect();

    debug!(points = points.len(), "projected scatter");
    ScatterProjection { points, engagement }
}
