//! Radar shape projection for per-record multi-metric comparison.
//!
//! Unlike the scatter projection, metric ranges here scan the FULL dataset
//! rather than the kept subset. A shape's geometry therefore shows where
//! the record sits among all records, and stays put when `max_shapes`
//! changes.

use tracing::debug;

use crate::config::RadarConfig;
use crate::data::VideoRecord;
use crate::normalize::MinMax;

/// A 2D offset in the radar plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlinePoint {
    /// Horizontal offset from the radar origin.
    pub x: f64,
    /// Vertical offset from the radar origin.
    pub y: f64,
}

/// Closed four-axis star outline for one record.
#[derive(Clone, Debug)]
pub struct RadarShape<'a> {
    /// Source record this shape was derived from.
    pub record: &'a VideoRecord,
    /// View count normalized across the full dataset.
    pub views01: f64,
    /// Like count normalized across the full dataset.
    pub likes01: f64,
    /// Comment count normalized across the full dataset.
    pub comments01: f64,
    /// Like-per-comment ratio normalized across the full dataset.
    pub like_comment_ratio01: f64,
    /// Closed outline: views on +X, likes on +Y, comments on -X,
    /// like/comment ratio on -Y, then the first vertex repeated.
    pub outline: [OutlinePoint; 5],
    /// Whether this shape currently carries the selection highlight.
    pub highlighted: bool,
}

/// Radar shapes plus the single selection slot.
///
/// Highlight state changes only through [`RadarProjection::select`] and
/// [`RadarProjection::clear_selection`]; shapes are exposed read-only, which
/// keeps "at most one shape highlighted" enforced in one place.
#[derive(Clone, Debug)]
pub struct RadarProjection<'a> {
    shapes: Vec<RadarShape<'a>>,
    selected: Option<usize>,
}

impl<'a> RadarProjection<'a> {
    /// Shapes in view-count order, most viewed first.
    pub fn shapes(&self) -> &[RadarShape<'a>] {
        &self.shapes
    }

    /// Number of projected shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the projection holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Index of the currently selected shape, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Currently selected shape, if any.
    pub fn selected_shape(&self) -> Option<&RadarShape<'a>> {
        self.selected.map(|index| &self.shapes[index])
    }

    /// Select the shape at `index`, moving the highlight to it.
    ///
    /// Any previously selected shape is unhighlighted first. Selecting the
    /// already-selected index is a no-op that leaves it highlighted. Returns
    /// false (changing nothing) when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        if let Some(previous) = self.selected {
            self.shapes[previous].highlighted = false;
        }
        self.shapes[index].highlighted = true;
        self.selected = Some(index);
        true
    }

    /// Drop the selection, unhighlighting the selected shape if there is one.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.shapes[previous].highlighted = false;
        }
    }
}

/// Project the top `config.max_shapes` records by views into radar shapes.
///
/// The view-count sort is stable, so ties keep input order. No shape starts
/// out highlighted.
pub fn project_radar<'a>(records: &'a [VideoRecord], config: &RadarConfig) -> RadarProjection<'a> {
    let views_range = MinMax::of(records.iter().map(|r| r.view_count as f64));
    let likes_range = MinMax::of(records.iter().map(|r| r.like_count as f64));
    let comments_range = MinMax::of(records.iter().map(|r| r.comment_count as f64));
    let ratio_range = MinMax::of(records.iter().map(|r| r.like_comment_ratio()));

    let mut selected: Vec<&VideoRecord> = records.iter().collect();
    selected.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    selected.truncate(config.max_shapes);

    let shapes: Vec<RadarShape<'a>> = selected
        .into_iter()
        .map(|record| {
            let views01 = views_range.normalize(record.view_count as f64);
            let likes01 = likes_range.normalize(record.like_count as f64);
            let comments01 = comments_range.normalize(record.comment_count as f64);
            let like_comment_ratio01 = ratio_range.normalize(record.like_comment_ratio());
            RadarShape {
                record,
                views01,
                likes01,
                comments01,
                like_comment_ratio01,
                outline: star_outline(
                    config.radius,
                    views01,
                    likes01,
                    comments01,
                    like_comment_ratio01,
                ),
                highlighted: false,
            }
        })
        .collect();

    debug!(shapes = shapes.len(), radius = config.radius, "projected radar shapes");
    RadarProjection {
        shapes,
        selected: None,
    }
}

fn star_outline(
    radius: f64,
    views01: f64,
    likes01: f64,
    comments01: f64,
    ratio01: f64,
) -> [OutlinePoint; 5] {
    let first = OutlinePoint {
        x: radius * views01,
        y: 0.0,
    };
    [
        first,
        OutlinePoint {
            x: 0.0,
            y: radius * likes01,
        },
        OutlinePoint {
            x: -radius * comments01,
            y: 0.0,
        },
        OutlinePoint {
            x: 0.0,
            y: -radius * ratio01,
        },
        first,
    ]
}
