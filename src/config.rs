use crate::constants::limits::{
    DEFAULT_MAX_CHANNELS, DEFAULT_MAX_POINTS, DEFAULT_MAX_SHAPES, DEFAULT_RADAR_RADIUS,
};

/// Controls how many channels the ranking keeps.
#[derive(Clone, Debug)]
pub struct ChannelRankingConfig {
    /// Number of top channels (by total views) kept after ranking.
    pub max_channels: usize,
}

impl Default for ChannelRankingConfig {
    fn default() -> Self {
        Self {
            max_channels: DEFAULT_MAX_CHANNELS,
        }
    }
}

/// Controls how many records the scatter projection keeps.
#[derive(Clone, Debug)]
pub struct ScatterConfig {
    /// Number of top records (by views) kept before the date re-sort.
    pub max_points: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Controls shape count and outline geometry for the radar projection.
#[derive(Clone, Debug)]
pub struct RadarConfig {
    /// Number of top records (by views) given a shape.
    pub max_shapes: usize,
    /// Outline scale; each axis vertex sits at `radius * metric01` from the origin.
    pub radius: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_shapes: DEFAULT_MAX_SHAPES,
            radius: DEFAULT_RADAR_RADIUS,
        }
    }
}
