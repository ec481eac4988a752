#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Channel aggregation and view-count ranking.
pub mod channels;
/// Projection limit and geometry configuration types.
pub mod config;
/// Centralized constants used across parsing, normalization, and projections.
pub mod constants;
/// Video record types and derived engagement ratios.
pub mod data;
/// Reusable example runners shared by the demo binaries.
pub mod example_apps;
/// Min-max normalization and scale helpers shared by all projections.
pub mod normalize;
/// Delimited-text parsing into video records.
pub mod parse;
/// Radar shape projection and selection state.
pub mod radar;
/// Engagement scatter projection.
pub mod scatter;
/// Dataset source traits and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use channels::{ChannelAggregate, ChannelRanking, rank_channels};
pub use config::{ChannelRankingConfig, RadarConfig, ScatterConfig};
pub use data::VideoRecord;
pub use errors::DatasetError;
pub use normalize::{MinMax, clamp01, ratio, sqrt_compress};
pub use parse::{parse_records, split_line};
pub use radar::{OutlinePoint, RadarProjection, RadarShape, project_radar};
pub use scatter::{ScatterPoint, ScatterProjection, project_scatter};
pub use source::{DatasetSource, FileSource, InMemorySource, load_records};
pub use types::{ChannelId, ChannelName, VideoId};
