/// Constants describing the delimited dataset layout.
pub mod csv {
    /// Minimum split-field count for a row to be accepted.
    pub const MIN_FIELDS: usize = 9;

    /// Column index of the video id field.
    pub const COL_VIDEO_ID: usize = 0;
    /// Column index of the video title field.
    pub const COL_TITLE: usize = 1;
    /// Column index of the channel name field.
    pub const COL_CHANNEL_NAME: usize = 2;
    /// Column index of the channel id field.
    pub const COL_CHANNEL_ID: usize = 3;
    /// Column index of the view count field.
    pub const COL_VIEW_COUNT: usize = 4;
    /// Column index of the like count field.
    pub const COL_LIKE_COUNT: usize = 5;
    /// Column index of the comment count field.
    pub const COL_COMMENT_COUNT: usize = 6;
    /// Column index of the publish timestamp field.
    pub const COL_PUBLISHED_AT: usize = 7;

    /// Log message used when rows with too few fields are skipped.
    pub const SKIP_SHORT_ROW_MSG: &str = "skipping row with too few fields";
}

/// Constants governing normalization policy.
pub mod normalize {
    /// Ranges narrower than this are degenerate; every value maps to the midpoint.
    pub const DEGENERATE_RANGE_EPSILON: f64 = 1e-4;
    /// Normalized output for all values of a degenerate range.
    pub const DEGENERATE_MIDPOINT: f64 = 0.5;
    /// Lower bound substituted when a scanned range has no finite minimum.
    pub const FALLBACK_MIN: f64 = 0.0;
    /// Upper bound substituted when a scanned range has no finite maximum.
    pub const FALLBACK_MAX: f64 = 1.0;
}

/// Constants for accepted publish-timestamp formats beyond RFC 3339.
pub mod timestamps {
    /// Date-time formats tried in order after RFC 3339 parsing fails.
    pub const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    /// Date-only format tried last; parsed dates get a midnight UTC time.
    pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Default projection limits mirrored by the config types.
pub mod limits {
    /// Default number of top channels kept by the channel ranking.
    pub const DEFAULT_MAX_CHANNELS: usize = 10;
    /// Default number of top records kept by the scatter projection.
    pub const DEFAULT_MAX_POINTS: usize = 200;
    /// Default number of top records given a radar shape.
    pub const DEFAULT_MAX_SHAPES: usize = 50;
    /// Default radar outline radius; axis offsets are `radius * metric01`.
    pub const DEFAULT_RADAR_RADIUS: f64 = 2.0;
}

/// Constants used by the bundled demo runners.
pub mod demo {
    /// Environment variable consulted for a dataset path override.
    pub const DATASET_ENV_VAR: &str = "VIDPLOT_DEMO_CSV";
    /// Candidate paths for the bundled sample dataset, tried in order.
    pub const DATASET_CANDIDATES: [&str; 2] = [
        "demos/data/videos_sample.csv",
        "../demos/data/videos_sample.csv",
    ];
}
