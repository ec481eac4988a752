/// Unique video identifier (stable across dataset exports).
/// Example: `dQw4w9WgXcQ`
pub type VideoId = String;
/// Channel identifier assigned by the hosting platform.
/// Example: `UC4a-Gbdw7vOaccHmFo40b9g`
pub type ChannelId = String;
/// Human-readable channel name; the exact-match key for channel grouping.
/// Examples: `PixelForge Labs`, `pixelforge labs` (distinct from the above)
pub type ChannelName = String;
