use chrono::{TimeZone, Utc};

use vidplot::config::RadarConfig;
use vidplot::data::VideoRecord;
use vidplot::project_radar;

fn build_record(id: &str, views: u64) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: format!("video {id}"),
        channel_name: "Chan".to_string(),
        channel_id: "UC_chan".to_string(),
        view_count: views,
        like_count: views / 10,
        comment_count: views / 100,
        published_at: Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn highlighted_indices(projection: &vidplot::RadarProjection<'_>) -> Vec<usize> {
    projection
        .shapes()
        .iter()
        .enumerate()
        .filter(|(_, shape)| shape.highlighted)
        .map(|(idx, _)| idx)
        .collect()
}

#[test]
fn fresh_projection_has_no_selection() {
    let records: Vec<VideoRecord> = (0..4)
        .map(|i| build_record(&format!("v{i}"), 1000 - i * 100))
        .collect();
    let projection = project_radar(&records, &RadarConfig::default());

    assert_eq!(projection.selected_index(), None);
    assert!(projection.selected_shape().is_none());
    assert!(highlighted_indices(&projection).is_empty());
}

#[test]
fn walking_the_selection_keeps_a_single_highlight() {
    let records: Vec<VideoRecord> = (0..5)
        .map(|i| build_record(&format!("v{i}"), 1000 - i * 100))
        .collect();
    let mut projection = project_radar(&records, &RadarConfig::default());

    for target in [0usize, 3, 1, 4, 2] {
        assert!(projection.select(target));
        assert_eq!(highlighted_indices(&projection), [target]);
        assert_eq!(projection.selected_index(), Some(target));
    }
}

#[test]
fn reselecting_the_same_shape_keeps_it_highlighted() {
    let records: Vec<VideoRecord> =
        (0..3).map(|i| build_record(&format!("v{i}"), 500 - i * 50)).collect();
    let mut projection = project_radar(&records, &RadarConfig::default());

    assert!(projection.select(1));
    assert!(projection.select(1));
    assert_eq!(highlighted_indices(&projection), [1]);
}

#[test]
fn out_of_range_selection_leaves_state_untouched() {
    let records: Vec<VideoRecord> =
        (0..3).map(|i| build_record(&format!("v{i}"), 500 - i * 50)).collect();
    let mut projection = project_radar(&records, &RadarConfig::default());

    assert!(!projection.select(3));
    assert_eq!(projection.selected_index(), None);

    projection.select(2);
    assert!(!projection.select(99));
    assert_eq!(projection.selected_index(), Some(2));
    assert_eq!(highlighted_indices(&projection), [2]);
}

#[test]
fn clear_selection_removes_the_highlight() {
    let records: Vec<VideoRecord> =
        (0..3).map(|i| build_record(&format!("v{i}"), 500 - i * 50)).collect();
    let mut projection = project_radar(&records, &RadarConfig::default());

    projection.select(0);
    projection.clear_selection();
    assert_eq!(projection.selected_index(), None);
    assert!(highlighted_indices(&projection).is_empty());

    // Clearing twice is harmless.
    projection.clear_selection();
    assert!(highlighted_indices(&projection).is_empty());
}

#[test]
fn selected_shape_tracks_the_latest_selection() {
    let records = vec![
        build_record("most_viewed", 900),
        build_record("mid_viewed", 500),
        build_record("least_viewed", 100),
    ];
    let mut projection = project_radar(&records, &RadarConfig::default());

    projection.select(0);
    assert_eq!(
        projection.selected_shape().map(|s| s.record.id.as_str()),
        Some("most_viewed")
    );

    projection.select(2);
    assert_eq!(
        projection.selected_shape().map(|s| s.record.id.as_str()),
        Some("least_viewed")
    );
}

#[test]
fn selection_is_per_projection_instance() {
    let records: Vec<VideoRecord> =
        (0..3).map(|i| build_record(&format!("v{i}"), 500 - i * 50)).collect();
    let mut first = project_radar(&records, &RadarConfig::default());
    let second = project_radar(&records, &RadarConfig::default());

    first.select(1);
    assert_eq!(first.selected_index(), Some(1));
    assert_eq!(second.selected_index(), None);
}
