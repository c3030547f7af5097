use crate::{
    AppError,
    replay::{load_track, parse_track, spawn_replay},
};

use std::{fs, time::Duration};

use drive_path_core::{ChannelLocationProvider, LocationProvider};

/// WHAT: Comments and blank lines are skipped
/// WHY: Track files are hand-edited
#[test]
fn given_track_with_comments_when_parsing_then_only_positions_kept() {
    // Given: A track with a header comment and spacing
    let text = "# morning drive\n37.0,127.0\n\n  37.1 , 127.1  \n# end\n";

    // When: Parsing
    let track = parse_track(text).unwrap();

    // Then: Two positions in file order
    assert_eq!(track.len(), 2);
    assert_eq!(track[1].latitude(), 37.1);
    assert_eq!(track[1].longitude(), 127.1);
}

/// WHAT: A malformed line fails with its line number
/// WHY: Users need to find the bad line in long tracks
#[test]
fn given_malformed_line_when_parsing_then_error_names_line() {
    let result = parse_track("37.0,127.0\n37.1;127.1\n");

    match result {
        Err(AppError::ReplayError { reason, .. }) => assert!(reason.starts_with("line 2")),
        other => panic!("expected ReplayError, got {other:?}"),
    }
}

/// WHAT: Out-of-range coordinates are rejected
/// WHY: Replay must not publish positions the core would refuse
#[test]
fn given_out_of_range_position_when_parsing_then_replay_error() {
    let result = parse_track("91.0,0.0\n");

    assert!(matches!(result, Err(AppError::ReplayError { .. })));
}

/// WHAT: A track without positions is rejected
/// WHY: Replaying nothing is almost certainly the wrong file
#[test]
fn given_comment_only_track_when_parsing_then_replay_error() {
    let result = parse_track("# nothing here\n\n");

    assert!(matches!(result, Err(AppError::ReplayError { .. })));
}

/// WHAT: Missing files are replay errors
/// WHY: The app reports them and keeps running
#[test]
fn given_missing_file_when_loading_then_replay_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_track(&dir.path().join("absent.txt"));

    assert!(matches!(result, Err(AppError::ReplayError { .. })));
}

/// WHAT: Replay publishes every position in order
/// WHY: Subscribers must see the track as recorded
#[tokio::test]
async fn given_track_file_when_replaying_then_positions_published_in_order() {
    // Given: A three-point track on disk and a subscriber
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("track.txt");
    fs::write(&file, "37.0,127.0\n37.1,127.1\n37.2,127.2\n").unwrap();
    let track = load_track(&file).unwrap();
    let provider = ChannelLocationProvider::new();
    let updates = provider.subscribe();

    // When: Replaying with a short interval
    spawn_replay(provider.clone(), track.clone(), Duration::from_millis(1))
        .await
        .unwrap();

    // Then: All points arrive in order and the last is current
    let received: Vec<_> = updates.try_iter().collect();
    assert_eq!(received, track);
    assert_eq!(provider.current_position(), track.last().copied());
}
