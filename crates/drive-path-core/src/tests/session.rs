use crate::{RecordingSession, RecordingState, SessionEvent, TrackError, tests::coords, tests::loc};

use std::sync::mpsc;

/// WHAT: Toggle without a fix reports PositionUnavailable
/// WHY: No partial transition may happen when the provider has no position
#[test]
fn given_no_position_when_toggling_then_position_unavailable_and_state_unchanged() {
    // Given: An idle session
    let mut session = RecordingSession::new();

    // When: Toggling with no position
    let result = session.toggle(None, |_| Ok(()));

    // Then: Error reported and state untouched
    assert!(matches!(result, Err(TrackError::PositionUnavailable { .. })));
    assert!(!session.is_recording());
    assert!(session.buffer().is_empty());
}

/// WHAT: First toggle starts recording with the current position buffered
/// WHY: The start pin and the trace both begin at the toggle position
#[test]
fn given_idle_session_when_toggling_then_recording_with_single_sample() {
    // Given: An idle session
    let mut session = RecordingSession::new();

    // When: Toggling at (37.0, 127.0)
    let event = session.toggle(Some(loc(37.0, 127.0)), |e| Ok(e.clone())).unwrap();

    // Then: Started event carries the position and the buffer holds it
    assert!(matches!(event, SessionEvent::Started { start, .. } if start == loc(37.0, 127.0)));
    assert!(session.is_recording());
    assert_eq!(coords(session.buffer()), vec![(37.0, 127.0)]);
    assert!(matches!(
        session.state(),
        RecordingState::Recording { session_id, .. } if session_id == event.session_id()
    ));
}

/// WHAT: Every update between start and stop lands in the trace in order
/// WHY: No update may be lost or reordered
#[test]
fn given_stream_updates_when_stopping_then_trace_preserves_arrival_order() {
    // Given: A recording session fed through a channel
    let (tx, rx) = mpsc::channel();
    let mut session = RecordingSession::new();
    session.toggle(Some(loc(37.0, 127.0)), |_| Ok(())).unwrap();

    let updates: Vec<_> = (1..=5)
        .map(|i| loc(37.0 + f64::from(i) * 0.01, 127.0))
        .collect();
    for update in &updates {
        tx.send(*update).unwrap();
    }
    let appended = session.drain_updates(&rx);

    // When: Stopping at a distinct position
    let event = session.toggle(Some(loc(37.2, 127.2)), |e| Ok(e.clone())).unwrap();

    // Then: Trace is start ++ updates ++ stop
    assert_eq!(appended, 5);
    let SessionEvent::Stopped { trace, .. } = event else {
        panic!("expected a stop event");
    };
    let mut expected = vec![loc(37.0, 127.0)];
    expected.extend(updates);
    expected.push(loc(37.2, 127.2));
    assert_eq!(coords(&trace), coords(&expected));
    assert!(!session.is_recording());
    assert!(session.buffer().is_empty());
}

/// WHAT: A stop position equal to the last update is not duplicated
/// WHY: The provider's current fix is usually the last streamed update
#[test]
fn given_stop_at_last_update_when_stopping_then_point_not_duplicated() {
    // Given: A recording with one streamed update
    let mut session = RecordingSession::new();
    session.toggle(Some(loc(37.0, 127.0)), |_| Ok(())).unwrap();
    session.record_update(loc(37.1, 127.1));

    // When: Stopping at that same position
    let trace = session
        .toggle(Some(loc(37.1, 127.1)), |e| match e {
            SessionEvent::Stopped { trace, .. } => Ok(trace.clone()),
            SessionEvent::Started { .. } => Ok(Vec::new()),
        })
        .unwrap();

    // Then: The last point appears once
    assert_eq!(coords(&trace), vec![(37.0, 127.0), (37.1, 127.1)]);
}

/// WHAT: Stop with no updates at the start position still yields two samples
/// WHY: A stopped trace always has a start and an end
#[test]
fn given_no_updates_and_same_position_when_stopping_then_trace_has_two_samples() {
    // Given: A recording with no streamed updates
    let mut session = RecordingSession::new();
    session.toggle(Some(loc(37.0, 127.0)), |_| Ok(())).unwrap();

    // When: Stopping without moving
    let len = session
        .toggle(Some(loc(37.0, 127.0)), |e| match e {
            SessionEvent::Stopped { trace, .. } => Ok(trace.len()),
            SessionEvent::Started { .. } => Ok(0),
        })
        .unwrap();

    // Then: Start and end are both present
    assert_eq!(len, 2);
}

/// WHAT: Updates delivered while idle are discarded
/// WHY: The session only buffers between start and stop
#[test]
fn given_idle_session_when_updates_arrive_then_discarded() {
    // Given: An idle session with pending updates
    let (tx, rx) = mpsc::channel();
    let mut session = RecordingSession::new();
    tx.send(loc(1.0, 1.0)).unwrap();
    tx.send(loc(2.0, 2.0)).unwrap();

    // When: Draining
    let appended = session.drain_updates(&rx);

    // Then: Nothing buffered, and a later start is not polluted
    assert_eq!(appended, 0);
    session.toggle(Some(loc(3.0, 3.0)), |_| Ok(())).unwrap();
    assert_eq!(coords(session.buffer()), vec![(3.0, 3.0)]);
}

/// WHAT: A failing start handler leaves the session idle
/// WHY: Recording must not begin when the start pin could not be persisted
#[test]
fn given_failing_handler_when_starting_then_state_remains_idle() {
    // Given: An idle session
    let mut session = RecordingSession::new();

    // When: The owner rejects the start
    let result: Result<(), _> = session.toggle(Some(loc(37.0, 127.0)), |_| {
        Err(TrackError::NothingToRemove {
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        })
    });

    // Then: Still idle with an empty buffer
    assert!(result.is_err());
    assert_eq!(session.state(), RecordingState::Idle);
    assert!(session.buffer().is_empty());
}

/// WHAT: A failing stop handler keeps recording with the buffer intact
/// WHY: The user can retry the stop without losing samples
#[test]
fn given_failing_handler_when_stopping_then_still_recording_with_buffer() {
    // Given: A recording with one update
    let mut session = RecordingSession::new();
    session.toggle(Some(loc(37.0, 127.0)), |_| Ok(())).unwrap();
    session.record_update(loc(37.05, 127.05));

    // When: The owner rejects the stop
    let result: Result<(), _> = session.toggle(Some(loc(37.1, 127.1)), |_| {
        Err(TrackError::NothingToRemove {
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        })
    });

    // Then: Still recording, stop position not appended
    assert!(result.is_err());
    assert!(session.is_recording());
    assert_eq!(coords(session.buffer()), vec![(37.0, 127.0), (37.05, 127.05)]);
}
