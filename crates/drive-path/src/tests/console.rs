use crate::{AppCommand, AppError, ConsoleHandler};

use std::path::PathBuf;

/// WHAT: Simple verbs map to their commands
/// WHY: The console is the only input surface of the binary
#[test]
fn given_simple_verbs_when_parsing_then_matching_commands() {
    // Given/When/Then: Each verb and its short alias
    let cases = [
        ("toggle", AppCommand::Toggle),
        ("t", AppCommand::Toggle),
        ("undo", AppCommand::Undo),
        ("list", AppCommand::List),
        ("route", AppCommand::Route),
        ("quit", AppCommand::Shutdown),
        ("  EXIT  ", AppCommand::Shutdown),
    ];

    for (line, expected) in cases {
        assert_eq!(ConsoleHandler::parse_line(line).unwrap(), Some(expected));
    }
}

/// WHAT: Blank input produces no command
/// WHY: Pressing enter must not be reported as an error
#[test]
fn given_blank_line_when_parsing_then_none() {
    assert_eq!(ConsoleHandler::parse_line("   ").unwrap(), None);
    assert_eq!(ConsoleHandler::parse_line("").unwrap(), None);
}

/// WHAT: goto carries both coordinates
/// WHY: Manual fixes feed the location provider
#[test]
fn given_goto_line_when_parsing_then_coordinates_extracted() {
    // When: Parsing a goto with two numbers
    let cmd = ConsoleHandler::parse_line("goto 37.5 127.25").unwrap();

    // Then: Both values are captured in order
    assert_eq!(
        cmd,
        Some(AppCommand::Goto {
            latitude: 37.5,
            longitude: 127.25
        })
    );
}

/// WHAT: goto with a non-numeric argument is rejected
/// WHY: Garbage must not become a position
#[test]
fn given_non_numeric_goto_when_parsing_then_invalid_command() {
    let result = ConsoleHandler::parse_line("goto north 127");

    assert!(matches!(result, Err(AppError::InvalidCommand { .. })));
}

/// WHAT: plan accepts an optional leading name
/// WHY: Planned paths may be named by the user or numbered automatically
#[test]
fn given_plan_with_name_when_parsing_then_name_and_waypoints_extracted() {
    // When: Parsing named and unnamed plans
    let named = ConsoleHandler::parse_line("plan commute 37.0,127.0 37.1,127.1").unwrap();
    let broken_pair = ConsoleHandler::parse_line("plan 37.0,127.0 37.1, 127.1").unwrap_err();
    let spaced = ConsoleHandler::parse_line("plan 37.0,127.0 37.1,127.1 37.2,127.2").unwrap();

    // Then: The name is split off and pairs are parsed
    assert_eq!(
        named,
        Some(AppCommand::Plan {
            name: Some("commute".to_string()),
            waypoints: vec![(37.0, 127.0), (37.1, 127.1)],
        })
    );
    assert!(matches!(broken_pair, AppError::InvalidCommand { .. }));
    assert_eq!(
        spaced,
        Some(AppCommand::Plan {
            name: None,
            waypoints: vec![(37.0, 127.0), (37.1, 127.1), (37.2, 127.2)],
        })
    );
}

/// WHAT: plan with a single waypoint is rejected at parse time
/// WHY: A path needs a distinct start and end
#[test]
fn given_plan_with_one_waypoint_when_parsing_then_invalid_command() {
    let result = ConsoleHandler::parse_line("plan 37.0,127.0");

    assert!(matches!(result, Err(AppError::InvalidCommand { .. })));
}

/// WHAT: replay keeps the file argument verbatim
/// WHY: Relative paths resolve against the working directory
#[test]
fn given_replay_line_when_parsing_then_path_kept() {
    let cmd = ConsoleHandler::parse_line("replay tracks/commute.txt").unwrap();

    assert_eq!(
        cmd,
        Some(AppCommand::Replay {
            path: PathBuf::from("tracks/commute.txt")
        })
    );
}

/// WHAT: Unknown verbs and wrong arities are rejected
/// WHY: The handler prints usage instead of guessing
#[test]
fn given_unknown_or_malformed_line_when_parsing_then_invalid_command() {
    for line in ["fly 1 2", "toggle now", "goto 1", "replay"] {
        let result = ConsoleHandler::parse_line(line);
        assert!(
            matches!(result, Err(AppError::InvalidCommand { .. })),
            "{line} should be rejected"
        );
    }
}

/// WHAT: Closed command channel is reported, not ignored
/// WHY: The console must stop when the app is gone
#[tokio::test]
async fn given_closed_channel_when_sending_then_channel_send_failed() {
    // Given: A handler whose receiver is dropped
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(1);
    drop(command_rx);
    let handler = ConsoleHandler::new(command_tx);

    // When: Forwarding a command
    let result = handler.send(AppCommand::Toggle).await;

    // Then: The failure surfaces as ChannelSendFailed
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}
