//! Direct player control against a mock VLC.

use std::time::Duration;

use vlc_cors_proxy::control::{find_binding, ControlClient, ControlError, HotkeyAction, PlayerCommand};

mod common;

use common::{closed_port, start_mock_upstream, MockReply};

#[tokio::test]
async fn test_command_carries_query_and_auth() {
    let vlc = start_mock_upstream(MockReply::ok("<root/>")).await;
    let url = format!("http://{}/requests/status.xml", vlc.addr);
    let client = ControlClient::new(&url, "test123").unwrap();

    client.send(PlayerCommand::PlayPause).await.unwrap();
    client.send(PlayerCommand::Seek(-60)).await.unwrap();

    let requests = vlc.requests();
    assert_eq!(requests[0].target, "/requests/status.xml?command=pl_pause");
    assert_eq!(requests[1].target, "/requests/status.xml?command=seek&val=-60");
    assert!(requests
        .iter()
        .all(|r| r.headers.get("authorization").map(String::as_str) == Some("Basic OnRlc3QxMjM=")));
}

#[tokio::test]
async fn test_chord_dispatch() {
    let vlc = start_mock_upstream(MockReply::ok("<root/>")).await;
    let url = format!("http://{}/requests/status.xml", vlc.addr);
    let client = ControlClient::new(&url, "").unwrap();

    let HotkeyAction::Command(command) = find_binding("ctrl+alt+up").unwrap().action else {
        panic!("ctrl+alt+up should send a command");
    };
    client.send(command).await.unwrap();

    assert_eq!(
        vlc.requests()[0].target,
        "/requests/status.xml?command=volume&val=%2B20"
    );
}

#[tokio::test]
async fn test_probe_sends_no_command() {
    let vlc = start_mock_upstream(MockReply::ok("<root/>")).await;
    let url = format!("http://{}/requests/status.xml", vlc.addr);
    let client = ControlClient::new(&url, "test123").unwrap();

    client.probe().await.unwrap();
    assert_eq!(vlc.requests()[0].target, "/requests/status.xml");
}

#[tokio::test]
async fn test_non_200_is_error() {
    let vlc = start_mock_upstream(MockReply {
        status: 401,
        body: Vec::new(),
        delay: Duration::ZERO,
    })
    .await;
    let url = format!("http://{}/requests/status.xml", vlc.addr);
    let client = ControlClient::new(&url, "wrong").unwrap();

    let err = client.send(PlayerCommand::Stop).await.unwrap_err();
    assert!(matches!(err, ControlError::Status(s) if s.as_u16() == 401));
}

#[tokio::test]
async fn test_unreachable_player() {
    let url = format!("http://{}/requests/status.xml", closed_port().await);
    let client = ControlClient::new(&url, "").unwrap();

    let err = client.probe().await.unwrap_err();
    assert!(matches!(err, ControlError::Request(_)));
}

#[tokio::test]
async fn test_command_timeout() {
    let vlc = start_mock_upstream(MockReply {
        delay: Duration::from_secs(4),
        ..MockReply::ok("<root/>")
    })
    .await;
    let url = format!("http://{}/requests/status.xml", vlc.addr);
    let client = ControlClient::new(&url, "").unwrap();

    match client.send(PlayerCommand::Next).await {
        Err(ControlError::Request(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
