//! Integration tests for the sync loop and dispatcher working against a
//! mock play-zones server.

use std::time::Duration;

use mockito::Server;
use rstest::rstest;
use zones_api::ZonesClient;
use zones_state::{
    CommandDispatcher, DeviceId, SnapshotStore, SyncConfig, SyncLoop,
};

const STATE_BODY: &str = r#"{
    "Playing": {"Name": "A", "Album": "B", "Artists": ["C"]},
    "Devices": [
        {"id": "1", "name": "Kitchen", "type": "Speaker",
         "volume_percent": 50, "is_active": true}
    ]
}"#;

fn fast_loop(server: &Server, store: &SnapshotStore) -> SyncLoop {
    SyncLoop::with_config(
        ZonesClient::new(server.url()),
        store.clone(),
        SyncConfig {
            interval: Duration::from_millis(50),
        },
    )
}

#[test]
fn first_sync_fills_empty_snapshot() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(STATE_BODY)
        .create();

    let store = SnapshotStore::new();

    // Initial state: empty track, no devices
    let initial = store.get();
    assert!(initial.track.name.is_none());
    assert!(initial.track.artists.is_empty());
    assert_eq!(initial.device_count(), 0);

    let events = store.iter();
    let _handle = fast_loop(&server, &store).spawn();

    // The first fetch is issued immediately on start
    assert!(events.recv_timeout(Duration::from_secs(2)).is_some());

    let snapshot = store.get();
    assert_eq!(snapshot.track.name.as_deref(), Some("A"));
    assert_eq!(snapshot.track.album.as_deref(), Some("B"));
    assert_eq!(snapshot.track.artists, vec!["C".to_string()]);
    assert_eq!(snapshot.device_count(), 1);
    assert_eq!(snapshot.devices[0].id.as_str(), "1");
    assert_eq!(snapshot.devices[0].name, "Kitchen");
    assert_eq!(snapshot.devices[0].kind, "Speaker");
    assert_eq!(snapshot.devices[0].volume_percent, 50);
    assert!(snapshot.devices[0].is_active);
}

#[test]
fn loop_keeps_polling_on_fixed_interval() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(STATE_BODY)
        .expect_at_least(3)
        .create();

    let store = SnapshotStore::new();
    let _handle = fast_loop(&server, &store).spawn();

    // 3 cycles at 50ms fit comfortably in 500ms
    std::thread::sleep(Duration::from_millis(500));

    mock.assert();
    assert!(store.revision() >= 3);
}

#[test]
fn failed_sync_retries_without_touching_store() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/devices.json")
        .with_status(500)
        .with_body("Error listing devices")
        .expect_at_least(2)
        .create();

    let store = SnapshotStore::new();
    let _handle = fast_loop(&server, &store).spawn();

    std::thread::sleep(Duration::from_millis(300));

    // Retried at the same cadence, store never touched
    mock.assert();
    assert!(store.get().is_empty());
    assert_eq!(store.revision(), 0);
}

#[rstest]
#[case(404)]
#[case(500)]
#[case(503)]
fn any_failure_status_is_a_transient_sync_failure(#[case] status: usize) {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/devices.json")
        .with_status(status)
        .create();

    let store = SnapshotStore::new();
    let sync_loop = SyncLoop::new(ZonesClient::new(server.url()), store.clone());

    assert!(sync_loop.sync_once().is_err());
    assert!(store.get().is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn store_always_holds_most_recently_applied_response() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(STATE_BODY)
        .create();

    let store = SnapshotStore::new();
    let sync_loop = SyncLoop::new(ZonesClient::new(server.url()), store.clone());

    sync_loop.sync_once().unwrap();
    assert_eq!(store.get().track.name.as_deref(), Some("A"));

    // Server state moves on; the next applied response replaces
    // everything, verbatim
    server.reset();
    let _mock = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(
            r#"{
                "Playing": {"Name": "X", "Album": "Y", "Artists": ["Z", "W"]},
                "Devices": [
                    {"id": "1", "name": "Kitchen", "type": "Speaker",
                     "volume_percent": 50, "is_active": false},
                    {"id": "2", "name": "Desk", "type": "Computer",
                     "volume_percent": 100, "is_active": true}
                ]
            }"#,
        )
        .create();

    sync_loop.sync_once().unwrap();

    let snapshot = store.get();
    assert_eq!(snapshot.track.name.as_deref(), Some("X"));
    assert_eq!(snapshot.track.artists, vec!["Z".to_string(), "W".to_string()]);
    assert_eq!(snapshot.device_count(), 2);
    assert_eq!(snapshot.active_device().unwrap().id.as_str(), "2");
    assert_eq!(store.revision(), 2);
}

#[test]
fn transfer_after_sync_preserves_track_exactly() {
    let mut server = Server::new();
    let _state = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(STATE_BODY)
        .create();
    let _transfer = server
        .mock("POST", "/transfer.json")
        .match_body(r#"{"id":"2"}"#)
        .with_status(200)
        .with_body(
            r#"[
                {"id": "1", "name": "Kitchen", "type": "Speaker",
                 "volume_percent": 50, "is_active": false},
                {"id": "2", "name": "Desk", "type": "Computer",
                 "volume_percent": 100, "is_active": true}
            ]"#,
        )
        .create();

    let store = SnapshotStore::new();
    let client = ZonesClient::new(server.url());
    let sync_loop = SyncLoop::new(client.clone(), store.clone());
    let dispatcher = CommandDispatcher::new(client, store.clone());

    sync_loop.sync_once().unwrap();
    let track_before = store.get().track;

    dispatcher.select_device(&DeviceId::new("2")).unwrap();

    let snapshot = store.get();
    assert_eq!(snapshot.track, track_before);
    assert_eq!(snapshot.device_count(), 2);
    assert_eq!(snapshot.active_device().unwrap().name, "Desk");
}

#[test]
fn stale_sync_response_overwrites_transfer_result() {
    // Last-response-wins: a sync applied after a transfer clobbers the
    // transferred device list with the (older) server state. Nothing
    // sequences the two writers.
    let mut server = Server::new();
    let _state = server
        .mock("GET", "/devices.json")
        .with_status(200)
        .with_body(STATE_BODY)
        .create();
    let _transfer = server
        .mock("POST", "/transfer.json")
        .with_status(200)
        .with_body(
            r#"[
                {"id": "1", "name": "Kitchen", "type": "Speaker",
                 "volume_percent": 50, "is_active": false},
                {"id": "2", "name": "Desk", "type": "Computer",
                 "volume_percent": 100, "is_active": true}
            ]"#,
        )
        .create();

    let store = SnapshotStore::new();
    let client = ZonesClient::new(server.url());
    let sync_loop = SyncLoop::new(client.clone(), store.clone());
    let dispatcher = CommandDispatcher::new(client, store.clone());

    sync_loop.sync_once().unwrap();
    dispatcher.select_device(&DeviceId::new("2")).unwrap();
    assert_eq!(store.get().active_device().unwrap().id.as_str(), "2");

    // The mock still serves the pre-transfer state document
    sync_loop.sync_once().unwrap();
    assert_eq!(store.get().active_device().unwrap().id.as_str(), "1");
}
