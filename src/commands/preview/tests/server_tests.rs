use crate::commands::preview::server::{PreviewState, PREVIEW_PORT};
use tokio::sync::oneshot;

#[test]
fn test_install_rejects_second_server() {
    let state = PreviewState::new();
    assert!(!state.is_running());

    let (tx1, _rx1) = oneshot::channel();
    assert!(state.install(tx1));
    assert!(state.is_running());

    // Slot is occupied until taken
    let (tx2, _rx2) = oneshot::channel();
    assert!(!state.install(tx2));
    assert!(state.is_running());
}

#[test]
fn test_take_releases_slot_for_restart() {
    let state = PreviewState::new();
    let (tx, _rx) = oneshot::channel();
    assert!(state.install(tx));

    assert!(state.take().is_some());
    assert!(!state.is_running());
    assert!(state.take().is_none());

    let (tx2, _rx2) = oneshot::channel();
    assert!(state.install(tx2));
}

#[test]
fn test_shutdown_signal_reaches_receiver() {
    let state = PreviewState::new();
    let (tx, rx) = oneshot::channel();
    assert!(state.install(tx));

    // What stop_preview_server does with the taken sender
    state.take().unwrap().send(()).unwrap();
    assert!(rx.blocking_recv().is_ok());
}

#[test]
fn test_preview_port_is_fixed() {
    assert_eq!(PREVIEW_PORT, 8080);
}
