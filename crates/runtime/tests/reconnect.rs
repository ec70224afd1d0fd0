//! Connection state machine: fault detection, the fixed-period reconnect
//! poll, and indicator clearing on recovery.

mod common;

use common::*;
use runtime::{ConnectionEvent, SessionEvent, Topic};

#[tokio::test(start_paused = true)]
async fn stream_fault_sets_flags_and_poll_reconnects() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    let mut connection = handle.subscribe(Topic::Connection);
    wait_for_stream(&service).await;

    match next_event(&mut connection).await {
        SessionEvent::Connection(ConnectionEvent::Streaming) => {}
        other => panic!("expected streaming, got {other:?}"),
    }

    service.fail_stream("transport reset").await;

    let snapshot = wait_for_snapshot(&handle, |snapshot| snapshot.needs_reconnect).await;
    assert!(snapshot.loading);

    // The 1-second poll re-invokes connect; the paused clock advances
    // through the interval during the waits below.
    wait(|| service.connect_count() >= 2 && service.has_stream()).await;

    service.push_stream(ready_view()).await;
    let snapshot =
        wait_for_snapshot(&handle, |snapshot| !snapshot.needs_reconnect && !snapshot.loading)
            .await;
    assert_eq!(snapshot.user.action_points, Some(3));
}

#[tokio::test(start_paused = true)]
async fn connect_failures_retry_without_bound() {
    let service = ScriptedService::new();
    service.fail_next_connects(3);
    let session = spawn_session(service.clone());
    let handle = session.handle();

    // Initial attempt plus three poll retries before one succeeds.
    wait(|| service.connect_count() >= 4 && service.has_stream()).await;

    service.push_stream(ready_view()).await;
    wait_for_snapshot(&handle, |snapshot| !snapshot.loading && !snapshot.needs_reconnect).await;
}

#[tokio::test(start_paused = true)]
async fn recovery_emits_connection_events() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    wait_for_stream(&service).await;

    let mut connection = handle.subscribe(Topic::Connection);
    service.fail_stream("transport reset").await;

    loop {
        match next_event(&mut connection).await {
            SessionEvent::Connection(ConnectionEvent::Faulted { error }) => {
                assert!(error.contains("transport reset"));
                break;
            }
            SessionEvent::Connection(ConnectionEvent::Streaming) => {}
            other => panic!("expected fault, got {other:?}"),
        }
    }

    wait(|| service.has_stream()).await;
    service.push_stream(ready_view()).await;

    loop {
        match next_event(&mut connection).await {
            SessionEvent::Connection(ConnectionEvent::Recovered) => break,
            SessionEvent::Connection(_) => {}
            other => panic!("unexpected event {other:?}"),
        }
    }
}
