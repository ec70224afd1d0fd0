//! Action queue semantics: capability gating, the at-most-one-in-flight
//! invariant, the standard-action drop rule, and optimistic updates.

mod common;

use common::*;
use protocol::{Action, Command, CommandList, DelayCommand, StandardAction};
use runtime::{ActionEvent, ServiceError, SessionEvent, Topic};

fn marked_standard(marker: u32) -> Action {
    Action::Standard(StandardAction {
        payload: Some(serde_json::json!({ "marker": marker })),
        update: Some(CommandList::new(vec![Command::Delay(DelayCommand {
            milliseconds: 10,
        })])),
    })
}

#[tokio::test]
async fn capability_denied_action_is_rejected() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    let mut actions = handle.subscribe(Topic::Action);

    // No full sync has arrived, so the user has no action points.
    handle.submit(Action::DrawCard).await.unwrap();

    match next_event(&mut actions).await {
        SessionEvent::Action(ActionEvent::Rejected { .. }) => {}
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn standard_action_dropped_while_in_flight() {
    let service = ScriptedService::new();
    service.hold_responses();
    let animator = RecordingAnimator::new();
    let session = spawn_session_with(service.clone(), animator.clone());
    let handle = session.handle();
    let mut actions = handle.subscribe(Topic::Action);

    handle.submit(marked_standard(1)).await.unwrap();
    wait(|| service.request_count() == 1).await;

    handle.submit(marked_standard(2)).await.unwrap();

    // First queues, second is dropped without queueing.
    match next_event(&mut actions).await {
        SessionEvent::Action(ActionEvent::Queued { .. }) => {}
        other => panic!("expected queued, got {other:?}"),
    }
    match next_event(&mut actions).await {
        SessionEvent::Action(ActionEvent::Dropped { .. }) => {}
        other => panic!("expected drop, got {other:?}"),
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.request_in_flight);
    assert_eq!(snapshot.queue_length, 0);

    service.release(1);
    wait_for_snapshot(&handle, |snapshot| !snapshot.request_in_flight).await;

    // Only the first action reached the server, and only its optimistic
    // update (one deferred delay) ever played.
    assert_eq!(service.request_count(), 1);
    let delays = animator
        .effects()
        .iter()
        .filter(|effect| matches!(effect, Effect::Delay { .. }))
        .count();
    assert_eq!(delays, 1);
}

#[tokio::test]
async fn at_most_one_request_in_flight() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    ready_session(&service, &handle).await;

    service.hold_responses();
    for _ in 0..3 {
        handle.submit(Action::DrawCard).await.unwrap();
    }

    wait(|| service.request_count() == 1).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.request_in_flight);
    assert_eq!(snapshot.queue_length, 2);

    for expected in 2..=3 {
        service.release(1);
        wait(|| service.request_count() == expected).await;
    }
    service.release(1);
    wait_for_snapshot(&handle, |snapshot| {
        !snapshot.request_in_flight && snapshot.queue_length == 0
    })
    .await;

    assert_eq!(service.request_count(), 3);
    assert_eq!(service.max_in_flight(), 1);
}

#[tokio::test]
async fn local_standard_action_skips_network() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    let mut actions = handle.subscribe(Topic::Action);

    // No payload: pure local UI action.
    handle
        .submit(Action::Standard(StandardAction {
            payload: None,
            update: Some(CommandList::new(vec![Command::Delay(DelayCommand {
                milliseconds: 5,
            })])),
        }))
        .await
        .unwrap();

    loop {
        match next_event(&mut actions).await {
            SessionEvent::Action(ActionEvent::Resolved { .. }) => break,
            SessionEvent::Action(ActionEvent::Queued { .. }) => {}
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn optimistic_update_survives_request_failure() {
    let service = ScriptedService::new();
    service.enqueue_response(Err(ServiceError::Status {
        code: 13,
        message: "internal".into(),
    }));
    let session = spawn_session(service.clone());
    let handle = session.handle();
    ready_session(&service, &handle).await;

    handle.submit(Action::GainMana).await.unwrap();

    let snapshot = wait_for_snapshot(&handle, |snapshot| snapshot.needs_reconnect).await;
    // The optimistic prediction is never rolled back; only the connection
    // machinery reacts to the failure.
    assert_eq!(snapshot.user.mana, Some(6));
    assert_eq!(snapshot.user.action_points, Some(2));
    assert!(snapshot.loading);
    assert!(!snapshot.request_in_flight);
}
