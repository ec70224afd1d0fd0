//! Play-card handling: release position resolution and room target
//! substitution.

mod common;

use common::*;
use protocol::{
    Action, CardId, CardTarget, Command, CommandList, CreateCardCommand, GameObjectId,
    ObjectPosition, PlayerName, Position, RoomId, RoomLocation,
};
use runtime::{ActionEvent, SessionEvent, Topic};

fn room_release() -> ObjectPosition {
    ObjectPosition::new(Position::Room { room_id: None, location: RoomLocation::Back })
}

async fn ready_with_card(
    service: &ScriptedService,
    handle: &runtime::SessionHandle,
    id: u32,
    release_position: Option<ObjectPosition>,
) {
    ready_session(service, handle).await;
    service
        .push_stream(CommandList::new(vec![Command::CreateCard(CreateCardCommand {
            card: hand_card(id, release_position),
            position: ObjectPosition::new(Position::Hand { owner: PlayerName::User }),
            animate: false,
        })]))
        .await;
    wait_for_snapshot(handle, |snapshot| {
        snapshot.contains(GameObjectId::Card(CardId::new(id)))
    })
    .await;
}

#[tokio::test]
async fn room_targeted_play_without_room_id_fails_precondition() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    ready_with_card(&service, &handle, 3, Some(room_release())).await;

    let mut actions = handle.subscribe(Topic::Action);
    handle
        .submit(Action::play_card(CardId::new(3), None))
        .await
        .unwrap();

    let error = loop {
        match next_event(&mut actions).await {
            SessionEvent::Action(ActionEvent::Failed { error, .. }) => break error,
            SessionEvent::Action(ActionEvent::Queued { .. }) => {}
            other => panic!("unexpected event {other:?}"),
        }
    };
    assert!(error.contains("no room id target"), "unexpected error: {error}");

    // The action halted before transmission and the card never moved.
    assert_eq!(service.request_count(), 0);
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(
        snapshot.ids_at(&Position::Hand { owner: PlayerName::User }),
        vec![GameObjectId::Card(CardId::new(3))]
    );
}

#[tokio::test]
async fn room_target_substitutes_into_release_position() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    ready_with_card(&service, &handle, 3, Some(room_release())).await;

    handle
        .submit(Action::play_card(
            CardId::new(3),
            Some(CardTarget::Room(RoomId::RoomA)),
        ))
        .await
        .unwrap();

    wait(|| service.request_count() == 1).await;
    let snapshot = wait_for_snapshot(&handle, |snapshot| !snapshot.request_in_flight).await;

    let destination =
        Position::Room { room_id: Some(RoomId::RoomA), location: RoomLocation::Back };
    assert_eq!(
        snapshot.ids_at(&destination),
        vec![GameObjectId::Card(CardId::new(3))]
    );

    let requests = service.requests();
    assert!(matches!(requests[0].action, Action::PlayCard(play) if play.card_id == CardId::new(3)));
}

#[tokio::test]
async fn play_without_release_position_stages_the_card() {
    let service = ScriptedService::new();
    let session = spawn_session(service.clone());
    let handle = session.handle();
    ready_with_card(&service, &handle, 4, None).await;

    handle
        .submit(Action::play_card(CardId::new(4), None))
        .await
        .unwrap();

    let snapshot = wait_for_snapshot(&handle, |snapshot| {
        snapshot
            .ids_at(&Position::Staging)
            .contains(&GameObjectId::Card(CardId::new(4)))
    })
    .await;
    assert!(
        snapshot
            .ids_at(&Position::Hand { owner: PlayerName::User })
            .is_empty()
    );
}
