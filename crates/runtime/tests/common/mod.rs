//! Shared fixtures for session integration tests: a scripted game service,
//! a recording animator, and snapshot/event wait helpers.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use protocol::{
    CardId, CardView, Command, CommandList, GameObjectId, GameRequest, GameView, ObjectPosition,
    PlayerId, PlayerName, PlayerView, Position, RoomId,
};
use runtime::{
    Capabilities, CommandStream, GameService, ServiceError, Session, SessionConfig, SessionEvent,
    SessionHandle, Snapshot, TurnCapabilities,
};
use scene::{Animator, AssetStore, InstantAnimator, PassthroughAssets, ProjectileHandle};
use tokio::sync::{Semaphore, broadcast, mpsc};

/// A [`GameService`] driven entirely by the test: scripted responses,
/// scripted connect outcomes, and a handle to push stream messages.
pub struct ScriptedService {
    requests: Mutex<Vec<GameRequest>>,
    responses: Mutex<VecDeque<Result<CommandList, ServiceError>>>,
    connect_failures: AtomicUsize,
    connect_count: AtomicUsize,
    stream_tx: Mutex<Option<mpsc::Sender<Result<CommandList, ServiceError>>>>,
    gated: AtomicBool,
    gate: Semaphore,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            connect_failures: AtomicUsize::new(0),
            connect_count: AtomicUsize::new(0),
            stream_tx: Mutex::new(None),
            gated: AtomicBool::new(false),
            gate: Semaphore::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        })
    }

    /// Queue the response for the next `perform_action` call. Unscripted
    /// calls get an empty command list.
    pub fn enqueue_response(&self, response: Result<CommandList, ServiceError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Make `perform_action` block until [`Self::release`] grants a permit.
    pub fn hold_responses(&self) {
        self.gated.store(true, Ordering::SeqCst);
    }

    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    /// Fail the next `count` connect attempts.
    pub fn fail_next_connects(&self, count: usize) {
        self.connect_failures.store(count, Ordering::SeqCst);
    }

    pub fn connect_count(&self) -> usize {
        self.connect_count.load(Ordering::SeqCst)
    }

    pub fn has_stream(&self) -> bool {
        self.stream_tx.lock().unwrap().is_some()
    }

    /// Push a server message onto the connect stream.
    pub async fn push_stream(&self, list: CommandList) {
        let tx = self
            .stream_tx
            .lock()
            .unwrap()
            .clone()
            .expect("no connect stream open");
        tx.send(Ok(list)).await.expect("stream receiver dropped");
    }

    /// Deliver a stream-level fault, which ends the stream.
    pub async fn fail_stream(&self, message: &str) {
        let tx = self
            .stream_tx
            .lock()
            .unwrap()
            .take()
            .expect("no connect stream open");
        tx.send(Err(ServiceError::Transport(message.to_string())))
            .await
            .expect("stream receiver dropped");
    }

    pub fn requests(&self) -> Vec<GameRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameService for ScriptedService {
    async fn connect(&self, _player_id: PlayerId) -> Result<CommandStream, ServiceError> {
        self.connect_count.fetch_add(1, Ordering::SeqCst);

        let failures = self.connect_failures.load(Ordering::SeqCst);
        if failures > 0 {
            self.connect_failures.store(failures - 1, Ordering::SeqCst);
            return Err(ServiceError::Transport("connect refused".into()));
        }

        let (tx, rx) = mpsc::channel(16);
        *self.stream_tx.lock().unwrap() = Some(tx);
        Ok(rx)
    }

    async fn perform_action(&self, request: GameRequest) -> Result<CommandList, ServiceError> {
        self.requests.lock().unwrap().push(request);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.gated.load(Ordering::SeqCst) {
            self.gate.acquire().await.expect("gate closed").forget();
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandList::default()))
    }
}

/// Animation effects observed in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Moved { id: GameObjectId, position: Position, animate: bool },
    Projectile { source: GameObjectId, target: GameObjectId },
    Visit { room_id: RoomId },
    Delay { milliseconds: u128 },
}

/// Records every effect it is asked to play, completing instantly.
#[derive(Default)]
pub struct RecordingAnimator {
    effects: Mutex<Vec<Effect>>,
}

impl RecordingAnimator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.lock().unwrap().clone()
    }
}

#[async_trait]
impl Animator for RecordingAnimator {
    async fn object_moved(&self, id: GameObjectId, destination: &ObjectPosition, animate: bool) {
        self.effects.lock().unwrap().push(Effect::Moved {
            id,
            position: destination.position.clone(),
            animate,
        });
    }

    async fn projectile_fired(
        &self,
        source: GameObjectId,
        target: GameObjectId,
        _projectile: ProjectileHandle,
    ) {
        self.effects
            .lock()
            .unwrap()
            .push(Effect::Projectile { source, target });
    }

    async fn room_visited(&self, _initiator: PlayerName, room_id: RoomId) {
        self.effects.lock().unwrap().push(Effect::Visit { room_id });
    }

    async fn delay(&self, duration: Duration) {
        self.effects
            .lock()
            .unwrap()
            .push(Effect::Delay { milliseconds: duration.as_millis() });
    }
}

pub fn spawn_session(service: Arc<ScriptedService>) -> Session {
    spawn_session_with(service, Arc::new(InstantAnimator))
}

pub fn spawn_session_with(service: Arc<ScriptedService>, animator: Arc<dyn Animator>) -> Session {
    let assets: Arc<dyn AssetStore> = Arc::new(PassthroughAssets);
    let capabilities: Arc<dyn Capabilities> = Arc::new(TurnCapabilities);
    Session::spawn(SessionConfig::default(), service, animator, assets, capabilities)
}

/// Waits for the connect stream to open.
pub async fn wait_for_stream(service: &ScriptedService) {
    wait(|| service.has_stream()).await;
}

/// Polls `predicate` against session snapshots until it holds.
pub async fn wait_for_snapshot(
    handle: &SessionHandle,
    predicate: impl Fn(&Snapshot) -> bool,
) -> Snapshot {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let snapshot = handle.snapshot().await.expect("session gone");
            if predicate(&snapshot) {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("snapshot condition not reached in time")
}

/// Polls a plain condition until it holds.
pub async fn wait(predicate: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !predicate() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not reached in time")
}

/// Receives the next event on a subscription, with a timeout.
pub async fn next_event(rx: &mut broadcast::Receiver<SessionEvent>) -> SessionEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no event before timeout")
        .expect("event channel closed")
}

/// A full sync giving the user priority and three action points.
pub fn ready_view() -> CommandList {
    CommandList::new(vec![Command::RenderGame(GameView {
        user: Some(PlayerView {
            mana: Some(5),
            action_points: Some(3),
            score: Some(0),
            can_act: Some(true),
        }),
        opponent: None,
        cards: Vec::new(),
        raid_active: false,
    })])
}

/// A revealed card in the user's hand with the given release position.
pub fn hand_card(id: u32, release_position: Option<ObjectPosition>) -> CardView {
    CardView {
        id: CardId::new(id),
        title: Some(format!("Test Card {id}")),
        revealed: true,
        image: None,
        release_position,
        position: ObjectPosition::with_sorting_key(Position::Hand { owner: PlayerName::User }, id),
    }
}

/// Drives a session to the ready state: stream open, full sync applied.
pub async fn ready_session(service: &ScriptedService, handle: &SessionHandle) {
    wait_for_stream(service).await;
    service.push_stream(ready_view()).await;
    wait_for_snapshot(handle, |snapshot| snapshot.user.action_points == Some(3)).await;
}
