//! Topic-based event bus.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::events::types::SessionEvent;

/// Topics for event routing.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Action pipeline events (queued, dropped, resolved, failed).
    Action,
    /// Connect-stream lifecycle events.
    Connection,
    /// Interface events (panel list changes).
    Interface,
}

const TOPICS: [Topic; 3] = [Topic::Action, Topic::Connection, Topic::Interface];

/// Broadcast channels keyed by topic, so consumers only receive the events
/// they care about. The topic set is fixed at construction; cloning shares
/// the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let channels = TOPICS
            .iter()
            .map(|&topic| (topic, broadcast::channel(capacity).0))
            .collect();
        Self { channels: Arc::new(channels) }
    }

    /// Publish an event to its topic. Events are best-effort: with no
    /// subscribers the event is simply discarded.
    pub fn publish(&self, event: SessionEvent) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.channels
            .get(&topic)
            .expect("topic channel initialized at construction")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
