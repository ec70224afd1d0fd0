//! Read-only session snapshots for frontends and tests.

use std::collections::HashMap;

use elements::Element;
use protocol::{GameObjectId, ObjectPosition, PanelAddress, PlayerView, Position};

/// A point-in-time copy of everything the session worker owns that a
/// frontend renders from: object positions, player counters, the live
/// interface trees, and the connection flags.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub user: PlayerView,
    pub opponent: PlayerView,
    pub raid_active: bool,
    pub positions: HashMap<GameObjectId, ObjectPosition>,
    pub main_controls: Option<Element>,
    pub panels: HashMap<PanelAddress, Element>,
    pub open_panels: Vec<PanelAddress>,
    pub queue_length: usize,
    pub request_in_flight: bool,
    pub needs_reconnect: bool,
    pub loading: bool,
}

impl Snapshot {
    /// Objects currently at `position` (sorting keys ignored for the match),
    /// ordered by their sorting keys.
    pub fn ids_at(&self, position: &Position) -> Vec<GameObjectId> {
        let mut entries: Vec<(&ObjectPosition, GameObjectId)> = self
            .positions
            .iter()
            .filter(|(_, object_position)| object_position.position == *position)
            .map(|(id, object_position)| (object_position, *id))
            .collect();
        entries.sort_by_key(|(object_position, _)| {
            (object_position.sorting_key, object_position.sorting_subkey)
        });
        entries.into_iter().map(|(_, id)| id).collect()
    }

    pub fn contains(&self, id: GameObjectId) -> bool {
        self.positions.contains_key(&id)
    }
}
