//! Mutable client state owned by the session worker.
//!
//! Everything here is process-wide visual truth: the scene, the live
//! interface trees, the open-panel list, and the connection flags. The
//! worker task is the only owner; collaborators receive references.

use std::collections::HashMap;

use elements::{Element, Reconciler};
use protocol::{CardId, PanelAddress, PlayerView};
use scene::Scene;

use crate::api::CapabilityContext;

/// Connection indicator flags. `loading` drives the persistent
/// "reconnecting" UI; `needs_reconnect` drives the retry timer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConnectionFlags {
    pub needs_reconnect: bool,
    pub loading: bool,
}

#[derive(Default)]
pub(crate) struct ClientState {
    pub scene: Scene,
    pub reconciler: Reconciler,
    /// The main controls bar, if rendered.
    pub main_controls: Option<Element>,
    /// Rendered trees for panels, keyed by address. A panel can have content
    /// without being open; the open list below is authoritative for display.
    pub panels: HashMap<PanelAddress, Element>,
    /// Open panels in stacking order.
    pub open_panels: Vec<PanelAddress>,
    pub user: PlayerView,
    pub opponent: PlayerView,
    pub raid_active: bool,
    pub flags: ConnectionFlags,
    /// The face-down placeholder created by an optimistic draw, retired when
    /// the next authoritative card arrives.
    pub optimistic_card: Option<CardId>,
    next_placeholder: u32,
}

impl ClientState {
    pub fn new() -> Self {
        Self { scene: Scene::new(), ..Self::default() }
    }

    pub fn capability_context(&self) -> CapabilityContext {
        CapabilityContext {
            action_points: self.user.action_points.unwrap_or(0),
            can_act: self.user.can_act.unwrap_or(false),
            raid_active: self.raid_active,
        }
    }

    /// Allocates a fresh client-local placeholder card id.
    pub fn allocate_placeholder(&mut self) -> CardId {
        self.next_placeholder += 1;
        CardId::placeholder(self.next_placeholder)
    }

    /// Decrements the user's displayed action points, if known.
    pub fn spend_action_point(&mut self) {
        if let Some(points) = self.user.action_points {
            self.user.action_points = Some(points.saturating_sub(1));
        }
    }

    pub fn open_panel(&mut self, address: PanelAddress) -> bool {
        if self.open_panels.contains(&address) {
            return false;
        }
        self.open_panels.push(address);
        true
    }

    pub fn close_panel(&mut self, address: &PanelAddress) -> bool {
        let before = self.open_panels.len();
        self.open_panels.retain(|open| open != address);
        self.panels.remove(address);
        before != self.open_panels.len()
    }

    pub fn close_all_panels(&mut self) -> bool {
        let had_any = !self.open_panels.is_empty();
        self.open_panels.clear();
        self.panels.clear();
        had_any
    }
}
