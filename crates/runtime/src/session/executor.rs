//! Sequential command execution.
//!
//! Commands are the server's animation/state script: each one is awaited to
//! full settlement before the next begins, whether it arrived in a response,
//! on the connect stream, or from an optimistic prediction.

use std::time::Duration;

use protocol::{Command, GameObjectId, GameView, PlayerView, TogglePanelCommand};
use scene::{Animator, AssetStore};
use tracing::debug;

use crate::api::errors::Result;
use crate::events::{EventBus, InterfaceEvent, SessionEvent};
use crate::session::state::ClientState;

pub(crate) struct Collaborators<'a> {
    pub animator: &'a dyn Animator,
    pub assets: &'a dyn AssetStore,
    pub events: &'a EventBus,
}

/// Executes `commands` strictly in order, each fully settled before the next.
pub(crate) async fn execute_all(
    state: &mut ClientState,
    collaborators: &Collaborators<'_>,
    commands: &[Command],
) -> Result<()> {
    for command in commands {
        execute(state, collaborators, command).await?;
    }
    Ok(())
}

async fn execute(
    state: &mut ClientState,
    collaborators: &Collaborators<'_>,
    command: &Command,
) -> Result<()> {
    match command {
        Command::RenderGame(view) => render_game(state, collaborators, view).await?,
        Command::CreateCard(create) => {
            retire_optimistic_card(state, Some(create.card.id))?;
            resolve_card_assets(collaborators.assets, &create.card)?;
            state
                .scene
                .create_card_at(
                    collaborators.animator,
                    create.card.clone(),
                    create.position.clone(),
                    create.animate,
                )
                .await?;
        }
        Command::MoveGameObject(move_object) => {
            state
                .scene
                .move_object(
                    collaborators.animator,
                    move_object.id,
                    move_object.position.clone(),
                    move_object.animate,
                )
                .await?;
        }
        Command::DestroyCard(destroy) => {
            if state.optimistic_card == Some(destroy.card_id) {
                state.optimistic_card = None;
            }
            state.scene.destroy_card(destroy.card_id)?;
        }
        Command::FireProjectile(fire) => {
            // Resolve the asset and both endpoints before firing; a missing
            // endpoint is a precondition failure, not a skipped effect.
            let projectile = collaborators.assets.projectile(&fire.projectile)?;
            state.scene.object(fire.source)?;
            state.scene.object(fire.target)?;
            collaborators
                .animator
                .projectile_fired(fire.source, fire.target, projectile)
                .await;
        }
        Command::RenderInterface(render) => {
            let previous = state.main_controls.take();
            state.main_controls = render
                .main_controls
                .as_ref()
                .map(|node| state.reconciler.render(previous, node));
        }
        Command::UpdateInterfaceElement(update) => match &update.node {
            Some(node) => {
                let previous = state.panels.remove(&update.address);
                let element = state.reconciler.render(previous, node);
                state.panels.insert(update.address.clone(), element);
            }
            None => {
                state.panels.remove(&update.address);
            }
        },
        Command::TogglePanel(toggle) => {
            let changed = match toggle {
                TogglePanelCommand::Open(address) => state.open_panel(address.clone()),
                TogglePanelCommand::Close(address) => state.close_panel(address),
                TogglePanelCommand::CloseAll => state.close_all_panels(),
            };
            if changed {
                collaborators.events.publish(SessionEvent::Interface(
                    InterfaceEvent::PanelsChanged { open: state.open_panels.clone() },
                ));
            }
        }
        Command::VisitRoom(visit) => {
            collaborators
                .animator
                .room_visited(visit.initiator, visit.room_id)
                .await;
        }
        Command::EndRaid => {
            // Participants return via explicit moves in the same list; only
            // the raid indicator changes here.
            state.raid_active = false;
        }
        Command::Delay(delay) => {
            collaborators
                .animator
                .delay(Duration::from_millis(delay.milliseconds))
                .await;
        }
    }
    Ok(())
}

/// Applies a full visual resync: player counters, the raid indicator, and
/// every card's view and position.
async fn render_game(
    state: &mut ClientState,
    collaborators: &Collaborators<'_>,
    view: &GameView,
) -> Result<()> {
    retire_optimistic_card(state, None)?;

    merge_player(&mut state.user, view.user.as_ref());
    merge_player(&mut state.opponent, view.opponent.as_ref());
    state.raid_active = view.raid_active;

    for card in &view.cards {
        let id = GameObjectId::Card(card.id);
        let position = card.position.clone();
        resolve_card_assets(collaborators.assets, card)?;
        let existed = state.scene.contains(id);
        state.scene.upsert_card(collaborators.animator, card.clone()).await?;
        if existed {
            // Full sync is authoritative about placement too.
            state
                .scene
                .move_object(collaborators.animator, id, position, false)
                .await?;
        }
    }

    debug!(target: "runtime::session", cards = view.cards.len(), "game view applied");
    Ok(())
}

/// Removes the optimistic draw placeholder once authoritative card data
/// arrives. `incoming` guards against the placeholder retiring itself while
/// its own creation command executes.
fn retire_optimistic_card(
    state: &mut ClientState,
    incoming: Option<protocol::CardId>,
) -> Result<()> {
    if let Some(placeholder) = state.optimistic_card {
        if incoming == Some(placeholder) {
            return Ok(());
        }
        if state.scene.contains(GameObjectId::Card(placeholder)) {
            state.scene.destroy_card(placeholder)?;
        }
        state.optimistic_card = None;
    }
    Ok(())
}

/// Card art must resolve before the card can be shown; a missing asset is a
/// precondition failure for the whole list.
fn resolve_card_assets(assets: &dyn AssetStore, card: &protocol::CardView) -> Result<()> {
    if let Some(image) = &card.image {
        assets.sprite(image)?;
    }
    Ok(())
}

/// Overwrites only the fields the incoming view populates, so incremental
/// updates leave other counters untouched.
fn merge_player(current: &mut PlayerView, incoming: Option<&PlayerView>) {
    let Some(incoming) = incoming else { return };
    if incoming.mana.is_some() {
        current.mana = incoming.mana;
    }
    if incoming.action_points.is_some() {
        current.action_points = incoming.action_points;
    }
    if incoming.score.is_some() {
        current.score = incoming.score;
    }
    if incoming.can_act.is_some() {
        current.can_act = incoming.can_act;
    }
}
