//! The capability collaborator: can this action be taken right now?

use protocol::ActionTag;

/// The slice of game/turn state capability checks are keyed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilityContext {
    pub action_points: u32,
    pub can_act: bool,
    pub raid_active: bool,
}

/// Synchronous predicate consulted before any action is accepted. Denied
/// actions are logged and dropped, never surfaced as user-visible errors.
pub trait Capabilities: Send + Sync {
    fn can_execute(&self, tag: ActionTag, context: &CapabilityContext) -> bool;

    /// Whether a raid can be initiated at all in the current state.
    fn can_initiate(&self, context: &CapabilityContext) -> bool;
}

/// Default rules: interface actions are always allowed; game actions require
/// priority and an available action point, and cannot start during a raid.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnCapabilities;

impl Capabilities for TurnCapabilities {
    fn can_execute(&self, tag: ActionTag, context: &CapabilityContext) -> bool {
        match tag {
            ActionTag::Standard => true,
            ActionTag::DrawCard
            | ActionTag::PlayCard
            | ActionTag::GainMana
            | ActionTag::LevelUpRoom => {
                context.can_act && context.action_points > 0 && !context.raid_active
            }
            ActionTag::InitiateRaid => self.can_initiate(context),
        }
    }

    fn can_initiate(&self, context: &CapabilityContext) -> bool {
        context.can_act && context.action_points > 0 && !context.raid_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_actions_ignore_turn_state() {
        let capabilities = TurnCapabilities;
        let context = CapabilityContext::default();
        assert!(capabilities.can_execute(ActionTag::Standard, &context));
        assert!(!capabilities.can_execute(ActionTag::DrawCard, &context));
    }

    #[test]
    fn game_actions_require_priority_and_points() {
        let capabilities = TurnCapabilities;
        let ready = CapabilityContext { action_points: 2, can_act: true, raid_active: false };
        assert!(capabilities.can_execute(ActionTag::PlayCard, &ready));

        let out_of_points = CapabilityContext { action_points: 0, ..ready };
        assert!(!capabilities.can_execute(ActionTag::PlayCard, &out_of_points));

        let mid_raid = CapabilityContext { raid_active: true, ..ready };
        assert!(!capabilities.can_execute(ActionTag::InitiateRaid, &mid_raid));
    }
}
