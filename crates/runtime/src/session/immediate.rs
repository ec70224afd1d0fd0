//! The immediate-response whitelist.
//!
//! A narrow class of update effects must never wait on animation or the
//! network: panel toggles, which the user perceives as instant UI. These are
//! split out of a standard action's update and applied synchronously at
//! submission; everything else waits for the action to start processing.

use protocol::{Command, CommandList};

fn is_immediate(command: &Command) -> bool {
    matches!(command, Command::TogglePanel(_))
}

/// Commands applied synchronously when the action is accepted.
pub(crate) fn immediate(update: &CommandList) -> Vec<Command> {
    update.commands.iter().filter(|c| is_immediate(c)).cloned().collect()
}

/// Commands deferred to the action's optimistic-update step.
pub(crate) fn deferred(update: &CommandList) -> Vec<Command> {
    update.commands.iter().filter(|c| !is_immediate(c)).cloned().collect()
}
