//! Client configuration structures and loaders.

use std::env;
use std::time::Duration;

use protocol::{GameId, PlayerId};
use runtime::SessionConfig;

/// Configuration required to bootstrap a client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub player_id: PlayerId,
    pub game_id: Option<GameId>,
    /// Run against the built-in offline service instead of a remote server.
    pub offline: bool,
    /// Remote server address, unused in offline mode.
    pub server_url: Option<String>,
    pub command_buffer: usize,
    pub reconnect_poll: Duration,
    pub quiet_errors: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_id: PlayerId(0),
            game_id: None,
            offline: false,
            server_url: None,
            command_buffer: 32,
            reconnect_poll: Duration::from_secs(1),
            quiet_errors: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPELLDAWN_PLAYER_ID` - Player identifier (default: 0)
    /// - `SPELLDAWN_GAME_ID` - Game to reconnect to (default: none)
    /// - `SPELLDAWN_OFFLINE` - Use the built-in offline service
    /// - `SPELLDAWN_SERVER_URL` - Remote server address
    /// - `SPELLDAWN_COMMAND_BUFFER` - Session channel capacity (default: 32)
    /// - `SPELLDAWN_RECONNECT_POLL_MS` - Reconnect poll period (default: 1000)
    /// - `SPELLDAWN_QUIET_ERRORS` - Suppress failed-request logging
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(id) = read_env::<u64>("SPELLDAWN_PLAYER_ID") {
            config.player_id = PlayerId(id);
        }
        config.game_id = read_env::<u64>("SPELLDAWN_GAME_ID").map(GameId);

        if let Some(offline) = read_env::<bool>("SPELLDAWN_OFFLINE") {
            config.offline = offline;
        } else if env::var("SPELLDAWN_OFFLINE").is_ok() {
            // Setting the variable without a value also means "on".
            config.offline = true;
        }

        config.server_url = env::var("SPELLDAWN_SERVER_URL").ok();

        if let Some(capacity) = read_env::<usize>("SPELLDAWN_COMMAND_BUFFER") {
            config.command_buffer = capacity.max(1);
        }
        if let Some(millis) = read_env::<u64>("SPELLDAWN_RECONNECT_POLL_MS") {
            config.reconnect_poll = Duration::from_millis(millis.max(1));
        }
        if let Some(quiet) = read_env::<bool>("SPELLDAWN_QUIET_ERRORS") {
            config.quiet_errors = quiet;
        }

        config
    }

    /// The session-level slice of this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            player_id: self.player_id,
            game_id: self.game_id,
            command_buffer: self.command_buffer,
            reconnect_poll: self.reconnect_poll,
            quiet_errors: self.quiet_errors,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
