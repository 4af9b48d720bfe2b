//! Frontend configuration structures and loaders.
//!
//! Settings here shape presentation only. Nothing in this module changes what
//! is submitted to the engine.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub layout: LayoutConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, layout: LayoutConfig) -> Self {
        Self { messages, layout }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLIENT_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `NUDGE_ATTACKERS` - Offset selected attackers toward the opponent (default: true)
    /// - `NUDGE_BLOCKERS` - Offset selected blockers toward the opponent (default: true)
    /// - `HIDE_EMPTY_STACK` - Omit the stack window while it is empty (default: true)
    /// - `SHOW_COMMAND_MESSAGES` - Log submitted commands (default: true)
    /// - `SHOW_STATE_MESSAGES` - Log state transitions (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLIENT_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("SHOW_COMMAND_MESSAGES") {
            config.messages.show_commands = show;
        }
        if let Some(show) = read_env_bool("SHOW_STATE_MESSAGES") {
            config.messages.show_state_changes = show;
        }

        if let Some(nudge) = read_env_bool("NUDGE_ATTACKERS") {
            config.layout.nudge_attackers = nudge;
        }
        if let Some(nudge) = read_env_bool("NUDGE_BLOCKERS") {
            config.layout.nudge_blockers = nudge;
        }
        if let Some(hide) = read_env_bool("HIDE_EMPTY_STACK") {
            config.layout.hide_empty_stack = hide;
        }

        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Record a line for every command forwarded to the engine.
    pub show_commands: bool,
    /// Record a line whenever the solicited player or category changes.
    pub show_state_changes: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_commands: true,
            show_state_changes: true,
        }
    }
}

/// Rendering hints consumed by the projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub nudge_attackers: bool,
    pub nudge_blockers: bool,
    pub hide_empty_stack: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nudge_attackers: true,
            nudge_blockers: true,
            hide_empty_stack: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_hint() {
        let config = FrontendConfig::default();
        assert_eq!(config.messages.capacity, 64);
        assert!(config.layout.nudge_attackers);
        assert!(config.layout.nudge_blockers);
        assert!(config.layout.hide_empty_stack);
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
