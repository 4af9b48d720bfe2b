//! Zone descriptors understood by the engine.
//!
//! A zone is either shared by all players (battlefield, stack, exile, command)
//! or owned by one player (library, hand, graveyard).
use crate::ids::PlayerId;

/// Name of a zone shared by every player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum GlobalZone {
    Stack,
    Battlefield,
    Exile,
    Command,
}

/// Name of a zone that exists once per player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PlayerZone {
    Library,
    Hand,
    Graveyard,
}

/// Fully-qualified zone identifier as passed to `objects_in_zone`.
///
/// Serialized the way the engine expects: unit variants as bare strings
/// (`"Battlefield"`), player zones as single-key maps (`{"Hand": 1}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneId {
    Library(PlayerId),
    Hand(PlayerId),
    Graveyard(PlayerId),
    Stack,
    Battlefield,
    Exile,
    Command,
}

impl ZoneId {
    /// Builds the identifier of a shared zone.
    pub const fn global(zone: GlobalZone) -> Self {
        match zone {
            GlobalZone::Stack => Self::Stack,
            GlobalZone::Battlefield => Self::Battlefield,
            GlobalZone::Exile => Self::Exile,
            GlobalZone::Command => Self::Command,
        }
    }

    /// Builds the identifier of a player-scoped zone.
    pub const fn player(zone: PlayerZone, player: PlayerId) -> Self {
        match zone {
            PlayerZone::Library => Self::Library(player),
            PlayerZone::Hand => Self::Hand(player),
            PlayerZone::Graveyard => Self::Graveyard(player),
        }
    }

    /// Returns the owning player for player-scoped zones.
    pub const fn owner(&self) -> Option<PlayerId> {
        match self {
            Self::Library(player) | Self::Hand(player) | Self::Graveyard(player) => Some(*player),
            Self::Stack | Self::Battlefield | Self::Exile | Self::Command => None,
        }
    }
}

impl From<GlobalZone> for ZoneId {
    fn from(zone: GlobalZone) -> Self {
        Self::global(zone)
    }
}

impl From<(PlayerZone, PlayerId)> for ZoneId {
    fn from((zone, player): (PlayerZone, PlayerId)) -> Self {
        Self::player(zone, player)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library(player) => write!(f, "{player} library"),
            Self::Hand(player) => write!(f, "{player} hand"),
            Self::Graveyard(player) => write!(f, "{player} graveyard"),
            Self::Stack => f.write_str("stack"),
            Self::Battlefield => f.write_str("battlefield"),
            Self::Exile => f.write_str("exile"),
            Self::Command => f.write_str("command"),
        }
    }
}
