//! Turn structure vocabulary: steps and the phases that group them.
use strum::IntoEnumIterator;

/// A step of the turn, in turn order.
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
pub enum StepId {
    Untap,
    Upkeep,
    Draw,
    Main1,
    BeginCombat,
    DeclareAttackers,
    DeclareBlockers,
    CombatDamage,
    EndCombat,
    Main2,
    End,
    Cleanup,
}

impl StepId {
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Untap | Self::Upkeep | Self::Draw => Phase::Beginning,
            Self::Main1 => Phase::PrecombatMain,
            Self::BeginCombat
            | Self::DeclareAttackers
            | Self::DeclareBlockers
            | Self::CombatDamage
            | Self::EndCombat => Phase::Combat,
            Self::Main2 => Phase::PostcombatMain,
            Self::End | Self::Cleanup => Phase::Ending,
        }
    }

    /// Short label suitable for a step tracker.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Untap => "Untap",
            Self::Upkeep => "Upkeep",
            Self::Draw => "Draw",
            Self::Main1 | Self::Main2 => "Main",
            Self::BeginCombat => "Begin",
            Self::DeclareAttackers => "Attackers",
            Self::DeclareBlockers => "Blockers",
            Self::CombatDamage => "Damage",
            Self::EndCombat | Self::End => "End",
            Self::Cleanup => "Cleanup",
        }
    }
}

/// A phase of the turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Beginning,
    PrecombatMain,
    Combat,
    PostcombatMain,
    Ending,
}

impl Phase {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginning => "Beginning",
            Self::PrecombatMain => "Main 1",
            Self::Combat => "Combat",
            Self::PostcombatMain => "Main 2",
            Self::Ending => "Ending",
        }
    }

    /// Steps of this phase in turn order.
    pub fn steps(self) -> impl Iterator<Item = StepId> {
        StepId::iter().filter(move |step| step.phase() == self)
    }
}
