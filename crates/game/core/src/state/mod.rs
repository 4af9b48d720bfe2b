//! The engine's discriminated game state.
//!
//! [`GlobalState`] is the single value that drives the whole client: it says
//! which player the engine is waiting on and what kind of decision it wants.
#[cfg(feature = "serde")]
pub mod wire;

use crate::ids::PlayerId;

/// Kind of decision the engine is soliciting.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputCategory {
    /// The player may take an action or pass.
    Priority,
    ChooseAttackers,
    ChooseBlockers,
    /// The player is in the window where mana can be spent on a spell.
    #[cfg_attr(feature = "serde", serde(alias = "SpellManaAbilities"))]
    PayIncompleteSpellMana,
    /// Costs are being finalized; the spell can be finished or abandoned.
    #[cfg_attr(feature = "serde", serde(alias = "SpellPayingCost"))]
    FinishOrCancelSpell,
}

impl InputCategory {
    /// Categories whose decisions are accumulated locally before submission.
    pub const fn is_batched(&self) -> bool {
        matches!(self, Self::ChooseAttackers | Self::ChooseBlockers)
    }

    /// Categories in which an in-progress spell may receive mana or be finished.
    pub const fn allows_spell_payment(&self) -> bool {
        matches!(
            self,
            Self::Priority | Self::PayIncompleteSpellMana | Self::FinishOrCancelSpell
        )
    }
}

/// What the engine dictates must happen next.
///
/// At most one player is ever being awaited. Deserialization accepts every
/// historical engine shape (see [`wire`]); serialization emits the canonical
/// `AwaitingInput` form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "wire::WireGlobalState", into = "wire::WireGlobalState")
)]
pub enum GlobalState {
    AwaitingInput {
        player: PlayerId,
        category: InputCategory,
    },
    /// The game has concluded. `winner` is `None` for a draw.
    GameOver { winner: Option<PlayerId> },
}

impl GlobalState {
    pub const fn awaiting(player: PlayerId, category: InputCategory) -> Self {
        Self::AwaitingInput { player, category }
    }

    /// Returns the awaited player and category, if any input is solicited.
    pub const fn soliciting(&self) -> Option<(PlayerId, InputCategory)> {
        match self {
            Self::AwaitingInput { player, category } => Some((*player, *category)),
            Self::GameOver { .. } => None,
        }
    }

    pub fn is_awaiting(&self, player: PlayerId, category: InputCategory) -> bool {
        self.soliciting() == Some((player, category))
    }

    /// Player holding priority, if the engine is waiting on a priority decision.
    pub fn priority_player(&self) -> Option<PlayerId> {
        match self.soliciting() {
            Some((player, InputCategory::Priority)) => Some(player),
            _ => None,
        }
    }

    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
