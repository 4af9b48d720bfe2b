//! Commands a player submits to the engine.
use crate::ids::{EntityId, ManaIndex};

/// One player decision, as accepted by `do_action`.
///
/// Serialized internally tagged on `"type"`, matching the engine's action
/// format (`{"type":"PlayLand","card":12}`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Command {
    /// A player can concede at any time; they leave the game and lose.
    Concede,

    PassPriority,

    ChooseAttackers {
        attackers: Vec<EntityId>,
    },

    ChooseBlockers {
        blockers: Vec<EntityId>,
    },

    /// Special action: put a land from hand onto the battlefield.
    PlayLand {
        card: EntityId,
    },

    /// Move a spell to the stack and begin paying for it.
    StartCastingSpell {
        spell: EntityId,
    },

    /// Earmark one unit of floating mana toward an incomplete spell.
    PayIncompleteSpellMana {
        spell: EntityId,
        #[cfg_attr(feature = "serde", serde(rename = "mana"))]
        mana_index: ManaIndex,
    },

    FinishCastingSpell {
        spell: EntityId,
    },

    CancelCastingSpell {
        spell: EntityId,
    },
}

impl Command {
    /// Stable name of the command variant, as used on the wire.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
