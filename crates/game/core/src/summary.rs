//! Read-only summaries the engine reports for players and zone objects.
use crate::card::{ManaSymbol, TypeTags};
use crate::ids::{CardId, EntityId, ManaIndex, PlayerId};

/// Public information about one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub life: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lands_played_this_turn: u32,
    /// Mana currently floating, in pool order. Positions are the
    /// [`ManaIndex`] values used by mana payment commands.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_pool: Vec<ManaSymbol>,
}

impl PlayerSummary {
    pub fn new(id: PlayerId, name: impl Into<String>, life: i64) -> Self {
        Self {
            id,
            name: name.into(),
            life,
            lands_played_this_turn: 0,
            mana_pool: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_mana(mut self, mana: impl IntoIterator<Item = ManaSymbol>) -> Self {
        self.mana_pool.extend(mana);
        self
    }
}

/// Battlefield-only status of a permanent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermanentState {
    pub tapped: bool,
}

/// Progress of a spell that has been moved to the stack but not yet cast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpellCastingHandle {
    /// Pool positions already earmarked toward the cost, in payment order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_paid: Vec<ManaIndex>,
    /// Number of mana symbols in the total cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_required: u32,
}

impl SpellCastingHandle {
    pub fn new(mana_required: u32) -> Self {
        Self {
            mana_paid: Vec::new(),
            mana_required,
        }
    }

    /// True once any mana has been committed, or when nothing needs paying.
    pub fn has_committed_mana(&self) -> bool {
        !self.mana_paid.is_empty() || self.mana_required == 0
    }
}

/// One object visible in a queried zone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EntitySummary {
    pub entity: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Only objects on the stack or battlefield have a controller.
    pub controller: Option<PlayerId>,
    pub owner: PlayerId,
    pub types: TypeTags,
    pub card: Option<CardId>,
    pub permanent: Option<PermanentState>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub incomplete_spell: Option<SpellCastingHandle>,
}

impl EntitySummary {
    /// Creates a summary for an object with no zone-specific state.
    pub fn new(entity: EntityId, owner: PlayerId, types: TypeTags) -> Self {
        Self {
            entity,
            name: String::new(),
            controller: None,
            owner,
            types,
            card: None,
            permanent: None,
            incomplete_spell: None,
        }
    }

    /// Convenience constructor for an untapped permanent controlled by its owner.
    pub fn permanent(entity: EntityId, owner: PlayerId, types: TypeTags) -> Self {
        Self {
            controller: Some(owner),
            permanent: Some(PermanentState::default()),
            ..Self::new(entity, owner, types)
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: CardId) -> Self {
        self.card = Some(card);
        self
    }

    #[must_use]
    pub fn tapped(mut self, tapped: bool) -> Self {
        self.permanent = Some(PermanentState { tapped });
        self
    }

    #[must_use]
    pub fn controlled_by(mut self, player: PlayerId) -> Self {
        self.controller = Some(player);
        self
    }

    #[must_use]
    pub fn casting(mut self, handle: SpellCastingHandle) -> Self {
        self.incomplete_spell = Some(handle);
        self
    }

    pub fn is_tapped(&self) -> bool {
        self.permanent.is_some_and(|state| state.tapped)
    }

    pub fn is_controlled_by(&self, player: PlayerId) -> bool {
        self.controller == Some(player)
    }
}
