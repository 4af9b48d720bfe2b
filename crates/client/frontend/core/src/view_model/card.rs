//! Per-object display attributes.

use game_core::{CardId, EntityId, EntitySummary, PlayerId};

use crate::router::Gesture;

/// Layout slot an object occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Slot {
    Hand,
    /// Non-land permanents.
    CreatureRow,
    LandRow,
    Stack,
}

/// Directional offset hint for selected combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nudge {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub entity: EntityId,
    pub name: String,
    pub card: Option<CardId>,
    pub controller: Option<PlayerId>,
    pub slot: Slot,
    pub tapped: bool,
    /// Member of the pending selection for the active category.
    pub highlighted: bool,
    pub nudge: Option<Nudge>,
    /// Gesture pre-bound to this element, present only when it would be accepted.
    pub gesture: Option<Gesture>,
}

impl CardView {
    pub(crate) fn new(object: &EntitySummary, slot: Slot) -> Self {
        let name = if object.name.is_empty() {
            object.entity.to_string()
        } else {
            object.name.clone()
        };

        Self {
            entity: object.entity,
            name,
            card: object.card,
            controller: object.controller,
            slot,
            tapped: object.is_tapped(),
            highlighted: false,
            nudge: None,
            gesture: None,
        }
    }

    pub fn interactive(&self) -> bool {
        self.gesture.is_some()
    }
}
