//! Per-player panels.

use game_core::{ManaIndex, ManaSymbol, PlayerId};

use super::card::{CardView, Nudge};
use crate::router::Gesture;

/// Where a player's panel sits on screen.
///
/// The first reported player sits on top; everybody else at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    Top,
    Bottom,
}

impl Seat {
    pub const fn for_position(position: usize) -> Self {
        if position == 0 { Self::Top } else { Self::Bottom }
    }

    /// Offset that moves a card toward the opposing seat.
    pub const fn toward_opponent(self) -> Nudge {
        match self {
            Self::Top => Nudge::Down,
            Self::Bottom => Nudge::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManaView {
    pub index: ManaIndex,
    pub symbol: ManaSymbol,
    /// Already earmarked toward the player's incomplete spell.
    pub committed: bool,
    pub gesture: Option<Gesture>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub gesture: Gesture,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub life: i64,
    pub seat: Seat,
    pub has_priority: bool,
    /// The engine is waiting on this player for any category.
    pub is_soliciting: bool,
    pub lands_played_this_turn: u32,
    pub library_count: usize,
    pub graveyard_count: usize,
    pub mana: Vec<ManaView>,
    pub actions: Vec<ActionButton>,
    pub creatures: Vec<CardView>,
    pub lands: Vec<CardView>,
    pub hand: Vec<CardView>,
}

impl PlayerView {
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.creatures
            .iter()
            .chain(self.lands.iter())
            .chain(self.hand.iter())
    }

    pub fn action(&self, label: &str) -> Option<&ActionButton> {
        self.actions.iter().find(|action| action.label == label)
    }
}
