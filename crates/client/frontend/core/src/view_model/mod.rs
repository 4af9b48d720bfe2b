//! Render models derived from an [`EngineSnapshot`] and the pending intent.
//!
//! [`project`] is a pure function: it reads the snapshot captured by the
//! bridge and the intent session, and never queries the engine or mutates
//! anything. Deriving twice from the same inputs yields equal models.
mod card;
mod player;
mod turn;

pub use card::{CardView, Nudge, Slot};
pub use player::{ActionButton, ManaView, PlayerView, Seat};
pub use turn::{MAX_STEPS_PER_PHASE, PhaseView, StateBanner, StepTrack, StepView};

use std::collections::BTreeSet;

use game_core::{EntityId, EntitySummary, InputCategory, ManaIndex, PlayerId, PlayerSummary, ZoneId};

use crate::bridge::EngineSnapshot;
use crate::config::LayoutConfig;
use crate::intent::IntentSession;
use crate::router::{self, Gesture};

/// Everything presentation code needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    /// Snapshot revision this model was derived from.
    pub revision: u64,
    pub banner: StateBanner,
    pub steps: StepTrack,
    /// Players in engine order.
    pub players: Vec<PlayerView>,
    /// `None` when the stack is empty and configured to hide.
    pub stack: Option<StackView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackView {
    /// Stack objects in engine order.
    pub entries: Vec<CardView>,
}

impl RenderModel {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Every card view, across all players and the stack.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.players
            .iter()
            .flat_map(PlayerView::cards)
            .chain(self.stack.iter().flat_map(|stack| stack.entries.iter()))
    }

    pub fn card(&self, entity: EntityId) -> Option<&CardView> {
        self.cards().find(|card| card.entity == entity)
    }

    /// Validates model invariants (debug builds only).
    ///
    /// - at most one player is being solicited
    /// - highlighted cards sit in the creature row
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert!(
            self.players.iter().filter(|p| p.is_soliciting).count() <= 1,
            "RenderModel invariant broken: more than one player solicited"
        );
        debug_assert!(
            self.cards()
                .filter(|card| card.highlighted)
                .all(|card| card.slot == Slot::CreatureRow),
            "RenderModel invariant broken: highlighted card outside the creature row"
        );
    }
}

/// Derives the render model for `snapshot`.
///
/// Pending selections are shown only when `session` is keyed to the
/// snapshot's current solicitation.
pub fn project(
    snapshot: &EngineSnapshot,
    session: &IntentSession,
    layout: &LayoutConfig,
) -> RenderModel {
    let projection = Projection {
        snapshot,
        selection: session.selection_for(snapshot),
        category: snapshot.soliciting().map(|(_, category)| category),
        layout,
    };

    let players = snapshot
        .players
        .iter()
        .enumerate()
        .map(|(position, player)| projection.player(player, Seat::for_position(position)))
        .collect();

    let stack_objects = snapshot.zone(ZoneId::Stack);
    let stack = if stack_objects.is_empty() && layout.hide_empty_stack {
        None
    } else {
        Some(StackView {
            entries: stack_objects
                .iter()
                .map(|object| CardView::new(object, Slot::Stack))
                .collect(),
        })
    };

    let model = RenderModel {
        revision: snapshot.revision,
        banner: StateBanner::from_snapshot(snapshot),
        steps: StepTrack::new(snapshot.step),
        players,
        stack,
    };

    #[cfg(debug_assertions)]
    model.validate_invariants();

    model
}

struct Projection<'a> {
    snapshot: &'a EngineSnapshot,
    selection: Option<&'a BTreeSet<EntityId>>,
    category: Option<InputCategory>,
    layout: &'a LayoutConfig,
}

impl Projection<'_> {
    fn player(&self, summary: &PlayerSummary, seat: Seat) -> PlayerView {
        let id = summary.id;
        let rows = self.snapshot.battlefield_of(id);

        PlayerView {
            id,
            name: summary.name.clone(),
            life: summary.life,
            seat,
            has_priority: self.snapshot.state.priority_player() == Some(id),
            is_soliciting: self.snapshot.soliciting().is_some_and(|(p, _)| p == id),
            lands_played_this_turn: summary.lands_played_this_turn,
            library_count: self.snapshot.library_count(id),
            graveyard_count: self.snapshot.graveyard_count(id),
            mana: self.mana(summary),
            actions: self.actions(id),
            creatures: rows
                .creatures
                .into_iter()
                .map(|object| self.creature(object, seat))
                .collect(),
            lands: rows
                .lands
                .into_iter()
                .map(|object| CardView::new(object, Slot::LandRow))
                .collect(),
            hand: self
                .snapshot
                .zone(ZoneId::Hand(id))
                .iter()
                .map(|object| self.hand_card(object, id))
                .collect(),
        }
    }

    fn creature(&self, object: &EntitySummary, seat: Seat) -> CardView {
        let mut view = CardView::new(object, Slot::CreatureRow);
        view.highlighted = self
            .selection
            .is_some_and(|selection| selection.contains(&object.entity));
        if view.highlighted && self.nudges_selection() {
            view.nudge = Some(seat.toward_opponent());
        }
        view.gesture = self.offer(Gesture::ToggleCombatant(object.entity));
        view
    }

    fn hand_card(&self, object: &EntitySummary, player: PlayerId) -> CardView {
        let mut view = CardView::new(object, Slot::Hand);
        view.gesture = self.offer(Gesture::PlayFromHand {
            player,
            card: object.entity,
        });
        view
    }

    fn mana(&self, summary: &PlayerSummary) -> Vec<ManaView> {
        let committed: &[ManaIndex] = self
            .snapshot
            .stack_spell_of(summary.id)
            .and_then(|spell| spell.incomplete_spell.as_ref())
            .map(|casting| casting.mana_paid.as_slice())
            .unwrap_or_default();

        summary
            .mana_pool
            .iter()
            .enumerate()
            .filter_map(|(position, symbol)| {
                let index = ManaIndex::from_position(position)?;
                Some(ManaView {
                    index,
                    symbol: *symbol,
                    committed: committed.contains(&index),
                    gesture: self.offer(Gesture::TapMana {
                        player: summary.id,
                        index,
                    }),
                })
            })
            .collect()
    }

    fn actions(&self, player: PlayerId) -> Vec<ActionButton> {
        router::affordances(self.snapshot, player)
            .into_iter()
            .map(|gesture| ActionButton {
                label: self.label(gesture),
                gesture,
            })
            .collect()
    }

    fn label(&self, gesture: Gesture) -> String {
        let nothing_selected = self.selection.is_none_or(BTreeSet::is_empty);
        let label = match gesture {
            Gesture::PassPriority { .. } => "Pass Priority",
            Gesture::ConfirmCombat { .. } => match (self.category, nothing_selected) {
                (Some(InputCategory::ChooseBlockers), true) => "No Blockers",
                (Some(InputCategory::ChooseBlockers), false) => "Confirm Blockers",
                (_, true) => "No Attackers",
                (_, false) => "Confirm Attackers",
            },
            Gesture::FinishSpell { .. } => "Finish Spell",
            Gesture::CancelSpell { .. } => "Cancel Spell",
            Gesture::Concede { .. } => "Concede",
            Gesture::ToggleCombatant(_) | Gesture::PlayFromHand { .. } | Gesture::TapMana { .. } => {
                gesture.kind()
            }
        };
        label.to_string()
    }

    fn nudges_selection(&self) -> bool {
        match self.category {
            Some(InputCategory::ChooseAttackers) => self.layout.nudge_attackers,
            Some(InputCategory::ChooseBlockers) => self.layout.nudge_blockers,
            _ => false,
        }
    }

    fn offer(&self, gesture: Gesture) -> Option<Gesture> {
        router::is_offered(self.snapshot, gesture).then_some(gesture)
    }
}
