//! Client-local, not-yet-confirmed selections.
//!
//! Pending intent exists only between "the engine asks for input" and "the
//! player confirms". It is owned by one [`IntentSession`] and keyed to the
//! solicitation it was built under, so it can never leak into a different
//! player's or category's interaction.

use std::collections::BTreeSet;

use game_core::{EntityId, GlobalState, InputCategory, PlayerId};

use crate::bridge::EngineSnapshot;

/// Tentative attacker and blocker selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingIntent {
    pub attackers: BTreeSet<EntityId>,
    pub blockers: BTreeSet<EntityId>,
}

impl PendingIntent {
    /// The set a batched category accumulates into.
    pub fn selection(&self, category: InputCategory) -> Option<&BTreeSet<EntityId>> {
        match category {
            InputCategory::ChooseAttackers => Some(&self.attackers),
            InputCategory::ChooseBlockers => Some(&self.blockers),
            _ => None,
        }
    }

    fn selection_mut(&mut self, category: InputCategory) -> Option<&mut BTreeSet<EntityId>> {
        match category {
            InputCategory::ChooseAttackers => Some(&mut self.attackers),
            InputCategory::ChooseBlockers => Some(&mut self.blockers),
            _ => None,
        }
    }

    /// Flips membership of `entity` in the category's set.
    ///
    /// Returns the new membership, or `None` when the category does not
    /// accumulate selections.
    pub fn toggle(&mut self, category: InputCategory, entity: EntityId) -> Option<bool> {
        let set = self.selection_mut(category)?;
        if set.remove(&entity) {
            Some(false)
        } else {
            set.insert(entity);
            Some(true)
        }
    }

    pub fn contains(&self, category: InputCategory, entity: EntityId) -> bool {
        self.selection(category)
            .is_some_and(|set| set.contains(&entity))
    }

    pub fn is_empty(&self) -> bool {
        self.attackers.is_empty() && self.blockers.is_empty()
    }

    pub fn clear(&mut self) {
        self.attackers.clear();
        self.blockers.clear();
    }
}

/// The solicitation a pending intent belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub player: PlayerId,
    pub category: InputCategory,
}

impl SessionKey {
    pub fn of(state: &GlobalState) -> Option<Self> {
        state
            .soliciting()
            .map(|(player, category)| Self { player, category })
    }
}

/// Result of draining a selection for submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Revalidated {
    /// Ids still eligible, in ascending order.
    pub kept: Vec<EntityId>,
    /// Ids that left the battlefield or changed hands since selection.
    pub stale: Vec<EntityId>,
}

/// Pending intent plus the solicitation it was accumulated under.
///
/// A solicitation is identified by its [`SessionKey`] and the snapshot
/// revision at which it began, so leaving and re-entering the same player and
/// category still counts as a new solicitation.
#[derive(Clone, Debug, Default)]
pub struct IntentSession {
    key: Option<SessionKey>,
    since: u64,
    intent: PendingIntent,
}

impl IntentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<SessionKey> {
        self.key
    }

    pub fn intent(&self) -> &PendingIntent {
        &self.intent
    }

    /// Aligns the session with the snapshot's solicitation.
    ///
    /// When the solicitation differs from the one the intent was built under,
    /// the intent is discarded wholesale. Returns true when that discarded a
    /// non-empty selection.
    pub fn observe(&mut self, snapshot: &EngineSnapshot) -> bool {
        self.observe_at(&snapshot.state, snapshot.solicited_since)
    }

    /// [`observe`](Self::observe) for a state first seen at revision `since`.
    pub fn observe_at(&mut self, state: &GlobalState, since: u64) -> bool {
        let key = SessionKey::of(state);
        if key == self.key && since == self.since {
            return false;
        }

        let discarded = !self.intent.is_empty();
        if discarded {
            tracing::info!(
                previous = ?self.key,
                next = ?key,
                since,
                attackers = self.intent.attackers.len(),
                blockers = self.intent.blockers.len(),
                "solicitation changed; discarding pending selections"
            );
        }
        self.intent.clear();
        self.key = key;
        self.since = since;
        discarded
    }

    /// Selection to display for `snapshot`.
    ///
    /// Read-only counterpart of [`observe`](Self::observe): yields nothing if
    /// the session has not caught up with the snapshot's solicitation.
    pub fn selection_for(&self, snapshot: &EngineSnapshot) -> Option<&BTreeSet<EntityId>> {
        self.selection_at(&snapshot.state, snapshot.solicited_since)
    }

    fn selection_at(&self, state: &GlobalState, since: u64) -> Option<&BTreeSet<EntityId>> {
        let key = self
            .key
            .filter(|key| Some(*key) == SessionKey::of(state) && since == self.since)?;
        self.intent.selection(key.category)
    }

    pub(crate) fn toggle(&mut self, entity: EntityId) -> Option<bool> {
        let key = self.key?;
        self.intent.toggle(key.category, entity)
    }

    pub(crate) fn clear(&mut self) {
        self.intent.clear();
    }

    /// Drains the tentative attackers, revalidated against `snapshot`.
    pub fn take_attackers(&mut self, snapshot: &EngineSnapshot) -> Revalidated {
        self.take(InputCategory::ChooseAttackers, snapshot)
    }

    /// Drains the tentative blockers, revalidated against `snapshot`.
    pub fn take_blockers(&mut self, snapshot: &EngineSnapshot) -> Revalidated {
        self.take(InputCategory::ChooseBlockers, snapshot)
    }

    fn take(&mut self, category: InputCategory, snapshot: &EngineSnapshot) -> Revalidated {
        let Some(selected) = self.intent.selection_mut(category).map(std::mem::take) else {
            return Revalidated::default();
        };
        let Some(player) = self.key.map(|key| key.player) else {
            return Revalidated {
                kept: Vec::new(),
                stale: selected.into_iter().collect(),
            };
        };

        let (kept, stale) = selected
            .into_iter()
            .partition(|entity| snapshot.is_combat_eligible(*entity, player));
        Revalidated { kept, stale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attackers_for(player: u32) -> GlobalState {
        GlobalState::awaiting(PlayerId(player), InputCategory::ChooseAttackers)
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut intent = PendingIntent::default();
        intent.toggle(InputCategory::ChooseAttackers, EntityId(1));

        assert_eq!(
            intent.toggle(InputCategory::ChooseAttackers, EntityId(2)),
            Some(true)
        );
        assert_eq!(
            intent.toggle(InputCategory::ChooseAttackers, EntityId(2)),
            Some(false)
        );
        assert_eq!(intent.attackers, BTreeSet::from([EntityId(1)]));
    }

    #[test]
    fn non_batched_categories_hold_nothing() {
        let mut intent = PendingIntent::default();
        assert_eq!(intent.toggle(InputCategory::Priority, EntityId(1)), None);
        assert!(intent.is_empty());
    }

    #[test]
    fn same_solicitation_keeps_intent() {
        let mut session = IntentSession::new();
        session.observe_at(&attackers_for(0), 1);
        session.toggle(EntityId(5));

        assert!(!session.observe_at(&attackers_for(0), 1));
        assert!(session.intent().attackers.contains(&EntityId(5)));
    }

    #[test]
    fn new_player_or_category_discards_intent() {
        let mut session = IntentSession::new();
        session.observe_at(&attackers_for(0), 1);
        session.toggle(EntityId(5));

        assert!(session.observe_at(&attackers_for(1), 2));
        assert!(session.intent().is_empty());
        assert!(!session.observe_at(
            &GlobalState::awaiting(PlayerId(1), InputCategory::Priority),
            3
        ));
    }

    #[test]
    fn selection_for_ignores_a_stale_key() {
        let mut session = IntentSession::new();
        session.observe_at(&attackers_for(0), 1);
        session.toggle(EntityId(5));

        assert_eq!(
            session.selection_at(&attackers_for(0), 1),
            Some(&BTreeSet::from([EntityId(5)]))
        );
        assert_eq!(session.selection_at(&attackers_for(1), 1), None);
        assert_eq!(session.selection_at(&attackers_for(0), 4), None);
    }

    #[test]
    fn returning_to_the_same_solicitation_starts_empty() {
        let mut session = IntentSession::new();
        session.observe_at(&attackers_for(0), 1);
        session.toggle(EntityId(5));

        session.observe_at(
            &GlobalState::awaiting(PlayerId(1), InputCategory::Priority),
            2,
        );
        session.observe_at(&attackers_for(0), 3);

        assert!(session.intent().is_empty());
        assert_eq!(session.toggle(EntityId(6)), Some(true));
        assert_eq!(session.intent().attackers, BTreeSet::from([EntityId(6)]));
    }
}
