//! Immutable captures of engine truth.

use std::collections::BTreeMap;

use bitflags::bitflags;
use game_core::{
    EntityId, EntitySummary, GlobalState, InputCategory, PlayerId, PlayerSummary, RulesEngine,
    StepId, ZoneId,
};

use crate::zones::{self, BattlefieldRows, ZoneDescriptor};

bitflags! {
    /// Tracks which parts of the snapshot changed across a refresh.
    ///
    /// Observers use it to skip work for unchanged sections. The projection
    /// itself always re-derives everything.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RefreshScope: u8 {
        /// Solicited player or category changed, or the game ended.
        const STATE   = 0b0001;

        /// Turn step advanced.
        const STEP    = 0b0010;

        /// Player summaries changed (life, mana pool, names).
        const PLAYERS = 0b0100;

        /// Any zone's membership or contents changed.
        const ZONES   = 0b1000;

        const ALL = Self::STATE.bits()
                  | Self::STEP.bits()
                  | Self::PLAYERS.bits()
                  | Self::ZONES.bits();
    }
}

impl RefreshScope {
    /// Sections that differ between two snapshots.
    pub fn between(previous: &EngineSnapshot, next: &EngineSnapshot) -> Self {
        let mut scope = Self::empty();
        scope.set(Self::STATE, previous.state != next.state);
        scope.set(Self::STEP, previous.step != next.step);
        scope.set(Self::PLAYERS, previous.players != next.players);
        scope.set(Self::ZONES, previous.zones != next.zones);
        scope
    }
}

/// Everything the engine reported at one refresh.
///
/// Replaced wholesale on every refresh and never patched. Zone contents are
/// captured eagerly so that deriving a render model needs no engine access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    /// Incremented by every refresh, starting at 1 for the first capture.
    pub revision: u64,
    /// Players in the engine's turn order.
    pub players: Vec<PlayerSummary>,
    pub state: GlobalState,
    /// Revision at which `state` was first observed.
    ///
    /// Unchanged across refreshes that keep the same state, so two equal
    /// states separated by a different one are told apart.
    pub solicited_since: u64,
    pub step: StepId,
    zones: BTreeMap<ZoneId, Vec<EntitySummary>>,
}

impl EngineSnapshot {
    /// Queries every piece of engine truth.
    pub fn capture<E>(engine: &E, revision: u64) -> Self
    where
        E: RulesEngine + ?Sized,
    {
        let players = engine.players();
        let zones = zones::all_zones(players.iter().map(|player| player.id))
            .into_iter()
            .map(|descriptor| (descriptor.zone_id(), zones::query_zone(engine, descriptor)))
            .collect();

        Self {
            revision,
            players,
            state: engine.state(),
            solicited_since: revision,
            step: engine.step(),
            zones,
        }
    }

    /// Objects in a zone as of this snapshot, in engine order.
    pub fn entities_in(&self, descriptor: impl Into<ZoneDescriptor>) -> &[EntitySummary] {
        self.zone(descriptor.into().zone_id())
    }

    pub fn zone(&self, zone: ZoneId) -> &[EntitySummary] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Display name of a player, falling back to its id.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map_or_else(|| id.to_string(), |player| player.name.clone())
    }

    /// Carries the start of the current solicitation over from `previous`
    /// when the state did not change.
    pub(crate) fn continue_from(&mut self, previous: &EngineSnapshot) {
        if self.state == previous.state {
            self.solicited_since = previous.solicited_since;
        }
    }

    pub fn soliciting(&self) -> Option<(PlayerId, InputCategory)> {
        self.state.soliciting()
    }

    /// Battlefield objects controlled by `player`, split into layout rows.
    pub fn battlefield_of(&self, player: PlayerId) -> BattlefieldRows<'_> {
        BattlefieldRows::split(
            self.zone(ZoneId::Battlefield)
                .iter()
                .filter(|object| object.is_controlled_by(player)),
        )
    }

    /// The spell `player` is in the middle of casting, if any.
    ///
    /// The engine allows at most one incomplete spell per player; the first
    /// match in stack order is returned.
    pub fn stack_spell_of(&self, player: PlayerId) -> Option<&EntitySummary> {
        self.zone(ZoneId::Stack)
            .iter()
            .find(|object| object.is_controlled_by(player) && object.incomplete_spell.is_some())
    }

    /// Whether `entity` may currently be declared as an attacker or blocker
    /// by `player`: on the battlefield, controlled by them, and not a land.
    pub fn is_combat_eligible(&self, entity: EntityId, player: PlayerId) -> bool {
        self.zone(ZoneId::Battlefield).iter().any(|object| {
            object.entity == entity && object.is_controlled_by(player) && !object.types.is_land()
        })
    }

    pub fn hand_card(&self, player: PlayerId, card: EntityId) -> Option<&EntitySummary> {
        self.zone(ZoneId::Hand(player))
            .iter()
            .find(|object| object.entity == card)
    }

    pub fn library_count(&self, player: PlayerId) -> usize {
        self.zone(ZoneId::Library(player)).len()
    }

    pub fn graveyard_count(&self, player: PlayerId) -> usize {
        self.zone(ZoneId::Graveyard(player)).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::mock::{MockEngine, MockWorld};
    use game_core::{GlobalZone, PlayerZone, SpellCastingHandle, TypeTags};

    fn world() -> MockWorld {
        let mut world = MockWorld::two_player();
        world.put(
            ZoneId::Battlefield,
            EntitySummary::permanent(EntityId(1), PlayerId(0), TypeTags::CREATURE),
        );
        world.put(
            ZoneId::Battlefield,
            EntitySummary::permanent(EntityId(2), PlayerId(0), TypeTags::LAND),
        );
        world.put(
            ZoneId::Battlefield,
            EntitySummary::permanent(EntityId(3), PlayerId(1), TypeTags::ARTIFACT),
        );
        world.put(
            ZoneId::Library(PlayerId(1)),
            EntitySummary::new(EntityId(10), PlayerId(1), TypeTags::SORCERY),
        );
        world
    }

    #[test]
    fn capture_reads_every_zone() {
        let snapshot = EngineSnapshot::capture(&MockEngine::new(world()), 1);

        assert_eq!(snapshot.entities_in(GlobalZone::Battlefield).len(), 3);
        assert_eq!(snapshot.library_count(PlayerId(1)), 1);
        assert!(snapshot
            .entities_in((PlayerZone::Hand, PlayerId(0)))
            .is_empty());
        assert_eq!(snapshot.player_name(PlayerId(1)), "Player 2");
        assert_eq!(snapshot.player_name(PlayerId(8)), "P8");
    }

    #[test]
    fn battlefield_rows_split_lands_from_other_permanents() {
        let snapshot = EngineSnapshot::capture(&MockEngine::new(world()), 1);
        let rows = snapshot.battlefield_of(PlayerId(0));

        assert_eq!(rows.creatures.len(), 1);
        assert_eq!(rows.creatures[0].entity, EntityId(1));
        assert_eq!(rows.lands[0].entity, EntityId(2));
        assert!(snapshot.is_combat_eligible(EntityId(1), PlayerId(0)));
        assert!(!snapshot.is_combat_eligible(EntityId(2), PlayerId(0)));
        assert!(!snapshot.is_combat_eligible(EntityId(3), PlayerId(0)));
    }

    #[test]
    fn stack_spell_requires_incomplete_casting() {
        let mut world = world();
        world.put(
            ZoneId::Stack,
            EntitySummary::new(EntityId(20), PlayerId(0), TypeTags::INSTANT)
                .controlled_by(PlayerId(0)),
        );
        world.put(
            ZoneId::Stack,
            EntitySummary::new(EntityId(21), PlayerId(0), TypeTags::SORCERY)
                .controlled_by(PlayerId(0))
                .casting(SpellCastingHandle::new(2)),
        );
        let snapshot = EngineSnapshot::capture(&MockEngine::new(world), 1);

        assert_eq!(
            snapshot.stack_spell_of(PlayerId(0)).map(|s| s.entity),
            Some(EntityId(21))
        );
        assert!(snapshot.stack_spell_of(PlayerId(1)).is_none());
    }

    #[test]
    fn scope_reports_only_changed_sections() {
        let engine = MockEngine::new(world());
        let handle = engine.handle();
        let before = EngineSnapshot::capture(&engine, 1);

        handle.update(|world| world.step = StepId::BeginCombat);
        let after = EngineSnapshot::capture(&engine, 2);

        assert_eq!(RefreshScope::between(&before, &after), RefreshScope::STEP);
        assert!(RefreshScope::between(&after, &after).is_empty());
    }
}
