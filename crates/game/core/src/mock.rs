//! In-memory engine for tests.
//!
//! [`MockEngine`] answers queries from a [`MockWorld`] and records every
//! command it receives. An optional reactor closure emulates the engine's own
//! transitions. A [`MockHandle`] shares the same world so tests can change
//! engine truth behind the client's back and inspect what was submitted.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::card::CardArt;
use crate::command::Command;
use crate::engine::RulesEngine;
use crate::error::EngineError;
use crate::ids::{CardId, EntityId, PlayerId};
use crate::state::{GlobalState, InputCategory};
use crate::step::StepId;
use crate::summary::{EntitySummary, PlayerSummary};
use crate::zone::ZoneId;

/// Engine truth held by the mock.
#[derive(Clone, Debug)]
pub struct MockWorld {
    pub players: Vec<PlayerSummary>,
    pub state: GlobalState,
    pub step: StepId,
    pub cards: BTreeMap<CardId, CardArt>,
    zones: BTreeMap<ZoneId, Vec<EntitySummary>>,
    submitted: Vec<(PlayerId, Command)>,
}

impl MockWorld {
    /// Creates a world with every zone present and empty.
    ///
    /// The first player holds priority in the precombat main phase.
    pub fn new(players: Vec<PlayerSummary>) -> Self {
        let mut zones = BTreeMap::new();
        for zone in [
            ZoneId::Stack,
            ZoneId::Battlefield,
            ZoneId::Exile,
            ZoneId::Command,
        ] {
            zones.insert(zone, Vec::new());
        }
        for player in &players {
            zones.insert(ZoneId::Library(player.id), Vec::new());
            zones.insert(ZoneId::Hand(player.id), Vec::new());
            zones.insert(ZoneId::Graveyard(player.id), Vec::new());
        }

        let state = match players.first() {
            Some(first) => GlobalState::awaiting(first.id, InputCategory::Priority),
            None => GlobalState::GameOver { winner: None },
        };

        Self {
            players,
            state,
            step: StepId::Main1,
            cards: BTreeMap::new(),
            zones,
            submitted: Vec::new(),
        }
    }

    /// Two players named "Player 1" and "Player 2" at 20 life.
    pub fn two_player() -> Self {
        Self::new(vec![
            PlayerSummary::new(PlayerId(0), "Player 1", 20),
            PlayerSummary::new(PlayerId(1), "Player 2", 20),
        ])
    }

    /// Appends an object to a zone, creating the zone if needed.
    pub fn put(&mut self, zone: ZoneId, object: EntitySummary) {
        self.zones.entry(zone).or_default().push(object);
    }

    /// Removes an object from whichever zone holds it.
    pub fn remove(&mut self, entity: EntityId) -> Option<EntitySummary> {
        self.zones.values_mut().find_map(|members| {
            let index = members.iter().position(|object| object.entity == entity)?;
            Some(members.remove(index))
        })
    }

    /// Moves an object to the end of another zone.
    pub fn move_to(&mut self, entity: EntityId, zone: ZoneId) -> bool {
        match self.remove(entity) {
            Some(object) => {
                self.put(zone, object);
                true
            }
            None => false,
        }
    }

    /// Mutable access to an object wherever it is.
    pub fn object_mut(&mut self, entity: EntityId) -> Option<&mut EntitySummary> {
        self.zones
            .values_mut()
            .flat_map(|members| members.iter_mut())
            .find(|object| object.entity == entity)
    }

    pub fn zone(&self, zone: ZoneId) -> &[EntitySummary] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut PlayerSummary> {
        self.players.iter_mut().find(|summary| summary.id == player)
    }

    /// Removes a zone entirely so that queries for it fail.
    pub fn forget_zone(&mut self, zone: ZoneId) {
        self.zones.remove(&zone);
    }

    /// Commands received so far, in arrival order.
    pub fn submitted(&self) -> &[(PlayerId, Command)] {
        &self.submitted
    }
}

type Reactor = Box<dyn FnMut(&mut MockWorld, PlayerId, &Command)>;

/// Scriptable [`RulesEngine`] backed by a shared [`MockWorld`].
pub struct MockEngine {
    world: Rc<RefCell<MockWorld>>,
    reactor: Option<Reactor>,
}

impl MockEngine {
    pub fn new(world: MockWorld) -> Self {
        Self {
            world: Rc::new(RefCell::new(world)),
            reactor: None,
        }
    }

    /// Installs a closure run after each recorded command.
    #[must_use]
    pub fn with_reactor(
        mut self,
        reactor: impl FnMut(&mut MockWorld, PlayerId, &Command) + 'static,
    ) -> Self {
        self.reactor = Some(Box::new(reactor));
        self
    }

    /// Returns a handle sharing this engine's world.
    pub fn handle(&self) -> MockHandle {
        MockHandle {
            world: Rc::clone(&self.world),
        }
    }
}

impl RulesEngine for MockEngine {
    fn players(&self) -> Vec<PlayerSummary> {
        self.world.borrow().players.clone()
    }

    fn state(&self) -> GlobalState {
        self.world.borrow().state.clone()
    }

    fn step(&self) -> StepId {
        self.world.borrow().step
    }

    fn objects_in_zone(&self, zone: ZoneId) -> Result<Vec<EntitySummary>, EngineError> {
        let world = self.world.borrow();
        if let Some(owner) = zone
            .owner()
            .filter(|owner| !world.players.iter().any(|player| player.id == *owner))
        {
            return Err(EngineError::UnknownPlayer(owner));
        }
        world
            .zones
            .get(&zone)
            .cloned()
            .ok_or(EngineError::UnknownZone(zone))
    }

    fn do_action(&mut self, player: PlayerId, command: Command) {
        let mut world = self.world.borrow_mut();
        world.submitted.push((player, command.clone()));
        if let Some(reactor) = self.reactor.as_mut() {
            reactor(&mut *world, player, &command);
        }
    }

    fn card_by_id(&self, card: CardId) -> Option<CardArt> {
        self.world.borrow().cards.get(&card).cloned()
    }
}

/// Shared view of a [`MockEngine`]'s world.
#[derive(Clone)]
pub struct MockHandle {
    world: Rc<RefCell<MockWorld>>,
}

impl MockHandle {
    /// Mutates engine truth without going through a command.
    pub fn update<R>(&self, f: impl FnOnce(&mut MockWorld) -> R) -> R {
        f(&mut *self.world.borrow_mut())
    }

    pub fn read<R>(&self, f: impl FnOnce(&MockWorld) -> R) -> R {
        f(&*self.world.borrow())
    }

    /// Commands received so far, in arrival order.
    pub fn submitted(&self) -> Vec<(PlayerId, Command)> {
        self.world.borrow().submitted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::TypeTags;

    #[test]
    fn records_commands_and_runs_reactor() {
        let mut engine =
            MockEngine::new(MockWorld::two_player()).with_reactor(|world, player, command| {
                if *command == Command::PassPriority {
                    world.state =
                        GlobalState::awaiting(PlayerId(player.0 + 1), InputCategory::Priority);
                }
            });
        let handle = engine.handle();

        engine.do_action(PlayerId(0), Command::PassPriority);

        assert_eq!(handle.submitted(), vec![(PlayerId(0), Command::PassPriority)]);
        assert_eq!(engine.state().priority_player(), Some(PlayerId(1)));
    }

    #[test]
    fn zones_of_absent_players_are_errors() {
        let engine = MockEngine::new(MockWorld::two_player());
        assert_eq!(
            engine.objects_in_zone(ZoneId::Hand(PlayerId(7))),
            Err(EngineError::UnknownPlayer(PlayerId(7)))
        );
    }

    #[test]
    fn forgotten_zones_are_errors() {
        let mut world = MockWorld::two_player();
        world.forget_zone(ZoneId::Exile);
        world.forget_zone(ZoneId::Graveyard(PlayerId(1)));
        let engine = MockEngine::new(world);

        assert_eq!(
            engine.objects_in_zone(ZoneId::Exile),
            Err(EngineError::UnknownZone(ZoneId::Exile))
        );
        assert_eq!(
            engine.objects_in_zone(ZoneId::Graveyard(PlayerId(1))),
            Err(EngineError::UnknownZone(ZoneId::Graveyard(PlayerId(1))))
        );
        assert_eq!(engine.objects_in_zone(ZoneId::Graveyard(PlayerId(0))), Ok(vec![]));
    }

    #[test]
    fn move_to_preserves_object() {
        let mut world = MockWorld::two_player();
        world.put(
            ZoneId::Hand(PlayerId(0)),
            EntitySummary::new(EntityId(1), PlayerId(0), TypeTags::LAND),
        );
        assert!(world.move_to(EntityId(1), ZoneId::Battlefield));
        assert!(world.zone(ZoneId::Hand(PlayerId(0))).is_empty());
        assert_eq!(world.zone(ZoneId::Battlefield)[0].entity, EntityId(1));
    }
}
