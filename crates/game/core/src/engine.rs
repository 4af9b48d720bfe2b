//! Query and command surface of the authoritative rules engine.
//!
//! The engine is pull-based: nothing is pushed to the client, so callers must
//! re-query after every [`RulesEngine::do_action`].
use crate::card::CardArt;
use crate::command::Command;
use crate::error::EngineError;
use crate::ids::{CardId, PlayerId};
use crate::state::GlobalState;
use crate::step::StepId;
use crate::summary::{EntitySummary, PlayerSummary};
use crate::zone::ZoneId;

/// Synchronous handle to a rules engine.
///
/// Implementations own all game truth. Every method completes without
/// suspension, and `do_action` never reports whether the command was accepted:
/// an illegal command is silently ignored and only the next query reveals it.
pub trait RulesEngine {
    /// All players, in turn order.
    fn players(&self) -> Vec<PlayerSummary>;

    /// The decision the engine is currently waiting on.
    fn state(&self) -> GlobalState;

    /// The current step of the turn.
    fn step(&self) -> StepId;

    /// Objects in `zone`, in engine order.
    fn objects_in_zone(&self, zone: ZoneId) -> Result<Vec<EntitySummary>, EngineError>;

    /// Applies a player's decision. Fire-and-forget.
    fn do_action(&mut self, player: PlayerId, command: Command);

    /// Rendering data for a card definition.
    fn card_by_id(&self, card: CardId) -> Option<CardArt>;
}

impl<E: RulesEngine + ?Sized> RulesEngine for Box<E> {
    fn players(&self) -> Vec<PlayerSummary> {
        (**self).players()
    }

    fn state(&self) -> GlobalState {
        (**self).state()
    }

    fn step(&self) -> StepId {
        (**self).step()
    }

    fn objects_in_zone(&self, zone: ZoneId) -> Result<Vec<EntitySummary>, EngineError> {
        (**self).objects_in_zone(zone)
    }

    fn do_action(&mut self, player: PlayerId, command: Command) {
        (**self).do_action(player, command);
    }

    fn card_by_id(&self, card: CardId) -> Option<CardArt> {
        (**self).card_by_id(card)
    }
}
