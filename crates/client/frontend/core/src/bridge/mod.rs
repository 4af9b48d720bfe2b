//! Sole owner of the engine handle.
//!
//! Every read of engine truth goes through [`EngineBridge::snapshot`] and every
//! write through [`EngineBridge::submit`], which always refreshes afterwards.
//! The engine never reports whether a command was accepted, so the refreshed
//! snapshot is the only feedback there is.
mod snapshot;

pub use snapshot::{EngineSnapshot, RefreshScope};

use game_core::{CardArt, CardId, Command, PlayerId, RulesEngine};

use crate::config::{FrontendConfig, MessageConfig};
use crate::event::SnapshotObserver;
use crate::format::{format_command, format_state};
use crate::message::MessageLog;

/// Serializes access to one rules engine and publishes its snapshots.
pub struct EngineBridge<E> {
    engine: E,
    snapshot: EngineSnapshot,
    observers: Vec<Box<dyn SnapshotObserver>>,
    messages: MessageLog,
    message_config: MessageConfig,
    submitted: u64,
}

impl<E: RulesEngine> EngineBridge<E> {
    /// Takes ownership of `engine` and captures the first snapshot.
    pub fn new(engine: E, config: &FrontendConfig) -> Self {
        let snapshot = EngineSnapshot::capture(&engine, 1);
        tracing::debug!(
            revision = snapshot.revision,
            players = snapshot.players.len(),
            state = ?snapshot.state,
            "captured initial engine snapshot"
        );

        Self {
            engine,
            snapshot,
            observers: Vec::new(),
            messages: MessageLog::new(config.messages.capacity),
            message_config: config.messages.clone(),
            submitted: 0,
        }
    }

    /// The most recent snapshot.
    pub fn snapshot(&self) -> &EngineSnapshot {
        &self.snapshot
    }

    /// Forwards a command, then refreshes unconditionally.
    pub fn submit(&mut self, player: PlayerId, command: Command) -> RefreshScope {
        tracing::debug!(
            %player,
            command = command.kind(),
            revision = self.snapshot.revision,
            "submitting command"
        );
        if self.message_config.show_commands {
            let text = format_command(&self.snapshot.player_name(player), &command);
            self.messages.info(text, self.snapshot.revision);
        }

        self.engine.do_action(player, command);
        self.submitted += 1;
        self.refresh()
    }

    /// Re-queries the engine and replaces the snapshot wholesale.
    ///
    /// Also used when engine truth changed without a command from this
    /// bridge. Every subscribed observer is notified.
    pub fn refresh(&mut self) -> RefreshScope {
        let mut next = EngineSnapshot::capture(&self.engine, self.snapshot.revision + 1);
        next.continue_from(&self.snapshot);
        let scope = RefreshScope::between(&self.snapshot, &next);
        let was_over = self.snapshot.state.is_game_over();
        self.snapshot = next;

        tracing::debug!(
            revision = self.snapshot.revision,
            ?scope,
            "refreshed engine snapshot"
        );
        if scope.contains(RefreshScope::STATE) {
            self.record_transition(was_over);
        }

        for observer in &mut self.observers {
            observer.on_refresh(&self.snapshot, scope);
        }
        scope
    }

    pub fn subscribe(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Rendering data for a card definition. Not used for any decision.
    pub fn card_art(&self, card: CardId) -> Option<CardArt> {
        self.engine.card_by_id(card)
    }

    /// Number of commands forwarded to the engine so far.
    pub fn submitted_count(&self) -> u64 {
        self.submitted
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Records a warning against the current revision.
    pub(crate) fn warn(&mut self, text: impl Into<String>) {
        self.messages.warn(text, self.snapshot.revision);
    }

    fn record_transition(&mut self, was_over: bool) {
        let text = format_state(&self.snapshot.state, |id| self.snapshot.player_name(id));
        if self.snapshot.state.is_game_over() && !was_over {
            tracing::info!(revision = self.snapshot.revision, "game over: {text}");
        }
        if self.message_config.show_state_changes {
            self.messages.info(text, self.snapshot.revision);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use game_core::mock::{MockEngine, MockWorld};
    use game_core::{GlobalState, InputCategory};

    #[test]
    fn submit_refreshes_even_when_the_engine_ignores_the_command() {
        let engine = MockEngine::new(MockWorld::two_player());
        let handle = engine.handle();
        let mut bridge = EngineBridge::new(engine, &FrontendConfig::default());

        let scope = bridge.submit(PlayerId(1), Command::PassPriority);

        assert!(scope.is_empty());
        assert_eq!(bridge.snapshot().revision, 2);
        assert_eq!(bridge.submitted_count(), 1);
        assert_eq!(handle.submitted(), vec![(PlayerId(1), Command::PassPriority)]);
    }

    #[test]
    fn observers_see_every_refresh() {
        let engine = MockEngine::new(MockWorld::two_player()).with_reactor(|world, _, _| {
            world.state = GlobalState::awaiting(PlayerId(1), InputCategory::Priority);
        });
        let mut bridge = EngineBridge::new(engine, &FrontendConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bridge.subscribe(move |snapshot: &EngineSnapshot, scope: RefreshScope| {
            sink.borrow_mut().push((snapshot.revision, scope));
        });

        bridge.submit(PlayerId(0), Command::PassPriority);
        bridge.refresh();

        assert_eq!(
            *seen.borrow(),
            vec![(2, RefreshScope::STATE), (3, RefreshScope::empty())]
        );
    }

    #[test]
    fn solicitation_start_survives_unchanged_refreshes() {
        let engine = MockEngine::new(MockWorld::two_player());
        let handle = engine.handle();
        let mut bridge = EngineBridge::new(engine, &FrontendConfig::default());

        bridge.refresh();
        assert_eq!(bridge.snapshot().solicited_since, 1);

        handle.update(|world| {
            world.state = GlobalState::awaiting(PlayerId(1), InputCategory::Priority);
        });
        bridge.refresh();
        handle.update(|world| {
            world.state = GlobalState::awaiting(PlayerId(0), InputCategory::Priority);
        });
        bridge.refresh();

        assert_eq!(bridge.snapshot().revision, 4);
        assert_eq!(bridge.snapshot().solicited_since, 4);
    }

    #[test]
    fn messages_record_commands_and_transitions() {
        let engine = MockEngine::new(MockWorld::two_player()).with_reactor(|world, _, _| {
            world.state = GlobalState::GameOver {
                winner: Some(PlayerId(1)),
            };
        });
        let mut bridge = EngineBridge::new(engine, &FrontendConfig::default());

        bridge.submit(PlayerId(0), Command::Concede);

        let texts: Vec<_> = bridge.messages().iter().map(|m| m.text.clone()).collect();
        assert_eq!(texts, ["Player 1 concedes", "Player 2 wins"]);
    }
}
