//! Interaction router: the client-side state machine.
//!
//! The router never transitions on its own. Before handling any gesture it
//! re-keys the intent session against the engine's current [`GlobalState`],
//! then checks the gesture against the solicited player and category. A
//! gesture either stages a selection, builds exactly one command for the
//! bridge, or is rejected without touching anything.
//!
//! [`GlobalState`]: game_core::GlobalState

use game_core::{
    Command, EntityId, ErrorSeverity, GameError, InputCategory, ManaIndex, PlayerId, RulesEngine,
    SpellCastingHandle,
};

use crate::bridge::{EngineBridge, EngineSnapshot, RefreshScope};
use crate::intent::{IntentSession, SessionKey};

/// A user gesture, pre-bound by the projection to one interactive element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum Gesture {
    /// Select or deselect a creature as attacker or blocker.
    ToggleCombatant(EntityId),
    /// Submit the current attacker or blocker selection.
    ConfirmCombat { player: PlayerId },
    /// Play a land or begin casting a spell from hand.
    PlayFromHand { player: PlayerId, card: EntityId },
    /// Spend one mana symbol on the player's incomplete spell.
    TapMana { player: PlayerId, index: ManaIndex },
    PassPriority { player: PlayerId },
    FinishSpell { player: PlayerId },
    CancelSpell { player: PlayerId },
    Concede { player: PlayerId },
}

impl Gesture {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// What a routed gesture did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A pending selection changed; nothing was sent to the engine.
    Staged { entity: EntityId, selected: bool },
    /// One command was forwarded and the snapshot refreshed.
    Submitted {
        player: PlayerId,
        command: Command,
        scope: RefreshScope,
    },
}

/// Reasons a gesture was a no-op.
///
/// None of these are failures: they are expected whenever a gesture races a
/// state change, and the next render reflects reality either way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("player {player} is not in this game")]
    UnknownPlayer { player: PlayerId },

    #[error("the engine is not waiting on {player}")]
    NotSoliciting { player: PlayerId },

    #[error("{gesture} is not accepted while the engine wants {active}")]
    CategoryMismatch {
        gesture: &'static str,
        active: InputCategory,
    },

    #[error("{entity} cannot be declared by {player}")]
    NotEligible { entity: EntityId, player: PlayerId },

    #[error("{player} has no spell awaiting payment")]
    NoIncompleteSpell { player: PlayerId },

    #[error("no mana has been committed to {spell}")]
    NoCommittedMana { spell: EntityId },

    #[error("{card} is not in the hand of {player}")]
    NotInHand { player: PlayerId, card: EntityId },

    #[error("{player} has no mana at index {index}")]
    UnknownMana { player: PlayerId, index: ManaIndex },

    #[error("mana {index} is already committed to {spell}")]
    ManaCommitted { spell: EntityId, index: ManaIndex },
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPlayer { .. } | Self::UnknownMana { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver => "GAME_OVER",
            Self::UnknownPlayer { .. } => "UNKNOWN_PLAYER",
            Self::NotSoliciting { .. } => "NOT_SOLICITING",
            Self::CategoryMismatch { .. } => "CATEGORY_MISMATCH",
            Self::NotEligible { .. } => "NOT_ELIGIBLE",
            Self::NoIncompleteSpell { .. } => "NO_INCOMPLETE_SPELL",
            Self::NoCommittedMana { .. } => "NO_COMMITTED_MANA",
            Self::NotInHand { .. } => "NOT_IN_HAND",
            Self::UnknownMana { .. } => "UNKNOWN_MANA",
            Self::ManaCommitted { .. } => "MANA_COMMITTED",
        }
    }
}

/// Outcome of checking a gesture against a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Plan {
    Stage { entity: EntityId, player: PlayerId },
    Confirm(SessionKey),
    Submit(PlayerId, Command),
}

/// Routes gestures into pending-intent changes or engine commands.
#[derive(Clone, Debug, Default)]
pub struct InteractionRouter {
    session: IntentSession,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &IntentSession {
        &self.session
    }

    /// Re-keys pending intent against a freshly installed snapshot.
    pub fn observe(&mut self, snapshot: &EngineSnapshot) -> bool {
        self.session.observe(snapshot)
    }

    /// Handles one gesture against the bridge's current snapshot.
    pub fn route<E: RulesEngine>(
        &mut self,
        bridge: &mut EngineBridge<E>,
        gesture: Gesture,
    ) -> Result<Dispatch, Rejection> {
        self.session.observe(bridge.snapshot());

        let plan = plan(bridge.snapshot(), gesture).inspect_err(|rejection| {
            tracing::trace!(
                gesture = gesture.kind(),
                code = rejection.error_code(),
                "gesture rejected: {rejection}"
            );
        })?;

        let (player, command) = match plan {
            Plan::Stage { entity, player } => {
                let selected = self
                    .session
                    .toggle(entity)
                    .ok_or(Rejection::NotEligible { entity, player })?;
                tracing::trace!(%entity, selected, "pending selection toggled");
                return Ok(Dispatch::Staged { entity, selected });
            }
            Plan::Confirm(key) => (key.player, self.confirm(bridge, key)),
            Plan::Submit(player, command) => {
                if command == Command::Concede {
                    self.session.clear();
                }
                (player, command)
            }
        };

        let scope = bridge.submit(player, command.clone());
        self.session.observe(bridge.snapshot());
        Ok(Dispatch::Submitted {
            player,
            command,
            scope,
        })
    }

    /// Drains and revalidates the selection, dropping stale ids.
    fn confirm<E: RulesEngine>(&mut self, bridge: &mut EngineBridge<E>, key: SessionKey) -> Command {
        let drained = match key.category {
            InputCategory::ChooseBlockers => self.session.take_blockers(bridge.snapshot()),
            _ => self.session.take_attackers(bridge.snapshot()),
        };

        if !drained.stale.is_empty() {
            let stale = drained
                .stale
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                player = %key.player,
                category = %key.category,
                %stale,
                "dropping selections that are no longer eligible"
            );
            bridge.warn(format!("No longer eligible: {stale}"));
        }

        match key.category {
            InputCategory::ChooseBlockers => Command::ChooseBlockers {
                blockers: drained.kept,
            },
            _ => Command::ChooseAttackers {
                attackers: drained.kept,
            },
        }
    }
}

/// Whether routing `gesture` against `snapshot` would do something.
///
/// The projection binds a gesture to an element only when this holds, so an
/// element is interactive exactly when its gesture would not be rejected.
pub fn is_offered(snapshot: &EngineSnapshot, gesture: Gesture) -> bool {
    plan(snapshot, gesture).is_ok()
}

/// Player-level gestures currently available to `player`, in button order.
pub fn affordances(snapshot: &EngineSnapshot, player: PlayerId) -> Vec<Gesture> {
    [
        Gesture::PassPriority { player },
        Gesture::ConfirmCombat { player },
        Gesture::FinishSpell { player },
        Gesture::CancelSpell { player },
        Gesture::Concede { player },
    ]
    .into_iter()
    .filter(|gesture| is_offered(snapshot, *gesture))
    .collect()
}

fn plan(snapshot: &EngineSnapshot, gesture: Gesture) -> Result<Plan, Rejection> {
    let Some((active, category)) = snapshot.soliciting() else {
        return Err(Rejection::GameOver);
    };
    let accept = |accepted: bool| {
        if accepted {
            Ok(())
        } else {
            Err(Rejection::CategoryMismatch {
                gesture: gesture.kind(),
                active: category,
            })
        }
    };
    let solicited = |player: PlayerId| {
        if player == active {
            Ok(())
        } else {
            Err(Rejection::NotSoliciting { player })
        }
    };

    match gesture {
        Gesture::Concede { player } => {
            snapshot
                .player(player)
                .ok_or(Rejection::UnknownPlayer { player })?;
            Ok(Plan::Submit(player, Command::Concede))
        }
        Gesture::ToggleCombatant(entity) => {
            accept(category.is_batched())?;
            if !snapshot.is_combat_eligible(entity, active) {
                return Err(Rejection::NotEligible {
                    entity,
                    player: active,
                });
            }
            Ok(Plan::Stage {
                entity,
                player: active,
            })
        }
        Gesture::ConfirmCombat { player } => {
            solicited(player)?;
            accept(category.is_batched())?;
            Ok(Plan::Confirm(SessionKey { player, category }))
        }
        Gesture::PlayFromHand { player, card } => {
            solicited(player)?;
            accept(category == InputCategory::Priority)?;
            let object = snapshot
                .hand_card(player, card)
                .ok_or(Rejection::NotInHand { player, card })?;
            let command = if object.types.is_land() {
                Command::PlayLand { card }
            } else {
                Command::StartCastingSpell { spell: card }
            };
            Ok(Plan::Submit(player, command))
        }
        Gesture::TapMana { player, index } => {
            solicited(player)?;
            accept(matches!(
                category,
                InputCategory::Priority | InputCategory::PayIncompleteSpellMana
            ))?;
            let (spell, casting) = incomplete_spell(snapshot, player)?;
            let pool_size = snapshot.player(player).map_or(0, |p| p.mana_pool.len());
            if index.0 as usize >= pool_size {
                return Err(Rejection::UnknownMana { player, index });
            }
            if casting.mana_paid.contains(&index) {
                return Err(Rejection::ManaCommitted { spell, index });
            }
            Ok(Plan::Submit(
                player,
                Command::PayIncompleteSpellMana {
                    spell,
                    mana_index: index,
                },
            ))
        }
        Gesture::PassPriority { player } => {
            solicited(player)?;
            accept(category == InputCategory::Priority)?;
            Ok(Plan::Submit(player, Command::PassPriority))
        }
        Gesture::FinishSpell { player } => {
            solicited(player)?;
            accept(category.allows_spell_payment())?;
            let (spell, casting) = incomplete_spell(snapshot, player)?;
            if !casting.has_committed_mana() {
                return Err(Rejection::NoCommittedMana { spell });
            }
            Ok(Plan::Submit(player, Command::FinishCastingSpell { spell }))
        }
        Gesture::CancelSpell { player } => {
            solicited(player)?;
            accept(category.allows_spell_payment())?;
            let (spell, _) = incomplete_spell(snapshot, player)?;
            Ok(Plan::Submit(player, Command::CancelCastingSpell { spell }))
        }
    }
}

/// The player's incomplete spell and its casting progress.
fn incomplete_spell(
    snapshot: &EngineSnapshot,
    player: PlayerId,
) -> Result<(EntityId, &SpellCastingHandle), Rejection> {
    snapshot
        .stack_spell_of(player)
        .and_then(|object| Some((object.entity, object.incomplete_spell.as_ref()?)))
        .ok_or(Rejection::NoIncompleteSpell { player })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;
    use game_core::mock::{MockEngine, MockHandle, MockWorld};
    use game_core::{EntitySummary, GlobalState, ManaColor, ManaSymbol, TypeTags, ZoneId};

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn bridge(world: MockWorld) -> (EngineBridge<MockEngine>, MockHandle) {
        let engine = MockEngine::new(world);
        let handle = engine.handle();
        (EngineBridge::new(engine, &FrontendConfig::default()), handle)
    }

    fn priority_with_spell(handle: SpellCastingHandle) -> MockWorld {
        let mut world = MockWorld::two_player();
        world.players[0] = world.players[0].clone().with_mana([
            ManaSymbol::new(ManaColor::Red),
            ManaSymbol::new(ManaColor::Red),
            ManaSymbol::new(ManaColor::Green),
        ]);
        world.put(
            ZoneId::Stack,
            EntitySummary::new(EntityId(30), P0, TypeTags::SORCERY)
                .controlled_by(P0)
                .casting(handle),
        );
        world
    }

    #[test]
    fn concede_is_accepted_outside_the_solicited_player() {
        let (bridge, _) = bridge(MockWorld::two_player());
        assert!(is_offered(bridge.snapshot(), Gesture::Concede { player: P1 }));
        assert!(!is_offered(
            bridge.snapshot(),
            Gesture::Concede {
                player: PlayerId(4)
            }
        ));
    }

    #[test]
    fn nothing_is_offered_after_game_over() {
        let mut world = MockWorld::two_player();
        world.state = GlobalState::GameOver { winner: Some(P1) };
        let (bridge, _) = bridge(world);

        assert_eq!(
            plan(bridge.snapshot(), Gesture::Concede { player: P0 }),
            Err(Rejection::GameOver)
        );
        assert!(affordances(bridge.snapshot(), P0).is_empty());
    }

    #[test]
    fn hand_cards_become_land_or_spell_commands() {
        let mut world = MockWorld::two_player();
        world.put(
            ZoneId::Hand(P0),
            EntitySummary::new(EntityId(1), P0, TypeTags::LAND),
        );
        world.put(
            ZoneId::Hand(P0),
            EntitySummary::new(EntityId(2), P0, TypeTags::CREATURE),
        );
        let (bridge, _) = bridge(world);

        let land = plan(
            bridge.snapshot(),
            Gesture::PlayFromHand {
                player: P0,
                card: EntityId(1),
            },
        );
        let spell = plan(
            bridge.snapshot(),
            Gesture::PlayFromHand {
                player: P0,
                card: EntityId(2),
            },
        );
        assert_eq!(
            land,
            Ok(Plan::Submit(P0, Command::PlayLand { card: EntityId(1) }))
        );
        assert_eq!(
            spell,
            Ok(Plan::Submit(
                P0,
                Command::StartCastingSpell { spell: EntityId(2) }
            ))
        );
    }

    #[test]
    fn opponent_cannot_play_from_hand() {
        let mut world = MockWorld::two_player();
        world.put(
            ZoneId::Hand(P1),
            EntitySummary::new(EntityId(1), P1, TypeTags::LAND),
        );
        let (bridge, _) = bridge(world);

        assert_eq!(
            plan(
                bridge.snapshot(),
                Gesture::PlayFromHand {
                    player: P1,
                    card: EntityId(1)
                }
            ),
            Err(Rejection::NotSoliciting { player: P1 })
        );
    }

    #[test]
    fn tap_mana_without_a_spell_is_a_no_op() {
        let (mut bridge, handle) = bridge(MockWorld::two_player());
        let mut router = InteractionRouter::new();

        let result = router.route(
            &mut bridge,
            Gesture::TapMana {
                player: P0,
                index: ManaIndex(0),
            },
        );

        assert_eq!(result, Err(Rejection::NoIncompleteSpell { player: P0 }));
        assert!(handle.submitted().is_empty());
    }

    #[test]
    fn committed_or_missing_mana_is_rejected() {
        let mut casting = SpellCastingHandle::new(2);
        casting.mana_paid.push(ManaIndex(1));
        let (bridge, _) = bridge(priority_with_spell(casting));

        assert_eq!(
            plan(
                bridge.snapshot(),
                Gesture::TapMana {
                    player: P0,
                    index: ManaIndex(1)
                }
            ),
            Err(Rejection::ManaCommitted {
                spell: EntityId(30),
                index: ManaIndex(1)
            })
        );
        assert_eq!(
            plan(
                bridge.snapshot(),
                Gesture::TapMana {
                    player: P0,
                    index: ManaIndex(3)
                }
            ),
            Err(Rejection::UnknownMana {
                player: P0,
                index: ManaIndex(3)
            })
        );
    }

    #[test]
    fn finishing_requires_committed_mana() {
        let (bridge, _) = bridge(priority_with_spell(SpellCastingHandle::new(2)));

        assert_eq!(
            plan(bridge.snapshot(), Gesture::FinishSpell { player: P0 }),
            Err(Rejection::NoCommittedMana {
                spell: EntityId(30)
            })
        );
        assert_eq!(
            affordances(bridge.snapshot(), P0),
            vec![
                Gesture::PassPriority { player: P0 },
                Gesture::CancelSpell { player: P0 },
                Gesture::Concede { player: P0 },
            ]
        );
    }

    #[test]
    fn rejections_are_classified() {
        let rejection = Rejection::CategoryMismatch {
            gesture: Gesture::PassPriority { player: P0 }.kind(),
            active: InputCategory::ChooseBlockers,
        };
        assert_eq!(rejection.severity(), ErrorSeverity::Recoverable);
        assert_eq!(rejection.error_code(), "CATEGORY_MISMATCH");
        assert_eq!(
            rejection.to_string(),
            "PassPriority is not accepted while the engine wants ChooseBlockers"
        );
    }
}
