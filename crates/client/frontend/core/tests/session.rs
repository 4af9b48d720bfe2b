use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;
use client_frontend_core::{
    Frontend, FrontendConfig, Gesture, InteractionSession, RefreshScope, RenderModel,
};
use game_core::mock::{MockEngine, MockWorld};
use game_core::{
    Command, EntityId, EntitySummary, GlobalState, InputCategory, PlayerId, StepId, TypeTags,
    ZoneId,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<RenderModel>,
}

impl Frontend for Recorder {
    fn present(&mut self, model: &RenderModel) -> anyhow::Result<()> {
        self.frames.push(model.clone());
        Ok(())
    }
}

struct Broken;

impl Frontend for Broken {
    fn present(&mut self, _: &RenderModel) -> anyhow::Result<()> {
        bail!("display lost")
    }
}

/// Priority passes around the table; two passes in a row advance the step,
/// and combat solicits attackers from the active player.
fn turn_engine() -> MockEngine {
    let passes = Rc::new(RefCell::new(0));
    MockEngine::new(MockWorld::two_player()).with_reactor(move |world, player, command| {
        match command {
            Command::PassPriority => {
                *passes.borrow_mut() += 1;
                let other = PlayerId(1 - player.0);
                if *passes.borrow() % 2 == 0 {
                    world.step = StepId::DeclareAttackers;
                    world.state = GlobalState::awaiting(PlayerId(0), InputCategory::ChooseAttackers);
                } else {
                    world.state = GlobalState::awaiting(other, InputCategory::Priority);
                }
            }
            Command::ChooseAttackers { .. } => {
                world.state = GlobalState::awaiting(PlayerId(1), InputCategory::ChooseBlockers);
            }
            _ => {}
        }
    })
}

#[test]
fn every_dispatch_presents_a_fresh_frame() {
    let mut session = InteractionSession::new(turn_engine(), FrontendConfig::default());
    let mut frontend = Recorder::default();

    let passed = session
        .dispatch_and_present(Gesture::PassPriority { player: PlayerId(0) }, &mut frontend)
        .expect("recorder never fails");
    let rejected = session
        .dispatch_and_present(Gesture::PassPriority { player: PlayerId(0) }, &mut frontend)
        .expect("recorder never fails");

    assert!(passed.is_some());
    assert!(rejected.is_none());
    assert_eq!(frontend.frames.len(), 2);
    assert_eq!(frontend.frames[0].revision, 2);
    assert_eq!(frontend.frames[0].banner.soliciting, Some(PlayerId(1)));
    assert_eq!(frontend.frames[1], frontend.frames[0]);
}

#[test]
fn step_tracker_follows_the_engine() {
    let mut session = InteractionSession::new(turn_engine(), FrontendConfig::default());
    assert_eq!(session.render().steps.current, StepId::Main1);

    session
        .dispatch(Gesture::PassPriority { player: PlayerId(0) })
        .expect("P0 holds priority");
    session
        .dispatch(Gesture::PassPriority { player: PlayerId(1) })
        .expect("P1 holds priority");

    let model = session.render();
    assert_eq!(model.steps.current, StepId::DeclareAttackers);
    assert_eq!(model.steps.caption, "Combat: Attackers");
    assert_eq!(model.banner.category, Some(InputCategory::ChooseAttackers));
    assert_eq!(model.banner.text, "Player 1: Declare attackers");
}

#[test]
fn external_changes_show_after_refresh() {
    let engine = MockEngine::new(MockWorld::two_player());
    let handle = engine.handle();
    let mut session = InteractionSession::new(engine, FrontendConfig::default());
    let mut frontend = Recorder::default();

    handle.update(|world| {
        world.put(
            ZoneId::Library(PlayerId(1)),
            EntitySummary::new(EntityId(50), PlayerId(1), TypeTags::CREATURE),
        );
    });
    assert_eq!(session.render().players[1].library_count, 0);

    let scope = session
        .refresh_and_present(&mut frontend)
        .expect("recorder never fails");

    assert_eq!(scope, RefreshScope::ZONES);
    assert_eq!(frontend.frames[0].players[1].library_count, 1);
}

#[test]
fn presentation_failures_carry_the_revision() {
    let mut session = InteractionSession::new(turn_engine(), FrontendConfig::default());

    let error = session
        .dispatch_and_present(Gesture::PassPriority { player: PlayerId(0) }, &mut Broken)
        .expect_err("frontend always fails");

    assert_eq!(error.to_string(), "failed to present revision 2");
    assert_eq!(error.root_cause().to_string(), "display lost");
    assert_eq!(session.bridge().submitted_count(), 1);
}

#[test]
fn command_messages_can_be_silenced() {
    let mut config = FrontendConfig::default();
    config.messages.show_commands = false;
    let mut session = InteractionSession::new(turn_engine(), config);

    session
        .dispatch(Gesture::PassPriority { player: PlayerId(0) })
        .expect("P0 holds priority");

    let texts: Vec<_> = session
        .bridge()
        .messages()
        .iter()
        .map(|entry| entry.text.as_str())
        .collect();
    assert_eq!(texts, ["Player 2: Priority"]);
}
