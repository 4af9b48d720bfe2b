//! Turn and solicitation views.

use arrayvec::ArrayVec;
use game_core::{GlobalState, InputCategory, Phase, PlayerId, StepId};
use strum::IntoEnumIterator;

use crate::bridge::EngineSnapshot;
use crate::format::{format_state, format_step};

/// No phase has more steps than combat.
pub const MAX_STEPS_PER_PHASE: usize = 5;

/// Headline describing what the engine is waiting on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateBanner {
    pub text: String,
    pub soliciting: Option<PlayerId>,
    pub category: Option<InputCategory>,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

impl StateBanner {
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        let text = format_state(&snapshot.state, |id| snapshot.player_name(id));
        let soliciting = snapshot.soliciting();
        let winner = match snapshot.state {
            GlobalState::GameOver { winner } => winner,
            GlobalState::AwaitingInput { .. } => None,
        };

        Self {
            text,
            soliciting: soliciting.map(|(player, _)| player),
            category: soliciting.map(|(_, category)| category),
            game_over: snapshot.state.is_game_over(),
            winner,
        }
    }
}

/// Step tracker grouped by phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepTrack {
    pub current: StepId,
    /// Current step with its phase, e.g. "Combat: Attackers".
    pub caption: String,
    pub phases: Vec<PhaseView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseView {
    pub phase: Phase,
    pub label: &'static str,
    pub active: bool,
    pub steps: ArrayVec<StepView, MAX_STEPS_PER_PHASE>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView {
    pub step: StepId,
    pub label: &'static str,
    pub active: bool,
}

impl StepTrack {
    pub fn new(current: StepId) -> Self {
        let phases = Phase::iter()
            .map(|phase| PhaseView {
                phase,
                label: phase.label(),
                active: current.phase() == phase,
                steps: phase
                    .steps()
                    .take(MAX_STEPS_PER_PHASE)
                    .map(|step| StepView {
                        step,
                        label: step.label(),
                        active: step == current,
                    })
                    .collect(),
            })
            .collect();

        Self {
            current,
            caption: format_step(current),
            phases,
        }
    }

    pub fn active_phase(&self) -> Option<&PhaseView> {
        self.phases.iter().find(|phase| phase.active)
    }
}
