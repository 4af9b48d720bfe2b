//! Wire shapes of [`GlobalState`].
//!
//! Engine builds have reported the awaited decision in three layouts:
//!
//! | shape | example |
//! |-------|---------|
//! | nested | `{"type":"Player","player":0,"action":"ChooseAttackers"}` |
//! | flattened priority | `{"type":"Priority","player":0}` |
//! | flattened input | `{"type":"NeedInput","player":0,"input":"ChooseBlockers"}` |
//!
//! All of them collapse onto [`GlobalState::AwaitingInput`]. The canonical
//! layout, and the only one ever written, is
//! `{"type":"AwaitingInput","player":0,"category":"Priority"}`.
use serde::{Deserialize, Serialize};

use super::{GlobalState, InputCategory};
use crate::ids::PlayerId;

/// Every accepted serialized layout of [`GlobalState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireGlobalState {
    AwaitingInput {
        player: PlayerId,
        category: InputCategory,
    },
    Player {
        player: PlayerId,
        action: InputCategory,
    },
    Priority {
        player: PlayerId,
    },
    NeedInput {
        player: PlayerId,
        input: InputCategory,
    },
    #[serde(alias = "Complete")]
    GameOver {
        #[serde(default)]
        winner: Option<PlayerId>,
    },
}

impl From<WireGlobalState> for GlobalState {
    fn from(wire: WireGlobalState) -> Self {
        match wire {
            WireGlobalState::AwaitingInput { player, category }
            | WireGlobalState::Player {
                player,
                action: category,
            }
            | WireGlobalState::NeedInput {
                player,
                input: category,
            } => GlobalState::AwaitingInput { player, category },
            WireGlobalState::Priority { player } => GlobalState::AwaitingInput {
                player,
                category: InputCategory::Priority,
            },
            WireGlobalState::GameOver { winner } => GlobalState::GameOver { winner },
        }
    }
}

impl From<GlobalState> for WireGlobalState {
    fn from(state: GlobalState) -> Self {
        match state {
            GlobalState::AwaitingInput { player, category } => {
                WireGlobalState::AwaitingInput { player, category }
            }
            GlobalState::GameOver { winner } => WireGlobalState::GameOver { winner },
        }
    }
}
