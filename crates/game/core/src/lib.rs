//! Contract of the external rules engine.
//!
//! `game-core` defines the vocabulary the client uses to talk to the engine:
//! identifiers, zones, player and object summaries, the discriminated
//! [`GlobalState`], and the [`Command`] union. The engine itself lives behind
//! the [`RulesEngine`] trait and is treated as an opaque, synchronous box.
pub mod card;
pub mod command;
pub mod engine;
pub mod error;
pub mod ids;
#[cfg(feature = "mock")]
pub mod mock;
pub mod state;
pub mod step;
pub mod summary;
pub mod zone;

pub use card::{CardArt, CardType, ManaColor, ManaSymbol, TypeTags};
pub use command::Command;
pub use engine::RulesEngine;
pub use error::{EngineError, ErrorSeverity, GameError};
pub use ids::{CardId, EntityId, ManaIndex, PlayerId};
pub use state::{GlobalState, InputCategory};
pub use step::{Phase, StepId};
pub use summary::{EntitySummary, PermanentState, PlayerSummary, SpellCastingHandle};
pub use zone::{GlobalZone, PlayerZone, ZoneId};
