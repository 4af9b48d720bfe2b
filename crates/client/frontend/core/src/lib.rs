//! Client-side interaction layer for the card game.
//!
//! Keeps the rendered view a pure projection of {engine snapshot, pending
//! intent}. Gestures flow one way: [`InteractionRouter`] checks them against
//! the engine's solicited input, stages selections in the [`IntentSession`]
//! or builds one command for the [`EngineBridge`], and [`project`] re-derives
//! the [`RenderModel`] from the refreshed snapshot.
pub mod bridge;
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod intent;
pub mod message;
pub mod router;
pub mod session;
pub mod view_model;
pub mod zones;

pub use bridge::{EngineBridge, EngineSnapshot, RefreshScope};
pub use config::{FrontendConfig, LayoutConfig, MessageConfig};
pub use event::SnapshotObserver;
pub use frontend::Frontend;
pub use intent::{IntentSession, PendingIntent, Revalidated, SessionKey};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use router::{Dispatch, Gesture, InteractionRouter, Rejection, affordances, is_offered};
pub use session::InteractionSession;
pub use view_model::{
    ActionButton, CardView, ManaView, Nudge, PlayerView, RenderModel, Seat, Slot, StackView,
    StateBanner, StepTrack, project,
};
pub use zones::{BattlefieldRows, ZoneDescriptor, query_zone};
