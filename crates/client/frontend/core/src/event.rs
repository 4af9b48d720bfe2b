//! Hooks for reacting to snapshot replacement.
use crate::bridge::{EngineSnapshot, RefreshScope};

/// Receives every new snapshot right after the bridge installs it.
///
/// Observers are notified after each refresh, including refreshes where
/// nothing changed (`scope` is then empty).
pub trait SnapshotObserver {
    fn on_refresh(&mut self, snapshot: &EngineSnapshot, scope: RefreshScope);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(&EngineSnapshot, RefreshScope),
{
    fn on_refresh(&mut self, snapshot: &EngineSnapshot, scope: RefreshScope) {
        self(snapshot, scope);
    }
}
