//! One local interaction session: bridge, router, and configuration.

use anyhow::Context;
use game_core::RulesEngine;

use crate::bridge::{EngineBridge, EngineSnapshot, RefreshScope};
use crate::config::FrontendConfig;
use crate::frontend::Frontend;
use crate::router::{Dispatch, Gesture, InteractionRouter, Rejection};
use crate::view_model::{RenderModel, project};

/// Runs the gesture → router → bridge → projection pipeline.
///
/// Every participant shares this session; gestures are handled one at a time.
pub struct InteractionSession<E> {
    bridge: EngineBridge<E>,
    router: InteractionRouter,
    config: FrontendConfig,
}

impl<E: RulesEngine> InteractionSession<E> {
    pub fn new(engine: E, config: FrontendConfig) -> Self {
        Self {
            bridge: EngineBridge::new(engine, &config),
            router: InteractionRouter::new(),
            config,
        }
    }

    /// Session configured from process environment variables.
    pub fn from_env(engine: E) -> Self {
        Self::new(engine, FrontendConfig::from_env())
    }

    pub fn bridge(&self) -> &EngineBridge<E> {
        &self.bridge
    }


    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    pub fn snapshot(&self) -> &EngineSnapshot {
        self.bridge.snapshot()
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Derives the render model for the current snapshot and pending intent.
    pub fn render(&self) -> RenderModel {
        project(
            self.bridge.snapshot(),
            self.router.session(),
            &self.config.layout,
        )
    }

    pub fn dispatch(&mut self, gesture: Gesture) -> Result<Dispatch, Rejection> {
        self.router.route(&mut self.bridge, gesture)
    }

    /// Routes a gesture, then re-renders regardless of the outcome.
    ///
    /// Rejections are absorbed and yield `None`; only presentation failures
    /// are errors.
    pub fn dispatch_and_present(
        &mut self,
        gesture: Gesture,
        frontend: &mut dyn Frontend,
    ) -> anyhow::Result<Option<Dispatch>> {
        let dispatch = self.dispatch(gesture).ok();
        self.present(frontend)?;
        Ok(dispatch)
    }

    /// Re-queries the engine after it changed elsewhere.
    ///
    /// Pending intent is re-keyed against the new snapshot before anything
    /// can render it.
    pub fn refresh(&mut self) -> RefreshScope {
        let scope = self.bridge.refresh();
        self.router.observe(self.bridge.snapshot());
        scope
    }

    /// [`refresh`](Self::refresh), then re-renders.
    pub fn refresh_and_present(
        &mut self,
        frontend: &mut dyn Frontend,
    ) -> anyhow::Result<RefreshScope> {
        let scope = self.refresh();
        self.present(frontend)?;
        Ok(scope)
    }

    pub fn present(&self, frontend: &mut dyn Frontend) -> anyhow::Result<()> {
        let model = self.render();
        frontend
            .present(&model)
            .with_context(|| format!("failed to present revision {}", model.revision))
    }
}
