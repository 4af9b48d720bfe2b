//! Trait describing a presentation layer.
use anyhow::Result;

use crate::view_model::RenderModel;

/// Presentation collaborator that draws render models.
///
/// Frontends never build commands themselves: every interactive element in a
/// [`RenderModel`] already carries the [`Gesture`](crate::Gesture) to hand
/// back to the session.
///
/// # Example Implementation
///
/// ```
/// use anyhow::Result;
/// use client_frontend_core::{Frontend, RenderModel};
///
/// struct Headline(String);
///
/// impl Frontend for Headline {
///     fn present(&mut self, model: &RenderModel) -> Result<()> {
///         self.0 = model.banner.text.clone();
///         Ok(())
///     }
/// }
/// ```
pub trait Frontend {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot render; the session state is
    /// unaffected.
    fn present(&mut self, model: &RenderModel) -> Result<()>;
}
