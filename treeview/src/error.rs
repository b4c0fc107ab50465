//! Error types

use std::error::Error;

use crate::render::Frame;

/// Why a frame stopped before the traversal was exhausted.
#[derive(Debug, thiserror::Error)]
pub enum RenderError<E: Error + 'static> {
    /// The cancellation token was observed cancelled between lines.
    #[error("render cancelled")]
    Cancelled,

    /// The traversal source yielded an error. Carried as-is.
    #[error(transparent)]
    Traversal(E),
}

impl<E: Error + 'static> RenderError<E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A frame cut short, with everything rendered up to that point.
///
/// Terminal UIs can still show `frame` rather than nothing.
#[derive(Debug, thiserror::Error)]
#[error("render interrupted after {} lines", .frame.lines)]
pub struct Interrupted<E: Error + 'static> {
    /// Lines rendered before the interruption.
    pub frame: Frame,
    /// What interrupted the frame.
    #[source]
    pub cause: RenderError<E>,
}

/// An interrupted [`Tree::render_with_viewport`](crate::Tree::render_with_viewport),
/// with the viewport slice of the partial frame ready to display.
#[derive(Debug, thiserror::Error)]
#[error("render interrupted, showing partial view")]
pub struct PartialView {
    /// Visible lines of the partial frame, padded to the viewport height.
    pub view: String,
    #[source]
    pub interrupted: Interrupted<TraversalError>,
}

/// Errors produced by the bundled [`Tree`](crate::Tree) traversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// The token was cancelled before the next node was produced.
    #[error("traversal cancelled")]
    Cancelled,
}
