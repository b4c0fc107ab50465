//! Render configuration

use crate::prefix::Glyphs;
use crate::text::DEFAULT_ICON_WIDTH;

/// Options controlling how lines are laid out.
///
/// # Example
///
/// ```
/// use treeview::{Glyphs, RenderOptions};
///
/// let options = RenderOptions::default()
///     .with_icon_width(2)
///     .with_glyphs(Glyphs::ASCII);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Terminal columns every icon is padded to.
    ///
    /// Default: 3
    pub icon_width: usize,

    /// Branch glyphs used for prefixes.
    ///
    /// Default: Unicode box drawing
    pub glyphs: Glyphs,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            icon_width: DEFAULT_ICON_WIDTH,
            glyphs: Glyphs::UNICODE,
        }
    }
}

impl RenderOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon column width.
    pub fn with_icon_width(mut self, width: usize) -> Self {
        self.icon_width = width;
        self
    }

    /// Sets the branch glyphs.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Options using plain ASCII branches, for terminals without box drawing.
    pub fn ascii() -> Self {
        Self::default().with_glyphs(Glyphs::ASCII)
    }
}
