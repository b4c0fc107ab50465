use crate::render::Frame;

/// A fixed-height window over a rendered frame.
/// Owned by the caller and carried across frames; renders against the same
/// viewport must not overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line.
    pub y_offset: usize,
    /// Number of visible lines.
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            y_offset: 0,
            height,
        }
    }

    /// Scroll the minimum amount needed to show `focused_line`.
    ///
    /// A line above the window becomes the top line; a line at or below the
    /// bottom edge becomes the bottom line. Nothing happens without a focused
    /// line or with a zero height. Returns true if the offset changed.
    pub fn position(&mut self, focused_line: Option<usize>) -> bool {
        let Some(line) = focused_line else {
            return false;
        };
        if self.height == 0 {
            return false;
        }

        let old = self.y_offset;

        if line < self.y_offset {
            self.y_offset = line;
        } else if line >= self.y_offset.saturating_add(self.height) {
            self.y_offset = (line + 1).saturating_sub(self.height);
        }

        if self.y_offset != old {
            log::trace!("viewport scrolled {} -> {}", old, self.y_offset);
            true
        } else {
            false
        }
    }

    /// Keep the offset inside content of `total_lines` lines.
    ///
    /// An offset past the last line jumps to the bottom of the content.
    pub fn clamp(&mut self, total_lines: usize) {
        if self.y_offset > total_lines.saturating_sub(1) {
            self.y_offset = total_lines.saturating_sub(self.height);
        }
    }

    /// Clamp to a new frame, then position on its focused line.
    pub fn follow(&mut self, frame: &Frame) -> bool {
        let old = self.y_offset;
        self.clamp(frame.lines);
        self.position(frame.focused_line);
        self.y_offset != old
    }

    /// Range of line indices currently shown, bounded by `total_lines`.
    pub fn visible_range(&self, total_lines: usize) -> std::ops::Range<usize> {
        let top = self.y_offset.min(total_lines);
        let bottom = self.y_offset.saturating_add(self.height).clamp(top, total_lines);
        top..bottom
    }

    /// The visible lines of `content`, padded with empty lines to `height`.
    pub fn view(&self, content: &str) -> String {
        let lines: Vec<&str> = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').collect()
        };

        let range = self.visible_range(lines.len());
        let mut shown = lines[range].to_vec();
        if shown.len() < self.height {
            shown.resize(self.height, "");
        }
        shown.join("\n")
    }
}

/// Return `state` scrolled so `focused_line` is visible.
pub fn position_viewport(mut state: Viewport, focused_line: Option<usize>) -> Viewport {
    state.position(focused_line);
    state
}
