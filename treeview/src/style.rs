use crossterm::style::{Attribute, ContentStyle};

pub use crossterm::style::Color;

/// Text style applied to a whole rendered line.
///
/// A default style renders text unchanged; anything else wraps the text in
/// ANSI SGR sequences and resets afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    inner: ContentStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.inner.foreground_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.inner.background_color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.inner.attributes.set(Attribute::Bold);
        self
    }

    pub fn italic(mut self) -> Self {
        self.inner.attributes.set(Attribute::Italic);
        self
    }

    pub fn underline(mut self) -> Self {
        self.inner.attributes.set(Attribute::Underlined);
        self
    }

    pub fn dim(mut self) -> Self {
        self.inner.attributes.set(Attribute::Dim);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.inner.attributes.set(Attribute::Reverse);
        self
    }

    pub fn is_plain(&self) -> bool {
        self.inner == ContentStyle::default()
    }

    /// Apply this style to `text`.
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        self.inner.apply(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_leaves_text_alone() {
        assert_eq!(Style::new().render("├── 📁 src"), "├── 📁 src");
    }

    #[test]
    fn test_styled_text_is_wrapped() {
        let out = Style::new().bold().foreground(Color::Cyan).render("node");
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("node"));
        assert!(out.ends_with('m'));
        assert_ne!(out, "node");
    }
}
