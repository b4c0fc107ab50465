use crate::node::Node;
use crate::style::{Color, Style};

/// Supplies the per-node pieces of a rendered line.
///
/// Implementations must not depend on render state; the renderer may call
/// them in any order.
///
/// # Example
///
/// ```
/// use treeview::{Node, NodeProvider, Style};
///
/// struct Plain;
///
/// impl NodeProvider<Node<u64>> for Plain {
///     fn icon(&self, _node: &Node<u64>) -> String {
///         String::new()
///     }
///
///     fn format(&self, node: &Node<u64>) -> String {
///         format!("{} ({} bytes)", node.name(), node.data())
///     }
///
///     fn style(&self, _node: &Node<u64>, focused: bool) -> Style {
///         if focused { Style::new().reverse() } else { Style::new() }
///     }
/// }
/// ```
pub trait NodeProvider<N: ?Sized> {
    /// Icon drawn between the prefix and the label. Empty for none.
    fn icon(&self, node: &N) -> String;

    /// Human readable label.
    fn format(&self, node: &N) -> String;

    /// Style applied to the whole line.
    fn style(&self, node: &N, focused: bool) -> Style;
}

/// Provider for [`Node`]s: a branch icon for nodes with children, a leaf icon
/// otherwise, the node name as label.
#[derive(Debug, Clone)]
pub struct DefaultProvider {
    branch_icon: String,
    leaf_icon: String,
    focused_style: Style,
}

impl Default for DefaultProvider {
    fn default() -> Self {
        Self {
            branch_icon: "📁".to_string(),
            leaf_icon: "📄".to_string(),
            focused_style: Style::new().bold().foreground(Color::Black).background(Color::Cyan),
        }
    }
}

impl DefaultProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icons for nodes with and without children.
    pub fn with_icons(mut self, branch: impl Into<String>, leaf: impl Into<String>) -> Self {
        self.branch_icon = branch.into();
        self.leaf_icon = leaf.into();
        self
    }

    /// Drop icons entirely.
    pub fn without_icons(self) -> Self {
        self.with_icons("", "")
    }

    pub fn with_focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }
}

impl<T> NodeProvider<Node<T>> for DefaultProvider {
    fn icon(&self, node: &Node<T>) -> String {
        if node.has_children() {
            self.branch_icon.clone()
        } else {
            self.leaf_icon.clone()
        }
    }

    fn format(&self, node: &Node<T>) -> String {
        node.name().to_string()
    }

    fn style(&self, _node: &Node<T>, focused: bool) -> Style {
        if focused {
            self.focused_style
        } else {
            Style::new()
        }
    }
}
