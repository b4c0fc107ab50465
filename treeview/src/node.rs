/// A node in a [`Tree`](crate::Tree): a stable ID, a display name, a payload
/// and owned children.
///
/// Children are only traversed while the node is expanded. New nodes start
/// collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    id: String,
    name: String,
    data: T,
    children: Vec<Node<T>>,
    expanded: bool,
}

impl<T> Node<T> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Set the children, replacing any existing ones.
    pub fn with_children(mut self, children: Vec<Node<T>>) -> Self {
        self.children = children;
        self
    }

    /// Set whether children are visited.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Find a node by ID in this subtree (including this node).
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node<T>> {
        if self.id == id {
            return Some(self);
        }

        for child in &mut self.children {
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }

        None
    }
}
