//! An owned tree with a focus set, and its visible-node traversal.

use std::collections::HashSet;
use std::slice;

use tokio_util::sync::CancellationToken;

use crate::config::RenderOptions;
use crate::error::{Interrupted, PartialView, TraversalError};
use crate::node::Node;
use crate::provider::NodeProvider;
use crate::render::{render_frame, Frame, Visit};
use crate::viewport::Viewport;

/// Root nodes plus the set of focused node IDs.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    roots: Vec<Node<T>>,
    focused: HashSet<String>,
    options: RenderOptions,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            focused: HashSet::new(),
            options: RenderOptions::default(),
        }
    }
}

impl<T> Tree<T> {
    pub fn new(roots: Vec<Node<T>>) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node<T>> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    /// Focus exactly one node, clearing any previous focus.
    pub fn set_focused(&mut self, id: impl Into<String>) {
        self.focused.clear();
        self.focused.insert(id.into());
    }

    /// Add a node to the focus set.
    pub fn add_focused(&mut self, id: impl Into<String>) {
        self.focused.insert(id.into());
    }

    pub fn clear_focus(&mut self) {
        self.focused.clear();
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.contains(id)
    }

    /// Lazily walk the visible nodes in pre-order.
    ///
    /// A node is visible when every ancestor is expanded. The token is checked
    /// before each node is produced; once cancelled, the iterator yields
    /// [`TraversalError::Cancelled`] and ends.
    pub fn visible<'a>(&'a self, cancel: &'a CancellationToken) -> VisibleNodes<'a, T> {
        VisibleNodes {
            stack: vec![(self.roots.iter(), 0)],
            cancel,
            done: false,
        }
    }

    /// Render every visible node into one frame.
    pub fn render<P>(
        &self,
        provider: &P,
        cancel: &CancellationToken,
    ) -> Result<Frame, Interrupted<TraversalError>>
    where
        P: NodeProvider<Node<T>> + ?Sized,
    {
        render_frame(
            self.visible(cancel),
            cancel,
            |node: &Node<T>| self.is_focused(node.id()),
            provider,
            &self.options,
        )
    }

    /// Render, then scroll `viewport` so the focused line is on screen and
    /// return the visible slice of the frame.
    ///
    /// The viewport is positioned even when rendering is interrupted, using
    /// the partial frame; the error then carries the view of that frame.
    pub fn render_with_viewport<P>(
        &self,
        provider: &P,
        cancel: &CancellationToken,
        viewport: &mut Viewport,
    ) -> Result<String, PartialView>
    where
        P: NodeProvider<Node<T>> + ?Sized,
    {
        match self.render(provider, cancel) {
            Ok(frame) => {
                viewport.follow(&frame);
                Ok(viewport.view(&frame.text))
            }
            Err(interrupted) => {
                viewport.follow(&interrupted.frame);
                Err(PartialView {
                    view: viewport.view(&interrupted.frame.text),
                    interrupted,
                })
            }
        }
    }
}

/// Iterator returned by [`Tree::visible`].
pub struct VisibleNodes<'a, T> {
    stack: Vec<(slice::Iter<'a, Node<T>>, usize)>,
    cancel: &'a CancellationToken,
    done: bool,
}

impl<'a, T> Iterator for VisibleNodes<'a, T> {
    type Item = Result<Visit<'a, Node<T>>, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.cancel.is_cancelled() {
            self.done = true;
            self.stack.clear();
            return Some(Err(TraversalError::Cancelled));
        }

        loop {
            let next = {
                let (siblings, depth) = self.stack.last_mut()?;
                siblings
                    .next()
                    .map(|node| (node, *depth, siblings.len() == 0))
            };

            match next {
                Some((node, depth, is_last)) => {
                    if node.is_expanded() && node.has_children() {
                        self.stack.push((node.children().iter(), depth + 1));
                    }
                    return Some(Ok(Visit {
                        node,
                        depth,
                        is_last,
                    }));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(tree: &Tree<()>) -> Vec<(String, usize, bool)> {
        let cancel = CancellationToken::new();
        tree.visible(&cancel)
            .map(|visit| {
                let visit = visit.unwrap();
                (visit.node.id().to_string(), visit.depth, visit.is_last)
            })
            .collect()
    }

    #[test]
    fn test_collapsed_children_are_skipped() {
        let mut tree = Tree::new(vec![
            Node::new("a", "a", ()).with_children(vec![Node::new("a1", "a1", ())]),
            Node::new("b", "b", ()),
        ]);

        assert_eq!(
            walk(&tree),
            vec![("a".to_string(), 0, false), ("b".to_string(), 0, true)]
        );

        tree.find_mut("a").unwrap().set_expanded(true);
        assert_eq!(walk(&tree).len(), 3);
    }

    #[test]
    fn test_preorder_with_last_flags() {
        let tree = Tree::new(vec![Node::new("r", "r", ())
            .with_expanded(true)
            .with_children(vec![
                Node::new("x", "x", ())
                    .with_expanded(true)
                    .with_children(vec![Node::new("x1", "x1", ())]),
                Node::new("y", "y", ()),
            ])]);

        assert_eq!(
            walk(&tree),
            vec![
                ("r".to_string(), 0, true),
                ("x".to_string(), 1, false),
                ("x1".to_string(), 2, true),
                ("y".to_string(), 1, true),
            ]
        );
    }

    #[test]
    fn test_cancelled_traversal_yields_error_once() {
        let tree = Tree::new(vec![Node::new("a", "a", ())]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut visible = tree.visible(&cancel);
        assert_eq!(visible.next().map(|v| v.err()), Some(Some(TraversalError::Cancelled)));
        assert!(visible.next().is_none());
    }

    #[test]
    fn test_focus_set() {
        let mut tree: Tree<()> = Tree::new(vec![]);
        tree.set_focused("a");
        tree.add_focused("b");
        assert!(tree.is_focused("a") && tree.is_focused("b"));

        tree.set_focused("c");
        assert!(!tree.is_focused("a"));
        assert!(tree.is_focused("c"));

        tree.clear_focus();
        assert!(!tree.is_focused("c"));
    }
}
