//! Tree branch prefixes.
//!
//! A prefix is the run of indentation and branch glyphs in front of a
//! node's icon and label. It is derived from two pieces of traversal state:
//! whether each ancestor was the last child among its siblings, and whether
//! the node itself is.
//!
//! ```text
//! project                (root, no prefix)
//!     ├── src            ancestors = [true],              is_last = false
//!     │   ├── lib.rs     ancestors = [true, false],       is_last = false
//!     │   └── text       ancestors = [true, false],       is_last = true
//!     │       └── mod.rs ancestors = [true, false, true], is_last = true
//!     └── Cargo.toml     ancestors = [true],              is_last = true
//! ```

/// The four column blocks a prefix is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Drawn under an ancestor that still has siblings below it.
    pub vertical: &'static str,
    /// Drawn under an ancestor that was the last child.
    pub blank: &'static str,
    /// Branch for a node followed by a sibling.
    pub tee: &'static str,
    /// Branch for the last child.
    pub corner: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        vertical: "│   ",
        blank: "    ",
        tee: "├── ",
        corner: "└── ",
    };

    pub const ASCII: Glyphs = Glyphs {
        vertical: "|   ",
        blank: "    ",
        tee: "|-- ",
        corner: "`-- ",
    };

    /// Build the prefix for a non-root line.
    ///
    /// `ancestors[d]` tells whether the ancestor at depth `d` was the last
    /// child at its level. Root lines have no prefix and never reach here.
    pub fn build_prefix(&self, ancestors: &[bool], is_last: bool) -> String {
        let mut prefix = String::with_capacity((ancestors.len() + 1) * self.vertical.len());

        for &ancestor_is_last in ancestors {
            if ancestor_is_last {
                prefix.push_str(self.blank);
            } else {
                prefix.push_str(self.vertical);
            }
        }

        if is_last {
            prefix.push_str(self.corner);
        } else {
            prefix.push_str(self.tee);
        }

        prefix
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Build a prefix with the Unicode box-drawing glyphs.
///
/// ```
/// use treeview::build_prefix;
///
/// assert_eq!(build_prefix(&[], false), "├── ");
/// assert_eq!(build_prefix(&[false], true), "│   └── ");
/// assert_eq!(build_prefix(&[false, true], true), "│       └── ");
/// ```
pub fn build_prefix(ancestors: &[bool], is_last: bool) -> String {
    Glyphs::UNICODE.build_prefix(ancestors, is_last)
}

/// Per-depth record of whether the ancestor chain's node at that depth was
/// a last child.
///
/// Updated once per visited node, before its prefix is built. After
/// `record(depth, ..)` the ancestors of that node are exactly
/// `ancestors(depth)`, which has length `depth`.
#[derive(Debug, Default, Clone)]
pub struct AncestorFlags {
    flags: Vec<bool>,
}

impl AncestorFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the node at `depth`.
    ///
    /// Returning to a shallower depth drops the deeper entries, staying at
    /// the same depth overwrites the slot, and descending one level extends
    /// by one.
    pub fn record(&mut self, depth: usize, is_last: bool) {
        if depth > self.flags.len() {
            log::warn!(
                "traversal jumped from depth {} to {}, padding missing levels",
                self.flags.len().saturating_sub(1),
                depth
            );
            self.flags.resize(depth, false);
        }
        self.flags.truncate(depth);
        self.flags.push(is_last);
    }

    /// Flags for the ancestors of the node last recorded at `depth`.
    pub fn ancestors(&self, depth: usize) -> &[bool] {
        &self.flags[..depth.min(self.flags.len())]
    }

    /// Number of levels currently tracked, including the last recorded node.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_descend_stay_return() {
        let mut flags = AncestorFlags::new();
        assert!(flags.is_empty());

        flags.record(0, false);
        assert!(!flags.is_empty());
        assert_eq!(flags.ancestors(0), &[] as &[bool]);

        flags.record(1, false);
        assert_eq!(flags.ancestors(1), &[false]);

        flags.record(1, true);
        assert_eq!(flags.ancestors(1), &[false]);

        flags.record(2, true);
        assert_eq!(flags.ancestors(2), &[false, true]);

        flags.record(0, true);
        assert_eq!(flags.ancestors(0), &[] as &[bool]);
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn test_record_pads_skipped_levels() {
        let mut flags = AncestorFlags::new();
        flags.record(0, true);
        flags.record(3, true);

        assert_eq!(flags.ancestors(3), &[true, false, false]);
        assert_eq!(flags.len(), 4);
    }

    #[test]
    fn test_ascii_glyphs() {
        assert_eq!(Glyphs::ASCII.build_prefix(&[false], false), "|   |-- ");
        assert_eq!(Glyphs::ASCII.build_prefix(&[true], true), "    `-- ");
    }
}
