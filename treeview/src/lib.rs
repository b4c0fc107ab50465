//! Render trees as branch-connected text lines for a terminal, and keep a
//! scrolling viewport on the focused line.
//!
//! ```
//! use tokio_util::sync::CancellationToken;
//! use treeview::{DefaultProvider, Node, Tree};
//!
//! let mut tree = Tree::new(vec![Node::new("src", "src", ())
//!     .with_expanded(true)
//!     .with_children(vec![
//!         Node::new("lib", "lib.rs", ()),
//!         Node::new("main", "main.rs", ()),
//!     ])]);
//! tree.set_focused("main");
//!
//! let provider = DefaultProvider::new().without_icons().with_focused_style(Default::default());
//! let frame = tree.render(&provider, &CancellationToken::new()).unwrap();
//!
//! assert_eq!(frame.text, "src\n    ├── lib.rs\n    └── main.rs");
//! assert_eq!(frame.focused_line, Some(2));
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod prefix;
pub mod provider;
pub mod render;
pub mod style;
pub mod text;
pub mod tree;
pub mod viewport;

pub use config::RenderOptions;
pub use error::{Interrupted, PartialView, RenderError, TraversalError};
pub use node::Node;
pub use prefix::{build_prefix, AncestorFlags, Glyphs};
pub use provider::{DefaultProvider, NodeProvider};
pub use render::{render_frame, render_line, Frame, Visit};
pub use style::{Color, Style};
pub use text::{normalize_icon_width, normalize_width};
pub use tree::{Tree, VisibleNodes};
pub use viewport::{position_viewport, Viewport};
