use std::error::Error;

use tokio_util::sync::CancellationToken;

use crate::config::RenderOptions;
use crate::error::{Interrupted, RenderError};
use crate::prefix::AncestorFlags;
use crate::provider::NodeProvider;
use crate::text::normalize_width;

/// One step of a pre-order traversal.
#[derive(Debug)]
pub struct Visit<'a, N> {
    pub node: &'a N,
    /// Distance from a root; roots are 0.
    pub depth: usize,
    /// No further sibling follows at this depth.
    pub is_last: bool,
}

impl<N> Clone for Visit<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Visit<'_, N> {}

/// A rendered block of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Lines joined with `\n`, no trailing newline.
    pub text: String,
    /// Output index of the first focused line.
    pub focused_line: Option<usize>,
    /// Number of lines in `text`.
    pub lines: usize,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Render a single line: prefix, padded icon and label, styled as a whole.
pub fn render_line<N, P>(
    provider: &P,
    node: &N,
    prefix: &str,
    focused: bool,
    icon_width: usize,
) -> String
where
    N: ?Sized,
    P: NodeProvider<N> + ?Sized,
{
    let mut scratch = String::new();
    render_line_into(&mut scratch, provider, node, prefix, focused, icon_width)
}

fn render_line_into<N, P>(
    scratch: &mut String,
    provider: &P,
    node: &N,
    prefix: &str,
    focused: bool,
    icon_width: usize,
) -> String
where
    N: ?Sized,
    P: NodeProvider<N> + ?Sized,
{
    let icon = normalize_width(&provider.icon(node), icon_width);
    let label = provider.format(node);
    let style = provider.style(node, focused);

    scratch.clear();
    scratch.push_str(prefix);
    scratch.push_str(&icon);
    scratch.push_str(&label);

    style.render(scratch)
}

/// Turn a pre-order traversal into a frame in one pass.
///
/// Records the output index of the first node `is_focused` accepts. The
/// token is checked after every line. On cancellation, or when the traversal
/// yields an error, the lines rendered so far come back inside
/// [`Interrupted`] together with the cause; a traversal error is passed
/// through as [`RenderError::Traversal`] without being rewrapped.
pub fn render_frame<'a, N, E, I, F, P>(
    visits: I,
    cancel: &CancellationToken,
    is_focused: F,
    provider: &P,
    options: &RenderOptions,
) -> Result<Frame, Interrupted<E>>
where
    N: 'a,
    E: Error + 'static,
    I: IntoIterator<Item = Result<Visit<'a, N>, E>>,
    F: Fn(&N) -> bool,
    P: NodeProvider<N> + ?Sized,
{
    let mut frame = Frame::default();
    let mut ancestors = AncestorFlags::new();
    let mut scratch = String::new();

    for visit in visits {
        let visit = match visit {
            Ok(visit) => visit,
            Err(err) => return Err(interrupt(frame, RenderError::Traversal(err))),
        };

        ancestors.record(visit.depth, visit.is_last);

        // Roots get no prefix.
        let prefix = if visit.depth > 0 {
            options
                .glyphs
                .build_prefix(ancestors.ancestors(visit.depth), visit.is_last)
        } else {
            String::new()
        };

        let focused = is_focused(visit.node);
        if focused && frame.focused_line.is_none() {
            frame.focused_line = Some(frame.lines);
        }

        let line = render_line_into(
            &mut scratch,
            provider,
            visit.node,
            &prefix,
            focused,
            options.icon_width,
        );

        if frame.lines > 0 {
            frame.text.push('\n');
        }
        frame.text.push_str(&line);
        frame.lines += 1;

        if cancel.is_cancelled() {
            return Err(interrupt(frame, RenderError::Cancelled));
        }
    }

    log::debug!(
        "rendered {} lines, focused line {:?}",
        frame.lines,
        frame.focused_line
    );

    Ok(frame)
}

fn interrupt<E: Error + 'static>(frame: Frame, cause: RenderError<E>) -> Interrupted<E> {
    log::debug!("render interrupted after {} lines: {}", frame.lines, cause);
    Interrupted { frame, cause }
}
