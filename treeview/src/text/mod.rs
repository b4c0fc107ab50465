use unicode_width::UnicodeWidthStr;

/// Column width icons are padded to before the label starts.
pub const DEFAULT_ICON_WIDTH: usize = 3;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad an icon to `DEFAULT_ICON_WIDTH` terminal columns.
///
/// See [`normalize_width`].
pub fn normalize_icon_width(icon: &str) -> String {
    normalize_width(icon, DEFAULT_ICON_WIDTH)
}

/// Pad an icon with trailing spaces until it occupies `target_width`
/// terminal columns, so labels line up under each other regardless of
/// how wide each icon glyph renders.
///
/// - An empty icon stays empty, so iconless rows get no gap.
/// - An icon already at or past the target gets exactly one trailing
///   space, unless it already ends in one.
///
/// The result is stable: normalizing it again returns it unchanged.
///
/// ```
/// use treeview::text::normalize_width;
///
/// assert_eq!(normalize_width("A", 3), "A  ");
/// assert_eq!(normalize_width("", 3), "");
/// assert_eq!(normalize_width("[+]", 3), "[+] ");
/// ```
pub fn normalize_width(icon: &str, target_width: usize) -> String {
    if icon.is_empty() {
        return String::new();
    }

    let width = display_width(icon);

    if width >= target_width {
        if icon.ends_with(' ') {
            return icon.to_string();
        }
        let mut padded = String::with_capacity(icon.len() + 1);
        padded.push_str(icon);
        padded.push(' ');
        return padded;
    }

    let mut padded = String::with_capacity(icon.len() + target_width - width);
    padded.push_str(icon);
    padded.extend(std::iter::repeat(' ').take(target_width - width));
    padded
}
