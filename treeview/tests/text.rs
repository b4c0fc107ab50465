use treeview::text::{display_width, normalize_icon_width, normalize_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_glyphs() {
    // CJK characters and most emoji take two cells
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("📁"), 2);
    assert_eq!(display_width("a日"), 3);
}

// ============================================================================
// Icon width normalization
// ============================================================================

#[test]
fn test_normalize_empty_icon() {
    assert_eq!(normalize_icon_width(""), "");
}

#[test]
fn test_normalize_narrow_icon_is_padded() {
    assert_eq!(normalize_icon_width("A"), "A  ");
    assert_eq!(normalize_icon_width("AB"), "AB ");
    assert_eq!(normalize_icon_width("→"), "→  ");
}

#[test]
fn test_normalize_wide_glyph_counts_columns() {
    // One emoji is two columns, so one space reaches three
    assert_eq!(normalize_icon_width("📁"), "📁 ");
    assert_eq!(display_width(&normalize_icon_width("📁")), 3);
}

#[test]
fn test_normalize_oversized_icon_gets_one_space() {
    assert_eq!(normalize_icon_width("ABC"), "ABC ");
    assert_eq!(normalize_icon_width("日本"), "日本 ");
    assert_eq!(normalize_icon_width("[+++]"), "[+++] ");
}

#[test]
fn test_normalize_oversized_icon_with_space_is_unchanged() {
    assert_eq!(normalize_icon_width("ABC "), "ABC ");
    assert_eq!(normalize_icon_width("📁📁 "), "📁📁 ");
}

#[test]
fn test_normalize_is_idempotent() {
    let icons = ["", "A", "AB", "ABC", "ABC ", "→", "📁", "📄", "日", "日本", "🗂️", " ", "a b"];

    for icon in icons {
        let once = normalize_icon_width(icon);
        let twice = normalize_icon_width(&once);
        assert_eq!(once, twice, "icon {icon:?}");
    }
}

#[test]
fn test_normalize_custom_target() {
    assert_eq!(normalize_width("A", 1), "A ");
    assert_eq!(normalize_width("A", 5), "A    ");
    assert_eq!(normalize_width("📁", 4), "📁  ");
}

#[test]
fn test_normalized_icons_align_labels() {
    let icons = ["A", "📁", "日", "→"];
    for icon in icons {
        let line = format!("{}label", normalize_icon_width(icon));
        assert_eq!(display_width(&line), 3 + 5, "icon {icon:?}");
    }
}
