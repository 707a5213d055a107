#![forbid(unsafe_code)]

//! End-to-end frame tests: draw into a screen, merge borders, encode.

use glyphgrid_render::{
    Ansi16, BorderChars, Cell, Color, Cursor, CursorShape, Draw, Rect, Screen, StyleDiffEncoder,
    StyleFlags, render, reset_position,
};

fn encode(screen: &Screen) -> String {
    String::from_utf8(render(screen)).unwrap()
}

// =============================================================================
// Frame lifecycle
// =============================================================================

#[test]
fn fresh_screen_after_clear() {
    let mut screen = Screen::new(10, 5);
    screen.clear();
    let cursor = screen.cursor();
    assert_eq!((cursor.x, cursor.y), (9, 4));
    assert!(screen.cells().iter().all(|c| *c == Cell::default()));
}

#[test]
fn default_grid_emits_no_escape_bytes() {
    let mut screen = Screen::new(4, 3);
    screen.print_text(0, 0, "abcd", Cell::default());
    screen.print_text(0, 2, "中文", Cell::default());
    let out = encode(&screen);
    assert!(!out.contains('\x1b'));
    assert_eq!(out, "abcd\r\n    \r\n中文");
}

#[test]
fn redraw_cycle() {
    let mut screen = Screen::new(5, 2);
    screen.print_text(0, 0, "one", Cell::default());
    let first = screen.to_ansi_string();

    let mut stream = first.clone();
    stream.push_str(&screen.reset_position(false));
    screen.clear();
    screen.print_text(0, 1, "two", Cell::default());
    stream.push_str(&screen.to_ansi_string());

    assert_eq!(first, "one  \r\n     ");
    assert_eq!(stream, "one  \r\n     \r\x1b[1A     \r\ntwo  ");
}

#[test]
fn reset_position_free_fn_matches_screen() {
    let screen = Screen::new(3, 4);
    assert_eq!(screen.reset_position(true), reset_position(4, true));
    assert_eq!(screen.reset_position(false), reset_position(4, false));
}

#[test]
fn cursor_is_independent_of_output() {
    let mut screen = Screen::new(2, 1);
    screen.set_cursor(Cursor::new(1, 0, CursorShape::Underline));
    assert_eq!(encode(&screen), "  ");
    assert_eq!(screen.cursor().shape, CursorShape::Underline);
}

// =============================================================================
// Styled output
// =============================================================================

#[test]
fn styled_label_in_border() {
    let mut screen = Screen::new(7, 3);
    screen.draw_border(screen.bounds(), BorderChars::ROUNDED, Cell::default());
    let label = Cell::default()
        .with_fg(Ansi16::Yellow.into())
        .with_style(StyleFlags::BOLD);
    screen.print_text(1, 1, "ok", label);
    assert_eq!(screen.apply_shader(), 0);

    assert_eq!(
        encode(&screen),
        "╭─────╮\r\n│\x1b[1m\x1b[33m\x1b[49mok\x1b[22m\x1b[39m\x1b[49m   │\r\n╰─────╯"
    );
}

#[test]
fn linked_text_closes_before_row_break() {
    let mut screen = Screen::new(4, 2);
    let id = screen.register_hyperlink("https://example.com/docs");
    screen.print_text(0, 0, "docs", Cell::default().with_hyperlink(id));
    assert_eq!(
        encode(&screen),
        "\x1b]8;;https://example.com/docs\x1b\\docs\x1b]8;;\x1b\\\r\n    "
    );
}

#[test]
fn clear_drops_hyperlinks() {
    let mut screen = Screen::new(1, 1);
    let id = screen.register_hyperlink("https://a.example");
    screen.clear();
    assert_eq!(screen.hyperlink(id), "");
    assert_eq!(screen.register_hyperlink("https://b.example"), 1);
}

#[test]
fn encoder_into_arbitrary_writer() {
    let mut screen = Screen::new(2, 1);
    screen.cell_mut(0, 0).bg = Color::Palette256(17);
    let mut encoder = StyleDiffEncoder::new(Vec::new());
    encoder.encode(&screen).unwrap();
    assert_eq!(
        encoder.into_inner(),
        b"\x1b[39m\x1b[48;5;17m \x1b[39m\x1b[49m ".to_vec()
    );
}

// =============================================================================
// Box-drawing merge
// =============================================================================

#[test]
fn already_connected_pieces_are_left_alone() {
    // ─ ending in a right connector next to ┤ starting with a left connector.
    let mut screen = Screen::new(2, 1);
    screen.draw_horizontal_line(0, 0, 1, Cell::from_char('─').with_auto_merge(true));
    screen.set(1, 0, Cell::from_char('┤').with_auto_merge(true));
    assert_eq!(screen.apply_shader(), 0);
    assert_eq!(screen.at(0, 0), "─");
    assert_eq!(screen.at(1, 0), "┤");
}

#[test]
fn missing_connector_is_supplied_by_neighbour() {
    // │ below ─: the top piece gains a down connector.
    let mut screen = Screen::new(1, 2);
    screen.set(0, 0, Cell::from_char('─').with_auto_merge(true));
    screen.set(0, 1, Cell::from_char('│').with_auto_merge(true));
    assert_eq!(screen.apply_shader(), 1);
    assert_eq!(screen.at(0, 0), "┬");
    assert_eq!(screen.at(0, 1), "│");
}

#[test]
fn corner_upgrade() {
    // ╷ (down only) left of ─ gains a right connector.
    let mut screen = Screen::new(2, 2);
    screen.set(0, 0, Cell::from_char('╷').with_auto_merge(true));
    screen.set(1, 0, Cell::from_char('─').with_auto_merge(true));
    screen.apply_shader();
    assert_eq!(screen.at(0, 0), "┌");
}

#[test]
fn grid_of_panels() {
    let mut screen = Screen::new(7, 5);
    for rect in [
        Rect::new(0, 0, 4, 3),
        Rect::new(3, 0, 4, 3),
        Rect::new(0, 2, 7, 3),
    ] {
        screen.draw_border(rect, BorderChars::SQUARE, Cell::default());
    }
    screen.apply_shader();
    let rows: Vec<String> = (0..5)
        .map(|y| screen.row(y).iter().map(|c| c.text.as_str()).collect())
        .collect();
    assert_eq!(rows[0], "┌──┬──┐");
    assert_eq!(rows[1], "│  │  │");
    assert_eq!(rows[2], "├──┴──┤");
    assert_eq!(rows[4], "└─────┘");
}

// =============================================================================
// Clip region
// =============================================================================

#[test]
fn drawing_respects_clip_region() {
    let mut screen = Screen::new(6, 2);
    screen.set_clip_region(Rect::new(1, 0, 3, 1));
    screen.print_text(0, 0, "abcdef", Cell::default());
    screen.draw_horizontal_line(0, 1, 6, Cell::from_char('-'));
    screen.reset_clip_region();
    assert_eq!(encode(&screen), " bcd  \r\n      ");
}
