//! Property-based invariants for the screen, shader and encoder.
//!
//! 1. Writes outside the clip region never change the grid.
//! 2. The clip region always stays inside the grid.
//! 3. Hyperlink registration is idempotent and never exceeds the id space.
//! 4. Encoder output minus escape sequences is exactly the visible glyphs.
//! 5. A styled frame always ends back in the default state.
//! 6. The shader only rewrites eligible box-drawing cells, and only their text.

use glyphgrid_render::{
    Cell, Color, MAX_HYPERLINKS, Rect, Screen, StyleFlags, render, shader::tile_encoding,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn dims() -> impl Strategy<Value = (u16, u16)> {
    (1u16..12, 1u16..8)
}

fn rect() -> impl Strategy<Value = Rect> {
    (0u16..20, 0u16..20, 0u16..20, 0u16..20).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Default),
        any::<u8>().prop_map(Color::Palette256),
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b)),
    ]
}

fn styled_cell() -> impl Strategy<Value = Cell> {
    (
        "[a-z ]",
        color(),
        color(),
        (0u8..128).prop_map(StyleFlags::from_bits_truncate),
        0u8..3,
    )
        .prop_map(|(text, fg, bg, style, link)| {
            Cell::new(&text)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style)
                .with_hyperlink(link)
        })
}

fn box_cell() -> impl Strategy<Value = Cell> {
    (
        prop::sample::select(vec!['─', '│', '┌', '┐', '└', '┘', '╷', '╵', '━', '┃', 'x', ' ']),
        any::<bool>(),
        0u8..3,
    )
        .prop_map(|(c, eligible, style)| {
            Cell::from_char(c)
                .with_auto_merge(eligible)
                .with_style(StyleFlags::from_bits_truncate(style))
        })
}

/// Remove CSI `...m` and OSC `...ESC \` sequences.
fn strip_escapes(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

// ── Clip region ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn out_of_clip_writes_are_discarded(
        (w, h) in dims(),
        clip in rect(),
        writes in prop::collection::vec((0u16..30, 0u16..30), 0..40),
    ) {
        let mut screen = Screen::new(w, h);
        screen.set_clip_region(clip);
        let clip = screen.clip_region();
        let before = screen.clone();

        for (x, y) in writes {
            if clip.contains(x, y) {
                continue;
            }
            screen.cell_mut(x, y).style = StyleFlags::BOLD;
            screen.set_glyph(x, y, "#");
            screen.set(x, y, Cell::new("@"));
            prop_assert_eq!(screen.cell(x, y), &Cell::default());
        }
        prop_assert_eq!(screen, before);
    }

    #[test]
    fn clip_region_within_bounds((w, h) in dims(), clip in rect()) {
        let mut screen = Screen::new(w, h);
        screen.set_clip_region(clip);
        let clip = screen.clip_region();
        prop_assert!(clip.is_empty() || (clip.right() <= w && clip.bottom() <= h));
        prop_assert_eq!(clip, clip.intersection(&screen.bounds()));
    }
}

// ── Hyperlinks ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hyperlink_registration_idempotent(
        targets in prop::collection::vec("[a-z]{1,3}", 0..400),
    ) {
        let mut screen = Screen::new(1, 1);
        let mut seen = std::collections::HashMap::new();
        for target in &targets {
            let id = screen.register_hyperlink(target);
            prop_assert!(usize::from(id) < MAX_HYPERLINKS);
            if id != 0 {
                prop_assert_eq!(screen.hyperlink(id), target.as_str());
                if let Some(previous) = seen.insert(target.clone(), id) {
                    prop_assert_eq!(previous, id);
                }
            }
        }
        prop_assert!(screen.hyperlinks().len() <= MAX_HYPERLINKS);
    }
}

// ── Encoder ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stripped_output_is_visible_text(
        (w, h) in dims(),
        cells in prop::collection::vec(styled_cell(), 96),
    ) {
        let mut screen = Screen::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let i = usize::from(y) * usize::from(w) + usize::from(x);
                screen.set(x, y, cells[i % cells.len()].clone());
            }
        }
        screen.register_hyperlink("https://a.example");
        screen.register_hyperlink("https://b.example");

        let expected = (0..h)
            .map(|y| screen.row(y).iter().map(|c| c.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\r\n");
        let out = String::from_utf8(render(&screen)).unwrap();
        prop_assert_eq!(strip_escapes(&out), expected);
    }

    #[test]
    fn frame_ends_in_default_state(cell in styled_cell()) {
        let mut screen = Screen::new(1, 1);
        screen.register_hyperlink("https://a.example");
        screen.register_hyperlink("https://b.example");
        screen.set(0, 0, cell.clone());
        let out = String::from_utf8(render(&screen)).unwrap();

        // Rendering the frame followed by a default cell must add nothing.
        let mut wider = Screen::new(2, 1);
        wider.register_hyperlink("https://a.example");
        wider.register_hyperlink("https://b.example");
        wider.set(0, 0, cell);
        let wider_out = String::from_utf8(render(&wider)).unwrap();
        prop_assert_eq!(format!("{out} "), wider_out);
    }

    #[test]
    fn default_style_emits_no_escapes(
        (w, h) in dims(),
        text in "[a-z ]{0,20}",
    ) {
        let mut screen = Screen::new(w, h);
        for (i, c) in text.chars().enumerate() {
            let x = (i % usize::from(w)) as u16;
            let y = ((i / usize::from(w)) % usize::from(h)) as u16;
            screen.set(x, y, Cell::from_char(c));
        }
        let out = render(&screen);
        prop_assert!(!out.contains(&0x1b));
    }
}

// ── Shader ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shader_only_touches_eligible_glyphs(
        (w, h) in dims(),
        cells in prop::collection::vec(box_cell(), 96),
    ) {
        let mut screen = Screen::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let i = usize::from(y) * usize::from(w) + usize::from(x);
                screen.set(x, y, cells[i % cells.len()].clone());
            }
        }
        let before = screen.clone();
        screen.apply_shader();

        for (old, new) in before.cells().iter().zip(screen.cells()) {
            prop_assert!(old.same_style(new));
            prop_assert_eq!(old.auto_merge, new.auto_merge);
            if old.text != new.text {
                prop_assert!(old.auto_merge);
                let old_char = old.text.as_str().chars().next().unwrap();
                let new_char = new.text.as_str().chars().next().unwrap();
                prop_assert!(tile_encoding(old_char).is_some());
                prop_assert!(tile_encoding(new_char).is_some());
            }
        }
    }
}
