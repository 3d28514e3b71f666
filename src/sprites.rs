use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

use crate::entities::Rect;

// ── Sprite masks ──
// Dot offsets from a sprite's top-left corner, in logical pixels.

pub const SHIP_WIDTH: i32 = 11;
pub const SHIP_HEIGHT: i32 = 7;

#[rustfmt::skip]
pub const SHIP: &[(i32, i32)] = &[
    (5, 0),
    (4, 1), (5, 1), (6, 1),
    (4, 2), (5, 2), (6, 2),
    (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3), (8, 3), (9, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4), (9, 4), (10, 4),
    (0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (8, 5), (9, 5), (10, 5),
    (0, 6), (1, 6), (2, 6), (3, 6), (4, 6), (5, 6), (6, 6), (7, 6), (8, 6), (9, 6), (10, 6),
];

pub const ALIEN_WIDTH: i32 = 10;
pub const ALIEN_HEIGHT: i32 = 7;

#[rustfmt::skip]
pub const ALIEN: &[(i32, i32)] = &[
    (2, 0), (7, 0),
    (3, 1), (6, 1),
    (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2),
    (1, 3), (2, 3), (4, 3), (5, 3), (7, 3), (8, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4), (9, 4),
    (0, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (9, 5),
    (0, 6), (2, 6), (7, 6), (9, 6),
];

// Same body, arms tucked in. Swapped with ALIEN to animate the march.
#[rustfmt::skip]
pub const ALIEN_ALT: &[(i32, i32)] = &[
    (2, 0), (7, 0),
    (3, 1), (6, 1),
    (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2),
    (1, 3), (2, 3), (4, 3), (5, 3), (7, 3), (8, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4), (9, 4),
    (1, 5), (2, 5), (7, 5), (8, 5),
    (2, 6), (3, 6), (6, 6), (7, 6),
];

// ── Braille rasterizer ──
// Each terminal cell is a 2x4 block of dots; a cell's glyph is 0x2800 plus
// the bits of its lit dots.

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (0, 3) => 0x40,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Light one dot, given in screen dot coordinates already scaled to the
/// `bw` x `bh` drawing area. Out-of-range dots are dropped.
pub fn set_dot(dots: &mut HashMap<(usize, usize), u8>, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = (bx / 2) as usize;
    let cy = (by / 4) as usize;
    let bit = braille_bit((bx % 2) as usize, (by % 4) as usize);
    *dots.entry((cx, cy)).or_insert(0) |= bit;
}

/// Stamp a sprite mask at `rect`'s corner, mapping logical pixels into the
/// drawing area with the `sx`/`sy` scale.
pub fn blit_mask(
    dots: &mut HashMap<(usize, usize), u8>,
    mask: &[(i32, i32)],
    rect: Rect,
    sx: f32,
    sy: f32,
    bw: i32,
    bh: i32,
) {
    for &(dx, dy) in mask {
        let bx = ((rect.x + dx) as f32 * sx) as i32;
        let by = ((rect.y + dy) as f32 * sy) as i32;
        set_dot(dots, bx, by, bw, bh);
    }
}

/// Fill a solid rectangle. The fill walks the scaled span end to end, so a
/// stretched mapping leaves no gaps.
pub fn fill_rect(
    dots: &mut HashMap<(usize, usize), u8>,
    rect: Rect,
    sx: f32,
    sy: f32,
    bw: i32,
    bh: i32,
) {
    let bx0 = (rect.x as f32 * sx) as i32;
    let bx1 = ((rect.right() as f32 * sx) as i32).max(bx0 + 1);
    let by0 = (rect.y as f32 * sy) as i32;
    let by1 = ((rect.bottom() as f32 * sy) as i32).max(by0 + 1);
    for by in by0..by1 {
        for bx in bx0..bx1 {
            set_dot(dots, bx, by, bw, bh);
        }
    }
}

/// Merge a dot layer into the cell grid. Later layers overwrite the color
/// of any cell they touch but keep accumulating dots.
pub fn write_layer(
    grid: &mut [Vec<(char, Style)>],
    dots: &HashMap<(usize, usize), u8>,
    width: usize,
    height: usize,
    color: Color,
    bg: Color,
    bold: bool,
) {
    for (&(cx, cy), &bits) in dots {
        if cx >= width || cy >= height || bits == 0 {
            continue;
        }
        let existing = grid[cy][cx].0;
        let merged = if ('\u{2800}'..='\u{28FF}').contains(&existing) {
            bits | (existing as u32 - 0x2800) as u8
        } else {
            bits
        };
        let ch = char::from_u32(0x2800 + merged as u32).unwrap_or(' ');
        let mut style = Style::default().fg(color).bg(bg);
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        grid[cy][cx] = (ch, style);
    }
}
