//! 16×16 wide-glyph tables.
//!
//! A wide character is keyed by its 3-byte UTF-8 encoding packed into a
//! 24-bit integer (`b0 << 16 | b1 << 8 | b2`), see [`glyph_key()`]. Each entry
//! holds a 32-byte monochrome bitmap.
//!
//! Two tables ship with the crate and cover the same characters:
//!
//! - [`FAST_GLYPHS`] stores bitmaps row-major (two bytes per row, MSB is the
//!   leftmost pixel), ready to be blitted as-is. This is the table used by
//!   [`OledDriver::draw_wide_glyphs()`](crate::OledDriver::draw_wide_glyphs).
//! - [`LEGACY_GLYPHS`] stores the older split-halves layout, where the
//!   first 16 bytes are the left 8 columns of each row and the last 16 bytes
//!   the right 8 columns. Lookups through [`GlyphTable::row_major()`]
//!   normalise it.
//!
//! Tables are immutable statics built at compile time and may be shared by
//! any number of drivers.

use crate::error::OledError;

/// Width and height of a wide glyph in pixels.
pub const GLYPH_SIZE: u32 = 16;

/// A 16×16 monochrome bitmap.
pub type Glyph = [u8; 32];

/// Byte order of the bitmaps in a [`GlyphTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphLayout {
    /// Row `y` is bytes `2y` (left half) and `2y + 1` (right half).
    RowMajor,
    /// Row `y` is bytes `y` (left half) and `y + 16` (right half).
    SplitHalves,
}

/// Read-only mapping from 24-bit glyph key to bitmap.
///
/// `entries` must be sorted by key; lookups are a binary search.
pub struct GlyphTable {
    layout: GlyphLayout,
    entries: &'static [(u32, Glyph)],
}

impl GlyphTable {
    /// Wrap a key-sorted slice of entries.
    pub const fn new(layout: GlyphLayout, entries: &'static [(u32, Glyph)]) -> Self {
        Self { layout, entries }
    }

    /// Byte order of the stored bitmaps.
    pub fn layout(&self) -> GlyphLayout {
        self.layout
    }

    /// Number of glyphs in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(key, bitmap)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = &(u32, Glyph)> {
        self.entries.iter()
    }

    /// Raw bitmap stored under `key`, in the table's own layout.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::GlyphNotFound`] if `key` is absent. This is an
    /// expected condition for any character outside the table's vocabulary.
    pub fn lookup(&self, key: u32) -> Result<&Glyph, OledError> {
        self.entries
            .binary_search_by_key(&key, |&(k, _)| k)
            .map(|index| &self.entries[index].1)
            .map_err(|_| OledError::GlyphNotFound(key))
    }

    /// Bitmap stored under `key`, converted to row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::GlyphNotFound`] if `key` is absent.
    pub fn row_major(&self, key: u32) -> Result<Glyph, OledError> {
        let glyph = self.lookup(key)?;
        Ok(match self.layout {
            GlyphLayout::RowMajor => *glyph,
            GlyphLayout::SplitHalves => join_halves(glyph),
        })
    }
}

/// Pack the UTF-8 encoding of `ch` into a 24-bit glyph key.
///
/// Returns `None` for characters that do not encode to exactly three bytes
/// (ASCII, Latin-1, emoji); such characters never have a wide glyph.
pub fn glyph_key(ch: char) -> Option<u32> {
    let mut buf = [0u8; 4];
    match *ch.encode_utf8(&mut buf).as_bytes() {
        [b0, b1, b2] => Some(u32::from(b0) << 16 | u32::from(b1) << 8 | u32::from(b2)),
        _ => None,
    }
}

/// Split-halves bitmap → row-major bitmap.
fn join_halves(glyph: &Glyph) -> Glyph {
    let mut out = [0u8; 32];
    for y in 0..16 {
        out[2 * y] = glyph[y];
        out[2 * y + 1] = glyph[y + 16];
    }
    out
}

/// Row-major bitmap → split-halves bitmap.
const fn split_halves(glyph: Glyph) -> Glyph {
    let mut out = [0u8; 32];
    let mut y = 0;
    while y < 16 {
        out[y] = glyph[2 * y];
        out[y + 16] = glyph[2 * y + 1];
        y += 1;
    }
    out
}

/// Rasterise 16 rows of `#`/`.` art into a row-major bitmap.
const fn glyph(art: [&str; 16]) -> Glyph {
    let mut out = [0u8; 32];
    let mut y = 0;
    while y < 16 {
        let row = art[y].as_bytes();
        let mut x = 0;
        while x < 16 && x < row.len() {
            if row[x] == b'#' {
                out[2 * y + x / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    out
}

// ── Tables ───────────────────────────────────────────────────────────────

/// Row-major glyphs, the table used on the drawing fast path.
pub static FAST_GLYPHS: GlyphTable = GlyphTable::new(GlyphLayout::RowMajor, &FAST_ENTRIES);

/// Split-halves glyphs, kept for bitmaps exported in the older format.
pub static LEGACY_GLYPHS: GlyphTable = GlyphTable::new(GlyphLayout::SplitHalves, &LEGACY_ENTRIES);

static FAST_ENTRIES: [(u32, Glyph); 6] = [
    (0xE4BA91, YUN),
    (0xE5A49A, DUO),
    (0xE5A4A9, TIAN),
    (0xE699B4, QING),
    (0xE6B094, QI),
    (0xE99BA8, YU),
];

static LEGACY_ENTRIES: [(u32, Glyph); 6] = [
    (0xE4BA91, split_halves(YUN)),
    (0xE5A49A, split_halves(DUO)),
    (0xE5A4A9, split_halves(TIAN)),
    (0xE699B4, split_halves(QING)),
    (0xE6B094, split_halves(QI)),
    (0xE99BA8, split_halves(YU)),
];

/// 云
const YUN: Glyph = glyph([
    "................",
    "...##########...",
    "................",
    "................",
    "................",
    ".##############.",
    "......##........",
    ".....##.........",
    "....##..........",
    "...##.....##....",
    "..##.......##...",
    ".##.........##..",
    ".##############.",
    ".............##.",
    "................",
    "................",
]);

/// 多
const DUO: Glyph = glyph([
    ".......##.......",
    "......#######...",
    "....##.....##...",
    "..##.##...##....",
    "......##.##.....",
    ".......###......",
    ".....###..##....",
    "...###..........",
    "........##......",
    ".......#######..",
    ".....##.....##..",
    "...##.##...##...",
    ".......##.##....",
    "........###.....",
    ".....####.......",
    "..###...........",
]);

/// 天
const TIAN: Glyph = glyph([
    "................",
    "..############..",
    ".......##.......",
    ".......##.......",
    ".......##.......",
    ".##############.",
    ".......##.......",
    ".......##.......",
    "......####......",
    ".....##..##.....",
    "....##....##....",
    "...##......##...",
    "..##........##..",
    ".##..........##.",
    "##............##",
    "................",
]);

/// 晴
const QING: Glyph = glyph([
    ".........##.....",
    ".....#########..",
    "..........#.....",
    "#####.#######...",
    "#...#.....#.....",
    "#...#.#########.",
    "#...#...........",
    "#####..#######..",
    "#...#..#.....#..",
    "#...#..#######..",
    "#...#..#.....#..",
    "#####..#######..",
    "#......#.....#..",
    ".......#.....#..",
    ".......#...###..",
    "................",
]);

/// 气
const QI: Glyph = glyph([
    "....##..........",
    "...##...........",
    "..#############.",
    ".##.............",
    "##..##########..",
    "................",
    "...##########...",
    "............##..",
    "............##..",
    "............##..",
    "............##..",
    "............##..",
    "............##.#",
    ".............###",
    "..............##",
    "................",
]);

/// 雨
const YU: Glyph = glyph([
    ".##############.",
    "........#.......",
    "........#.......",
    ".##############.",
    ".#......#.....#.",
    ".#.##...#.##..#.",
    ".#..##..#..##.#.",
    ".#......#.....#.",
    ".#.##...#.##..#.",
    ".#..##..#..##.#.",
    ".#......#.....#.",
    ".#......#.....#.",
    ".#......#...###.",
    ".#..............",
    "................",
    "................",
]);

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_key_packs_three_utf8_bytes() {
        assert_eq!(glyph_key('天'), Some(0xE5A4A9));
        assert_eq!(glyph_key('气'), Some(0xE6B094));
        assert_eq!(glyph_key('多'), Some(0xE5A49A));
        assert_eq!(glyph_key('云'), Some(0xE4BA91));
    }

    #[test]
    fn glyph_key_rejects_other_lengths() {
        assert_eq!(glyph_key('A'), None);
        assert_eq!(glyph_key('é'), None);
        assert_eq!(glyph_key('😀'), None);
    }

    #[test]
    fn tables_are_sorted_by_key() {
        for table in [&FAST_GLYPHS, &LEGACY_GLYPHS] {
            let keys: Vec<u32> = table.iter().map(|&(k, _)| k).collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "{:x?}", keys);
        }
    }

    #[test]
    fn table_keys_match_their_characters() {
        let chars: Vec<u32> = "云多天晴气雨".chars().filter_map(glyph_key).collect();
        let keys: Vec<u32> = FAST_GLYPHS.iter().map(|&(k, _)| k).collect();
        assert_eq!(chars, keys);
    }

    #[test]
    fn lookup_hit_and_miss() {
        assert!(FAST_GLYPHS.lookup(0xE5A4A9).is_ok());
        match FAST_GLYPHS.lookup(0xE4B8AD) {
            Err(OledError::GlyphNotFound(key)) => assert_eq!(key, 0xE4B8AD),
            other => panic!("expected GlyphNotFound, got {:?}", other),
        }
    }

    #[test]
    fn legacy_table_normalises_to_fast_bitmaps() {
        assert_eq!(FAST_GLYPHS.len(), LEGACY_GLYPHS.len());
        for &(key, fast) in FAST_GLYPHS.iter() {
            assert_eq!(LEGACY_GLYPHS.row_major(key).unwrap(), fast, "key {:#x}", key);
            assert_ne!(*LEGACY_GLYPHS.lookup(key).unwrap(), fast);
        }
    }

    #[test]
    fn glyph_art_rasterises_msb_first() {
        let g = glyph([
            "#..............#",
            "........#.......",
            "", "", "", "", "", "", "", "", "", "", "", "", "", "",
        ]);
        assert_eq!(g[0], 0x80);
        assert_eq!(g[1], 0x01);
        assert_eq!(g[2], 0x00);
        assert_eq!(g[3], 0x80);
        assert!(g[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn every_glyph_has_ink() {
        for &(key, bitmap) in FAST_GLYPHS.iter() {
            assert!(bitmap.iter().any(|&b| b != 0), "key {:#x} is blank", key);
        }
    }
}
