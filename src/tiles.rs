//! Graphics data for the scene: a set of procedurally generated tiles and
//! the object palette they're shown with.

use crate::display::{Color, Tile4};
use crate::shared_constants::{COLORS_PER_BANK, NUM_GRADIENT_TILES, NUM_HUES};

/// 5 bit channel intensities for the 16 entries of a palette bank, darkest first.
const BRIGHTNESS_LUT: [u16; COLORS_PER_BANK] = [
    0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0C, 0x0E, 0x11, 0x13, 0x15, 0x17, 0x19, 0x1B, 0x1D, 0x1F,
];

/// Which channels are lit for each hue, as (r, g, b).
const HUES: [(bool, bool, bool); NUM_HUES] = [
    (true, false, false), // red
    (false, true, false), // green
    (false, false, true), // blue
    (true, true, false),  // yellow
    (true, false, true),  // magenta
    (false, true, true),  // cyan
];

/// Builds the gradient tile set.
///
/// Tile `n` is a checkerboard of palette entry `n` and the transparent entry 0,
/// so together with a bank from `obj_palette()` the tile index selects the brightness.
pub fn gradient_tiles() -> [Tile4; NUM_GRADIENT_TILES] {
    let mut tiles = [[0u32; 8]; NUM_GRADIENT_TILES];
    for (n, tile) in tiles.iter_mut().enumerate() {
        let n = n as u32;
        for (row, line) in tile.iter_mut().enumerate() {
            // One byte is two 4bpp pixels, low nibble first
            let pair = if row % 2 == 0 { n } else { n << 4 };
            *line = pair * 0x0101_0101;
        }
    }
    return tiles;
}

/// Builds the object palette: one bank of 16 brightness levels per hue.
///
/// The result is indexed like object palette RAM, so bank `h` starts at `16 * h`.
pub fn obj_palette() -> [Color; NUM_HUES * COLORS_PER_BANK] {
    let mut palette = [Color::BLACK; NUM_HUES * COLORS_PER_BANK];
    for (bank, &(r, g, b)) in HUES.iter().enumerate() {
        for (i, &level) in BRIGHTNESS_LUT.iter().enumerate() {
            let channel = |lit: bool| if lit { level } else { 0 };
            palette[(bank * COLORS_PER_BANK) + i] =
                Color::from_rgb(channel(r), channel(g), channel(b));
        }
    }
    return palette;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_alternate_rows() {
        let tiles = gradient_tiles();
        assert_eq!(tiles[0], [0; 8]);
        assert_eq!(tiles[1][0], 0x0101_0101);
        assert_eq!(tiles[1][1], 0x1010_1010);
        assert_eq!(tiles[15][6], 0x0F0F_0F0F);
        assert_eq!(tiles[15][7], 0xF0F0_F0F0);
    }

    #[test]
    fn palette_banks_follow_hues() {
        let palette = obj_palette();
        // Darkest red, brightest red
        assert_eq!(palette[0], Color::from_rgb(0x05, 0, 0));
        assert_eq!(palette[15], Color::from_rgb(0x1F, 0, 0));
        // Brightest of green, blue, yellow, magenta and cyan
        assert_eq!(palette[31], Color::from_rgb(0, 0x1F, 0));
        assert_eq!(palette[47], Color::from_rgb(0, 0, 0x1F));
        assert_eq!(palette[63], Color::from_rgb(0x1F, 0x1F, 0));
        assert_eq!(palette[79], Color::from_rgb(0x1F, 0, 0x1F));
        assert_eq!(palette[80 + 8], Color::from_rgb(0, 0x11, 0x11));
    }
}
