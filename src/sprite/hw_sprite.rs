use crate::shared_constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bits of attr0 holding the Y coordinate.
const Y_MASK: u16 = 0x00FF;
/// Sign bit of the 8 bit Y coordinate.
const Y_SIGN_BIT: u16 = 0x0080;
/// Bits of attr1 holding the X coordinate.
const X_MASK: u16 = 0x01FF;
/// Sign bit of the 9 bit X coordinate.
const X_SIGN_BIT: u16 = 0x0100;
/// Bit of attr1 flipping the sprite horizontally.
const H_FLIP_BIT: u16 = 0x1000;
/// Bit of attr1 flipping the sprite vertically.
const V_FLIP_BIT: u16 = 0x2000;
/// Bits of attr2 holding the base tile index.
const TILE_INDEX_MASK: u16 = 0x03FF;
/// Bits of attr2 holding the palette bank.
const PALETTE_MASK: u16 = 0xF000;
const PALETTE_SHIFT: u16 = 12;

/// Position an unused slot is parked at so that it's never visible.
pub const OFFSCREEN_POS: (i16, i16) = (SCREEN_WIDTH, SCREEN_HEIGHT);

/// A single OAM entry, laid out exactly like the hardware expects it.
///
/// attr3 is where the affine parameters live on hardware; it's carried
/// along so the table can be copied to OAM wholesale, but never touched.
///
/// All setters only modify the bits of their field.
/// Values wider than the field are truncated, which matches how the
/// hardware treats them (a 9 bit X of 256 is -256, etc).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HWSprite {
    attr0: u16,
    attr1: u16,
    attr2: u16,
    attr3: u16,
}

impl HWSprite {
    /// Creates an entry with all attributes cleared, parked off screen.
    pub fn hidden() -> HWSprite {
        let mut sprite = HWSprite::default();
        sprite.set_pos(OFFSCREEN_POS.0, OFFSCREEN_POS.1);
        return sprite;
    }

    /// Sets the position of the top left corner of the sprite.
    ///
    /// Only the low 8 bits of `y` and the low 9 bits of `x` are stored.
    pub fn set_pos(&mut self, x: i16, y: i16) {
        self.attr0 = (self.attr0 & !Y_MASK) | (y as u16 & Y_MASK);
        self.attr1 = (self.attr1 & !X_MASK) | (x as u16 & X_MASK);
    }

    /// The X coordinate, sign extended from 9 bits.
    pub fn x(&self) -> i16 {
        let mut x = self.attr1 & X_MASK;
        if x & X_SIGN_BIT != 0 {
            x |= !X_MASK;
        }
        return x as i16;
    }

    /// The Y coordinate, sign extended from 8 bits.
    pub fn y(&self) -> i16 {
        let mut y = self.attr0 & Y_MASK;
        if y & Y_SIGN_BIT != 0 {
            y |= !Y_MASK;
        }
        return y as i16;
    }

    /// Returns the position in the form (x, y).
    pub fn position(&self) -> (i16, i16) {
        return (self.x(), self.y());
    }

    pub fn set_tile_index(&mut self, index: u16) {
        self.attr2 = (self.attr2 & !TILE_INDEX_MASK) | (index & TILE_INDEX_MASK);
    }

    pub fn tile_index(&self) -> u16 {
        return self.attr2 & TILE_INDEX_MASK;
    }

    /// Selects one of the 16 object palette banks.
    pub fn set_palette(&mut self, index: u8) {
        self.attr2 =
            (self.attr2 & !PALETTE_MASK) | ((u16::from(index) << PALETTE_SHIFT) & PALETTE_MASK);
    }

    pub fn palette(&self) -> u8 {
        return ((self.attr2 & PALETTE_MASK) >> PALETTE_SHIFT) as u8;
    }

    pub fn set_h_flip(&mut self, flag: bool) {
        self.attr1 = with_bit(self.attr1, H_FLIP_BIT, flag);
    }

    pub fn h_flip(&self) -> bool {
        return self.attr1 & H_FLIP_BIT != 0;
    }

    pub fn set_v_flip(&mut self, flag: bool) {
        self.attr1 = with_bit(self.attr1, V_FLIP_BIT, flag);
    }

    pub fn v_flip(&self) -> bool {
        return self.attr1 & V_FLIP_BIT != 0;
    }

    /// Returns the raw attribute words in OAM order.
    pub fn words(&self) -> [u16; 4] {
        return [self.attr0, self.attr1, self.attr2, self.attr3];
    }
}

fn with_bit(word: u16, bit: u16, flag: bool) -> u16 {
    if flag {
        return word | bit;
    } else {
        return word & !bit;
    }
}
