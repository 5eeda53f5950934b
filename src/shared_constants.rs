//! Constants used in multiple modules.

/// Screen height in pixels
pub const SCREEN_HEIGHT: i16 = 160;
/// Screen width in pixels
pub const SCREEN_WIDTH: i16 = 240;
/// Width of a single (8x8) object in pixels
pub const SPRITE_WIDTH: i16 = 8;

/// Number of attribute slots in OAM
pub const NUM_SLOTS: usize = 128;
/// Number of slots tracked by a single word of the free bitmap
pub const SLOTS_PER_GROUP: usize = 32;
/// Number of words making up the free bitmap
pub const NUM_SLOT_GROUPS: usize = (NUM_SLOTS + SLOTS_PER_GROUP - 1) / SLOTS_PER_GROUP;

/// Number of distinct tiles generated for the gradient pattern
pub const NUM_GRADIENT_TILES: usize = 16;
/// Number of hues (and therefore object palette banks) set up at startup
pub const NUM_HUES: usize = 6;
/// Number of colors in a single 4bpp palette bank
pub const COLORS_PER_BANK: usize = 16;
