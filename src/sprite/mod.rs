mod error;
mod hw_sprite;
mod hw_sprite_alloc;
mod hw_sprite_handle;
pub use error::HWSpriteAllocError;
pub use hw_sprite::{HWSprite, OFFSCREEN_POS};
pub use hw_sprite_alloc::{HWSpriteAllocator, OAM_TABLE_WORDS};
pub use hw_sprite_handle::HWSpriteHandle;
