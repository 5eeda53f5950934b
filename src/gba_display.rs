//! `DisplayBackend` for real hardware (and emulators).
//!
//! Registers and video memory are accessed through the `gba` crate. Bulk
//! copies into object VRAM and OAM go through DMA channel 3.

use core::ffi::c_void;

use gba::prelude::*;

use crate::debug_log::Subsystems::Display;
use crate::display::{Color, DisplayBackend, DisplayMode, Tile4};
use crate::sprite::OAM_TABLE_WORDS;

/// Number of 4bpp tiles fitting into the two object charblocks.
const OBJ_TILES_MAX: usize = 1024;
/// Number of entries in the object palette.
const OBJ_PALETTE_SIZE: usize = 256;
/// Words per 4bpp tile.
const TILE4_WORDS: usize = 8;

/// The GBA's display.
///
/// # Safety
///
/// Only a single instance may exist, and nothing else may touch object VRAM,
/// the object palette, OAM or DMA channel 3 while it does.
pub struct GbaDisplay {
    _private: (),
}

impl GbaDisplay {
    /// # Safety
    ///
    /// See the type level docs.
    pub unsafe fn new() -> GbaDisplay {
        return GbaDisplay { _private: () };
    }
}

/// Copies `count` units from `src` to `dest` with a single immediate DMA3 transfer.
///
/// # Safety
///
/// Both regions must be valid for `count` units of the chosen width.
unsafe fn dma3_copy(src: *const c_void, dest: *mut c_void, count: usize, words: bool) {
    DMA3_SRC.write(src);
    DMA3_DEST.write(dest);
    DMA3_COUNT.write(count as u16);
    DMA3_CONTROL.write(DmaControl::new().with_enabled(true).with_transfer_32bit(words));
}

impl DisplayBackend for GbaDisplay {
    fn set_display_mode(&mut self, mode: DisplayMode) {
        debug_log!(Display, "DISPCNT = {:#06x}", mode.bits());
        DISPCNT.write(
            DisplayControl::new()
                .with_video_mode(VideoMode::_0)
                .with_obj_vram_1d(mode.obj_1d_mapping())
                .with_show_obj(mode.objects_enabled()),
        );
    }

    fn upload_obj_tiles(&mut self, first_tile: usize, tiles: &[Tile4]) {
        if first_tile + tiles.len() > OBJ_TILES_MAX {
            panic!(
                "Attempt to write {} tiles starting at object tile slot {}",
                tiles.len(),
                first_tile
            );
        }
        if tiles.is_empty() {
            return;
        }
        // VRAM ignores 8 bit writes, so whole words are transferred
        let dest_addr = OBJ_TILES.index(first_tile).as_usize();
        unsafe {
            dma3_copy(
                tiles.as_ptr().cast(),
                dest_addr as *mut c_void,
                tiles.len() * TILE4_WORDS,
                true,
            );
        }
    }

    fn write_obj_palette(&mut self, index: usize, color: Color) {
        if index >= OBJ_PALETTE_SIZE {
            panic!("Attempt to write object palette entry #{}", index);
        }
        OBJ_PALETTE.index(index).write(gba::video::Color(color.0));
    }

    fn write_backdrop(&mut self, color: Color) {
        BACKDROP_COLOR.write(gba::video::Color(color.0));
    }

    fn publish_attributes(&mut self, table: &[u16]) {
        if table.len() > OAM_TABLE_WORDS {
            panic!("Attempt to copy {} words into OAM", table.len());
        }
        if table.is_empty() {
            return;
        }
        unsafe {
            dma3_copy(
                table.as_ptr().cast(),
                OBJ_ATTR_ALL.as_usize() as *mut c_void,
                table.len(),
                false,
            );
        }
    }

    fn await_vblank(&mut self) {
        VBlankIntrWait();
    }

    fn enable_vblank_interrupt(&mut self) {
        debug_log!(Display, "Enabling vblank interrupt");
        DISPSTAT.write(DisplayStatus::new().with_irq_vblank(true));
        IE.write(IrqBits::VBLANK);
        IME.write(true);
    }
}
