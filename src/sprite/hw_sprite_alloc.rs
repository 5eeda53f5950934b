//! This module provides the ability to manage objects (hardware sprites) in OAM.
//! The interface is allocator-like, with the ability to allocate and free sprites.
//!
//! All writes go to a shadow copy of OAM, which is copied to the hardware in one go
//! by `update_all()`. That should only happen during vblank.
//!
//! Heavily inspired by this article: https://www.gamasutra.com/view/feature/131491/gameboy_advance_resource_management.php?print=1
use core::slice;

use super::{HWSprite, HWSpriteAllocError, HWSpriteHandle, OFFSCREEN_POS};
use crate::debug_log::Subsystems::HWSprite as HWSpriteLog;
use crate::display::DisplayBackend;
use crate::shared_constants::{NUM_SLOTS, NUM_SLOT_GROUPS, SLOTS_PER_GROUP};

/// Number of u16 words in a complete attribute table.
pub const OAM_TABLE_WORDS: usize = NUM_SLOTS * 4;

/// An allocator for managing hardware sprite slots in OAM.
///
/// Free slots are tracked in a bitmap, one bit per slot, where a set bit means the slot is free.
/// Slot `n` of a group is stored in bit `31 - n`, so scanning for the most significant set bit
/// always yields the lowest free slot, and allocation order is the same on every run.
///
/// # Safety
///
/// This assumes that it's in complete control over OAM.
/// Writing to OAM without going through `update_all()` will be overwritten on the next frame.
pub struct HWSpriteAllocator {
    sprites: [HWSprite; NUM_SLOTS],
    free_slots: [u32; NUM_SLOT_GROUPS],
}

impl HWSpriteAllocator {
    /// Create a new allocator with every slot free and parked off screen.
    pub fn new() -> HWSpriteAllocator {
        return HWSpriteAllocator {
            sprites: [HWSprite::hidden(); NUM_SLOTS],
            free_slots: [u32::MAX; NUM_SLOT_GROUPS],
        };
    }

    /// Allocate a slot in OAM.
    ///
    /// The slot keeps whatever attributes it had when it was last freed,
    /// except for the position, which is off screen.
    ///
    /// # Errors
    /// Returns `HWSpriteAllocError::OAMFull` if every slot is taken.
    pub fn alloc(&mut self) -> Result<HWSpriteHandle, HWSpriteAllocError> {
        for (group_index, group) in self.free_slots.iter_mut().enumerate() {
            if *group != 0 {
                let bit = group.leading_zeros() as usize;
                *group &= !slot_bit(bit);
                let oam_slot = (group_index * SLOTS_PER_GROUP) + bit;
                debug_log!(HWSpriteLog, "Allocated OAM slot #{}", oam_slot);
                return Ok(HWSpriteHandle { oam_slot: oam_slot });
            }
        }
        debug_log!(HWSpriteLog, "OAM exhausted");
        return Err(HWSpriteAllocError::OAMFull);
    }

    /// Drop the allocation of the given sprite.
    /// The slot is moved off screen, so it stays invisible until it's handed out again.
    ///
    /// Passing a handle obtained from a different allocator is a bug.
    pub fn free(&mut self, handle: HWSpriteHandle) {
        let oam_slot = handle.oam_slot;
        debug_assert!(
            !self.is_free(oam_slot),
            "Freeing OAM slot #{} which is not allocated",
            oam_slot
        );

        self.sprites[oam_slot].set_pos(OFFSCREEN_POS.0, OFFSCREEN_POS.1);

        self.free_slots[oam_slot / SLOTS_PER_GROUP] |= slot_bit(oam_slot % SLOTS_PER_GROUP);
        debug_log!(HWSpriteLog, "Freed OAM slot #{}", oam_slot);
    }

    /// Returns the attributes of an allocated sprite.
    pub fn sprite(&self, handle: &HWSpriteHandle) -> &HWSprite {
        return &self.sprites[handle.oam_slot];
    }

    /// Returns the attributes of an allocated sprite for modification.
    /// Changes become visible on the next `update_all()`.
    pub fn sprite_mut(&mut self, handle: &HWSpriteHandle) -> &mut HWSprite {
        return &mut self.sprites[handle.oam_slot];
    }

    /// Whether the given slot is currently unallocated.
    pub fn is_free(&self, oam_slot: usize) -> bool {
        let group = self.free_slots[oam_slot / SLOTS_PER_GROUP];
        return group & slot_bit(oam_slot % SLOTS_PER_GROUP) != 0;
    }

    /// Number of slots still available.
    pub fn num_free(&self) -> usize {
        return self
            .free_slots
            .iter()
            .map(|group| group.count_ones() as usize)
            .sum();
    }

    /// The complete shadow OAM, in the layout the hardware expects.
    pub fn as_words(&self) -> &[u16] {
        // HWSprite is repr(C) and consists of exactly 4 u16's, so the array has no padding.
        unsafe { slice::from_raw_parts(self.sprites.as_ptr() as *const u16, OAM_TABLE_WORDS) }
    }

    /// Copies the whole shadow OAM to the display.
    ///
    /// This is the only point at which changes to sprites become visible.
    /// Call it right after waiting for vblank.
    pub fn update_all<D: DisplayBackend>(&self, display: &mut D) {
        display.publish_attributes(self.as_words());
    }
}

impl Default for HWSpriteAllocator {
    fn default() -> Self {
        return HWSpriteAllocator::new();
    }
}

/// The bit of a group that tracks the slot at the given position within the group.
fn slot_bit(position_in_group: usize) -> u32 {
    return 1 << (SLOTS_PER_GROUP - 1 - position_in_group);
}
