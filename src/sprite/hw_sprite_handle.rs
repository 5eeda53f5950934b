/// A handle to a hardware sprite slot allocated in the shadow OAM.
///
/// The handle is the only way to reach an allocated slot, and it's consumed by
/// `HWSpriteAllocator::free()`, so a freed slot can't be touched through it again.
#[derive(Debug, PartialEq, Eq)]
pub struct HWSpriteHandle {
    pub(super) oam_slot: usize,
}

impl HWSpriteHandle {
    /// Index of the OAM slot backing this sprite.
    pub fn slot(&self) -> usize {
        return self.oam_slot;
    }
}
