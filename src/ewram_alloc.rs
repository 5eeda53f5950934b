//! This module implements a simple allocator for external work RAM.
//! The heap itself comes from the linked_list_allocator crate; it's wrapped without a lock
//! because the GBA has no atomics to build one from.
//! WARNING: EWRAM is slow. Only use for allocations where this is acceptable.
//!
//! The only allocations happen while parsing the scene description at startup.

use core::alloc::{GlobalAlloc, Layout};
use core::cell::UnsafeCell;
use core::ptr::{self, NonNull};

use linked_list_allocator::Heap;

pub const EWRAM_BASE: usize = 0x200_0000;
pub const EWRAM_END: usize = 0x203_FFFF;
pub const EWRAM_SIZE: usize = EWRAM_END - EWRAM_BASE;

/// A heap implementing GlobalAlloc without using a lock.
///
/// # Safety
/// This is ONLY to be used in a single-threaded, single-CPU, `no_std` context,
/// and never from an interrupt handler.
pub struct RaceyHeap(UnsafeCell<Heap>);

impl RaceyHeap {
    /// Creates an empty heap. All allocate calls will fail.
    /// This is primarily useful for having a `static`-friendly object, which the `global_alloc` interface requires.
    /// In order for the allocator to actually be usable, you have to call `init()`.
    pub const fn empty() -> RaceyHeap {
        return RaceyHeap(UnsafeCell::new(Heap::empty()));
    }

    /// Hands the given memory region to the heap.
    ///
    /// # Safety
    ///
    /// This function must be called at most once, before the first allocation,
    /// and the region must not be used by anything else.
    pub unsafe fn init(&self, heap_start: usize, heap_size: usize) {
        (*self.0.get()).init(heap_start, heap_size);
    }
}

unsafe impl GlobalAlloc for RaceyHeap {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        return (*self.0.get())
            .allocate_first_fit(layout)
            .ok()
            .map_or(ptr::null_mut(), |allocation| allocation.as_ptr());
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        (*self.0.get()).deallocate(NonNull::new_unchecked(ptr), layout);
    }
}

/// This Sync "implementation" is incorrect and wildly unsafe if actually used concurrently.
/// The GBA is a single-processor, single-thread-of-execution system, and the heap is never
/// used from interrupt handlers, so there's nothing to race with.
unsafe impl Sync for RaceyHeap {}
