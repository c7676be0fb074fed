//! Dispatch keys for per-handle state.
//!
//! The loader writes a dispatch-table pointer into the first
//! pointer-sized word of every dispatchable handle. That word is shared by
//! an instance and its physical devices, and by a device and its queues,
//! which makes it the natural registry key: a hook handed a physical
//! device can find its instance record, and a hook handed a queue can
//! find its device record, without any extra bookkeeping.

use ash::vk::Handle;

/// Read the dispatch key of a dispatchable handle.
///
/// # Safety
/// `handle` must be a live dispatchable handle minted by the loader or
/// driver; its first pointer-sized word is read through an unaligned load
/// and never dereferenced further.
pub unsafe fn dispatch_key<H: Handle>(handle: H) -> usize {
    let ptr = handle.as_raw() as usize as *const usize;
    unsafe { ptr.read_unaligned() }
}

/// The raw handle value itself, used where distinct handles sharing one
/// dispatch table need distinct records (queues).
pub fn raw_key<H: Handle>(handle: H) -> usize {
    handle.as_raw() as usize
}

/// Resolve a function pointer through a next-layer getter, transmuting the
/// erased `PFN_vkVoidFunction` to its typed signature.
#[macro_export]
macro_rules! load_proc {
    ($getter:expr => $handle:expr, $name:literal : $ty:ty) => {
        ::core::mem::transmute::<::ash::vk::PFN_vkVoidFunction, ::core::option::Option<$ty>>(
            ($getter)($handle, $name.as_ptr()),
        )
    };
}
