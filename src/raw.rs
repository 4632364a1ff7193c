use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};

use crate::error::GrowVecError;

/// Owned storage for `cap` elements of `T`.
///
/// The buffer frees its allocation on drop but never runs element
/// destructors; the owner is responsible for the initialized prefix.
/// Zero-sized element types never allocate and report the maximum capacity.
#[derive(Debug)]
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// An unallocated buffer.
    pub(crate) const fn new() -> Self {
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for exactly `cap` elements.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the layout for `cap`
    /// elements is not representable or the allocator refuses the request.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, GrowVecError> {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(cap)
            .map_err(|_| GrowVecError::AllocationFailure { capacity: cap })?;
        // SAFETY: `T` is not zero-sized and `cap > 0`, so `layout` has
        // non-zero size.
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                cap,
                _marker: PhantomData,
            }),
            None => Err(GrowVecError::AllocationFailure { capacity: cap }),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    #[allow(clippy::expect_used)]
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        let layout = Layout::array::<T>(self.cap).expect("layout validated at allocation time");
        // SAFETY: the pointer came from `alloc` with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}
