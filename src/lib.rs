#![cfg_attr(not(test), no_std)]

//! `GrowVec`: a growable, contiguous, owning vector with explicit,
//! fallible allocation.
//!
//! `GrowVec` keeps its elements in a single heap allocation and tracks a
//! logical length alongside the allocated capacity. Appending is amortized
//! constant time under a strict doubling rule, access is by index or by
//! slice, and every operation that may allocate returns a `Result` instead
//! of aborting, leaving the vector exactly as it was when allocation fails.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! v.push(1).unwrap();
//! v.push(2).unwrap();
//! v.push(3).unwrap();
//!
//! assert_eq!(v.len(), 3);
//! assert_eq!(v[0], 1);
//! assert_eq!(v.pop(), Some(3));
//! assert_eq!(v.as_slice(), &[1, 2]);
//! ```
//!
//! # Capacity and Growth
//!
//! A full vector grows to `max(1, capacity * 2)` slots before the append,
//! so repeated pushes produce the capacity sequence `0, 1, 2, 4, 8, ...`.
//! Capacity only ever shrinks through [`GrowVec::shrink_to_fit`];
//! [`GrowVec::reserve`] reallocates to exactly the requested slot count.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! for i in 0..5 {
//!     v.push(i).unwrap();
//! }
//! assert_eq!(v.capacity(), 8);
//!
//! v.shrink_to_fit().unwrap();
//! assert_eq!(v.capacity(), 5);
//! ```
//!
//! # Failure Handling
//!
//! Two error conditions exist, both in [`GrowVecError`]:
//!
//! - `OutOfRange` from the checked accessors [`GrowVec::at`] and
//!   [`GrowVec::at_mut`];
//! - `AllocationFailure` from any operation that needs storage the
//!   allocator will not provide. The operation is abandoned and the
//!   vector keeps its previous length, capacity, and contents.
//!
//! Indexing through `v[i]` is the fast path and panics on out-of-bounds,
//! exactly like a slice; the `unsafe` [`GrowVec::get_unchecked`] tier skips
//! the check entirely and makes the `index < len` precondition the
//! caller's obligation.
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let v = GrowVec::from_slice(&[10, 20]).unwrap();
//! assert_eq!(v.at(1), Ok(&20));
//! assert_eq!(
//!     v.at(2),
//!     Err(GrowVecError::OutOfRange { index: 2, length: 2 })
//! );
//! ```
//!
//! # Performance Characteristics
//!
//! - `push()`: amortized O(1), worst case O(n) on growth
//! - `pop()`, `front()`, `back()`, indexing: O(1)
//! - `reserve(n)`, `resize(n)`, `shrink_to_fit()`: O(n) when they
//!   reallocate, O(1) otherwise
//! - `swap()`: O(1), no element moves
//! - iteration: O(n) over a contiguous buffer
//!
//! Element relocation during reallocation is a bitwise move; no element
//! type bound is required for any operation that only relocates.
//!
//! # Iterator Support
//!
//! Borrowed iteration is slice iteration, forward and reverse; consuming
//! iteration yields elements by value and releases the unyielded tail on
//! drop.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let v = GrowVec::from_slice(&[1, 2, 3]).unwrap();
//!
//! let forward: Vec<i32> = v.iter().copied().collect();
//! let reverse: Vec<i32> = v.iter_rev().copied().collect();
//! assert_eq!(forward, [1, 2, 3]);
//! assert_eq!(reverse, [3, 2, 1]);
//!
//! let owned: Vec<i32> = v.into_iter().collect();
//! assert_eq!(owned, [1, 2, 3]);
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and depends only on `core` and `alloc`. The
//! optional `std` feature exists for std-only integrations and enables no
//! additional API.

extern crate alloc;

mod cmp;
mod error;
mod index;
mod iter;
mod raw;
mod vec;

// Re-export public types and traits
pub use error::GrowVecError;
pub use iter::IntoIter;
pub use vec::GrowVec;
