// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` + `alloc`, growable, heap-backed array with exclusive ownership,
//! **with no `unsafe`**.
//!
//! The crate is two layers:
//!
//! - [`OwningBuffer<T>`] exclusively owns zero or one heap block of `T`. It
//!   allocates, frees, indexes, and transfers ownership (take, release,
//!   swap). It has no notion of a logical length and cannot be cloned.
//! - [`DynamicArray<T>`] owns one `OwningBuffer` and adds a logical length
//!   `len <= capacity`, a growth policy, insertion/removal, and value
//!   semantics (deep clone, move-out, equality, lexicographic ordering).
//!
//! ## Storage model
//!
//! Every allocated slot holds a constructed `T`. Slots `[0, len)` are live;
//! slots `[len, capacity)` are dead: allocated, holding some value (usually
//! `T::default()`), but never visible through the API. `clear`, `truncate`,
//! and `erase` only move `len`, so dead slots may keep old values alive until
//! they are overwritten or the buffer is freed.
//!
//! ## Growth policy
//!
//! - `push`/`insert`/`resize` past capacity grow to
//!   `max(capacity * 2, required)`: `0 → 1 → 2 → 4 → 8 …` for pushes.
//! - `reserve(n)` allocates exactly `n` and never shrinks.
//! - Growth allocates first, then moves the live prefix across, then swaps
//!   ownership, so the `try_*` methods leave the array untouched when
//!   allocation fails ([`Error::AllocFailed`]).
//!
//! ## Errors and panics
//!
//! - [`DynamicArray::at`] returns [`Error::OutOfRange`] for `index >= len`.
//! - Indexing (`v[i]`, `v[a..b]`), `insert` past `len`, and `erase` of a
//!   non-live index **panic**, like `Vec`.
//! - `pop` on an empty array returns `None`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynamicArray<T>`
//!     (`T: Deserialize<'de> + Default` for deserialization).
//!
//! ## Logging
//!
//! Reallocations, block releases, and refused allocations emit `tracing`
//! events under the `dynamic_array` target. Nothing is recorded unless the
//! application installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::{dyn_array, reserve, DynamicArray};
//!
//! let mut v: DynamicArray<u8> = DynamicArray::from(reserve(4));
//! assert_eq!((v.len(), v.capacity()), (0, 4));
//!
//! v.extend_from_slice(&[1, 2, 3]);
//! v.insert(0, 0);
//! assert_eq!(v, dyn_array![0, 1, 2, 3]);
//!
//! v.push(4); // at capacity: 4 → 8
//! assert_eq!(v.capacity(), 8);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod hint;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use buffer::OwningBuffer;
pub use error::Error;
pub use hint::{reserve, CapacityHint};
pub use iter::IntoIter;
pub use vec::DynamicArray;

/// Creates a [`DynamicArray`] from a literal sequence or a value and a count,
/// like `vec!`.
///
/// - `dyn_array![a, b, c]`: `len == capacity == 3`, elements in order.
/// - `dyn_array![value; n]`: `n` clones of `value`.
/// - `dyn_array![]`: empty, nothing allocated.
///
/// ```rust
/// use dynamic_array::dyn_array;
///
/// let v = dyn_array![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = dyn_array![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
