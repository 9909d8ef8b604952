//! In-place unstable quicksort for late-bound, dynamically typed
//! collections.
//!
//! The sequence being sorted is not owned by the sorter: it lives behind a
//! [`Dispatch`] implementation and is reachable only through two named
//! member operations, an element getter and an element setter, resolved
//! once before sorting starts. Elements are tagged [`Variant`] values and
//! the ordering comes from a caller-supplied three-way comparator.
//!
//! The engine itself only sees [`ElementAccess`], a zero-based, fallible
//! get/set capability. [`DispatchAdapter`] implements it on top of the
//! member protocol (including the protocol's one-based indexing), and
//! [`SliceAccess`] implements it directly over local memory.
//!
//! The sort is unstable and in-place; the first failed element access
//! aborts it, leaving the collection in whatever partially permuted state
//! existed at that moment.
//!
//! ```
//! use dispsort::value::numeric_order;
//! use dispsort::{Variant, VariantArray};
//!
//! let mut collection = VariantArray::from_values([5, 3, 8, 1, 9, 2]);
//! dispsort::sort(&mut collection, 6, numeric_order)?;
//!
//! let sorted: Vec<Variant> = [1, 2, 3, 5, 8, 9].into_iter().map(Variant::from).collect();
//! assert_eq!(collection.values(), sorted);
//! # Ok::<(), dispsort::SortError>(())
//! ```

use core::cmp::Ordering;

pub mod access;
pub mod dispatch;
pub mod error;
pub mod patterns;
pub mod value;

mod quicksort;

pub use access::{DispatchAdapter, ElementAccess, SliceAccess};
pub use dispatch::{Dispatch, MemberId, VariantArray};
pub use error::{AccessError, BindError, SortError};
pub use value::{ObjectRef, Variant, VariantKind};

/// Sorts the first `len` elements of a foreign collection.
///
/// Resolves the collection's getter and setter members, then rearranges the
/// elements at indices `[0, len)` in place into non-decreasing order per
/// `compare`. Equal elements keep no particular relative order.
///
/// `compare` must establish a strict weak ordering over the elements for
/// the result to be sorted; if it does not, the result is some unspecified
/// permutation of the input, without a crash and without losing elements.
///
/// # Errors
///
/// [`SortError::Bind`] if either member name fails to resolve; no element
/// is touched in that case. [`SortError::Access`] if any getter or setter
/// invocation fails mid-sort; the collection keeps the partial permutation
/// performed up to that point.
pub fn sort<C, F>(collection: &mut C, len: usize, compare: F) -> Result<(), SortError>
where
    C: Dispatch + ?Sized,
    F: FnMut(&Variant, &Variant) -> Ordering,
{
    let mut adapter = DispatchAdapter::bind(collection)?;
    quicksort::sort_by(&mut adapter, len, compare)
}

/// Sorts the first `len` elements behind an already bound accessor.
///
/// Same contract as [`sort`], minus the binding step. `len <= 1` succeeds
/// without touching the accessor at all.
pub fn sort_by<A, F>(access: &mut A, len: usize, compare: F) -> Result<(), SortError>
where
    A: ElementAccess + ?Sized,
    F: FnMut(&Variant, &Variant) -> Ordering,
{
    quicksort::sort_by(access, len, compare)
}
