//! Partition based in-place sorting over an [`ElementAccess`] boundary.
//!
//! Every element read and write is a dispatched, fallible call, so the cost
//! model is inverted compared to a slice sort: accesses dominate, not
//! comparisons. The partition scheme is plain Lomuto around the last
//! element, spending one `get` per probed element and swapping only where
//! an element actually moves.

use core::cmp::Ordering;

use crate::access::ElementAccess;
use crate::error::SortError;
use crate::value::Variant;

pub(crate) fn sort_by<A, F>(access: &mut A, len: usize, mut compare: F) -> Result<(), SortError>
where
    A: ElementAccess + ?Sized,
    F: FnMut(&Variant, &Variant) -> Ordering,
{
    if len < 2 {
        return Ok(());
    }

    quicksort(access, 0, len - 1, &mut compare)
}

/// Sorts the inclusive range `low..=high`.
///
/// Recurses into the smaller partition and loops on the larger one, which
/// keeps the stack depth logarithmic even on already sorted or adversarial
/// input.
fn quicksort<A, F>(
    access: &mut A,
    mut low: usize,
    mut high: usize,
    compare: &mut F,
) -> Result<(), SortError>
where
    A: ElementAccess + ?Sized,
    F: FnMut(&Variant, &Variant) -> Ordering,
{
    while low < high {
        let pivot_index = partition(access, low, high, compare)?;

        let below = pivot_index - low;
        let above = high - pivot_index;

        if below < above {
            if below != 0 {
                quicksort(access, low, pivot_index - 1, compare)?;
            }
            low = pivot_index + 1;
        } else {
            if above != 0 {
                quicksort(access, pivot_index + 1, high, compare)?;
            }
            if below == 0 {
                break;
            }
            high = pivot_index - 1;
        }
    }

    Ok(())
}

/// Lomuto partition around the element at `high`.
///
/// On return everything that compared strictly before the pivot sits in
/// `low..pivot_index`, the pivot sits at `pivot_index`, and the rest comes
/// after. Identity swaps are skipped, they would cost four dispatched calls
/// and move nothing.
fn partition<A, F>(
    access: &mut A,
    low: usize,
    high: usize,
    compare: &mut F,
) -> Result<usize, SortError>
where
    A: ElementAccess + ?Sized,
    F: FnMut(&Variant, &Variant) -> Ordering,
{
    let pivot = access.get(high)?;

    // First slot of the not-below-pivot region.
    let mut boundary = low;

    for probe in low..high {
        let elem = access.get(probe)?;
        if compare(&elem, &pivot) == Ordering::Less {
            if boundary != probe {
                swap_elements(access, boundary, probe)?;
            }
            boundary += 1;
        }
    }

    if boundary != high {
        swap_elements(access, boundary, high)?;
    }

    Ok(boundary)
}

/// Exchanges two elements through the access boundary: two gets, then two
/// sets. The whole tagged value moves, whatever kind it is.
fn swap_elements<A>(access: &mut A, i: usize, j: usize) -> Result<(), SortError>
where
    A: ElementAccess + ?Sized,
{
    let a = access.get(i)?;
    let b = access.get(j)?;
    access.set(i, b)?;
    access.set(j, a)?;
    Ok(())
}
