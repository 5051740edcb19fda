//! In-place bubble sort.

/// Sort `values` ascending in place and return the same slice.
///
/// Each pass bubbles the largest remaining element to the end of the unsorted
/// prefix. A pass without swaps means the slice is sorted and ends the loop
/// early, so already-sorted input costs a single pass.
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) -> &mut [T] {
    let len = values.len();
    if len < 2 {
        return values;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    values
}
