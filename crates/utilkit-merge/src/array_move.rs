//! Relocating a single item inside a sequence.
//!
//! Indices may be negative, counting from the end (`-1` is the last item).
//! An out-of-range source index leaves the sequence as it was.

/// Clone `items` and move the item at `from` so that it ends up at `to`.
///
/// # Examples
///
/// ```
/// use utilkit_merge::array_move_immutable;
///
/// let input = ["a", "b", "c"];
/// assert_eq!(array_move_immutable(&input, 1, 2), vec!["a", "c", "b"]);
/// assert_eq!(array_move_immutable(&input, -1, 0), vec!["c", "a", "b"]);
/// assert_eq!(array_move_immutable(&input, 99, 0), vec!["a", "b", "c"]);
/// ```
pub fn array_move_immutable<T: Clone>(items: &[T], from: isize, to: isize) -> Vec<T> {
    let mut moved = items.to_vec();
    array_move_mutable(&mut moved, from, to);
    moved
}

/// Move the item at `from` to `to` in place.
///
/// `to` is resolved against the length before removal. A target past the end
/// appends; a target that is still negative after resolution counts from the
/// end of the shortened sequence, stopping at the front.
pub fn array_move_mutable<T>(items: &mut Vec<T>, from: isize, to: isize) {
    let len = items.len() as isize;
    let start = if from < 0 { len + from } else { from };
    if start < 0 || start >= len {
        return;
    }

    let end = if to < 0 { len + to } else { to };
    let item = items.remove(start as usize);

    let remaining = items.len() as isize;
    let insert_at = if end < 0 {
        (remaining + end).max(0)
    } else {
        end.min(remaining)
    };
    items.insert(insert_at as usize, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_forward() {
        assert_eq!(array_move_immutable(&["a", "b", "c"], 1, 2), ["a", "c", "b"]);
        assert_eq!(array_move_immutable(&[1, 2, 3, 4], 0, 3), [2, 3, 4, 1]);
    }

    #[test]
    fn moves_backward() {
        assert_eq!(array_move_immutable(&[1, 2, 3, 4], 3, 0), [4, 1, 2, 3]);
    }

    #[test]
    fn negative_indices_count_from_end() {
        assert_eq!(array_move_immutable(&[1, 2, 3], -1, 0), [3, 1, 2]);
        assert_eq!(array_move_immutable(&[1, 2, 3], 0, -1), [2, 3, 1]);
        assert_eq!(array_move_immutable(&[1, 2, 3, 4], -2, -4), [3, 1, 2, 4]);
    }

    #[test]
    fn out_of_bounds_source_is_noop() {
        let input = vec!["a", "b", "c"];
        assert_eq!(array_move_immutable(&input, 99, 0), input);
        assert_eq!(array_move_immutable(&input, -4, 0), input);
    }

    #[test]
    fn target_past_end_appends() {
        assert_eq!(array_move_immutable(&[1, 2, 3], 0, 10), [2, 3, 1]);
    }

    #[test]
    fn target_far_before_start_goes_first() {
        assert_eq!(array_move_immutable(&[1, 2, 3], 2, -10), [3, 1, 2]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![String::from("a"), String::from("b")];
        let moved = array_move_immutable(&input, 0, 1);
        assert_eq!(input, ["a", "b"]);
        assert_eq!(moved, ["b", "a"]);
    }

    #[test]
    fn empty_sequence() {
        let empty: Vec<u8> = Vec::new();
        assert!(array_move_immutable(&empty, 0, 0).is_empty());
    }
}
