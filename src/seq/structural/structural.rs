use std::iter;

use crate::seq::Sequence;
use crate::util::logging::trace;

/// Returns a new sequence with `values` in front of the elements of `seq`. The values keep the
/// order they were given in.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::unshift;
/// assert_eq!(unshift(&vec![3, 4], [1, 2]), [1, 2, 3, 4]);
/// ```
pub fn unshift<S>(seq: &S, values: impl IntoIterator<Item = S::Elem>) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    S::from_elems(values.into_iter().chain(seq.as_slice().iter().cloned()))
}

/// Appends `values` after the elements of `seq`.
///
/// The sequence is taken by value, so its storage may be reused for the result. Whether it is
/// depends on the flavor (see [`Sequence::append_owned`]); a caller that still needs the original
/// should pass a clone.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::push;
/// assert_eq!(push(vec![1, 2], [3, 4]), [1, 2, 3, 4]);
/// ```
pub fn push<S>(seq: S, values: impl IntoIterator<Item = S::Elem>) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    seq.append_owned(values)
}

/// Returns a new sequence without the first element. An empty input gives an empty output.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::shift;
/// assert_eq!(shift(&vec![1, 2, 3]), [2, 3]);
/// assert!(shift(&Vec::<u8>::new()).is_empty());
/// ```
pub fn shift<S>(seq: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    match seq.as_slice().split_first() {
        Some((_, rest)) => S::from_elems(rest.iter().cloned()),
        None => S::from_elems(iter::empty()),
    }
}

/// Returns a new sequence without the last element. An empty input gives an empty output.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::pop;
/// assert_eq!(pop(&vec![1, 2, 3]), [1, 2]);
/// assert!(pop(&Vec::<u8>::new()).is_empty());
/// ```
pub fn pop<S>(seq: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    match seq.as_slice().split_last() {
        Some((_, rest)) => S::from_elems(rest.iter().cloned()),
        None => S::from_elems(iter::empty()),
    }
}

/// Returns a new sequence with the elements in reverse order. The input is left as it was.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::reverse;
/// let raw = vec![1, 2, 3];
/// assert_eq!(reverse(&raw), [3, 2, 1]);
/// assert_eq!(reverse(&reverse(&raw)), raw);
/// ```
pub fn reverse<S>(seq: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    S::from_elems(seq.as_slice().iter().rev().cloned())
}

/// Concatenates a sequence of sequences into one, removing exactly one level of nesting. The result
/// has the flavor of the inner sequences.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::flat;
/// let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
/// assert_eq!(flat(&nested), [1, 2, 3, 4, 5]);
/// ```
pub fn flat<S>(seq: &[S]) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    let total = seq.iter().map(Sequence::len).sum();
    let mut result = Vec::with_capacity(total);
    for inner in seq {
        result.extend_from_slice(inner.as_slice());
    }
    S::from_elems(result)
}

/// Removes `delete_count` elements starting at `start` and inserts `values` in their place,
/// returning the result as a new sequence.
///
/// Out of range arguments are normalized rather than rejected:
/// - a negative `start` is treated as `0`,
/// - a `start` past the end is treated as the length, so `values` are appended,
/// - a deletion window running past the end stops at the end.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::splice;
/// let raw = vec![1, 2, 3, 4, 5];
/// assert_eq!(splice(&raw, 1, 2, [9, 9]), [1, 9, 9, 4, 5]);
/// assert_eq!(splice(&raw, -4, 1, [0]), [0, 2, 3, 4, 5]);
/// assert_eq!(splice(&raw, 10, 3, [6]), [1, 2, 3, 4, 5, 6]);
/// assert_eq!(splice(&raw, 3, usize::MAX, []), [1, 2, 3]);
/// ```
pub fn splice<S>(
    seq: &S,
    start: isize,
    delete_count: usize,
    values: impl IntoIterator<Item = S::Elem>,
) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    let slice = seq.as_slice();
    let (start, end) = splice_window(slice.len(), start, delete_count);

    S::from_elems(
        slice[..start]
            .iter()
            .cloned()
            .chain(values)
            .chain(slice[end..].iter().cloned()),
    )
}

/// Normalizes a splice request against a sequence of length `len`, returning the half-open range
/// of indices to remove. The range always satisfies `start <= end <= len`.
pub(crate) fn splice_window(len: usize, start: isize, delete_count: usize) -> (usize, usize) {
    let clamped = usize::try_from(start).unwrap_or(0).min(len);
    if usize::try_from(start).ok() != Some(clamped) {
        trace!("splice start {} clamped to {} (len {})", start, clamped, len);
    }

    let end = clamped.saturating_add(delete_count).min(len);
    if end - clamped != delete_count {
        trace!("splice deletes {} of {} requested elements", end - clamped, delete_count);
    }

    (clamped, end)
}
