//! Variants of the transform functions for callbacks that can fail.
//!
//! Each function stops calling its callback as soon as one returns [`Err`] and returns that error
//! as is. No error type of this crate is involved; `Err` is whatever the callback uses.

use crate::seq::Sequence;

/// Like [`map`](super::map), but stops at the first error.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::try_map;
/// let parsed: Result<Vec<u8>, _> = try_map(&["1", "2"], |v| v.parse::<u8>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed = try_map(&["1", "x", "3"], |v| v.parse::<u8>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<E, R, Err>(
    seq: &[E],
    mut f: impl FnMut(&E) -> Result<R, Err>,
) -> Result<Vec<R>, Err> {
    let mut result = Vec::with_capacity(seq.len());
    for v in seq {
        result.push(f(v)?);
    }
    Ok(result)
}

/// Like [`filter`](super::filter), but stops at the first error.
pub fn try_filter<S, Err>(
    seq: &S,
    mut pred: impl FnMut(&S::Elem) -> Result<bool, Err>,
) -> Result<S, Err>
where
    S: Sequence,
    S::Elem: Clone,
{
    let mut kept = Vec::new();
    for v in seq.as_slice() {
        if pred(v)? {
            kept.push(v.clone());
        }
    }
    Ok(S::from_elems(kept))
}

/// Like [`for_each`](super::for_each), but stops at the first error.
pub fn try_for_each<E, Err>(seq: &[E], mut f: impl FnMut(&E) -> Result<(), Err>) -> Result<(), Err> {
    for v in seq {
        f(v)?;
    }
    Ok(())
}

/// Like [`reduce`](super::reduce), but stops at the first error.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::try_reduce;
/// let sum = try_reduce(&[200_u8, 50, 10], |acc: u8, v| acc.checked_add(*v).ok_or(*v), 0);
/// assert_eq!(sum, Err(10));
/// ```
pub fn try_reduce<E, R, Err>(
    seq: &[E],
    mut f: impl FnMut(R, &E) -> Result<R, Err>,
    initial: R,
) -> Result<R, Err> {
    let mut acc = initial;
    for v in seq {
        acc = f(acc, v)?;
    }
    Ok(acc)
}

/// Like [`reduce_right`](super::reduce_right), but stops at the first error.
pub fn try_reduce_right<E, R, Err>(
    seq: &[E],
    mut f: impl FnMut(R, &E) -> Result<R, Err>,
    initial: R,
) -> Result<R, Err> {
    let mut acc = initial;
    for v in seq.iter().rev() {
        acc = f(acc, v)?;
    }
    Ok(acc)
}

/// Like [`flat_map`](super::flat_map), but stops at the first error.
pub fn try_flat_map<E, I, Err>(
    seq: &[E],
    mut f: impl FnMut(&E) -> Result<I, Err>,
) -> Result<Vec<I::Item>, Err>
where
    I: IntoIterator,
{
    let mut result = Vec::with_capacity(seq.len());
    for v in seq {
        result.extend(f(v)?);
    }
    Ok(result)
}
