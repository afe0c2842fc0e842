use crate::seq::Sequence;

/// Applies `f` to every element, returning the results in order. The output always has the same
/// length as the input.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::map;
/// let doubled = map(&[1, 2, 3], |v| v * 2);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub fn map<E, R>(seq: &[E], mut f: impl FnMut(&E) -> R) -> Vec<R> {
    map_index(seq, |v, _| f(v))
}

/// Like [`map`], but `f` also receives the index of each element.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::map_index;
/// let labelled = map_index(&["a", "b"], |v, i| format!("{i}:{v}"));
/// assert_eq!(labelled, ["0:a", "1:b"]);
/// ```
pub fn map_index<E, R>(seq: &[E], mut f: impl FnMut(&E, usize) -> R) -> Vec<R> {
    let mut result = Vec::with_capacity(seq.len());
    for (i, v) in seq.iter().enumerate() {
        result.push(f(v, i));
    }
    result
}

/// Returns a new sequence of the same flavor holding clones of the elements for which `pred`
/// returned true, in their original order.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::filter;
/// let evens = filter(&vec![1, 2, 3, 4], |v| v % 2 == 0);
/// assert_eq!(evens, [2, 4]);
/// ```
pub fn filter<S>(seq: &S, mut pred: impl FnMut(&S::Elem) -> bool) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    filter_index(seq, |v, _| pred(v))
}

/// Like [`filter`], but `pred` also receives the index of each element.
pub fn filter_index<S>(seq: &S, mut pred: impl FnMut(&S::Elem, usize) -> bool) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    S::from_elems(
        seq.as_slice()
            .iter()
            .enumerate()
            .filter(|(i, v)| pred(v, *i))
            .map(|(_, v)| v.clone()),
    )
}

/// Calls `f` once for each element, in ascending index order.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::for_each;
/// let mut sum = 0;
/// for_each(&[1, 2, 3], |v| sum += v);
/// assert_eq!(sum, 6);
/// ```
pub fn for_each<E>(seq: &[E], mut f: impl FnMut(&E)) {
    for_each_index(seq, |v, _| f(v))
}

/// Like [`for_each`], but `f` also receives the index of each element.
pub fn for_each_index<E>(seq: &[E], mut f: impl FnMut(&E, usize)) {
    for (i, v) in seq.iter().enumerate() {
        f(v, i);
    }
}

/// Returns true if `pred` holds for at least one element. Stops at the first match, so `pred` is
/// never called on the elements after it. Always false for an empty sequence.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::some;
/// assert!(some(&[1, 2, 3], |v| *v == 2));
/// assert!(!some(&[] as &[u8], |_| true));
/// ```
pub fn some<E>(seq: &[E], mut pred: impl FnMut(&E) -> bool) -> bool {
    some_index(seq, |v, _| pred(v))
}

/// Like [`some`], but `pred` also receives the index of each element.
pub fn some_index<E>(seq: &[E], mut pred: impl FnMut(&E, usize) -> bool) -> bool {
    for (i, v) in seq.iter().enumerate() {
        if pred(v, i) {
            return true;
        }
    }
    false
}

/// Returns true if `pred` holds for every element. Stops at the first failure, so `pred` is never
/// called on the elements after it. Always true for an empty sequence.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::every;
/// assert!(every(&[2, 4, 6], |v| v % 2 == 0));
/// assert!(every(&[] as &[u8], |_| false));
/// ```
pub fn every<E>(seq: &[E], mut pred: impl FnMut(&E) -> bool) -> bool {
    every_index(seq, |v, _| pred(v))
}

/// Like [`every`], but `pred` also receives the index of each element.
pub fn every_index<E>(seq: &[E], mut pred: impl FnMut(&E, usize) -> bool) -> bool {
    for (i, v) in seq.iter().enumerate() {
        if !pred(v, i) {
            return false;
        }
    }
    true
}

/// Folds the sequence from left to right, starting with `initial`. An empty sequence returns
/// `initial` untouched.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::reduce;
/// let joined = reduce(&["a", "b", "c"], |acc, v| acc + *v, String::new());
/// assert_eq!(joined, "abc");
/// ```
pub fn reduce<E, R>(seq: &[E], mut f: impl FnMut(R, &E) -> R, initial: R) -> R {
    reduce_index(seq, |acc, v, _| f(acc, v), initial)
}

/// Like [`reduce`], but `f` also receives the index of each element.
pub fn reduce_index<E, R>(seq: &[E], mut f: impl FnMut(R, &E, usize) -> R, initial: R) -> R {
    let mut acc = initial;
    for (i, v) in seq.iter().enumerate() {
        acc = f(acc, v, i);
    }
    acc
}

/// Folds the sequence from right to left, starting with `initial` and the last element. An empty
/// sequence returns `initial` untouched.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::reduce_right;
/// let joined = reduce_right(&["a", "b", "c"], |acc, v| acc + *v, String::new());
/// assert_eq!(joined, "cba");
/// ```
pub fn reduce_right<E, R>(seq: &[E], mut f: impl FnMut(R, &E) -> R, initial: R) -> R {
    reduce_right_index(seq, |acc, v, _| f(acc, v), initial)
}

/// Like [`reduce_right`], but `f` also receives the index each element has in the input, so the
/// indices seen count down from `len - 1` to `0`.
pub fn reduce_right_index<E, R>(
    seq: &[E],
    mut f: impl FnMut(R, &E, usize) -> R,
    initial: R,
) -> R {
    let mut acc = initial;
    for (i, v) in seq.iter().enumerate().rev() {
        acc = f(acc, v, i);
    }
    acc
}

/// Maps every element to a sequence of results and concatenates them, in order, into a single
/// flat [`Vec`]. Only one level is flattened.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::flat_map;
/// let out = flat_map(&[1, 2, 3], |v| ["x".to_string(), v.to_string()]);
/// assert_eq!(out, ["x", "1", "x", "2", "x", "3"]);
/// ```
pub fn flat_map<E, I>(seq: &[E], mut f: impl FnMut(&E) -> I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    flat_map_index(seq, |v, _| f(v))
}

/// Like [`flat_map`], but `f` also receives the index of each element.
pub fn flat_map_index<E, I>(seq: &[E], mut f: impl FnMut(&E, usize) -> I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    let mut result = Vec::with_capacity(seq.len());
    for (i, v) in seq.iter().enumerate() {
        result.extend(f(v, i));
    }
    result
}
