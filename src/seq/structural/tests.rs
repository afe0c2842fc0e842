#![cfg(test)]

use std::rc::Rc;
use std::sync::Arc;

use super::*;
use super::structural::splice_window;
use crate::seq::Sequence;

#[test]
fn test_unshift_and_push() {
    let raw = vec![3, 4];
    assert_eq!(unshift(&raw, [1, 2]), [1, 2, 3, 4]);
    assert_eq!(raw, [3, 4], "Unshift shouldn't modify the input.");
    assert_eq!(unshift(&raw, []), raw);

    assert_eq!(push(vec![1, 2], [3, 4]), [1, 2, 3, 4]);
    assert_eq!(push(Vec::new(), ["a"]), ["a"]);

    let shared: Arc<[char]> = Arc::from(['b']);
    let out = push(unshift(&shared, ['a']), ['c']);
    assert_eq!(&*out, &['a', 'b', 'c'], "Flavors without spare storage should be rebuilt.");
}

#[test]
fn test_shift_and_pop() {
    let raw = vec![1, 2, 3];
    assert_eq!(shift(&raw), [2, 3]);
    assert_eq!(pop(&raw), [1, 2]);
    assert_eq!(raw, [1, 2, 3], "Shift and pop shouldn't modify the input.");

    let empty: Vec<u8> = Vec::new();
    assert!(shift(&empty).is_empty(), "Shifting an empty sequence should give an empty one.");
    assert!(pop(&empty).is_empty(), "Popping an empty sequence should give an empty one.");

    let single: Box<[&str]> = Box::new(["only"]);
    assert!(shift(&single).is_empty());
    assert!(pop(&single).is_empty());
}

#[test]
fn test_reverse() {
    let raw = vec![1, 2, 3];
    assert_eq!(reverse(&raw), [3, 2, 1]);
    assert_eq!(raw, [1, 2, 3], "Reverse shouldn't modify the input.");
    assert_eq!(reverse(&reverse(&raw)), raw, "Reversing twice should give the input back.");
    assert!(reverse(&Vec::<u8>::new()).is_empty());

    let shared: Rc<[u8]> = Rc::from([1_u8, 2]);
    assert_eq!(&*reverse(&shared), &[2, 1]);
}

#[test]
fn test_flat() {
    let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
    assert_eq!(flat(&nested), [1, 2, 3, 4, 5]);

    let with_empty: Vec<Vec<u8>> = vec![vec![], vec![1], vec![]];
    assert_eq!(flat(&with_empty), [1], "Empty inner sequences should contribute nothing.");
    assert!(flat::<Vec<u8>>(&[]).is_empty());

    let boxed: [Box<[char]>; 2] = [Box::new(['a']), Box::new(['b', 'c'])];
    let out: Box<[char]> = flat(&boxed);
    assert_eq!(&*out, &['a', 'b', 'c'], "Flat should keep the flavor of the inner sequences.");

    let deep = vec![vec![vec![1], vec![2]], vec![vec![3]]];
    assert_eq!(
        flat(&deep),
        [vec![1], vec![2], vec![3]],
        "Only one level of nesting should be removed."
    );
}

#[test]
fn test_splice() {
    let raw = vec![1, 2, 3, 4, 5];
    assert_eq!(splice(&raw, 1, 2, [9, 9]), [1, 9, 9, 4, 5]);
    assert_eq!(raw, [1, 2, 3, 4, 5], "Splice shouldn't modify the input.");

    assert_eq!(splice(&raw, 0, 0, [0]), [0, 1, 2, 3, 4, 5], "Zero deletions should only insert.");
    assert_eq!(splice(&raw, 2, 1, []), [1, 2, 4, 5], "No values should only delete.");
    assert_eq!(splice(&raw, 1, 1, [7, 8, 9]), [1, 7, 8, 9, 3, 4, 5]);
}

#[test]
fn test_splice_clamping() {
    let raw = vec![1, 2, 3];
    assert_eq!(splice(&raw, -1, 1, [0]), [0, 2, 3], "A negative start should clamp to 0.");
    assert_eq!(splice(&raw, isize::MIN, 0, [0]), [0, 1, 2, 3]);
    assert_eq!(splice(&raw, 3, 5, [4]), [1, 2, 3, 4], "Starting at the end should append.");
    assert_eq!(splice(&raw, 99, 1, [4]), [1, 2, 3, 4], "A start past the end should append.");
    assert_eq!(splice(&raw, 1, 99, []), [1], "The deletion window should stop at the end.");
    assert_eq!(splice(&raw, 2, usize::MAX, [9]), [1, 2, 9], "Huge counts shouldn't overflow.");

    let empty: Vec<u8> = Vec::new();
    assert_eq!(splice(&empty, -3, 3, [1, 2]), [1, 2]);
}

#[test]
fn test_splice_window() {
    assert_eq!(splice_window(5, 1, 2), (1, 3));
    assert_eq!(splice_window(5, -2, 2), (0, 2));
    assert_eq!(splice_window(5, 7, 2), (5, 5));
    assert_eq!(splice_window(5, 4, usize::MAX), (4, 5));
    assert_eq!(splice_window(0, 0, 0), (0, 0));
}

#[test]
fn test_output_is_independent() {
    let raw = vec![String::from("a"), String::from("b")];
    let mut out = shift(&raw);
    out[0].push('!');
    assert_eq!(raw[1], "b", "Mutating the output shouldn't affect the input.");
    assert_eq!(Sequence::len(&out), 1);
}
