use std::rc::Rc;
use std::sync::Arc;

/// An owned, contiguous, ordered container that can be rebuilt from its elements.
///
/// Functions that return "the same kind of sequence" as they were given are generic over this
/// trait, so filtering a `Box<[T]>` gives back a `Box<[T]>` and reversing an `Rc<[T]>` gives back
/// an `Rc<[T]>`. Reading is always done through [`as_slice`](Sequence::as_slice).
///
/// Implemented for [`Vec<T>`], `Box<[T]>`, `Rc<[T]>` and `Arc<[T]>`. Fixed size arrays can't be
/// rebuilt at an arbitrary length, so they are only accepted where a plain slice is enough.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::{Sequence, reverse};
/// let boxed: Box<[u8]> = Box::new([1, 2, 3]);
/// let out: Box<[u8]> = reverse(&boxed);
/// assert_eq!(out.as_slice(), &[3, 2, 1]);
/// ```
pub trait Sequence: Sized {
    /// The type of each element.
    type Elem;

    /// Returns the elements of the sequence as a slice.
    fn as_slice(&self) -> &[Self::Elem];

    /// Builds a sequence holding the provided elements, in order.
    fn from_elems<I: IntoIterator<Item = Self::Elem>>(elems: I) -> Self;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Consumes the sequence and returns it with `values` appended. Implementors are free to reuse
    /// the existing storage; the default rebuilds the sequence from clones of its elements.
    fn append_owned<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = Self::Elem>,
        Self::Elem: Clone,
    {
        Self::from_elems(self.as_slice().iter().cloned().chain(values))
    }
}

impl<T> Sequence for Vec<T> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn from_elems<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn append_owned<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Self::Elem>,
        Self::Elem: Clone,
    {
        self.extend(values);
        self
    }
}

impl<T> Sequence for Box<[T]> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn from_elems<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }

    fn append_owned<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = Self::Elem>,
        Self::Elem: Clone,
    {
        // Moving through Vec keeps the elements without cloning them.
        self.into_vec().append_owned(values).into_boxed_slice()
    }
}

impl<T> Sequence for Rc<[T]> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn from_elems<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }
}

impl<T> Sequence for Arc<[T]> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn from_elems<I: IntoIterator<Item = T>>(elems: I) -> Self {
        elems.into_iter().collect()
    }
}
