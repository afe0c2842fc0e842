//! A closed set of runtime shapes for values whose type is only known at a dynamic boundary, and
//! [`is_slice`] to ask whether such a value is a sequence.

mod value;


pub use value::*;
