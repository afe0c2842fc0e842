//! Free functions over ordered sequences.
//!
//! # Purpose
//! Every function here is pure: it reads its input, calls any provided callback once per relevant
//! element in index order and returns a fresh value. Nothing is mutated in place and nothing can
//! fail on its own.
//!
//! # Method
//! The functions are grouped by family, and each family is re-exported here so callers can simply
//! `use sequence_ops::seq::*`.
//! - [`transform`]: callbacks applied across the elements (`map`, `filter`, `reduce`, ...).
//! - [`structural`]: reshaping without callbacks (`push`, `shift`, `splice`, ...).
//! - [`value`]: the dynamically shaped [`Value`] and [`is_slice`].

pub mod sequence;
#[cfg(feature = "structural")]
pub mod structural;
#[cfg(feature = "transform")]
pub mod transform;
#[cfg(feature = "value")]
pub mod value;

#[doc(inline)]
pub use sequence::Sequence;
#[cfg(feature = "structural")]
#[doc(inline)]
pub use structural::*;
#[cfg(feature = "transform")]
#[doc(inline)]
pub use transform::*;
#[cfg(feature = "value")]
#[doc(inline)]
pub use value::*;
