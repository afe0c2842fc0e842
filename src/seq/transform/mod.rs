//! Callback driven operations: mapping, filtering, searching and folding.
//!
//! Every callback receives a shared reference to the element. The `_index` variants also receive
//! the element's position in the input. Callbacks run in ascending index order, except for the
//! right folds which run in descending order, and each runs at most once per element.
//!
//! The [`fallible`] variants take callbacks returning [`Result`] and stop at the first error, which
//! is handed back exactly as the callback produced it.

pub mod fallible;
mod transform;


pub use fallible::*;
pub use transform::*;
